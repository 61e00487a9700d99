//! Demo driver: runs the pipeline against a set of fixture files, or
//! against the paths given on the command line.
//!
//! Built only with the `demo` feature: `cargo run --features demo`.

use std::fs;
use std::path::Path;

use rail_pipeline::call_pipeline;
use rail_pipeline::dispatch::handle_pipeline_result;

/// (banner, file name, content). `None` content means the file is never created.
const SCENARIOS: [(&str, &str, Option<&str>); 5] = [
    ("Successful Execution", "valid_config.txt", Some("valid_data_content")),
    ("Config Read Error", "non_existent_config.txt", None),
    ("Config Parse Error", "malformed_config.txt", Some("malformed content")),
    ("Validation Error", "invalid_data_config.txt", Some("valid_data\ninvalid_field")),
    ("Processing Error", "short_data_config.txt", Some("short")),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing")]
    rail_pipeline::logging::init_tracing();

    let paths: Vec<String> = std::env::args().skip(1).collect();
    if !paths.is_empty() {
        for path in &paths {
            println!("--- {path} ---");
            handle_pipeline_result(&call_pipeline(path));
        }
        return Ok(());
    }

    // Fixtures are removed when `dir` is dropped.
    let dir = tempfile::tempdir()?;
    run_scenarios(dir.path())?;
    Ok(())
}

fn run_scenarios(dir: &Path) -> std::io::Result<()> {
    for (index, (banner, file_name, content)) in SCENARIOS.iter().enumerate() {
        if index > 0 {
            println!();
        }
        println!("--- Scenario {}: {banner} ---", index + 1);

        let path = dir.join(file_name);
        if let Some(content) = content {
            fs::write(&path, content)?;
        }
        handle_pipeline_result(&call_pipeline(&path));
    }
    Ok(())
}
