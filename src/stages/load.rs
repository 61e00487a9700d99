use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::macros::trace_event;
use crate::stages::{MALFORMED_MARKER, PARSE_ERROR_POSITION};
use crate::types::{Config, PipelineError, StageResult};

/// Reads the named source and wraps its text in a [`Config`].
///
/// # Errors
///
/// - [`PipelineError::ReadError`] if the source cannot be opened or read;
///   `source_identifier` is the path as given. Paths that are not valid
///   UTF-8 are reported lossily, with invalid bytes replaced by `U+FFFD`.
/// - [`PipelineError::ParseError`] with excerpt `"malformed"` and position
///   `1` if the content is empty or contains `"malformed"`.
///
/// Content is not required to be UTF-8: invalid sequences are replaced by
/// `U+FFFD` and never turn a readable source into a read error.
///
/// The file handle is closed before this function returns, on every path.
///
/// # Examples
///
/// ```
/// use rail_pipeline::{stages::load_config, PipelineError};
///
/// let err = load_config("no/such/file.txt").unwrap_err();
/// assert_eq!(err, PipelineError::read("no/such/file.txt"));
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> StageResult<Config> {
    let path = path.as_ref();
    let source_identifier = path.to_string_lossy();

    let content = read_source(path).map_err(|_err| {
        trace_event!(debug, path = %source_identifier, error = %_err, "load failed to open source");
        PipelineError::read(source_identifier.to_string())
    })?;

    if content.is_empty() || content.contains(MALFORMED_MARKER) {
        trace_event!(debug, path = %source_identifier, "load detected malformed config");
        return Err(PipelineError::parse(MALFORMED_MARKER, PARSE_ERROR_POSITION));
    }

    trace_event!(debug, path = %source_identifier, bytes = content.len(), "config loaded");
    Ok(Config::new(content))
}

fn read_source(path: &Path) -> std::io::Result<String> {
    let mut file = File::open(path)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;

    Ok(String::from_utf8(bytes)
        .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned()))
}
