use rail_pipeline::dispatch::{describe, DiagnosticMessage, Dispatcher, ReportConfig};
use rail_pipeline::traits::PipelineErrorVisitor;
use rail_pipeline::{Outcome, PipelineError};

fn render(result: &Result<Outcome, PipelineError>, config: ReportConfig) -> (String, String) {
    let mut dispatcher = Dispatcher::new(Vec::new(), Vec::new(), config);
    dispatcher.dispatch(result).unwrap();
    let (out, err) = dispatcher.into_inner();
    (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
}

#[test]
fn success_goes_to_output_stream() {
    let (out, err) = render(&Ok(Outcome::new(29)), ReportConfig::default());

    assert_eq!(out, "\nPipeline Succeeded! Final Result Code: 29\n");
    assert!(err.is_empty());
}

#[test]
fn failure_goes_to_error_stream() {
    let (out, err) = render(
        &Err(PipelineError::processing("Data Processing", "Input data too short for task")),
        ReportConfig::default(),
    );

    assert!(out.is_empty());
    assert_eq!(
        err,
        "\nPipeline Failed! Error details: Data Processing Error: Task 'Data Processing' failed. \
         Details: Input data too short for task\n"
    );
}

#[test]
fn compact_config_drops_blank_line() {
    let (out, _) = render(&Ok(Outcome::new(12)), ReportConfig::compact());

    assert_eq!(out, "Pipeline Succeeded! Final Result Code: 12\n");
}

#[test]
fn custom_headers_are_used() {
    let config = ReportConfig {
        leading_newline: false,
        success_header: "ok".into(),
        failure_header: "error:".into(),
    };
    let (_, err) = render(&Err(PipelineError::read("x.txt")), config);

    assert_eq!(err, "error: Configuration Read Error: Could not open file 'x.txt'\n");
}

#[test]
fn describe_covers_every_kind() {
    assert_eq!(
        describe(&PipelineError::read("non_existent_config.txt")),
        "Configuration Read Error: Could not open file 'non_existent_config.txt'"
    );
    assert_eq!(
        describe(&PipelineError::parse("malformed", 1)),
        "Configuration Parse Error: Malformed content at line 1 (Context: 'malformed')"
    );
    assert_eq!(
        describe(&PipelineError::validation("invalid_field", "contains disallowed value")),
        "Data Validation Error: Field 'invalid_field' has invalid value 'contains disallowed value'"
    );
    assert_eq!(
        describe(&PipelineError::processing("Data Processing", "Input data too short for task")),
        "Data Processing Error: Task 'Data Processing' failed. Details: Input data too short for task"
    );
}

#[test]
fn diagnostic_message_is_usable_directly() {
    let mut visitor = DiagnosticMessage;

    assert_eq!(
        visitor.visit_parse("oops", 7),
        "Configuration Parse Error: Malformed content at line 7 (Context: 'oops')"
    );
}
