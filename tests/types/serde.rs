use rail_pipeline::{Config, ErrorKind, Outcome, PipelineError};

#[test]
fn pipeline_error_serializes_as_tagged_variant() {
    let err = PipelineError::parse("malformed", 1);
    let json = serde_json::to_value(&err).unwrap();

    assert_eq!(json["ParseError"]["excerpt"], "malformed");
    assert_eq!(json["ParseError"]["position"], 1);

    let back: PipelineError = serde_json::from_value(json).unwrap();
    assert_eq!(back, err);
}

#[test]
fn records_and_kinds_serialize() {
    assert_eq!(serde_json::to_string(&Outcome::new(29)).unwrap(), r#"{"score":29}"#);
    assert_eq!(serde_json::to_string(&Config::new("x")).unwrap(), r#"{"raw_text":"x"}"#);
    assert_eq!(serde_json::to_string(&ErrorKind::Validation).unwrap(), r#""Validation""#);
}
