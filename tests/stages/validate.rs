use rail_pipeline::stages::validate_data;
use rail_pipeline::{Config, PipelineError, ValidatedRecord};

#[test]
fn prefixes_validated_text() {
    let record = validate_data(Config::new("valid_data_content")).unwrap();

    assert_eq!(record, ValidatedRecord::new("Validated: valid_data_content"));
}

#[test]
fn invalid_field_marker_is_rejected() {
    let err = validate_data(Config::new("valid_data\ninvalid_field")).unwrap_err();

    assert_eq!(
        err,
        PipelineError::ValidationError {
            field_name: "invalid_field".into(),
            offending_value: "contains disallowed value".into(),
        }
    );
}

#[test]
fn marker_anywhere_in_text_is_rejected() {
    for text in ["invalid_field", "xxinvalid_fieldxx", "a\n\ninvalid_field\n"] {
        assert!(validate_data(Config::new(text)).is_err(), "{text:?} should be rejected");
    }
}
