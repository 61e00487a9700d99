use rail_pipeline::stages::{process_data, MIN_PROCESSABLE_LEN, VALIDATED_PREFIX};
use rail_pipeline::{Outcome, PipelineError, ValidatedRecord};

#[test]
fn scores_by_text_length() {
    let outcome = process_data(ValidatedRecord::new("Validated: valid_data_content")).unwrap();

    assert_eq!(outcome, Outcome::new(29));
}

#[test]
fn short_text_is_a_processing_error() {
    let err = process_data(ValidatedRecord::new("short")).unwrap_err();

    assert_eq!(
        err,
        PipelineError::processing("Data Processing", "Input data too short for task")
    );
}

#[test]
fn threshold_is_ten_bytes() {
    assert!(process_data(ValidatedRecord::new("123456789")).is_err());
    assert_eq!(process_data(ValidatedRecord::new("1234567890")), Ok(Outcome::new(10)));
    assert_eq!(MIN_PROCESSABLE_LEN, 10);
}

#[test]
fn prefix_alone_clears_threshold() {
    assert_eq!(VALIDATED_PREFIX.len(), 11);
    assert_eq!(process_data(ValidatedRecord::new(VALIDATED_PREFIX)), Ok(Outcome::new(11)));
}
