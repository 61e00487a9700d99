use crate::macros::trace_event;
use crate::stages::{MIN_PROCESSABLE_LEN, PROCESSING_STAGE_NAME, TOO_SHORT_DETAIL};
use crate::types::{Outcome, PipelineError, StageResult, ValidatedRecord};

/// Scores a validated record by its text length.
///
/// The length is measured on the full normalized text, prefix included.
///
/// # Errors
///
/// [`PipelineError::ProcessingError`] for stage `"Data Processing"` if the
/// text is shorter than 10 bytes.
///
/// # Examples
///
/// ```
/// use rail_pipeline::{stages::process_data, ErrorKind, ValidatedRecord};
///
/// let outcome = process_data(ValidatedRecord::new("Validated: xyz")).unwrap();
/// assert_eq!(outcome.score, 14);
///
/// let err = process_data(ValidatedRecord::new("short")).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Processing);
/// ```
pub fn process_data(record: ValidatedRecord) -> StageResult<Outcome> {
    let len = record.normalized_text.len();
    if len < MIN_PROCESSABLE_LEN {
        trace_event!(warn, len, "processing detected data too short");
        return Err(PipelineError::processing(PROCESSING_STAGE_NAME, TOO_SHORT_DETAIL));
    }

    trace_event!(debug, score = len, "data processed");
    Ok(Outcome::new(len))
}
