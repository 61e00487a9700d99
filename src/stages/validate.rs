use crate::macros::trace_event;
use crate::stages::{DISALLOWED_VALUE, INVALID_FIELD_MARKER, VALIDATED_PREFIX};
use crate::types::{Config, PipelineError, StageResult, ValidatedRecord};

/// Checks the raw text for disallowed fields and prefixes it on success.
///
/// # Errors
///
/// [`PipelineError::ValidationError`] with field `"invalid_field"` and value
/// `"contains disallowed value"` if the text contains `"invalid_field"`.
///
/// # Examples
///
/// ```
/// use rail_pipeline::{stages::validate_data, Config};
///
/// let record = validate_data(Config::new("abc")).unwrap();
/// assert_eq!(record.normalized_text, "Validated: abc");
/// ```
pub fn validate_data(config: Config) -> StageResult<ValidatedRecord> {
    if config.raw_text.contains(INVALID_FIELD_MARKER) {
        trace_event!(warn, field = INVALID_FIELD_MARKER, "validation detected invalid field");
        return Err(PipelineError::validation(INVALID_FIELD_MARKER, DISALLOWED_VALUE));
    }

    trace_event!(debug, "data validated");
    let mut normalized_text = String::with_capacity(VALIDATED_PREFIX.len() + config.raw_text.len());
    normalized_text.push_str(VALIDATED_PREFIX);
    normalized_text.push_str(&config.raw_text);
    Ok(ValidatedRecord { normalized_text })
}
