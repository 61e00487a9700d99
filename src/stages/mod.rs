//! The three stage functions, in pipeline order.
//!
//! Each stage consumes the previous stage's record and either produces the
//! next one or fails with the single [`PipelineError`](crate::PipelineError)
//! variant it is responsible for:
//!
//! | Stage | Input | Output | Failure |
//! |-------|-------|--------|---------|
//! | [`load_config`] | path | [`Config`](crate::Config) | `ReadError`, `ParseError` |
//! | [`validate_data`] | `Config` | [`ValidatedRecord`](crate::ValidatedRecord) | `ValidationError` |
//! | [`process_data`] | `ValidatedRecord` | [`Outcome`](crate::Outcome) | `ProcessingError` |
//!
//! The sentinels below stand in for real parsing and validation rules.

mod load;
mod process;
mod validate;

pub use load::load_config;
pub use process::process_data;
pub use validate::validate_data;

/// Stage name recorded in the trace for [`load_config`].
pub const LOAD: &str = "load";
/// Stage name recorded in the trace for [`validate_data`].
pub const VALIDATE: &str = "validate";
/// Stage name recorded in the trace for [`process_data`].
pub const PROCESS: &str = "process";

/// Content marker that makes loading fail with a parse error.
pub const MALFORMED_MARKER: &str = "malformed";
/// Fixed position reported by every parse error.
pub const PARSE_ERROR_POSITION: u32 = 1;

/// Content marker that makes validation fail.
pub const INVALID_FIELD_MARKER: &str = "invalid_field";
/// Offending value reported by validation failures.
pub const DISALLOWED_VALUE: &str = "contains disallowed value";
/// Prefix prepended to every validated record.
pub const VALIDATED_PREFIX: &str = "Validated: ";

/// Records shorter than this many bytes cannot be processed.
pub const MIN_PROCESSABLE_LEN: usize = 10;
/// Stage name reported by processing failures.
pub const PROCESSING_STAGE_NAME: &str = "Data Processing";
/// Detail reported by processing failures.
pub const TOO_SHORT_DETAIL: &str = "Input data too short for task";
