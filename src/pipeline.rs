//! Composition of the three stages: load, then validate, then process.
//!
//! # Examples
//!
//! ```
//! use rail_pipeline::{call_pipeline, PipelineError};
//!
//! let result = call_pipeline("this_file_should_not_exist.txt");
//! assert_eq!(result, Err(PipelineError::read("this_file_should_not_exist.txt")));
//! ```

use std::path::Path;

use crate::macros::trace_event;
use crate::stages::{self, load_config, process_data, validate_data};
use crate::traits::RailExt;
use crate::types::{Outcome, Rail, StageResult};

/// Runs the pipeline on `path`, keeping the trace of the stages that ran.
///
/// Stages run in fixed order; once one fails, the remaining ones are skipped
/// and the rail carries that first failure to the end.
///
/// # Examples
///
/// ```
/// use rail_pipeline::{run_pipeline, stages, ErrorKind};
///
/// let rail = run_pipeline("missing.txt");
/// assert_eq!(rail.error().map(|e| e.kind()), Some(ErrorKind::Read));
/// assert_eq!(rail.completed_stages(), [stages::LOAD]);
/// ```
pub fn run_pipeline<P: AsRef<Path>>(path: P) -> Rail<Outcome> {
    let path = path.as_ref();
    trace_event!(debug, path = %path.display(), "pipeline started");

    let rail = load_config(path)
        .into_stage(stages::LOAD)
        .stage(stages::VALIDATE, validate_data)
        .stage(stages::PROCESS, process_data);

    trace_event!(
        debug,
        path = %path.display(),
        success = rail.is_success(),
        stages = rail.completed_stages().len(),
        "pipeline finished"
    );
    rail
}

/// Runs the pipeline on `path` and returns its terminal result.
#[inline]
pub fn call_pipeline<P: AsRef<Path>>(path: P) -> StageResult<Outcome> {
    run_pipeline(path).into_result()
}
