//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use rail_pipeline::prelude::*;
//!
//! let rail = run_pipeline("missing.txt");
//! assert_eq!(rail.error().map(PipelineError::kind), Some(ErrorKind::Read));
//! ```

// Core types
pub use crate::types::{
    Config, ErrorKind, Outcome, PipelineError, Rail, StageResult, ValidatedRecord,
};

// Traits
pub use crate::traits::{PipelineErrorVisitor, RailExt};

// Stages and composition
pub use crate::dispatch::{describe, handle_pipeline_result, Dispatcher, ReportConfig};
pub use crate::pipeline::{call_pipeline, run_pipeline};
pub use crate::stages::{load_config, process_data, validate_data};
