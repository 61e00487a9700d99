//! A railway-oriented pipeline: load, validate, process.
//!
//! Three fallible stages are chained on a [`Rail`]. The first failure
//! switches the rail to its failure track, every later stage is skipped, and
//! the failure arrives at the end untouched. The terminal result is then
//! handed once to a [`dispatch::Dispatcher`], which reports every
//! [`PipelineError`] kind through an exhaustive visitor.
//!
//! # Examples
//!
//! ## Running the Pipeline
//!
//! ```
//! use std::io::Write;
//! use rail_pipeline::{call_pipeline, Outcome};
//!
//! let mut file = tempfile::NamedTempFile::new().unwrap();
//! write!(file, "valid_data_content").unwrap();
//!
//! let outcome = call_pipeline(file.path()).unwrap();
//! assert_eq!(outcome, Outcome::new("Validated: valid_data_content".len()));
//! ```
//!
//! ## Short-Circuiting
//!
//! ```
//! use rail_pipeline::{run_pipeline, stages, PipelineError};
//!
//! let rail = run_pipeline("non_existent_config.txt");
//! assert_eq!(rail.error(), Some(&PipelineError::read("non_existent_config.txt")));
//! assert_eq!(rail.completed_stages(), [stages::LOAD]);
//! ```
//!
//! ## Exhaustive Handling
//!
//! ```
//! use rail_pipeline::{call_pipeline, PipelineError};
//!
//! match call_pipeline("missing.txt") {
//!     Ok(outcome) => println!("score {}", outcome.score),
//!     Err(PipelineError::ReadError { source_identifier }) => {
//!         assert_eq!(source_identifier, "missing.txt")
//!     },
//!     Err(PipelineError::ParseError { .. }) => unreachable!(),
//!     Err(PipelineError::ValidationError { .. }) => unreachable!(),
//!     Err(PipelineError::ProcessingError { .. }) => unreachable!(),
//! }
//! ```

/// Crate-internal macros
pub(crate) mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Traits at the seams of the pipeline
pub mod traits;
/// Error taxonomy, stage records and the `Rail` container
pub mod types;

/// Terminal result reporting
pub mod dispatch;
/// Stage composition
pub mod pipeline;
/// The load, validate and process stages
pub mod stages;

/// Tracing subscriber setup (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod logging;

pub use pipeline::{call_pipeline, run_pipeline};
pub use traits::*;
pub use types::*;
