//! Error taxonomy, stage records and the [`Rail`] result container.
//!
//! # Examples
//!
//! ```
//! use rail_pipeline::{Config, PipelineError, Rail, ValidatedRecord};
//!
//! let rail = Rail::success(Config::new("payload"))
//!     .chain(|cfg| Ok::<_, PipelineError>(ValidatedRecord::new(cfg.raw_text)));
//!
//! assert_eq!(rail.value().map(|r| r.normalized_text.as_str()), Some("payload"));
//! ```
use smallvec::SmallVec;

pub mod pipeline_error;
pub mod rail;
pub mod records;

pub use pipeline_error::*;
pub use rail::*;
pub use records::*;

/// Result alias returned by every stage function.
pub type StageResult<T> = Result<T, PipelineError>;

/// Names of the stages a [`Rail`] has run.
///
/// Inline storage covers the three stages of the standard pipeline without
/// touching the heap.
pub type StageTrace = SmallVec<[&'static str; 3]>;
