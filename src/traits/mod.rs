//! Traits at the seams of the pipeline.
//!
//! - [`PipelineErrorVisitor`]: exhaustive, per-variant handling of failures
//! - [`RailExt`]: lifting a plain `Result` onto a [`Rail`](crate::Rail)

pub mod error_visitor;
pub mod rail_ext;

pub use error_visitor::PipelineErrorVisitor;
pub use rail_ext::RailExt;
