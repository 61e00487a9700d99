//! The closed error taxonomy of the pipeline.
//!
//! Every stage fails with exactly one [`PipelineError`] variant, local to its
//! own responsibility. The enum is intentionally not `#[non_exhaustive]`:
//! matches outside this crate must name every variant, so introducing a new
//! kind of failure breaks every handler at build time instead of falling
//! into a default branch.
//!
//! # Examples
//!
//! ```
//! use rail_pipeline::{ErrorKind, PipelineError};
//!
//! let err = PipelineError::read("missing.txt");
//! assert_eq!(err.kind(), ErrorKind::Read);
//! assert_eq!(err.to_string(), "failed to read source 'missing.txt'");
//! ```

use crate::traits::PipelineErrorVisitor;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A failure raised by one of the pipeline stages.
///
/// `Display` gives a short, lowercase message for logs and error chains; the
/// user-facing report is produced by [`crate::dispatch`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum PipelineError {
    /// The named source could not be opened or read.
    #[error("failed to read source '{source_identifier}'")]
    ReadError { source_identifier: String },

    /// The source was read but its content is empty or malformed.
    #[error("malformed content at line {position} near '{excerpt}'")]
    ParseError { excerpt: String, position: u32 },

    /// A field failed its semantic check.
    #[error("field '{field_name}' has invalid value '{offending_value}'")]
    ValidationError { field_name: String, offending_value: String },

    /// A downstream task precondition was not met.
    #[error("task '{stage_name}' failed: {detail}")]
    ProcessingError { stage_name: String, detail: String },
}

/// Payload-free discriminant of [`PipelineError`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ErrorKind {
    Read,
    Parse,
    Validation,
    Processing,
}

impl ErrorKind {
    /// Every kind, in pipeline order.
    pub const ALL: [ErrorKind; 4] =
        [ErrorKind::Read, ErrorKind::Parse, ErrorKind::Validation, ErrorKind::Processing];

    /// Short label used in log fields.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Read => "read",
            ErrorKind::Parse => "parse",
            ErrorKind::Validation => "validation",
            ErrorKind::Processing => "processing",
        }
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PipelineError {
    /// Creates a [`PipelineError::ReadError`] for the given source.
    #[inline]
    pub fn read<S: Into<String>>(source_identifier: S) -> Self {
        Self::ReadError { source_identifier: source_identifier.into() }
    }

    /// Creates a [`PipelineError::ParseError`].
    #[inline]
    pub fn parse<S: Into<String>>(excerpt: S, position: u32) -> Self {
        Self::ParseError { excerpt: excerpt.into(), position }
    }

    /// Creates a [`PipelineError::ValidationError`].
    #[inline]
    pub fn validation<F, V>(field_name: F, offending_value: V) -> Self
    where
        F: Into<String>,
        V: Into<String>,
    {
        Self::ValidationError { field_name: field_name.into(), offending_value: offending_value.into() }
    }

    /// Creates a [`PipelineError::ProcessingError`].
    #[inline]
    pub fn processing<S, D>(stage_name: S, detail: D) -> Self
    where
        S: Into<String>,
        D: Into<String>,
    {
        Self::ProcessingError { stage_name: stage_name.into(), detail: detail.into() }
    }

    /// Returns the discriminant of this error.
    #[inline]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::ReadError { .. } => ErrorKind::Read,
            Self::ParseError { .. } => ErrorKind::Parse,
            Self::ValidationError { .. } => ErrorKind::Validation,
            Self::ProcessingError { .. } => ErrorKind::Processing,
        }
    }

    /// Hands the payload of this error to the matching visitor method.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_pipeline::traits::PipelineErrorVisitor;
    /// use rail_pipeline::PipelineError;
    ///
    /// struct Field;
    ///
    /// impl PipelineErrorVisitor for Field {
    ///     type Output = Option<String>;
    ///
    ///     fn visit_read(&mut self, _: &str) -> Self::Output { None }
    ///     fn visit_parse(&mut self, _: &str, _: u32) -> Self::Output { None }
    ///     fn visit_validation(&mut self, field: &str, _: &str) -> Self::Output {
    ///         Some(field.to_string())
    ///     }
    ///     fn visit_processing(&mut self, _: &str, _: &str) -> Self::Output { None }
    /// }
    ///
    /// let err = PipelineError::validation("invalid_field", "contains disallowed value");
    /// assert_eq!(err.accept(&mut Field).as_deref(), Some("invalid_field"));
    /// ```
    pub fn accept<V>(&self, visitor: &mut V) -> V::Output
    where
        V: PipelineErrorVisitor + ?Sized,
    {
        match self {
            Self::ReadError { source_identifier } => visitor.visit_read(source_identifier),
            Self::ParseError { excerpt, position } => visitor.visit_parse(excerpt, *position),
            Self::ValidationError { field_name, offending_value } => {
                visitor.visit_validation(field_name, offending_value)
            },
            Self::ProcessingError { stage_name, detail } => {
                visitor.visit_processing(stage_name, detail)
            },
        }
    }
}
