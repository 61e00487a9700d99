//! Values handed from one stage to the next.
//!
//! Each record is produced by exactly one stage and consumed (moved) by the
//! next; none of them is shared or mutated after construction.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Raw text acquired by the load stage.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Config {
    pub raw_text: String,
}

/// Text that passed validation, carrying the `"Validated: "` prefix.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidatedRecord {
    pub normalized_text: String,
}

/// Final product of the pipeline.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Outcome {
    /// Length of the validated text, in bytes.
    pub score: usize,
}

impl Config {
    #[inline]
    pub fn new<S: Into<String>>(raw_text: S) -> Self {
        Self { raw_text: raw_text.into() }
    }
}

impl ValidatedRecord {
    #[inline]
    pub fn new<S: Into<String>>(normalized_text: S) -> Self {
        Self { normalized_text: normalized_text.into() }
    }
}

impl Outcome {
    #[inline]
    pub const fn new(score: usize) -> Self {
        Self { score }
    }
}
