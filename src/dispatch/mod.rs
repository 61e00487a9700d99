//! Exhaustive reporting of the terminal pipeline result.
//!
//! A [`Dispatcher`] consumes the final [`StageResult<Outcome>`] once. On
//! success it writes the outcome score to its output stream; on failure it
//! writes a kind-specific diagnostic to its error stream. The per-kind
//! wording comes from [`DiagnosticMessage`], a [`PipelineErrorVisitor`]:
//! it has no fallback arm, so a new error kind does not build until it has
//! a message.
//!
//! # Examples
//!
//! ```
//! use rail_pipeline::dispatch::{Dispatcher, ReportConfig};
//! use rail_pipeline::PipelineError;
//!
//! let mut dispatcher = Dispatcher::new(Vec::new(), Vec::new(), ReportConfig::compact());
//! dispatcher.dispatch(&Err(PipelineError::read("gone.txt"))).unwrap();
//!
//! let (out, err) = dispatcher.into_inner();
//! assert!(out.is_empty());
//! assert_eq!(
//!     String::from_utf8(err).unwrap(),
//!     "Pipeline Failed! Error details: Configuration Read Error: Could not open file 'gone.txt'\n"
//! );
//! ```

mod report_config;

pub use report_config::ReportConfig;

use std::io::{self, Write};

use crate::macros::trace_event;
use crate::traits::PipelineErrorVisitor;
use crate::types::{Outcome, PipelineError, StageResult};

/// Renders the user-facing diagnostic for each error kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiagnosticMessage;

impl PipelineErrorVisitor for DiagnosticMessage {
    type Output = String;

    fn visit_read(&mut self, source_identifier: &str) -> String {
        format!("Configuration Read Error: Could not open file '{source_identifier}'")
    }

    fn visit_parse(&mut self, excerpt: &str, position: u32) -> String {
        format!("Configuration Parse Error: Malformed content at line {position} (Context: '{excerpt}')")
    }

    fn visit_validation(&mut self, field_name: &str, offending_value: &str) -> String {
        format!("Data Validation Error: Field '{field_name}' has invalid value '{offending_value}'")
    }

    fn visit_processing(&mut self, stage_name: &str, detail: &str) -> String {
        format!("Data Processing Error: Task '{stage_name}' failed. Details: {detail}")
    }
}

/// Returns the user-facing diagnostic for `error`.
///
/// # Examples
///
/// ```
/// use rail_pipeline::{dispatch::describe, PipelineError};
///
/// let msg = describe(&PipelineError::validation("invalid_field", "contains disallowed value"));
/// assert_eq!(
///     msg,
///     "Data Validation Error: Field 'invalid_field' has invalid value 'contains disallowed value'"
/// );
/// ```
#[inline]
pub fn describe(error: &PipelineError) -> String {
    error.accept(&mut DiagnosticMessage)
}

/// Writes success reports to `out` and failure reports to `err`.
#[derive(Debug)]
pub struct Dispatcher<O, E> {
    out: O,
    err: E,
    config: ReportConfig,
}

impl<O: Write, E: Write> Dispatcher<O, E> {
    pub fn new(out: O, err: E, config: ReportConfig) -> Self {
        Self { out, err, config }
    }

    /// Reports `result` on the stream matching its track.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised while writing the report.
    pub fn dispatch(&mut self, result: &StageResult<Outcome>) -> io::Result<()> {
        match result {
            Ok(outcome) => {
                if self.config.leading_newline {
                    writeln!(self.out)?;
                }
                writeln!(self.out, "{} {}", self.config.success_header, outcome.score)?;
                self.out.flush()
            },
            Err(error) => {
                trace_event!(debug, kind = %error.kind(), "dispatching failure");
                if self.config.leading_newline {
                    writeln!(self.err)?;
                }
                writeln!(self.err, "{} {}", self.config.failure_header, describe(error))?;
                self.err.flush()
            },
        }
    }

    /// Consumes the dispatcher, returning its output and error streams.
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}

impl Dispatcher<io::Stdout, io::Stderr> {
    /// Dispatcher bound to the process's standard streams.
    pub fn stdio(config: ReportConfig) -> Self {
        Self::new(io::stdout(), io::stderr(), config)
    }
}

/// Reports `result` on stdout/stderr with the default wording.
///
/// Write failures on the standard streams are logged and otherwise ignored;
/// the pipeline outcome is never turned into a process failure.
pub fn handle_pipeline_result(result: &StageResult<Outcome>) {
    if let Err(_err) = Dispatcher::stdio(ReportConfig::default()).dispatch(result) {
        trace_event!(warn, error = %_err, "failed to write pipeline report");
    }
}
