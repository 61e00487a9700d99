/// Wording and layout of the reports written by a [`Dispatcher`](super::Dispatcher).
///
/// # Examples
///
/// ```
/// use rail_pipeline::dispatch::ReportConfig;
///
/// let config = ReportConfig { success_header: "OK, code:".into(), ..Default::default() };
/// assert!(config.leading_newline);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Emit a blank line before each report.
    pub leading_newline: bool,
    /// Text preceding the outcome score on success.
    pub success_header: String,
    /// Text preceding the diagnostic message on failure.
    pub failure_header: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            leading_newline: true,
            success_header: "Pipeline Succeeded! Final Result Code:".into(),
            failure_header: "Pipeline Failed! Error details:".into(),
        }
    }
}

impl ReportConfig {
    /// Default wording without the leading blank line.
    #[inline]
    pub fn compact() -> Self {
        Self { leading_newline: false, ..Default::default() }
    }
}
