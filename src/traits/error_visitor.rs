/// Exhaustive handler over every [`PipelineError`](crate::PipelineError) variant.
///
/// The trait has one required method per variant and no default bodies, so
/// an implementor cannot silently skip a kind of failure. Adding a variant to
/// the taxonomy adds a method here, which breaks every implementor at build
/// time until it handles the new case.
///
/// Payload fields are passed by reference, in declaration order.
///
/// # Examples
///
/// ```
/// use rail_pipeline::traits::PipelineErrorVisitor;
/// use rail_pipeline::PipelineError;
///
/// struct IsUserFault;
///
/// impl PipelineErrorVisitor for IsUserFault {
///     type Output = bool;
///
///     fn visit_read(&mut self, _source: &str) -> bool { true }
///     fn visit_parse(&mut self, _excerpt: &str, _position: u32) -> bool { true }
///     fn visit_validation(&mut self, _field: &str, _value: &str) -> bool { true }
///     fn visit_processing(&mut self, _stage: &str, _detail: &str) -> bool { false }
/// }
///
/// assert!(PipelineError::read("a.txt").accept(&mut IsUserFault));
/// assert!(!PipelineError::processing("Data Processing", "too short").accept(&mut IsUserFault));
/// ```
pub trait PipelineErrorVisitor {
    type Output;

    /// Called for [`PipelineError::ReadError`](crate::PipelineError::ReadError).
    fn visit_read(&mut self, source_identifier: &str) -> Self::Output;

    /// Called for [`PipelineError::ParseError`](crate::PipelineError::ParseError).
    fn visit_parse(&mut self, excerpt: &str, position: u32) -> Self::Output;

    /// Called for [`PipelineError::ValidationError`](crate::PipelineError::ValidationError).
    fn visit_validation(&mut self, field_name: &str, offending_value: &str) -> Self::Output;

    /// Called for [`PipelineError::ProcessingError`](crate::PipelineError::ProcessingError).
    fn visit_processing(&mut self, stage_name: &str, detail: &str) -> Self::Output;
}
