pub mod dispatch;
#[cfg(feature = "tracing")]
pub mod logging;
pub mod stages;
