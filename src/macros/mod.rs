//! Crate-internal macros.
//!
//! - [`trace_event!`] - Forwards to the matching `tracing` macro when the
//!   `tracing` feature is enabled and expands to nothing otherwise, so stage
//!   code can log without sprinkling `#[cfg]` attributes.
//!
//! ```ignore
//! trace_event!(debug, path = %path, "config loaded");
//! trace_event!(warn, stage = "validate", "invalid field detected");
//! ```

#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {
        ::tracing::$level!($($arg)+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {};
}

pub(crate) use trace_event;
