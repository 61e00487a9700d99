//! Subscriber setup for the stage debug traces.
//!
//! Stages emit `tracing` events; nothing is printed until a subscriber is
//! installed. The demo binary calls [`init_tracing`] once at startup.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Directive used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_DIRECTIVE: &str = "rail_pipeline=debug";

/// Installs a stderr `fmt` subscriber filtered by `RUST_LOG`.
///
/// Falls back to [`DEFAULT_DIRECTIVE`]. Calling this more than once, or after
/// another global subscriber was set, is a no-op.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init()
        .ok();
}
