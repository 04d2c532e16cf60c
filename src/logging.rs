//! Diagnostic logging.
//!
//! stdout carries the JSON-lines protocol, so all log output goes to stderr.

use std::io::IsTerminal;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::Verbosity;

/// Install the global tracing subscriber.
///
/// The level comes from command-line flags only. Calling this twice is
/// harmless; the second call keeps the first subscriber.
pub fn init(verbosity: Verbosity) {
    let filter = EnvFilter::new(verbosity.filter_directive());

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false),
        )
        .try_init();
}
