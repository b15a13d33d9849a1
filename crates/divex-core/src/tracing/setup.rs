//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the DivEx tracing/logging system.
///
/// Reads `DIVEX_LOG` environment variable for per-module log levels.
/// Format: `DIVEX_LOG=divex_analysis::mining=debug,divex_core=warn`
///
/// Falls back to `divex=info` if `DIVEX_LOG` is not set or is invalid.
///
/// Idempotent: only the first call installs a subscriber. A subscriber
/// installed by the host beforehand is left in place.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("DIVEX_LOG")
            .unwrap_or_else(|_| EnvFilter::new("divex=info"));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
