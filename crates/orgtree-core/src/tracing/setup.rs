//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Initialize the orgtree tracing/logging system.
///
/// Reads `ORGTREE_LOG` for per-crate log levels.
/// Format: `ORGTREE_LOG=orgtree_analysis=debug,orgtree_storage=warn`
///
/// Falls back to `orgtree=info` if `ORGTREE_LOG` is not set or is invalid.
/// Output goes to stderr; stdout is reserved for query results.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new("orgtree=info"));

        // try_init: a test harness or embedding binary may already own the global subscriber.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
