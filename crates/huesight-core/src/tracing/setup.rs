//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Initialize the HueSight tracing/logging system.
///
/// Reads `HUESIGHT_LOG` for per-module log levels, e.g.
/// `HUESIGHT_LOG=huesight_assessment=debug,huesight_storage=warn`.
/// Falls back to `huesight=info` if unset or invalid.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new("huesight=info"));

        // A host application may already own the global subscriber.
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_line_number(true))
            .with(filter)
            .try_init();
    });
}
