//! Diagnostic logging for the demos.
//!
//! Demo output is the product, so the subscriber writes to stderr and stays at
//! `warn` unless `RUST_LOG` or the scenario file asks for more.

use std::sync::OnceLock;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Install the global subscriber once. Later calls are no-ops.
pub fn init(default_level: &str) {
    LOGGER_INITIALIZED.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_level));

        let result = tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .try_init();

        if result.is_err() {
            tracing::debug!("global tracing subscriber already set, keeping it");
        }
    });
}
