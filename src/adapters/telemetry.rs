//! Tracing subscriber setup.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LoggingConfig;

static INIT: Once = Once::new();

/// Installs the global subscriber from `LoggingConfig`.
///
/// `RUST_LOG`, when set, overrides the configured level. Safe to call more
/// than once; only the first call has an effect.
pub fn init_tracing(config: &LoggingConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&config.level))
            .unwrap_or_else(|_| EnvFilter::new("info"));

        let registry = tracing_subscriber::registry().with(filter);
        if config.json {
            registry.with(fmt::layer().json().with_target(true)).init();
        } else {
            registry.with(fmt::layer().with_target(true)).init();
        }
    });
}
