//! Log subscriber setup.
//!
//! Responsibilities:
//! - Provide the temporary subscriber used while configuration loads.
//! - Build the process-wide subscriber from `LoggingConfig`.
//!
//! Invariants:
//! - `RUST_LOG`, when set and valid, takes precedence over `logging.level`.
//! - JSON output never carries ANSI color codes.

use anyhow::{Context, Result};
use horizon_config::LoggingConfig;
use tracing::Subscriber;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Subscriber scoped to startup, before the config file says how to log.
pub fn bootstrap_subscriber() -> impl Subscriber + Send + Sync {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer())
}

/// Filter for the configured level, unless `RUST_LOG` overrides it.
pub fn build_filter(level: &str) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(level).with_context(|| format!("invalid logging.level '{level}'"))
}

/// Install the global subscriber described by `config`.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let registry = tracing_subscriber::registry().with(build_filter(&config.level)?);

    let installed = if config.json {
        registry
            .with(fmt::layer().json().with_ansi(false))
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_ansi(config.console_color))
            .try_init()
    };
    installed.context("failed to install log subscriber")
}
