//! Horizon emulator entry point.
//!
//! Responsibilities:
//! - Parse command-line arguments.
//! - Write a default config file on first run and load the configuration.
//! - Install the process-wide log subscriber described by the configuration.
//!
//! Does NOT handle:
//! - Configuration semantics (see `crates/config`).
//!
//! Invariants:
//! - Startup logging goes through a scoped bootstrap subscriber; the global
//!   subscriber is installed only once the configuration is known.
//! - Any configuration failure is fatal and exits with `ExitCode::ConfigError`.

mod args;
mod error;
mod logging;

use anyhow::{Context, Result};
use args::Cli;
use clap::Parser;
use error::{ExitCode, ExitCodeExt};
use horizon_config::{Config, ConfigLoader, TracingSink};

fn main() {
    let cli = Cli::parse();

    let config = match tracing::subscriber::with_default(logging::bootstrap_subscriber(), || {
        tracing::info!("Starting Horizon emulator, please wait...");
        let result = load(&cli);
        if let Err(ref e) = result {
            tracing::error!(error = %format!("{e:#}"), "Failed to load configuration");
        }
        result
    }) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(e.exit_code().as_i32());
        }
    };

    if let Err(e) = logging::init(&config.logging) {
        eprintln!("Error: {e:#}");
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    tracing::info!(
        ip = %config.server.ip,
        port = config.server.port,
        environment = %config.server.environment,
        "Horizon emulator started"
    );
}

fn load(cli: &Cli) -> Result<Config> {
    let sink = TracingSink;
    let loader = ConfigLoader::new(&cli.config).with_env_overlay(!cli.no_env);

    if !cli.no_create {
        loader
            .create_default(&sink)
            .context("failed to create default configuration")?;
    }

    loader
        .load(&sink)
        .with_context(|| format!("failed to load configuration from {}", cli.config.display()))
}
