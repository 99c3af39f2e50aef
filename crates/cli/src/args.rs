//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Resolve the config file path from flags or environment.
//!
//! Non-responsibilities:
//! - Does not load configuration (see `main`).

use clap::Parser;
use horizon_config::constants::DEFAULT_CONFIG_FILE;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "horizon")]
#[command(about = "Horizon emulator server", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the INI configuration file.
    ///
    /// A file holding every default is written here if it does not exist.
    #[arg(
        short,
        long,
        env = "HORIZON_CONFIG",
        value_name = "FILE",
        default_value = DEFAULT_CONFIG_FILE
    )]
    pub config: PathBuf,

    /// Do not write a default config file when none exists.
    #[arg(long)]
    pub no_create: bool,

    /// Ignore SECTION_KEY environment variable overrides.
    #[arg(long)]
    pub no_env: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["horizon"]).unwrap();
        assert!(!cli.no_create);
        assert!(!cli.no_env);
    }

    #[test]
    fn test_flags() {
        let cli =
            Cli::try_parse_from(["horizon", "--config", "/etc/horizon.ini", "--no-env"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("/etc/horizon.ini"));
        assert!(cli.no_env);
    }
}
