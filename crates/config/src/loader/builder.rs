//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` bound to one config file.
//! - Run the two-pass load: scan explicit file values, then resolve defaults
//!   and environment overrides into the final `Config`.
//! - Write a default config file when none exists.
//!
//! Does NOT handle:
//! - INI parsing details (delegated to ini_file.rs).
//! - Layer precedence (delegated to store.rs).
//! - Installing log subscribers (done by the binary).
//!
//! Invariants / Assumptions:
//! - Explicit file values take precedence over environment variables,
//!   which take precedence over schema defaults.
//! - The security scan sees only explicit file values: no defaults, no
//!   environment overrides, so placeholder credentials never raise alerts.
//! - Every step's failure aborts the load; alerts never do.

use std::path::{Path, PathBuf};

use super::defaults::{apply_defaults, resolve_defaults};
use super::error::ConfigError;
use super::ini_file::{read_ini, write_ini};
use super::store::KeyValueStore;
use super::unmarshal::{config_from_tree, declared_environment, unmarshal_tree};
use crate::constants::DEFAULT_CONFIG_FILE;
use crate::events::{ConfigEvent, EventSink};
use crate::scanner::check_security_alerts;
use crate::schema::CONFIG_SCHEMA;
use crate::types::Config;

/// Configuration loader for a single INI file.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_path: PathBuf,
    env_overlay: bool,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIG_FILE)
    }
}

impl ConfigLoader {
    /// Create a loader for the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            env_overlay: true,
        }
    }

    /// Enable or disable `SECTION_KEY` environment variable overrides.
    pub fn with_env_overlay(mut self, enabled: bool) -> Self {
        self.env_overlay = enabled;
        self
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Load the config file, scan it for sensitive values and resolve the final `Config`.
    ///
    /// # Errors
    ///
    /// - `ConfigError::Read` if the file is missing, unreadable or not valid INI.
    /// - `ConfigError::Unmarshal` if a value does not fit its field, or the
    ///   declared environment is not recognized.
    pub fn load(&self, sink: &dyn EventSink) -> Result<Config, ConfigError> {
        let mut store = KeyValueStore::from_entries(read_ini(&self.config_path)?);

        let explicit = unmarshal_tree(&store, CONFIG_SCHEMA)?;
        match declared_environment(&explicit)? {
            Some(environment) => {
                check_security_alerts(CONFIG_SCHEMA, &explicit, environment, sink);
            }
            None => sink.emit(&ConfigEvent::ScanSkipped {
                path: self.config_path.clone(),
            }),
        }

        if self.env_overlay {
            store.enable_automatic_env();
        }
        apply_defaults(&mut store, CONFIG_SCHEMA);

        let config = config_from_tree(&unmarshal_tree(&store, CONFIG_SCHEMA)?)?;
        sink.emit(&ConfigEvent::ConfigLoaded {
            path: self.config_path.clone(),
            environment: config.server.environment,
        });
        Ok(config)
    }

    /// Write a config file holding every default, unless the path already exists.
    ///
    /// Returns `true` if a file was written. Parent directories are not created.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Write` if the file cannot be created.
    pub fn create_default(&self, sink: &dyn EventSink) -> Result<bool, ConfigError> {
        if self.config_path.exists() {
            return Ok(false);
        }

        let defaults = resolve_defaults(CONFIG_SCHEMA, "");
        write_ini(&self.config_path, &defaults).map_err(|source| ConfigError::Write {
            path: self.config_path.clone(),
            source,
        })?;

        sink.emit(&ConfigEvent::DefaultConfigWritten {
            path: self.config_path.clone(),
        });
        Ok(true)
    }
}

/// Load the config file at `path`. See [`ConfigLoader::load`].
pub fn load_config(path: impl AsRef<Path>, sink: &dyn EventSink) -> Result<Config, ConfigError> {
    ConfigLoader::new(path.as_ref()).load(sink)
}

/// Write a default config file at `path` if none exists. See [`ConfigLoader::create_default`].
pub fn create_default_config(
    path: impl AsRef<Path>,
    sink: &dyn EventSink,
) -> Result<bool, ConfigError> {
    ConfigLoader::new(path.as_ref()).create_default(sink)
}
