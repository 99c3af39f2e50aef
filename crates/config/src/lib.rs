//! Configuration management for the Horizon emulator.
//!
//! This crate loads the server configuration from an INI file, layers
//! environment variable overrides and schema defaults on top, and scans
//! explicitly configured values for credentials that should not appear in
//! the active environment.

pub mod constants;
pub mod events;
mod loader;
pub mod scanner;
pub mod schema;
pub mod types;
pub mod value;

pub use events::{ConfigEvent, EventSink, RecordingSink, SecurityAlert, TracingSink};
pub use loader::{
    ConfigError, ConfigLoader, KeyValueStore, apply_defaults, config_from_tree,
    create_default_config, declared_environment, env_key_for, env_var_or_none, load_config,
    read_ini, resolve_defaults, unmarshal_tree, write_ini,
};
pub use scanner::{check_security_alerts, collect_security_alerts};
pub use schema::{CONFIG_SCHEMA, FieldKind, FieldSchema};
pub use types::{Config, DatabaseConfig, Environment, LoggingConfig, ServerConfig};
pub use value::{ConfigValue, ScalarValue};

#[cfg(test)]
pub(crate) mod test_util {
    use std::sync::{Mutex, OnceLock};

    pub fn global_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }
}
