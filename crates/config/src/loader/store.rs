//! Layered key/value store backing a configuration load.
//!
//! Responsibilities:
//! - Hold explicit values read from the config file.
//! - Hold defaults pushed in from the schema resolver.
//! - Consult environment variables once the automatic overlay is enabled.
//!
//! Does NOT handle:
//! - Type coercion; values stay strings until unmarshal.
//! - Reading or writing files (see `ini_file.rs`).
//!
//! Invariants:
//! - Precedence is explicit value > environment variable > default.
//! - `set_default` never shadows an explicit value.
//! - Keys are lower-case dotted paths.

use std::collections::BTreeMap;

use super::env::{env_key_for, env_var_or_none};

/// String key/value store with explicit, environment and default layers.
#[derive(Debug, Clone, Default)]
pub struct KeyValueStore {
    values: BTreeMap<String, String>,
    defaults: BTreeMap<String, String>,
    automatic_env: bool,
}

impl KeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store whose explicit layer holds `entries`.
    pub fn from_entries(entries: BTreeMap<String, String>) -> Self {
        Self {
            values: entries
                .into_iter()
                .map(|(key, value)| (key.to_lowercase(), value))
                .collect(),
            ..Self::default()
        }
    }

    /// Set an explicit value.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.values.insert(key.to_lowercase(), value.into());
    }

    /// Set the fallback for `key`, used only when no other layer has it.
    pub fn set_default(&mut self, key: &str, value: impl Into<String>) {
        self.defaults.insert(key.to_lowercase(), value.into());
    }

    /// Consult `SECTION_KEY` environment variables on every lookup from now on.
    pub fn enable_automatic_env(&mut self) {
        self.automatic_env = true;
    }

    /// Highest-precedence value for `key`.
    pub fn get(&self, key: &str) -> Option<String> {
        let key = key.to_lowercase();
        if let Some(value) = self.values.get(&key) {
            return Some(value.clone());
        }
        if self.automatic_env
            && let Some(value) = env_var_or_none(&env_key_for(&key))
        {
            return Some(value);
        }
        self.defaults.get(&key).cloned()
    }
}
