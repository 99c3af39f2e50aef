//! Configuration loader for INI files, environment variables and schema defaults.
//!
//! Responsibilities:
//! - Read INI files into a layered key/value store.
//! - Resolve schema defaults and environment overrides.
//! - Unmarshal the result into a typed `Config`.
//! - Write a default config file when none exists.
//!
//! Does NOT handle:
//! - Schema declarations (see `schema`).
//! - Security scanning logic (see `scanner`); the loader only decides when it runs.
//!
//! Invariants / Assumptions:
//! - Explicit file values take precedence over environment variables.
//! - Environment variables take precedence over schema defaults.

mod builder;
mod defaults;
mod env;
mod error;
mod ini_file;
mod store;
mod unmarshal;

#[cfg(test)]
mod tests;

pub use builder::{ConfigLoader, create_default_config, load_config};
pub use defaults::{apply_defaults, resolve_defaults};
pub use env::{env_key_for, env_var_or_none};
pub use error::ConfigError;
pub use ini_file::{read_ini, write_ini};
pub use store::KeyValueStore;
pub use unmarshal::{config_from_tree, declared_environment, unmarshal_tree};
