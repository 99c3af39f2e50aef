//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for every fatal configuration failure.
//! - Keep the underlying cause reachable through `std::error::Error::source`.
//!
//! Does NOT handle:
//! - Security alerts, which are events and never errors (see `events`).
//!
//! Invariants:
//! - Every variant names the operation and the path or key that failed.
//! - No error is downgraded to a warning or retried.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading, unmarshalling or writing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file is missing, unreadable or not valid INI.
    #[error("error reading config file at {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: ini::Error,
    },

    /// A value does not fit the schema shape or type.
    #[error("error unmarshaling config key '{key}': {message}")]
    Unmarshal { key: String, message: String },

    /// The default config file could not be written.
    #[error("error creating default config file at {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
