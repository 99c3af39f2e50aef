//! Runtime environment of the server.
//!
//! Responsibilities:
//! - Define the closed set of environments the server can run in.
//! - Parse environment names from file and env-var input.
//!
//! Invariants:
//! - Parsing is case-insensitive and ignores surrounding whitespace.
//! - Unrecognized names are rejected; there is no catch-all variant.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Runtime mode of the server. Drives the security-alert scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Environment {
    /// Live deployment.
    Production,
    /// Local development.
    #[default]
    Development,
    /// Pre-production testing.
    Staging,
}

/// Error returned when an environment name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown environment '{0}' (expected one of: production, development, staging)")]
pub struct UnknownEnvironment(pub String);

impl Environment {
    /// All environments, in declaration order.
    pub const ALL: [Environment; 3] = [
        Environment::Production,
        Environment::Development,
        Environment::Staging,
    ];

    /// Canonical lower-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Production => "production",
            Environment::Development => "development",
            Environment::Staging => "staging",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = UnknownEnvironment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Environment::ALL
            .into_iter()
            .find(|env| env.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownEnvironment(s.to_string()))
    }
}

impl Serialize for Environment {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Environment {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
