//! Environment variable overlay helpers.
//!
//! Responsibilities:
//! - Map dotted configuration keys to environment variable names.
//! - Read environment variables with empty/whitespace filtering.
//!
//! Invariants:
//! - `server.ip` maps to `SERVER_IP`: upper-cased, `.` replaced by `_`.
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).

use crate::constants::{ENV_KEY_SEPARATOR, KEY_SEPARATOR};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Environment variable name that overrides `key`.
pub fn env_key_for(key: &str) -> String {
    key.to_uppercase()
        .replace(KEY_SEPARATOR, &ENV_KEY_SEPARATOR.to_string())
}
