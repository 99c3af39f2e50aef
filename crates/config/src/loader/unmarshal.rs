//! Unmarshalling from the key/value store into value trees and typed config.
//!
//! Responsibilities:
//! - Build a `ConfigValue` tree from a `KeyValueStore`, driven by the schema.
//! - Coerce raw strings to the kind each field declares.
//! - Deserialize the canonical tree into a typed `Config`.
//!
//! Invariants:
//! - Every table in the schema appears in the tree; unset leaves are absent.
//! - Keys in the store that the schema does not declare are ignored.
//! - A blank integer or boolean is its zero value.

use serde::de::DeserializeOwned;
use std::collections::BTreeMap;

use super::error::ConfigError;
use super::store::KeyValueStore;
use crate::schema::{ENVIRONMENT_PATH, FieldKind, FieldSchema, join_path};
use crate::types::{Config, Environment};
use crate::value::{ConfigValue, ScalarValue};

/// Unmarshal every schema field present in `store` into a value tree.
pub fn unmarshal_tree(
    store: &KeyValueStore,
    schema: &[FieldSchema],
) -> Result<ConfigValue, ConfigError> {
    unmarshal_table(store, schema, "")
}

fn unmarshal_table(
    store: &KeyValueStore,
    schema: &[FieldSchema],
    prefix: &str,
) -> Result<ConfigValue, ConfigError> {
    let mut children = BTreeMap::new();
    for field in schema {
        let path = join_path(prefix, field.key);
        let value = match field.kind {
            FieldKind::Table(fields) => Some(unmarshal_table(store, fields, &path)?),
            kind => store
                .get(&path)
                .map(|raw| coerce(&path, kind, &raw).map(ConfigValue::Scalar))
                .transpose()?,
        };
        if let Some(value) = value {
            children.insert(field.key.to_string(), value);
        }
    }
    Ok(ConfigValue::Table(children))
}

fn coerce(path: &str, kind: FieldKind, raw: &str) -> Result<ScalarValue, ConfigError> {
    let trimmed = raw.trim();
    match kind {
        FieldKind::Integer if trimmed.is_empty() => Ok(ScalarValue::Int(0)),
        FieldKind::Integer => trimmed
            .parse()
            .map(ScalarValue::Int)
            .map_err(|_| ConfigError::Unmarshal {
                key: path.to_string(),
                message: format!("expected an integer, got '{trimmed}'"),
            }),
        FieldKind::Bool => parse_bool(trimmed)
            .map(ScalarValue::Bool)
            .ok_or_else(|| ConfigError::Unmarshal {
                key: path.to_string(),
                message: format!("expected true or false, got '{trimmed}'"),
            }),
        FieldKind::String | FieldKind::Table(_) => Ok(ScalarValue::Str(raw.to_string())),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "t" | "true" => Some(true),
        "" | "0" | "f" | "false" => Some(false),
        _ => None,
    }
}

/// Environment declared in `tree`, or `None` when absent or blank.
pub fn declared_environment(tree: &ConfigValue) -> Result<Option<Environment>, ConfigError> {
    let Some(raw) = tree.lookup(ENVIRONMENT_PATH).and_then(ConfigValue::as_str) else {
        return Ok(None);
    };
    if raw.trim().is_empty() {
        return Ok(None);
    }
    raw.parse::<Environment>()
        .map(Some)
        .map_err(|err| ConfigError::Unmarshal {
            key: ENVIRONMENT_PATH.to_string(),
            message: err.to_string(),
        })
}

/// Deserialize a tree shaped like `schema::CONFIG_SCHEMA` into a `Config`.
pub fn config_from_tree(tree: &ConfigValue) -> Result<Config, ConfigError> {
    Ok(Config {
        server: section(tree, "server")?,
        database: section(tree, "database")?,
        logging: section(tree, "logging")?,
    })
}

fn section<T: DeserializeOwned>(tree: &ConfigValue, key: &str) -> Result<T, ConfigError> {
    let value = tree
        .get(key)
        .map(ConfigValue::to_json)
        .unwrap_or(serde_json::Value::Null);
    serde_json::from_value(value).map_err(|err| ConfigError::Unmarshal {
        key: key.to_string(),
        message: err.to_string(),
    })
}
