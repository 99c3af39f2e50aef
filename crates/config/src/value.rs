//! Populated configuration value tree.
//!
//! A `ConfigValue` is either a scalar or a table of named children. It mirrors
//! the shape of a schema field-for-field; a missing key stands for an unset
//! value. The loader produces trees through `loader::unmarshal`, and the
//! security scanner walks them.

use std::collections::BTreeMap;

use crate::constants::KEY_SEPARATOR;

/// A leaf value after type coercion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScalarValue {
    Str(String),
    Int(i64),
    Bool(bool),
}

impl ScalarValue {
    /// True for the zero value of the scalar's type: `""`, `0` or `false`.
    pub fn is_zero(&self) -> bool {
        match self {
            ScalarValue::Str(s) => s.is_empty(),
            ScalarValue::Int(i) => *i == 0,
            ScalarValue::Bool(b) => !*b,
        }
    }
}

/// A node of a populated configuration tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValue {
    Scalar(ScalarValue),
    Table(BTreeMap<String, ConfigValue>),
}

impl ConfigValue {
    /// Build a table node from `(key, value)` pairs.
    pub fn table<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, ConfigValue)>,
    {
        ConfigValue::Table(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        )
    }

    /// An empty table.
    pub fn empty_table() -> Self {
        ConfigValue::Table(BTreeMap::new())
    }

    pub fn as_table(&self) -> Option<&BTreeMap<String, ConfigValue>> {
        match self {
            ConfigValue::Table(children) => Some(children),
            ConfigValue::Scalar(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::Scalar(ScalarValue::Str(s)) => Some(s),
            _ => None,
        }
    }

    pub fn is_table(&self) -> bool {
        matches!(self, ConfigValue::Table(_))
    }

    /// Direct child of a table node. Scalars have no children.
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.as_table().and_then(|children| children.get(key))
    }

    /// Follow a dotted path from this node.
    pub fn lookup(&self, path: &str) -> Option<&ConfigValue> {
        path.split(KEY_SEPARATOR)
            .try_fold(self, |node, segment| node.get(segment))
    }

    /// True when the value is the zero value of its type.
    ///
    /// A table is zero when every child is zero (an empty table included).
    pub fn is_zero(&self) -> bool {
        match self {
            ConfigValue::Scalar(scalar) => scalar.is_zero(),
            ConfigValue::Table(children) => children.values().all(ConfigValue::is_zero),
        }
    }

    /// Convert into a JSON value for typed deserialization.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            ConfigValue::Scalar(ScalarValue::Str(s)) => serde_json::Value::String(s.clone()),
            ConfigValue::Scalar(ScalarValue::Int(i)) => serde_json::Value::from(*i),
            ConfigValue::Scalar(ScalarValue::Bool(b)) => serde_json::Value::Bool(*b),
            ConfigValue::Table(children) => serde_json::Value::Object(
                children
                    .iter()
                    .map(|(key, value)| (key.clone(), value.to_json()))
                    .collect(),
            ),
        }
    }
}

impl From<ScalarValue> for ConfigValue {
    fn from(value: ScalarValue) -> Self {
        ConfigValue::Scalar(value)
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::Scalar(ScalarValue::Str(value.to_string()))
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        ConfigValue::Scalar(ScalarValue::Str(value))
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        ConfigValue::Scalar(ScalarValue::Int(value))
    }
}

impl From<u16> for ConfigValue {
    fn from(value: u16) -> Self {
        ConfigValue::Scalar(ScalarValue::Int(i64::from(value)))
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        ConfigValue::Scalar(ScalarValue::Bool(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ConfigValue {
        ConfigValue::table([
            (
                "server",
                ConfigValue::table([
                    ("ip", ConfigValue::from("10.0.0.1")),
                    ("port", ConfigValue::from(9000i64)),
                ]),
            ),
            ("logging", ConfigValue::table([("json", ConfigValue::from(false))])),
        ])
    }

    #[test]
    fn test_lookup_follows_dotted_paths() {
        let tree = sample();
        assert_eq!(
            tree.lookup("server.ip").and_then(ConfigValue::as_str),
            Some("10.0.0.1")
        );
        assert!(tree.lookup("server.missing").is_none());
        assert!(tree.lookup("server.ip.deeper").is_none());
    }

    #[test]
    fn test_zero_values() {
        assert!(ConfigValue::from("").is_zero());
        assert!(ConfigValue::from(0i64).is_zero());
        assert!(ConfigValue::from(false).is_zero());
        assert!(ConfigValue::empty_table().is_zero());
        assert!(!ConfigValue::from("x").is_zero());
        assert!(!ConfigValue::from(1i64).is_zero());

        let tree = sample();
        assert!(tree.get("logging").unwrap().is_zero());
        assert!(!tree.get("server").unwrap().is_zero());
    }

    #[test]
    fn test_to_json_preserves_types() {
        let json = sample().to_json();
        assert_eq!(json["server"]["ip"], "10.0.0.1");
        assert_eq!(json["server"]["port"], 9000);
        assert_eq!(json["logging"]["json"], false);
    }
}
