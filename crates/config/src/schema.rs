//! Declarative configuration schema.
//!
//! Responsibilities:
//! - Describe the configuration shape as a static table of `FieldSchema` entries.
//! - Carry per-field metadata: path segment, declared name, value kind,
//!   default text and sensitivity scope.
//! - Provide the depth-first walk used by the default resolver.
//!
//! Does NOT handle:
//! - Reading values (see `loader` module).
//! - Scanning populated trees (see `scanner` module).
//!
//! Invariants:
//! - Every dotted path is unique across the tree.
//! - Every `Table` field declares a non-empty key; an empty key yields
//!   malformed paths with a doubled separator.

use crate::constants::{
    DEFAULT_CONSOLE_COLOR, DEFAULT_DATABASE_HOST, DEFAULT_DATABASE_NAME,
    DEFAULT_DATABASE_PASSWORD, DEFAULT_DATABASE_PORT, DEFAULT_DATABASE_USERNAME,
    DEFAULT_ENVIRONMENT, DEFAULT_LOG_JSON, DEFAULT_LOG_LEVEL, DEFAULT_SERVER_IP,
    DEFAULT_SERVER_PORT, KEY_SEPARATOR,
};
use crate::types::Environment;

/// Type of value a field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Integer,
    Bool,
    /// Nested section with its own fields.
    Table(&'static [FieldSchema]),
}

/// Metadata for one configuration field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSchema {
    /// Path segment joined into dotted keys.
    pub key: &'static str,
    /// Declared field name, reported in security alerts.
    pub name: &'static str,
    pub kind: FieldKind,
    /// Default value text; coerced to `kind` on unmarshal.
    pub default: Option<&'static str>,
    /// Environment in which a populated value raises a security alert.
    pub sensitivity: Option<Environment>,
}

impl FieldSchema {
    const fn new(key: &'static str, name: &'static str, kind: FieldKind) -> Self {
        Self {
            key,
            name,
            kind,
            default: None,
            sensitivity: None,
        }
    }

    pub const fn string(key: &'static str, name: &'static str) -> Self {
        Self::new(key, name, FieldKind::String)
    }

    pub const fn integer(key: &'static str, name: &'static str) -> Self {
        Self::new(key, name, FieldKind::Integer)
    }

    pub const fn boolean(key: &'static str, name: &'static str) -> Self {
        Self::new(key, name, FieldKind::Bool)
    }

    pub const fn table(
        key: &'static str,
        name: &'static str,
        children: &'static [FieldSchema],
    ) -> Self {
        Self::new(key, name, FieldKind::Table(children))
    }

    /// Attach a default value.
    pub const fn with_default(mut self, default: &'static str) -> Self {
        self.default = Some(default);
        self
    }

    /// Mark the field as sensitive in `environment`.
    pub const fn sensitive_in(mut self, environment: Environment) -> Self {
        self.sensitivity = Some(environment);
        self
    }

    /// Child fields of a `Table`; empty for leaves.
    pub fn children(&self) -> &'static [FieldSchema] {
        match self.kind {
            FieldKind::Table(children) => children,
            _ => &[],
        }
    }

    pub fn is_table(&self) -> bool {
        matches!(self.kind, FieldKind::Table(_))
    }
}

/// Join a path prefix and a segment. The prefix is omitted at top level.
pub fn join_path(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else {
        format!("{prefix}{KEY_SEPARATOR}{segment}")
    }
}

/// Visit every field depth-first in declaration order, parents before children.
///
/// The visitor receives each field's full dotted path.
pub fn walk<F>(schema: &[FieldSchema], prefix: &str, visit: &mut F)
where
    F: FnMut(&str, &FieldSchema),
{
    for field in schema {
        let path = join_path(prefix, field.key);
        visit(&path, field);
        if field.is_table() {
            walk(field.children(), &path, visit);
        }
    }
}

const SERVER_FIELDS: &[FieldSchema] = &[
    FieldSchema::string("ip", "IP").with_default(DEFAULT_SERVER_IP),
    FieldSchema::integer("port", "Port").with_default(DEFAULT_SERVER_PORT),
    FieldSchema::string("environment", "Environment").with_default(DEFAULT_ENVIRONMENT),
];

const DATABASE_FIELDS: &[FieldSchema] = &[
    FieldSchema::string("name", "Name")
        .with_default(DEFAULT_DATABASE_NAME)
        .sensitive_in(Environment::Production),
    FieldSchema::string("password", "Password")
        .with_default(DEFAULT_DATABASE_PASSWORD)
        .sensitive_in(Environment::Production),
    FieldSchema::string("username", "Username")
        .with_default(DEFAULT_DATABASE_USERNAME)
        .sensitive_in(Environment::Production),
    FieldSchema::string("host", "Host")
        .with_default(DEFAULT_DATABASE_HOST)
        .sensitive_in(Environment::Production),
    FieldSchema::integer("port", "Port")
        .with_default(DEFAULT_DATABASE_PORT)
        .sensitive_in(Environment::Production),
];

const LOGGING_FIELDS: &[FieldSchema] = &[
    FieldSchema::boolean("console_color", "ConsoleColor").with_default(DEFAULT_CONSOLE_COLOR),
    FieldSchema::boolean("json", "JSON").with_default(DEFAULT_LOG_JSON),
    FieldSchema::string("level", "Level").with_default(DEFAULT_LOG_LEVEL),
];

/// Schema of the server configuration file: one table per INI section.
pub const CONFIG_SCHEMA: &[FieldSchema] = &[
    FieldSchema::table("server", "Server", SERVER_FIELDS),
    FieldSchema::table("database", "Database", DATABASE_FIELDS),
    FieldSchema::table("logging", "Logging", LOGGING_FIELDS),
];

/// Path of the field that declares the active environment.
pub const ENVIRONMENT_PATH: &str = "server.environment";

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn leaf_paths(schema: &[FieldSchema]) -> Vec<String> {
        let mut paths = Vec::new();
        walk(schema, "", &mut |path, field| {
            if !field.is_table() {
                paths.push(path.to_string());
            }
        });
        paths
    }

    #[test]
    fn test_join_path_omits_separator_at_top_level() {
        assert_eq!(join_path("", "server"), "server");
        assert_eq!(join_path("server", "ip"), "server.ip");
        assert_eq!(join_path("server", ""), "server.");
    }

    #[test]
    fn test_walk_visits_parents_before_children() {
        let mut visited = Vec::new();
        walk(CONFIG_SCHEMA, "", &mut |path, _| visited.push(path.to_string()));

        assert_eq!(visited[0], "server");
        assert_eq!(visited[1], "server.ip");
        assert_eq!(visited[4], "database");
        assert_eq!(visited.len(), 14);
    }

    #[test]
    fn test_paths_are_unique() {
        let paths = leaf_paths(CONFIG_SCHEMA);
        let unique: HashSet<&String> = paths.iter().collect();
        assert_eq!(paths.len(), unique.len());
        assert_eq!(paths.len(), 11);
    }

    #[test]
    fn test_environment_path_is_a_schema_leaf() {
        assert!(leaf_paths(CONFIG_SCHEMA).iter().any(|p| p == ENVIRONMENT_PATH));
    }

    #[test]
    fn test_only_database_fields_are_sensitive() {
        let mut sensitive = Vec::new();
        walk(CONFIG_SCHEMA, "", &mut |path, field| {
            if field.sensitivity.is_some() {
                sensitive.push(path.to_string());
            }
        });
        assert!(sensitive.iter().all(|p| p.starts_with("database.")));
        assert_eq!(sensitive.len(), 5);
    }
}
