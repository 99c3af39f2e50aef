//! Typed configuration returned by the loader.
//!
//! Responsibilities:
//! - Define the `Config` tree handed to the rest of the application.
//! - Convert a typed `Config` back into a `ConfigValue` tree for scanning.
//!
//! Does NOT handle:
//! - Reading files or environment variables (see `loader` module).
//! - Default values (declared in `schema::CONFIG_SCHEMA`).
//!
//! Invariants:
//! - Field names match the path segments of `schema::CONFIG_SCHEMA`.
//! - The database password is held as a `SecretString` and never printed by `Debug`.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::events::EventSink;
use crate::scanner::check_security_alerts;
use crate::schema::CONFIG_SCHEMA;
use crate::types::Environment;
use crate::value::ConfigValue;

/// Module for serializing SecretString as strings.
mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret.expose_secret().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }
}

/// Server listen settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address the server binds to.
    pub ip: String,
    /// Port the server listens on.
    pub port: u16,
    /// Runtime environment.
    pub environment: Environment,
}

/// Database connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub name: String,
    #[serde(with = "secret_string")]
    pub password: SecretString,
    pub username: String,
    pub host: String,
    pub port: u16,
}

/// Logging output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Whether console output uses ANSI colors.
    pub console_color: bool,
    /// Whether log records are written as JSON.
    pub json: bool,
    /// Level directive, e.g. `info` or `horizon=debug`.
    pub level: String,
}

/// Root configuration: one field per INI section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Build the `ConfigValue` tree mirroring this config.
    pub fn to_value_tree(&self) -> ConfigValue {
        ConfigValue::table([
            (
                "server",
                ConfigValue::table([
                    ("ip", ConfigValue::from(self.server.ip.as_str())),
                    ("port", ConfigValue::from(self.server.port)),
                    (
                        "environment",
                        ConfigValue::from(self.server.environment.as_str()),
                    ),
                ]),
            ),
            (
                "database",
                ConfigValue::table([
                    ("name", ConfigValue::from(self.database.name.as_str())),
                    (
                        "password",
                        ConfigValue::from(self.database.password.expose_secret()),
                    ),
                    (
                        "username",
                        ConfigValue::from(self.database.username.as_str()),
                    ),
                    ("host", ConfigValue::from(self.database.host.as_str())),
                    ("port", ConfigValue::from(self.database.port)),
                ]),
            ),
            (
                "logging",
                ConfigValue::table([
                    ("console_color", ConfigValue::from(self.logging.console_color)),
                    ("json", ConfigValue::from(self.logging.json)),
                    ("level", ConfigValue::from(self.logging.level.as_str())),
                ]),
            ),
        ])
    }

    /// Scan this config against its own environment, emitting one event per alert.
    ///
    /// Returns the number of alerts emitted.
    pub fn security_alerts(&self, sink: &dyn EventSink) -> usize {
        check_security_alerts(
            CONFIG_SCHEMA,
            &self.to_value_tree(),
            self.server.environment,
            sink,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{ConfigEvent, RecordingSink};

    fn production_config() -> Config {
        Config {
            server: ServerConfig {
                ip: "127.0.0.1".to_string(),
                port: 8080,
                environment: Environment::Production,
            },
            database: DatabaseConfig {
                name: "prod_db".to_string(),
                password: SecretString::new("prod_secret".to_string().into()),
                username: "admin".to_string(),
                host: "db.prod.example.com".to_string(),
                port: 5432,
            },
            logging: LoggingConfig {
                console_color: false,
                json: true,
                level: "warn".to_string(),
            },
        }
    }

    #[test]
    fn test_debug_does_not_print_password() {
        let config = production_config();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("prod_secret"));
    }

    #[test]
    fn test_value_tree_mirrors_fields() {
        let tree = production_config().to_value_tree();
        assert_eq!(
            tree.lookup("database.password").and_then(ConfigValue::as_str),
            Some("prod_secret")
        );
        assert_eq!(
            tree.lookup("server.environment").and_then(ConfigValue::as_str),
            Some("production")
        );
        assert_eq!(
            tree.lookup("database.port"),
            Some(&ConfigValue::from(5432u16))
        );
    }

    #[test]
    fn test_security_alerts_flags_every_populated_database_field() {
        let sink = RecordingSink::new();
        let count = production_config().security_alerts(&sink);

        assert_eq!(count, 5);
        let fields: Vec<String> = sink
            .events()
            .into_iter()
            .filter_map(|event| match event {
                ConfigEvent::SecurityAlert(alert) => Some(alert.field.to_string()),
                _ => None,
            })
            .collect();
        assert_eq!(fields, ["Name", "Password", "Username", "Host", "Port"]);
    }

    #[test]
    fn test_security_alerts_silent_outside_production() {
        let mut config = production_config();
        config.server.environment = Environment::Staging;

        let sink = RecordingSink::new();
        assert_eq!(config.security_alerts(&sink), 0);
        assert!(sink.events().is_empty());
    }
}
