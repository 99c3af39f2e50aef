//! Centralized constants for the Horizon configuration subsystem.
//!
//! Default values for the canonical schema live here so the schema table,
//! tests and the CLI agree on them without repeating literals.

// =============================================================================
// File Defaults
// =============================================================================

/// Config file name used when no path is supplied.
pub const DEFAULT_CONFIG_FILE: &str = "config.ini";

/// Separator between path segments in a dotted configuration key.
pub const KEY_SEPARATOR: char = '.';

/// Separator that replaces [`KEY_SEPARATOR`] in environment variable names.
pub const ENV_KEY_SEPARATOR: char = '_';

// =============================================================================
// Server Defaults
// =============================================================================

/// Default address the server binds to.
pub const DEFAULT_SERVER_IP: &str = "127.0.0.1";

/// Default server listen port.
pub const DEFAULT_SERVER_PORT: &str = "8080";

/// Default runtime environment.
pub const DEFAULT_ENVIRONMENT: &str = "development";

// =============================================================================
// Database Defaults
// =============================================================================

/// Default database name.
pub const DEFAULT_DATABASE_NAME: &str = "example_db";

/// Default database user.
pub const DEFAULT_DATABASE_USERNAME: &str = "user";

/// Default database password placeholder.
pub const DEFAULT_DATABASE_PASSWORD: &str = "password";

/// Default database host.
pub const DEFAULT_DATABASE_HOST: &str = "localhost";

/// Default database port (MySQL).
pub const DEFAULT_DATABASE_PORT: &str = "3306";

// =============================================================================
// Logging Defaults
// =============================================================================

/// Whether console output is colored by default.
pub const DEFAULT_CONSOLE_COLOR: &str = "true";

/// Whether log output is JSON by default.
pub const DEFAULT_LOG_JSON: &str = "false";

/// Default log level directive.
pub const DEFAULT_LOG_LEVEL: &str = "info";
