//! Configuration type definitions for the Horizon server.
//!
//! Responsibilities:
//! - Define the typed `Config` tree and its sections.
//! - Define the closed `Environment` enumeration.
//!
//! Does NOT handle:
//! - Configuration loading from files or environment variables (see `loader` module).
//! - Field metadata such as defaults or sensitivity (see `schema` module).

mod config;
mod environment;

pub use config::{Config, DatabaseConfig, LoggingConfig, ServerConfig};
pub use environment::{Environment, UnknownEnvironment};
