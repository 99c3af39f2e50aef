//! Structured events emitted while loading configuration.
//!
//! Responsibilities:
//! - Define the `ConfigEvent` records the loader and scanner produce.
//! - Define the `EventSink` capability that receives them.
//! - Provide `TracingSink` (forwards to `tracing`) and `RecordingSink` (in-memory).
//!
//! Invariants:
//! - The library never logs through a global; every emitting call takes a sink.
//! - Security alerts are warnings and never fail a load.

use std::path::PathBuf;
use std::sync::Mutex;

use crate::types::Environment;

/// A populated sensitive field found under its sensitive environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityAlert {
    /// Declared field name, e.g. `Password`.
    pub field: &'static str,
    /// Dotted path of the field, e.g. `database.password`.
    pub path: String,
    pub environment: Environment,
}

/// Record emitted by the configuration subsystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigEvent {
    SecurityAlert(SecurityAlert),
    /// No config file existed, so one holding every default was written.
    DefaultConfigWritten { path: PathBuf },
    /// The file declares no environment, so the security scan did not run.
    ScanSkipped { path: PathBuf },
    ConfigLoaded {
        path: PathBuf,
        environment: Environment,
    },
}

/// Receiver for configuration events.
pub trait EventSink {
    fn emit(&self, event: &ConfigEvent);
}

/// Sink that writes each event to `tracing` with structured fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&self, event: &ConfigEvent) {
        match event {
            ConfigEvent::SecurityAlert(alert) => {
                tracing::warn!(
                    field = alert.field,
                    path = %alert.path,
                    environment = %alert.environment,
                    "Security Alert: Sensitive data detected in configuration"
                );
            }
            ConfigEvent::DefaultConfigWritten { path } => {
                tracing::info!(
                    path = %path.display(),
                    "Config file not found. Created default config file."
                );
            }
            ConfigEvent::ScanSkipped { path } => {
                tracing::debug!(
                    path = %path.display(),
                    "No environment declared in config file; skipping security scan"
                );
            }
            ConfigEvent::ConfigLoaded { path, environment } => {
                tracing::info!(
                    path = %path.display(),
                    environment = %environment,
                    "Configuration loaded"
                );
            }
        }
    }
}

/// Sink that keeps every event in memory, in emission order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<ConfigEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded events.
    pub fn events(&self) -> Vec<ConfigEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    /// Recorded security alerts only.
    pub fn alerts(&self) -> Vec<SecurityAlert> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ConfigEvent::SecurityAlert(alert) => Some(alert),
                _ => None,
            })
            .collect()
    }
}

impl EventSink for RecordingSink {
    fn emit(&self, event: &ConfigEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}
