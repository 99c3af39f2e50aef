//! Security-alert scanner.
//!
//! Responsibilities:
//! - Walk a populated `ConfigValue` tree alongside its schema.
//! - Report every populated field whose sensitivity scope equals the active environment.
//!
//! Does NOT handle:
//! - Deciding the active environment (see `loader::builder`).
//! - Redacting or rejecting sensitive values; alerts are informational only.
//!
//! Invariants:
//! - Alerts come out in declaration order, depth-first, parents before children.
//! - A missing value stops the walk for that field; a non-table root is a no-op.
//! - Scanning never mutates the tree and never fails.

use crate::events::{ConfigEvent, EventSink, SecurityAlert};
use crate::schema::{FieldSchema, join_path};
use crate::types::Environment;
use crate::value::ConfigValue;

/// Collect the security alerts for `tree` under `environment`.
pub fn collect_security_alerts(
    schema: &[FieldSchema],
    tree: &ConfigValue,
    environment: Environment,
) -> Vec<SecurityAlert> {
    let mut alerts = Vec::new();
    scan_node(schema, tree, "", environment, &mut alerts);
    alerts
}

/// Scan `tree` and emit one `ConfigEvent::SecurityAlert` per finding.
///
/// Returns the number of alerts emitted.
pub fn check_security_alerts(
    schema: &[FieldSchema],
    tree: &ConfigValue,
    environment: Environment,
    sink: &dyn EventSink,
) -> usize {
    let alerts = collect_security_alerts(schema, tree, environment);
    let count = alerts.len();
    for alert in alerts {
        sink.emit(&ConfigEvent::SecurityAlert(alert));
    }
    count
}

fn scan_node(
    schema: &[FieldSchema],
    node: &ConfigValue,
    prefix: &str,
    environment: Environment,
    alerts: &mut Vec<SecurityAlert>,
) {
    let Some(children) = node.as_table() else {
        return;
    };

    for field in schema {
        let Some(value) = children.get(field.key) else {
            continue;
        };
        let path = join_path(prefix, field.key);

        if field.sensitivity == Some(environment) && !value.is_zero() {
            alerts.push(SecurityAlert {
                field: field.name,
                path: path.clone(),
                environment,
            });
        }

        if value.is_table() {
            scan_node(field.children(), value, &path, environment, alerts);
        }
    }
}
