//! Default-value resolver.
//!
//! Responsibilities:
//! - Derive the dotted-path → default map from schema metadata.
//! - Seed a `KeyValueStore` with those defaults.
//!
//! Does NOT handle:
//! - Type coercion; defaults stay strings until unmarshal.
//! - Explicit or environment values, which take precedence inside the store.
//!
//! Invariants:
//! - Only fields with both a non-empty key and a non-empty default produce an entry.
//! - Tables always recurse with their own key appended, whether or not they
//!   carry a default themselves.
//! - Resolution is pure and never fails.

use std::collections::BTreeMap;

use super::store::KeyValueStore;
use crate::schema::{FieldSchema, walk};

/// Resolve every declared default under `prefix` (empty at top level).
pub fn resolve_defaults(schema: &[FieldSchema], prefix: &str) -> BTreeMap<String, String> {
    let mut defaults = BTreeMap::new();
    walk(schema, prefix, &mut |path, field| {
        if field.key.is_empty() {
            return;
        }
        if let Some(default) = field.default.filter(|d| !d.is_empty()) {
            defaults.insert(path.to_string(), default.to_string());
        }
    });
    defaults
}

/// Push every resolved default for `schema` into `store`.
///
/// Returns the number of defaults applied.
pub fn apply_defaults(store: &mut KeyValueStore, schema: &[FieldSchema]) -> usize {
    let defaults = resolve_defaults(schema, "");
    let count = defaults.len();
    for (key, value) in defaults {
        store.set_default(&key, value);
    }
    count
}
