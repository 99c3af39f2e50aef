//! Property-based tests for configuration resolution and scanning.
//!
//! These tests use randomly generated inputs to check invariants that
//! unit tests only sample:
//! - Explicit values always win over defaults in the key/value store.
//! - The resolver emits exactly one entry per annotated leaf.
//! - The scanner only reports populated fields under the matching environment.

use proptest::prelude::*;

use horizon_config::{
    CONFIG_SCHEMA, ConfigValue, Environment, KeyValueStore, apply_defaults,
    collect_security_alerts, resolve_defaults,
};

/// Strategy for picking one of the canonical leaf paths.
fn leaf_path_strategy() -> impl Strategy<Value = String> {
    let paths: Vec<String> = resolve_defaults(CONFIG_SCHEMA, "").into_keys().collect();
    proptest::sample::select(paths)
}

/// Strategy for generating environments.
fn environment_strategy() -> impl Strategy<Value = Environment> {
    prop_oneof![
        Just(Environment::Production),
        Just(Environment::Development),
        Just(Environment::Staging),
    ]
}

/// Strategy for a database section with optional, possibly empty, string credentials.
fn database_strategy() -> impl Strategy<Value = Vec<(&'static str, String)>> {
    let value = prop_oneof![Just(String::new()), "[a-z0-9_]{1,16}"];
    (
        proptest::option::of(value.clone()),
        proptest::option::of(value.clone()),
        proptest::option::of(value),
    )
        .prop_map(|(name, password, host)| {
            [("name", name), ("password", password), ("host", host)]
                .into_iter()
                .filter_map(|(key, value)| value.map(|v| (key, v)))
                .collect()
        })
}

proptest! {
    #[test]
    fn explicit_value_beats_default(path in leaf_path_strategy(), value in "[a-zA-Z0-9]{1,24}") {
        let mut store = KeyValueStore::new();
        store.set(&path, value.clone());
        apply_defaults(&mut store, CONFIG_SCHEMA);

        prop_assert_eq!(store.get(&path), Some(value));
    }

    #[test]
    fn resolver_prefix_only_changes_keys(prefix in "[a-z]{1,8}") {
        let bare = resolve_defaults(CONFIG_SCHEMA, "");
        let prefixed = resolve_defaults(CONFIG_SCHEMA, &prefix);

        prop_assert_eq!(bare.len(), prefixed.len());
        for (key, value) in &bare {
            prop_assert_eq!(prefixed.get(&format!("{prefix}.{key}")), Some(value));
        }
    }

    #[test]
    fn scanner_reports_exactly_populated_matching_fields(
        environment in environment_strategy(),
        entries in database_strategy(),
    ) {
        let tree = ConfigValue::table([(
            "database",
            ConfigValue::table(
                entries
                    .iter()
                    .map(|(key, value)| (*key, ConfigValue::from(value.as_str()))),
            ),
        )]);

        let alerts = collect_security_alerts(CONFIG_SCHEMA, &tree, environment);
        let expected = if environment == Environment::Production {
            entries.iter().filter(|(_, value)| !value.is_empty()).count()
        } else {
            0
        };

        prop_assert_eq!(alerts.len(), expected);
        prop_assert!(alerts.iter().all(|alert| alert.environment == environment));
    }
}
