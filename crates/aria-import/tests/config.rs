use std::collections::HashMap;
use std::time::Duration;

use aria_import::config::{DEFAULT_DEBOUNCE_MS, DEFAULT_MAX_INPUT_BYTES, ImportConfig};

fn from_pairs(pairs: &[(&str, &str)]) -> ImportConfig {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    ImportConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults() {
    let config = ImportConfig::default();
    assert_eq!(config.debounce, Duration::from_millis(DEFAULT_DEBOUNCE_MS));
    assert_eq!(config.debounce, Duration::from_millis(500));
    assert_eq!(config.max_input_bytes, DEFAULT_MAX_INPUT_BYTES);
    assert_eq!(from_pairs(&[]), config);
}

#[test]
fn overrides_are_applied() {
    let config = from_pairs(&[("ARIA_DEBOUNCE_MS", "250"), ("ARIA_MAX_INPUT_BYTES", " 4096 ")]);
    assert_eq!(config.debounce, Duration::from_millis(250));
    assert_eq!(config.max_input_bytes, 4096);
}

#[test]
fn invalid_values_keep_defaults() {
    let config = from_pairs(&[("ARIA_DEBOUNCE_MS", "soon"), ("ARIA_MAX_INPUT_BYTES", "0")]);
    assert_eq!(config, ImportConfig::default());
}
