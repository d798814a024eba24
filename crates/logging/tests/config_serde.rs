//! Serialization tests for [`LogConfig`] under the `serde` feature.

#![cfg(feature = "serde")]

use logging::{DEFAULT_PROGRAM_NAME, LogConfig};

#[test]
fn config_serializes_both_fields() {
    let config = LogConfig::new("myprog").with_level(2);
    let json = serde_json::to_value(&config).expect("serialize");
    assert_eq!(json["level"], 2);
    assert_eq!(json["program_name"], "myprog");
}

#[test]
fn config_deserializes_from_json() {
    let config: LogConfig =
        serde_json::from_str(r#"{"level": -1, "program_name": "tool"}"#).expect("deserialize");
    assert_eq!(config, LogConfig::new("tool").with_level(-1));
}

#[test]
fn missing_fields_take_defaults() {
    let config: LogConfig = serde_json::from_str(r#"{"level": 3}"#).expect("deserialize");
    assert_eq!(config.level, 3);
    assert_eq!(config.program_name, DEFAULT_PROGRAM_NAME);
}
