//! crates/logging/tests/configuration.rs
//! Opening from a deserialized configuration record, including repair of
//! out-of-range fields.

#![cfg(not(feature = "static-config"))]

use logging::{LogLevel, Logger, LoggerConfig};

fn config(module: &str, sink: &str, level: i64) -> LoggerConfig {
    LoggerConfig {
        module: module.to_owned(),
        sink: sink.to_owned(),
        level,
    }
}

#[test]
fn open_config_applies_all_fields() {
    let mut logger = Logger::closed();
    logger.open_config(&config("relay", "stdout", 5));

    assert!(logger.is_open());
    assert_eq!(logger.module_name(), "relay");
    assert_eq!(logger.threshold(), LogLevel::Notice);
}

#[test]
fn sink_names_are_case_insensitive() {
    let mut logger = Logger::closed();
    logger.open_config(&config("relay", "STDERR", 3));
    assert!(logger.is_open());
}

#[test]
fn unknown_sink_name_is_repaired_to_stderr() {
    let mut logger = Logger::closed();
    logger.open_config(&config("relay", "printer", 3));

    // Repaired rather than rejected; the logger still comes up.
    assert!(logger.is_open());
    assert_eq!(logger.threshold(), LogLevel::Error);
}

#[test]
fn out_of_range_level_is_clamped_to_emergency() {
    let mut logger = Logger::closed();
    logger.open_config(&config("relay", "stdout", 42));

    assert!(logger.is_open());
    assert_eq!(logger.threshold(), LogLevel::Emergency);
    assert!(logger.enabled(LogLevel::Emergency));
    assert!(!logger.enabled(LogLevel::Alert));
}

#[test]
fn negative_level_is_clamped_to_emergency() {
    let mut logger = Logger::closed();
    logger.open_config(&config("relay", "stdout", -1));
    assert_eq!(logger.threshold(), LogLevel::Emergency);
}

#[cfg(feature = "serde")]
#[test]
fn config_round_trips_through_json() {
    let original = config("relay", "stderr", 6);
    let text = serde_json::to_string(&original).expect("serialize");
    let parsed: LoggerConfig = serde_json::from_str(&text).expect("deserialize");

    let mut logger = Logger::closed();
    logger.open_config(&parsed);
    assert_eq!(logger.module_name(), "relay");
    assert_eq!(logger.threshold(), LogLevel::Info);
}
