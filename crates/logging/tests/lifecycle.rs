//! crates/logging/tests/lifecycle.rs
//! Open/close lifecycle and threshold behavior through the public surface.

#![cfg(not(feature = "static-config"))]

use logging::{DEFAULT_MODULE_NAME, LogLevel, Logger, SinkKind, log_at};

#[test]
fn closed_logger_reports_no_configuration() {
    let logger = Logger::closed();
    assert!(!logger.is_open());
    assert!(!logger.enabled(LogLevel::Emergency));
}

#[test]
fn open_establishes_module_threshold_and_sink() {
    let mut logger = Logger::closed();
    logger.open(SinkKind::ConsoleOut, LogLevel::Notice, "engine");

    assert!(logger.is_open());
    assert_eq!(logger.module_name(), "engine");
    assert_eq!(logger.threshold(), LogLevel::Notice);
    assert!(logger.enabled(LogLevel::Warning));
    assert!(!logger.enabled(LogLevel::Info));
}

#[test]
fn empty_module_name_falls_back_to_the_default() {
    let mut logger = Logger::closed();
    logger.open(SinkKind::ConsoleErr, LogLevel::Error, "");
    assert_eq!(logger.module_name(), DEFAULT_MODULE_NAME);
}

#[test]
fn reopening_keeps_the_first_configuration() {
    let mut logger = Logger::closed();
    logger.open(SinkKind::ConsoleOut, LogLevel::Info, "first");
    logger.open(SinkKind::ConsoleErr, LogLevel::Emergency, "second");

    assert_eq!(logger.module_name(), "first");
    assert_eq!(logger.threshold(), LogLevel::Info);
}

#[test]
fn close_returns_the_logger_to_the_closed_state() {
    let mut logger = Logger::closed();
    logger.open(SinkKind::ConsoleOut, LogLevel::Debug, "svc");
    logger.close();

    assert!(!logger.is_open());

    // A closed logger can be opened again with a new configuration.
    logger.open(SinkKind::ConsoleErr, LogLevel::Alert, "svc2");
    assert_eq!(logger.module_name(), "svc2");
    assert_eq!(logger.threshold(), LogLevel::Alert);
}

#[test]
fn level_set_and_reset_move_the_gate() {
    let mut logger = Logger::closed();
    logger.open(SinkKind::ConsoleOut, LogLevel::Warning, "svc");
    assert!(!logger.enabled(LogLevel::Debug));

    logger.level_set(LogLevel::Debug);
    assert!(logger.enabled(LogLevel::Debug));
    assert_eq!(logger.threshold(), LogLevel::Debug);

    logger.level_reset();
    assert_eq!(logger.threshold(), LogLevel::Warning);
    assert!(!logger.enabled(LogLevel::Debug));
}

#[test]
fn level_reset_targets_the_open_time_threshold_not_the_previous_one() {
    let mut logger = Logger::closed();
    logger.open(SinkKind::ConsoleOut, LogLevel::Error, "svc");
    logger.level_set(LogLevel::Info);
    logger.level_set(LogLevel::Debug);
    logger.level_reset();
    assert_eq!(logger.threshold(), LogLevel::Error);
}

#[test]
fn logging_on_a_closed_logger_does_not_panic() {
    let mut logger = Logger::closed();
    log_at!(logger, LogLevel::Emergency, "nowhere to go");
}

#[test]
fn console_emission_smoke() {
    let mut logger = Logger::closed();
    logger.open(SinkKind::ConsoleOut, LogLevel::Debug, "smoke");
    log_at!(logger, LogLevel::Info, "value={}", 5);
    log_at!(logger, LogLevel::Debug, "padding {}", "x".repeat(600));
    logger.close();
}
