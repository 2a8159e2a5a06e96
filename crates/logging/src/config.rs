//! crates/logging/src/config.rs
//! Untyped logger configuration and the build-time static profile.

/// Logger configuration as read from an untyped source such as a
/// configuration file, the environment, or a command line.
///
/// The fields are deliberately raw: validation happens in
/// [`Logger::open_config`](crate::Logger::open_config), which corrects
/// invalid input and warns instead of failing, so a bad configuration can
/// never leave the process without diagnostics.
#[cfg(not(feature = "static-config"))]
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoggerConfig {
    /// Module name reported on every line; empty selects the default.
    pub module: String,
    /// Sink name: `"stdout"`, `"stderr"`, or `"service"`.
    pub sink: String,
    /// Numeric initial threshold, `0` (emergency) through `7` (debug).
    pub level: i64,
}

/// Module name of the build-time-fixed logger.
#[cfg(feature = "static-config")]
pub const STATIC_MODULE_NAME: &str = "main";

/// Sink of the build-time-fixed logger. The external service is not part of
/// this profile: its connection lifecycle requires open/close.
#[cfg(feature = "static-config")]
pub const STATIC_SINK: crate::SinkKind = crate::SinkKind::ConsoleOut;

/// Initial (and original) threshold of the build-time-fixed logger.
#[cfg(feature = "static-config")]
pub const STATIC_LEVEL: crate::LogLevel = crate::LogLevel::Debug;
