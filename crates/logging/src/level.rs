//! crates/logging/src/level.rs
//! Severity levels and the external service level mapping.

use std::fmt;

/// Message severity, ascending verbosity.
///
/// Lower discriminants are more severe: [`LogLevel::Emergency`] is the most
/// severe level and [`LogLevel::Debug`] the most verbose. The gate admits a
/// message when it is at least as severe as the configured threshold, so a
/// threshold of [`LogLevel::Info`] suppresses only [`LogLevel::Debug`]
/// traffic.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum LogLevel {
    /// System is unusable.
    Emergency = 0,
    /// Action must be taken immediately.
    Alert = 1,
    /// Critical conditions.
    Critical = 2,
    /// Error conditions.
    Error = 3,
    /// Warning conditions.
    Warning = 4,
    /// Normal but significant condition.
    Notice = 5,
    /// Informational.
    Info = 6,
    /// Debug-level messages.
    Debug = 7,
}

impl LogLevel {
    /// Returns the display name used on every rendered line.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Emergency => "EMERGENCY",
            Self::Alert => "ALERT",
            Self::Critical => "CRITICAL",
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::Notice => "NOTICE",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
        }
    }

    /// Parses an untyped numeric level.
    ///
    /// Returns `None` outside `0..=7`. Callers that must not fail (the
    /// configuration path) substitute [`LogLevel::Emergency`] and warn.
    pub const fn from_raw(raw: i64) -> Option<Self> {
        match raw {
            0 => Some(Self::Emergency),
            1 => Some(Self::Alert),
            2 => Some(Self::Critical),
            3 => Some(Self::Error),
            4 => Some(Self::Warning),
            5 => Some(Self::Notice),
            6 => Some(Self::Info),
            7 => Some(Self::Debug),
            _ => None,
        }
    }

    /// Reports whether a message at `self` passes a gate configured at
    /// `threshold`, i.e. whether it is at most as verbose as the threshold.
    pub const fn passes(self, threshold: Self) -> bool {
        (self as u8) <= (threshold as u8)
    }

    /// Maps the level into the external log service's own level space.
    ///
    /// The correspondence is fixed: Emergency/Alert collapse to
    /// [`ServiceSeverity::Fatal`], Critical/Error to
    /// [`ServiceSeverity::Error`], and the remaining levels shift one step
    /// toward the verbose end of the service's scale.
    pub const fn service_severity(self) -> ServiceSeverity {
        match self {
            Self::Emergency | Self::Alert => ServiceSeverity::Fatal,
            Self::Critical | Self::Error => ServiceSeverity::Error,
            Self::Warning => ServiceSeverity::Warn,
            Self::Notice => ServiceSeverity::Info,
            Self::Info => ServiceSeverity::Debug,
            Self::Debug => ServiceSeverity::Verbose,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity in the external log service's own level space.
///
/// The service exposes six levels where the logger has eight; the mapping in
/// [`LogLevel::service_severity`] is the only way to produce one.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ServiceSeverity {
    /// Unrecoverable failure.
    Fatal,
    /// Operation failed.
    Error,
    /// Suspicious but non-fatal condition.
    Warn,
    /// Routine operational message.
    Info,
    /// Diagnostic detail.
    Debug,
    /// High-volume tracing detail.
    Verbose,
}
