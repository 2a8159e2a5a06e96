#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `check` layers a uniform "test a condition, log, record a status,
//! transfer control" pattern over the [`logging`] gate. Each macro
//! evaluates a boolean condition; when it holds, the macro logs a message
//! at a caller-chosen level and performs its effect — assign a
//! caller-owned status variable, return early, break out of a named block,
//! or nothing beyond the log. When the condition is false, nothing
//! happens.
//!
//! The macros keep policy with the caller: the library reports and plumbs,
//! the call site decides severity, status code, and where control goes.
//!
//! # Design
//!
//! Failure paths unwind structurally rather than by jumping to a label:
//!
//! - [`check!`] returns the new status from the enclosing function. The
//!   function exit is the conventional cleanup point — resources held in
//!   scope guards are released by their `Drop` implementations in reverse
//!   declaration order, which preserves the property that cleanup steps
//!   declared later still run after an earlier exit.
//! - [`check_break!`] breaks out of a caller-named labeled block, for
//!   functions that need several distinct unwind paths (for example,
//!   rolling back different subsets of partially acquired resources).
//! - [`check_continue!`] records the status and falls through, for
//!   non-fatal conditions worth noting but not worth aborting for.
//! - [`log_if!`] is the pure conditional diagnostic.
//! - [`rt_assert!`] escalates: it logs at EMERGENCY and panics in debug
//!   builds; release builds log an ALERT and continue.
//!
//! Every macro has a `debug_`-prefixed twin that is compiled to a
//! constant-false branch outside debug builds (`cfg!(debug_assertions)`,
//! the same switch as [`debug_assert!`]): arguments are type-checked but
//! never evaluated at runtime, and a label referenced only by a disabled
//! check still counts as used.
//!
//! # Examples
//!
//! ```
//! use check::{check, check_continue};
//! use logging::{LogLevel, Logger, SinkKind};
//!
//! fn transfer(logger: &mut Logger, connected: bool, lossy: bool) -> i32 {
//!     let mut status = 0;
//!     check!(logger, !connected, status = -1, LogLevel::Error, "no connection");
//!     check_continue!(logger, lossy, status = 1, LogLevel::Warning, "lossy link");
//!     status
//! }
//!
//! let mut logger = Logger::closed();
//! logger.open(SinkKind::ConsoleOut, LogLevel::Info, "xfer");
//! assert_eq!(transfer(&mut logger, false, false), -1);
//! assert_eq!(transfer(&mut logger, true, true), 1);
//! ```

#[doc(hidden)]
pub use logging as __logging;

/// On `cond`, logs at `level`, assigns `var = new`, and returns `var` from
/// the enclosing function.
///
/// The enclosing function must return the status type and is the
/// conventional cleanup point: scoped releases run as drops, latest first.
/// Exactly one message is emitted per triggered check.
///
/// # Examples
///
/// ```
/// use check::check;
/// use logging::{LogLevel, Logger, SinkKind};
///
/// fn parse(logger: &mut Logger, input: &str) -> i32 {
///     let mut status = 0;
///     check!(logger, input.is_empty(), status = -2, LogLevel::Error, "empty input");
///     status
/// }
///
/// let mut logger = Logger::closed();
/// logger.open(SinkKind::ConsoleErr, LogLevel::Error, "parse");
/// assert_eq!(parse(&mut logger, ""), -2);
/// assert_eq!(parse(&mut logger, "ok"), 0);
/// ```
#[macro_export]
macro_rules! check {
    ($logger:expr, $cond:expr, $var:ident = $new:expr, $level:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        if $cond {
            $crate::__logging::log_at!($logger, $level, $fmt $(, $arg)*);
            $var = $new;
            return $var;
        }
    };
}

/// On `cond`, logs at `level`, assigns `var = new`, and breaks out of the
/// caller-named labeled block.
///
/// Use when one function needs several distinct unwind paths; code after
/// the targeted block is the cleanup for everything acquired before it.
///
/// # Examples
///
/// ```
/// use check::check_break;
/// use logging::{LogLevel, Logger, SinkKind};
///
/// let mut logger = Logger::closed();
/// logger.open(SinkKind::ConsoleErr, LogLevel::Warning, "acquire");
///
/// let mut status = 0;
/// 'setup: {
///     check_break!(logger, true, 'setup, status = -1, LogLevel::Warning, "partial setup");
///     unreachable!();
/// }
/// assert_eq!(status, -1);
/// ```
#[macro_export]
macro_rules! check_break {
    ($logger:expr, $cond:expr, $label:lifetime, $var:ident = $new:expr, $level:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        if $cond {
            $crate::__logging::log_at!($logger, $level, $fmt $(, $arg)*);
            $var = $new;
            break $label;
        }
    };
}

/// On `cond`, logs at `level` and assigns `var = new`; execution continues
/// at the next statement.
#[macro_export]
macro_rules! check_continue {
    ($logger:expr, $cond:expr, $var:ident = $new:expr, $level:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        if $cond {
            $crate::__logging::log_at!($logger, $level, $fmt $(, $arg)*);
            $var = $new;
        }
    };
}

/// On `cond`, logs at `level`. No status assignment, no control transfer.
#[macro_export]
macro_rules! log_if {
    ($logger:expr, $cond:expr, $level:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        if $cond {
            $crate::__logging::log_at!($logger, $level, $fmt $(, $arg)*);
        }
    };
}

/// Runtime assertion routed through the logger.
///
/// When `cond` is false: logs the condition text and the message at
/// EMERGENCY, then panics in debug builds. Release builds log one ALERT
/// and continue, so a production process is never aborted on the
/// library's behalf.
#[macro_export]
macro_rules! rt_assert {
    ($logger:expr, $cond:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        if !$cond {
            $crate::__logging::log_at!(
                $logger,
                $crate::__logging::LogLevel::Emergency,
                "assertion `{}` failed",
                stringify!($cond)
            );
            $crate::__logging::log_at!(
                $logger,
                $crate::__logging::LogLevel::Emergency,
                $fmt $(, $arg)*
            );
            if cfg!(debug_assertions) {
                panic!("assertion `{}` failed", stringify!($cond));
            }
            $crate::__logging::log_at!(
                $logger,
                $crate::__logging::LogLevel::Alert,
                "assertions are disabled; continuing after a failed assertion"
            );
        }
    };
}

/// Debug-build twin of [`check!`]; a constant-false branch otherwise.
#[macro_export]
macro_rules! debug_check {
    ($logger:expr, $cond:expr, $var:ident = $new:expr, $level:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        if cfg!(debug_assertions) {
            $crate::check!($logger, $cond, $var = $new, $level, $fmt $(, $arg)*);
        }
    };
}

/// Debug-build twin of [`check_break!`]; a constant-false branch
/// otherwise. The label stays referenced, so release builds do not warn
/// about it being unused.
#[macro_export]
macro_rules! debug_check_break {
    ($logger:expr, $cond:expr, $label:lifetime, $var:ident = $new:expr, $level:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        if cfg!(debug_assertions) {
            $crate::check_break!($logger, $cond, $label, $var = $new, $level, $fmt $(, $arg)*);
        }
    };
}

/// Debug-build twin of [`check_continue!`]; a constant-false branch
/// otherwise.
#[macro_export]
macro_rules! debug_check_continue {
    ($logger:expr, $cond:expr, $var:ident = $new:expr, $level:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        if cfg!(debug_assertions) {
            $crate::check_continue!($logger, $cond, $var = $new, $level, $fmt $(, $arg)*);
        }
    };
}

/// Debug-build twin of [`log_if!`]; a constant-false branch otherwise.
#[macro_export]
macro_rules! debug_log_if {
    ($logger:expr, $cond:expr, $level:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        if cfg!(debug_assertions) {
            $crate::log_if!($logger, $cond, $level, $fmt $(, $arg)*);
        }
    };
}

/// Debug-build twin of [`rt_assert!`]; a constant-false branch otherwise.
#[macro_export]
macro_rules! debug_rt_assert {
    ($logger:expr, $cond:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        if cfg!(debug_assertions) {
            $crate::rt_assert!($logger, $cond, $fmt $(, $arg)*);
        }
    };
}
