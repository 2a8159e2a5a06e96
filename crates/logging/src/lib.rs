#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` is a leveled diagnostic gate in front of a single,
//! once-selected output sink. A [`Logger`] owns a module name, a mutable
//! severity threshold, and the sink resolved at open time; the
//! [`log_at!`] macro formats a message, captures the call site, and hands
//! the pair to [`Logger::log`], which emits only when the message is at
//! least as severe as the threshold.
//!
//! # Design
//!
//! The logger is an explicitly constructed object passed to call sites by
//! reference; [`global()`] offers the conventional one-per-process
//! instance for programs that want it. Sink selection is a closed choice
//! among [`SinkKind::ConsoleOut`], [`SinkKind::ConsoleErr`], and (on Unix,
//! under dynamic configuration) the external log service; it happens once
//! in [`Logger::open`] and each emission dispatches on the resolved
//! variant only. Messages are rendered into a bounded per-call stack
//! buffer of [`MESSAGE_MAX_LEN`] bytes, so the write path is reentrant and
//! allocation-light.
//!
//! With the `static-config` feature the module name, sink, and threshold
//! are build-time constants from [`config`]: `open`/`close` are not
//! compiled, and the external service sink does not exist in that profile.
//!
//! # Invariants
//!
//! - A message passes the gate iff its level is numerically at most the
//!   threshold (more severe or equal); everything else is suppressed
//!   before formatting.
//!
//! - No call dereferences an unset sink: logging on a closed logger is a
//!   detected misuse reported on stderr, never a panic.
//!
//! - Oversized messages truncate at [`MESSAGE_MAX_LEN`] and are still
//!   emitted; a failing `Display` implementation is replaced by a fallback
//!   echoing the raw template; a message that renders to zero characters
//!   emits nothing.
//!
//! # Errors
//!
//! The crate never surfaces errors to the caller: diagnostics must not
//! fail the code being diagnosed. Sink write failures are dropped,
//! configuration mistakes are corrected with a warning, and misuse is
//! reported on stderr.
//!
//! # Examples
//!
//! ```
//! use logging::{log_at, LogLevel, Logger, SinkKind};
//!
//! let mut logger = Logger::closed();
//! logger.open(SinkKind::ConsoleOut, LogLevel::Info, "svc");
//!
//! log_at!(logger, LogLevel::Info, "ready in {}ms", 12);
//! log_at!(logger, LogLevel::Debug, "suppressed at this threshold");
//!
//! logger.level_set(LogLevel::Debug);
//! log_at!(logger, LogLevel::Debug, "x={}", 5);
//! logger.level_reset();
//!
//! logger.close();
//! ```

mod buffer;
pub mod config;
mod global;
mod level;
mod logger;
#[cfg(all(unix, not(feature = "static-config")))]
#[allow(unsafe_code)]
mod service;
mod sink;

pub use buffer::MESSAGE_MAX_LEN;
#[cfg(not(feature = "static-config"))]
pub use config::LoggerConfig;
pub use global::global;
pub use level::{LogLevel, ServiceSeverity};
pub use logger::{DEFAULT_MODULE_NAME, Logger};
pub use sink::{CallSite, SinkKind};

/// Logs a formatted message at `level` through `logger`, capturing the
/// call site (file, line, and enclosing function).
///
/// The first argument is any value with the [`Logger::log`] emission
/// signature, normally a [`Logger`] or a mutable reference to one. The
/// format string must be a literal; it is passed through alongside the
/// formatted arguments so a failing render can still echo it.
///
/// # Examples
///
/// ```
/// use logging::{log_at, LogLevel, Logger, SinkKind};
///
/// let mut logger = Logger::closed();
/// logger.open(SinkKind::ConsoleErr, LogLevel::Warning, "svc");
/// log_at!(logger, LogLevel::Warning, "disk {}% full", 93);
/// ```
#[macro_export]
macro_rules! log_at {
    ($logger:expr, $level:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        $logger.log(
            $level,
            $crate::CallSite {
                file: file!(),
                line: line!(),
                function: $crate::__function_name!(),
            },
            $fmt,
            format_args!($fmt $(, $arg)*),
        )
    };
}

// Resolves the fully qualified name of the enclosing function by probing
// the type name of a local item. There is no intrinsic for this.
#[doc(hidden)]
#[macro_export]
macro_rules! __function_name {
    () => {{
        fn probe() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(probe);
        name.strip_suffix("::probe").unwrap_or(name)
    }};
}
