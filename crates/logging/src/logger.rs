//! crates/logging/src/logger.rs
//! Logger state, lifecycle, and the gated write path.

use std::fmt::{self, Write as _};

use crate::buffer::MessageBuf;
use crate::level::LogLevel;
#[cfg(all(unix, not(feature = "static-config")))]
use crate::service::ServiceConnection;
use crate::sink::{ActiveSink, CallSite, SinkKind};

#[cfg(not(feature = "static-config"))]
use crate::config::LoggerConfig;

/// Module name substituted when `open` receives an empty one.
pub const DEFAULT_MODULE_NAME: &str = "unnamed";

/// Leveled gate in front of a single output sink.
///
/// One instance per process is the expected default (see
/// [`global()`](crate::global())); call sites receive it as a context
/// reference. Every operation runs to completion on the caller's thread
/// with no suspension points, and the type carries no lock of its own:
/// cross-thread use must be serialized by the caller.
///
/// In dynamic configuration the logger starts closed and is configured by
/// [`open`](Self::open); with the `static-config` feature the configuration
/// is fixed at build time and [`Default`] yields the already-open logger.
#[derive(Debug)]
pub struct Logger {
    module: String,
    sink: Option<ActiveSink>,
    threshold: LogLevel,
    original: LogLevel,
}

#[cfg(not(feature = "static-config"))]
impl Logger {
    /// Creates a logger with no sink.
    ///
    /// Leveled calls on a closed logger are refused with a one-line stderr
    /// notice until [`open`](Self::open) runs; they never panic.
    pub const fn closed() -> Self {
        Self {
            module: String::new(),
            sink: None,
            threshold: LogLevel::Debug,
            original: LogLevel::Debug,
        }
    }

    /// Opens the logger: records the module name, fixes the original
    /// threshold, and resolves `kind` to a concrete sink (opening the
    /// external service connection when that sink is selected).
    ///
    /// An empty `module` is replaced by [`DEFAULT_MODULE_NAME`]. Calling
    /// `open` on an already-open logger logs one warning through the
    /// existing configuration and leaves every setting untouched.
    pub fn open(&mut self, kind: SinkKind, level: LogLevel, module: &str) {
        if self.sink.is_some() {
            let module = self.module.clone();
            crate::log_at!(
                self,
                LogLevel::Warning,
                "open() called twice in module {}; keeping the existing configuration",
                module
            );
            return;
        }
        self.module = if module.is_empty() {
            DEFAULT_MODULE_NAME.to_string()
        } else {
            module.to_string()
        };
        self.threshold = level;
        self.original = level;
        self.sink = Some(match kind {
            SinkKind::ConsoleOut => ActiveSink::ConsoleOut,
            SinkKind::ConsoleErr => ActiveSink::ConsoleErr,
            #[cfg(unix)]
            SinkKind::ExternalService => {
                ActiveSink::Service(ServiceConnection::open(&self.module))
            }
        });
    }

    /// Opens the logger from an untyped configuration record.
    ///
    /// Invalid input is corrected rather than rejected: an unknown sink
    /// name degrades to stderr and an out-of-range level clamps to the
    /// lowest-verbosity legal value ([`LogLevel::Emergency`]). Both
    /// corrections warn directly on stderr, because the logger is not yet
    /// usable to report them itself. Never fails.
    pub fn open_config(&mut self, config: &LoggerConfig) {
        let kind = SinkKind::from_name(&config.sink).unwrap_or_else(|| {
            eprintln!(
                "warning: unknown log sink {:?}; falling back to {}",
                config.sink,
                SinkKind::ConsoleErr
            );
            SinkKind::ConsoleErr
        });
        let level = LogLevel::from_raw(config.level).unwrap_or_else(|| {
            eprintln!(
                "warning: log level {} out of range; clamping to {}",
                config.level,
                LogLevel::Emergency
            );
            LogLevel::Emergency
        });
        self.open(kind, level, &config.module);
    }

    /// Closes the logger: drops the sink (closing the external service
    /// connection when one is active) and clears the module name.
    ///
    /// Safe to call on a logger that was never opened.
    pub fn close(&mut self) {
        self.sink = None;
        self.module.clear();
    }
}

#[cfg(not(feature = "static-config"))]
impl Default for Logger {
    fn default() -> Self {
        Self::closed()
    }
}

#[cfg(feature = "static-config")]
impl Logger {
    /// Returns the logger fixed by the build-time constants in
    /// [`crate::config`]: there is nothing to open or close.
    pub fn preconfigured() -> Self {
        Self {
            module: crate::config::STATIC_MODULE_NAME.to_string(),
            sink: Some(match crate::config::STATIC_SINK {
                SinkKind::ConsoleOut => ActiveSink::ConsoleOut,
                SinkKind::ConsoleErr => ActiveSink::ConsoleErr,
            }),
            threshold: crate::config::STATIC_LEVEL,
            original: crate::config::STATIC_LEVEL,
        }
    }
}

#[cfg(feature = "static-config")]
impl Default for Logger {
    fn default() -> Self {
        Self::preconfigured()
    }
}

impl Logger {
    /// Overwrites the current threshold. No validation, never fails.
    pub fn level_set(&mut self, level: LogLevel) {
        self.threshold = level;
    }

    /// Restores the threshold recorded when the logger was opened.
    pub fn level_reset(&mut self) {
        self.threshold = self.original;
    }

    /// Current threshold: the most verbose level still admitted.
    pub const fn threshold(&self) -> LogLevel {
        self.threshold
    }

    /// Module name reported on every line; empty while closed.
    pub fn module_name(&self) -> &str {
        &self.module
    }

    /// Reports whether a sink is configured.
    pub const fn is_open(&self) -> bool {
        self.sink.is_some()
    }

    /// Reports whether a message at `level` would currently be emitted.
    pub const fn enabled(&self, level: LogLevel) -> bool {
        self.sink.is_some() && level.passes(self.threshold)
    }

    /// The core write path. Prefer the [`log_at!`](crate::log_at) macro,
    /// which captures the call site and the raw template.
    ///
    /// With no sink configured this writes a fixed notice to stderr — the
    /// one path that bypasses the sink abstraction, since it reports the
    /// absence of one — and returns. Otherwise the message is emitted only
    /// when `level` passes the threshold: it is rendered into a bounded
    /// per-call buffer (truncating, never overflowing), a failing `Display`
    /// implementation is replaced by a fallback that echoes `template`, and
    /// a message that rendered to zero characters suppresses the sink call
    /// entirely.
    pub fn log(&mut self, level: LogLevel, site: CallSite, template: &str, args: fmt::Arguments<'_>) {
        let Some(sink) = self.sink.as_mut() else {
            eprintln!("error: log() called before the logger was opened; message dropped");
            return;
        };
        if !level.passes(self.threshold) {
            return;
        }

        let mut message = MessageBuf::new();
        if message.write_fmt(args).is_err() {
            // Keep the line: substitute a fallback that echoes the template.
            message = MessageBuf::new();
            let _ = write!(message, "(failed to format message) {template}");
        }
        if message.is_empty() {
            return;
        }
        sink.dispatch(&self.module, level, &site, message.as_str());
    }
}

#[cfg(test)]
impl Logger {
    /// Points the logger at an in-memory capture sink.
    pub(crate) fn open_capture(&mut self, level: LogLevel, module: &str) {
        self.module = module.to_string();
        self.threshold = level;
        self.original = level;
        self.sink = Some(ActiveSink::Capture(Vec::new()));
    }

    /// Lines captured by [`Logger::open_capture`].
    pub(crate) fn captured(&self) -> &[String] {
        match &self.sink {
            Some(ActiveSink::Capture(lines)) => lines,
            _ => &[],
        }
    }
}
