//! crates/logging/src/sink.rs
//! Sink selection and console line rendering.

use std::fmt;
use std::io::{self, Write};

use crate::level::LogLevel;
#[cfg(all(unix, not(feature = "static-config")))]
use crate::service::ServiceConnection;

/// Destination an opened logger routes its messages to.
///
/// The set is closed: resolution to a concrete sink happens exactly once,
/// inside [`Logger::open`](crate::Logger::open), and every later emission
/// dispatches on the resolved variant without re-checking the kind.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SinkKind {
    /// Line-oriented output on standard out.
    ConsoleOut,
    /// Line-oriented output on standard error.
    ConsoleErr,
    /// The external log service. Requires dynamic configuration (its
    /// connection lifecycle is tied to open/close) and a Unix target.
    #[cfg(all(unix, not(feature = "static-config")))]
    ExternalService,
}

impl SinkKind {
    /// Parses a configuration-file sink name, case-insensitive.
    ///
    /// Returns `None` for unrecognised names; the configuration path
    /// substitutes [`SinkKind::ConsoleErr`] and warns.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "stdout" => Some(Self::ConsoleOut),
            "stderr" => Some(Self::ConsoleErr),
            #[cfg(all(unix, not(feature = "static-config")))]
            "service" => Some(Self::ExternalService),
            _ => None,
        }
    }

    /// Returns the sink name as it appears in configuration files.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ConsoleOut => "stdout",
            Self::ConsoleErr => "stderr",
            #[cfg(all(unix, not(feature = "static-config")))]
            Self::ExternalService => "service",
        }
    }
}

impl fmt::Display for SinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source location a message was logged from.
///
/// Built by the [`log_at!`](crate::log_at) macro; the file is the full
/// `file!()` path and the function the fully qualified name, both reduced to
/// their final component at render time.
#[derive(Clone, Copy, Debug)]
pub struct CallSite {
    /// Path of the file containing the call, as produced by `file!()`.
    pub file: &'static str,
    /// 1-based source line of the call.
    pub line: u32,
    /// Fully qualified path of the function containing the call.
    pub function: &'static str,
}

impl CallSite {
    /// Final path component of [`CallSite::file`].
    pub fn file_name(&self) -> &'static str {
        self.file.rsplit(['/', '\\']).next().unwrap_or(self.file)
    }

    /// Final segment of [`CallSite::function`].
    pub fn function_name(&self) -> &'static str {
        self.function.rsplit("::").next().unwrap_or(self.function)
    }
}

/// The sink resolved at open time.
#[derive(Debug)]
pub(crate) enum ActiveSink {
    ConsoleOut,
    ConsoleErr,
    #[cfg(all(unix, not(feature = "static-config")))]
    Service(ServiceConnection),
    /// In-memory capture target for emission tests.
    #[cfg(test)]
    Capture(Vec<String>),
}

impl ActiveSink {
    /// Hands one finished message to the concrete destination.
    pub(crate) fn dispatch(&mut self, module: &str, level: LogLevel, site: &CallSite, message: &str) {
        match self {
            Self::ConsoleOut => write_console(&mut io::stdout().lock(), module, level, site, message),
            Self::ConsoleErr => write_console(&mut io::stderr().lock(), module, level, site, message),
            #[cfg(all(unix, not(feature = "static-config")))]
            Self::Service(connection) => connection.send(level, site, message),
            #[cfg(test)]
            Self::Capture(lines) => lines.push(render_console_line(module, level, site, message)),
        }
    }
}

/// Renders the console line:
/// `<module>: [<LEVEL>] <file>:<line>:<function>: <message>`.
pub(crate) fn render_console_line(
    module: &str,
    level: LogLevel,
    site: &CallSite,
    message: &str,
) -> String {
    format!(
        "{module}: [{level}] {file}:{line}:{function}: {message}",
        level = level.as_str(),
        file = site.file_name(),
        line = site.line,
        function = site.function_name(),
    )
}

fn write_console<W: Write>(out: &mut W, module: &str, level: LogLevel, site: &CallSite, message: &str) {
    // A failed console write has nowhere left to report to; drop it.
    let _ = writeln!(out, "{}", render_console_line(module, level, site, message));
}
