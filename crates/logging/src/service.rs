//! crates/logging/src/service.rs
//
// External log service transport over syslog(3).
//
// Uses libc `openlog`/`syslog`/`closelog` directly rather than pulling in a
// dedicated syslog crate, keeping the dependency graph minimal. The
// connection lifecycle belongs to the logger: the connection opens when the
// service sink is selected and closes when the logger closes (or drops).

use std::ffi::CString;

use crate::level::{LogLevel, ServiceSeverity};
use crate::sink::CallSite;

/// Ident registered when the module name contains an interior NUL and cannot
/// be handed to openlog(3) as-is.
const FALLBACK_IDENT: &str = "logging";

/// Maps the service's level space onto syslog(3) priorities for transport.
const fn priority(severity: ServiceSeverity) -> libc::c_int {
    match severity {
        ServiceSeverity::Fatal => libc::LOG_CRIT,
        ServiceSeverity::Error => libc::LOG_ERR,
        ServiceSeverity::Warn => libc::LOG_WARNING,
        ServiceSeverity::Info => libc::LOG_INFO,
        ServiceSeverity::Debug => libc::LOG_DEBUG,
        // syslog has nothing below debug.
        ServiceSeverity::Verbose => libc::LOG_DEBUG,
    }
}

/// An open connection to the external log service.
///
/// Dropping the connection closes it, so the logger's `sink = None`
/// assignment in `close()` is all the teardown the service needs. Only one
/// connection should be active per process; the single-logger default
/// guarantees that.
#[derive(Debug)]
pub(crate) struct ServiceConnection {
    // syslog(3) stores the ident pointer internally; the allocation must
    // stay alive for as long as the connection is open.
    _ident: CString,
}

impl ServiceConnection {
    /// Opens the connection, registering `module` as the connection ident.
    pub(crate) fn open(module: &str) -> Self {
        let ident = CString::new(module).unwrap_or_else(|_| {
            CString::new(FALLBACK_IDENT).expect("fallback ident contains no NUL bytes")
        });
        // SAFETY: the ident pointer stays valid while the connection exists
        // because the CString is stored alongside it.
        unsafe {
            libc::openlog(ident.as_ptr(), libc::LOG_CONS, libc::LOG_LOCAL0);
        }
        Self { _ident: ident }
    }

    /// Sends one finished message at the mapped priority.
    pub(crate) fn send(&self, level: LogLevel, site: &CallSite, message: &str) {
        let payload = format!(
            "[{level}] {file}:{line}:{function}: {message}",
            level = level.as_str(),
            file = site.file_name(),
            line = site.line,
            function = site.function_name(),
        );
        // An interior NUL cannot be transported; drop the message rather
        // than corrupt it.
        let Ok(payload) = CString::new(payload) else {
            return;
        };
        // `%s` keeps `%` sequences in the payload from being interpreted by
        // syslog as format specifiers.
        // SAFETY: openlog has run (the connection exists) and both strings
        // are valid NUL-terminated C strings.
        unsafe {
            libc::syslog(
                priority(level.service_severity()),
                b"%s\0".as_ptr().cast::<libc::c_char>(),
                payload.as_ptr(),
            );
        }
    }
}

impl Drop for ServiceConnection {
    fn drop(&mut self) {
        // SAFETY: closelog has no preconditions beyond a prior openlog,
        // which construction guarantees.
        unsafe {
            libc::closelog();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priorities_collapse_onto_the_syslog_scale() {
        assert_eq!(priority(ServiceSeverity::Fatal), libc::LOG_CRIT);
        assert_eq!(priority(ServiceSeverity::Error), libc::LOG_ERR);
        assert_eq!(priority(ServiceSeverity::Warn), libc::LOG_WARNING);
        assert_eq!(priority(ServiceSeverity::Info), libc::LOG_INFO);
        assert_eq!(priority(ServiceSeverity::Debug), libc::LOG_DEBUG);
        assert_eq!(priority(ServiceSeverity::Verbose), libc::LOG_DEBUG);
    }

    #[test]
    fn open_and_send_do_not_panic() {
        let connection = ServiceConnection::open("logging-tests");
        let site = CallSite {
            file: "src/service.rs",
            line: 1,
            function: "tests::probe",
        };
        connection.send(LogLevel::Info, &site, "test message");
        connection.send(LogLevel::Debug, &site, "percent is safe: 100%");
    }

    #[test]
    fn open_survives_an_interior_nul_in_the_module_name() {
        let connection = ServiceConnection::open("bad\0name");
        let site = CallSite {
            file: "src/service.rs",
            line: 2,
            function: "tests::probe",
        };
        connection.send(LogLevel::Warning, &site, "still reachable");
    }
}
