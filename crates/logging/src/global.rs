//! crates/logging/src/global.rs
//! Process-wide default logger instance.

use std::sync::{Mutex, OnceLock};

use crate::Logger;

/// Returns the process-wide default logger.
///
/// The instance starts closed in dynamic configuration and already open in
/// the static profile. The mutex is the safe rendition of caller-serialized
/// shared state: programs that are single-threaded (or that confine logging
/// to one thread) simply hold the guard for the duration of a scope, and
/// nothing else in the crate takes it implicitly — call sites that prefer an
/// explicitly owned [`Logger`] never touch this handle.
pub fn global() -> &'static Mutex<Logger> {
    static GLOBAL: OnceLock<Mutex<Logger>> = OnceLock::new();
    GLOBAL.get_or_init(|| Mutex::new(Logger::default()))
}
