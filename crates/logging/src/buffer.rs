//! crates/logging/src/buffer.rs
//! Bounded per-call formatting buffer for the write path.

use std::fmt;

/// Upper bound on a formatted message, in bytes. Longer messages are
/// truncated, never dropped.
pub const MESSAGE_MAX_LEN: usize = 512;

/// Fixed-capacity formatting target for a single log call.
///
/// Lives on the stack of [`Logger::log`](crate::Logger::log), so concurrent
/// or reentrant callers never share formatting state. Writes past capacity
/// are cut at a UTF-8 character boundary and reported as success: truncation
/// is not a formatting failure, and the truncated message is still emitted.
/// Only a genuine error from a `Display` implementation surfaces as
/// [`fmt::Error`].
pub(crate) struct MessageBuf {
    buf: [u8; MESSAGE_MAX_LEN],
    len: usize,
    truncated: bool,
}

impl MessageBuf {
    pub(crate) const fn new() -> Self {
        Self {
            buf: [0; MESSAGE_MAX_LEN],
            len: 0,
            truncated: false,
        }
    }

    /// Returns the formatted contents.
    pub(crate) fn as_str(&self) -> &str {
        // Writes only ever copy whole UTF-8 sequences.
        std::str::from_utf8(&self.buf[..self.len]).unwrap_or_default()
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[cfg(test)]
    pub(crate) const fn is_truncated(&self) -> bool {
        self.truncated
    }
}

impl fmt::Write for MessageBuf {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.truncated {
            return Ok(());
        }
        let remaining = MESSAGE_MAX_LEN - self.len;
        if s.len() <= remaining {
            self.buf[self.len..self.len + s.len()].copy_from_slice(s.as_bytes());
            self.len += s.len();
        } else {
            let mut cut = remaining;
            while cut > 0 && !s.is_char_boundary(cut) {
                cut -= 1;
            }
            self.buf[self.len..self.len + cut].copy_from_slice(&s.as_bytes()[..cut]);
            self.len += cut;
            self.truncated = true;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt::Write as _;

    #[test]
    fn short_writes_accumulate() {
        let mut buf = MessageBuf::new();
        write!(buf, "x={}", 5).expect("formatting succeeds");
        write!(buf, " y={}", 6).expect("formatting succeeds");
        assert_eq!(buf.as_str(), "x=5 y=6");
        assert!(!buf.is_truncated());
    }

    #[test]
    fn empty_buffer_reports_empty() {
        let buf = MessageBuf::new();
        assert!(buf.is_empty());
        assert_eq!(buf.as_str(), "");
    }

    #[test]
    fn oversized_write_truncates_without_error() {
        let mut buf = MessageBuf::new();
        let long = "a".repeat(MESSAGE_MAX_LEN * 2);
        write!(buf, "{long}").expect("truncation is not an error");
        assert_eq!(buf.as_str().len(), MESSAGE_MAX_LEN);
        assert!(buf.is_truncated());
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let mut buf = MessageBuf::new();
        // Fill up to two bytes short of capacity, then write a 3-byte char.
        let prefix = "a".repeat(MESSAGE_MAX_LEN - 2);
        write!(buf, "{prefix}\u{20ac}").expect("truncation is not an error");
        assert_eq!(buf.as_str(), prefix);
        assert!(buf.is_truncated());
    }

    #[test]
    fn writes_after_truncation_are_ignored() {
        let mut buf = MessageBuf::new();
        let long = "b".repeat(MESSAGE_MAX_LEN + 1);
        write!(buf, "{long}").expect("truncation is not an error");
        write!(buf, "tail").expect("ignored write still succeeds");
        assert_eq!(buf.as_str().len(), MESSAGE_MAX_LEN);
        assert!(!buf.as_str().ends_with("tail"));
    }

    #[test]
    fn display_errors_propagate() {
        struct Broken;
        impl std::fmt::Display for Broken {
            fn fmt(&self, _: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                Err(std::fmt::Error)
            }
        }
        let mut buf = MessageBuf::new();
        assert!(write!(buf, "{Broken}").is_err());
    }
}
