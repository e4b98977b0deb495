//! Sinks.
//!
//! Any `io::Write + Send` value can receive records. A sink must pass bytes
//! through unchanged, NUL included, or tokenized text literals lose their end
//! markers.
//!
//! [`SharedBuffer`] is an in-memory sink whose contents stay readable after it
//! has been handed to a logger.

use parking_lot::Mutex;
use std::io;
use std::sync::Arc;

/// Boxed sink held by a [`Logger`](crate::Logger).
pub type BoxedSink = Box<dyn io::Write + Send>;

/// Cloneable in-memory sink. All clones share one buffer.
///
/// # Examples
///
/// ```rust
/// use ctlog::{Logger, LoggerOptions, Severity, SharedBuffer};
///
/// let buffer = SharedBuffer::new();
/// let logger = Logger::tokenized(LoggerOptions::new().with_enabled(true));
/// logger.set_sink(buffer.clone());
/// logger.log(Severity::Info, 3, 42, &[]).unwrap();
/// assert_eq!(buffer.contents(), b"$TL000,I,3,42,0,\n");
/// ```
#[derive(Clone, Debug, Default)]
pub struct SharedBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything written so far.
    #[must_use]
    pub fn contents(&self) -> Vec<u8> {
        self.inner.lock().clone()
    }

    /// Removes and returns everything written so far.
    pub fn take(&self) -> Vec<u8> {
        std::mem::take(&mut *self.inner.lock())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}

impl io::Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_clones_share_contents() {
        let buffer = SharedBuffer::new();
        let mut writer = buffer.clone();
        writer.write_all(b"abc").unwrap();
        writer.flush().unwrap();
        assert_eq!(buffer.contents(), b"abc");
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.take(), b"abc");
        assert!(buffer.is_empty());
    }
}
