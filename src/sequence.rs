//! Event sequence numbers.

use std::sync::atomic::{AtomicU16, Ordering};

/// Wrapping 16-bit counter stamped on every log call.
///
/// Each call to [`next`](SequenceCounter::next) returns a distinct value even
/// when called from several threads; after 65535 the counter wraps to 0.
///
/// # Examples
///
/// ```rust
/// use ctlog::SequenceCounter;
///
/// let counter = SequenceCounter::starting_at(u16::MAX);
/// assert_eq!(counter.next(), u16::MAX);
/// assert_eq!(counter.next(), 0);
/// ```
#[derive(Debug, Default)]
pub struct SequenceCounter(AtomicU16);

impl SequenceCounter {
    #[must_use]
    pub const fn new() -> Self {
        SequenceCounter(AtomicU16::new(0))
    }

    #[must_use]
    pub const fn starting_at(value: u16) -> Self {
        SequenceCounter(AtomicU16::new(value))
    }

    /// Returns the value for the current event and advances.
    pub fn next(&self) -> u16 {
        // fetch_add on atomics wraps on overflow
        self.0.fetch_add(1, Ordering::Relaxed)
    }

    /// Value the next event will receive.
    #[must_use]
    pub fn peek(&self) -> u16 {
        self.0.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_starts_at_zero() {
        let counter = SequenceCounter::new();
        assert_eq!(counter.next(), 0);
        assert_eq!(counter.next(), 1);
        assert_eq!(counter.peek(), 2);
    }

    #[test]
    fn test_wraps_silently() {
        let counter = SequenceCounter::starting_at(65534);
        assert_eq!(counter.next(), 65534);
        assert_eq!(counter.next(), 65535);
        assert_eq!(counter.next(), 0);
    }

    #[test]
    fn test_unique_across_threads() {
        let counter = Arc::new(SequenceCounter::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let counter = Arc::clone(&counter);
                thread::spawn(move || (0..1000).map(|_| counter.next()).collect::<Vec<_>>())
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for value in handle.join().unwrap() {
                assert!(seen.insert(value));
            }
        }
        assert_eq!(seen.len(), 4000);
        assert_eq!(counter.peek(), 4000);
    }
}
