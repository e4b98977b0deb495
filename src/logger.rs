//! The logger context.
//!
//! A [`Logger`] owns everything a log call needs: the emission gate (enabled
//! flag and sink), the sequence counter and the set of compiled-in severities.
//! The wire format is chosen through the encoder type parameter, so it is
//! fixed when the logger is built.
//!
//! ## Call Flow
//!
//! 1. A severity outside the level mask returns immediately, as if the call
//!    site had been compiled out.
//! 2. Otherwise the call takes the next sequence number, whether or not
//!    anything is written.
//! 3. With logging enabled and a sink set, the event is encoded into a scratch
//!    buffer and handed to the sink in a single `write_all`.
//!
//! Sequence numbers are taken under the same lock that guards the sink, so
//! records reach the sink in sequence order even with concurrent callers.
//!
//! Calls made while disabled or without a sink still use up a sequence number.
//! Nothing is written for them, so a reader sees a gap it cannot tell apart
//! from a lost record.
//!
//! ```rust
//! use ctlog::{Argument, Logger, LoggerOptions, Severity, SharedBuffer};
//!
//! let sink = SharedBuffer::new();
//! let logger = Logger::json(LoggerOptions::new());
//! logger.set_sink(sink.clone());
//!
//! logger.log(Severity::Info, 0, 1, &[]).unwrap(); // disabled: seq 0 is skipped
//! logger.set_enabled(true);
//! logger.log(Severity::Error, 1, 7, &[Argument::UInt(9)]).unwrap();
//!
//! assert_eq!(
//!     sink.contents(),
//!     b"{\"ctlog\":0,\"seq\":1,\"lvl\":\"E\",\"mi\":1,\"ml\":7,\"args\":[{\"t\":4,\"v\":9}]}\n"
//! );
//! ```

use crate::sink::BoxedSink;
use crate::{
    Argument, Encoder, Error, Event, Format, JsonEncoder, LevelMask, LoggerOptions, ModuleId,
    Result, SequenceCounter, Severity, TokenizedEncoder,
};
use parking_lot::Mutex;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};

struct Output {
    sink: Option<BoxedSink>,
    scratch: Vec<u8>,
}

/// Logger context: emission gate, sequence counter and encoder.
pub struct Logger<E = TokenizedEncoder> {
    encoder: E,
    levels: LevelMask,
    enabled: AtomicBool,
    sequence: SequenceCounter,
    output: Mutex<Output>,
}

impl Logger<TokenizedEncoder> {
    /// Creates a logger writing tokenized records.
    #[must_use]
    pub fn tokenized(options: LoggerOptions) -> Self {
        Logger::new(TokenizedEncoder, options)
    }
}

impl Logger<JsonEncoder> {
    /// Creates a logger writing JSON records.
    #[must_use]
    pub fn json(options: LoggerOptions) -> Self {
        Logger::new(JsonEncoder, options)
    }
}

impl<E: Encoder + Default> Default for Logger<E> {
    fn default() -> Self {
        Logger::new(E::default(), LoggerOptions::default())
    }
}

impl<E: Encoder> Logger<E> {
    /// Creates a logger with no sink.
    pub fn new(encoder: E, options: LoggerOptions) -> Self {
        Logger {
            encoder,
            levels: options.levels,
            enabled: AtomicBool::new(options.enabled),
            sequence: SequenceCounter::new(),
            output: Mutex::new(Output {
                sink: None,
                scratch: Vec::with_capacity(128),
            }),
        }
    }

    #[must_use]
    pub fn format(&self) -> Format {
        E::FORMAT
    }

    #[must_use]
    pub fn levels(&self) -> LevelMask {
        self.levels
    }

    pub fn set_enabled(&self, enabled: bool) {
        let previous = self.enabled.swap(enabled, Ordering::AcqRel);
        if previous != enabled {
            tracing::debug!(enabled, format = E::FORMAT.as_str(), "logging toggled");
        }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }

    /// Selects the sink records are written to and returns the previous one.
    pub fn set_sink<W>(&self, sink: W) -> Option<BoxedSink>
    where
        W: io::Write + Send + 'static,
    {
        tracing::debug!(format = E::FORMAT.as_str(), "sink selected");
        self.output.lock().sink.replace(Box::new(sink))
    }

    /// Removes the sink. Later calls only advance the sequence counter.
    pub fn clear_sink(&self) -> Option<BoxedSink> {
        tracing::debug!(format = E::FORMAT.as_str(), "sink cleared");
        self.output.lock().sink.take()
    }

    #[must_use]
    pub fn has_sink(&self) -> bool {
        self.output.lock().sink.is_some()
    }

    /// Sequence number the next log call will take.
    #[must_use]
    pub fn next_sequence(&self) -> u16 {
        self.sequence.peek()
    }

    /// Logs one event built from its parts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the sink rejects the record. The sequence
    /// number is consumed either way.
    pub fn log(&self, severity: Severity, module: u32, line: u32, args: &[Argument]) -> Result<()> {
        self.dispatch(severity, |seq| Event {
            severity,
            module: ModuleId(module),
            line,
            seq,
            args: args.to_vec(),
        })
    }

    /// Logs a prepared event. Its `seq` field is overwritten with the next
    /// sequence number.
    pub fn emit(&self, event: Event) -> Result<()> {
        let severity = event.severity;
        self.dispatch(severity, move |seq| Event { seq, ..event })
    }

    fn dispatch<F>(&self, severity: Severity, build: F) -> Result<()>
    where
        F: FnOnce(u16) -> Event,
    {
        if !self.levels.contains(severity) {
            return Ok(());
        }

        let mut output = self.output.lock();
        let seq = self.sequence.next();
        if !self.is_enabled() {
            tracing::trace!(seq, "logging disabled, event suppressed");
            return Ok(());
        }

        let Output { sink, scratch } = &mut *output;
        let sink = match sink.as_mut() {
            Some(sink) => sink,
            None => {
                tracing::trace!(seq, "no sink, event suppressed");
                return Ok(());
            }
        };

        let event = build(seq);
        scratch.clear();
        self.encoder.encode(&event, scratch);
        sink.write_all(scratch).map_err(|e| {
            tracing::warn!(seq, error = %e, "sink write failed");
            Error::io(&e.to_string())
        })
    }

    /// Flushes the sink. A no-op without one.
    pub fn flush(&self) -> Result<()> {
        match self.output.lock().sink.as_mut() {
            Some(sink) => sink.flush().map_err(|e| Error::io(&e.to_string())),
            None => Ok(()),
        }
    }
}
