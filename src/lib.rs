//! # ctlog
//!
//! A tokenized logging encoder for small targets.
//!
//! ## What is tokenized logging?
//!
//! Instead of formatting a message on the device, a log call records only
//! where it happened (a module index and a source line number) and the raw
//! values of its arguments. An offline tool builds a dictionary mapping every
//! `(module, line)` to its format string, and the host puts the text back
//! together. The device never stores or sends format strings.
//!
//! ## Key Features
//!
//! - **Two wire formats**: a compact comma separated ASCII record and a
//!   newline-delimited JSON record, chosen when the logger is built
//! - **Sequence numbers**: every log call takes a 16-bit number, so a host can
//!   spot records that were dropped or suppressed
//! - **Emission gate**: a run-time enable flag and a replaceable sink
//! - **Host tooling**: decoders, a capture scanner and a dictionary based
//!   translator
//!
//! ## Quick Start
//!
//! ```rust
//! use ctlog::{ctlog_info, Logger, LoggerOptions, SharedBuffer};
//!
//! let sink = SharedBuffer::new();
//! let logger = Logger::tokenized(LoggerOptions::new().with_enabled(true));
//! logger.set_sink(sink.clone());
//!
//! ctlog_info!(logger, 3, "Exit %s", "main").unwrap();
//!
//! let record = sink.contents();
//! assert!(record.starts_with(b"$TL000,I,3,"));
//! assert!(record.ends_with(b",1,3,^\0main$\0,\n"));
//! ```
//!
//! ### Encoding Without a Logger
//!
//! ```rust
//! use ctlog::{to_tokenized_vec, from_slice, Event, Severity};
//!
//! let event = Event::new(Severity::Info, 12, 34)
//!     .with_seq(2)
//!     .arg(123u32)
//!     .arg(-1)
//!     .arg('J')
//!     .arg(true);
//! let record = to_tokenized_vec(&event);
//! assert_eq!(record, b"$TL002,I,12,34,4,4,123,2,-1,1,74,0,1,\n");
//! assert_eq!(from_slice(&record).unwrap(), event);
//! ```
//!
//! ## Wire Formats
//!
//! See the [`format`] module for both grammars.
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - A log call never panics; sink failures come back as [`Error::Io`]
//! - Records reach the sink whole, in sequence order

pub mod de;
pub mod dictionary;
pub mod error;
pub mod event;
pub mod format;
pub mod level;
pub mod logger;
pub mod macros;
pub mod options;
pub mod scan;
pub mod sequence;
pub mod ser;
pub mod sink;
pub mod translate;
pub mod value;

pub use de::{JsonParser, TokenizedParser};
pub use dictionary::{Dictionary, Line, Module, ModuleTable};
pub use error::{Error, Result};
pub use event::{Event, ModuleId};
pub use level::{LevelMask, Severity};
pub use logger::Logger;
pub use options::{Format, LoggerOptions};
pub use scan::LineScanner;
pub use sequence::SequenceCounter;
pub use ser::{Encoder, JsonEncoder, TokenizedEncoder};
pub use sink::{BoxedSink, SharedBuffer};
pub use translate::Translator;
pub use value::{ArgTag, Argument};

use std::io;

/// Encodes an event as one tokenized record, trailing newline included.
///
/// # Examples
///
/// ```rust
/// use ctlog::{to_tokenized_vec, Event, Severity};
///
/// let record = to_tokenized_vec(&Event::new(Severity::Info, 3, 42));
/// assert_eq!(record, b"$TL000,I,3,42,0,\n");
/// ```
#[must_use]
pub fn to_tokenized_vec(event: &Event) -> Vec<u8> {
    let mut out = Vec::with_capacity(32);
    TokenizedEncoder.encode(event, &mut out);
    out
}

/// Encodes an event as one JSON record, trailing newline included.
///
/// # Examples
///
/// ```rust
/// use ctlog::{to_json_vec, Event, Severity};
///
/// let record = to_json_vec(&Event::new(Severity::Info, 3, 42).arg("a\"b"));
/// assert_eq!(
///     record,
///     b"{\"ctlog\":0,\"seq\":0,\"lvl\":\"I\",\"mi\":3,\"ml\":42,\"args\":[{\"t\":3,\"v\":\"a\\\"b\"}]}\n"
/// );
/// ```
#[must_use]
pub fn to_json_vec(event: &Event) -> Vec<u8> {
    let mut out = Vec::with_capacity(64);
    JsonEncoder.encode(event, &mut out);
    out
}

/// Encodes an event in the given format.
#[must_use]
pub fn to_vec(event: &Event, format: Format) -> Vec<u8> {
    match format {
        Format::Tokenized => to_tokenized_vec(event),
        Format::Json => to_json_vec(event),
    }
}

/// Encodes an event and writes the record to `writer` in a single write.
///
/// # Errors
///
/// Returns [`Error::Io`] if writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W>(mut writer: W, event: &Event, format: Format) -> Result<()>
where
    W: io::Write,
{
    writer
        .write_all(&to_vec(event, format))
        .map_err(|e| Error::io(&e.to_string()))
}

/// Decodes one tokenized record.
///
/// # Errors
///
/// Returns an error if the record is malformed, of a newer version, or uses
/// an unknown severity or argument type.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_tokenized_slice(record: &[u8]) -> Result<Event> {
    TokenizedParser::new(record).parse()
}

/// Decodes one JSON record.
///
/// # Errors
///
/// Returns an error if the record is not a JSON object of the expected shape.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_json_slice(record: &[u8]) -> Result<Event> {
    JsonParser::new(record).parse()
}

/// Decodes one record of either format, picking the decoder from the
/// record's first bytes.
///
/// # Examples
///
/// ```rust
/// use ctlog::{from_slice, Severity};
///
/// let a = from_slice(b"$TL007,W,1,2,0,\n").unwrap();
/// let b = from_slice(b"{\"ctlog\":0,\"seq\":7,\"lvl\":\"W\",\"mi\":1,\"ml\":2,\"args\":[]}").unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.severity, Severity::Warn);
/// assert!(from_slice(b"hello").is_err());
/// ```
///
/// # Errors
///
/// Returns an error if the input is not a record of either format.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice(record: &[u8]) -> Result<Event> {
    match Format::detect(record) {
        Some(Format::Tokenized) => from_tokenized_slice(record),
        Some(Format::Json) => from_json_slice(record),
        None => Err(Error::syntax(0, "not a ctlog record")),
    }
}
