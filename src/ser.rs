//! Record encoding.
//!
//! This module provides the [`Encoder`] trait and its two implementations,
//! [`TokenizedEncoder`] and [`JsonEncoder`]. Encoders append one complete
//! record, trailing newline included, to a byte buffer; writing that buffer to
//! a sink is left to the caller so a record reaches the sink in one write.
//!
//! ## Usage
//!
//! Most users go through a [`Logger`](crate::Logger) or the functions in the
//! crate root:
//!
//! ```rust
//! use ctlog::{to_json_vec, to_tokenized_vec, Event, Severity};
//!
//! let event = Event::new(Severity::Info, 3, 42);
//! assert_eq!(to_tokenized_vec(&event), b"$TL000,I,3,42,0,\n");
//!
//! let event = Event::new(Severity::Error, 1, 7).with_seq(5).arg(9u32);
//! assert_eq!(
//!     to_json_vec(&event),
//!     b"{\"ctlog\":0,\"seq\":5,\"lvl\":\"E\",\"mi\":1,\"ml\":7,\"args\":[{\"t\":4,\"v\":9}]}\n"
//! );
//! ```
//!
//! ## Direct Encoder Usage
//!
//! ```rust
//! use ctlog::{Encoder, Event, Severity, TokenizedEncoder};
//!
//! let mut buf = Vec::new();
//! let encoder = TokenizedEncoder;
//! encoder.encode(&Event::new(Severity::Warn, 0, 1).arg(true), &mut buf);
//! encoder.encode(&Event::new(Severity::Warn, 0, 2).with_seq(1), &mut buf);
//! assert_eq!(buf, b"$TL000,W,0,1,1,0,1,\n$TL001,W,0,2,0,\n");
//! ```

use crate::format::{JSON_VERSION_KEY, MAGIC, SEPARATOR, TEXT_END, TEXT_START, VERSION};
use crate::value::until_nul;
use crate::{Argument, Event, Format};

/// Serializes events into one wire format.
pub trait Encoder {
    /// Format this encoder produces.
    const FORMAT: Format;

    /// Appends the record for `event` to `out`.
    fn encode(&self, event: &Event, out: &mut Vec<u8>);
}

/// Encoder for the compact `$TL` record format.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokenizedEncoder;

/// Encoder for newline-delimited JSON records.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonEncoder;

#[inline]
fn push_decimal<T: ToString>(out: &mut Vec<u8>, n: T) {
    out.extend_from_slice(n.to_string().as_bytes());
}

impl TokenizedEncoder {
    fn write_header(event: &Event, out: &mut Vec<u8>) {
        out.extend_from_slice(MAGIC);
        out.extend_from_slice(format!("{:02}", VERSION).as_bytes());
        push_decimal(out, event.seq);
        out.push(SEPARATOR);
        out.push(event.severity.code());
        out.push(SEPARATOR);
        push_decimal(out, event.module.get());
        out.push(SEPARATOR);
        push_decimal(out, event.line);
        out.push(SEPARATOR);
        push_decimal(out, event.args.len());
        out.push(SEPARATOR);
    }

    fn write_arg(arg: &Argument, out: &mut Vec<u8>) {
        push_decimal(out, arg.tag().as_u8());
        out.push(SEPARATOR);
        match arg {
            Argument::Bool(b) => push_decimal(out, u8::from(*b)),
            Argument::Char(c) => push_decimal(out, *c),
            Argument::Int(n) => push_decimal(out, *n),
            Argument::UInt(n) => push_decimal(out, *n),
            Argument::Text(bytes) => {
                out.extend_from_slice(TEXT_START);
                out.extend_from_slice(until_nul(bytes));
                out.extend_from_slice(TEXT_END);
            }
        }
        out.push(SEPARATOR);
    }
}

impl Encoder for TokenizedEncoder {
    const FORMAT: Format = Format::Tokenized;

    fn encode(&self, event: &Event, out: &mut Vec<u8>) {
        Self::write_header(event, out);
        for arg in &event.args {
            Self::write_arg(arg, out);
        }
        out.push(b'\n');
    }
}

/// Appends one byte to a JSON string body, escaping it if needed.
///
/// Quote, backslash and control bytes (`0x00..=0x1F`, `0x7F`) are escaped, using
/// the short form where JSON has one and `\u00XX` otherwise. All other bytes
/// are copied as-is.
///
/// # Examples
///
/// ```rust
/// use ctlog::ser::escape_json_byte;
///
/// let mut out = Vec::new();
/// for &b in b"a\"\\\n\x01\x7f" {
///     escape_json_byte(b, &mut out);
/// }
/// assert_eq!(out, b"a\\\"\\\\\\n\\u0001\\u007F");
/// ```
#[inline]
pub fn escape_json_byte(b: u8, out: &mut Vec<u8>) {
    match b {
        b'"' => out.extend_from_slice(b"\\\""),
        b'\\' => out.extend_from_slice(b"\\\\"),
        0x08 => out.extend_from_slice(b"\\b"),
        0x0C => out.extend_from_slice(b"\\f"),
        b'\n' => out.extend_from_slice(b"\\n"),
        b'\r' => out.extend_from_slice(b"\\r"),
        b'\t' => out.extend_from_slice(b"\\t"),
        0x00..=0x1F | 0x7F => out.extend_from_slice(format!("\\u{:04X}", b).as_bytes()),
        _ => out.push(b),
    }
}

fn write_json_string(bytes: &[u8], out: &mut Vec<u8>) {
    out.push(b'"');
    for &b in bytes {
        escape_json_byte(b, out);
    }
    out.push(b'"');
}

impl JsonEncoder {
    fn write_arg(arg: &Argument, out: &mut Vec<u8>) {
        out.extend_from_slice(b"{\"t\":");
        push_decimal(out, arg.tag().as_u8());
        out.extend_from_slice(b",\"v\":");
        match arg {
            Argument::Bool(true) => out.extend_from_slice(b"true"),
            Argument::Bool(false) => out.extend_from_slice(b"false"),
            Argument::Char(c) => write_json_string(&[*c], out),
            Argument::Int(n) => push_decimal(out, *n),
            Argument::UInt(n) => push_decimal(out, *n),
            Argument::Text(bytes) => write_json_string(until_nul(bytes), out),
        }
        out.push(b'}');
    }
}

impl Encoder for JsonEncoder {
    const FORMAT: Format = Format::Json;

    fn encode(&self, event: &Event, out: &mut Vec<u8>) {
        out.extend_from_slice(b"{\"");
        out.extend_from_slice(JSON_VERSION_KEY.as_bytes());
        out.extend_from_slice(b"\":");
        push_decimal(out, VERSION);
        out.extend_from_slice(b",\"seq\":");
        push_decimal(out, event.seq);
        out.extend_from_slice(b",\"lvl\":\"");
        out.push(event.severity.code());
        out.extend_from_slice(b"\",\"mi\":");
        push_decimal(out, event.module.get());
        out.extend_from_slice(b",\"ml\":");
        push_decimal(out, event.line);
        out.extend_from_slice(b",\"args\":[");
        for (i, arg) in event.args.iter().enumerate() {
            if i > 0 {
                out.push(b',');
            }
            Self::write_arg(arg, out);
        }
        out.extend_from_slice(b"]}\n");
    }
}
