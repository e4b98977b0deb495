//! Error types for encoding, decoding and translating tokenized log records.
//!
//! Encoding itself cannot fail: the argument model is a closed enum and the
//! argument count is taken from the argument slice. What remains are:
//!
//! - **I/O Errors**: the sink rejected a write or a flush
//! - **Syntax Errors**: a record on the wire is malformed (byte offset included)
//! - **Protocol Errors**: unknown version, severity code or argument tag
//! - **Translation Errors**: a record references a module or line missing from the dictionary
//!
//! ## Examples
//!
//! ```rust
//! use ctlog::{from_tokenized_slice, Error};
//!
//! let err = from_tokenized_slice(b"$TL000,X,1,2,0,\n").unwrap_err();
//! assert!(matches!(err, Error::UnknownLevel('X')));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors produced by this crate.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error while writing to or flushing a sink
    #[error("IO error: {0}")]
    Io(String),

    /// Malformed record
    #[error("Syntax error at byte {offset}: {msg}")]
    Syntax { offset: usize, msg: String },

    /// Record ended before a required field
    #[error("Unexpected end of record at byte {offset}, expected {expected}")]
    UnexpectedEof { offset: usize, expected: String },

    /// Record was produced by a newer, incompatible wire format
    #[error("Version {found:02} exceeds max supported version {max:02}")]
    UnsupportedVersion { found: u8, max: u8 },

    /// Severity code outside of E/I/D/W
    #[error("Unsupported logging level '{0}'")]
    UnknownLevel(char),

    /// Argument tag outside of 0..=4
    #[error("Unsupported argument type {0}")]
    UnknownTag(u8),

    /// Argument value does not match its tag
    #[error("Argument {index}: expected {expected}")]
    TypeMismatch { index: usize, expected: String },

    /// Module index missing from the dictionary
    #[error("Could not find module {0}")]
    ModuleNotFound(u32),

    /// Source line missing from a dictionary module
    #[error("Could not find line {line} in module {module}")]
    LineNotFound { module: u32, line: u32 },

    /// Dictionary could not be loaded
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a syntax error at the given byte offset of a record.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ctlog::Error;
    ///
    /// let err = Error::syntax(12, "expected ','");
    /// assert!(err.to_string().contains("byte 12"));
    /// ```
    pub fn syntax(offset: usize, msg: &str) -> Self {
        Error::Syntax {
            offset,
            msg: msg.to_string(),
        }
    }

    /// Creates an unexpected end-of-record error.
    pub fn unexpected_eof(offset: usize, expected: &str) -> Self {
        Error::UnexpectedEof {
            offset,
            expected: expected.to_string(),
        }
    }

    /// Creates a type mismatch error for the argument at `index`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ctlog::Error;
    ///
    /// let err = Error::type_mismatch(1, "boolean");
    /// assert_eq!(err.to_string(), "Argument 1: expected boolean");
    /// ```
    pub fn type_mismatch(index: usize, expected: &str) -> Self {
        Error::TypeMismatch {
            index,
            expected: expected.to_string(),
        }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for sink write or flush failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Dictionary(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
