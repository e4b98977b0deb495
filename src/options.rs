//! Configuration for loggers and free encoding functions.
//!
//! - [`LoggerOptions`]: initial gate state and compiled-in severities
//! - [`Format`]: choice of wire format for the free functions
//!
//! ## Examples
//!
//! ```rust
//! use ctlog::{LevelMask, Logger, LoggerOptions};
//!
//! let options = LoggerOptions::new()
//!     .with_enabled(true)
//!     .with_levels(LevelMask::ALL);
//! let logger = Logger::tokenized(options);
//! assert!(logger.is_enabled());
//! ```

use crate::LevelMask;

/// Wire format of a record.
///
/// # Examples
///
/// ```rust
/// use ctlog::Format;
///
/// assert_eq!(Format::detect(b"$TL000,I,3,42,0,\n"), Some(Format::Tokenized));
/// assert_eq!(Format::detect(b"{\"ctlog\":0}"), Some(Format::Json));
/// assert_eq!(Format::detect(b"boot ok"), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Tokenized,
    Json,
}

impl Format {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Format::Tokenized => "tokenized",
            Format::Json => "json",
        }
    }

    /// Guesses the format of a record from its first bytes.
    #[must_use]
    pub fn detect(record: &[u8]) -> Option<Format> {
        if record.starts_with(crate::format::MAGIC) {
            return Some(Format::Tokenized);
        }
        match record.iter().find(|b| !b.is_ascii_whitespace()) {
            Some(b'{') => Some(Format::Json),
            _ => None,
        }
    }
}

/// Options a [`Logger`](crate::Logger) starts with.
///
/// Logging starts disabled, with error, info and warning severities compiled in.
#[derive(Clone, Debug)]
pub struct LoggerOptions {
    pub enabled: bool,
    pub levels: LevelMask,
}

impl Default for LoggerOptions {
    fn default() -> Self {
        LoggerOptions {
            enabled: false,
            levels: LevelMask::default(),
        }
    }
}

impl LoggerOptions {
    /// Creates default options (disabled, E/I/W compiled in).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ctlog::{LoggerOptions, Severity};
    ///
    /// let options = LoggerOptions::new();
    /// assert!(!options.enabled);
    /// assert!(!options.levels.contains(Severity::Debug));
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Sets which severities are compiled in.
    #[must_use]
    pub fn with_levels(mut self, levels: LevelMask) -> Self {
        self.levels = levels;
        self
    }
}
