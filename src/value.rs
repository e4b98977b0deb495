//! Typed log arguments.
//!
//! A log call carries an ordered list of [`Argument`]s. The set of kinds is
//! closed and every kind has a fixed numeric tag on the wire:
//!
//! | Kind | Tag | Payload |
//! |------|-----|---------|
//! | [`Argument::Bool`] | 0 | `bool` |
//! | [`Argument::Char`] | 1 | one byte |
//! | [`Argument::Int`] | 2 | `i32` |
//! | [`Argument::Text`] | 3 | bytes, no NUL |
//! | [`Argument::UInt`] | 4 | `u32` |
//!
//! The `From` conversions map `bool` to Bool, `u8` and `char` to Char,
//! `i8`/`i16`/`i32` to Int, `u16`/`u32` to UInt, and strings or byte slices
//! to Text. A `u8` is the 8-bit character kind, so a small number meant as a
//! number should be passed as `u16` or `u32`.
//!
//! ## Creating Arguments
//!
//! ```rust
//! use ctlog::Argument;
//!
//! let args: Vec<Argument> = vec![
//!     true.into(),
//!     Argument::Char(b'J'),
//!     (-123).into(),
//!     "Hello World".into(),
//!     456u32.into(),
//! ];
//! assert_eq!(args[3].tag().as_u8(), 3);
//! ```
//!
//! Text is treated as opaque bytes. It is cut at the first NUL byte, the same
//! place a C string ends, so the tokenized text sentinels stay unambiguous.

use crate::{Error, Result};
use std::borrow::Cow;
use std::fmt;

/// Wire tag of an argument kind. These values must never be renumbered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ArgTag {
    Bool = 0,
    Char = 1,
    Int = 2,
    Text = 3,
    UInt = 4,
}

impl ArgTag {
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Human readable kind, used in decoding errors.
    #[must_use]
    pub const fn kind(self) -> &'static str {
        match self {
            ArgTag::Bool => "boolean",
            ArgTag::Char => "character",
            ArgTag::Int => "signed integer",
            ArgTag::Text => "string",
            ArgTag::UInt => "unsigned integer",
        }
    }
}

impl TryFrom<u8> for ArgTag {
    type Error = Error;

    fn try_from(tag: u8) -> Result<Self> {
        match tag {
            0 => Ok(ArgTag::Bool),
            1 => Ok(ArgTag::Char),
            2 => Ok(ArgTag::Int),
            3 => Ok(ArgTag::Text),
            4 => Ok(ArgTag::UInt),
            other => Err(Error::UnknownTag(other)),
        }
    }
}

impl fmt::Display for ArgTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// A single typed argument of a log event.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Argument {
    Bool(bool),
    Char(u8),
    Int(i32),
    Text(Vec<u8>),
    UInt(u32),
}

impl Argument {
    /// Builds a text argument, truncating at the first NUL byte.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ctlog::Argument;
    ///
    /// assert_eq!(Argument::text("abc\0def"), Argument::Text(b"abc".to_vec()));
    /// ```
    pub fn text(bytes: impl Into<Vec<u8>>) -> Self {
        let mut bytes = bytes.into();
        if let Some(nul) = bytes.iter().position(|&b| b == 0) {
            bytes.truncate(nul);
        }
        Argument::Text(bytes)
    }

    /// Builds a character argument if `c` fits in one byte (U+0000..=U+00FF).
    ///
    /// Use this instead of `Argument::from(c)` when the character is not known
    /// to be Latin-1.
    ///
    /// ```rust
    /// use ctlog::Argument;
    ///
    /// assert_eq!(Argument::char('é'), Some(Argument::Char(0xE9)));
    /// assert_eq!(Argument::char('€'), None);
    /// ```
    #[must_use]
    pub fn char(c: char) -> Option<Self> {
        u8::try_from(c).ok().map(Argument::Char)
    }

    #[must_use]
    pub const fn tag(&self) -> ArgTag {
        match self {
            Argument::Bool(_) => ArgTag::Bool,
            Argument::Char(_) => ArgTag::Char,
            Argument::Int(_) => ArgTag::Int,
            Argument::Text(_) => ArgTag::Text,
            Argument::UInt(_) => ArgTag::UInt,
        }
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Argument::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_i32(&self) -> Option<i32> {
        match self {
            Argument::Int(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_u32(&self) -> Option<u32> {
        match self {
            Argument::UInt(n) => Some(*n),
            _ => None,
        }
    }

    /// Text payload as it goes on the wire (up to the first NUL).
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Argument::Text(bytes) => Some(until_nul(bytes)),
            _ => None,
        }
    }

    /// Text payload decoded lossily as UTF-8.
    #[must_use]
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        self.as_bytes().map(String::from_utf8_lossy)
    }
}

pub(crate) fn until_nul(bytes: &[u8]) -> &[u8] {
    match bytes.iter().position(|&b| b == 0) {
        Some(nul) => &bytes[..nul],
        None => bytes,
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::Bool(b) => write!(f, "{}", b),
            Argument::Char(c) => write!(f, "{}", char::from(*c)),
            Argument::Int(n) => write!(f, "{}", n),
            Argument::Text(bytes) => write!(f, "{}", String::from_utf8_lossy(until_nul(bytes))),
            Argument::UInt(n) => write!(f, "{}", n),
        }
    }
}

impl From<bool> for Argument {
    fn from(b: bool) -> Self {
        Argument::Bool(b)
    }
}

/// Characters are narrowed to their low byte, as the 8-bit wire type requires.
/// This is lossy above U+00FF (`'€'` becomes `0xAC`); [`Argument::char`] is
/// the checked alternative.
impl From<char> for Argument {
    fn from(c: char) -> Self {
        Argument::Char(c as u32 as u8)
    }
}

impl From<i8> for Argument {
    fn from(n: i8) -> Self {
        Argument::Int(i32::from(n))
    }
}

impl From<i16> for Argument {
    fn from(n: i16) -> Self {
        Argument::Int(i32::from(n))
    }
}

impl From<i32> for Argument {
    fn from(n: i32) -> Self {
        Argument::Int(n)
    }
}

impl From<u8> for Argument {
    fn from(c: u8) -> Self {
        Argument::Char(c)
    }
}

impl From<u16> for Argument {
    fn from(n: u16) -> Self {
        Argument::UInt(u32::from(n))
    }
}

impl From<u32> for Argument {
    fn from(n: u32) -> Self {
        Argument::UInt(n)
    }
}

impl From<&str> for Argument {
    fn from(s: &str) -> Self {
        Argument::text(s)
    }
}

impl From<String> for Argument {
    fn from(s: String) -> Self {
        Argument::text(s)
    }
}

impl From<&[u8]> for Argument {
    fn from(bytes: &[u8]) -> Self {
        Argument::text(bytes)
    }
}

impl From<Vec<u8>> for Argument {
    fn from(bytes: Vec<u8>) -> Self {
        Argument::text(bytes)
    }
}
