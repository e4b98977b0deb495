//! Severities and severity masks.
//!
//! The single-character severity codes are part of the wire contract: decoders
//! key their parsing on them, so they must never change.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Severity of a log event.
///
/// # Examples
///
/// ```rust
/// use ctlog::Severity;
///
/// assert_eq!(Severity::Warn.code(), b'W');
/// assert_eq!(Severity::from_code(b'D'), Some(Severity::Debug));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Info,
    Debug,
    Warn,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Error,
        Severity::Info,
        Severity::Debug,
        Severity::Warn,
    ];

    /// Wire code of this severity.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Severity::Error => b'E',
            Severity::Info => b'I',
            Severity::Debug => b'D',
            Severity::Warn => b'W',
        }
    }

    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            b'E' => Some(Severity::Error),
            b'I' => Some(Severity::Info),
            b'D' => Some(Severity::Debug),
            b'W' => Some(Severity::Warn),
            _ => None,
        }
    }

    /// Bit position of this severity inside a [`LevelMask`].
    #[must_use]
    pub const fn bit(self) -> u8 {
        match self {
            Severity::Error => 0,
            Severity::Info => 1,
            Severity::Debug => 2,
            Severity::Warn => 3,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", char::from(self.code()))
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_char(char::from(self.code()))
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        match s.as_bytes() {
            [code] => Severity::from_code(*code)
                .ok_or_else(|| de::Error::custom(format!("unsupported level '{}'", s))),
            _ => Err(de::Error::custom(format!("unsupported level '{}'", s))),
        }
    }
}

/// Set of severities that are compiled in.
///
/// A severity outside the mask behaves as if its call sites were compiled out:
/// nothing is encoded and the sequence counter is not touched.
///
/// # Examples
///
/// ```rust
/// use ctlog::{LevelMask, Severity};
///
/// let mask = LevelMask::ERROR | LevelMask::WARN;
/// assert!(mask.contains(Severity::Warn));
/// assert!(!mask.contains(Severity::Debug));
/// assert!(LevelMask::default().contains(Severity::Info));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LevelMask(u8);

impl LevelMask {
    pub const NONE: LevelMask = LevelMask(0);
    pub const ERROR: LevelMask = LevelMask::of(Severity::Error);
    pub const INFO: LevelMask = LevelMask::of(Severity::Info);
    pub const DEBUG: LevelMask = LevelMask::of(Severity::Debug);
    pub const WARN: LevelMask = LevelMask::of(Severity::Warn);
    pub const ALL: LevelMask = LevelMask(0b1111);

    #[must_use]
    pub const fn of(severity: Severity) -> Self {
        LevelMask(1 << severity.bit())
    }

    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        LevelMask(bits & LevelMask::ALL.0)
    }

    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn contains(self, severity: Severity) -> bool {
        self.0 & (1 << severity.bit()) != 0
    }

    #[must_use]
    pub const fn with(self, severity: Severity) -> Self {
        LevelMask(self.0 | (1 << severity.bit()))
    }

    #[must_use]
    pub const fn without(self, severity: Severity) -> Self {
        LevelMask(self.0 & !(1 << severity.bit()))
    }
}

impl Default for LevelMask {
    fn default() -> Self {
        LevelMask(LevelMask::ERROR.0 | LevelMask::INFO.0 | LevelMask::WARN.0)
    }
}

impl BitOr for LevelMask {
    type Output = LevelMask;

    fn bitor(self, rhs: LevelMask) -> LevelMask {
        LevelMask(self.0 | rhs.0)
    }
}

impl BitOrAssign for LevelMask {
    fn bitor_assign(&mut self, rhs: LevelMask) {
        self.0 |= rhs.0;
    }
}

impl FromIterator<Severity> for LevelMask {
    fn from_iter<I: IntoIterator<Item = Severity>>(iter: I) -> Self {
        iter.into_iter()
            .fold(LevelMask::NONE, |mask, severity| mask.with(severity))
    }
}
