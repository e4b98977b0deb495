//! Wire formats
//!
//! This module documents the two record formats produced by this library and
//! holds their constants. Both formats are line oriented: one event per record,
//! every record ends with `\n`, and streams are only ever appended to.
//!
//! # Tokenized Records
//!
//! Compact ASCII meant to be decoded offline against a dictionary that maps
//! `(module, line)` to the original format string.
//!
//! ```text
//! "$TL" version seq "," level "," module "," line "," nArgs "," { tag "," value "," }* "\n"
//! ```
//!
//! | Field | Encoding |
//! |-------|----------|
//! | `version` | two decimal digits, currently `00` |
//! | `seq` | decimal `u16` |
//! | `level` | one of `E`, `I`, `D`, `W` |
//! | `module`, `line` | decimal `u32` |
//! | `nArgs` | decimal argument count |
//! | `tag` | decimal argument tag (0..=4) |
//!
//! Values of bool, character and unsigned arguments are unsigned decimals
//! (`true` is `1`, a character is its byte value), signed arguments are signed
//! decimals. Text is written verbatim between the sentinels `^\0` and `$\0`:
//!
//! ```text
//! $TL000,I,3,42,0,
//! $TL001,I,0,23,2,4,5,2,-8,
//! $TL002,I,1,16,1,3,^\0Exit, main$\0,
//! ```
//!
//! The text may contain commas, newlines, `^` or `$`; since it never contains
//! NUL, the two-byte sentinels cannot occur inside it. This requires a sink
//! that passes NUL bytes through unchanged.
//!
//! Decoders also accept the header form `$TL00,<seq>,` with a comma after the
//! version.
//!
//! # JSON Records
//!
//! ```text
//! {"ctlog":0,"seq":5,"lvl":"E","mi":1,"ml":7,"args":[{"t":4,"v":9}]}
//! ```
//!
//! | Tag | `v` rendering |
//! |-----|---------------|
//! | 0 bool | `true` / `false` |
//! | 1 char | one-character string |
//! | 2 int | signed number |
//! | 3 text | string |
//! | 4 uint | unsigned number |
//!
//! **Escaping** is applied byte by byte to text and character values:
//!
//! ```text
//! "  -> \"        \  -> \\
//! BS -> \b        FF -> \f
//! LF -> \n        CR -> \r
//! HT -> \t        other control byte -> \u00XX (uppercase hex)
//! ```
//!
//! Control bytes are `0x00..=0x1F` and `0x7F`. Every other byte, including bytes
//! above `0x7F`, is copied unchanged, so records carrying non-UTF-8 text are
//! not strictly valid JSON; the decoder in [`crate::de`] reads them anyway.
//!
//! # Sequence Numbers
//!
//! Every log call whose severity is in the logger's [`LevelMask`](crate::LevelMask)
//! advances the sequence counter, including calls made while logging is
//! disabled or no sink is set. A gap in sequence numbers is
//! therefore either a dropped record or a suppressed call; the two cannot be
//! told apart from the stream.

/// Record prefix of the tokenized format.
pub const MAGIC: &[u8; 3] = b"$TL";

/// Current wire version, shared by both formats.
pub const VERSION: u8 = 0;

/// Highest version the decoders accept.
pub const MAX_SUPPORTED_VERSION: u8 = VERSION;

/// Opens a text literal in a tokenized record.
pub const TEXT_START: &[u8; 2] = b"^\0";

/// Closes a text literal in a tokenized record.
pub const TEXT_END: &[u8; 2] = b"$\0";

/// Field separator of tokenized records.
pub const SEPARATOR: u8 = b',';

/// Key of the version field in JSON records.
pub const JSON_VERSION_KEY: &str = "ctlog";
