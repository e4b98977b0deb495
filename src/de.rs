//! Record decoding.
//!
//! This module turns single records back into [`Event`]s. The logger never
//! needs it; it exists for host-side tooling, the [`Translator`](crate::Translator)
//! and round-trip testing.
//!
//! ## Overview
//!
//! - [`TokenizedParser`]: single pass over a `$TL` record, locating text
//!   literals by their NUL sentinels
//! - [`JsonParser`]: byte-level JSON reader; text values are returned as raw
//!   bytes and do not have to be UTF-8
//!
//! Errors carry the byte offset inside the record.
//!
//! ## Usage
//!
//! ```rust
//! use ctlog::{from_slice, Argument, Severity};
//!
//! let event = from_slice(b"$TL002,I,12,34,1,3,^\0Exit\nmain$\0,\n").unwrap();
//! assert_eq!(event.seq, 2);
//! assert_eq!(event.severity, Severity::Info);
//! assert_eq!(event.args, vec![Argument::text("Exit\nmain")]);
//!
//! let event = from_slice(br#"{"ctlog":0,"seq":5,"lvl":"E","mi":1,"ml":7,"args":[{"t":4,"v":9}]}"#).unwrap();
//! assert_eq!(event.args, vec![Argument::UInt(9)]);
//! ```

use crate::format::{
    JSON_VERSION_KEY, MAGIC, MAX_SUPPORTED_VERSION, SEPARATOR, TEXT_END, TEXT_START,
};
use crate::{ArgTag, Argument, Error, Event, ModuleId, Result, Severity};
use std::str::FromStr;

/// Parses one tokenized record.
///
/// A trailing `\n` or `\r\n` is optional; anything after the last argument
/// is ignored.
pub struct TokenizedParser<'a> {
    input: &'a [u8],
    position: usize,
}

impl<'a> TokenizedParser<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        TokenizedParser { input, position: 0 }
    }

    pub fn parse(mut self) -> Result<Event> {
        self.parse_header()?;
        let seq = self.parse_number::<u16>("sequence number")?;
        let severity = self.parse_level()?;
        let module = self.parse_number::<u32>("module index")?;
        let line = self.parse_number::<u32>("line number")?;
        let count = self.parse_number::<usize>("argument count")?;

        let mut args = Vec::with_capacity(count.min(16));
        for index in 0..count {
            args.push(self.parse_arg(index)?);
        }

        Ok(Event {
            severity,
            module: ModuleId(module),
            line,
            seq,
            args,
        })
    }

    fn rest(&self) -> &'a [u8] {
        &self.input[self.position..]
    }

    fn parse_header(&mut self) -> Result<()> {
        if !self.input.starts_with(MAGIC) {
            return Err(Error::syntax(0, "missing '$TL' prefix"));
        }
        self.position = MAGIC.len();
        let digits = self
            .rest()
            .get(..2)
            .ok_or_else(|| Error::unexpected_eof(self.position, "version"))?;
        if !digits.iter().all(u8::is_ascii_digit) {
            return Err(Error::syntax(self.position, "version must be two decimal digits"));
        }
        let version = (digits[0] - b'0') * 10 + (digits[1] - b'0');
        if version > MAX_SUPPORTED_VERSION {
            return Err(Error::UnsupportedVersion {
                found: version,
                max: MAX_SUPPORTED_VERSION,
            });
        }
        self.position += 2;
        // legacy header: "$TL00,<seq>,"
        if self.rest().first() == Some(&SEPARATOR) {
            self.position += 1;
        }
        Ok(())
    }

    /// Returns the bytes up to the next separator and consumes the separator.
    fn next_field(&mut self, what: &str) -> Result<&'a [u8]> {
        let rest = self.rest();
        match rest.iter().position(|&b| b == SEPARATOR) {
            Some(end) => {
                self.position += end + 1;
                Ok(&rest[..end])
            }
            None => Err(Error::unexpected_eof(
                self.input.len(),
                &format!("',' after {}", what),
            )),
        }
    }

    fn parse_number<T: FromStr>(&mut self, what: &str) -> Result<T> {
        let start = self.position;
        let field = self.next_field(what)?;
        decimal(field, false).ok_or_else(|| Error::syntax(start, &format!("invalid {}", what)))
    }

    fn parse_level(&mut self) -> Result<Severity> {
        let start = self.position;
        match self.next_field("logging level")? {
            [code] => Severity::from_code(*code).ok_or(Error::UnknownLevel(char::from(*code))),
            _ => Err(Error::syntax(start, "logging level must be one character")),
        }
    }

    fn parse_arg(&mut self, index: usize) -> Result<Argument> {
        let tag = ArgTag::try_from(self.parse_number::<u8>("argument type")?)?;
        match tag {
            ArgTag::Bool => match self.next_field("argument value")? {
                b"0" | b"false" => Ok(Argument::Bool(false)),
                b"1" | b"true" => Ok(Argument::Bool(true)),
                _ => Err(Error::type_mismatch(index, tag.kind())),
            },
            ArgTag::Char => self.parse_value(index, tag).map(Argument::Char),
            ArgTag::Int => self.parse_value(index, tag).map(Argument::Int),
            ArgTag::Text => self.parse_text(index),
            ArgTag::UInt => self.parse_value(index, tag).map(Argument::UInt),
        }
    }

    fn parse_value<T: FromStr>(&mut self, index: usize, tag: ArgTag) -> Result<T> {
        let field = self.next_field("argument value")?;
        decimal(field, tag == ArgTag::Int).ok_or_else(|| Error::type_mismatch(index, tag.kind()))
    }

    fn parse_text(&mut self, index: usize) -> Result<Argument> {
        let rest = self.rest();
        if !rest.starts_with(TEXT_START) {
            return Err(Error::syntax(
                self.position,
                &format!("missing start of argument {} string", index),
            ));
        }
        let body = &rest[TEXT_START.len()..];
        let end = body
            .windows(TEXT_END.len())
            .position(|w| w == TEXT_END)
            .ok_or_else(|| {
                Error::unexpected_eof(self.input.len(), &format!("end of argument {} string", index))
            })?;
        let text = body[..end].to_vec();
        self.position += TEXT_START.len() + end + TEXT_END.len();
        if self.rest().first() != Some(&SEPARATOR) {
            return Err(Error::syntax(self.position, "expected ',' after string"));
        }
        self.position += 1;
        Ok(Argument::Text(text))
    }
}

/// Parses a plain decimal field: ASCII digits only, with one leading `-` if
/// `signed`. `FromStr` alone would also take a leading `+`.
fn decimal<T: FromStr>(field: &[u8], signed: bool) -> Option<T> {
    let digits = match field {
        [b'-', rest @ ..] if signed => rest,
        _ => field,
    };
    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }
    std::str::from_utf8(field).ok()?.parse().ok()
}

/// Deepest object/array nesting the JSON decoder accepts. A record needs 3.
const MAX_DEPTH: usize = 128;

/// A parsed JSON value with strings kept as raw bytes.
#[derive(Clone, Debug, PartialEq)]
enum Json {
    Null,
    Bool(bool),
    Number(i64),
    String(Vec<u8>),
    Array(Vec<Json>),
    Object(Vec<(Vec<u8>, Json)>),
}

impl Json {
    fn get(&self, key: &str) -> Option<&Json> {
        match self {
            Json::Object(fields) => fields
                .iter()
                .find(|(k, _)| k.as_slice() == key.as_bytes())
                .map(|(_, v)| v),
            _ => None,
        }
    }
}

/// Parses one JSON record.
///
/// Accepts whitespace between tokens and ignores unknown keys. Numbers must be
/// integers.
pub struct JsonParser<'a> {
    input: &'a [u8],
    position: usize,
    depth: usize,
}

impl<'a> JsonParser<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        JsonParser {
            input,
            position: 0,
            depth: 0,
        }
    }

    pub fn parse(mut self) -> Result<Event> {
        let root = self.parse_value()?;
        self.skip_whitespace();
        if !self.at_end() {
            return Err(Error::syntax(self.position, "trailing characters after record"));
        }
        if !matches!(root, Json::Object(_)) {
            return Err(Error::syntax(0, "record must be a JSON object"));
        }

        let version = Self::field::<u8>(&root, JSON_VERSION_KEY)?;
        if version > MAX_SUPPORTED_VERSION {
            return Err(Error::UnsupportedVersion {
                found: version,
                max: MAX_SUPPORTED_VERSION,
            });
        }
        let seq = Self::field::<u16>(&root, "seq")?;
        let severity = match root.get("lvl") {
            Some(Json::String(code)) => match code.as_slice() {
                [c] => Severity::from_code(*c).ok_or(Error::UnknownLevel(char::from(*c))),
                _ => Err(Error::custom(format!(
                    "unsupported level '{}'",
                    String::from_utf8_lossy(code)
                ))),
            },
            _ => Err(Error::custom("missing or invalid \"lvl\"")),
        }?;
        let module = Self::field::<u32>(&root, "mi")?;
        let line = Self::field::<u32>(&root, "ml")?;
        let args = match root.get("args") {
            Some(Json::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(index, item)| Self::to_arg(index, item))
                .collect::<Result<Vec<_>>>()?,
            _ => return Err(Error::custom("missing or invalid \"args\"")),
        };

        Ok(Event {
            severity,
            module: ModuleId(module),
            line,
            seq,
            args,
        })
    }

    fn field<T: TryFrom<i64>>(root: &Json, key: &str) -> Result<T> {
        match root.get(key) {
            Some(Json::Number(n)) => T::try_from(*n)
                .map_err(|_| Error::custom(format!("\"{}\" out of range: {}", key, n))),
            _ => Err(Error::custom(format!("missing or invalid \"{}\"", key))),
        }
    }

    fn to_arg(index: usize, item: &Json) -> Result<Argument> {
        let tag = match item.get("t") {
            Some(Json::Number(n)) => {
                let raw = u8::try_from(*n).map_err(|_| Error::custom(format!("unsupported type {}", n)))?;
                ArgTag::try_from(raw)?
            }
            _ => return Err(Error::type_mismatch(index, "object with \"t\" and \"v\"")),
        };
        let value = item
            .get("v")
            .ok_or_else(|| Error::type_mismatch(index, "object with \"t\" and \"v\""))?;
        let mismatch = || Error::type_mismatch(index, tag.kind());
        match (tag, value) {
            (ArgTag::Bool, Json::Bool(b)) => Ok(Argument::Bool(*b)),
            (ArgTag::Char, Json::String(s)) if s.len() == 1 => Ok(Argument::Char(s[0])),
            (ArgTag::Int, Json::Number(n)) => {
                i32::try_from(*n).map(Argument::Int).map_err(|_| mismatch())
            }
            (ArgTag::Text, Json::String(s)) => Ok(Argument::Text(s.clone())),
            (ArgTag::UInt, Json::Number(n)) => {
                u32::try_from(*n).map(Argument::UInt).map_err(|_| mismatch())
            }
            _ => Err(mismatch()),
        }
    }

    fn at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.position).copied()
    }

    fn next_byte(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.position += 1;
        Some(b)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.position += 1;
        }
    }

    fn expect(&mut self, expected: u8) -> Result<()> {
        match self.next_byte() {
            Some(b) if b == expected => Ok(()),
            Some(_) => Err(Error::syntax(
                self.position - 1,
                &format!("expected '{}'", char::from(expected)),
            )),
            None => Err(Error::unexpected_eof(
                self.position,
                &format!("'{}'", char::from(expected)),
            )),
        }
    }

    fn parse_literal(&mut self, literal: &[u8], value: Json) -> Result<Json> {
        if self.input[self.position..].starts_with(literal) {
            self.position += literal.len();
            Ok(value)
        } else {
            Err(Error::syntax(self.position, "invalid literal"))
        }
    }

    fn parse_value(&mut self) -> Result<Json> {
        self.skip_whitespace();
        match self.peek() {
            Some(open @ (b'{' | b'[')) => {
                if self.depth == MAX_DEPTH {
                    return Err(Error::syntax(self.position, "nesting too deep"));
                }
                self.depth += 1;
                let value = if open == b'{' {
                    self.parse_object()
                } else {
                    self.parse_array()
                };
                self.depth -= 1;
                value
            }
            Some(b'"') => self.parse_string().map(Json::String),
            Some(b't') => self.parse_literal(b"true", Json::Bool(true)),
            Some(b'f') => self.parse_literal(b"false", Json::Bool(false)),
            Some(b'n') => self.parse_literal(b"null", Json::Null),
            Some(b'-' | b'0'..=b'9') => self.parse_number(),
            Some(_) => Err(Error::syntax(self.position, "unexpected character")),
            None => Err(Error::unexpected_eof(self.position, "value")),
        }
    }

    fn parse_object(&mut self) -> Result<Json> {
        self.expect(b'{')?;
        let mut fields = Vec::new();
        self.skip_whitespace();
        if self.peek() == Some(b'}') {
            self.position += 1;
            return Ok(Json::Object(fields));
        }
        loop {
            self.skip_whitespace();
            let key = self.parse_string()?;
            self.skip_whitespace();
            self.expect(b':')?;
            let value = self.parse_value()?;
            fields.push((key, value));
            self.skip_whitespace();
            match self.next_byte() {
                Some(b',') => continue,
                Some(b'}') => return Ok(Json::Object(fields)),
                Some(_) => return Err(Error::syntax(self.position - 1, "expected ',' or '}'")),
                None => return Err(Error::unexpected_eof(self.position, "'}'")),
            }
        }
    }

    fn parse_array(&mut self) -> Result<Json> {
        self.expect(b'[')?;
        let mut items = Vec::new();
        self.skip_whitespace();
        if self.peek() == Some(b']') {
            self.position += 1;
            return Ok(Json::Array(items));
        }
        loop {
            items.push(self.parse_value()?);
            self.skip_whitespace();
            match self.next_byte() {
                Some(b',') => continue,
                Some(b']') => return Ok(Json::Array(items)),
                Some(_) => return Err(Error::syntax(self.position - 1, "expected ',' or ']'")),
                None => return Err(Error::unexpected_eof(self.position, "']'")),
            }
        }
    }

    fn parse_number(&mut self) -> Result<Json> {
        let start = self.position;
        if self.peek() == Some(b'-') {
            self.position += 1;
        }
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.position += 1;
        }
        if matches!(self.peek(), Some(b'.' | b'e' | b'E')) {
            return Err(Error::syntax(start, "numbers must be integers"));
        }
        std::str::from_utf8(&self.input[start..self.position])
            .ok()
            .and_then(|s| s.parse::<i64>().ok())
            .map(Json::Number)
            .ok_or_else(|| Error::syntax(start, "invalid number"))
    }

    fn parse_hex4(&mut self) -> Result<u32> {
        let start = self.position;
        let digits = self
            .input
            .get(start..start + 4)
            .ok_or_else(|| Error::unexpected_eof(start, "4 hex digits"))?;
        if !digits.iter().all(u8::is_ascii_hexdigit) {
            return Err(Error::syntax(start, "invalid unicode escape sequence"));
        }
        let code = digits
            .iter()
            .fold(0u32, |code, &d| (code << 4) | char::from(d).to_digit(16).unwrap_or(0));
        self.position += 4;
        Ok(code)
    }

    /// Reads a string body. `\u00XX` escapes yield the single byte `XX`, other
    /// code points are UTF-8 encoded.
    fn parse_string(&mut self) -> Result<Vec<u8>> {
        self.expect(b'"')?;
        let mut out = Vec::new();
        loop {
            match self.next_byte() {
                Some(b'"') => return Ok(out),
                Some(b'\\') => match self.next_byte() {
                    Some(b'"') => out.push(b'"'),
                    Some(b'\\') => out.push(b'\\'),
                    Some(b'/') => out.push(b'/'),
                    Some(b'b') => out.push(0x08),
                    Some(b'f') => out.push(0x0C),
                    Some(b'n') => out.push(b'\n'),
                    Some(b'r') => out.push(b'\r'),
                    Some(b't') => out.push(b'\t'),
                    Some(b'u') => {
                        let mut code = self.parse_hex4()?;
                        if code < 0x100 {
                            out.push(code as u8);
                            continue;
                        }
                        if (0xD800..0xDC00).contains(&code)
                            && self.input[self.position..].starts_with(b"\\u")
                        {
                            self.position += 2;
                            let low = self.parse_hex4()?;
                            if !(0xDC00..0xE000).contains(&low) {
                                return Err(Error::syntax(self.position, "invalid surrogate pair"));
                            }
                            code = 0x10000 + ((code - 0xD800) << 10) + (low - 0xDC00);
                        }
                        let ch = char::from_u32(code)
                            .ok_or_else(|| Error::syntax(self.position, "invalid unicode code point"))?;
                        let mut buf = [0u8; 4];
                        out.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
                    }
                    Some(_) => return Err(Error::syntax(self.position - 1, "invalid escape")),
                    None => return Err(Error::unexpected_eof(self.position, "escape")),
                },
                Some(b) => out.push(b),
                None => return Err(Error::unexpected_eof(self.position, "closing '\"'")),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenized(input: &[u8]) -> Result<Event> {
        TokenizedParser::new(input).parse()
    }

    fn json(input: &str) -> Result<Event> {
        JsonParser::new(input.as_bytes()).parse()
    }

    #[test]
    fn test_tokenized_numeric_record() {
        let event = tokenized(b"$TL002,I,12,34,3,4,123,2,-1,1,74,\n").unwrap();
        assert_eq!(event.seq, 2);
        assert_eq!(event.severity, Severity::Info);
        assert_eq!(event.module, ModuleId(12));
        assert_eq!(event.line, 34);
        assert_eq!(
            event.args,
            vec![Argument::UInt(123), Argument::Int(-1), Argument::Char(b'J')]
        );
    }

    #[test]
    fn test_tokenized_legacy_header() {
        let event = tokenized(b"$TL00,2,I,12,34,1,3,^\0Exit\nfibonacci_log$\0,\n").unwrap();
        assert_eq!(event.seq, 2);
        assert_eq!(event.args, vec![Argument::text("Exit\nfibonacci_log")]);
    }

    #[test]
    fn test_tokenized_text_with_separators() {
        let event = tokenized(b"$TL000,W,1,1,2,3,^\0a,$b^,c$\0,0,1,\r\n").unwrap();
        assert_eq!(
            event.args,
            vec![Argument::text("a,$b^,c"), Argument::Bool(true)]
        );
    }

    #[test]
    fn test_tokenized_errors() {
        assert!(matches!(tokenized(b"hello"), Err(Error::Syntax { .. })));
        assert!(matches!(
            tokenized(b"$TL010,I,0,0,0,\n"),
            Err(Error::UnsupportedVersion { found: 1, max: 0 })
        ));
        assert!(matches!(
            tokenized(b"$TL000,X,0,0,0,\n"),
            Err(Error::UnknownLevel('X'))
        ));
        assert!(matches!(
            tokenized(b"$TL000,I,0,0,1,9,1,\n"),
            Err(Error::UnknownTag(9))
        ));
        assert!(matches!(
            tokenized(b"$TL000,I,0,0,2,4,1,\n"),
            Err(Error::UnexpectedEof { .. })
        ));
        assert!(matches!(
            tokenized(b"$TL000,I,0,0,1,3,^\0open,\n"),
            Err(Error::UnexpectedEof { .. })
        ));
        assert!(matches!(
            tokenized(b"$TL000,I,0,0,1,1,300,\n"),
            Err(Error::TypeMismatch { index: 0, .. })
        ));
    }

    #[test]
    fn test_json_record() {
        let event =
            json(r#"{"ctlog":0,"seq":5,"lvl":"E","mi":1,"ml":7,"args":[{"t":4,"v":9}]}"#).unwrap();
        assert_eq!(event.seq, 5);
        assert_eq!(event.severity, Severity::Error);
        assert_eq!(event.module, ModuleId(1));
        assert_eq!(event.line, 7);
        assert_eq!(event.args, vec![Argument::UInt(9)]);
    }

    #[test]
    fn test_json_whitespace_and_unknown_keys() {
        let event = json(
            r#" { "args" : [ {"v":true,"t":0} , {"t":1,"v":"J"} ], "extra":[null,{"x":-1}],
                "ml":2, "mi":3, "lvl":"D", "seq":4, "ctlog":0 } "#,
        )
        .unwrap();
        assert_eq!(event.args, vec![Argument::Bool(true), Argument::Char(b'J')]);
        assert_eq!(event.line, 2);
    }

    #[test]
    fn test_json_unescape() {
        let event = json(
            r#"{"ctlog":0,"seq":0,"lvl":"I","mi":0,"ml":0,"args":[{"t":3,"v":"q\"b\\n\nu\u001Bé\u00E9"}]}"#,
        )
        .unwrap();
        let mut expected = b"q\"b\\n\nu\x1b".to_vec();
        expected.extend_from_slice("é".as_bytes());
        expected.push(0xE9);
        assert_eq!(event.args, vec![Argument::Text(expected)]);
    }

    #[test]
    fn test_json_errors() {
        assert!(json(r#"{"ctlog":0}"#).is_err());
        assert!(matches!(
            json(r#"{"ctlog":3,"seq":0,"lvl":"I","mi":0,"ml":0,"args":[]}"#),
            Err(Error::UnsupportedVersion { found: 3, .. })
        ));
        assert!(matches!(
            json(r#"{"ctlog":0,"seq":0,"lvl":"I","mi":0,"ml":0,"args":[{"t":0,"v":1}]}"#),
            Err(Error::TypeMismatch { index: 0, .. })
        ));
        assert!(matches!(
            json(r#"{"ctlog":0,"seq":0,"lvl":"I","mi":0,"ml":0,"args":[{"t":7,"v":1}]}"#),
            Err(Error::UnknownTag(7))
        ));
        assert!(matches!(
            json(r#"{"ctlog":0,"seq":0,"lvl":"I","mi":0,"ml":0,"args":[{"t":2,"v":2147483648}]}"#),
            Err(Error::TypeMismatch { .. })
        ));
        assert!(json(r#"{"ctlog":0,"seq":0,"lvl":"I","mi":0,"ml":0,"args":[]"#).is_err());
        assert!(json(r#"{"ctlog":0.5,"seq":0,"lvl":"I","mi":0,"ml":0,"args":[]}"#).is_err());
    }

    #[test]
    fn test_json_nesting_limit() {
        let mut deep = String::from(r#"{"x":"#);
        deep.push_str(&"[".repeat(200_000));
        assert!(matches!(
            json(&deep),
            Err(Error::Syntax { msg, .. }) if msg == "nesting too deep"
        ));

        let mut nested = String::from(r#"{"x":"#);
        nested.push_str(&"[".repeat(100));
        nested.push_str(&"]".repeat(100));
        nested.push_str(r#","ctlog":0,"seq":1,"lvl":"I","mi":0,"ml":0,"args":[]}"#);
        assert_eq!(json(&nested).unwrap().seq, 1);
    }

    #[test]
    fn test_signs_and_digits() {
        assert!(matches!(tokenized(b"$TL00+5,I,0,0,0,\n"), Err(Error::Syntax { .. })));
        assert!(matches!(tokenized(b"$TL000,I,+1,0,0,\n"), Err(Error::Syntax { .. })));
        assert!(matches!(tokenized(b"$TL000,I,1,-0,0,\n"), Err(Error::Syntax { .. })));
        assert!(matches!(
            tokenized(b"$TL000,I,0,0,1,4,+7,\n"),
            Err(Error::TypeMismatch { index: 0, .. })
        ));
        assert!(matches!(
            tokenized(b"$TL000,I,0,0,1,2,+7,\n"),
            Err(Error::TypeMismatch { index: 0, .. })
        ));
        assert!(matches!(
            tokenized(b"$TL000,I,0,0,1,2,-,\n"),
            Err(Error::TypeMismatch { index: 0, .. })
        ));
        assert_eq!(
            tokenized(b"$TL000,I,0,0,1,2,-7,\n").unwrap().args,
            vec![Argument::Int(-7)]
        );

        assert!(json(r#"{"ctlog":0,"seq":0,"lvl":"I","mi":0,"ml":0,"args":[{"t":3,"v":"\u+04A"}]}"#).is_err());
        assert_eq!(
            json(r#"{"ctlog":0,"seq":0,"lvl":"I","mi":0,"ml":0,"args":[{"t":3,"v":"\u004a"}]}"#)
                .unwrap()
                .args,
            vec![Argument::text("J")]
        );
    }
}
