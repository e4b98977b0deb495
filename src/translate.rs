//! Turning records back into human readable text.
//!
//! A [`Translator`] looks up the format string of an event's call site in a
//! [`ModuleTable`] and renders the event's arguments into it. Format strings
//! use printf-style verbs:
//!
//! | Verb | Renders |
//! |------|---------|
//! | `%d`, `%i`, `%u` | integer value (a character as its byte value, a bool as 0/1) |
//! | `%x`, `%X` | hexadecimal integer value |
//! | `%c` | character |
//! | `%s`, `%v` | default text of the argument |
//! | `%t` | `true` / `false` |
//! | `%%` | a literal `%` |
//!
//! A verb without a matching argument renders as `%!d(MISSING)`, an unknown
//! verb as `%!z(<argument>)`.

use crate::de::{JsonParser, TokenizedParser};
use crate::scan::LineScanner;
use crate::{Argument, Dictionary, Error, Event, Format, Module, ModuleTable, Result};
use std::io::{BufRead, Write};

/// Renders events using the format strings of a dictionary.
pub struct Translator {
    table: ModuleTable,
}

impl Translator {
    pub fn new(modules: Vec<Module>) -> Result<Self> {
        Ok(Translator {
            table: ModuleTable::new(modules)?,
        })
    }

    pub fn from_dictionary(dict: Dictionary) -> Result<Self> {
        Self::new(dict.modules)
    }

    #[must_use]
    pub fn table(&self) -> &ModuleTable {
        &self.table
    }

    /// Renders one event.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ctlog::{Event, Line, Module, Severity, Translator};
    ///
    /// let translator = Translator::new(vec![Module {
    ///     index: 0,
    ///     name: "main".to_string(),
    ///     path: "main.c".to_string(),
    ///     lines: vec![Line { number: 21, format_string: "%c=%d (%s) 100%%".to_string() }],
    /// }])
    /// .unwrap();
    ///
    /// let event = Event::new(Severity::Info, 0, 21).arg('J').arg(-4).arg("ok");
    /// assert_eq!(translator.translate(&event).unwrap(), "J=-4 (ok) 100%");
    /// ```
    pub fn translate(&self, event: &Event) -> Result<String> {
        let format = self.table.format_string(event.module, event.line)?;
        Ok(render(format, &event.args))
    }

    /// Translates a whole capture.
    ///
    /// Every line of `reader` that holds a record in either format is
    /// replaced by its translation; all other lines are copied unchanged.
    pub fn translate_stream<R: BufRead, W: Write>(&self, reader: R, mut writer: W) -> Result<()> {
        for line in LineScanner::new(reader) {
            let line = line?;
            let event = match Format::detect(&line) {
                Some(Format::Tokenized) => TokenizedParser::new(&line).parse().ok(),
                Some(Format::Json) => JsonParser::new(&line).parse().ok(),
                None => None,
            };
            match event {
                Some(event) => {
                    let text = self.translate(&event)?;
                    writer
                        .write_all(text.as_bytes())
                        .map_err(|e| Error::io(&e.to_string()))?;
                }
                None => {
                    tracing::debug!(len = line.len(), "passing through non-record line");
                    writer
                        .write_all(&line)
                        .map_err(|e| Error::io(&e.to_string()))?;
                }
            }
            writer
                .write_all(b"\n")
                .map_err(|e| Error::io(&e.to_string()))?;
        }
        writer.flush().map_err(|e| Error::io(&e.to_string()))
    }
}

fn integer(arg: &Argument) -> Option<i64> {
    match arg {
        Argument::Bool(b) => Some(i64::from(*b)),
        Argument::Char(c) => Some(i64::from(*c)),
        Argument::Int(n) => Some(i64::from(*n)),
        Argument::UInt(n) => Some(i64::from(*n)),
        Argument::Text(_) => None,
    }
}

fn hex(n: i64, upper: bool) -> String {
    let sign = if n < 0 { "-" } else { "" };
    if upper {
        format!("{}{:X}", sign, n.unsigned_abs())
    } else {
        format!("{}{:x}", sign, n.unsigned_abs())
    }
}

fn render_verb(verb: char, arg: &Argument, out: &mut String) {
    match (verb, arg, integer(arg)) {
        ('d' | 'i' | 'u', _, Some(n)) => out.push_str(&n.to_string()),
        ('x', _, Some(n)) => out.push_str(&hex(n, false)),
        ('X', _, Some(n)) => out.push_str(&hex(n, true)),
        ('c', Argument::Char(c), _) => out.push(char::from(*c)),
        ('c', Argument::Int(_) | Argument::UInt(_), Some(n)) => {
            let ch = u32::try_from(n)
                .ok()
                .and_then(char::from_u32)
                .unwrap_or(char::REPLACEMENT_CHARACTER);
            out.push(ch);
        }
        ('t', Argument::Bool(b), _) => out.push_str(if *b { "true" } else { "false" }),
        ('s' | 'v', _, _) => out.push_str(&arg.to_string()),
        _ => out.push_str(&format!("%!{}({})", verb, arg)),
    }
}

/// Renders `format` with `args`. Missing arguments are marked inline; extra
/// arguments are ignored.
pub fn render(format: &str, args: &[Argument]) -> String {
    let mut out = String::with_capacity(format.len() + 16);
    let mut args = args.iter();
    let mut chars = format.chars();

    while let Some(ch) = chars.next() {
        if ch != '%' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('%') => out.push('%'),
            Some(verb) => match args.next() {
                Some(arg) => render_verb(verb, arg, &mut out),
                None => out.push_str(&format!("%!{}(MISSING)", verb)),
            },
            None => out.push_str("%!(NOVERB)"),
        }
    }
    out
}
