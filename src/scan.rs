//! Splitting a captured byte stream into records.
//!
//! A tokenized record can contain raw newlines inside its text literals, so
//! splitting a capture on `\n` would cut records apart. [`LineScanner`] tracks
//! whether it is inside a `^\0 ... $\0` literal and only ends a line outside of
//! one. It also starts a new line at a `$` that is not at the start of a line,
//! so a record following unrelated output on the same line is separated from
//! it. Lines starting with `{` are JSON records and are only split on `\n`,
//! since their text values may contain `$`.
//!
//! A line longer than [`MAX_LINE_LEN`] (or the limit set with
//! [`LineScanner::with_max_line_len`]) is cut at the limit and the remainder
//! is scanned as a new line.
//!
//! ```rust
//! use ctlog::LineScanner;
//!
//! let capture: &[u8] = b"boot $TL000,I,1,14,1,3,^\0Enter\nmain$\0,\nplain text\r\n";
//! let lines: Vec<Vec<u8>> = LineScanner::new(capture).collect::<Result<_, _>>().unwrap();
//! assert_eq!(lines.len(), 3);
//! assert_eq!(lines[0], b"boot ");
//! assert_eq!(lines[1], b"$TL000,I,1,14,1,3,^\0Enter\nmain$\0,");
//! assert_eq!(lines[2], b"plain text");
//! ```

use crate::format::{MAGIC, MAX_SUPPORTED_VERSION};
use crate::{Error, Result};
use std::io::BufRead;

/// Returns true if `data` starts with a tokenized record header (`$TL` and a
/// two digit version).
///
/// # Errors
///
/// Returns [`Error::UnsupportedVersion`] for a header of a newer version.
///
/// # Examples
///
/// ```rust
/// use ctlog::scan::is_record_line;
///
/// assert!(is_record_line(b"$TL000,I,0,0,0,").unwrap());
/// assert!(!is_record_line(b"$TL0").unwrap());
/// assert!(!is_record_line(b"abcd $TL000,").unwrap());
/// assert!(is_record_line(b"$TL01,").is_err());
/// ```
pub fn is_record_line(data: &[u8]) -> Result<bool> {
    if data.len() < MAGIC.len() + 2 || !data.starts_with(MAGIC) {
        return Ok(false);
    }
    let digits = &data[MAGIC.len()..MAGIC.len() + 2];
    if !digits.iter().all(u8::is_ascii_digit) {
        return Ok(false);
    }
    let version = (digits[0] - b'0') * 10 + (digits[1] - b'0');
    if version > MAX_SUPPORTED_VERSION {
        return Err(Error::UnsupportedVersion {
            found: version,
            max: MAX_SUPPORTED_VERSION,
        });
    }
    Ok(true)
}

/// Default cap on the length of one line, as `bufio.Scanner` has.
pub const MAX_LINE_LEN: usize = 64 * 1024;

/// Outcome of looking for the next line in buffered data.
enum Split {
    /// Consume `advance` bytes and yield the first `end` of them.
    Line { advance: usize, end: usize },
    /// Not enough data to decide.
    NeedMore,
}

fn split(data: &[u8], at_eof: bool) -> Result<Split> {
    let mut in_record = false;
    let mut in_text = false;
    let json = data.iter().find(|&&b| b != b' ' && b != b'\t') == Some(&b'{');

    for (i, &b) in data.iter().enumerate() {
        match b {
            b'\n' if !in_text => {
                let end = if i >= 1 && data[i - 1] == b'\r' { i - 1 } else { i };
                return Ok(Split::Line { advance: i + 1, end });
            }
            b'$' if !json && !in_record && !in_text => {
                if i > 0 {
                    return Ok(Split::Line { advance: i, end: i });
                }
                if data.len() < MAGIC.len() + 2 && !at_eof {
                    return Ok(Split::NeedMore);
                }
                in_record = is_record_line(data)?;
            }
            0 if in_record && i >= 1 => match data[i - 1] {
                b'^' => in_text = true,
                b'$' => in_text = false,
                _ => {}
            },
            _ => {}
        }
    }

    if at_eof && !data.is_empty() {
        return Ok(Split::Line {
            advance: data.len(),
            end: data.len(),
        });
    }
    Ok(Split::NeedMore)
}

/// Iterator over the lines of a tokenized log capture.
///
/// Yields each line without its terminating `\n` (or `\r\n`). A read error or
/// a record header of an unsupported version ends the iteration with an
/// error.
pub struct LineScanner<R> {
    reader: R,
    buf: Vec<u8>,
    max_line_len: usize,
    eof: bool,
    failed: bool,
}

impl<R: BufRead> LineScanner<R> {
    pub fn new(reader: R) -> Self {
        LineScanner {
            reader,
            buf: Vec::new(),
            max_line_len: MAX_LINE_LEN,
            eof: false,
            failed: false,
        }
    }

    /// Sets the longest line yielded whole. Longer lines are cut.
    #[must_use]
    pub fn with_max_line_len(mut self, max_line_len: usize) -> Self {
        self.max_line_len = max_line_len.max(1);
        self
    }

    fn fill(&mut self) -> Result<()> {
        let chunk = self
            .reader
            .fill_buf()
            .map_err(|e| Error::io(&e.to_string()))?;
        if chunk.is_empty() {
            self.eof = true;
            return Ok(());
        }
        let n = chunk.len();
        self.buf.extend_from_slice(chunk);
        self.reader.consume(n);
        Ok(())
    }

    fn cut(&mut self) -> Vec<u8> {
        tracing::debug!(limit = self.max_line_len, "line too long, cutting");
        self.buf.drain(..self.max_line_len).collect()
    }

    fn next_line(&mut self) -> Result<Option<Vec<u8>>> {
        loop {
            if let Split::Line { advance, end } = split(&self.buf, self.eof)? {
                if end > self.max_line_len {
                    return Ok(Some(self.cut()));
                }
                let mut line: Vec<u8> = self.buf.drain(..advance).collect();
                line.truncate(end);
                return Ok(Some(line));
            }
            if self.eof {
                return Ok(None);
            }
            if self.buf.len() >= self.max_line_len {
                return Ok(Some(self.cut()));
            }
            self.fill()?;
        }
    }
}

impl<R: BufRead> Iterator for LineScanner<R> {
    type Item = Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.next_line() {
            Ok(line) => line.map(Ok),
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}
