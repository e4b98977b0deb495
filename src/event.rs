//! Log events.
//!
//! An [`Event`] is built per call, encoded once and dropped. It is usually
//! created by a [`Logger`](crate::Logger), which stamps the sequence number,
//! but it can also be built by hand for encoding into a buffer:
//!
//! ```rust
//! use ctlog::{Event, Severity};
//!
//! let event = Event::new(Severity::Info, 3, 42)
//!     .with_seq(7)
//!     .arg(123u32)
//!     .arg("done");
//! assert_eq!(event.args.len(), 2);
//! ```

use crate::{Argument, Severity};
use std::fmt;

/// Externally assigned module index. Passed through as-is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModuleId(pub u32);

impl ModuleId {
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for ModuleId {
    fn from(index: u32) -> Self {
        ModuleId(index)
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One structured log event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event {
    pub severity: Severity,
    pub module: ModuleId,
    pub line: u32,
    pub seq: u16,
    pub args: Vec<Argument>,
}

impl Event {
    /// Creates an event with sequence number 0 and no arguments.
    pub fn new(severity: Severity, module: u32, line: u32) -> Self {
        Event {
            severity,
            module: ModuleId(module),
            line,
            seq: 0,
            args: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_seq(mut self, seq: u16) -> Self {
        self.seq = seq;
        self
    }

    /// Appends one argument. Call order is wire order.
    #[must_use]
    pub fn arg(mut self, arg: impl Into<Argument>) -> Self {
        self.args.push(arg.into());
        self
    }

    #[must_use]
    pub fn with_args<I>(mut self, args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Argument>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}
