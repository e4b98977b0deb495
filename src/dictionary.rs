//! Dictionaries produced by the offline tokenizing tool.
//!
//! A dictionary lists every module with the source lines that hold a log call
//! and the format string used at that line. Its JSON layout is:
//!
//! ```text
//! {
//!   "date": "2018-06-01T12:00:00Z",
//!   "modules": [
//!     { "index": 0, "name": "main", "path": "/src/main.c",
//!       "lines": [ { "number": 12, "formatString": "value=%d" } ] }
//!   ]
//! }
//! ```
//!
//! [`ModuleTable`] indexes the modules by their module index and their lines
//! by line number, preserving the dictionary order.

use crate::{Error, ModuleId, Result};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::io;

/// A log call site.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Line {
    pub number: u32,
    pub format_string: String,
}

/// A source module and its log call sites.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    pub index: u32,
    pub name: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub lines: Vec<Line>,
}

/// Top-level dictionary document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dictionary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    pub modules: Vec<Module>,
}

impl Dictionary {
    /// Parses a dictionary from JSON text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ctlog::Dictionary;
    ///
    /// let dict = Dictionary::from_json(
    ///     r#"{"date":"2018-06-01T12:00:00Z","modules":[{"index":0,"name":"main","path":"main.c","lines":[{"number":12,"formatString":"Test"}]}]}"#,
    /// ).unwrap();
    /// assert_eq!(dict.modules[0].lines[0].format_string, "Test");
    /// assert!(dict.date.is_some());
    /// ```
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }
}

struct ModuleEntry {
    name: String,
    lines: IndexMap<u32, String>,
}

/// Lookup table from `(module, line)` to format string.
#[derive(Default)]
pub struct ModuleTable {
    modules: IndexMap<u32, ModuleEntry>,
}

impl ModuleTable {
    /// Builds the table. Duplicate module indices are rejected.
    pub fn new(modules: Vec<Module>) -> Result<Self> {
        let mut table = IndexMap::with_capacity(modules.len());
        for module in modules {
            let lines = module
                .lines
                .into_iter()
                .map(|line| (line.number, line.format_string))
                .collect();
            let entry = ModuleEntry {
                name: module.name,
                lines,
            };
            if table.insert(module.index, entry).is_some() {
                return Err(Error::Dictionary(format!(
                    "duplicate module index {}",
                    module.index
                )));
            }
        }
        Ok(ModuleTable { modules: table })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    #[must_use]
    pub fn module_name(&self, module: ModuleId) -> Option<&str> {
        self.modules.get(&module.get()).map(|m| m.name.as_str())
    }

    /// Format string logged at `line` of `module`.
    pub fn format_string(&self, module: ModuleId, line: u32) -> Result<&str> {
        let entry = self
            .modules
            .get(&module.get())
            .ok_or(Error::ModuleNotFound(module.get()))?;
        entry
            .lines
            .get(&line)
            .map(String::as_str)
            .ok_or(Error::LineNotFound {
                module: module.get(),
                line,
            })
    }
}

impl TryFrom<Dictionary> for ModuleTable {
    type Error = Error;

    fn try_from(dict: Dictionary) -> Result<Self> {
        ModuleTable::new(dict.modules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module(index: u32, name: &str, lines: &[(u32, &str)]) -> Module {
        Module {
            index,
            name: name.to_string(),
            path: format!("/src/{}.c", name),
            lines: lines
                .iter()
                .map(|(number, fmt)| Line {
                    number: *number,
                    format_string: fmt.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_lookup() {
        let table = ModuleTable::new(vec![
            module(0, "gpio", &[(10, "pin %d")]),
            module(1, "main", &[(12, "Test"), (13, "%s")]),
        ])
        .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.module_name(ModuleId(1)), Some("main"));
        assert_eq!(table.format_string(ModuleId(1), 13).unwrap(), "%s");
        assert!(matches!(
            table.format_string(ModuleId(7), 1),
            Err(Error::ModuleNotFound(7))
        ));
        assert!(matches!(
            table.format_string(ModuleId(0), 11),
            Err(Error::LineNotFound { module: 0, line: 11 })
        ));
    }

    #[test]
    fn test_duplicate_index_rejected() {
        let result = ModuleTable::new(vec![module(0, "a", &[]), module(0, "b", &[])]);
        assert!(matches!(result, Err(Error::Dictionary(_))));
    }

    #[test]
    fn test_dictionary_json() {
        let dict = Dictionary {
            date: None,
            modules: vec![module(3, "uart", &[(42, "rx=%u")])],
        };
        let json = serde_json::to_string(&dict).unwrap();
        assert!(json.contains("\"formatString\":\"rx=%u\""));
        assert!(!json.contains("date"));

        let back = Dictionary::from_json(&json).unwrap();
        assert_eq!(back, dict);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            Dictionary::from_json("{\"modules\": 3}"),
            Err(Error::Dictionary(_))
        ));
    }
}
