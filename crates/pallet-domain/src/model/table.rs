//! Plain tabular input handed to the engine by the presentation layer

use serde::{Deserialize, Serialize};

/// A parsed tabular dataset: one header row plus data rows.
///
/// Rows may be shorter than the header row (trailing blanks in spreadsheet
/// exports); `value` treats missing cells as empty strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Index of a column by exact (trimmed) header name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.headers.iter().position(|h| h.trim() == name)
    }

    /// Cell value at `index` in `row`, empty string when the row is short
    pub fn value<'a>(&self, row: &'a [String], index: usize) -> &'a str {
        row.get(index).map(|s| s.as_str()).unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}
