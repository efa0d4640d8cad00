// conferia-core/src/domain/table.rs

use std::collections::HashSet;

/// One loaded tabular source: a header row plus data rows of raw strings.
///
/// Rows may be ragged (shorter or longer than the header); cell access is
/// total and missing cells read as the empty string. Validation against a
/// declared layout happens at schema-binding time, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn width(&self) -> usize {
        self.headers.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows distinct under full-row equality.
    pub fn distinct_row_count(&self) -> usize {
        let seen: HashSet<&[String]> = self.rows.iter().map(Vec::as_slice).collect();
        seen.len()
    }

    /// Header name -> column position. Both sides compared trimmed, since
    /// exported headers occasionally carry stray whitespace.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        let wanted = name.trim();
        self.headers.iter().position(|h| h.trim() == wanted)
    }

    /// Total cell accessor: out-of-range rows or columns read as "".
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }
}
