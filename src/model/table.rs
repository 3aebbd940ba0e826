//! Resolved table types.

use serde::{Deserialize, Serialize};

/// A table reconstructed from the block graph: declared dimensions plus a
/// row/column grid of cell text.
///
/// Rows are allocated lazily as cells arrive, so a table whose cells were
/// never seen has an empty `rows` even when `row_count` is non-zero.
/// Cells never populated hold `""`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedTable {
    /// Declared number of rows
    pub row_count: u32,

    /// Declared number of columns
    pub column_count: u32,

    /// Cell text by row, then column
    pub rows: Vec<Vec<String>>,
}

impl ResolvedTable {
    /// Create a new empty table with declared dimensions.
    pub fn new(row_count: u32, column_count: u32) -> Self {
        Self {
            row_count,
            column_count,
            rows: Vec::new(),
        }
    }

    /// Store cell text at a zero-based position, growing the grid to fit.
    ///
    /// Intermediate rows are allocated as `column_count` empty strings. A
    /// repeated position overwrites the previous value.
    pub fn place(&mut self, row: usize, col: usize, text: String) {
        while self.rows.len() <= row {
            self.rows.push(vec![String::new(); self.column_count as usize]);
        }
        let cells = &mut self.rows[row];
        if cells.len() <= col {
            cells.resize(col + 1, String::new());
        }
        cells[col] = text;
    }

    /// Get cell text at a zero-based position.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.get(col)).map(String::as_str)
    }

    /// Check whether a zero-based position lies inside the declared grid.
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.row_count as usize && col < self.column_count as usize
    }

    /// Number of rows actually populated.
    pub fn populated_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of non-empty cells.
    pub fn populated_cells(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|r| r.iter())
            .filter(|c| !c.is_empty())
            .count()
    }

    /// Check if the table has no populated rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get plain text representation: tab-separated cells, one row per line.
    pub fn plain_text(&self) -> String {
        self.rows
            .iter()
            .map(|row| row.join("\t"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
