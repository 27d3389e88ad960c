//! Table, Row, and Column data structures
//!
//! Cells are always strings: the formats this crate reads carry no type
//! information worth guessing at, and NSV in particular defines a cell as
//! an arbitrary string (possibly empty, possibly containing newlines or
//! backslashes).

use serde::{Deserialize, Serialize};

/// Column metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    /// Column name (from header, caller override, or generated)
    pub name: String,
    /// Column index (0-based position)
    pub index: usize,
}

impl Column {
    /// Create a new column with name and index
    pub fn new(name: impl Into<String>, index: usize) -> Self {
        Self {
            name: name.into(),
            index,
        }
    }
}

/// A row in the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Cell values in column order
    pub cells: Vec<String>,
    /// Original record number in the source file (1-indexed, counting the
    /// header row if one was present)
    pub source_row: usize,
}

impl Row {
    pub fn new(cells: Vec<String>, source_row: usize) -> Self {
        Self { cells, source_row }
    }

    /// Get a cell value by column index
    pub fn get(&self, index: usize) -> Option<&str> {
        self.cells.get(index).map(String::as_str)
    }
}

/// A table containing columns and rows
#[derive(Debug, Clone)]
pub struct Table {
    /// Column definitions
    pub columns: Vec<Column>,
    /// All rows in the table
    pub rows: Vec<Row>,
}

impl Table {
    /// Create a new empty table with column definitions
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Add a row to the table
    pub fn add_row(&mut self, cells: Vec<String>, source_row: usize) {
        self.rows.push(Row::new(cells, source_row));
    }

    /// Get column index by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Get column by name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Flatten back into raw rows of cells, optionally with the column
    /// names as the first row. This is the shape the NSV encoder consumes.
    pub fn to_rows(&self, include_header: bool) -> Vec<Vec<String>> {
        let mut rows = Vec::with_capacity(self.rows.len() + usize::from(include_header));
        if include_header {
            rows.push(self.columns.iter().map(|c| c.name.clone()).collect());
        }
        rows.extend(self.rows.iter().map(|r| r.cells.clone()));
        rows
    }
}
