//! Parser layer for reading tabular data files into a [`Table`](crate::model::Table)

mod csv;
mod json;
mod nsv;

use std::path::Path;

use anyhow::Result;
use thiserror::Error;

use crate::config::Config;
use crate::model::Table;

pub use self::csv::CsvParser;
pub use self::json::JsonParser;
pub use self::nsv::NsvParser;

/// Structural errors imposed on top of the codec primitives.
///
/// The NSV codec itself is total: it decodes any text and encodes any
/// table. Parsers layer file-level conventions on top, and those can fail.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The file decoded to a table with no rows at all, so there is
    /// nothing to take column names from and nothing to convert.
    #[error("empty NSV file: expected at least one row")]
    Empty,
}

/// Trait for parsing tabular data files
pub trait Parser: Send + Sync {
    /// Parse a file and return a Table
    fn parse(&self, path: &Path, config: &Config) -> Result<Table>;

    /// Check if this parser can handle the given file extension
    fn supports_extension(&self, ext: &str) -> bool;
}

/// Factory for creating parsers based on file extension
pub struct ParserFactory {
    parsers: Vec<Box<dyn Parser>>,
}

impl Default for ParserFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ParserFactory {
    /// Create a new parser factory with all supported parsers
    pub fn new() -> Self {
        Self {
            parsers: vec![
                Box::new(NsvParser),
                Box::new(CsvParser),
                Box::new(JsonParser),
            ],
        }
    }

    /// Get a parser for the given file path
    pub fn get_parser(&self, path: &Path) -> Result<&dyn Parser> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .or_else(|| detect_format(path).map(String::from))
            .unwrap_or_else(|| "nsv".to_string());

        for parser in &self.parsers {
            if parser.supports_extension(&ext) {
                return Ok(parser.as_ref());
            }
        }

        anyhow::bail!("Unsupported file format: {}", ext)
    }

    /// Parse a file using the appropriate parser
    pub fn parse(&self, path: &Path, config: &Config) -> Result<Table> {
        let parser = self.get_parser(path)?;
        parser.parse(path, config)
    }
}

/// Detect file format from content (for files without extension)
pub fn detect_format(path: &Path) -> Option<&'static str> {
    use std::fs::File;
    use std::io::{BufRead, BufReader};

    let file = File::open(path).ok()?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line).ok()?;
    let trimmed = line.trim_start();

    // JSON input is an array of objects, so the first byte gives it away.
    if trimmed.starts_with('[') || trimmed.starts_with('{') {
        return Some("json");
    }

    // A comma in the first line suggests CSV; NSV cells never hold one
    // specially, but an NSV first line is a single header cell.
    if trimmed.contains(',') {
        return Some("csv");
    }

    Some("nsv")
}

/// Generate positional column names, as callers expect when a file has no
/// header row: `col0`, `col1`, ...
pub(crate) fn generated_columns(count: usize) -> Vec<crate::model::Column> {
    (0..count)
        .map(|i| crate::model::Column::new(format!("col{}", i), i))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_columns() {
        let cols = generated_columns(3);
        let names: Vec<_> = cols.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["col0", "col1", "col2"]);
        assert_eq!(cols[2].index, 2);
    }
}
