//! NSV file parser

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::codec;
use crate::config::Config;
use crate::model::{Column, Table};

use super::{generated_columns, FormatError, Parser};

/// Parser for NSV files
pub struct NsvParser;

impl Parser for NsvParser {
    fn parse(&self, path: &Path, config: &Config) -> Result<Table> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to open file: {}", path.display()))?;

        let mut raw = codec::decode_with(&text, config.trailing);
        if raw.is_empty() {
            return Err(FormatError::Empty)
                .with_context(|| format!("Failed to read NSV file: {}", path.display()));
        }

        // Column names: explicit override wins, then the header row, then
        // generated positional names.
        let (columns, first_data_row) = match &config.column_names {
            Some(names) => {
                let columns = names
                    .iter()
                    .enumerate()
                    .map(|(i, name)| Column::new(name.clone(), i))
                    .collect();
                (columns, 1)
            }
            None if config.has_header => {
                let header = raw.remove(0);
                let columns = header
                    .into_iter()
                    .enumerate()
                    .map(|(i, name)| Column::new(name, i))
                    .collect();
                (columns, 2)
            }
            None => (generated_columns(raw[0].len()), 1),
        };

        let mut table = Table::new(columns);

        for (i, cells) in raw.into_iter().enumerate() {
            // Pad short rows so every row covers the column set; extra
            // cells beyond it are kept (rectangularity is not enforced).
            let cells = if cells.len() < table.column_count() {
                let mut padded = cells;
                padded.resize(table.column_count(), String::new());
                padded
            } else {
                cells
            };
            table.add_row(cells, i + first_data_row);
        }

        Ok(table)
    }

    fn supports_extension(&self, ext: &str) -> bool {
        ext.eq_ignore_ascii_case("nsv")
    }
}
