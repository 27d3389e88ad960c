//! CSV file parser

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::Config;
use crate::model::{Column, Table};

use super::{generated_columns, FormatError, Parser};

/// Parser for CSV files
pub struct CsvParser;

impl Parser for CsvParser {
    fn parse(&self, path: &Path, config: &Config) -> Result<Table> {
        let file =
            File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
        let reader = BufReader::new(file);

        let use_header_row = config.column_names.is_none() && config.has_header;
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(use_header_row)
            .flexible(true)
            .from_reader(reader);

        let columns: Vec<Column> = if let Some(names) = &config.column_names {
            names
                .iter()
                .enumerate()
                .map(|(i, name)| Column::new(name.clone(), i))
                .collect()
        } else if use_header_row {
            csv_reader
                .headers()
                .context("Failed to read CSV headers")?
                .iter()
                .enumerate()
                .map(|(i, name)| Column::new(name.to_string(), i))
                .collect()
        } else {
            Vec::new()
        };

        let first_data_row = if use_header_row { 2 } else { 1 };
        let mut rows: Vec<Vec<String>> = Vec::new();
        for (line_num, result) in csv_reader.records().enumerate() {
            let record = result.with_context(|| {
                format!("Failed to read CSV row {}", line_num + first_data_row)
            })?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        // Without a header row there is nothing to name columns from until
        // the first record arrives.
        let columns = if columns.is_empty() {
            let width = rows.first().map(Vec::len).ok_or(FormatError::Empty)?;
            generated_columns(width)
        } else {
            columns
        };

        let mut table = Table::new(columns);
        for (i, cells) in rows.into_iter().enumerate() {
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
        matches!(ext.to_lowercase().as_str(), "csv" | "tsv")
    }
}
