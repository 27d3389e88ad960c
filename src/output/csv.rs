//! CSV output format

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::model::Table;

use super::OutputFormatter;

/// CSV output formatter
pub struct CsvOutput;

impl CsvOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CsvOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for CsvOutput {
    fn render(&self, table: &Table, _source: &Path, writer: &mut dyn Write) -> Result<()> {
        let mut csv_writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_writer(writer);

        csv_writer
            .write_record(table.columns.iter().map(|c| c.name.as_str()))
            .context("Failed to write CSV header")?;

        for row in &table.rows {
            csv_writer
                .write_record(&row.cells)
                .with_context(|| format!("Failed to write CSV row {}", row.source_row))?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}
