//! NSV output format

use std::io::Write;
use std::path::Path;

use anyhow::Result;

use crate::codec;
use crate::model::Table;

use super::OutputFormatter;

/// NSV output formatter
///
/// Writes the column names as the first row, then every data row, each with
/// its terminating blank line — including the last one, so the output file
/// re-decodes without losing its final row.
pub struct NsvOutput {
    include_header: bool,
}

impl NsvOutput {
    pub fn new() -> Self {
        Self {
            include_header: true,
        }
    }

    pub fn without_header() -> Self {
        Self {
            include_header: false,
        }
    }
}

impl Default for NsvOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for NsvOutput {
    fn render(&self, table: &Table, _source: &Path, writer: &mut dyn Write) -> Result<()> {
        let text = codec::encode(&table.to_rows(self.include_header));
        writer.write_all(text.as_bytes())?;
        Ok(())
    }
}
