//! JSON output format

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use serde_json::{Map, Value};

use crate::model::Table;

use super::OutputFormatter;

/// JSON output formatter: an array of objects keyed by column name
pub struct JsonOutput {
    pretty: bool,
}

impl JsonOutput {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for JsonOutput {
    fn render(&self, table: &Table, _source: &Path, writer: &mut dyn Write) -> Result<()> {
        let records: Vec<Value> = table
            .rows
            .iter()
            .map(|row| {
                let mut obj = Map::with_capacity(row.cells.len());
                for (i, cell) in row.cells.iter().enumerate() {
                    let name = table
                        .columns
                        .get(i)
                        .map(|col| col.name.clone())
                        .unwrap_or_else(|| format!("col{}", i));
                    obj.insert(name, Value::String(cell.clone()));
                }
                Value::Object(obj)
            })
            .collect();

        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, &records)?;
        } else {
            serde_json::to_writer(&mut *writer, &records)?;
        }
        writeln!(writer)?;

        Ok(())
    }
}
