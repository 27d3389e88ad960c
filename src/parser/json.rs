//! JSON array parser

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{bail, Context, Result};
use indexmap::IndexSet;
use serde_json::Value;

use crate::config::Config;
use crate::model::{Column, Table};

use super::Parser;

/// Parser for JSON array-of-objects files
pub struct JsonParser;

impl Parser for JsonParser {
    fn parse(&self, path: &Path, config: &Config) -> Result<Table> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open JSON file: {}", path.display()))?;
        let reader = BufReader::new(file);

        let value: Value = serde_json::from_reader(reader).context("Failed to parse JSON file")?;

        // Handle both arrays and single objects
        let array = match value {
            Value::Array(arr) => arr,
            Value::Object(_) => vec![value],
            _ => bail!("JSON must be an array or object"),
        };

        if array.is_empty() {
            bail!("JSON array is empty");
        }

        // Collect all unique keys across all objects to build column list
        let mut column_names: IndexSet<String> = IndexSet::new();
        for item in &array {
            if let Value::Object(obj) = item {
                for key in obj.keys() {
                    column_names.insert(key.clone());
                }
            }
        }

        let columns: Vec<Column> = if let Some(names) = &config.column_names {
            names
                .iter()
                .enumerate()
                .map(|(i, name)| Column::new(name.clone(), i))
                .collect()
        } else {
            column_names
                .iter()
                .enumerate()
                .map(|(i, name)| Column::new(name.clone(), i))
                .collect()
        };

        let mut table = Table::new(columns);

        for (row_num, item) in array.iter().enumerate() {
            let cells: Vec<String> = match item {
                Value::Object(obj) => table
                    .columns
                    .iter()
                    .map(|col| obj.get(&col.name).map(stringify).unwrap_or_default())
                    .collect(),
                other => vec![stringify(other)],
            };
            table.add_row(cells, row_num + 1);
        }

        Ok(table)
    }

    fn supports_extension(&self, ext: &str) -> bool {
        ext.eq_ignore_ascii_case("json")
    }
}

/// Render a JSON value as a cell string. Strings pass through unquoted,
/// null becomes the empty cell, anything composite keeps its compact JSON
/// form.
fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
