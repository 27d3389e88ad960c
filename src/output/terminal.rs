//! Terminal table output

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use termcolor::ColorChoice;

use crate::model::Table;

use super::OutputFormatter;

/// Terminal output with a box-drawn table
pub struct TerminalOutput {
    #[allow(dead_code)]
    color_choice: ColorChoice,
}

impl TerminalOutput {
    pub fn new() -> Self {
        Self {
            color_choice: ColorChoice::Auto,
        }
    }

    pub fn with_color_choice(color_choice: ColorChoice) -> Self {
        Self { color_choice }
    }

    fn write_header(&self, writer: &mut dyn Write, source: &Path, table: &Table) -> Result<()> {
        writeln!(
            writer,
            " {} ({} rows × {} columns)",
            source.display(),
            table.row_count(),
            table.column_count()
        )?;
        writeln!(writer)?;
        Ok(())
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for TerminalOutput {
    fn render(&self, table: &Table, source: &Path, writer: &mut dyn Write) -> Result<()> {
        self.write_header(writer, source, table)?;

        let mut table_data: Vec<Vec<String>> = Vec::with_capacity(table.row_count() + 1);
        table_data.push(table.columns.iter().map(|c| c.name.clone()).collect());
        for row in &table.rows {
            table_data.push(row.cells.iter().map(|c| display_cell(c)).collect());
        }

        let display = build_table(&table_data);
        write!(writer, "{}", display)?;
        Ok(())
    }
}

/// Make a cell printable on one line: embedded newlines and backslashes
/// show in their escaped spelling so they cannot wreck the box layout.
fn display_cell(cell: &str) -> String {
    if !cell.contains('\n') && !cell.contains('\\') {
        return cell.to_string();
    }
    let mut out = String::with_capacity(cell.len());
    for c in cell.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\\' => out.push_str("\\\\"),
            c => out.push(c),
        }
    }
    out
}

/// Build a formatted table from data
fn build_table(data: &[Vec<String>]) -> String {
    if data.is_empty() || data[0].is_empty() {
        return String::new();
    }

    let col_count = data.iter().map(Vec::len).max().unwrap_or(0);

    let mut col_widths: Vec<usize> = vec![0; col_count];
    for row in data {
        for (i, cell) in row.iter().enumerate() {
            if i < col_widths.len() {
                col_widths[i] = col_widths[i].max(cell.chars().count());
            }
        }
    }

    let mut output = String::new();

    let border = |left: char, mid: char, right: char| {
        let mut line = String::new();
        line.push(left);
        for (i, width) in col_widths.iter().enumerate() {
            line.push_str(&"─".repeat(*width + 2));
            if i < col_widths.len() - 1 {
                line.push(mid);
            }
        }
        line.push(right);
        line.push('\n');
        line
    };

    let write_row = |output: &mut String, row: &[String]| {
        output.push('│');
        for (i, width) in col_widths.iter().enumerate() {
            let cell = row.get(i).map(String::as_str).unwrap_or("");
            let pad = width.saturating_sub(cell.chars().count());
            output.push(' ');
            output.push_str(cell);
            output.push_str(&" ".repeat(pad));
            output.push_str(" │");
        }
        output.push('\n');
    };

    output.push_str(&border('┌', '┬', '┐'));
    if let Some(header) = data.first() {
        write_row(&mut output, header);
    }
    output.push_str(&border('├', '┼', '┤'));
    for row in data.iter().skip(1) {
        write_row(&mut output, row);
    }
    output.push_str(&border('└', '┴', '┘'));

    output
}
