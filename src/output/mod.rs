//! Output formatting for tables

mod csv;
mod json;
mod nsv;
mod terminal;

use std::io::Write;
use std::path::Path;

use anyhow::Result;

use crate::config::OutputFormat;
use crate::model::Table;

pub use self::csv::CsvOutput;
pub use self::json::JsonOutput;
pub use self::nsv::NsvOutput;
pub use self::terminal::TerminalOutput;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Render a table to a writer
    fn render(&self, table: &Table, source: &Path, writer: &mut dyn Write) -> Result<()>;
}

/// Factory for creating output formatters
pub struct OutputFactory;

impl OutputFactory {
    /// Create an output formatter based on format type
    pub fn create(format: OutputFormat) -> Box<dyn OutputFormatter> {
        match format {
            OutputFormat::Terminal => Box::new(TerminalOutput::new()),
            OutputFormat::Json => Box::new(JsonOutput::new()),
            OutputFormat::Csv => Box::new(CsvOutput::new()),
            OutputFormat::Nsv => Box::new(NsvOutput::new()),
        }
    }
}

/// Render a table to an arbitrary writer
pub fn render_to_writer(
    table: &Table,
    source: &Path,
    format: OutputFormat,
    writer: &mut dyn Write,
) -> Result<()> {
    let formatter = OutputFactory::create(format);
    formatter.render(table, source, writer)
}

/// Render a table to stdout
pub fn render_to_stdout(table: &Table, source: &Path, format: OutputFormat) -> Result<()> {
    let mut stdout = std::io::stdout();
    render_to_writer(table, source, format, &mut stdout)
}
