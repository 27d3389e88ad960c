//! Configuration handling for nsv

use std::path::PathBuf;

use crate::codec::Trailing;

/// Output format for rendered tables
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
    Csv,
    Nsv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "terminal" => Ok(OutputFormat::Terminal),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "nsv" => Ok(OutputFormat::Nsv),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// Configuration for read/convert operations
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the input file
    pub input: PathBuf,
    /// Path to the output file (stdout when None)
    pub output: Option<PathBuf>,
    /// Output format
    pub output_format: OutputFormat,
    /// Treat the first row as column names
    pub has_header: bool,
    /// Explicit column names; overrides the header row when set
    pub column_names: Option<Vec<String>>,
    /// How the NSV decoder handles an unterminated final row
    pub trailing: Trailing,
    /// Only show row/column counts, not the table itself
    pub stats_only: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            output: None,
            output_format: OutputFormat::default(),
            has_header: true,
            column_names: None,
            trailing: Trailing::default(),
            stats_only: false,
        }
    }
}

impl Config {
    /// Create a new Config for an input file
    pub fn new(input: PathBuf) -> Self {
        Self {
            input,
            ..Default::default()
        }
    }

    /// Set the output file path
    pub fn with_output(mut self, output: PathBuf) -> Self {
        self.output = Some(output);
        self
    }

    /// Set the output format
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Control whether the first row is treated as column names
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Supply explicit column names
    pub fn with_column_names(mut self, names: Vec<String>) -> Self {
        self.column_names = Some(names);
        self
    }

    /// Set the trailing-row decode mode
    pub fn with_trailing(mut self, trailing: Trailing) -> Self {
        self.trailing = trailing;
        self
    }

    /// Enable stats-only mode
    pub fn with_stats_only(mut self, stats_only: bool) -> Self {
        self.stats_only = stats_only;
        self
    }
}
