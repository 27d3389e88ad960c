//! nsv - Read, write, and convert NSV tabular data

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use nsv::codec::Trailing;
use nsv::config::{Config, OutputFormat};
use nsv::output::{render_to_stdout, render_to_writer};
use nsv::parser::ParserFactory;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliOutputFormat {
    Terminal,
    Json,
    Csv,
    Nsv,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(f: CliOutputFormat) -> Self {
        match f {
            CliOutputFormat::Terminal => OutputFormat::Terminal,
            CliOutputFormat::Json => OutputFormat::Json,
            CliOutputFormat::Csv => OutputFormat::Csv,
            CliOutputFormat::Nsv => OutputFormat::Nsv,
        }
    }
}

/// Read, inspect, and convert NSV (newline-separated values) files
#[derive(Parser, Debug)]
#[command(name = "nsv")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input file (.nsv, .csv, .tsv, or .json; detected from content
    /// when the extension is missing)
    input: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "terminal")]
    format: CliOutputFormat,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Do not treat the first row as column names
    #[arg(long)]
    no_header: bool,

    /// Explicit column names (comma-separated); overrides the header row
    #[arg(long, value_delimiter = ',')]
    columns: Vec<String>,

    /// Keep an unterminated final row instead of discarding it
    #[arg(long)]
    flush_trailing: bool,

    /// Only show row/column counts, not the table itself
    #[arg(long)]
    stats_only: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::new(cli.input.clone())
        .with_output_format(cli.format.into())
        .with_header(!cli.no_header)
        .with_trailing(if cli.flush_trailing {
            Trailing::Flush
        } else {
            Trailing::Discard
        })
        .with_stats_only(cli.stats_only);
    if !cli.columns.is_empty() {
        config = config.with_column_names(cli.columns);
    }
    if let Some(output) = cli.output.clone() {
        config = config.with_output(output);
    }

    let factory = ParserFactory::new();
    let table = factory
        .parse(&cli.input, &config)
        .with_context(|| format!("Failed to parse input file: {}", cli.input.display()))?;

    if config.stats_only {
        println!("File:    {}", cli.input.display());
        println!("Rows:    {}", table.row_count());
        println!("Columns: {}", table.column_count());
        for column in &table.columns {
            println!("  [{}] {}", column.index, column.name);
        }
        return Ok(());
    }

    match &config.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            render_to_writer(&table, &cli.input, config.output_format, &mut writer)?;
            writer
                .flush()
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
        }
        None => {
            render_to_stdout(&table, &cli.input, config.output_format)?;
        }
    }

    Ok(())
}
