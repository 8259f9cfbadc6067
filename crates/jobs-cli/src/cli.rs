//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "jobs-clean",
    version,
    about = "Clean and validate scraped job postings",
    long_about = "Clean a scraped job-postings CSV: canonicalize column names,\n\
                  translate sentinel placeholders to missing values, extract\n\
                  salary/revenue/location/competitor fields, and validate every\n\
                  row against the posting schema."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Clean a postings CSV and validate every row.
    Clean(CleanArgs),

    /// Print the row-validation schema.
    Schema,
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Path to the scraped postings CSV file.
    #[arg(value_name = "CSV_FILE")]
    pub input: PathBuf,

    /// Output directory for the cleaned CSV and validation report
    /// (default: alongside the input file).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Cleaning configuration JSON (default: the built-in policy for the
    /// Glassdoor postings dataset).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Fail when the sentinel policy names a column the table lacks,
    /// instead of skipping it.
    #[arg(long = "strict-columns")]
    pub strict_columns: bool,

    /// Validate and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
