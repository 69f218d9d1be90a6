//! Command-line argument definitions for the carcost analyzer
//!
//! This module defines the complete CLI interface using the clap derive
//! API, including per-command validation and logging configuration.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::constants::DEFAULT_DATASET_FILE;
use crate::{Error, Result};

/// CLI arguments for the carcost analyzer
///
/// Analyzes tabular automobile datasets, aggregates price and seat totals
/// per manufacturer, and ranks brands by average dollars per seat.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "carcost-analyzer",
    version,
    about = "Analyze car datasets and rank manufacturers by average cost per seat",
    long_about = "A tool that ingests mixed-format automobile datasets, recovers usable \
                  numbers from free-form fields (price ranges, \"2+2\" seat notations, \
                  embedded units), aggregates per-brand totals, and produces a ranked \
                  cost-per-seat comparison across manufacturers."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the carcost analyzer
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Rank manufacturers by average dollars per seat (main command)
    Rank(RankArgs),
    /// List every parsed record in input order
    Records(RecordsArgs),
}

/// Arguments for the rank command (main analysis)
#[derive(Debug, Clone, Parser)]
pub struct RankArgs {
    /// Path to the car dataset file
    ///
    /// A delimited text file with a header line followed by data lines of
    /// 11 comma-separated fields. If not specified, defaults to
    /// CarDataset.csv in the current directory.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Path to the car dataset file"
    )]
    pub input_path: Option<PathBuf>,

    /// Limit the printed ranking to the first COUNT brands
    ///
    /// The full ranking is always computed; this only truncates the
    /// report output.
    #[arg(
        short = 'n',
        long = "limit",
        value_name = "COUNT",
        help = "Print only the first COUNT ranking entries"
    )]
    pub limit: Option<usize>,

    /// Output format for machine-readable results
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors and critical messages. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the records command (verbatim record listing)
#[derive(Debug, Clone, Parser)]
pub struct RecordsArgs {
    /// Path to the car dataset file
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Path to the car dataset file"
    )]
    pub input_path: Option<PathBuf>,

    /// Output format for the record listing
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the record listing"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
    /// CSV format for data analysis
    Csv,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

/// Resolve the input path, falling back to the default dataset file
fn resolve_input_path(input_path: &Option<PathBuf>) -> PathBuf {
    input_path
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET_FILE))
}

/// Validate an explicitly provided input path
fn validate_input_path(input_path: &Option<PathBuf>) -> Result<()> {
    if let Some(path) = input_path {
        if !path.exists() {
            return Err(Error::configuration(format!(
                "Input file does not exist: {}",
                path.display()
            )));
        }

        if !path.is_file() {
            return Err(Error::configuration(format!(
                "Input path is not a file: {}",
                path.display()
            )));
        }
    }

    Ok(())
}

/// Map verbosity flags to a log level string
fn log_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl RankArgs {
    /// Validate the rank command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_input_path(&self.input_path)?;

        if self.limit == Some(0) {
            return Err(Error::configuration(
                "Ranking limit must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the input path, defaulting when none was given
    pub fn get_input_path(&self) -> PathBuf {
        resolve_input_path(&self.input_path)
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }
}

impl RecordsArgs {
    /// Validate the records command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_input_path(&self.input_path)
    }

    /// Get the input path, defaulting when none was given
    pub fn get_input_path(&self) -> PathBuf {
        resolve_input_path(&self.input_path)
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }
}

impl Default for RankArgs {
    fn default() -> Self {
        Self {
            input_path: None,
            limit: None,
            output_format: OutputFormat::Human,
            verbose: 0,
            quiet: false,
        }
    }
}

impl Default for RecordsArgs {
    fn default() -> Self {
        Self {
            input_path: None,
            output_format: OutputFormat::Human,
            verbose: 0,
            quiet: false,
        }
    }
}
