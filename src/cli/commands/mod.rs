//! Command implementations for the carcost analyzer CLI
//!
//! This module contains the main command execution logic and report
//! generation for the CLI interface. Each command is implemented in its
//! own module.

pub mod rank;
pub mod records;
pub mod shared;

// Re-export the main types for easy access
pub use shared::AnalysisSummary;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the carcost analyzer
///
/// Dispatches to the appropriate subcommand handler based on CLI args:
/// - `rank`: full analysis workflow with ranking report
/// - `records`: verbatim listing of every parsed record
pub fn run(args: Args) -> Result<AnalysisSummary> {
    match args.get_command() {
        Commands::Rank(rank_args) => rank::run_rank(rank_args),
        Commands::Records(records_args) => records::run_records(records_args),
    }
}
