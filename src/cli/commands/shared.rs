//! Shared components for CLI commands
//!
//! This module contains common types, utilities, and functions used across
//! multiple CLI command implementations.

use tracing::debug;

use crate::Result;
use crate::cli::args::{RankArgs, RecordsArgs};
use crate::config::Config;

/// Analysis summary for reporting across all commands
#[derive(Debug, Clone, Default)]
pub struct AnalysisSummary {
    /// Number of non-blank data lines read
    pub lines_read: usize,
    /// Number of records successfully parsed
    pub records_parsed: usize,
    /// Number of lines skipped as malformed
    pub lines_skipped: usize,
    /// Number of brands that survived ranking filters
    pub brands_ranked: usize,
    /// Total processing time
    pub processing_time: std::time::Duration,
}

/// Set up structured logging for a command
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("carcost_analyzer={}", log_level)));

    if quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Build and validate the configuration for the rank command
pub fn load_rank_configuration(args: &RankArgs) -> Result<Config> {
    let mut config = Config::new(args.get_input_path());
    if let Some(limit) = args.limit {
        config = config.with_ranking_limit(limit);
    }
    config.validate()?;

    debug!("Loaded configuration: {:?}", config);
    Ok(config)
}

/// Build and validate the configuration for the records command
pub fn load_records_configuration(args: &RecordsArgs) -> Result<Config> {
    let config = Config::new(args.get_input_path());
    config.validate()?;

    debug!("Loaded configuration: {:?}", config);
    Ok(config)
}
