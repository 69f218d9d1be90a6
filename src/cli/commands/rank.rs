//! Rank command implementation for the carcost analyzer CLI
//!
//! This module contains the complete analysis workflow: dataset parsing,
//! per-brand aggregation, ranking, and report generation.

use colored::Colorize;
use std::time::Instant;
use tracing::{debug, info, warn};

use super::shared::{AnalysisSummary, load_rank_configuration, setup_logging};
use crate::app::services::brand_aggregator::{BestBrand, BrandAggregator, Ranking};
use crate::app::services::dataset_parser::{DatasetParser, ParseStats};
use crate::cli::args::{OutputFormat, RankArgs};
use crate::{Config, Result};

/// Rank command runner for the carcost analyzer
///
/// This function orchestrates the entire analysis workflow:
/// 1. Set up logging and configuration
/// 2. Parse the dataset in a single pass
/// 3. Fold records into per-brand totals and derive the ranking
/// 4. Generate the report in the requested format
pub fn run_rank(args: RankArgs) -> Result<AnalysisSummary> {
    let start_time = Instant::now();

    // Set up logging
    setup_logging(args.get_log_level(), args.quiet)?;

    info!("Starting carcost analyzer");
    debug!("Command line arguments: {:?}", args);

    // Validate arguments
    args.validate()?;

    // Build configuration
    let config = load_rank_configuration(&args)?;

    // Parse the dataset
    let parser = DatasetParser::with_format(config.delimiter, config.quote);
    let parse_result = parser.parse_file(&config.input_path)?;

    if parse_result.stats.lines_skipped > 0 {
        warn!(
            "Skipped {} malformed lines out of {}",
            parse_result.stats.lines_skipped, parse_result.stats.total_lines
        );
    }

    // Fold records into per-brand totals in input order
    let mut aggregator = BrandAggregator::new();
    aggregator.fold_all(&parse_result.records);

    info!(
        "Aggregated {} records across {} brands",
        parse_result.records.len(),
        aggregator.brand_count()
    );

    // Derive the ranking
    let ranking = Ranking::from_aggregator(&aggregator);
    let best = ranking.best_brand(&aggregator);

    debug!(
        "Ranking holds {} of {} brands after filtering",
        ranking.len(),
        aggregator.brand_count()
    );

    // Generate the report
    generate_report(&args, &config, &ranking, &best, &parse_result.stats)?;

    let summary = AnalysisSummary {
        lines_read: parse_result.stats.total_lines,
        records_parsed: parse_result.stats.records_parsed,
        lines_skipped: parse_result.stats.lines_skipped,
        brands_ranked: ranking.len(),
        processing_time: start_time.elapsed(),
    };

    info!(
        "Analysis completed in {:.2}s",
        summary.processing_time.as_secs_f64()
    );

    Ok(summary)
}

/// Generate the ranking report based on output format
fn generate_report(
    args: &RankArgs,
    config: &Config,
    ranking: &Ranking,
    best: &Option<BestBrand>,
    stats: &ParseStats,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => generate_human_report(config, ranking, best, stats),
        OutputFormat::Json => generate_json_report(config, ranking, best, stats),
        OutputFormat::Csv => generate_csv_report(ranking, best, stats),
    }
}

/// Generate human-readable report
fn generate_human_report(
    config: &Config,
    ranking: &Ranking,
    best: &Option<BestBrand>,
    stats: &ParseStats,
) -> Result<()> {
    println!("\n🚗 Car Cost Analysis");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📊 Dataset Summary:");
    println!("   • Data lines read: {}", stats.total_lines);
    println!("   • Records parsed: {}", stats.records_parsed);
    println!("   • Lines skipped: {}", stats.lines_skipped);
    println!("   • Brands ranked: {}", ranking.len());

    match best {
        Some(best) => {
            println!();
            println!(
                "🏆 Best brand by dollars per seat: {} (${:.2} per seat)",
                best.brand.green().bold(),
                best.score
            );
            println!(
                "   Models: {}, Total seats: {}, Total price: ${:.2}",
                best.record_count, best.total_seats, best.total_price_raw
            );
        }
        None => {
            println!();
            println!("{}", "No brand data available to rank.".yellow());
            return Ok(());
        }
    }

    println!("\nFull ranking (brand : dollars per seat):");
    let shown = match config.ranking_limit {
        Some(limit) => limit.min(ranking.len()),
        None => ranking.len(),
    };
    for (position, entry) in ranking.entries().iter().take(shown).enumerate() {
        println!(
            "   {:>3}. {} : ${:.2} per seat",
            position + 1,
            entry.brand,
            entry.score
        );
    }
    if shown < ranking.len() {
        println!("   ... and {} more brands", ranking.len() - shown);
    }
    println!();

    Ok(())
}

/// Generate JSON report for machine consumption
fn generate_json_report(
    config: &Config,
    ranking: &Ranking,
    best: &Option<BestBrand>,
    stats: &ParseStats,
) -> Result<()> {
    let shown = match config.ranking_limit {
        Some(limit) => limit.min(ranking.len()),
        None => ranking.len(),
    };

    let json_report = serde_json::json!({
        "data_lines_read": stats.total_lines,
        "records_parsed": stats.records_parsed,
        "lines_skipped": stats.lines_skipped,
        "brands_ranked": ranking.len(),
        "best_brand": best,
        "ranking": &ranking.entries()[..shown],
    });

    println!("{}", serde_json::to_string_pretty(&json_report).unwrap());
    Ok(())
}

/// Generate CSV report for data analysis
fn generate_csv_report(
    ranking: &Ranking,
    best: &Option<BestBrand>,
    stats: &ParseStats,
) -> Result<()> {
    println!("metric,value");
    println!("data_lines_read,{}", stats.total_lines);
    println!("records_parsed,{}", stats.records_parsed);
    println!("lines_skipped,{}", stats.lines_skipped);
    println!("brands_ranked,{}", ranking.len());
    if let Some(best) = best {
        println!("best_brand,{}", best.brand);
    }
    println!();
    println!("rank,brand,dollars_per_seat");
    for (position, entry) in ranking.entries().iter().enumerate() {
        println!("{},{},{:.2}", position + 1, entry.brand, entry.score);
    }

    Ok(())
}
