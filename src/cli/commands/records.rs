//! Records command implementation for the carcost analyzer CLI
//!
//! This module lists every successfully parsed record in input order,
//! either as the classic one-line listing, as JSON, or as CSV.

use std::time::Instant;
use tracing::{debug, info};

use super::shared::{AnalysisSummary, load_records_configuration, setup_logging};
use crate::Result;
use crate::app::models::CarRecord;
use crate::app::services::dataset_parser::DatasetParser;
use crate::cli::args::{OutputFormat, RecordsArgs};

/// Records command runner for the carcost analyzer
pub fn run_records(args: RecordsArgs) -> Result<AnalysisSummary> {
    let start_time = Instant::now();

    // Set up logging
    setup_logging(args.get_log_level(), args.quiet)?;

    info!("Starting record listing");
    debug!("Command line arguments: {:?}", args);

    // Validate arguments
    args.validate()?;

    // Build configuration
    let config = load_records_configuration(&args)?;

    // Parse the dataset
    let parser = DatasetParser::with_format(config.delimiter, config.quote);
    let parse_result = parser.parse_file(&config.input_path)?;

    // Print the listing
    match args.output_format {
        OutputFormat::Human => print_human_listing(&parse_result.records),
        OutputFormat::Json => print_json_listing(&parse_result.records),
        OutputFormat::Csv => print_csv_listing(&parse_result.records),
    }

    Ok(AnalysisSummary {
        lines_read: parse_result.stats.total_lines,
        records_parsed: parse_result.stats.records_parsed,
        lines_skipped: parse_result.stats.lines_skipped,
        brands_ranked: 0,
        processing_time: start_time.elapsed(),
    })
}

/// Print the classic one-line-per-record listing
fn print_human_listing(records: &[CarRecord]) {
    for record in records {
        println!("{}", record);
    }
}

/// Print the record collection as pretty JSON
fn print_json_listing(records: &[CarRecord]) {
    println!("{}", serde_json::to_string_pretty(records).unwrap());
}

/// Print the record collection as CSV with normalized numeric fields
fn print_csv_listing(records: &[CarRecord]) {
    println!(
        "company,model,engine,capacity,horsepower,top_speed,performance,price,fuel_type,seats,torque"
    );
    for record in records {
        println!(
            "{},{},{},{},{},{},{},{},{},{},{}",
            csv_field(&record.company),
            csv_field(&record.model),
            csv_field(&record.engine),
            csv_field(&record.capacity),
            record.horsepower,
            record.top_speed,
            record.performance,
            record.price,
            csv_field(&record.fuel_type),
            record.seats,
            csv_field(&record.torque)
        );
    }
}

/// Quote a textual field when it contains the delimiter
fn csv_field(value: &str) -> String {
    if value.contains(',') {
        format!("\"{}\"", value)
    } else {
        value.to_string()
    }
}
