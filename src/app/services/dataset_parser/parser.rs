//! Core dataset parser implementation
//!
//! This module provides the main parser orchestration, handling file
//! reading, header handling, and coordination between line splitting and
//! record construction.

use std::path::Path;
use tracing::{debug, info};

use super::line_splitter::split_line;
use super::record_parser::parse_car_record;
use super::stats::{ParseResult, ParseStats};
use crate::constants::{DEFAULT_DELIMITER, DEFAULT_QUOTE};
use crate::{Error, Result};

/// Tolerant parser for delimited car dataset files
///
/// The parser focuses on essential functionality:
/// - Quote-aware field splitting of each data line
/// - Numeric recovery from mixed-format fields
/// - Graceful degradation: malformed lines are skipped and counted
#[derive(Debug, Clone)]
pub struct DatasetParser {
    delimiter: char,
    quote: char,
}

impl DatasetParser {
    /// Create a parser for comma-delimited, double-quoted input
    pub fn new() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            quote: DEFAULT_QUOTE,
        }
    }

    /// Create a parser with custom format characters
    pub fn with_format(delimiter: char, quote: char) -> Self {
        Self { delimiter, quote }
    }

    /// Parse a dataset file and return records with statistics.
    ///
    /// Only a failure to open or read the file itself is surfaced as an
    /// error; per-line anomalies are recovered locally and recorded in the
    /// returned statistics.
    pub fn parse_file(&self, file_path: &Path) -> Result<ParseResult> {
        info!("Parsing car dataset: {}", file_path.display());

        if !file_path.exists() {
            return Err(Error::file_not_found(file_path.display().to_string()));
        }

        let content = std::fs::read_to_string(file_path).map_err(|e| {
            Error::io(
                format!("Failed to read file {}", file_path.display()),
                e,
            )
        })?;

        Ok(self.parse_content(&content))
    }

    /// Parse dataset content that is already in memory.
    ///
    /// The first line is the column header and is discarded
    /// unconditionally; blank lines are ignored. Every remaining line
    /// either becomes a record or increments the skip count.
    pub fn parse_content(&self, content: &str) -> ParseResult {
        let mut stats = ParseStats::new();
        let mut records = Vec::new();

        let mut lines = content.lines();
        if let Some(header) = lines.next() {
            debug!("Discarded header line: {}", header);
        }

        for (index, line) in lines.enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            stats.total_lines += 1;

            let fields = split_line(line, self.delimiter, self.quote);
            match parse_car_record(&fields) {
                Ok(record) => {
                    records.push(record);
                    stats.records_parsed += 1;
                }
                Err(e) => {
                    stats.lines_skipped += 1;
                    // Line numbers are 1-based and count the header
                    stats.errors.push(format!("Line {}: {}", index + 2, e));
                    debug!("Skipped line {}: {}", index + 2, e);
                }
            }
        }

        info!(
            "Parsed {} records from {} data lines ({} skipped)",
            stats.records_parsed, stats.total_lines, stats.lines_skipped
        );

        ParseResult { records, stats }
    }
}

impl Default for DatasetParser {
    fn default() -> Self {
        Self::new()
    }
}
