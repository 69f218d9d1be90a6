//! Delimited-text parser for car dataset files
//!
//! This module provides a tolerant parser for comma-separated car datasets
//! focused on recovering usable records from mixed-format source data. The
//! design favors graceful degradation: malformed lines are skipped and
//! counted, never fatal.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - Core parsing orchestration and file handling
//! - [`line_splitter`] - Quote-aware field splitting of single lines
//! - [`numeric`] - Numeral extraction heuristics for free-form fields
//! - [`record_parser`] - Individual record construction and validation
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use carcost_analyzer::app::services::dataset_parser::DatasetParser;
//!
//! let parser = DatasetParser::new();
//! let result = parser.parse_content(
//!     "Company Names,Cars Names,Engines,CC/Battery Capacity,HorsePower,\
//!      Total Speed,Performance(0 - 100 )KM/H,Cars Prices,Fuel Types,Seats,Torque\n\
//!      Acme,X,V6,2.0L,200 hp,220 km/h,6 sec,40000,Petrol,4,300Nm",
//! );
//!
//! assert_eq!(result.records.len(), 1);
//! assert_eq!(result.stats.records_parsed, 1);
//! ```

pub mod line_splitter;
pub mod numeric;
pub mod parser;
pub mod record_parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use parser::DatasetParser;
pub use stats::{ParseResult, ParseStats};
