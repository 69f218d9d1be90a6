//! Carcost Analyzer Library
//!
//! A Rust library for analyzing tabular automobile datasets and ranking
//! manufacturers by average cost per seat.
//!
//! This library provides tools for:
//! - Parsing delimited car datasets with quoted-field handling
//! - Recovering usable numbers from free-form text fields (ranges,
//!   composite values, embedded units)
//! - Aggregating per-brand price and seat totals in a single pass
//! - Ranking brands by dollars per seat with deterministic ordering
//! - Comprehensive error handling and recovery

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod brand_aggregator;
        pub mod dataset_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{BrandTotals, CarRecord};
pub use app::services::brand_aggregator::{BestBrand, BrandAggregator, Ranking, RankingEntry};
pub use app::services::dataset_parser::{DatasetParser, ParseResult, ParseStats};
pub use config::Config;

/// Result type alias for the carcost analyzer
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for dataset analysis operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Input file not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
