//! Configuration management and validation.
//!
//! Provides the configuration structure for a single analysis run:
//! input location, delimited-text format characters, and report limits.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::{DEFAULT_DATASET_FILE, DEFAULT_DELIMITER, DEFAULT_QUOTE};
use crate::{Error, Result};

/// Configuration for one analysis run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the car dataset file
    pub input_path: PathBuf,

    /// Field delimiter character
    pub delimiter: char,

    /// Quote character for fields containing the delimiter
    pub quote: char,

    /// Maximum number of ranking entries to print (None prints all)
    pub ranking_limit: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_DATASET_FILE),
            delimiter: DEFAULT_DELIMITER,
            quote: DEFAULT_QUOTE,
            ranking_limit: None,
        }
    }
}

impl Config {
    /// Create a configuration for the given input file
    pub fn new(input_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            ..Default::default()
        }
    }

    /// Create a configuration with custom format characters
    pub fn with_format(mut self, delimiter: char, quote: char) -> Self {
        self.delimiter = delimiter;
        self.quote = quote;
        self
    }

    /// Create a configuration with a ranking print limit
    pub fn with_ranking_limit(mut self, limit: usize) -> Self {
        self.ranking_limit = Some(limit);
        self
    }

    /// Validate the configuration for consistency
    pub fn validate(&self) -> Result<()> {
        if self.delimiter == self.quote {
            return Err(Error::configuration(format!(
                "Delimiter and quote character must differ (both are '{}')",
                self.delimiter
            )));
        }

        if self.ranking_limit == Some(0) {
            return Err(Error::configuration(
                "Ranking limit must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
