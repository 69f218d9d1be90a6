//! Application constants for the carcost analyzer
//!
//! This module contains the dataset column layout, default parsing
//! characters, and the numeral patterns used throughout the analyzer.

// =============================================================================
// Dataset Layout
// =============================================================================

/// Number of fields a data line must carry to be accepted
pub const REQUIRED_COLUMN_COUNT: usize = 11;

/// Default dataset file name when no input path is given
pub const DEFAULT_DATASET_FILE: &str = "CarDataset.csv";

/// Default field delimiter
pub const DEFAULT_DELIMITER: char = ',';

/// Default quote character for fields containing the delimiter
pub const DEFAULT_QUOTE: char = '"';

/// Fixed column positions within a data line
///
/// The dataset carries its fields in this order:
/// company, model, engine, capacity, horsepower, top speed,
/// 0-100 performance, price, fuel type, seats, torque.
pub mod columns {
    pub const COMPANY: usize = 0;
    pub const MODEL: usize = 1;
    pub const ENGINE: usize = 2;
    pub const CAPACITY: usize = 3;
    pub const HORSEPOWER: usize = 4;
    pub const TOP_SPEED: usize = 5;
    pub const PERFORMANCE: usize = 6;
    pub const PRICE: usize = 7;
    pub const FUEL_TYPE: usize = 8;
    pub const SEATS: usize = 9;
    pub const TORQUE: usize = 10;
}

// =============================================================================
// Numeral Extraction
// =============================================================================

/// Pattern for an optionally-signed, optionally-decimal numeral.
///
/// Thousands separators are not part of the pattern: "45,000" scans as
/// the two numerals 45 and 000.
pub const NUMERAL_PATTERN: &str = r"[-+]?[0-9]*\.?[0-9]+";

/// Pattern for plain unsigned integers, used for seat counts
pub const INTEGER_PATTERN: &str = r"\d+";
