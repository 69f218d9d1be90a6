//! Numeral extraction heuristics for free-form text fields
//!
//! Car dataset fields mix numbers with units, currency symbols, ranges,
//! and composite notations ("185 HP @ 6000rpm", "$30,000 - $45,000",
//! "2+2"). These helpers locate every maximal numeral substring and reduce
//! them to a single value under one of three policies: first-match,
//! mean-of-all-matches, or sum-of-all-matches.
//!
//! Thousands separators are not part of the numeral pattern, so "45,000"
//! scans as the two numerals 45 and 000 and both participate in mean and
//! sum computations. This matches the historical extraction behavior the
//! downstream aggregates were calibrated against; see the module tests for
//! the literal results.

use regex::Regex;
use std::sync::LazyLock;

use crate::constants::{INTEGER_PATTERN, NUMERAL_PATTERN};

static NUMERAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(NUMERAL_PATTERN).expect("numeral pattern is valid"));

static INTEGER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(INTEGER_PATTERN).expect("integer pattern is valid"));

/// Extract the first numeral in the text, or 0.0 if none is found.
///
/// A located numeral that fails to parse is skipped rather than fatal.
pub fn extract_first(text: &str) -> f64 {
    NUMERAL_RE
        .find_iter(text.trim())
        .find_map(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// Extract the first numeral rounded to the nearest integer.
///
/// Used for horsepower, top speed, and performance fields.
pub fn extract_first_int(text: &str) -> i32 {
    extract_first(text).round() as i32
}

/// Extract the arithmetic mean of every numeral in the text, or 0.0 if
/// none is found.
///
/// Used for price fields so that a range like "30000 - 45000" yields the
/// midpoint. Numerals that fail to parse are skipped and do not count
/// toward the mean's divisor.
pub fn extract_mean(text: &str) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;

    for m in NUMERAL_RE.find_iter(text) {
        if let Ok(value) = m.as_str().parse::<f64>() {
            sum += value;
            count += 1;
        }
    }

    if count == 0 { 0.0 } else { sum / count as f64 }
}

/// Extract the sum of every integer in the text, or 0 if none is found.
///
/// Used for seat fields so that a composite notation like "2+2" yields 4.
pub fn extract_sum(text: &str) -> i32 {
    INTEGER_RE
        .find_iter(text)
        .filter_map(|m| m.as_str().parse::<i32>().ok())
        .sum()
}
