//! Data models for car dataset analysis
//!
//! This module contains the core data structures for representing parsed
//! automobile records and the per-brand running totals they fold into.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Car Record Structure
// =============================================================================

/// One parsed automobile record
///
/// An immutable value struct built from a single data line. Textual fields
/// are carried through trimmed but otherwise unmodified; numeric fields are
/// recovered by the extraction heuristics in
/// [`dataset_parser::numeric`](crate::app::services::dataset_parser::numeric).
/// Records are never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarRecord {
    /// Manufacturer name - the grouping key for aggregation, never empty
    pub company: String,

    /// Model name, descriptive only
    pub model: String,

    /// Engine description (e.g. "V8", "Electric Motor")
    pub engine: String,

    /// Displacement or battery capacity text (e.g. "3.8L", "100 kWh")
    pub capacity: String,

    /// Horsepower, first numeral found in the source field
    pub horsepower: i32,

    /// Top speed, first numeral found in the source field
    pub top_speed: i32,

    /// 0-100 km/h time, first numeral found in the source field
    pub performance: i32,

    /// Price rounded to the nearest integer, derived from `price_raw`
    pub price: i32,

    /// Unrounded price, the mean of every numeral in the price field.
    /// Retained so brand totals do not accumulate rounding error.
    pub price_raw: f64,

    /// Fuel type text (e.g. "Petrol", "Electric")
    pub fuel_type: String,

    /// Seat count, the sum of every integer in the seats field
    /// ("2+2" counts as 4)
    pub seats: i32,

    /// Torque text, carried through unmodified
    pub torque: String,
}

impl fmt::Display for CarRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} | Engine: {} | Capacity: {} | Horse Power: {} | Max Speed: {} | \
             Performance: {} | Price: {} | Fuel: {} | Seats: {} | Torque: {}",
            self.company,
            self.model,
            self.engine,
            self.capacity,
            self.horsepower,
            self.top_speed,
            self.performance,
            self.price,
            self.fuel_type,
            self.seats,
            self.torque
        )
    }
}

// =============================================================================
// Per-Brand Aggregate Totals
// =============================================================================

/// Running totals for a single brand
///
/// One struct per brand holds all three totals, so the price, seat, and
/// count figures always share the same key set. All fields are
/// monotonically non-decreasing as records are folded in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BrandTotals {
    /// Sum of unrounded record prices
    pub total_price_raw: f64,

    /// Sum of record seat counts
    pub total_seats: i32,

    /// Number of records folded in
    pub record_count: usize,
}

impl BrandTotals {
    /// Fold one record into the totals
    pub fn fold(&mut self, record: &CarRecord) {
        self.total_price_raw += record.price_raw;
        self.total_seats += record.seats;
        self.record_count += 1;
    }

    /// Dollars per seat, defined only for brands with at least one seat
    pub fn price_per_seat(&self) -> Option<f64> {
        if self.total_seats > 0 {
            Some(self.total_price_raw / self.total_seats as f64)
        } else {
            None
        }
    }
}
