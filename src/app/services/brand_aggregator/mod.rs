//! Per-brand aggregation of parsed car records
//!
//! This module folds records into running per-brand totals and derives the
//! cost-per-seat ranking from them.
//!
//! ## Architecture
//!
//! - [`BrandAggregator`] - accumulates one [`BrandTotals`] per brand in a
//!   single ingestion pass
//! - [`ranker`] - converts the totals into an ascending [`Ranking`] with a
//!   designated best brand
//!
//! Aggregation is strictly single-threaded: the totals map is mutated only
//! during the ingestion pass and is read-only once ranking begins.

pub mod ranker;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use ranker::{BestBrand, Ranking, RankingEntry};

use std::collections::HashMap;
use tracing::debug;

use crate::app::models::{BrandTotals, CarRecord};

/// Accumulates running totals per brand
///
/// Brands appear in the totals map on first sight, initialized to zero.
/// There is no removal operation: the aggregator is write-once-per-record
/// during ingestion and read-many afterwards.
#[derive(Debug, Clone, Default)]
pub struct BrandAggregator {
    totals: HashMap<String, BrandTotals>,
}

impl BrandAggregator {
    /// Create an empty aggregator
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one record into its brand's totals
    pub fn fold(&mut self, record: &CarRecord) {
        let totals = self.totals.entry(record.company.clone()).or_default();
        totals.fold(record);
        debug!(
            "Folded {} {}: brand total now {} records",
            record.company, record.model, totals.record_count
        );
    }

    /// Fold every record of a collection, in iteration order
    pub fn fold_all<'a>(&mut self, records: impl IntoIterator<Item = &'a CarRecord>) {
        for record in records {
            self.fold(record);
        }
    }

    /// All per-brand totals
    pub fn totals(&self) -> &HashMap<String, BrandTotals> {
        &self.totals
    }

    /// Totals for a single brand, if it has been seen
    pub fn brand_totals(&self, brand: &str) -> Option<&BrandTotals> {
        self.totals.get(brand)
    }

    /// Number of distinct brands seen
    pub fn brand_count(&self) -> usize {
        self.totals.len()
    }

    /// Whether any record has been folded
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}
