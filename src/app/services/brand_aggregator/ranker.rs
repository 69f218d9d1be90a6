//! Cost-per-seat ranking derived from per-brand totals
//!
//! Converts aggregate totals into an ascending ranking of dollars per
//! seat, filtering out brands for which the metric is undefined or
//! degenerate.

use serde::Serialize;
use tracing::debug;

use super::BrandAggregator;
use crate::app::models::BrandTotals;

/// One ranked brand with its derived score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingEntry {
    /// Brand name
    pub brand: String,

    /// Dollars per seat, always strictly positive
    pub score: f64,
}

/// Best-brand summary with its originating totals
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BestBrand {
    /// Brand name
    pub brand: String,

    /// Dollars per seat
    pub score: f64,

    /// Number of models aggregated for the brand
    pub record_count: usize,

    /// Total seats across the brand's models
    pub total_seats: i32,

    /// Total (unrounded) price across the brand's models
    pub total_price_raw: f64,
}

/// Ascending cost-per-seat ranking
///
/// Constructed once from an aggregator and never mutated; downstream
/// consumers only read it.
#[derive(Debug, Clone, Serialize)]
pub struct Ranking {
    entries: Vec<RankingEntry>,
}

impl Ranking {
    /// Build the ranking from aggregated totals.
    ///
    /// Brands with no seats are skipped (the metric is undefined), as are
    /// brands whose score is not strictly positive (protects downstream
    /// logarithmic-scale presentation). Candidates are collected in
    /// lexicographic brand order and sorted stably by score, so equal
    /// scores order alphabetically regardless of map iteration order.
    pub fn from_aggregator(aggregator: &BrandAggregator) -> Self {
        let mut brands: Vec<(&String, &BrandTotals)> = aggregator.totals().iter().collect();
        brands.sort_by(|a, b| a.0.cmp(b.0));

        let mut entries = Vec::new();
        for (brand, totals) in brands {
            let Some(score) = totals.price_per_seat() else {
                debug!("Excluding {}: no seats aggregated", brand);
                continue;
            };
            if score <= 0.0 {
                debug!("Excluding {}: non-positive score {}", brand, score);
                continue;
            }
            entries.push(RankingEntry {
                brand: brand.clone(),
                score,
            });
        }

        entries.sort_by(|a, b| a.score.total_cmp(&b.score));

        Self { entries }
    }

    /// Ranked entries, ascending by score
    pub fn entries(&self) -> &[RankingEntry] {
        &self.entries
    }

    /// Number of ranked brands
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no brand survived filtering ("no data to rank")
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The lowest-score entry, if any brand survived filtering
    pub fn best(&self) -> Option<&RankingEntry> {
        self.entries.first()
    }

    /// Best-brand summary including the originating totals
    pub fn best_brand(&self, aggregator: &BrandAggregator) -> Option<BestBrand> {
        self.best().map(|entry| {
            let totals = aggregator
                .brand_totals(&entry.brand)
                .cloned()
                .unwrap_or_default();
            BestBrand {
                brand: entry.brand.clone(),
                score: entry.score,
                record_count: totals.record_count,
                total_seats: totals.total_seats,
                total_price_raw: totals.total_price_raw,
            }
        })
    }
}
