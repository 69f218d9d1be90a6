//! Tests for per-brand aggregation

use super::record;
use crate::app::services::brand_aggregator::BrandAggregator;

#[test]
fn test_fold_accumulates_per_brand() {
    let mut aggregator = BrandAggregator::new();
    aggregator.fold(&record("Acme", "X", 40000.0, 4));
    aggregator.fold(&record("Acme", "Y", 60000.0, 2));
    aggregator.fold(&record("Bolt", "EV1", 55000.0, 5));

    assert_eq!(aggregator.brand_count(), 2);

    let acme = aggregator.brand_totals("Acme").unwrap();
    assert_eq!(acme.total_price_raw, 100000.0);
    assert_eq!(acme.total_seats, 6);
    assert_eq!(acme.record_count, 2);

    let bolt = aggregator.brand_totals("Bolt").unwrap();
    assert_eq!(bolt.total_price_raw, 55000.0);
    assert_eq!(bolt.total_seats, 5);
    assert_eq!(bolt.record_count, 1);
}

#[test]
fn test_brand_created_on_first_sight() {
    let mut aggregator = BrandAggregator::new();
    assert!(aggregator.is_empty());
    assert!(aggregator.brand_totals("Acme").is_none());

    aggregator.fold(&record("Acme", "X", 40000.0, 4));
    assert!(!aggregator.is_empty());
    assert!(aggregator.brand_totals("Acme").is_some());
}

#[test]
fn test_fold_order_does_not_change_totals() {
    let records = vec![
        record("Acme", "X", 40000.0, 4),
        record("Bolt", "EV1", 55000.0, 5),
        record("Acme", "Y", 60000.0, 2),
        record("Cable", "Z", 12000.5, 7),
    ];

    let mut forward = BrandAggregator::new();
    forward.fold_all(&records);

    let mut reversed = BrandAggregator::new();
    reversed.fold_all(records.iter().rev());

    assert_eq!(forward.brand_count(), reversed.brand_count());
    for (brand, totals) in forward.totals() {
        assert_eq!(reversed.brand_totals(brand), Some(totals));
    }
}

#[test]
fn test_totals_share_one_key_set() {
    let mut aggregator = BrandAggregator::new();
    aggregator.fold(&record("Acme", "X", 40000.0, 4));

    // One struct per brand: price, seats, and count are inseparable.
    let totals = aggregator.brand_totals("Acme").unwrap();
    assert!(totals.total_price_raw > 0.0);
    assert!(totals.total_seats > 0);
    assert!(totals.record_count > 0);
}
