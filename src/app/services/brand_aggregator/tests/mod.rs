//! Test utilities and fixtures for aggregation and ranking tests

use crate::app::models::CarRecord;

// Test modules
mod aggregator_tests;

/// Helper to build a record with the fields aggregation cares about
pub fn record(company: &str, model: &str, price_raw: f64, seats: i32) -> CarRecord {
    CarRecord {
        company: company.to_string(),
        model: model.to_string(),
        engine: "V6".to_string(),
        capacity: "2.0L".to_string(),
        horsepower: 200,
        top_speed: 220,
        performance: 6,
        price: price_raw.round() as i32,
        price_raw,
        fuel_type: "Petrol".to_string(),
        seats,
        torque: "300Nm".to_string(),
    }
}
