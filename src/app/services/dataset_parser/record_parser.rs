//! Individual record construction from split field values
//!
//! This module turns the field values of one data line into a validated
//! [`CarRecord`], applying the numeric extraction heuristics to each
//! numeric-looking column.

use super::numeric::{extract_first_int, extract_mean, extract_sum};
use crate::app::models::CarRecord;
use crate::constants::{REQUIRED_COLUMN_COUNT, columns};
use crate::{Error, Result};

/// Build a car record from the split fields of one data line.
///
/// Rejects lines carrying fewer than the required column count and lines
/// whose company field is empty after trimming, so every constructed
/// record has a usable grouping key. Extra trailing fields are ignored.
pub fn parse_car_record(fields: &[String]) -> Result<CarRecord> {
    if fields.len() < REQUIRED_COLUMN_COUNT {
        return Err(Error::data_validation(format!(
            "expected at least {} fields, found {}",
            REQUIRED_COLUMN_COUNT,
            fields.len()
        )));
    }

    let company = fields[columns::COMPANY].trim();
    if company.is_empty() {
        return Err(Error::data_validation(
            "empty company field".to_string(),
        ));
    }

    let price_raw = extract_mean(&fields[columns::PRICE]);

    Ok(CarRecord {
        company: company.to_string(),
        model: fields[columns::MODEL].trim().to_string(),
        engine: fields[columns::ENGINE].trim().to_string(),
        capacity: fields[columns::CAPACITY].trim().to_string(),
        horsepower: extract_first_int(&fields[columns::HORSEPOWER]),
        top_speed: extract_first_int(&fields[columns::TOP_SPEED]),
        performance: extract_first_int(&fields[columns::PERFORMANCE]),
        price: price_raw.round() as i32,
        price_raw,
        fuel_type: fields[columns::FUEL_TYPE].trim().to_string(),
        seats: extract_sum(&fields[columns::SEATS]),
        torque: fields[columns::TORQUE].trim().to_string(),
    })
}
