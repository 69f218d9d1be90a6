//! Test utilities and fixtures for dataset parser testing
//!
//! This module provides common helper functions and sample dataset content
//! used across the different test modules.

use std::io::Write;
use tempfile::NamedTempFile;

// Test modules
mod line_splitter_tests;
mod parser_tests;

/// Header line matching the published car dataset layout
pub const DATASET_HEADER: &str = "Company Names,Cars Names,Engines,CC/Battery Capacity,\
HorsePower,Total Speed,Performance(0 - 100 )KM/H,Cars Prices,Fuel Types,Seats,Torque";

/// Helper to create a complete test dataset
pub fn create_test_dataset() -> String {
    format!(
        "{}\n\
         Acme,X,V6,2.0L,200 hp,220 km/h,6 sec,40000,Petrol,4,300Nm\n\
         Acme,Y,V6,2.0L,250 hp,240 km/h,5 sec,60000,Petrol,2,350Nm\n\
         Bolt,EV1,Electric Motor,100 kWh,350 hp,250 km/h,4 sec,\"$55,000\",Electric,5,420Nm\n",
        DATASET_HEADER
    )
}

/// Helper to create a dataset with malformed and blank lines mixed in
pub fn create_messy_dataset() -> String {
    format!(
        "{}\n\
         Acme,X,V6,2.0L,200,220,6,40000,Petrol,4,300Nm\n\
         \n\
         only,five,fields,on,line\n\
         Bolt,EV1,Electric Motor,100 kWh,350,250,4,55000,Electric,5,420Nm\n",
        DATASET_HEADER
    )
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}
