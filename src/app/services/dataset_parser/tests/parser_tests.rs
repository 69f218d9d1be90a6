//! Tests for the main dataset parser functionality

use super::{create_messy_dataset, create_temp_file, create_test_dataset};
use crate::app::services::dataset_parser::DatasetParser;

#[test]
fn test_parse_complete_dataset() {
    let parser = DatasetParser::new();
    let result = parser.parse_content(&create_test_dataset());

    assert_eq!(result.records.len(), 3);
    assert_eq!(result.stats.total_lines, 3);
    assert_eq!(result.stats.records_parsed, 3);
    assert_eq!(result.stats.lines_skipped, 0);
    assert!(result.stats.errors.is_empty());
}

#[test]
fn test_header_discarded_unconditionally() {
    // Even a header that happens to have 11 fields must not become a record.
    let content = "a,b,c,d,e,f,g,h,i,j,k\n";
    let parser = DatasetParser::new();
    let result = parser.parse_content(content);

    assert!(result.records.is_empty());
    assert_eq!(result.stats.total_lines, 0);
}

#[test]
fn test_records_preserve_input_order() {
    let parser = DatasetParser::new();
    let result = parser.parse_content(&create_test_dataset());

    let models: Vec<&str> = result.records.iter().map(|r| r.model.as_str()).collect();
    assert_eq!(models, vec!["X", "Y", "EV1"]);
}

#[test]
fn test_quoted_price_field_survives_splitting() {
    let parser = DatasetParser::new();
    let result = parser.parse_content(&create_test_dataset());

    // "$55,000" contains the delimiter; it must stay one field and
    // fragment into 55 and 000 during extraction.
    let bolt = &result.records[2];
    assert_eq!(bolt.company, "Bolt");
    assert_eq!(bolt.price_raw, 27.5);
}

#[test]
fn test_malformed_and_blank_lines_skipped() {
    let parser = DatasetParser::new();
    let result = parser.parse_content(&create_messy_dataset());

    // The blank line is ignored entirely; the five-field line is counted
    // and skipped.
    assert_eq!(result.records.len(), 2);
    assert_eq!(result.stats.total_lines, 3);
    assert_eq!(result.stats.records_parsed, 2);
    assert_eq!(result.stats.lines_skipped, 1);
    assert_eq!(result.stats.errors.len(), 1);
    assert!(result.stats.errors[0].contains("Line 4"));
}

#[test]
fn test_skipped_lines_contribute_nothing() {
    let parser = DatasetParser::new();
    let result = parser.parse_content(&create_messy_dataset());

    assert!(result.records.iter().all(|r| r.company != "only"));
}

#[test]
fn test_empty_content() {
    let parser = DatasetParser::new();
    let result = parser.parse_content("");

    assert!(result.records.is_empty());
    assert_eq!(result.stats.total_lines, 0);
}

#[test]
fn test_header_only_content() {
    let parser = DatasetParser::new();
    let result = parser.parse_content("Company Names,Cars Names\n");

    assert!(result.records.is_empty());
    assert_eq!(result.stats.total_lines, 0);
}

#[test]
fn test_parse_file_roundtrip() {
    let temp_file = create_temp_file(&create_test_dataset());

    let parser = DatasetParser::new();
    let result = parser.parse_file(temp_file.path()).unwrap();

    assert_eq!(result.records.len(), 3);
    assert_eq!(result.stats.records_parsed, 3);
}

#[test]
fn test_parse_file_missing_path() {
    let parser = DatasetParser::new();
    let result = parser.parse_file(std::path::Path::new("/nonexistent/cars.csv"));

    assert!(result.is_err());
}
