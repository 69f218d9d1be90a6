//! Tests for quote-aware line splitting

use super::super::line_splitter::split_line;

#[test]
fn test_plain_split() {
    let fields = split_line("a,b,c", ',', '"');
    assert_eq!(fields, vec!["a", "b", "c"]);
}

#[test]
fn test_quoted_field_containing_delimiter() {
    let fields = split_line("a,\"b,c\",d", ',', '"');
    assert_eq!(fields, vec!["a", "b,c", "d"]);
}

#[test]
fn test_quote_characters_are_not_emitted() {
    let fields = split_line("\"Rolls\",\"$400,000\"", ',', '"');
    assert_eq!(fields, vec!["Rolls", "$400,000"]);
}

#[test]
fn test_trailing_empty_field_preserved() {
    let fields = split_line("a,b,", ',', '"');
    assert_eq!(fields, vec!["a", "b", ""]);
}

#[test]
fn test_leading_and_consecutive_delimiters() {
    let fields = split_line(",a,,b", ',', '"');
    assert_eq!(fields, vec!["", "a", "", "b"]);
}

#[test]
fn test_empty_line_yields_single_empty_field() {
    let fields = split_line("", ',', '"');
    assert_eq!(fields, vec![""]);
}

#[test]
fn test_unterminated_quote_is_harmless() {
    // The open quote swallows the remaining delimiters; nothing is lost
    // and nothing fails.
    let fields = split_line("a,\"b,c", ',', '"');
    assert_eq!(fields, vec!["a", "b,c"]);
}

#[test]
fn test_field_count_matches_unquoted_delimiters() {
    let line = "one,\"two,three\",four,five";
    let fields = split_line(line, ',', '"');
    // Three delimiters outside quotes produce four fields.
    assert_eq!(fields.len(), 4);
}

#[test]
fn test_custom_format_characters() {
    let fields = split_line("a;'b;c';d", ';', '\'');
    assert_eq!(fields, vec!["a", "b;c", "d"]);
}
