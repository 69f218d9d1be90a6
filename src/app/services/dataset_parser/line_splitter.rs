//! Quote-aware field splitting for delimited lines
//!
//! Splits one raw line into its ordered field values, honoring quoted
//! sections that contain the delimiter. This is deliberately simpler than
//! full RFC-4180: quote characters toggle quoting and are never emitted,
//! so a doubled quote does not produce a literal quote character.

/// Split one line into field values.
///
/// A delimiter outside quotes completes the current field; inside quotes it
/// is appended literally. The final buffer is always flushed, so trailing
/// empty fields are preserved and the output length equals the number of
/// unquoted delimiters plus one. Malformed quoting never fails: an
/// unterminated quote simply leaves the flag set until the end of the line.
pub fn split_line(line: &str, delimiter: char, quote: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        if c == quote {
            in_quotes = !in_quotes;
        } else if c == delimiter && !in_quotes {
            fields.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    fields.push(current);

    fields
}
