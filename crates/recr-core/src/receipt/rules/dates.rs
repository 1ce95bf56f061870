//! Date and time extraction.

use super::patterns::{DATE_CASCADE, TIME_PATTERN};

/// Extract the purchase date from the uppercased raw text.
///
/// The cascade is evaluated in fixed priority order with early exit: the
/// first pattern that matches anywhere wins and later patterns are not
/// attempted. The output is the matched text verbatim; no parsing or
/// normalization is applied.
pub fn extract_date(upper_text: &str) -> String {
    DATE_CASCADE
        .iter()
        .find_map(|pattern| pattern.find(upper_text))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Extract the purchase time from the original-case raw text.
///
/// Case-insensitive `H:MM` with optional AM/PM; the match is returned in
/// whatever casing the recognition produced.
pub fn extract_time(raw_text: &str) -> String {
    TIME_PATTERN
        .find(raw_text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}
