//! Store-name extraction.
//!
//! Merchant names are reliably the first non-numeric, sufficiently long
//! line on a receipt. The heuristic trades recall for precision: it picks
//! the first qualifying line only and never scores across candidates.

use crate::ocr::{LineMap, join_text};

use super::patterns::HAS_DIGIT;

/// Pick the merchant name: the first line whose joined text is longer than
/// 4 characters and contains no digit, rendered in title case. Empty when
/// no line qualifies.
pub fn extract_store_name(lines: &LineMap) -> String {
    for (_, row) in lines.iter() {
        let joined = join_text(row);
        if joined.chars().count() > 4 && !HAS_DIGIT.is_match(&joined) {
            return title_case(&joined);
        }
    }
    String::new()
}

/// Uppercase the first letter of each word, lowercase the rest.
fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ocr::RecognizedToken;
    use pretty_assertions::assert_eq;

    fn tok(text: &str, x: u32, line_index: i64) -> RecognizedToken {
        RecognizedToken {
            text: text.to_string(),
            x,
            line_index,
            confidence: None,
        }
    }

    #[test]
    fn test_first_title_like_line_wins() {
        let lines = LineMap::group(&[
            tok("FRESH", 0, 1),
            tok("MART", 60, 1),
            tok("CORNER", 0, 2),
            tok("SHOP", 70, 2),
        ]);
        assert_eq!(extract_store_name(&lines), "Fresh Mart");
    }

    #[test]
    fn test_lines_with_digits_are_skipped() {
        let lines = LineMap::group(&[
            tok("TEL", 0, 1),
            tok("555-0100", 40, 1),
            tok("FRESH", 0, 2),
            tok("MART", 60, 2),
        ]);
        assert_eq!(extract_store_name(&lines), "Fresh Mart");
    }

    #[test]
    fn test_short_lines_are_skipped() {
        let lines = LineMap::group(&[tok("HI", 0, 1), tok("GROCERIES", 0, 2)]);
        assert_eq!(extract_store_name(&lines), "Groceries");
    }

    #[test]
    fn test_no_candidate_yields_empty() {
        let lines = LineMap::group(&[tok("2.50", 0, 1)]);
        assert_eq!(extract_store_name(&lines), "");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("FRESH MART"), "Fresh Mart");
        assert_eq!(title_case("o'reilly SUPPLY"), "O'reilly Supply");
    }
}
