//! Payment method and masked-card detection.
//!
//! The two detections are not coupled: a card keyword without a masked
//! number yields `Card` with an empty digits field, and vice versa.

use crate::models::PaymentMethod;

use super::patterns::{CARD_KEYWORDS, MASKED_CARD};

/// Detect the payment method from the uppercased raw text.
pub fn detect_payment(upper_text: &str) -> PaymentMethod {
    if CARD_KEYWORDS.is_match(upper_text) {
        PaymentMethod::Card
    } else {
        PaymentMethod::Cash
    }
}

/// Extract the trailing digits of a masked card number (`****1234`) from
/// the original raw text; empty when none is printed.
pub fn extract_card_digits(raw_text: &str) -> String {
    MASKED_CARD
        .captures(raw_text)
        .map(|caps| caps[1].to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_card_keywords() {
        assert_eq!(detect_payment("PAID BY VISA"), PaymentMethod::Card);
        assert_eq!(detect_payment("MASTERCARD"), PaymentMethod::Card);
        assert_eq!(detect_payment("CARD PAYMENT"), PaymentMethod::Card);
    }

    #[test]
    fn test_cash_default() {
        assert_eq!(detect_payment("THANK YOU"), PaymentMethod::Cash);
    }

    #[test]
    fn test_masked_card_digits() {
        assert_eq!(extract_card_digits("VISA ****1234"), "1234");
        assert_eq!(extract_card_digits("**987 approved"), "987");
    }

    #[test]
    fn test_single_asterisk_is_not_masked() {
        assert_eq!(extract_card_digits("*1234"), "");
    }

    #[test]
    fn test_detections_are_independent() {
        // Keyword without masked digits: card payment, empty digits.
        assert_eq!(detect_payment("VISA"), PaymentMethod::Card);
        assert_eq!(extract_card_digits("VISA"), "");
        // Masked digits without keyword: digits captured anyway.
        assert_eq!(extract_card_digits("****4321"), "4321");
    }
}
