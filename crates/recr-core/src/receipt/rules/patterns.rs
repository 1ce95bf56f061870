//! Common regex patterns for receipt field extraction.
//!
//! Whole-document patterns run against the uppercased raw text unless
//! noted otherwise, so none of them needs a case-insensitive flag except
//! the time pattern (which runs on the original-case text to preserve
//! AM/PM casing in the output).

use lazy_static::lazy_static;
use regex::Regex;

/// Keywords marking a summary line (totals/tax), excluded from the item table.
pub const SUMMARY_KEYWORDS: [&str; 5] = ["TOTAL", "SUB", "TAX", "AMOUNT", "NET"];

lazy_static! {
    // Any digit; used to reject non-title lines for store-name selection.
    pub static ref HAS_DIGIT: Regex = Regex::new(r"\d").unwrap();

    // Date cascade, highest priority first. Numeric dates are the most
    // common and most specific, so they take precedence over month names.
    pub static ref DATE_CASCADE: [Regex; 3] = [
        // D/M/Y or D-M-Y
        Regex::new(r"\b\d{1,2}[/-]\d{1,2}[/-]\d{2,4}\b").unwrap(),
        // day then 3-letter month
        Regex::new(r"\b\d{1,2}\s*(JAN|FEB|MAR|APR|MAY|JUN|JUL|AUG|SEP|OCT|NOV|DEC)\b").unwrap(),
        // 3-letter month then day
        Regex::new(r"\b(JAN|FEB|MAR|APR|MAY|JUN|JUL|AUG|SEP|OCT|NOV|DEC)\s*\d{1,2}\b").unwrap(),
    ];

    // H:MM with optional AM/PM, searched over the original-case text.
    pub static ref TIME_PATTERN: Regex = Regex::new(r"(?i)\b\d{1,2}:\d{2}\s?(AM|PM)?\b").unwrap();

    // Price prefix on a single token: trailing noise after the two decimal
    // digits is tolerated ("12.50CR"), leading noise is not.
    pub static ref PRICE_PREFIX: Regex = Regex::new(r"^\d+\.\d{2}").unwrap();

    // Leading digits marking an explicit quantity token.
    pub static ref LEADING_DIGITS: Regex = Regex::new(r"^\d+").unwrap();

    // Keyword-anchored amounts: optional colon/dash separator, optional
    // currency symbol, two-decimal number.
    pub static ref SUBTOTAL_AMOUNT: Regex = Regex::new(
        r"(?:SUBTOTAL|NET TOTAL|AMOUNT|RUPEES)\s*[:\-]?\s*\$?(\d+\.\d{2})"
    ).unwrap();

    pub static ref TAX_AMOUNT: Regex = Regex::new(
        r"TAX\s*[:\-]?\s*\$?(\d+\.\d{2})"
    ).unwrap();

    // The look-behind rejecting an adjacent "SUB" prefix is applied in
    // code (the regex crate has no look-behind); see rules::amounts.
    pub static ref TOTAL_AMOUNT: Regex = Regex::new(
        r"\bTOTAL\b\s*[:\-]?\s*\$?(\d+\.\d{2})"
    ).unwrap();

    // Card payment keywords.
    pub static ref CARD_KEYWORDS: Regex = Regex::new(r"VISA|MASTER|CARD").unwrap();

    // Masked card number: two or more asterisks then 3-4 trailing digits.
    pub static ref MASKED_CARD: Regex = Regex::new(r"\*{2,}(\d{3,4})").unwrap();
}
