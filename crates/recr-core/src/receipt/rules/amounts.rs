//! Amount extraction and arithmetic reconciliation.

use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::debug;

use super::patterns::{SUBTOTAL_AMOUNT, TAX_AMOUNT, TOTAL_AMOUNT};

/// Subtotal, tax, and total as independently extracted. `None` marks an
/// undetermined field; extraction never fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReceiptAmounts {
    pub subtotal: Option<Decimal>,
    pub tax: Option<Decimal>,
    pub total: Option<Decimal>,
}

/// Run the three keyword-anchored extractions over the uppercased raw text.
pub fn extract_amounts(upper_text: &str) -> ReceiptAmounts {
    ReceiptAmounts {
        subtotal: capture_amount(&SUBTOTAL_AMOUNT, upper_text),
        tax: capture_amount(&TAX_AMOUNT, upper_text),
        total: extract_total(upper_text),
    }
}

fn capture_amount(pattern: &Regex, text: &str) -> Option<Decimal> {
    let caps = pattern.captures(text)?;
    // A malformed capture is undetermined, never an error.
    Decimal::from_str(&caps[1]).ok()
}

/// Total: the word TOTAL not immediately preceded by the adjacent
/// substring "SUB".
///
/// This reproduces a `(?<!SUB)\bTOTAL\b` negative look-behind (the regex
/// crate has none) byte-for-byte: the match is suppressed only when "SUB"
/// abuts the word with no separator, so a spaced "SUB TOTAL" still counts
/// as a bare TOTAL. Known limitation, kept as-is.
fn extract_total(text: &str) -> Option<Decimal> {
    for caps in TOTAL_AMOUNT.captures_iter(text) {
        let start = caps.get(0).unwrap().start();
        if start >= 3 && &text.as_bytes()[start - 3..start] == b"SUB" {
            continue;
        }
        return Decimal::from_str(&caps[1]).ok();
    }
    None
}

/// Cross-check and repair the three amounts.
///
/// When subtotal and tax are both known the total is overwritten as their
/// sum, regardless of what total extraction found; when only total and tax
/// are known the subtotal is derived by subtraction. Otherwise the
/// extracted values stand.
pub fn reconcile(amounts: ReceiptAmounts) -> ReceiptAmounts {
    let mut out = amounts;

    match (amounts.subtotal, amounts.tax, amounts.total) {
        (Some(subtotal), Some(tax), _) => {
            out.total = Some((subtotal + tax).round_dp(2));
            debug!("total overwritten from subtotal + tax");
        }
        (None, Some(tax), Some(total)) => {
            out.subtotal = Some((total - tax).round_dp(2));
            debug!("subtotal derived from total - tax");
        }
        _ => {}
    }

    out
}

/// Render a determined amount as a fixed two-decimal string, an
/// undetermined one as the empty string.
pub fn format_amount(amount: Option<Decimal>) -> String {
    amount.map(|a| format!("{a:.2}")).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_subtotal_keywords() {
        assert_eq!(extract_amounts("SUBTOTAL: 10.00").subtotal, Some(dec("10.00")));
        assert_eq!(extract_amounts("NET TOTAL - $12.34").subtotal, Some(dec("12.34")));
        assert_eq!(extract_amounts("AMOUNT 9.99").subtotal, Some(dec("9.99")));
        assert_eq!(extract_amounts("RUPEES 150.00").subtotal, Some(dec("150.00")));
    }

    #[test]
    fn test_tax_amount() {
        assert_eq!(extract_amounts("TAX: $0.25").tax, Some(dec("0.25")));
        assert_eq!(extract_amounts("NO NUMBERS").tax, None);
    }

    #[test]
    fn test_total_ignores_adjacent_subtotal() {
        // "SUBTOTAL" must not satisfy the TOTAL extraction on its own.
        let amounts = extract_amounts("SUBTOTAL: 10.00");
        assert_eq!(amounts.total, None);

        let amounts = extract_amounts("SUBTOTAL: 10.00 TOTAL: 12.00");
        assert_eq!(amounts.total, Some(dec("12.00")));
    }

    #[test]
    fn test_spaced_sub_total_still_matches() {
        // Known limitation of the adjacency-only look-behind.
        let amounts = extract_amounts("SUB TOTAL 10.00");
        assert_eq!(amounts.total, Some(dec("10.00")));
    }

    #[test]
    fn test_reconcile_overwrites_total() {
        let reconciled = reconcile(ReceiptAmounts {
            subtotal: Some(dec("10.00")),
            tax: Some(dec("0.80")),
            total: Some(dec("99.99")),
        });
        assert_eq!(reconciled.total, Some(dec("10.80")));
        assert_eq!(reconciled.subtotal, Some(dec("10.00")));
    }

    #[test]
    fn test_reconcile_derives_subtotal() {
        let reconciled = reconcile(ReceiptAmounts {
            subtotal: None,
            tax: Some(dec("0.25")),
            total: Some(dec("2.75")),
        });
        assert_eq!(reconciled.subtotal, Some(dec("2.50")));
        assert_eq!(reconciled.total, Some(dec("2.75")));
    }

    #[test]
    fn test_reconcile_keeps_partial_extractions() {
        let amounts = ReceiptAmounts {
            subtotal: None,
            tax: None,
            total: Some(dec("5.00")),
        };
        assert_eq!(reconcile(amounts), amounts);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(Some(dec("2.5"))), "2.50");
        assert_eq!(format_amount(None), "");
    }
}
