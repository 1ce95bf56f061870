//! Item-table extraction.

use tracing::trace;

use crate::models::ItemLine;
use crate::ocr::{LineMap, RecognizedToken, join_text};

use super::patterns::{LEADING_DIGITS, PRICE_PREFIX, SUMMARY_KEYWORDS};

/// Extract purchased items from the grouped lines.
///
/// Output order matches line-index order, since that is the displayed
/// receipt order.
pub fn extract_items(lines: &LineMap) -> Vec<ItemLine> {
    let mut items = Vec::new();

    for (line_index, row) in lines.iter() {
        if let Some(item) = parse_item_line(row) {
            trace!("line {line_index}: item {:?}", item.name);
            items.push(item);
        }
    }

    items
}

/// Parse a single line into an item, or `None` when the line is not an
/// item row (no trailing price, a summary line, or a too-short name).
fn parse_item_line(row: &[RecognizedToken]) -> Option<ItemLine> {
    // Scan from the end toward the start for the first price-shaped token.
    // Prefix match: the price is the matched prefix, so trailing noise
    // like "12.50CR" still yields "12.50".
    let (price_idx, price) = row.iter().enumerate().rev().find_map(|(i, token)| {
        PRICE_PREFIX
            .find(&token.text)
            .map(|m| (i, m.as_str().to_string()))
    })?;

    // Summary lines carry totals, never items.
    let joined_upper = join_text(row).to_uppercase();
    if SUMMARY_KEYWORDS.iter().any(|k| joined_upper.contains(k)) {
        return None;
    }

    let first_is_quantity = LEADING_DIGITS.is_match(&row[0].text);
    let (quantity, name_start) = if first_is_quantity {
        (row[0].text.clone(), 1)
    } else {
        ("1".to_string(), 0)
    };

    // Name joins the tokens strictly between the quantity (if any) and the
    // price token; empty when the price token is all that is left.
    let name_tokens = row.get(name_start..price_idx).unwrap_or(&[]);
    let name = join_text(name_tokens).trim().to_string();

    if name.chars().count() < 2 {
        return None;
    }

    Some(ItemLine {
        name,
        quantity,
        price,
    })
}
