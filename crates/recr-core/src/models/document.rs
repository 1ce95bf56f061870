//! Receipt output data model.
//!
//! Every field uses the empty string, never a null-like marker, to denote
//! "undetermined" — the transport layer always receives a fully-populated
//! record.

use serde::{Deserialize, Serialize};

/// A single purchased item recovered from the receipt's item table.
///
/// Items keep the order of the visual lines they were derived from; they
/// are never re-sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemLine {
    /// Item description, trimmed, at least 2 characters.
    pub name: String,

    /// Quantity as printed on the receipt; `"1"` when not explicit.
    pub quantity: String,

    /// Price as a decimal string matching `\d+\.\d{2}`.
    pub price: String,
}

/// How the receipt was paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    /// Cash payment (the default when nothing indicates a card).
    Cash,
    /// Card payment (VISA / MASTER / CARD keyword present).
    Card,
}

impl Default for PaymentMethod {
    fn default() -> Self {
        Self::Cash
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cash => write!(f, "CASH"),
            Self::Card => write!(f, "CARD"),
        }
    }
}

/// A structured receipt record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptDocument {
    /// Merchant name in title case, empty when no title-like line exists.
    pub store_name: String,

    /// Purchase date exactly as matched, empty when not found.
    pub date: String,

    /// Purchase time exactly as matched (original casing), empty when not found.
    pub time: String,

    /// Purchased items in the order their lines appear on the receipt.
    pub items: Vec<ItemLine>,

    /// Subtotal formatted to two decimals, empty when undetermined.
    pub subtotal: String,

    /// Tax formatted to two decimals, empty when undetermined.
    pub tax: String,

    /// Total formatted to two decimals, empty when undetermined.
    pub total: String,

    /// Payment method; defaults to cash.
    pub payment: PaymentMethod,

    /// Trailing digits of a masked card number, empty when none was printed.
    pub card: String,
}

impl Default for ReceiptDocument {
    fn default() -> Self {
        Self {
            store_name: String::new(),
            date: String::new(),
            time: String::new(),
            items: Vec::new(),
            subtotal: String::new(),
            tax: String::new(),
            total: String::new(),
            payment: PaymentMethod::Cash,
            card: String::new(),
        }
    }
}

/// The record handed to the (excluded) transport layer: the structured
/// receipt plus raw-text metadata from the recognition pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanOutput {
    /// Plain-text rendering of the recognition pass.
    pub raw_text: String,

    /// Aggregate recognition confidence (0-100, two decimals).
    pub confidence: f64,

    /// Count of whitespace-separated tokens in the raw text.
    pub word_count: usize,

    /// The structured receipt record.
    pub receipt: ReceiptDocument,

    /// Extraction time in milliseconds.
    pub processing_time_ms: u64,
}
