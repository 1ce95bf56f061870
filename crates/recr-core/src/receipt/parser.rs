//! Receipt parser: composes the extraction passes into one record.

use std::time::Instant;

use tracing::debug;

use crate::models::{ReceiptDocument, ScanOutput};
use crate::ocr::{LineMap, RecognitionOutput, aggregate_confidence};

use super::rules;

/// Trait for receipt field extractors.
pub trait ReceiptExtractor {
    /// Extract a structured record from one recognition pass.
    fn extract(&self, recognition: &RecognitionOutput) -> ScanOutput;
}

/// Heuristic receipt parser.
///
/// Total by design: it never fails, only degrades to empty fields. Each
/// pass (store name, date/time, items, amounts, payment) is an independent
/// read-only scan over the grouped lines or the raw text.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReceiptParser;

impl ReceiptParser {
    pub fn new() -> Self {
        Self
    }

    /// Run all extraction passes and assemble the output record.
    pub fn parse(&self, recognition: &RecognitionOutput) -> ScanOutput {
        let start = Instant::now();

        let lines = LineMap::group(&recognition.tokens);
        let upper_text = recognition.raw_text.to_uppercase();

        debug!(
            "grouped {} tokens into {} lines",
            recognition.tokens.len(),
            lines.len()
        );

        let amounts = rules::reconcile(rules::extract_amounts(&upper_text));

        let receipt = ReceiptDocument {
            store_name: rules::extract_store_name(&lines),
            date: rules::extract_date(&upper_text),
            time: rules::extract_time(&recognition.raw_text),
            items: rules::extract_items(&lines),
            subtotal: rules::format_amount(amounts.subtotal),
            tax: rules::format_amount(amounts.tax),
            total: rules::format_amount(amounts.total),
            payment: rules::detect_payment(&upper_text),
            card: rules::extract_card_digits(&recognition.raw_text),
        };

        debug!(
            "extracted store={:?} date={:?} items={} total={:?}",
            receipt.store_name,
            receipt.date,
            receipt.items.len(),
            receipt.total
        );

        ScanOutput {
            raw_text: recognition.raw_text.clone(),
            confidence: aggregate_confidence(&recognition.tokens),
            word_count: recognition.raw_text.split_whitespace().count(),
            receipt,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

impl ReceiptExtractor for ReceiptParser {
    fn extract(&self, recognition: &RecognitionOutput) -> ScanOutput {
        self.parse(recognition)
    }
}
