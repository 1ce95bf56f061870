//! Core library for receipt OCR field extraction.
//!
//! This crate provides:
//! - the input contract with the external OCR engine (positioned token
//!   stream plus the plain-text rendering of the same pass)
//! - line grouping and document-level confidence aggregation
//! - heuristic field extraction (store name, date/time, item table,
//!   subtotal/tax/total with arithmetic reconciliation, payment method)
//!
//! The engine is total: malformed or sparse input degrades into empty
//! output fields, never into an error.

pub mod error;
pub mod models;
pub mod ocr;
pub mod receipt;

pub use error::{RecrError, Result};
pub use models::{ItemLine, PaymentMethod, ReceiptDocument, ScanOutput};
pub use ocr::{LineMap, RecognitionOutput, RecognizedToken, aggregate_confidence};
pub use receipt::{ReceiptExtractor, ReceiptParser};
