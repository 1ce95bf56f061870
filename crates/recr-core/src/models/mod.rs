//! Data models for receipt extraction output.

pub mod document;

pub use document::{ItemLine, PaymentMethod, ReceiptDocument, ScanOutput};
