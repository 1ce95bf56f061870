//! Heuristic field-extraction rules for receipts.
//!
//! Each rule is a pure, read-only pass over the grouped lines or the raw
//! text; none mutates shared state, so the passes may run in any order.

pub mod amounts;
pub mod dates;
pub mod items;
pub mod patterns;
pub mod payment;
pub mod store;

pub use amounts::{ReceiptAmounts, extract_amounts, format_amount, reconcile};
pub use dates::{extract_date, extract_time};
pub use items::extract_items;
pub use payment::{detect_payment, extract_card_digits};
pub use store::extract_store_name;
