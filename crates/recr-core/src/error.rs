//! Error types for the recr-core library.
//!
//! The extraction engine itself is total: malformed, sparse, or
//! contradictory token streams degrade into empty output fields, never into
//! errors. The variants below model the boundary with the excluded
//! collaborators (image acquisition, OCR engine, transport), which is the
//! only place a request can legitimately fail.

use thiserror::Error;

/// Main error type for the recr library.
#[derive(Error, Debug)]
pub enum RecrError {
    /// No input was supplied at the transport boundary.
    #[error("no input provided")]
    NoInputProvided,

    /// The upstream OCR engine could not produce a recognition output.
    #[error("unrecognizable image: {0}")]
    UnrecognizableImage(String),

    /// The serialized token stream could not be deserialized.
    #[error("invalid token stream: {0}")]
    TokenStream(#[from] serde_json::Error),

    /// I/O error while reading a recognition output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the recr library.
pub type Result<T> = std::result::Result<T, RecrError>;
