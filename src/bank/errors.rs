//! Error types for question-bank loading
//!
//! Errors here cover the load step only. Record-level problems (missing
//! fields, malformed records) are recovered in place with defaults and
//! never surface as errors — one bad record must not abort the collection.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for bank-loading operations
pub type BankResult<T> = Result<T, BankError>;

/// Error types for question-bank loading
#[derive(Debug, Error)]
pub enum BankError {
    /// HTTP fetch of the bank asset failed
    #[error("failed to fetch question bank from {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Reading the bank asset from disk failed
    #[error("failed to read question bank file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The asset payload is not a JSON array
    #[error("question bank is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
