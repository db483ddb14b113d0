//! Error types shared by the library modules.

use thiserror::Error;

/// A holiday date string that is not a strict `YYYY-MM-DD` calendar date.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateParseError {
    /// Wrong length, separators or non-digit characters
    #[error("expected YYYY-MM-DD, got {0:?}")]
    Shape(String),

    /// Well-formed but names a day that does not exist (e.g. 2025-02-30)
    #[error("not a calendar date: {0:?}")]
    Calendar(String),
}

/// Why a holiday fetch produced no data.
///
/// A successful fetch returning zero holidays is `Ok(vec![])`, never one of
/// these.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Connection, TLS or read failure below HTTP
    #[error("transport failure: {0}")]
    Transport(String),

    /// Server answered with something other than 200
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// Body larger than the device is willing to buffer
    #[error("response exceeds {limit} bytes")]
    TooLarge { limit: usize },

    /// Body is not UTF-8
    #[error("response is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    /// Body is not the expected JSON array
    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
}
