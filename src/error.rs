//! Error types for adr-watch.

use std::time::Duration;
use thiserror::Error;

/// The main error type for adr-watch.
#[derive(Error, Debug)]
pub enum Error {
    /// IO errors (console writes, config file reads, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Transport-level HTTP errors (connect, timeout, body decode)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status returned by the quote provider
    #[error("Provider returned HTTP {status}")]
    Status {
        status: u16,
        retry_after: Option<Duration>,
    },

    /// Quote response did not carry a field we need
    #[error("Missing data: {0}")]
    MissingData(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias for Result with our Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a new status error.
    pub fn status(status: u16, retry_after: Option<Duration>) -> Self {
        Self::Status {
            status,
            retry_after,
        }
    }

    /// Create a new missing data error.
    pub fn missing_data(msg: impl Into<String>) -> Self {
        Self::MissingData(msg.into())
    }

    /// Create a new config error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
