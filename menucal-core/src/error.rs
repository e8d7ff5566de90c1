//! Error types for menucal.

use thiserror::Error;

/// Errors that can occur in menucal operations.
#[derive(Error, Debug)]
pub enum MenuCalError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid date range: {0}")]
    DateRange(String),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Why a single week's menu could not be fetched.
///
/// Always recoverable: the collector skips the week and moves on.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("request timed out after {0}s")]
    Timeout(u64),

    #[error("server responded with HTTP {0}")]
    Status(u16),

    #[error("response is not valid menu JSON: {0}")]
    Decode(String),
}

/// Result type alias for menucal operations.
pub type MenuCalResult<T> = Result<T, MenuCalError>;
