//! Error types for the cinecal ecosystem.

use thiserror::Error;

/// Errors that can occur in cinecal operations.
#[derive(Error, Debug)]
pub enum CinecalError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid country code '{0}' (expected a 2-letter ISO code, e.g. IE)")]
    InvalidCountry(String),

    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("ICS generation error: {0}")]
    IcsGenerate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for cinecal operations.
pub type CinecalResult<T> = Result<T, CinecalError>;
