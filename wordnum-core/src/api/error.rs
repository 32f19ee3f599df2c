//! Error types for the API

use thiserror::Error;

use crate::domain::error::{DomainError, Malformation};

/// Error type for API operations
#[derive(Debug, Error)]
pub enum Error {
    /// The words do not form a valid number
    #[error("Malformed number: {0}")]
    MalformedSequence(#[from] Malformation),

    /// Nothing in the input is a number word
    #[error("No number found in '{0}'")]
    NoNumberFound(String),

    /// Out-of-range option
    #[error("Invalid option: {0}")]
    InvalidOption(String),

    /// No lexicon for the requested language
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// Lexicon configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Infrastructure error (I/O, encoding)
    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

impl From<DomainError> for Error {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::UnsupportedLanguage(code) => Error::UnsupportedLanguage(code),
            other => Error::Configuration(other.to_string()),
        }
    }
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, Error>;
