use thiserror::Error;

use crate::domain::token::Scale;

/// Domain-specific errors
#[derive(Debug, Error)]
pub enum DomainError {
    /// Lexicon loading or parsing error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Unsupported language requested
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// Lexicon parsed but its tables are inconsistent
    #[error("Invalid lexicon: {0}")]
    InvalidLexicon(String),
}

/// Why a sequence of number words does not form a number
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Malformation {
    /// A scale word larger than one already consumed
    #[error("scale word '{}' is out of order", .0.name())]
    ScaleOrder(Scale),

    /// The same scale word used twice
    #[error("scale word '{}' is repeated", .0.name())]
    DuplicateScale(Scale),

    /// A zero after the part already holds a value
    #[error("zero cannot follow a value")]
    ZeroAfterValue,

    /// A number word the current group cannot take
    #[error("number word with value {0} cannot follow the preceding words")]
    UnexpectedValue(u64),

    /// A word that is not part of any number
    #[error("'{0}' is not a number word")]
    UnexpectedWord(String),

    /// More than 999 in front of a thousand-or-larger scale
    #[error("group value {0} exceeds 999 before a scale word")]
    GroupOverflow(u64),

    /// Words that never produced a value
    #[error("the number is incomplete")]
    Incomplete,

    /// The value does not fit into 64 bits
    #[error("the number is too large")]
    Overflow,

    /// Anything after an ordinal word
    #[error("'{0}' follows an ordinal")]
    AfterOrdinal(String),
}
