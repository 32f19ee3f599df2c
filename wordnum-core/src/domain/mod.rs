//! Number decoding domain
//!
//! Pure functions over text and a lexicon: tokenization, the composition
//! automaton, the span builder and the substitution scanner.

pub mod builder;
pub mod composer;
pub mod error;
pub mod number;
pub mod scanner;
pub mod token;
pub mod tokenizer;

pub use builder::{BuildOptions, NumberBuilder};
pub use composer::Composer;
pub use error::{DomainError, Malformation};
pub use number::DecodedNumber;
pub use scanner::{reassemble, NumberMatch, ScanOptions, Scanner};
pub use token::{Cardinal, Scale, Sign, Token, TokenKind};
pub use tokenizer::tokenize;
