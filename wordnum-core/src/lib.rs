//! Spelled-out number decoding and substitution
//!
//! This crate reads numbers written as words ("двадцать пять", "сто двадцать
//! точка ноль пять", "минус пятьдесят", "двадцать второе") and either decodes
//! a single number or rewrites free text with every number replaced by its
//! digits, leaving all other bytes untouched.
//!
//! # Architecture
//!
//! - **Language layer**: per-language lexicons loaded from TOML and shared
//!   behind the [`Lexicon`] trait
//! - **Domain layer**: tokenizer, composition automaton, span builder and
//!   substitution scanner; pure functions of text and lexicon
//! - **API layer**: validated [`Config`], [`NumberProcessor`], input/output
//!   types
//!
//! # Example
//!
//! ```rust
//! use wordnum_core::{decode, substitute, Config};
//!
//! let number = decode("сто двадцать пять", "ru").unwrap();
//! assert_eq!(number.value(), 125);
//!
//! let text = substitute("Двадцать пять коров и две козы.", "ru", &Config::default()).unwrap();
//! assert_eq!(text, "25 коров и 2 козы.");
//! ```

use std::sync::Arc;

pub mod api;
pub mod domain;
pub mod language;

pub use api::{
    Config, ConfigBuilder, Error, Input, Language, NumberProcessor, Output, ProcessingMetadata,
    ProcessingStats, Replacement, Result,
};
pub use domain::{DecodedNumber, DomainError, Malformation, Sign};
pub use language::{get_lexicon, list_languages, ConfigurableLexicon, Lexicon};

/// Decode `text` as exactly one number in the given language
///
/// Fails with [`Error::NoNumberFound`] when no word is a number word and
/// with [`Error::MalformedSequence`] when the words do not form one number.
pub fn decode(text: &str, language: &str) -> Result<DecodedNumber> {
    let config = Config::default();
    let lexicon = get_lexicon(language)?;
    processor_for(lexicon, config)?.decode(text)
}

/// Replace every number in `text` with digits
///
/// `language` selects the embedded lexicon unless `config` carries its own.
/// Only an unknown language or an invalid config fails; malformed spans are
/// left as written.
pub fn substitute(text: &str, language: &str, config: &Config) -> Result<String> {
    let lexicon = match &config.lexicon {
        Some(lexicon) => Arc::clone(lexicon),
        None => get_lexicon(language)?,
    };
    Ok(processor_for(lexicon, config.clone())?.substitute(text))
}

fn processor_for(lexicon: Arc<dyn Lexicon>, mut config: Config) -> Result<NumberProcessor> {
    if let Ok(language) = Language::from_code(lexicon.code()) {
        config.language = language;
    }
    config.lexicon = Some(lexicon);
    NumberProcessor::with_config(config)
}
