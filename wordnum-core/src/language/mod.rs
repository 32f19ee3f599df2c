//! Per-language number vocabularies
//!
//! Lexicons are data: TOML documents turned into lookup tables once and
//! shared read-only behind the [`Lexicon`] trait.

pub mod config;
pub mod interface;
pub(crate) mod loader;
pub mod runtime;
pub(crate) mod tables;

pub use config::LexiconConfig;
pub use interface::Lexicon;
pub use loader::{get_lexicon, list_languages};
pub use runtime::ConfigurableLexicon;
