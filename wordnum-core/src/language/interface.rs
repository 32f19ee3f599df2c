//! Public contract for lexicons
//!
//! The tokenizer and the number builder only ever see a language through this
//! trait. Lookups take the lower-cased word and never allocate.

use crate::domain::token::{Cardinal, TokenKind};

/// Number vocabulary of one language
pub trait Lexicon: Send + Sync + 'static {
    /// Canonical language code ("ru", "en")
    fn code(&self) -> &str;

    /// Human-readable language name
    fn name(&self) -> &str;

    /// Classify a single lower-cased word; unknown words are `Literal`
    fn classify(&self, word: &str) -> TokenKind;

    /// Longest multi-word entry starting at `words[0]`
    ///
    /// Returns the number of words covered and the entry's classification.
    /// Only entries of two words or more are reported.
    fn longest_phrase(&self, _words: &[&str]) -> Option<(usize, TokenKind)> {
        None
    }

    /// Upper bound on the number of words a phrase can span
    fn max_phrase_words(&self) -> usize {
        1
    }

    /// Relaxed reading of `first` followed by `next` as one compound word
    fn relaxed_compound(&self, _first: &str, _next: &str) -> Option<Cardinal> {
        None
    }

    /// Words only read as numbers when a number word stands next to them
    fn is_never_alone(&self, _word: &str) -> bool {
        false
    }

    /// Number of trailing characters of an ordinal word kept as its suffix
    fn ordinal_suffix_chars(&self) -> usize;

    /// Smallest ordinal value substituted unless the caller overrides it
    fn default_ordinal_threshold(&self) -> u64;

    /// Character written between integer and fractional digits
    fn decimal_symbol(&self) -> char {
        '.'
    }
}

impl std::fmt::Debug for dyn Lexicon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lexicon")
            .field("code", &self.code())
            .field("name", &self.name())
            .finish()
    }
}
