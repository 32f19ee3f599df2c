//! Single-word classification table

use std::collections::HashMap;

use crate::domain::token::TokenKind;

/// Lower-cased word to token kind
#[derive(Debug, Clone, Default)]
pub struct WordTable {
    entries: HashMap<String, TokenKind>,
}

impl WordTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word, failing if it is already classified differently
    pub fn insert(&mut self, word: &str, kind: TokenKind) -> Result<(), String> {
        let word = word.to_lowercase();
        match self.entries.get(&word) {
            Some(existing) if *existing != kind => Err(format!(
                "word '{word}' is both {existing:?} and {kind:?}"
            )),
            Some(_) => Ok(()),
            None => {
                self.entries.insert(word, kind);
                Ok(())
            }
        }
    }

    pub fn get(&self, word: &str) -> Option<TokenKind> {
        self.entries.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
