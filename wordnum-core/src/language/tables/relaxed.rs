//! Two-word compounds accepted in relaxed mode

use std::collections::HashMap;

use crate::domain::token::Cardinal;

#[derive(Debug, Clone, Default)]
pub struct RelaxedTable {
    /// first word -> (start of the second word, compound value)
    entries: HashMap<String, Vec<(String, Cardinal)>>,
}

impl RelaxedTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, first: &str, second: &str, compound: Cardinal) {
        self.entries
            .entry(first.to_lowercase())
            .or_default()
            .push((second.to_lowercase(), compound));
    }

    /// The compound read from `first` and a `next` word starting with the second half
    pub fn lookup(&self, first: &str, next: &str) -> Option<Cardinal> {
        self.entries
            .get(first)?
            .iter()
            .find(|(second, _)| next.starts_with(second.as_str()))
            .map(|&(_, compound)| compound)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
