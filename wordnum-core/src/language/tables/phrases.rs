//! Word-level trie for multi-word lexicon entries
//!
//! Same layout as a character trie, one edge per word: nodes live in a
//! contiguous vector and refer to their children by index.

use std::collections::HashMap;

use crate::domain::token::TokenKind;

#[derive(Debug, Clone, Default)]
struct PhraseNode {
    /// Next word -> node index
    children: HashMap<String, u32>,
    /// Set when a phrase ends here
    kind: Option<TokenKind>,
}

/// Longest-match lookup of word sequences
#[derive(Debug, Clone)]
pub struct PhraseTrie {
    nodes: Vec<PhraseNode>,
    max_words: usize,
}

impl Default for PhraseTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl PhraseTrie {
    pub fn new() -> Self {
        Self {
            nodes: vec![PhraseNode::default()],
            max_words: 1,
        }
    }

    /// Insert a phrase (words are lower-cased)
    pub fn insert<S: AsRef<str>>(&mut self, words: &[S], kind: TokenKind) {
        let mut current = 0u32;

        for word in words {
            let word = word.as_ref().to_lowercase();
            let next = match self.nodes[current as usize].children.get(&word) {
                Some(&child) => child,
                None => {
                    let child = self.nodes.len() as u32;
                    self.nodes.push(PhraseNode::default());
                    self.nodes[current as usize].children.insert(word, child);
                    child
                }
            };
            current = next;
        }

        self.nodes[current as usize].kind = Some(kind);
        self.max_words = self.max_words.max(words.len());
    }

    /// Longest phrase that is a prefix of `words`
    pub fn longest_match(&self, words: &[&str]) -> Option<(usize, TokenKind)> {
        let mut current = 0usize;
        let mut best = None;

        for (depth, word) in words.iter().enumerate() {
            match self.nodes[current].children.get(*word) {
                Some(&child) => current = child as usize,
                None => break,
            }
            if let Some(kind) = self.nodes[current].kind {
                best = Some((depth + 1, kind));
            }
        }

        best
    }

    /// Words in the longest phrase
    pub fn max_words(&self) -> usize {
        self.max_words
    }

    pub fn is_empty(&self) -> bool {
        self.nodes[0].children.is_empty()
    }
}
