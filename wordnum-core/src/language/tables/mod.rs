//! Runtime tables for lexicons
//!
//! Built once from a [`LexiconConfig`](crate::language::config::LexiconConfig);
//! lookups never allocate.

pub mod phrases;
pub mod relaxed;
pub mod words;

pub use phrases::PhraseTrie;
pub use relaxed::RelaxedTable;
pub use words::WordTable;
