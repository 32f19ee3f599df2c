//! Output formatting module

use anyhow::Result;
use wordnum_core::Output;

/// Writes converted documents
pub trait OutputFormatter: Send + Sync {
    /// Format one converted document; `source` names where it came from
    fn format_document(&mut self, source: &str, output: &Output) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
