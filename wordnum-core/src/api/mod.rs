//! Public API for wordnum-core
//!
//! A small surface over the domain layer: a validated [`Config`], the
//! [`NumberProcessor`] that owns a lexicon, and input/output types shared by
//! the CLI.

pub(crate) mod config;
mod error;
mod input;
mod language;
mod output;
mod processor;


pub use config::{defaults, Config, ConfigBuilder};
pub use error::{Error, Result};
pub use input::Input;
pub use language::Language;
pub use output::{Output, ProcessingMetadata, ProcessingStats, Replacement};
pub use processor::NumberProcessor;
