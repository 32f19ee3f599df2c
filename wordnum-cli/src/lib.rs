//! wordnum CLI library
//!
//! Command modules, input resolution and output formatting behind the
//! `wordnum` binary.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod language_source;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
