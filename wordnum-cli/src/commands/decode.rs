//! Decode command implementation

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use wordnum_core::{Config, DecodedNumber, NumberProcessor};

use crate::commands::convert::OutputFormat;
use crate::commands::init_logging;
use crate::error::CliError;
use crate::language_source::LanguageSource;

/// Arguments for the decode command
#[derive(Debug, Args)]
pub struct DecodeArgs {
    /// Words of the number; joined with spaces
    #[arg(value_name = "TEXT", required = true)]
    pub text: Vec<String>,

    /// Language code or name of an embedded lexicon
    #[arg(short, long, value_name = "CODE", default_value = "ru")]
    pub language: String,

    /// External lexicon file (TOML)
    #[arg(long, value_name = "FILE")]
    pub lexicon: Option<PathBuf>,

    /// Read relaxed compounds such as "four score"
    #[arg(short, long)]
    pub relaxed: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Serialize)]
struct DecodedReport<'a> {
    text: &'a str,
    rendered: String,
    value: u64,
    #[serde(flatten)]
    number: &'a DecodedNumber,
}

impl DecodeArgs {
    /// Execute the decode command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, false);

        let text = self.text.join(" ");
        let number = self.decode(&text)?;

        match self.format {
            OutputFormat::Text => println!("{number}"),
            OutputFormat::Json => {
                let report = DecodedReport {
                    text: &text,
                    rendered: number.to_string(),
                    value: number.value(),
                    number: &number,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
        }
        Ok(())
    }

    fn decode(&self, text: &str) -> Result<DecodedNumber> {
        let source = LanguageSource::resolve(&self.language, self.lexicon.as_ref(), None);
        let config = Config::builder()
            .lexicon(source.load()?)
            .relaxed(self.relaxed)
            .build()?;

        let processor = NumberProcessor::with_config(config)?;
        processor
            .decode(text)
            .map_err(|e| CliError::DecodeError(format!("'{text}': {e}")).into())
    }
}
