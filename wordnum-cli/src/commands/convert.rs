//! Convert command implementation

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use rayon::prelude::*;
use wordnum_core::{Config, Input, NumberProcessor, Output};

use crate::commands::init_logging;
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::resolve_patterns;
use crate::language_source::LanguageSource;
use crate::output::{JsonFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;

/// Arguments for the convert command
#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Input files or patterns (supports glob); reads stdin when omitted
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Language code or name of an embedded lexicon
    #[arg(short, long, value_name = "CODE")]
    pub language: Option<String>,

    /// External lexicon file (TOML)
    #[arg(long, value_name = "FILE")]
    pub lexicon: Option<PathBuf>,

    /// Language code override for the external lexicon
    #[arg(long, value_name = "CODE", requires = "lexicon")]
    pub language_code: Option<String>,

    /// Read relaxed compounds such as "four score"
    #[arg(short, long)]
    pub relaxed: bool,

    /// Ordinals below this value stay as words
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub ordinal_threshold: Option<i64>,

    /// Leave "plus" and "minus" words as written
    #[arg(long)]
    pub unsigned: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Convert files in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Converted text only
    Text,
    /// Converted text with replacement details
    Json,
}

impl OutputFormat {
    /// Parse a format name from the configuration file
    pub fn from_name(name: &str) -> Result<Self> {
        <Self as ValueEnum>::from_str(name, true)
            .map_err(|_| CliError::ConfigError(format!("unknown output format '{name}'")).into())
    }
}

impl ConvertArgs {
    /// Execute the convert command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);
        log::debug!("Arguments: {:?}", self);

        let cli_config = CliConfig::load(self.config.as_deref())?;
        let processor = self.build_processor(&cli_config)?;
        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_name(&cli_config.output.default_format)?,
        };

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };
        let mut formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, cli_config.output.pretty_json)),
        };

        if self.input.is_empty() {
            let output = processor
                .process(Input::stdin())
                .context("Failed to convert standard input")?;
            formatter.format_document("-", &output)?;
        } else {
            let files = resolve_patterns(&self.input)?;
            log::info!("Converting {} file(s)", files.len());

            let outputs =
                self.convert_files(&processor, &files, cli_config.performance.worker_threads)?;
            for (path, output) in files.iter().zip(&outputs) {
                formatter.format_document(&path.display().to_string(), output)?;
            }
        }

        formatter.finish()
    }

    /// Flags win over the configuration file
    fn build_processor(&self, cli_config: &CliConfig) -> Result<NumberProcessor> {
        let conversion = &cli_config.conversion;
        let language = self
            .language
            .as_deref()
            .unwrap_or(&conversion.default_language);

        let source = LanguageSource::resolve(
            language,
            self.lexicon.as_ref(),
            self.language_code.as_ref(),
        );
        log::info!("Lexicon: {}", source.display_name());

        let mut builder = Config::builder()
            .lexicon(source.load()?)
            .relaxed(self.relaxed || conversion.relaxed)
            .signed(!self.unsigned && conversion.signed);
        if let Some(threshold) = self.ordinal_threshold.or(conversion.ordinal_threshold) {
            builder = builder.ordinal_threshold(threshold);
        }

        let processor = NumberProcessor::with_config(builder.build()?)?;
        Ok(processor)
    }

    fn convert_files(
        &self,
        processor: &NumberProcessor,
        files: &[PathBuf],
        worker_threads: usize,
    ) -> Result<Vec<Output>> {
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let convert = |path: &PathBuf| -> Result<Output> {
            let output = processor
                .process(Input::from_file(path))
                .with_context(|| format!("Failed to convert {}", path.display()))?;
            progress.file_completed(&path.display().to_string());
            Ok(output)
        };

        let outputs = if self.parallel && files.len() > 1 {
            let threads = match worker_threads {
                0 => num_cpus::get(),
                n => n,
            };
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .context("Failed to build thread pool")?;
            pool.install(|| files.par_iter().map(convert).collect::<Result<Vec<_>>>())?
        } else {
            files.iter().map(convert).collect::<Result<Vec<_>>>()?
        };

        progress.finish();
        Ok(outputs)
    }
}
