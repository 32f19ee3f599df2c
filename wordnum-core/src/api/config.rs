//! Configuration API for number processing

use std::fmt;
use std::sync::Arc;

use crate::api::{Error, Language};
use crate::domain::builder::BuildOptions;
use crate::domain::scanner::ScanOptions;
use crate::language::{get_lexicon, Lexicon};

/// Default configuration constants
pub mod defaults {
    /// Relaxed compounds are off unless asked for
    pub const RELAXED: bool = false;

    /// Sign words render as `+` / `-`
    pub const SIGNED: bool = true;

    /// Batches smaller than this are processed on the calling thread
    pub const PARALLEL_BATCH_THRESHOLD: usize = 8;
}

/// Processing configuration
#[derive(Clone)]
pub struct Config {
    pub(crate) language: Language,
    pub(crate) lexicon: Option<Arc<dyn Lexicon>>,
    pub(crate) relaxed: bool,
    pub(crate) signed: bool,
    pub(crate) ordinal_threshold: Option<u64>, // None = lexicon default
    pub(crate) threads: Option<usize>,         // None = all available threads
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: Language::default(),
            lexicon: None,
            relaxed: defaults::RELAXED,
            signed: defaults::SIGNED,
            ordinal_threshold: None,
            threads: None,
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("language", &self.language)
            .field("lexicon", &self.lexicon.as_ref().map(|l| l.code().to_string()))
            .field("relaxed", &self.relaxed)
            .field("signed", &self.signed)
            .field("ordinal_threshold", &self.ordinal_threshold)
            .field("threads", &self.threads)
            .finish()
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn relaxed(&self) -> bool {
        self.relaxed
    }

    pub fn signed(&self) -> bool {
        self.signed
    }

    /// Explicit threshold, `None` when the lexicon default applies
    pub fn ordinal_threshold(&self) -> Option<u64> {
        self.ordinal_threshold
    }

    pub fn threads(&self) -> Option<usize> {
        self.threads
    }

    /// The lexicon override if set, else the embedded one for the language
    pub fn resolve_lexicon(&self) -> Result<Arc<dyn Lexicon>, Error> {
        match &self.lexicon {
            Some(lexicon) => Ok(Arc::clone(lexicon)),
            None => Ok(get_lexicon(self.language.code())?),
        }
    }

    pub(crate) fn build_options(&self) -> BuildOptions {
        BuildOptions {
            relaxed: self.relaxed,
            signed: self.signed,
        }
    }

    pub(crate) fn scan_options(&self, lexicon: &dyn Lexicon) -> ScanOptions {
        ScanOptions {
            build: self.build_options(),
            ordinal_threshold: self
                .ordinal_threshold
                .unwrap_or_else(|| lexicon.default_ordinal_threshold()),
        }
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if let Some(threads) = self.threads {
            if threads == 0 {
                return Err(Error::InvalidOption(
                    "threads must be greater than 0".into(),
                ));
            }
        }

        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Default)]
pub struct ConfigBuilder {
    language: Option<String>,
    lexicon: Option<Arc<dyn Lexicon>>,
    relaxed: Option<bool>,
    signed: Option<bool>,
    ordinal_threshold: Option<i64>,
    threads: Option<usize>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the language by code
    pub fn language(mut self, code: impl Into<String>) -> Result<Self, Error> {
        self.language = Some(code.into());
        Ok(self)
    }

    /// Use a custom lexicon instead of an embedded one
    pub fn lexicon(mut self, lexicon: Arc<dyn Lexicon>) -> Self {
        self.lexicon = Some(lexicon);
        self
    }

    /// Read relaxed two-word compounds
    pub fn relaxed(mut self, relaxed: bool) -> Self {
        self.relaxed = Some(relaxed);
        self
    }

    /// Render sign words as `+` / `-`
    pub fn signed(mut self, signed: bool) -> Self {
        self.signed = Some(signed);
        self
    }

    /// Smallest ordinal value to substitute; must not be negative
    pub fn ordinal_threshold(mut self, threshold: i64) -> Self {
        self.ordinal_threshold = Some(threshold);
        self
    }

    /// Set the number of threads (None = all available)
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.threads = count;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config, Error> {
        let mut config = Config::default();

        if let Some(code) = self.language {
            config.language = code.parse()?;
        }

        config.lexicon = self.lexicon;

        if let Some(relaxed) = self.relaxed {
            config.relaxed = relaxed;
        }

        if let Some(signed) = self.signed {
            config.signed = signed;
        }

        if let Some(threshold) = self.ordinal_threshold {
            let threshold = u64::try_from(threshold).map_err(|_| {
                Error::InvalidOption(format!(
                    "ordinal_threshold must not be negative, got {threshold}"
                ))
            })?;
            config.ordinal_threshold = Some(threshold);
        }

        config.threads = self.threads;

        config.validate()?;
        Ok(config)
    }
}
