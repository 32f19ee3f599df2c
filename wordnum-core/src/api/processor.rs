//! Main number processor implementation

use std::sync::Arc;
use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::api::{Config, Error, Input, Output};
use crate::domain::builder::NumberBuilder;
use crate::domain::scanner::{has_number_words, reassemble, Scanner};
use crate::domain::tokenizer::tokenize;
use crate::domain::DecodedNumber;
use crate::language::Lexicon;

/// Decodes and substitutes spelled-out numbers with one lexicon and config
pub struct NumberProcessor {
    lexicon: Arc<dyn Lexicon>,
    config: Config,
}

impl NumberProcessor {
    /// Create a processor for the default language
    pub fn new() -> Result<Self, Error> {
        Self::with_config(Config::default())
    }

    /// Create a processor with custom configuration
    pub fn with_config(config: Config) -> Result<Self, Error> {
        config.validate()?;
        let lexicon = config.resolve_lexicon()?;
        Ok(Self { lexicon, config })
    }

    /// Create a processor for a specific language
    pub fn with_language(lang_code: impl Into<String>) -> Result<Self, Error> {
        let config = Config::builder().language(lang_code)?.build()?;
        Self::with_config(config)
    }

    /// Read `text` as exactly one number
    pub fn decode(&self, text: &str) -> Result<DecodedNumber, Error> {
        let tokens = tokenize(text, self.lexicon.as_ref());
        if !has_number_words(&tokens) {
            return Err(Error::NoNumberFound(text.to_string()));
        }
        let number = NumberBuilder::read_all(
            self.lexicon.as_ref(),
            self.config.build_options(),
            &tokens,
        )?;
        Ok(number)
    }

    /// Replace every number in `text` with digits
    pub fn substitute(&self, text: &str) -> String {
        self.scanner().substitute(text)
    }

    /// Substitute and report every replacement
    pub fn process(&self, input: Input) -> Result<Output, Error> {
        let start = Instant::now();
        let label = input.label();
        let source = input.into_text()?;

        let matches = self.scanner().scan(&source);
        let text = reassemble(&source, &matches);

        let duration = start.elapsed();
        log::info!(
            "{}: substituted {} numbers in {} bytes in {:?}",
            label,
            matches.len(),
            source.len(),
            duration
        );
        Ok(Output::from_matches(
            &source,
            text,
            matches,
            self.lexicon.code(),
            duration,
        ))
    }

    /// Substitute many documents; results keep input order
    pub fn substitute_batch<S: AsRef<str> + Sync>(&self, texts: &[S]) -> Result<Vec<String>, Error> {
        #[cfg(feature = "parallel")]
        {
            use crate::api::config::defaults;

            if texts.len() >= defaults::PARALLEL_BATCH_THRESHOLD && self.thread_count() > 1 {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(self.thread_count())
                    .thread_name(|i| format!("wordnum-{i}"))
                    .build()
                    .map_err(|e| Error::Infrastructure(format!("Failed to build thread pool: {e}")))?;

                let scanner = self.scanner();
                return Ok(pool.install(|| {
                    texts
                        .par_iter()
                        .map(|text| scanner.substitute(text.as_ref()))
                        .collect()
                }));
            }
        }

        let scanner = self.scanner();
        Ok(texts
            .iter()
            .map(|text| scanner.substitute(text.as_ref()))
            .collect())
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The lexicon in use
    pub fn lexicon(&self) -> &Arc<dyn Lexicon> {
        &self.lexicon
    }

    fn scanner(&self) -> Scanner<'_> {
        let options = self.config.scan_options(self.lexicon.as_ref());
        Scanner::new(self.lexicon.as_ref(), options)
    }

    #[cfg(feature = "parallel")]
    fn thread_count(&self) -> usize {
        self.config.threads.unwrap_or_else(num_cpus::get)
    }
}
