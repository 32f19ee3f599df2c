//! Runtime implementation of lexicons
//!
//! Bridges the TOML configuration and the lookup interface used by the
//! tokenizer and the number builder.

use std::collections::HashSet;
use std::path::Path;

use crate::domain::error::DomainError;
use crate::domain::token::{Cardinal, Scale, Sign, TokenKind};
use crate::language::config::LexiconConfig;
use crate::language::interface::Lexicon;
use crate::language::loader::embedded_source;
use crate::language::tables::{PhraseTrie, RelaxedTable, WordTable};

/// Lexicon built from a [`LexiconConfig`]
#[derive(Debug, Clone)]
pub struct ConfigurableLexicon {
    code: String,
    name: String,
    aliases: Vec<String>,

    words: WordTable,
    phrases: PhraseTrie,
    relaxed: RelaxedTable,
    never_alone: HashSet<String>,

    suffix_chars: usize,
    ordinal_threshold: u64,
    decimal_symbol: char,
}

impl ConfigurableLexicon {
    /// Build one of the embedded lexicons
    pub fn from_code(code: &str) -> Result<Self, DomainError> {
        let source = embedded_source(code)
            .ok_or_else(|| DomainError::UnsupportedLanguage(code.to_string()))?;
        Self::from_toml_str(source)
    }

    /// Load a lexicon from an external TOML file
    pub fn from_file(path: &Path, language_code: Option<&str>) -> Result<Self, DomainError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            DomainError::ConfigurationError(format!(
                "Failed to read file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let mut config: LexiconConfig = toml::from_str(&content).map_err(|e| {
            DomainError::ConfigurationError(format!(
                "Failed to parse TOML from '{}': {}",
                path.display(),
                e
            ))
        })?;

        if let Some(code) = language_code {
            config.metadata.code = code.to_string();
        }

        Self::from_config(&config)
    }

    /// Parse and build a lexicon from TOML text
    pub fn from_toml_str(toml_str: &str) -> Result<Self, DomainError> {
        let config: LexiconConfig = toml::from_str(toml_str)
            .map_err(|e| DomainError::ConfigurationError(format!("Failed to parse TOML: {e}")))?;
        Self::from_config(&config)
    }

    /// Create the lexicon from configuration
    pub fn from_config(config: &LexiconConfig) -> Result<Self, DomainError> {
        config.validate()?;

        let mut words = WordTable::new();

        let numbers = &config.numbers;
        for word in &numbers.zero {
            add_word(&mut words, word, TokenKind::Cardinal(Cardinal::Digit(0)))?;
        }
        for (word, &value) in numbers.units.iter().chain(&numbers.teens) {
            add_word(&mut words, word, TokenKind::Cardinal(Cardinal::Digit(value)))?;
        }
        for (word, &value) in &numbers.tens {
            add_word(&mut words, word, TokenKind::Cardinal(Cardinal::Ten(value)))?;
        }
        for word in &numbers.hundred {
            add_word(&mut words, word, TokenKind::Cardinal(Cardinal::Scale(Scale::Hundred)))?;
        }
        for (word, &value) in &numbers.hundreds {
            add_word(&mut words, word, TokenKind::Cardinal(Cardinal::Hundreds(value)))?;
        }
        for (name, scale_words) in &numbers.scales {
            let scale = Scale::from_name(name)
                .ok_or_else(|| DomainError::InvalidLexicon(format!("unknown scale '{name}'")))?;
            for word in scale_words {
                add_word(&mut words, word, TokenKind::Cardinal(Cardinal::Scale(scale)))?;
            }
        }

        let markers = &config.markers;
        for word in &markers.decimal {
            add_word(&mut words, word, TokenKind::DecimalMarker)?;
        }
        for word in &markers.plus {
            add_word(&mut words, word, TokenKind::Sign(Sign::Plus))?;
        }
        for word in &markers.minus {
            add_word(&mut words, word, TokenKind::Sign(Sign::Minus))?;
        }
        for word in &markers.conjunctions {
            add_word(&mut words, word, TokenKind::Conjunction)?;
        }

        // Ordinal forms: every stem combined with its ending class
        let mut ordinal_units = Vec::new();
        for stem in &config.ordinals.stems {
            let cardinal = cardinal_of(&words, &stem.cardinal)?;
            let class = stem
                .endings
                .as_deref()
                .unwrap_or(config.ordinals.default_endings.as_str());
            let endings = config.ordinals.endings.get(class).ok_or_else(|| {
                DomainError::InvalidLexicon(format!("unknown ending class '{class}'"))
            })?;
            for ending in endings {
                let form = format!("{}{}", stem.stem, ending);
                add_word(&mut words, &form, TokenKind::Ordinal(cardinal))?;
                if let Cardinal::Digit(value @ 1..=9) = cardinal {
                    ordinal_units.push((form, value));
                }
            }
        }

        if config.rules.hyphen_compounds {
            for (ten_word, &ten) in &numbers.tens {
                for (unit_word, &unit) in &numbers.units {
                    let word = format!("{ten_word}-{unit_word}");
                    add_word(&mut words, &word, TokenKind::Cardinal(Cardinal::Compound(ten + unit)))?;
                }
                for (form, unit) in &ordinal_units {
                    let word = format!("{ten_word}-{form}");
                    add_word(&mut words, &word, TokenKind::Ordinal(Cardinal::Compound(ten + unit)))?;
                }
            }
        }

        let mut phrases = PhraseTrie::new();
        for phrase in &config.phrases {
            let kind = words.get(&phrase.resolves_to.to_lowercase()).ok_or_else(|| {
                DomainError::InvalidLexicon(format!("unknown phrase target '{}'", phrase.resolves_to))
            })?;
            phrases.insert(phrase.words.as_slice(), kind);
        }

        let mut relaxed = RelaxedTable::new();
        for entry in &config.relaxed {
            let compound = cardinal_of(&words, &entry.compound)?;
            relaxed.insert(&entry.first, &entry.second, compound);
        }

        let never_alone = config
            .rules
            .never_alone
            .iter()
            .map(|word| word.to_lowercase())
            .collect();

        log::debug!(
            "built lexicon '{}' with {} words and {} phrases",
            config.metadata.code,
            words.len(),
            config.phrases.len()
        );

        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            aliases: config
                .metadata
                .aliases
                .iter()
                .map(|alias| alias.to_lowercase())
                .collect(),
            words,
            phrases,
            relaxed,
            never_alone,
            suffix_chars: config.ordinals.suffix_chars,
            ordinal_threshold: config.rules.ordinal_threshold,
            decimal_symbol: config.markers.decimal_symbol,
        })
    }

    /// Alternative names this lexicon is registered under
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }
}

fn add_word(words: &mut WordTable, word: &str, kind: TokenKind) -> Result<(), DomainError> {
    words.insert(word, kind).map_err(DomainError::InvalidLexicon)
}

fn cardinal_of(words: &WordTable, word: &str) -> Result<Cardinal, DomainError> {
    match words.get(&word.to_lowercase()) {
        Some(TokenKind::Cardinal(cardinal)) => Ok(cardinal),
        _ => Err(DomainError::InvalidLexicon(format!(
            "'{word}' is not a cardinal word"
        ))),
    }
}

impl Lexicon for ConfigurableLexicon {
    fn code(&self) -> &str {
        &self.code
    }

    fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    fn classify(&self, word: &str) -> TokenKind {
        self.words.get(word).unwrap_or(TokenKind::Literal)
    }

    fn longest_phrase(&self, words: &[&str]) -> Option<(usize, TokenKind)> {
        if self.phrases.is_empty() {
            return None;
        }
        self.phrases.longest_match(words)
    }

    fn max_phrase_words(&self) -> usize {
        self.phrases.max_words()
    }

    fn relaxed_compound(&self, first: &str, next: &str) -> Option<Cardinal> {
        self.relaxed.lookup(first, next)
    }

    fn is_never_alone(&self, word: &str) -> bool {
        self.never_alone.contains(word)
    }

    fn ordinal_suffix_chars(&self) -> usize {
        self.suffix_chars
    }

    fn default_ordinal_threshold(&self) -> u64 {
        self.ordinal_threshold
    }

    fn decimal_symbol(&self) -> char {
        self.decimal_symbol
    }
}
