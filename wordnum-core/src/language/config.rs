//! Configuration structures and validation
//!
//! This module defines the TOML schema of a lexicon file.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;
use crate::domain::token::Scale;

/// Root lexicon configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconConfig {
    pub metadata: Metadata,
    pub numbers: Numbers,
    pub ordinals: Ordinals,
    pub markers: Markers,
    #[serde(default)]
    pub rules: Rules,
    #[serde(default)]
    pub phrases: Vec<Phrase>,
    #[serde(default)]
    pub relaxed: Vec<RelaxedCompound>,
}

/// Language metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
}

/// Cardinal number words
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Numbers {
    pub zero: Vec<String>,
    pub hundred: Vec<String>,
    pub units: HashMap<String, u8>,
    pub teens: HashMap<String, u8>,
    pub tens: HashMap<String, u8>,
    #[serde(default)]
    pub hundreds: HashMap<String, u16>,
    /// thousand, million, billion, trillion
    #[serde(default)]
    pub scales: HashMap<String, Vec<String>>,
}

/// Ordinal words are generated from stems and ending classes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ordinals {
    #[serde(default = "default_suffix_chars")]
    pub suffix_chars: usize,
    pub default_endings: String,
    #[serde(default)]
    pub endings: HashMap<String, Vec<String>>,
    #[serde(default)]
    pub stems: Vec<OrdinalStem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrdinalStem {
    pub stem: String,
    /// Cardinal word the ordinal is built on
    pub cardinal: String,
    /// Ending class, the default one when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endings: Option<String>,
}

/// Non-number words with a role inside numbers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Markers {
    #[serde(default)]
    pub decimal: Vec<String>,
    #[serde(default = "default_decimal_symbol")]
    pub decimal_symbol: char,
    #[serde(default)]
    pub plus: Vec<String>,
    #[serde(default)]
    pub minus: Vec<String>,
    #[serde(default)]
    pub conjunctions: Vec<String>,
}

/// Behaviour switches
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rules {
    #[serde(default = "default_ordinal_threshold")]
    pub ordinal_threshold: u64,
    #[serde(default)]
    pub never_alone: Vec<String>,
    /// Generate "twenty-one" style words from tens and units
    #[serde(default)]
    pub hyphen_compounds: bool,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            ordinal_threshold: default_ordinal_threshold(),
            never_alone: Vec::new(),
            hyphen_compounds: false,
        }
    }
}

/// Multi-word entry read as an existing single word
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Phrase {
    pub words: Vec<String>,
    pub resolves_to: String,
}

/// Two words read as one compound in relaxed mode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelaxedCompound {
    pub first: String,
    pub second: String,
    pub compound: String,
}

fn default_suffix_chars() -> usize {
    2
}

fn default_decimal_symbol() -> char {
    '.'
}

fn default_ordinal_threshold() -> u64 {
    4
}

impl LexiconConfig {
    /// Cardinal words of every class, in a fixed order
    pub(crate) fn cardinal_words(&self) -> impl Iterator<Item = &str> {
        let n = &self.numbers;
        n.zero
            .iter()
            .chain(&n.hundred)
            .chain(n.units.keys())
            .chain(n.teens.keys())
            .chain(n.tens.keys())
            .chain(n.hundreds.keys())
            .chain(n.scales.values().flatten())
            .map(String::as_str)
    }

    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<(), DomainError> {
        let invalid = |msg: String| Err(DomainError::InvalidLexicon(msg));

        if self.metadata.code.trim().is_empty() {
            return invalid("language code is empty".to_string());
        }
        if self.metadata.name.trim().is_empty() {
            return invalid("language name is empty".to_string());
        }
        if self.numbers.zero.is_empty() {
            return invalid("no word for zero".to_string());
        }

        for (word, &value) in &self.numbers.units {
            if !(1..=9).contains(&value) {
                return invalid(format!("unit '{word}' has value {value}, expected 1-9"));
            }
        }
        for (word, &value) in &self.numbers.teens {
            if !(10..=19).contains(&value) {
                return invalid(format!("teen '{word}' has value {value}, expected 10-19"));
            }
        }
        for (word, &value) in &self.numbers.tens {
            if !(20..=90).contains(&value) || value % 10 != 0 {
                return invalid(format!("ten '{word}' has value {value}"));
            }
        }
        for (word, &value) in &self.numbers.hundreds {
            if !(200..=900).contains(&value) || value % 100 != 0 {
                return invalid(format!("hundreds word '{word}' has value {value}"));
            }
        }
        for name in self.numbers.scales.keys() {
            match Scale::from_name(name) {
                Some(scale) if scale > Scale::Hundred => {}
                _ => return invalid(format!("unknown scale '{name}'")),
            }
        }

        self.check_collisions()?;

        let cardinals: HashSet<&str> = self.cardinal_words().collect();

        if self.ordinals.suffix_chars > 8 {
            return invalid(format!(
                "ordinal suffix of {} characters is too long",
                self.ordinals.suffix_chars
            ));
        }
        for stem in &self.ordinals.stems {
            if !cardinals.contains(stem.cardinal.as_str()) {
                return invalid(format!(
                    "ordinal stem '{}' refers to unknown cardinal '{}'",
                    stem.stem, stem.cardinal
                ));
            }
            let class = stem
                .endings
                .as_deref()
                .unwrap_or(self.ordinals.default_endings.as_str());
            if !self.ordinals.endings.contains_key(class) {
                return invalid(format!(
                    "ordinal stem '{}' uses unknown ending class '{class}'",
                    stem.stem
                ));
            }
        }

        for phrase in &self.phrases {
            if phrase.words.len() < 2 {
                return invalid(format!(
                    "phrase for '{}' needs at least two words",
                    phrase.resolves_to
                ));
            }
            if !cardinals.contains(phrase.resolves_to.as_str()) {
                return invalid(format!(
                    "phrase resolves to unknown word '{}'",
                    phrase.resolves_to
                ));
            }
        }

        for relaxed in &self.relaxed {
            if !cardinals.contains(relaxed.compound.as_str()) {
                return invalid(format!(
                    "relaxed compound '{}' is not a cardinal word",
                    relaxed.compound
                ));
            }
            if relaxed.second.is_empty() {
                return invalid(format!(
                    "relaxed compound '{}' has no second word",
                    relaxed.compound
                ));
            }
        }

        for word in &self.rules.never_alone {
            if !cardinals.contains(word.as_str()) {
                return invalid(format!("never-alone word '{word}' is not a cardinal word"));
            }
        }

        Ok(())
    }

    /// A word may belong to one class only
    fn check_collisions(&self) -> Result<(), DomainError> {
        let n = &self.numbers;
        let m = &self.markers;
        let classes: [(&str, Vec<&String>); 11] = [
            ("zero", n.zero.iter().collect()),
            ("hundred", n.hundred.iter().collect()),
            ("units", n.units.keys().collect()),
            ("teens", n.teens.keys().collect()),
            ("tens", n.tens.keys().collect()),
            ("hundreds", n.hundreds.keys().collect()),
            ("scales", n.scales.values().flatten().collect()),
            ("decimal", m.decimal.iter().collect()),
            ("plus", m.plus.iter().collect()),
            ("minus", m.minus.iter().collect()),
            ("conjunctions", m.conjunctions.iter().collect()),
        ];

        let mut seen: HashMap<&str, &str> = HashMap::new();
        for (class, words) in &classes {
            for word in words {
                if let Some(previous) = seen.insert(word.as_str(), *class) {
                    if previous != *class {
                        return Err(DomainError::InvalidLexicon(format!(
                            "word '{word}' is listed both as {previous} and as {class}"
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}
