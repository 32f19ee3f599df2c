//! Where the lexicon for a run comes from

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use wordnum_core::{get_lexicon, ConfigurableLexicon, Lexicon};

/// Source of the lexicon
#[derive(Debug, Clone)]
pub enum LanguageSource {
    /// Embedded lexicon selected by code or alias
    BuiltIn(String),
    /// External TOML file
    External {
        path: PathBuf,
        /// Optional language code override
        language_code: Option<String>,
    },
}

impl LanguageSource {
    /// An explicit lexicon file wins over the language code
    pub fn resolve(
        language: &str,
        lexicon: Option<&PathBuf>,
        language_code: Option<&String>,
    ) -> Self {
        match lexicon {
            Some(path) => LanguageSource::External {
                path: path.clone(),
                language_code: language_code.cloned(),
            },
            None => LanguageSource::BuiltIn(language.to_string()),
        }
    }

    /// Load the lexicon
    pub fn load(&self) -> Result<Arc<dyn Lexicon>> {
        match self {
            LanguageSource::BuiltIn(code) => {
                get_lexicon(code).with_context(|| format!("Unknown language '{code}'"))
            }
            LanguageSource::External {
                path,
                language_code,
            } => {
                let lexicon = ConfigurableLexicon::from_file(path, language_code.as_deref())
                    .with_context(|| format!("Failed to load lexicon {}", path.display()))?;
                Ok(Arc::new(lexicon))
            }
        }
    }

    /// Get the display name for the language source
    pub fn display_name(&self) -> String {
        match self {
            LanguageSource::BuiltIn(code) => format!("Built-in: {code}"),
            LanguageSource::External {
                path,
                language_code,
            } => match language_code {
                Some(code) => format!("External: {} (code: {code})", path.display()),
                None => format!("External: {}", path.display()),
            },
        }
    }
}
