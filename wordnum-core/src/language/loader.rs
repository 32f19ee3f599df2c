//! Lexicon registry
//!
//! Embedded lexicons are parsed on first access and shared afterwards. Codes
//! and aliases resolve to the same `Arc`.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use crate::domain::error::DomainError;
use crate::language::interface::Lexicon;
use crate::language::runtime::ConfigurableLexicon;

macro_rules! embed_lexicon {
    ($code:expr, $path:expr) => {
        ($code, include_str!($path))
    };
}

/// Lexicon sources compiled into the crate
const EMBEDDED_SOURCES: [(&str, &str); 2] = [
    embed_lexicon!("ru", "../../configs/languages/russian.toml"),
    embed_lexicon!("en", "../../configs/languages/english.toml"),
];

static EMBEDDED: OnceLock<HashMap<String, Arc<dyn Lexicon>>> = OnceLock::new();

/// TOML source of an embedded lexicon by canonical code
pub(crate) fn embedded_source(code: &str) -> Option<&'static str> {
    EMBEDDED_SOURCES
        .iter()
        .find(|(embedded, _)| *embedded == code)
        .map(|(_, source)| *source)
}

fn registry() -> &'static HashMap<String, Arc<dyn Lexicon>> {
    EMBEDDED.get_or_init(|| {
        let mut map: HashMap<String, Arc<dyn Lexicon>> = HashMap::new();

        for (code, source) in EMBEDDED_SOURCES {
            match ConfigurableLexicon::from_toml_str(source) {
                Ok(lexicon) => {
                    if lexicon.code() != code {
                        log::warn!(
                            "embedded lexicon '{code}' declares code '{}'",
                            lexicon.code()
                        );
                    }
                    let aliases = lexicon.aliases().to_vec();
                    let shared: Arc<dyn Lexicon> = Arc::new(lexicon);
                    for alias in aliases {
                        map.insert(alias, Arc::clone(&shared));
                    }
                    map.insert(code.to_string(), shared);
                    log::debug!("loaded embedded lexicon '{code}'");
                }
                Err(e) => {
                    log::warn!("failed to load embedded lexicon '{code}': {e}");
                }
            }
        }

        map
    })
}

/// Look up an embedded lexicon by code or alias (case-insensitive)
pub fn get_lexicon(code: &str) -> Result<Arc<dyn Lexicon>, DomainError> {
    registry()
        .get(&code.trim().to_lowercase())
        .cloned()
        .ok_or_else(|| DomainError::UnsupportedLanguage(code.to_string()))
}

/// Canonical codes of the embedded lexicons, sorted
pub fn list_languages() -> Vec<&'static str> {
    let mut codes: Vec<&'static str> = EMBEDDED_SOURCES.iter().map(|(code, _)| *code).collect();
    codes.sort_unstable();
    codes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_lexicon_unsupported() {
        match get_lexicon("nonexistent") {
            Err(DomainError::UnsupportedLanguage(code)) => assert_eq!(code, "nonexistent"),
            other => panic!("Expected UnsupportedLanguage error, got {other:?}"),
        }
    }

    #[test]
    fn test_aliases_share_one_lexicon() {
        let by_code = get_lexicon("ru").unwrap();
        let by_alias = get_lexicon("Russian").unwrap();
        assert!(Arc::ptr_eq(&by_code, &by_alias));
        assert_eq!(by_alias.code(), "ru");

        let english = get_lexicon("english").unwrap();
        assert_eq!(english.name(), "English");
    }

    #[test]
    fn test_list_languages() {
        assert_eq!(list_languages(), vec!["en", "ru"]);
    }

    #[test]
    fn test_embedded_source() {
        assert!(embedded_source("ru").is_some());
        assert!(embedded_source("russian").is_none());
    }
}
