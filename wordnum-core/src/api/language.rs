//! Language type for the API

use std::fmt;
use std::str::FromStr;

use crate::api::Error;

/// Languages with an embedded lexicon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// Russian, the reference language
    #[default]
    Russian,
    English,
}

impl Language {
    /// All embedded languages
    pub const ALL: [Language; 2] = [Language::Russian, Language::English];

    /// Create a Language from a language code or name
    pub fn from_code(code: &str) -> Result<Self, Error> {
        match code.trim().to_lowercase().as_str() {
            "ru" | "rus" | "russian" => Ok(Language::Russian),
            "en" | "eng" | "english" => Ok(Language::English),
            _ => Err(Error::UnsupportedLanguage(code.to_string())),
        }
    }

    /// Get the language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::Russian => "ru",
            Language::English => "en",
        }
    }

    /// Get the full language name
    pub fn name(&self) -> &'static str {
        match self {
            Language::Russian => "Russian",
            Language::English => "English",
        }
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(Language::from_code("ru").unwrap(), Language::Russian);
        assert_eq!(Language::from_code("RUSSIAN").unwrap(), Language::Russian);
        assert_eq!("eng".parse::<Language>().unwrap(), Language::English);
        assert!(matches!(
            Language::from_code("fr"),
            Err(Error::UnsupportedLanguage(code)) if code == "fr"
        ));
    }

    #[test]
    fn test_code_and_name() {
        for language in Language::ALL {
            assert_eq!(Language::from_code(language.code()).unwrap(), language);
            assert_eq!(language.to_string(), language.name());
        }
        assert_eq!(Language::default(), Language::Russian);
    }
}
