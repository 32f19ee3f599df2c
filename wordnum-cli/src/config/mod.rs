//! CLI configuration file

use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::error::CliError;

/// Defaults read from a TOML file; command-line flags override them
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    #[serde(default)]
    pub conversion: ConversionConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Conversion-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// Default language code
    pub default_language: String,

    /// Accept relaxed compounds
    pub relaxed: bool,

    /// Replace sign words with "+" and "-"
    pub signed: bool,

    /// Ordinals below this value stay as words; the lexicon default when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordinal_threshold: Option<i64>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            default_language: "ru".to_string(),
            relaxed: false,
            signed: true,
            ordinal_threshold: None,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CliError::ConfigError(format!("cannot read '{}': {e}", path.display()))
        })?;
        let config = toml::from_str(&content).map_err(|e| {
            CliError::ConfigError(format!("cannot parse '{}': {e}", path.display()))
        })?;
        log::debug!("Loaded CLI configuration from {}", path.display());
        Ok(config)
    }

    /// Load the file when given, defaults otherwise
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.conversion.default_language, "ru");
        assert!(config.conversion.signed);
        assert!(!config.conversion.relaxed);
        assert_eq!(config.output.default_format, "text");
        assert_eq!(config.performance.worker_threads, 0);
    }

    #[test]
    fn test_partial_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "[conversion]\ndefault_language = \"en\"\nordinal_threshold = 0\n\n[output]\npretty_json = false\n"
        )
        .unwrap();

        let config = CliConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.conversion.default_language, "en");
        assert_eq!(config.conversion.ordinal_threshold, Some(0));
        assert!(config.conversion.signed);
        assert!(!config.output.pretty_json);
        assert_eq!(config.output.default_format, "text");
    }

    #[test]
    fn test_invalid_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[conversion\n").unwrap();

        let err = CliConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::ConfigError(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(CliConfig::load(Some(Path::new("/nonexistent/wordnum.toml"))).is_err());
    }
}
