//! Validate command implementation

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use wordnum_core::{ConfigurableLexicon, Lexicon};

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the lexicon file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub lexicon: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating lexicon: {}", self.lexicon.display());

        match ConfigurableLexicon::from_file(&self.lexicon, None) {
            Ok(lexicon) => {
                println!("✓ Lexicon is valid!");
                println!("  Language code: {}", lexicon.code());
                println!("  Language name: {}", lexicon.name());
                if !lexicon.aliases().is_empty() {
                    println!("  Aliases: {}", lexicon.aliases().join(", "));
                }
                println!(
                    "  Ordinal threshold: {}",
                    lexicon.default_ordinal_threshold()
                );
                Ok(())
            }
            Err(e) => {
                println!("✗ Lexicon is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const VALID: &str = r#"
[metadata]
code = "test"
name = "Test Language"

[numbers]
zero = ["zero"]
hundred = ["hundred"]

[numbers.units]
one = 1

[numbers.teens]
ten = 10

[numbers.tens]
twenty = 20

[ordinals]
default_endings = "exact"

[ordinals.endings]
exact = [""]

[markers]
"#;

    fn validate(content: &str) -> Result<()> {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", content).unwrap();

        ValidateArgs {
            lexicon: temp_file.path().to_path_buf(),
        }
        .execute()
    }

    #[test]
    fn test_validate_valid_lexicon() {
        assert!(validate(VALID).is_ok());
    }

    #[test]
    fn test_validate_invalid_lexicon() {
        assert!(validate(&VALID.replace("code = \"test\"", "code = \"\"")).is_err());
        assert!(validate(&VALID.replace("one = 1", "one = 10")).is_err());
        assert!(validate("[metadata]\ncode = \"x\"").is_err());
    }
}
