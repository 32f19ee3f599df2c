//! Generate config command implementation

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Language code for the new lexicon
    #[arg(short = 'l', long, value_name = "CODE", required = true)]
    pub language_code: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        println!("Generating lexicon template...");
        println!("  Language code: {}", self.language_code);
        println!("  Output file: {}", self.output.display());

        std::fs::write(&self.output, self.generate_template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Lexicon template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Replace the example words with the words of your language");
        println!("2. Validate your lexicon:");
        println!("   wordnum validate --lexicon {}", self.output.display());
        println!("3. Use it for conversion:");
        println!(
            "   wordnum convert -i input.txt --lexicon {}",
            self.output.display()
        );

        Ok(())
    }

    /// Template lexicon; valid as generated
    fn generate_template(&self) -> String {
        format!(
            r#"# Lexicon for {code}
#
# Every word is matched case-insensitively. A word may belong to one
# class only.

[metadata]
code = "{code}"
name = "Custom Language"
aliases = []

[numbers]
zero = ["zero"]
# Word for 100; also read as a multiplier after 1-19 ("twelve hundred")
hundred = ["hundred"]

# 1-9
[numbers.units]
one = 1
two = 2
three = 3

# 10-19
[numbers.teens]
ten = 10
eleven = 11

# 20, 30, ... 90
[numbers.tens]
twenty = 20
thirty = 30

# 200, 300, ... 900 for languages with dedicated words
[numbers.hundreds]

# thousand, million, billion, trillion; list every inflected form
[numbers.scales]
thousand = ["thousand"]
million = ["million"]

[ordinals]
# Characters of the ordinal word kept after the digits ("21st")
suffix_chars = 2
default_endings = "exact"

# Ending classes appended to the stems below
[ordinals.endings]
exact = [""]

[[ordinals.stems]]
stem = "first"
cardinal = "one"

[[ordinals.stems]]
stem = "third"
cardinal = "three"

[markers]
decimal = ["point"]
decimal_symbol = "."
plus = ["plus"]
minus = ["minus"]
# Words that end a number ("fifty and eleven")
conjunctions = ["and"]

[rules]
# Ordinals below this value stay as words
ordinal_threshold = 4
# Words read as numbers only next to another number word
never_alone = []
# Also accept "twenty-one" and "twenty-first"
hyphen_compounds = false

# Multi-word entries read as one word
# [[phrases]]
# words = ["a", "hundred"]
# resolves_to = "hundred"

# Two words read as one compound in relaxed mode
# [[relaxed]]
# first = "three"
# second = "score"
# compound = "threescore"
"#,
            code = self.language_code
        )
    }
}
