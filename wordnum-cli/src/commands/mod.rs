//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod convert;
pub mod decode;
pub mod generate_config;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Replace spelled-out numbers in files or stdin with digits
    Convert(convert::ConvertArgs),

    /// Decode text as exactly one number
    Decode(decode::DecodeArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Validate a lexicon file
    Validate(validate::ValidateArgs),

    /// Write a lexicon template for a new language
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List embedded languages
    Languages,

    /// List available output formats
    Formats,
}

impl ListCommands {
    pub fn execute(&self) -> Result<()> {
        match self {
            ListCommands::Languages => {
                println!("Embedded languages:");
                for language in wordnum_core::Language::ALL {
                    println!("  {:<4} {}", language.code(), language.name().to_lowercase());
                }
            }
            ListCommands::Formats => {
                println!("Output formats:");
                println!("  text  converted text, unchanged apart from the numbers");
                println!("  json  converted text with every replacement and its offsets");
            }
        }
        Ok(())
    }
}

/// Initialize logging based on verbosity level
pub fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // A second initialization in the same process is not an error
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_debug_format() {
        let list_cmd = Commands::List {
            subcommand: ListCommands::Languages,
        };
        let debug_str = format!("{:?}", list_cmd);
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Languages"));
    }

    #[test]
    fn test_list_commands_execute() {
        assert!(ListCommands::Languages.execute().is_ok());
        assert!(ListCommands::Formats.execute().is_ok());
    }

    #[test]
    fn test_init_logging_twice() {
        init_logging(2, false);
        init_logging(3, false);
        init_logging(0, true);
    }
}
