//! wordnum: convert spelled-out numbers to digits

use anyhow::Result;
use clap::Parser;
use wordnum_cli::commands::Commands;

/// Convert spelled-out numbers in text to digits
#[derive(Debug, Parser)]
#[command(name = "wordnum", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert(args) => args.execute(),
        Commands::Decode(args) => args.execute(),
        Commands::List { subcommand } => subcommand.execute(),
        Commands::Validate(args) => args.execute(),
        Commands::GenerateConfig(args) => args.execute(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_convert() {
        let cli = Cli::try_parse_from([
            "wordnum",
            "convert",
            "-i",
            "a.txt",
            "--ordinal-threshold",
            "0",
            "-f",
            "json",
        ])
        .unwrap();
        match cli.command {
            Commands::Convert(args) => {
                assert_eq!(args.input, ["a.txt"]);
                assert_eq!(args.ordinal_threshold, Some(0));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_language_code_requires_lexicon() {
        assert!(Cli::try_parse_from(["wordnum", "convert", "--language-code", "xx"]).is_err());
    }
}
