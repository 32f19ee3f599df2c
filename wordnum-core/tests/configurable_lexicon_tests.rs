//! Tests for lexicons loaded from external TOML files

use std::io::Write;
use std::sync::Arc;

use tempfile::NamedTempFile;
use wordnum_core::{
    language::LexiconConfig, substitute, Config, ConfigurableLexicon, DomainError, Lexicon,
    NumberProcessor,
};

const TEST_LEXICON: &str = r#"
[metadata]
code = "xx"
name = "Test"
aliases = ["testish"]

[numbers]
zero = ["nil"]
hundred = ["hundred"]

[numbers.units]
one = 1
two = 2
three = 3
five = 5

[numbers.teens]
ten = 10
twelve = 12

[numbers.tens]
twenty = 20
thirty = 30

[numbers.scales]
thousand = ["thousand", "grand"]

[ordinals]
suffix_chars = 1
default_endings = "plain"

[ordinals.endings]
plain = ["th", "nd"]

[[ordinals.stems]]
stem = "fif"
cardinal = "five"

[[ordinals.stems]]
stem = "seco"
cardinal = "two"

[markers]
decimal = ["comma"]
decimal_symbol = ","
minus = ["less"]
conjunctions = ["also"]

[rules]
ordinal_threshold = 1
"#;

fn write_lexicon(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn processor(lexicon: ConfigurableLexicon) -> NumberProcessor {
    let config = Config::builder().lexicon(Arc::new(lexicon)).build().unwrap();
    NumberProcessor::with_config(config).unwrap()
}

#[test]
fn test_lexicon_from_file() {
    let file = write_lexicon(TEST_LEXICON);
    let lexicon = ConfigurableLexicon::from_file(file.path(), None).unwrap();

    assert_eq!(lexicon.code(), "xx");
    assert_eq!(lexicon.name(), "Test");
    assert_eq!(lexicon.aliases(), ["testish".to_string()]);
    assert_eq!(lexicon.decimal_symbol(), ',');
    assert_eq!(lexicon.default_ordinal_threshold(), 1);

    let processor = processor(lexicon);
    assert_eq!(
        processor.substitute("thirty two grand also twelve comma nil five"),
        "32000 also 12,05"
    );
    assert_eq!(processor.substitute("less twenty"), "-20");
    assert_eq!(processor.substitute("the fifth and the second"), "the 5h and the 2d");
}

#[test]
fn test_language_code_override() {
    let file = write_lexicon(TEST_LEXICON);
    let lexicon = ConfigurableLexicon::from_file(file.path(), Some("yy")).unwrap();
    assert_eq!(lexicon.code(), "yy");
}

#[test]
fn test_custom_lexicon_wins_over_language() {
    let lexicon = ConfigurableLexicon::from_toml_str(TEST_LEXICON).unwrap();
    let config = Config::builder().lexicon(Arc::new(lexicon)).build().unwrap();

    assert_eq!(
        substitute("one hundred three apples", "ru", &config).unwrap(),
        "103 apples"
    );
}

#[test]
fn test_missing_file() {
    let result = ConfigurableLexicon::from_file(std::path::Path::new("/no/such/lexicon.toml"), None);
    assert!(matches!(result, Err(DomainError::ConfigurationError(_))));
}

#[test]
fn test_malformed_toml() {
    let file = write_lexicon("[metadata\ncode = ");
    let result = ConfigurableLexicon::from_file(file.path(), None);
    assert!(matches!(
        result,
        Err(DomainError::ConfigurationError(msg)) if msg.contains("Failed to parse TOML")
    ));
}

#[test]
fn test_invalid_lexicons_rejected() {
    let cases = [
        TEST_LEXICON.replace("five = 5", "five = 15"),
        TEST_LEXICON.replace("thirty = 30", "thirty = 33"),
        TEST_LEXICON.replace("thousand = [", "myriad = ["),
        TEST_LEXICON.replace("conjunctions = [\"also\"]", "conjunctions = [\"ten\"]"),
        TEST_LEXICON.replace("cardinal = \"five\"", "cardinal = \"seven\""),
        TEST_LEXICON.replace("code = \"xx\"", "code = \"\""),
    ];

    for source in cases {
        let result = ConfigurableLexicon::from_toml_str(&source);
        assert!(
            matches!(result, Err(DomainError::InvalidLexicon(_))),
            "accepted invalid lexicon:\n{source}"
        );
    }
}

#[test]
fn test_config_round_trips_through_toml() {
    let config: LexiconConfig = toml::from_str(TEST_LEXICON).unwrap();
    let rendered = toml::to_string(&config).unwrap();
    let lexicon = ConfigurableLexicon::from_toml_str(&rendered).unwrap();
    assert_eq!(lexicon.code(), "xx");
}
