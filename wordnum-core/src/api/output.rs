//! Output types for the API

use std::time::Duration;

use serde::Serialize;

use crate::domain::scanner::NumberMatch;
use crate::domain::DecodedNumber;

/// Result of processing one input
#[derive(Debug, Clone, Serialize)]
pub struct Output {
    /// Text with numbers substituted
    pub text: String,
    /// Every substitution, in order of appearance
    pub replacements: Vec<Replacement>,
    pub metadata: ProcessingMetadata,
}

/// One substituted number
#[derive(Debug, Clone, Serialize)]
pub struct Replacement {
    /// Byte offset in the original text
    pub offset: usize,
    /// Character offset in the original text
    pub char_offset: usize,
    /// Words as written
    pub original: String,
    /// Digits written in their place
    pub rendered: String,
    pub number: DecodedNumber,
}

/// Metadata about the processing
#[derive(Debug, Clone, Serialize)]
pub struct ProcessingMetadata {
    #[serde(serialize_with = "serialize_duration")]
    pub duration: Duration,
    /// Lexicon code used
    pub language: String,
    pub stats: ProcessingStats,
}

/// Additional processing statistics
#[derive(Debug, Clone, Serialize)]
pub struct ProcessingStats {
    pub bytes_processed: usize,
    pub chars_processed: usize,
    pub numbers_found: usize,
}

fn serialize_duration<S: serde::Serializer>(
    duration: &Duration,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64() * 1000.0)
}

impl Output {
    pub(crate) fn from_matches(
        source: &str,
        text: String,
        matches: Vec<NumberMatch>,
        language: &str,
        duration: Duration,
    ) -> Self {
        let offsets: Vec<usize> = matches.iter().map(|m| m.span.start).collect();
        let char_offsets = Self::calculate_char_offsets(source, &offsets);

        let replacements: Vec<Replacement> = matches
            .into_iter()
            .zip(char_offsets)
            .map(|(m, char_offset)| Replacement {
                offset: m.span.start,
                char_offset,
                original: source[m.span.clone()].to_string(),
                rendered: m.number.to_string(),
                number: m.number,
            })
            .collect();

        Self {
            text,
            metadata: ProcessingMetadata {
                duration,
                language: language.to_string(),
                stats: ProcessingStats {
                    bytes_processed: source.len(),
                    chars_processed: source.chars().count(),
                    numbers_found: replacements.len(),
                },
            },
            replacements,
        }
    }

    /// Character offsets of ascending byte offsets
    fn calculate_char_offsets(text: &str, byte_offsets: &[usize]) -> Vec<usize> {
        let mut char_offsets = Vec::with_capacity(byte_offsets.len());
        let mut targets = byte_offsets.iter().peekable();

        for (char_index, (byte_index, _)) in text.char_indices().enumerate() {
            while targets.next_if(|&&target| target == byte_index).is_some() {
                char_offsets.push(char_index);
            }
            if targets.peek().is_none() {
                break;
            }
        }

        let total = text.chars().count();
        char_offsets.extend(targets.map(|_| total));
        char_offsets
    }
}
