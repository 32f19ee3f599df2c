//! Text to token stream
//!
//! Words are maximal runs of letters, marks and digits, optionally joined by
//! an inner hyphen or apostrophe. Runs of sentence punctuation become
//! separators, and so does any other non-whitespace gap between two words
//! (dashes, slashes, quotes, symbols). A number never spans a separator.

use std::ops::Range;
use std::sync::OnceLock;

use regex::Regex;

use crate::domain::token::{Token, TokenKind};
use crate::language::Lexicon;

static TOKEN_PATTERN: OnceLock<Regex> = OnceLock::new();

fn token_pattern() -> &'static Regex {
    TOKEN_PATTERN.get_or_init(|| {
        Regex::new(
            r"(?P<word>[\p{L}\p{M}\p{N}]+(?:['’\-][\p{L}\p{M}\p{N}]+)*)|(?P<brk>[.,;:!?…()\[\]]+)",
        )
        .expect("token pattern is a valid regex")
    })
}

/// A raw word or punctuation run before classification
struct Piece<'t> {
    text: &'t str,
    start: usize,
    is_break: bool,
}

/// Split `text` into classified tokens
pub fn tokenize(text: &str, lexicon: &dyn Lexicon) -> Vec<Token> {
    let pieces: Vec<Piece<'_>> = token_pattern()
        .captures_iter(text)
        .filter_map(|caps| {
            if let Some(m) = caps.name("word") {
                Some(Piece {
                    text: m.as_str(),
                    start: m.start(),
                    is_break: false,
                })
            } else {
                caps.name("brk").map(|m| Piece {
                    text: m.as_str(),
                    start: m.start(),
                    is_break: true,
                })
            }
        })
        .collect();

    let normalized: Vec<String> = pieces.iter().map(|p| p.text.to_lowercase()).collect();
    let max_phrase = lexicon.max_phrase_words();

    let mut tokens = Vec::with_capacity(pieces.len());
    let mut word_end: Option<usize> = None;
    let mut i = 0;
    while i < pieces.len() {
        let piece = &pieces[i];
        let end = piece.start + piece.text.len();

        if piece.is_break {
            tokens.push(Token::new(
                TokenKind::Separator,
                piece.text,
                normalized[i].clone(),
                piece.start..end,
            ));
            word_end = None;
            i += 1;
            continue;
        }

        if let Some(previous) = word_end {
            tokens.extend(gap_separator(text, previous..piece.start));
        }

        if max_phrase > 1 {
            let window = phrase_window(text, &pieces, &normalized, i, max_phrase);
            if window.len() > 1 {
                if let Some((count, kind)) = lexicon.longest_phrase(&window) {
                    let last = &pieces[i + count - 1];
                    let span = piece.start..last.start + last.text.len();
                    let surface = &text[span.clone()];
                    word_end = Some(span.end);
                    tokens.push(Token::new(kind, surface, window[..count].join(" "), span));
                    i += count;
                    continue;
                }
            }
        }

        let kind = lexicon.classify(&normalized[i]);
        tokens.push(Token::new(kind, piece.text, normalized[i].clone(), piece.start..end));
        word_end = Some(end);
        i += 1;
    }

    tokens
}

/// Separator for the symbols between two words, if the gap is not blank
fn gap_separator(text: &str, gap: Range<usize>) -> Option<Token> {
    let raw = &text[gap.clone()];
    let symbols = raw.trim();
    if symbols.is_empty() {
        return None;
    }

    let start = gap.start + (raw.len() - raw.trim_start().len());
    let span = start..start + symbols.len();
    Some(Token::new(TokenKind::Separator, symbols, symbols.to_string(), span))
}

/// Words starting at `first` that are separated by whitespace only
fn phrase_window<'a>(
    text: &str,
    pieces: &[Piece<'_>],
    normalized: &'a [String],
    first: usize,
    max_words: usize,
) -> Vec<&'a str> {
    let mut window = vec![normalized[first].as_str()];
    let mut previous_end = pieces[first].start + pieces[first].text.len();

    for (offset, piece) in pieces.iter().enumerate().skip(first + 1).take(max_words - 1) {
        if piece.is_break || !text[previous_end..piece.start].chars().all(char::is_whitespace) {
            break;
        }
        window.push(normalized[offset].as_str());
        previous_end = piece.start + piece.text.len();
    }

    window
}
