//! Span scanner and substitution
//!
//! Splits the token stream into segments at separators, runs a
//! [`NumberBuilder`] over each segment and records every completed number
//! together with the byte range of the words it consumed. A rejected token
//! closes the running number and is then offered to a fresh builder, so it
//! may start the next one. Ordinals are the exception: one that a running
//! number rejects, or one right after digits, is a fraction denominator and
//! stays as written.

use std::ops::Range;

use crate::domain::builder::{BuildOptions, NumberBuilder};
use crate::domain::error::Malformation;
use crate::domain::number::DecodedNumber;
use crate::domain::token::{Token, TokenKind};
use crate::domain::tokenizer::tokenize;
use crate::language::Lexicon;

/// Scanner settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    pub build: BuildOptions,
    /// Ordinals below this value stay as words
    pub ordinal_threshold: u64,
}

/// A number found in the text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberMatch {
    /// Byte range of the consumed words in the source text
    pub span: Range<usize>,
    pub number: DecodedNumber,
}

/// Finds number expressions in free text
pub struct Scanner<'l> {
    lexicon: &'l dyn Lexicon,
    options: ScanOptions,
}

/// Builder plus the byte range it has consumed
struct Pending<'l> {
    builder: NumberBuilder<'l>,
    span: Option<Range<usize>>,
}

impl<'l> Pending<'l> {
    fn new(lexicon: &'l dyn Lexicon, options: BuildOptions) -> Self {
        Self {
            builder: NumberBuilder::new(lexicon, options),
            span: None,
        }
    }

    fn extend(&mut self, tokens: &[Token]) {
        let (Some(first), Some(last)) = (tokens.first(), tokens.last()) else {
            return;
        };
        let start = self.span.as_ref().map_or(first.start(), |span| span.start);
        self.span = Some(start..last.end());
    }
}

impl<'l> Scanner<'l> {
    pub fn new(lexicon: &'l dyn Lexicon, options: ScanOptions) -> Self {
        Self { lexicon, options }
    }

    /// Every number in `text`, in order of appearance
    pub fn scan(&self, text: &str) -> Vec<NumberMatch> {
        let tokens = tokenize(text, self.lexicon);
        let mut matches = Vec::new();

        for segment in tokens.split(Token::is_separator) {
            self.scan_segment(text, segment, &mut matches);
        }

        matches
    }

    /// `text` with every number replaced by its digits
    pub fn substitute(&self, text: &str) -> String {
        let matches = self.scan(text);
        reassemble(text, &matches)
    }

    fn scan_segment(&self, text: &str, segment: &[Token], matches: &mut Vec<NumberMatch>) {
        let mut pending = Pending::new(self.lexicon, self.options.build);
        let mut i = 0;

        while i < segment.len() {
            let previous = i.checked_sub(1).map(|p| &segment[p]);
            let ahead = segment.get(i + 1);

            if is_ordinal(&segment[i])
                && pending.builder.is_empty()
                && previous.is_some_and(Token::is_digits)
            {
                i += 1;
                continue;
            }

            match pending.builder.push(&segment[i], previous, ahead) {
                Ok(consumed) => {
                    pending.extend(&segment[i..i + consumed]);
                    i += consumed;
                }
                Err(reason) => {
                    let running = !pending.builder.is_empty() && !pending.builder.is_closed();
                    if !pending.builder.is_empty() {
                        log::trace!("'{}' ends a number: {reason}", segment[i].text());
                    }
                    let finished = std::mem::replace(
                        &mut pending,
                        Pending::new(self.lexicon, self.options.build),
                    );
                    self.emit(text, finished, matches);

                    // "пять десятых": a fraction denominator stays a word
                    if running && is_ordinal(&segment[i]) {
                        i += 1;
                        continue;
                    }

                    match pending.builder.push(&segment[i], previous, ahead) {
                        Ok(consumed) => {
                            pending.extend(&segment[i..i + consumed]);
                            i += consumed;
                        }
                        Err(_) => i += 1,
                    }
                }
            }
        }

        self.emit(text, pending, matches);
    }

    fn emit(&self, text: &str, pending: Pending<'_>, matches: &mut Vec<NumberMatch>) {
        let Some(span) = pending.span else {
            return;
        };

        match pending.builder.finish() {
            Ok(number) => {
                if number.is_ordinal() && number.value() < self.options.ordinal_threshold {
                    log::trace!(
                        "ordinal '{}' below threshold {}",
                        &text[span.clone()],
                        self.options.ordinal_threshold
                    );
                    return;
                }
                matches.push(NumberMatch { span, number });
            }
            Err(reason) => log_rejected(&text[span], &reason),
        }
    }
}

fn is_ordinal(token: &Token) -> bool {
    matches!(token.kind(), TokenKind::Ordinal(_))
}

fn log_rejected(words: &str, reason: &Malformation) {
    log::trace!("'{words}' left as written: {reason}");
}

/// Replace each match's byte range by its rendering, copying everything else
pub fn reassemble(text: &str, matches: &[NumberMatch]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;

    for m in matches {
        out.push_str(&text[cursor..m.span.start]);
        out.push_str(&m.number.to_string());
        cursor = m.span.end;
    }
    out.push_str(&text[cursor..]);

    out
}

/// Whether any token of the stream can belong to a number
pub(crate) fn has_number_words(tokens: &[Token]) -> bool {
    tokens
        .iter()
        .any(|t| matches!(t.kind(), TokenKind::Cardinal(_) | TokenKind::Ordinal(_)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::get_lexicon;

    fn options(threshold: u64) -> ScanOptions {
        ScanOptions {
            build: BuildOptions::default(),
            ordinal_threshold: threshold,
        }
    }

    fn substitute(text: &str, threshold: u64) -> String {
        let lexicon = get_lexicon("ru").unwrap();
        Scanner::new(lexicon.as_ref(), options(threshold)).substitute(text)
    }

    #[test]
    fn test_rejected_token_starts_next_number() {
        assert_eq!(substitute("один два три", 4), "1 2 3");
        assert_eq!(substitute("шестьдесят пятьдесят", 4), "60 50");
        assert_eq!(substitute("пять ноль", 4), "5 0");
    }

    #[test]
    fn test_conjunction_splits_numbers() {
        assert_eq!(
            substitute("пятьдесят, шестьдесят, тридцать и одиннадцать", 4),
            "50, 60, 30 и 11"
        );
    }

    #[test]
    fn test_ordinal_threshold() {
        assert_eq!(substitute("первый", 4), "первый");
        assert_eq!(substitute("первый", 0), "1ый");
        assert_eq!(substitute("четвёртый", 4), "4ый");
        assert_eq!(substitute("двадцать первый", 4), "21ый");
    }

    #[test]
    fn test_scan_reports_spans() {
        let lexicon = get_lexicon("ru").unwrap();
        let text = "Было двадцать пять коров";
        let matches = Scanner::new(lexicon.as_ref(), options(4)).scan(text);

        assert_eq!(matches.len(), 1);
        assert_eq!(&text[matches[0].span.clone()], "двадцать пять");
        assert_eq!(matches[0].number.value(), 25);
    }

    #[test]
    fn test_text_without_numbers_is_unchanged() {
        let text = "Просто текст, без чисел!  ";
        assert_eq!(substitute(text, 4), text);
    }

    #[test]
    fn test_rejected_ordinal_stays_word() {
        assert_eq!(substitute("ноль целых пять десятых", 4), "0.5 десятых");
        assert_eq!(substitute("три пятых пути", 4), "3 пятых пути");
        assert_eq!(substitute("первый второй", 0), "1ый 2ой");
        assert_eq!(substitute("0.5 десятых", 4), "0.5 десятых");
        assert_eq!(substitute("3 пятых", 4), substitute("три пятых", 4));
    }

    #[test]
    fn test_symbols_between_words_split_numbers() {
        assert_eq!(substitute("двадцать — пять", 4), "20 — 5");
        assert_eq!(substitute("сто % двадцать", 4), "100 % 20");
    }

    #[test]
    fn test_dangling_sign_stays() {
        assert_eq!(substitute("минус, пять", 4), "минус, 5");
    }
}
