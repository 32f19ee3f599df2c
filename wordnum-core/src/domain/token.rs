//! Token model shared by the tokenizer, the composer and the scanner
//!
//! Every word of the input becomes a [`Token`] whose [`TokenKind`] is the
//! lexicon's classification of the lower-cased word. The kinds form a closed
//! set so every consumer matches them exhaustively.

use serde::Serialize;
use std::fmt;
use std::ops::Range;

/// Multiplier words
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Scale {
    Hundred,
    Thousand,
    Million,
    Billion,
    Trillion,
}

impl Scale {
    /// Numeric value of the multiplier
    pub const fn value(self) -> u64 {
        match self {
            Scale::Hundred => 100,
            Scale::Thousand => 1_000,
            Scale::Million => 1_000_000,
            Scale::Billion => 1_000_000_000,
            Scale::Trillion => 1_000_000_000_000,
        }
    }

    /// Lookup by the names used in lexicon files
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "hundred" => Some(Scale::Hundred),
            "thousand" => Some(Scale::Thousand),
            "million" => Some(Scale::Million),
            "billion" => Some(Scale::Billion),
            "trillion" => Some(Scale::Trillion),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Scale::Hundred => "hundred",
            Scale::Thousand => "thousand",
            Scale::Million => "million",
            Scale::Billion => "billion",
            Scale::Trillion => "trillion",
        }
    }
}

/// The numeric meaning of a cardinal number word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cardinal {
    /// 0 to 19
    Digit(u8),
    /// 20, 30, ..., 90
    Ten(u8),
    /// 200, 300, ..., 900 spelled as a single word
    Hundreds(u16),
    /// 21 to 99 spelled as a single hyphenated word
    Compound(u8),
    /// hundred, thousand, million, billion, trillion
    Scale(Scale),
}

impl Cardinal {
    /// Value contributed by the word on its own
    pub const fn value(self) -> u64 {
        match self {
            Cardinal::Digit(v) | Cardinal::Ten(v) | Cardinal::Compound(v) => v as u64,
            Cardinal::Hundreds(v) => v as u64,
            Cardinal::Scale(scale) => scale.value(),
        }
    }

    pub const fn is_zero(self) -> bool {
        matches!(self, Cardinal::Digit(0))
    }

    /// Thousand and above: multiplies whole groups
    pub fn is_large_scale(self) -> bool {
        matches!(self, Cardinal::Scale(scale) if scale > Scale::Hundred)
    }
}

/// Sign words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sign {
    Plus,
    Minus,
}

impl Sign {
    pub const fn symbol(self) -> char {
        match self {
            Sign::Plus => '+',
            Sign::Minus => '-',
        }
    }
}

/// Classification of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Cardinal number word ("пять", "тысяча")
    Cardinal(Cardinal),
    /// Ordinal form carrying the cardinal it is built on ("пятый")
    Ordinal(Cardinal),
    /// Decimal separator word ("точка", "целых", "point")
    DecimalMarker,
    /// "плюс" / "минус"
    Sign(Sign),
    /// "и", "and"
    Conjunction,
    /// Any other word
    Literal,
    /// A run of punctuation; numbers never cross it
    Separator,
}

impl TokenKind {
    /// Whether the kind counts as a number word for neighbour checks
    pub const fn is_numeric(self) -> bool {
        matches!(self, TokenKind::Cardinal(_))
    }
}

/// A classified piece of the input text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    text: String,
    normalized: String,
    span: Range<usize>,
}

impl Token {
    pub fn new(kind: TokenKind, text: &str, normalized: String, span: Range<usize>) -> Self {
        Self {
            kind,
            text: text.to_string(),
            normalized,
            span,
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Surface text as written in the input
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Lower-cased form used for lexicon lookups
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Byte range in the input
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    pub fn start(&self) -> usize {
        self.span.start
    }

    pub fn end(&self) -> usize {
        self.span.end
    }

    pub fn is_separator(&self) -> bool {
        self.kind == TokenKind::Separator
    }

    pub fn is_numeric(&self) -> bool {
        self.kind.is_numeric()
    }

    /// A number already written in digits ("25")
    pub fn is_digits(&self) -> bool {
        !self.text.is_empty() && self.text.bytes().all(|b| b.is_ascii_digit())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
