//! Span builder
//!
//! Wraps the composition automaton with everything that surrounds the digits
//! of a number: sign, leading zeros, decimal fraction, ordinal suffix and the
//! lexicon's contextual rules. Tokens are offered one at a time together with
//! their neighbours; a rejected token leaves the builder unchanged.

use crate::domain::composer::Composer;
use crate::domain::error::Malformation;
use crate::domain::number::{digits_of, DecodedNumber, FractionDigits};
use crate::domain::token::{Cardinal, Sign, Token, TokenKind};
use crate::language::Lexicon;

/// Switches that change how tokens are read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildOptions {
    pub relaxed: bool,
    pub signed: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            relaxed: false,
            signed: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Fraction {
    zeros: usize,
    composer: Composer,
}

/// Accumulates one number expression
pub struct NumberBuilder<'l> {
    lexicon: &'l dyn Lexicon,
    options: BuildOptions,
    sign: Option<Sign>,
    leading_zeros: usize,
    integer: Composer,
    fraction: Option<Fraction>,
    ordinal_suffix: Option<String>,
}

impl<'l> NumberBuilder<'l> {
    pub fn new(lexicon: &'l dyn Lexicon, options: BuildOptions) -> Self {
        Self {
            lexicon,
            options,
            sign: None,
            leading_zeros: 0,
            integer: Composer::new(),
            fraction: None,
            ordinal_suffix: None,
        }
    }

    /// Nothing accepted yet
    pub fn is_empty(&self) -> bool {
        self.sign.is_none()
            && self.leading_zeros == 0
            && self.integer.is_empty()
            && self.fraction.is_none()
    }

    /// An ordinal ended the number
    pub fn is_closed(&self) -> bool {
        self.ordinal_suffix.is_some()
    }

    /// Offer `token` to the builder
    ///
    /// `previous` and `ahead` are the neighbouring tokens inside the same
    /// segment. Returns how many tokens were consumed: 1, or 2 when a relaxed
    /// compound swallowed `ahead`.
    pub fn push(
        &mut self,
        token: &Token,
        previous: Option<&Token>,
        ahead: Option<&Token>,
    ) -> Result<usize, Malformation> {
        if self.is_closed() {
            return Err(Malformation::AfterOrdinal(token.text().to_string()));
        }

        match token.kind() {
            TokenKind::Cardinal(cardinal) => self.push_cardinal(token, cardinal, previous, ahead),
            TokenKind::Ordinal(cardinal) => {
                self.push_ordinal(token, cardinal)?;
                Ok(1)
            }
            TokenKind::Sign(sign) => {
                let nonzero_ahead = matches!(
                    ahead.map(Token::kind),
                    Some(TokenKind::Cardinal(c)) if !c.is_zero()
                );
                if self.options.signed && self.is_empty() && nonzero_ahead {
                    self.sign = Some(sign);
                    Ok(1)
                } else {
                    Err(Malformation::UnexpectedWord(token.text().to_string()))
                }
            }
            TokenKind::DecimalMarker => {
                let cardinal_ahead = matches!(
                    ahead.map(Token::kind),
                    Some(TokenKind::Cardinal(c)) if !c.is_large_scale()
                );
                if self.fraction.is_none() && cardinal_ahead {
                    self.fraction = Some(Fraction::default());
                    Ok(1)
                } else {
                    Err(Malformation::UnexpectedWord(token.text().to_string()))
                }
            }
            TokenKind::Conjunction | TokenKind::Literal | TokenKind::Separator => {
                Err(Malformation::UnexpectedWord(token.text().to_string()))
            }
        }
    }

    fn push_cardinal(
        &mut self,
        token: &Token,
        cardinal: Cardinal,
        previous: Option<&Token>,
        ahead: Option<&Token>,
    ) -> Result<usize, Malformation> {
        // "one" in running text is usually not a number
        if self.is_empty() && self.lexicon.is_never_alone(token.normalized()) {
            let numeric = |t: Option<&Token>| t.is_some_and(Token::is_numeric);
            let only_word = previous.is_none() && ahead.is_none();
            if !numeric(previous) && !numeric(ahead) && !only_word {
                return Err(Malformation::UnexpectedWord(token.text().to_string()));
            }
        }

        if cardinal.is_zero() {
            return self.push_zero();
        }

        // fraction digits are read as one group
        if self.fraction.is_some() && cardinal.is_large_scale() {
            return Err(Malformation::UnexpectedValue(cardinal.value()));
        }

        if self.options.relaxed {
            if let Some(next) = ahead {
                if let Some(compound) =
                    self.lexicon.relaxed_compound(token.normalized(), next.normalized())
                {
                    if self.current_part().accepts(compound) {
                        self.current_part_mut().push(compound)?;
                        return Ok(2);
                    }
                }
            }
        }

        self.current_part_mut().push(cardinal)?;
        Ok(1)
    }

    fn push_zero(&mut self) -> Result<usize, Malformation> {
        match &mut self.fraction {
            Some(fraction) if fraction.composer.is_empty() => fraction.zeros += 1,
            Some(_) => return Err(Malformation::ZeroAfterValue),
            None if self.integer.is_empty() => self.leading_zeros += 1,
            None => return Err(Malformation::ZeroAfterValue),
        }
        Ok(1)
    }

    fn push_ordinal(&mut self, token: &Token, cardinal: Cardinal) -> Result<(), Malformation> {
        if self.fraction.is_some() || cardinal.is_zero() {
            return Err(Malformation::UnexpectedWord(token.text().to_string()));
        }
        self.integer.push(cardinal)?;

        let word = token.normalized();
        let keep = self.lexicon.ordinal_suffix_chars();
        let skip = word.chars().count().saturating_sub(keep);
        self.ordinal_suffix = Some(word.chars().skip(skip).collect());
        Ok(())
    }

    fn current_part(&self) -> &Composer {
        match &self.fraction {
            Some(fraction) => &fraction.composer,
            None => &self.integer,
        }
    }

    fn current_part_mut(&mut self) -> &mut Composer {
        match &mut self.fraction {
            Some(fraction) => &mut fraction.composer,
            None => &mut self.integer,
        }
    }

    /// Read the whole token stream as exactly one number
    pub fn read_all(
        lexicon: &'l dyn Lexicon,
        options: BuildOptions,
        tokens: &[Token],
    ) -> Result<DecodedNumber, Malformation> {
        let mut builder = Self::new(lexicon, options);
        let mut i = 0;
        while i < tokens.len() {
            let previous = i.checked_sub(1).map(|p| &tokens[p]);
            i += builder.push(&tokens[i], previous, tokens.get(i + 1))?;
        }
        builder.finish()
    }

    /// Produce the number read so far
    pub fn finish(self) -> Result<DecodedNumber, Malformation> {
        let integer = if self.integer.is_empty() {
            None
        } else {
            Some(self.integer.value()?)
        };

        let fraction = match self.fraction {
            Some(fraction) => {
                let mut digits: FractionDigits = std::iter::repeat(0).take(fraction.zeros).collect();
                if !fraction.composer.is_empty() {
                    digits.extend(digits_of(fraction.composer.value()?));
                }
                if digits.is_empty() {
                    return Err(Malformation::Incomplete);
                }
                Some(digits)
            }
            None => None,
        };

        if integer.is_none() && fraction.is_none() && self.leading_zeros == 0 {
            return Err(Malformation::Incomplete);
        }

        Ok(DecodedNumber::new(
            self.sign,
            self.leading_zeros,
            integer,
            fraction,
            self.lexicon.decimal_symbol(),
            self.ordinal_suffix,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tokenizer::tokenize;
    use crate::language::get_lexicon;

    fn build(
        text: &str,
        language: &str,
        options: BuildOptions,
    ) -> Result<DecodedNumber, Malformation> {
        let lexicon = get_lexicon(language).unwrap();
        let tokens = tokenize(text, lexicon.as_ref());
        NumberBuilder::read_all(lexicon.as_ref(), options, &tokens)
    }

    fn ru(text: &str) -> Result<DecodedNumber, Malformation> {
        build(text, "ru", BuildOptions::default())
    }

    #[test]
    fn test_sign_needs_nonzero_cardinal_ahead() {
        assert_eq!(ru("минус пятьдесят").unwrap().to_string(), "-50");
        assert!(ru("минус ноль").is_err());
        assert!(build(
            "минус пять",
            "ru",
            BuildOptions {
                signed: false,
                ..BuildOptions::default()
            }
        )
        .is_err());
    }

    #[test]
    fn test_leading_zeros_in_both_parts() {
        assert_eq!(ru("ноль девять").unwrap().to_string(), "09");
        assert_eq!(ru("сто двадцать точка ноль пять").unwrap().to_string(), "120.05");
        assert_eq!(ru("ноль целых пятнадцать").unwrap().to_string(), "0.15");
        assert_eq!(ru("пять ноль"), Err(Malformation::ZeroAfterValue));
    }

    #[test]
    fn test_decimal_marker_needs_cardinal_ahead() {
        assert!(ru("пять точка").is_err());
        assert!(ru("пять точка шесть точка семь").is_err());
    }

    #[test]
    fn test_fraction_rejects_large_scales() {
        assert!(ru("пять точка тысяча").is_err());
        assert_eq!(
            ru("пять точка две тысячи"),
            Err(Malformation::UnexpectedValue(1000))
        );
        assert_eq!(ru("пять точка сто два").unwrap().to_string(), "5.102");
    }

    #[test]
    fn test_ordinal_closes_number() {
        let number = ru("двадцать второе").unwrap();
        assert_eq!(number.to_string(), "22ое");
        assert_eq!(
            ru("первый второй"),
            Err(Malformation::AfterOrdinal("второй".to_string()))
        );
    }

    #[test]
    fn test_never_alone_word() {
        let en = |text: &str| build(text, "en", BuildOptions::default());
        assert!(en("one").is_ok());
        assert!(en("twenty one").is_ok());
        assert!(en("one of").is_err());
    }

    #[test]
    fn test_relaxed_compound_swallows_next_word() {
        let relaxed = BuildOptions {
            relaxed: true,
            ..BuildOptions::default()
        };
        assert_eq!(
            build("four score", "en", relaxed).unwrap().to_string(),
            "80"
        );
        assert!(build("four score", "en", BuildOptions::default()).is_err());
    }

    #[test]
    fn test_sign_only_is_incomplete() {
        let lexicon = get_lexicon("ru").unwrap();
        let tokens = tokenize("плюс пять", lexicon.as_ref());
        let mut builder = NumberBuilder::new(lexicon.as_ref(), BuildOptions::default());
        builder.push(&tokens[0], None, tokens.get(1)).unwrap();
        assert_eq!(builder.finish(), Err(Malformation::Incomplete));
    }
}
