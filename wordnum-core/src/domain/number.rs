//! Decoded number value and its digit rendering

use std::fmt;

use serde::Serialize;
use smallvec::SmallVec;

use crate::domain::token::Sign;

/// Fractional digits, stored literally so leading zeros survive
pub type FractionDigits = SmallVec<[u8; 8]>;

/// A number read from words
///
/// `Display` renders the form used for substitution: sign, leading zeros,
/// integer digits, decimal symbol with fractional digits and the ordinal
/// suffix. [`DecodedNumber::canonical`] drops the leading zeros.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedNumber {
    sign: Option<Sign>,
    leading_zeros: usize,
    integer: Option<u64>,
    fraction: Option<FractionDigits>,
    decimal_symbol: char,
    ordinal_suffix: Option<String>,
}

impl DecodedNumber {
    pub(crate) fn new(
        sign: Option<Sign>,
        leading_zeros: usize,
        integer: Option<u64>,
        fraction: Option<FractionDigits>,
        decimal_symbol: char,
        ordinal_suffix: Option<String>,
    ) -> Self {
        Self {
            sign,
            leading_zeros,
            integer,
            fraction,
            decimal_symbol,
            ordinal_suffix,
        }
    }

    /// Integer value; a number made only of zeros is 0
    pub fn value(&self) -> u64 {
        self.integer.unwrap_or(0)
    }

    /// Integer part, `None` when only zeros or a bare fraction were spoken
    pub fn integer_part(&self) -> Option<u64> {
        self.integer
    }

    pub fn fractional_digits(&self) -> Option<&[u8]> {
        self.fraction.as_deref()
    }

    pub fn sign(&self) -> Option<Sign> {
        self.sign
    }

    pub fn leading_zeros(&self) -> usize {
        self.leading_zeros
    }

    pub fn ordinal_suffix(&self) -> Option<&str> {
        self.ordinal_suffix.as_deref()
    }

    pub fn is_ordinal(&self) -> bool {
        self.ordinal_suffix.is_some()
    }

    pub fn is_decimal(&self) -> bool {
        self.fraction.is_some()
    }

    pub fn is_negative(&self) -> bool {
        self.sign == Some(Sign::Minus)
    }

    /// Signed integer value, `None` when it does not fit or a fraction is present
    pub fn as_i64(&self) -> Option<i64> {
        if self.is_decimal() {
            return None;
        }
        let magnitude = i64::try_from(self.value()).ok()?;
        Some(if self.is_negative() {
            -magnitude
        } else {
            magnitude
        })
    }

    /// Approximate floating point value including the fraction
    pub fn to_f64(&self) -> f64 {
        let mut value = self.value() as f64;
        if let Some(digits) = &self.fraction {
            let mut scale = 0.1;
            for &digit in digits {
                value += digit as f64 * scale;
                scale /= 10.0;
            }
        }
        if self.is_negative() {
            -value
        } else {
            value
        }
    }

    /// Rendering without leading zeros
    pub fn canonical(&self) -> String {
        let mut out = String::new();
        self.render(&mut out, false);
        out
    }

    fn render(&self, out: &mut String, with_leading_zeros: bool) {
        if let Some(sign) = self.sign {
            out.push(sign.symbol());
        }

        if with_leading_zeros {
            out.extend(std::iter::repeat('0').take(self.leading_zeros));
        }

        match self.integer {
            Some(value) => out.push_str(&value.to_string()),
            None if !with_leading_zeros || self.leading_zeros == 0 => out.push('0'),
            None => {}
        }

        if let Some(digits) = &self.fraction {
            out.push(self.decimal_symbol);
            out.extend(digits.iter().map(|&d| char::from(b'0' + d)));
        }

        if let Some(suffix) = &self.ordinal_suffix {
            out.push_str(suffix);
        }
    }
}

impl fmt::Display for DecodedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.render(&mut out, true);
        f.write_str(&out)
    }
}

/// Literal digits of `value`, most significant first
pub(crate) fn digits_of(value: u64) -> FractionDigits {
    value.to_string().bytes().map(|b| b - b'0').collect()
}
