//! Number composition automaton
//!
//! Folds cardinal words into a value in a single left-to-right pass. The
//! accumulator keeps the value of the current group (everything below the
//! next scale word) apart from the sum of completed groups, and remembers the
//! class of the last word so it knows what the group may take next.
//!
//! Zero never enters the composer: leading zeros are counted by the number
//! builder, and a zero reaching [`Composer::push`] is always malformed.

use crate::domain::error::Malformation;
use crate::domain::token::{Cardinal, Scale};

/// Accumulator for one integer (or one fractional part)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Composer {
    /// Sum of groups already multiplied by a scale of a thousand or more
    total: u64,
    /// Value collected since the last large scale
    group: u64,
    /// Last word of the current group, `None` when the group is empty
    last: Option<Cardinal>,
    /// Smallest large scale consumed so far
    last_scale: Option<Scale>,
}

impl Composer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nothing has been pushed yet
    pub fn is_empty(&self) -> bool {
        self.total == 0 && self.last.is_none() && self.last_scale.is_none()
    }

    /// Whether `cardinal` would be accepted in the current state
    pub fn accepts(&self, cardinal: Cardinal) -> bool {
        let mut probe = *self;
        probe.push(cardinal).is_ok()
    }

    /// Consume one cardinal word. The state is left untouched on error.
    pub fn push(&mut self, cardinal: Cardinal) -> Result<(), Malformation> {
        if cardinal.is_zero() {
            return Err(Malformation::ZeroAfterValue);
        }

        match cardinal {
            Cardinal::Scale(scale) if scale > Scale::Hundred => self.push_scale(scale),
            _ => {
                let group = self.extend_group(cardinal)?;
                self.group = group;
                self.last = Some(cardinal);
                Ok(())
            }
        }
    }

    /// Final integer value
    pub fn value(&self) -> Result<u64, Malformation> {
        self.total
            .checked_add(self.group)
            .ok_or(Malformation::Overflow)
    }

    fn extend_group(&self, cardinal: Cardinal) -> Result<u64, Malformation> {
        let misplaced = Malformation::UnexpectedValue(cardinal.value());
        let group = self.group;

        match (self.last, cardinal) {
            (None, Cardinal::Digit(v)) | (None, Cardinal::Ten(v)) | (None, Cardinal::Compound(v)) => {
                Ok(v as u64)
            }
            (None, Cardinal::Hundreds(v)) => Ok(v as u64),
            (None, Cardinal::Scale(_)) => Ok(100),

            // "пять сотен", "twelve hundred"
            (Some(Cardinal::Digit(_)), Cardinal::Scale(Scale::Hundred)) if group < 20 => {
                group.checked_mul(100).ok_or(Malformation::Overflow)
            }

            // "двадцать пять"
            (Some(Cardinal::Ten(_)), Cardinal::Digit(v)) if (1..=9).contains(&v) => {
                Ok(group + v as u64)
            }

            // "сто двадцать", "двести пять"
            (Some(Cardinal::Scale(Scale::Hundred)), next) | (Some(Cardinal::Hundreds(_)), next) => {
                match next {
                    Cardinal::Digit(v) | Cardinal::Ten(v) | Cardinal::Compound(v) => {
                        Ok(group + v as u64)
                    }
                    _ => Err(misplaced),
                }
            }

            _ => Err(misplaced),
        }
    }

    fn push_scale(&mut self, scale: Scale) -> Result<(), Malformation> {
        if let Some(previous) = self.last_scale {
            if scale == previous {
                return Err(Malformation::DuplicateScale(scale));
            }
            if scale > previous {
                return Err(Malformation::ScaleOrder(scale));
            }
        }
        if self.group > 999 {
            return Err(Malformation::GroupOverflow(self.group));
        }

        let total = self
            .group
            .max(1)
            .checked_mul(scale.value())
            .and_then(|value| self.total.checked_add(value))
            .ok_or(Malformation::Overflow)?;

        self.total = total;
        self.group = 0;
        self.last = None;
        self.last_scale = Some(scale);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compose(words: &[Cardinal]) -> Result<u64, Malformation> {
        let mut composer = Composer::new();
        for &word in words {
            composer.push(word)?;
        }
        composer.value()
    }

    const THOUSAND: Cardinal = Cardinal::Scale(Scale::Thousand);
    const MILLION: Cardinal = Cardinal::Scale(Scale::Million);
    const HUNDRED: Cardinal = Cardinal::Scale(Scale::Hundred);

    #[test]
    fn test_ten_and_unit() {
        assert_eq!(compose(&[Cardinal::Ten(20), Cardinal::Digit(5)]), Ok(25));
    }

    #[test]
    fn test_hundred_multiplies_small_group() {
        assert_eq!(compose(&[Cardinal::Digit(12), HUNDRED]), Ok(1200));
        assert_eq!(compose(&[Cardinal::Digit(5), HUNDRED]), Ok(500));
        assert_eq!(compose(&[HUNDRED]), Ok(100));
    }

    #[test]
    fn test_full_number() {
        // одна тысяча девятьсот двадцать
        let words = [
            Cardinal::Digit(1),
            THOUSAND,
            Cardinal::Hundreds(900),
            Cardinal::Ten(20),
        ];
        assert_eq!(compose(&words), Ok(1920));
    }

    #[test]
    fn test_empty_group_before_scale_counts_as_one() {
        assert_eq!(compose(&[THOUSAND]), Ok(1000));
        assert_eq!(compose(&[MILLION, THOUSAND]), Ok(1_001_000));
    }

    #[test]
    fn test_scale_order_is_enforced() {
        assert_eq!(
            compose(&[THOUSAND, THOUSAND, Cardinal::Hundreds(200)]),
            Err(Malformation::DuplicateScale(Scale::Thousand))
        );
        assert_eq!(
            compose(&[Cardinal::Digit(5), THOUSAND, Cardinal::Digit(2), MILLION]),
            Err(Malformation::ScaleOrder(Scale::Million))
        );
    }

    #[test]
    fn test_tens_do_not_chain() {
        assert_eq!(
            compose(&[Cardinal::Ten(60), Cardinal::Ten(50)]),
            Err(Malformation::UnexpectedValue(50))
        );
        assert_eq!(
            compose(&[Cardinal::Ten(60), HUNDRED]),
            Err(Malformation::UnexpectedValue(100))
        );
    }

    #[test]
    fn test_zero_is_always_rejected() {
        assert_eq!(
            compose(&[Cardinal::Digit(5), Cardinal::Digit(0)]),
            Err(Malformation::ZeroAfterValue)
        );
    }

    #[test]
    fn test_group_overflow_before_scale() {
        assert_eq!(
            compose(&[Cardinal::Digit(12), HUNDRED, THOUSAND]),
            Err(Malformation::GroupOverflow(1200))
        );
    }

    #[test]
    fn test_failed_push_keeps_state() {
        let mut composer = Composer::new();
        composer.push(Cardinal::Ten(40)).unwrap();
        let before = composer;
        assert!(composer.push(Cardinal::Ten(30)).is_err());
        assert_eq!(composer, before);
        assert!(composer.accepts(Cardinal::Digit(2)));
        assert!(!composer.accepts(Cardinal::Digit(12)));
    }

    #[test]
    fn test_compound_closes_group() {
        assert_eq!(
            compose(&[Cardinal::Compound(21), Cardinal::Digit(3)]),
            Err(Malformation::UnexpectedValue(3))
        );
        assert_eq!(compose(&[HUNDRED, Cardinal::Compound(21)]), Ok(121));
        assert_eq!(compose(&[Cardinal::Compound(21), THOUSAND]), Ok(21_000));
    }

    #[test]
    fn test_largest_scale() {
        let words = [Cardinal::Hundreds(900), Cardinal::Scale(Scale::Trillion)];
        assert_eq!(compose(&words), Ok(900_000_000_000_000));
    }
}
