//! Rounding decision table.
//!
//! The kernel never inspects the rounding mode directly. It classifies the discarded part of an
//! over-precision mantissa and asks [`should_increment`] whether the retained part must be
//! incremented by one unit in the last place.

use crate::defs::{Digit, RoundingMode, Sign, HALF_RADIX};

/// Discarded part of a mantissa relative to half of the unit in the last retained place.
#[derive(Eq, PartialEq, Debug, Copy, Clone)]
pub enum Remainder {
    /// Nothing was discarded, the result is exact.
    Zero,

    /// Discarded part is non-zero and less than half.
    BelowHalf,

    /// Discarded part is exactly half.
    Half,

    /// Discarded part is greater than half.
    AboveHalf,
}

impl Remainder {
    /// Classify the discarded part given its most significant radix digit `first` and
    /// whether any digit below it is non-zero.
    pub fn classify(first: Digit, sticky: bool) -> Self {
        if first > HALF_RADIX || (first == HALF_RADIX && sticky) {
            Remainder::AboveHalf
        } else if first == HALF_RADIX {
            Remainder::Half
        } else if first > 0 || sticky {
            Remainder::BelowHalf
        } else {
            Remainder::Zero
        }
    }

    /// Returns true if the rounding is inexact.
    pub fn is_inexact(&self) -> bool {
        *self != Remainder::Zero
    }
}

/// Decide whether the truncated magnitude must be incremented.
/// `odd` tells whether the last retained decimal digit is odd.
pub fn should_increment(rm: RoundingMode, s: Sign, rem: Remainder, odd: bool) -> bool {
    if rem == Remainder::Zero {
        return false;
    }

    match rm {
        RoundingMode::Down => false,
        RoundingMode::Up => true,
        RoundingMode::Ceil => s.is_positive(),
        RoundingMode::Floor => s.is_negative(),
        RoundingMode::HalfUp => rem != Remainder::BelowHalf,
        RoundingMode::HalfDown => rem == Remainder::AboveHalf,
        RoundingMode::HalfEven => match rem {
            Remainder::AboveHalf => true,
            Remainder::Half => odd,
            _ => false,
        },
        RoundingMode::HalfOdd => match rem {
            Remainder::AboveHalf => true,
            Remainder::Half => !odd,
            _ => false,
        },
    }
}

/// Returns true if a result overflowing the exponent range must be replaced with
/// the largest finite value instead of infinity.
pub fn overflow_to_max(rm: RoundingMode, s: Sign) -> bool {
    match rm {
        RoundingMode::Down => true,
        RoundingMode::Floor => s.is_positive(),
        RoundingMode::Ceil => s.is_negative(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    const ALL_RM: [RoundingMode; 8] = [
        RoundingMode::Down,
        RoundingMode::Up,
        RoundingMode::HalfUp,
        RoundingMode::HalfDown,
        RoundingMode::HalfEven,
        RoundingMode::HalfOdd,
        RoundingMode::Ceil,
        RoundingMode::Floor,
    ];

    #[test]
    fn test_classify() {
        assert_eq!(Remainder::classify(0, false), Remainder::Zero);
        assert_eq!(Remainder::classify(0, true), Remainder::BelowHalf);
        assert_eq!(Remainder::classify(4999, true), Remainder::BelowHalf);
        assert_eq!(Remainder::classify(5000, false), Remainder::Half);
        assert_eq!(Remainder::classify(5000, true), Remainder::AboveHalf);
        assert_eq!(Remainder::classify(5001, false), Remainder::AboveHalf);
        assert_eq!(Remainder::classify(9999, false), Remainder::AboveHalf);
    }

    #[test]
    fn test_exact_never_increments() {
        for rm in ALL_RM {
            for s in [Sign::Pos, Sign::Neg] {
                for odd in [false, true] {
                    assert!(!should_increment(rm, s, Remainder::Zero, odd));
                }
            }
        }
    }

    #[test]
    fn test_decision_table() {
        use Remainder::*;
        use RoundingMode::*;

        // (mode, sign, remainder, odd) -> increment
        let table = [
            (Down, Sign::Pos, AboveHalf, true, false),
            (Down, Sign::Neg, AboveHalf, true, false),
            (Up, Sign::Pos, BelowHalf, false, true),
            (Up, Sign::Neg, BelowHalf, false, true),
            (HalfUp, Sign::Pos, Half, false, true),
            (HalfUp, Sign::Neg, Half, false, true),
            (HalfUp, Sign::Pos, BelowHalf, true, false),
            (HalfDown, Sign::Pos, Half, true, false),
            (HalfDown, Sign::Neg, AboveHalf, false, true),
            (HalfEven, Sign::Pos, Half, false, false),
            (HalfEven, Sign::Pos, Half, true, true),
            (HalfEven, Sign::Neg, Half, true, true),
            (HalfEven, Sign::Pos, BelowHalf, true, false),
            (HalfEven, Sign::Pos, AboveHalf, false, true),
            (HalfOdd, Sign::Pos, Half, false, true),
            (HalfOdd, Sign::Pos, Half, true, false),
            (HalfOdd, Sign::Neg, AboveHalf, true, true),
            (Ceil, Sign::Pos, BelowHalf, false, true),
            (Ceil, Sign::Neg, AboveHalf, false, false),
            (Floor, Sign::Pos, AboveHalf, false, false),
            (Floor, Sign::Neg, BelowHalf, false, true),
        ];

        for (rm, s, rem, odd, expected) in table {
            assert_eq!(
                should_increment(rm, s, rem, odd),
                expected,
                "{rm:?} {s:?} {rem:?} odd={odd}"
            );
        }
    }

    #[test]
    fn test_nearest_modes_ignore_sign() {
        for rm in [
            RoundingMode::HalfUp,
            RoundingMode::HalfDown,
            RoundingMode::HalfEven,
            RoundingMode::HalfOdd,
        ] {
            for rem in [Remainder::BelowHalf, Remainder::Half, Remainder::AboveHalf] {
                for odd in [false, true] {
                    assert_eq!(
                        should_increment(rm, Sign::Pos, rem, odd),
                        should_increment(rm, Sign::Neg, rem, odd)
                    );
                }
            }
        }
    }

    #[test]
    fn test_overflow_to_max() {
        assert!(overflow_to_max(RoundingMode::Down, Sign::Pos));
        assert!(overflow_to_max(RoundingMode::Down, Sign::Neg));
        assert!(overflow_to_max(RoundingMode::Floor, Sign::Pos));
        assert!(!overflow_to_max(RoundingMode::Floor, Sign::Neg));
        assert!(overflow_to_max(RoundingMode::Ceil, Sign::Neg));
        assert!(!overflow_to_max(RoundingMode::Ceil, Sign::Pos));
        assert!(!overflow_to_max(RoundingMode::HalfEven, Sign::Pos));
    }
}
