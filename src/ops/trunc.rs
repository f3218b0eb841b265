//! Rounding to an integral value.

use crate::common::buf::DigitBuf;
use crate::common::int;
use crate::defs::Kind;
use crate::defs::RoundingMode;
use crate::defs::HALF_RADIX;
use crate::defs::FLAG_INEXACT;
use crate::num::Dfp;
use crate::rounding::should_increment;
use crate::rounding::Remainder;

impl Dfp {
    /// Returns the largest integral value not greater than the number.
    pub fn floor(&self) -> Self {
        self.trunc(RoundingMode::Floor)
    }

    /// Returns the smallest integral value not less than the number.
    pub fn ceil(&self) -> Self {
        self.trunc(RoundingMode::Ceil)
    }

    /// Returns the integral value nearest to the number, ties to even.
    pub fn rint(&self) -> Self {
        self.trunc(RoundingMode::HalfEven)
    }

    /// Returns the number rounded with `rint` and saturated to the `i32` range.
    /// `NaN` gives 0.
    pub fn int_value(&self) -> i32 {
        if self.is_nan() {
            return 0;
        }

        let r = self.rint();
        let v = match r.kind() {
            Kind::Finite => {
                let n = r.mantissa().len();
                let e = r.exponent_radix() as usize;
                if e > 3 {
                    i64::MAX
                } else {
                    r.mantissa()[n - e..].iter().rev().fold(0i64, |acc, d| acc * 10000 + *d as i64)
                }
            }
            Kind::Infinite => i64::MAX,
            _ => 0,
        };

        let v = if r.sign().is_negative() { -v } else { v };
        v.clamp(i32::MIN as i64, i32::MAX as i64) as i32
    }

    fn trunc(&self, rm: RoundingMode) -> Self {
        if let Some(nan) = self.nan_self() {
            return nan;
        }

        if self.kind() != Kind::Finite {
            return self.clone();
        }

        let field = self.field();
        let s = self.sign();
        let m = self.mantissa();
        let n = m.len();
        let e = self.exponent_radix() as i64;

        if e >= n as i64 {
            return self.clone();
        }

        if e <= 0 {
            // |x| < 1
            field.set_flags_bits(FLAG_INEXACT);
            let away = match rm {
                RoundingMode::Floor => s.is_negative(),
                RoundingMode::Ceil => s.is_positive(),
                _ => {
                    e == 0
                        && (m[n - 1] > HALF_RADIX
                            || (m[n - 1] == HALF_RADIX && !int::is_zero(&m[..n - 1])))
                }
            };
            return if away { Dfp::from_digit(field, s, 1) } else { field.zero() };
        }

        let cut = n - e as usize;
        let rem = Remainder::classify(m[cut - 1], !int::is_zero(&m[..cut - 1]));
        if !rem.is_inexact() {
            return self.clone();
        }

        let mut r = DigitBuf::from_slice(m);
        r[..cut].fill(0);
        let mut exp = self.exponent_radix();
        if should_increment(rm, s, rem, r[cut] & 1 == 1) && int::increment(&mut r[cut..]) {
            r[n - 1] = 1;
            exp += 1;
        }

        field.set_flags_bits(FLAG_INEXACT);
        Dfp::from_parts(field, s, exp, r)
    }
}
