//! Derived operations and elementary functions.

mod acos;
mod asin;
mod atan;
pub(crate) mod consts;
mod cos;
mod cosh;
mod exp;
mod ln;
mod log;
mod next;
mod other;
mod pow;
mod series;
mod sin;
mod sinh;
mod sqrt;
mod tan;
mod tanh;
mod trig;
mod trunc;

use crate::defs::Digit;
use crate::defs::Kind;
use crate::defs::RoundingMode;
use crate::defs::Sign;
use crate::defs::FLAG_INEXACT;
use crate::defs::MAX_EXP;
use crate::defs::MIN_EXP;
use crate::defs::RADIX;
use crate::field::Field;
use crate::num::finish;
use crate::num::Dfp;

impl Dfp {
    /// Returns a field with guard digits and the argument converted to it.
    /// The working field always rounds to nearest even.
    pub(crate) fn to_working(&self) -> (Field, Dfp) {
        let wf = self.field().working();
        wf.set_rounding_mode(RoundingMode::HalfEven);
        let x = self.new_instance(&wf, None);
        (wf, x)
    }

    /// Rounds `r` computed in the working field `wf` back to the field of `self`.
    /// Flags raised in the working field are propagated.
    pub(crate) fn from_working(&self, wf: &Field, r: &Dfp) -> Dfp {
        self.field().set_flags_bits(wf.flags());
        r.new_instance(self.field(), None)
    }

    /// Quotient by a small positive integer.
    pub(crate) fn div_u64(&self, d: u64) -> Dfp {
        if d < RADIX as u64 {
            self.div_int(d as i32)
        } else {
            self.div(&Dfp::from_i64_in(self.field(), d as i64))
        }
    }

    /// Returns true if the number is a finite integer. Raises no flags.
    pub(crate) fn is_integral(&self) -> bool {
        match self.kind() {
            Kind::Zero => true,
            Kind::Finite => {
                let n = self.mantissa().len() as i64;
                let e = self.exponent_radix() as i64;
                e >= n || (e > 0 && self.mantissa()[..(n - e) as usize].iter().all(|d| *d == 0))
            }
            _ => false,
        }
    }

    /// Returns true if the number is an odd integer. Raises no flags.
    pub(crate) fn is_odd_integral(&self) -> bool {
        if !self.is_integral() || self.kind() != Kind::Finite {
            return false;
        }
        let n = self.mantissa().len() as i64;
        let e = self.exponent_radix() as i64;
        e <= n && self.mantissa()[(n - e) as usize] & 1 == 1
    }

    /// Returns true if `e^-|x|` is negligible compared to `e^|x|` at the precision of the field.
    pub(crate) fn exp_dominates(&self) -> bool {
        let limit = 2 * self.field().decimal_digits() as i64;
        self.abs().cmp_values(&Dfp::from_i64_in(self.field(), limit)) == core::cmp::Ordering::Greater
    }

    /// Value of an odd function `f(x) = x·(1 + O(x²))` at a tiny `x` whose square is out of
    /// range and below the precision. `toward_zero` tells whether `|f(x)| < |x|`.
    /// Returns `None` for other numbers.
    pub(crate) fn tiny_odd(&self, toward_zero: bool) -> Option<Dfp> {
        let n = self.mantissa().len() as i64;
        let e2 = 2 * self.exponent_radix() as i64;
        if self.kind() != Kind::Finite || e2 >= MIN_EXP as i64 || e2 >= -n - 1 {
            return None;
        }

        let field = self.field();
        field.set_flags_bits(FLAG_INEXACT);

        let pos = self.sign().is_positive();
        let step = match field.rounding_mode() {
            RoundingMode::Down => toward_zero,
            RoundingMode::Up => !toward_zero,
            RoundingMode::Ceil => pos != toward_zero,
            RoundingMode::Floor => pos == toward_zero,
            _ => false,
        };

        Some(match (step, toward_zero) {
            (false, _) => self.clone(),
            (true, true) => self.next_after(&field.zero()),
            (true, false) => self.next_after(&Dfp::new_special(field, self.sign(), Kind::Infinite)),
        })
    }
}

/// Overflowed result with sign `s` raising the overflow flag in `field`.
pub(crate) fn overflowed(field: &Field, s: Sign) -> Dfp {
    finish(field, s, &[1 as Digit], false, MAX_EXP as i64, field.rounding_mode())
}

/// Underflowed result with sign `s` raising the underflow flag in `field`.
pub(crate) fn underflowed(field: &Field, s: Sign) -> Dfp {
    let unit = MIN_EXP as i64 - 2 * field.radix_digits() as i64;
    finish(field, s, &[1 as Digit], false, unit, field.rounding_mode())
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::defs::FLAG_OVERFLOW;
    use crate::defs::FLAG_UNDERFLOW;

    #[test]
    fn test_integral() {
        let f = Field::new(20).unwrap();
        for (s, int, odd) in [
            ("0", true, false),
            ("1", true, true),
            ("-3", true, true),
            ("10000", true, false),
            ("10001", true, true),
            ("12345678901234567891", true, true),
            ("1e30", true, false),
            ("0.5", false, false),
            ("12345.5", false, false),
            ("Infinity", false, false),
            ("NaN", false, false),
        ] {
            let d = f.parse(s).unwrap();
            assert_eq!(d.is_integral(), int, "{s}");
            assert_eq!(d.is_odd_integral(), odd, "{s}");
        }
        assert_eq!(f.flags() & !crate::defs::FLAG_INEXACT, 0);
    }

    #[test]
    fn test_overflowed_underflowed() {
        let f = Field::new(20).unwrap();
        let d = overflowed(&f, Sign::Neg);
        assert!(d.is_infinite());
        assert_eq!(d.sign(), Sign::Neg);
        assert_eq!(f.flags(), FLAG_OVERFLOW);

        f.clear_flags();
        let d = underflowed(&f, Sign::Pos);
        assert_eq!(d.kind(), Kind::Zero);
        assert_eq!(f.flags(), FLAG_UNDERFLOW);

        f.clear_flags();
        f.set_rounding_mode(RoundingMode::Down);
        assert_eq!(overflowed(&f, Sign::Pos), Dfp::max_finite(&f, Sign::Pos));
    }

    #[test]
    fn test_tiny_odd() {
        let f = Field::new(20).unwrap();
        let x = f.parse("-1e-70000").unwrap();
        assert!(f.two().tiny_odd(true).is_none());
        assert!(f.parse("1e-60000").unwrap().tiny_odd(true).is_none());

        assert_eq!(x.tiny_odd(true), Some(x.clone()));
        assert_eq!(f.flags(), crate::defs::FLAG_INEXACT);

        f.set_rounding_mode(RoundingMode::Ceil);
        let r = x.tiny_odd(true).unwrap();
        assert!(r.greater_than(&x) && r.less_than(&f.zero()));
        assert_eq!(x.tiny_odd(false), Some(x.clone()));

        f.set_rounding_mode(RoundingMode::Up);
        let r = x.tiny_odd(false).unwrap();
        assert!(r.less_than(&x));
        assert_eq!(r.next_after(&x), x);
    }

    #[test]
    fn test_working() {
        let f = Field::new(20).unwrap();
        f.set_rounding_mode(RoundingMode::Up);
        let x = f.parse("1.5").unwrap();
        let (wf, w) = x.to_working();
        assert_eq!(wf.decimal_digits(), 40);
        assert_eq!(wf.rounding_mode(), RoundingMode::HalfEven);
        let r = w.div_int(3);
        wf.clear_flags();
        let r = r.add(&w.div_int(7));
        let back = x.from_working(&wf, &r);
        assert_eq!(back.to_string(), "0.71428571428571428572");
        assert_eq!(f.flags(), crate::defs::FLAG_INEXACT);
        assert_eq!(f.from_i32(12345).div_u64(123_456_789), f.from_i32(12345).div(&f.from_i64(123_456_789)));
    }
}
