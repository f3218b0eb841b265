//! Power functions.

use crate::defs::Kind;
use crate::defs::Sign;
use crate::defs::FLAG_DIV_ZERO;
use crate::num::finish;
use crate::num::Dfp;
use core::cmp::Ordering;

/// Exponents below this magnitude are split into an integer and a fractional part.
const SPLIT_LIMIT: i32 = 100_000_000;

impl Dfp {
    /// Returns `self^n` computed with binary exponentiation at the precision of the field.
    ///
    /// Intermediate values are kept near 1 and the radix exponent is accumulated separately, so
    /// only the final result can overflow or underflow. A negative power is computed as the
    /// reciprocal of the positive power.
    pub fn pow_int(&self, n: i32) -> Self {
        let field = self.field();

        if n == 0 {
            return field.one();
        }

        if let Some(nan) = self.nan_self() {
            return nan;
        }

        let s = if self.sign().is_negative() && n & 1 != 0 { Sign::Neg } else { Sign::Pos };

        match self.kind() {
            Kind::Zero => {
                return if n > 0 {
                    Dfp::new_special(field, s, Kind::Zero)
                } else {
                    field.set_flags_bits(FLAG_DIV_ZERO);
                    Dfp::new_special(field, s, Kind::Infinite)
                };
            }
            Kind::Infinite => {
                let kind = if n > 0 { Kind::Infinite } else { Kind::Zero };
                return Dfp::new_special(field, s, kind);
            }
            _ => {}
        }

        // value = b·10000^be, where b has the radix exponent 0
        let mut b = self.with_exponent(0);
        let mut be = self.exponent_radix() as i64;
        let mut acc = field.one().with_exponent(0);
        let mut ae = 1i64;
        let mut k = (n as i64).unsigned_abs();

        loop {
            if k & 1 == 1 {
                acc = acc.mul(&b);
                ae += be + acc.exponent_radix() as i64;
                acc = acc.with_exponent(0);
            }
            k >>= 1;
            if k == 0 {
                break;
            }
            b = b.mul(&b);
            be = 2 * be + b.exponent_radix() as i64;
            b = b.with_exponent(0);
        }

        if n < 0 {
            acc = field.one().with_exponent(0).div(&acc);
            ae = acc.exponent_radix() as i64 + 1 - ae;
            acc = acc.with_exponent(0);
        }

        let unit = ae - acc.mantissa().len() as i64;
        finish(field, acc.sign(), acc.mantissa(), false, unit, field.rounding_mode())
    }

    /// Returns `self^y`.
    ///
    /// Special values follow the IEEE 754 `pow` conventions, except that `1^±∞` is `NaN` and
    /// raises the invalid operation flag. A negative base with a non-integral exponent raises
    /// the invalid operation flag and returns `NaN`.
    pub fn pow(&self, y: &Self) -> Self {
        if !self.compatible(y) {
            return self.invalid();
        }

        let field = self.field();

        if y.kind() == Kind::Zero {
            return field.one();
        }

        if y.kind() == Kind::Finite && y.cmp_values(&field.one()) == Ordering::Equal {
            return match self.nan_self() {
                Some(_) => self.invalid(),
                None => self.clone(),
            };
        }

        if self.is_nan() || y.is_nan() {
            return self.invalid();
        }

        let y_pos = y.sign().is_positive();
        let y_odd = y.is_odd_integral();

        if self.kind() == Kind::Zero {
            let s = if self.sign().is_negative() && y_odd { Sign::Neg } else { Sign::Pos };
            let kind = if y_pos { Kind::Zero } else { Kind::Infinite };
            return Dfp::new_special(field, s, kind);
        }

        let neg = self.sign().is_negative();
        let x = self.abs();

        if y.kind() == Kind::Infinite {
            return match x.cmp_values(&field.one()) {
                Ordering::Greater if y_pos => Dfp::new_special(field, Sign::Pos, Kind::Infinite),
                Ordering::Less if !y_pos => Dfp::new_special(field, Sign::Pos, Kind::Infinite),
                Ordering::Equal => self.invalid(),
                _ => field.zero(),
            };
        }

        if self.kind() == Kind::Infinite {
            let s = if neg && y_odd { Sign::Neg } else { Sign::Pos };
            let kind = if y_pos { Kind::Infinite } else { Kind::Zero };
            return Dfp::new_special(field, s, kind);
        }

        if neg && !y.is_integral() {
            return self.invalid();
        }

        let (wf, xw) = x.to_working();
        let yw = y.new_instance(&wf, None);
        let limit = wf.from_i32(SPLIT_LIMIT);

        let r = if yw.abs().cmp_values(&limit) == Ordering::Less {
            let u = yw.rint();
            let v = yw.sub(&u);
            let p = xw.pow_int(u.int_value());
            if v.kind() == Kind::Zero {
                p
            } else {
                v.mul(&xw.ln()).exp().mul(&p)
            }
        } else {
            xw.ln().mul(&yw).exp()
        };

        let r = if neg && y_odd { r.neg() } else { r };
        self.from_working(&wf, &r)
    }
}
