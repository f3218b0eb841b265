//! Decimal and binary exponents, exact powers of ten, hypotenuse.

use crate::common::util::decimal_len;
use crate::common::util::POW10;
use crate::defs::Kind;
use crate::defs::Sign;
use crate::defs::DECIMAL_POSITIONS;
use crate::defs::EXPONENT_NAN_INF;
use crate::defs::EXPONENT_ZERO;
use crate::num::finish;
use crate::num::Dfp;

/// log2(10) scaled by 10^6, rounded down.
const LOG2_10_E6: i64 = 3_321_928;

impl Dfp {
    /// Returns the largest `k` such that `10^k <= |self|`.
    /// The result is meaningful for finite non-zero numbers only.
    pub fn int_log10(&self) -> i32 {
        let m = self.mantissa();
        let top = m[m.len() - 1];
        DECIMAL_POSITIONS as i32 * (self.exponent_radix() - 1) + decimal_len(top) as i32 - 1
    }

    /// Returns the largest `k` such that `10000^k <= |self|`.
    pub fn log10k(&self) -> i32 {
        self.exponent_radix() - 1
    }

    /// Returns `10000^e` in the field of `self`.
    pub fn power10k(&self, e: i32) -> Self {
        finish(self.field(), Sign::Pos, &[1], false, e as i64, self.field().rounding_mode())
    }

    /// Returns `10^e` in the field of `self`.
    pub fn power10(&self, e: i32) -> Self {
        let dp = DECIMAL_POSITIONS as i32;
        let d = POW10[e.rem_euclid(dp) as usize];
        finish(self.field(), Sign::Pos, &[d], false, e.div_euclid(dp) as i64, self.field().rounding_mode())
    }

    /// Returns the binary exponent of the number, i.e. `floor(log2(|self|))`.
    ///
    /// `NaN` and infinity give `435411`, zero gives `-435412`. The flags of the field are not
    /// modified.
    pub fn exponent(&self) -> i32 {
        match self.kind() {
            Kind::Zero => return EXPONENT_ZERO,
            Kind::Finite => {}
            _ => return EXPONENT_NAN_INF,
        }

        let sf = self.field().scratch();
        let x = self.rebind(&sf).abs();
        let two = sf.two();

        // first guess from the decimal exponent, then adjust by at most a few steps
        let mut p = (self.int_log10() as i64 * LOG2_10_E6).div_euclid(1_000_000) as i32;
        let mut t = two.pow_int(p);
        while t.greater_than(&x) {
            p -= 1;
            t = t.div_int(2);
        }
        loop {
            let t2 = t.mul(&two);
            if t2.greater_than(&x) {
                break;
            }
            p += 1;
            t = t2;
        }

        p
    }

    /// Returns `sqrt(self^2 + y^2)` avoiding intermediate overflow and underflow.
    /// Infinity has priority over `NaN`.
    pub fn hypot(&self, y: &Self) -> Self {
        if !self.compatible(y) {
            return self.invalid();
        }

        if self.is_infinite() || y.is_infinite() {
            return Dfp::new_special(self.field(), Sign::Pos, Kind::Infinite);
        }

        if let Some(nan) = self.nan_operand(y) {
            return nan;
        }

        let scale = (self.exponent_radix() + y.exponent_radix()) / 2;
        let sx = self.scaled(-scale);
        let sy = y.scaled(-scale);
        let h = sx.mul(&sx).add(&sy.mul(&sy)).sqrt();

        match h.kind() {
            Kind::Finite => {
                let n = h.mantissa().len() as i64;
                let unit = h.exponent_radix() as i64 + scale as i64 - n;
                finish(self.field(), Sign::Pos, h.mantissa(), false, unit, self.field().rounding_mode())
            }
            _ => h,
        }
    }

    /// Multiplies a finite number by `10000^k`.
    fn scaled(&self, k: i32) -> Self {
        if self.kind() == Kind::Finite {
            self.with_exponent(self.exponent_radix() + k)
        } else {
            self.clone()
        }
    }
}
