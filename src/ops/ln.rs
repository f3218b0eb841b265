//! Natural logarithm.

use crate::defs::Kind;
use crate::defs::Sign;
use crate::defs::DECIMAL_POSITIONS;
use crate::defs::FLAG_DIV_ZERO;
use crate::num::Dfp;
use crate::ops::series::series_run;
use crate::ops::series::AtanhCoeff;
use core::cmp::Ordering;

impl Dfp {
    /// Returns the natural logarithm of the number.
    ///
    /// The logarithm of a negative number raises the invalid operation flag and returns `NaN`,
    /// the logarithm of zero raises the division by zero flag and returns negative infinity.
    pub fn ln(&self) -> Self {
        if let Some(nan) = self.nan_self() {
            return nan;
        }

        if self.kind() == Kind::Zero {
            self.field().set_flags_bits(FLAG_DIV_ZERO);
            return Dfp::new_special(self.field(), Sign::Neg, Kind::Infinite);
        }

        if self.sign().is_negative() {
            return self.invalid();
        }

        if self.kind() == Kind::Infinite {
            return self.clone();
        }

        if self.cmp_values(&self.field().one()) == Ordering::Equal {
            return self.field().zero();
        }

        let (wf, x) = self.to_working();
        let r = x.ln_working();
        self.from_working(&wf, &r)
    }

    /// ln(x) for a finite positive x of the working field.
    pub(crate) fn ln_working(&self) -> Self {
        let wf = self.field();
        let one = wf.one();

        // x = y·10^q·2^p with y close to 1
        let m = self.with_exponent(0);
        let e = DECIMAL_POSITIONS as i32 * self.exponent_radix();
        let mut q = self.int_log10();
        let mut y = m.mul(&one.power10(e - q));
        if y.cmp_values(&wf.from_i32(5)) == Ordering::Greater {
            q += 1;
            y = m.mul(&one.power10(e - q));
        }

        let three_halves = wf.from_i32(3).div_int(2);
        let mut p = 0;
        while y.cmp_values(&three_halves) == Ordering::Greater {
            y = y.div_int(2);
            p += 1;
        }

        // ln(y) = 2·atanh((y - 1)/(y + 1))
        let z = y.sub(&one).div(&y.add(&one));
        let r = series_run(wf.zero(), z.clone(), &z.mul(&z), &mut AtanhCoeff::new(one, false)).mul_int(2);

        r.add(&wf.ln2().mul_int(p)).add(&wf.ln10().mul_int(q))
    }
}
