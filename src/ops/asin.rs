//! Arcsine.

use crate::defs::Kind;
use crate::num::Dfp;
use core::cmp::Ordering;

impl Dfp {
    /// Returns the arcsine of the number.
    ///
    /// Numbers with a magnitude greater than 1 raise the invalid operation flag and give `NaN`.
    pub fn asin(&self) -> Self {
        if let Some(nan) = self.nan_self() {
            return nan;
        }

        if self.kind() == Kind::Zero {
            return self.clone();
        }

        let one = self.field().one();
        let ord = self.abs().cmp_values(&one);
        if ord == Ordering::Greater {
            return self.invalid();
        }

        if let Some(r) = self.tiny_odd(false) {
            return r;
        }

        let (wf, x) = self.to_working();
        let r = if ord == Ordering::Equal {
            wf.pi().div_int(2).with_sign(x.sign())
        } else {
            // asin(x) = atan(x/sqrt((1 - x)(1 + x)))
            let one = wf.one();
            let c = one.sub(&x).mul(&one.add(&x)).sqrt();
            x.div(&c).atan_working()
        };

        self.from_working(&wf, &r)
    }
}
