//! Hyperbolic sine.

use crate::defs::Kind;
use crate::num::Dfp;
use crate::ops::overflowed;

impl Dfp {
    /// Returns the hyperbolic sine of the number.
    pub fn sinh(&self) -> Self {
        if let Some(nan) = self.nan_self() {
            return nan;
        }

        if matches!(self.kind(), Kind::Zero | Kind::Infinite) {
            return self.clone();
        }

        if let Some(r) = self.tiny_odd(false) {
            return r;
        }

        let (wf, x) = self.to_working();
        let s = x.sign();
        let x = x.abs();

        let r = if x.exp_dominates() {
            x.sub(&wf.ln2()).exp_working()
        } else {
            // e^x - e^-x = em + em/(em + 1), em = e^x - 1
            x.expm1_working().map(|em| em.add(&em.div(&em.add(&wf.one()))).div_int(2))
        };

        match r {
            Some(r) => self.from_working(&wf, &r.with_sign(s)),
            None => overflowed(self.field(), s),
        }
    }
}
