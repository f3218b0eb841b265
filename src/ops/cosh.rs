//! Hyperbolic cosine.

use crate::defs::Kind;
use crate::defs::Sign;
use crate::num::Dfp;
use crate::ops::overflowed;

impl Dfp {
    /// Returns the hyperbolic cosine of the number.
    pub fn cosh(&self) -> Self {
        if let Some(nan) = self.nan_self() {
            return nan;
        }

        match self.kind() {
            Kind::Zero => return self.field().one(),
            Kind::Infinite => return self.abs(),
            _ => {}
        }

        let (wf, x) = self.to_working();
        let x = x.abs();

        let r = if x.exp_dominates() {
            x.sub(&wf.ln2()).exp_working()
        } else {
            x.exp_working().map(|e| e.add(&wf.one().div(&e)).div_int(2))
        };

        match r {
            Some(r) => self.from_working(&wf, &r),
            None => overflowed(self.field(), Sign::Pos),
        }
    }
}
