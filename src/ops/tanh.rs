//! Hyperbolic tangent.

use crate::defs::Kind;
use crate::num::Dfp;

impl Dfp {
    /// Returns the hyperbolic tangent of the number.
    pub fn tanh(&self) -> Self {
        if let Some(nan) = self.nan_self() {
            return nan;
        }

        match self.kind() {
            Kind::Zero => return self.clone(),
            Kind::Infinite => return self.field().one().with_sign(self.sign()),
            _ => {}
        }

        if let Some(r) = self.tiny_odd(true) {
            return r;
        }

        let (wf, x) = self.to_working();
        let s = x.sign();
        let x = x.abs();
        let one = wf.one();

        let r = if x.exp_dominates() {
            // just below 1
            one.sub(&one.ulp())
        } else {
            // tanh(x) = em/(em + 2), em = e^2x - 1
            match x.mul_int(2).expm1_working() {
                Some(em) => em.div(&em.add(&wf.two())),
                None => one.sub(&one.ulp()),
            }
        };

        self.from_working(&wf, &r.with_sign(s))
    }
}
