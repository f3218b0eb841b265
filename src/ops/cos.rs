//! Cosine.

use crate::defs::Kind;
use crate::num::Dfp;
use crate::ops::trig::Reduced;

impl Dfp {
    /// Returns the cosine of the number. Infinity raises the invalid operation flag.
    pub fn cos(&self) -> Self {
        if let Some(nan) = self.nan_self() {
            return nan;
        }

        match self.kind() {
            Kind::Zero => return self.field().one(),
            Kind::Infinite => return self.invalid(),
            _ => {}
        }

        let (wf, x) = self.to_working();
        if x.tiny_odd(true).is_some() {
            // just below 1
            let one = wf.one();
            let r = one.sub(&one.ulp());
            return self.from_working(&wf, &r);
        }

        let red = Reduced::new(&x);
        let r = match red.quadrant {
            0 => red.cos_r(),
            1 => red.sin_r().neg(),
            2 => red.cos_r().neg(),
            _ => red.sin_r(),
        };

        self.from_working(&wf, &r)
    }
}
