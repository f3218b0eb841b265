//! Decimal logarithm.

use crate::common::util::POW10;
use crate::defs::Kind;
use crate::num::Dfp;

impl Dfp {
    /// Returns the decimal logarithm of the number.
    ///
    /// Exact powers of ten give exact results. Special values are handled as in [`Dfp::ln`].
    pub fn log10(&self) -> Self {
        if self.kind() != Kind::Finite || self.sign().is_negative() {
            return self.ln();
        }

        if self.is_power10() {
            return self.field().from_i32(self.int_log10());
        }

        let (wf, x) = self.to_working();
        let r = x.ln_working().div(&wf.ln10());
        self.from_working(&wf, &r)
    }

    fn is_power10(&self) -> bool {
        let m = self.mantissa();
        let (top, rest) = m.split_last().unwrap_or((&0, &[]));
        POW10.contains(top) && rest.iter().all(|d| *d == 0)
    }
}
