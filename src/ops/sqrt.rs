//! Square root.

use crate::common::buf::DigitBuf;
use crate::common::int;
use crate::defs::Kind;
use crate::num::finish;
use crate::num::Dfp;

impl Dfp {
    /// Returns the square root of the number correctly rounded to the precision of the field.
    ///
    /// The square root of a negative non-zero number raises the invalid operation flag and
    /// returns `NaN`. The square root of a zero is the zero itself.
    pub fn sqrt(&self) -> Self {
        if let Some(nan) = self.nan_self() {
            return nan;
        }

        match self.kind() {
            Kind::Zero => return self.clone(),
            _ if self.sign().is_negative() => return self.invalid(),
            Kind::Infinite => return self.clone(),
            _ => {}
        }

        let m = self.mantissa();
        let n = m.len() as i64;

        // value = A·10000^q, the root of A·10000^j has at least n + 1 digits
        let q = self.exponent_radix() as i64 - n;
        let j = if (q - n - 2) % 2 == 0 { n + 2 } else { n + 3 };

        let mut a = DigitBuf::new((n + j) as usize);
        a[j as usize..].copy_from_slice(m);
        let (root, exact) = int::sqrt_rem(&a);

        let unit = (q - j) / 2;
        finish(self.field(), self.sign(), &root, !exact, unit, self.field().rounding_mode())
    }
}
