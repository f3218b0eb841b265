//! Power series computation appliance.

use crate::defs::Kind;
use crate::num::Dfp;

/// Generator of polynomial coefficients.
pub(crate) trait PolycoeffGen {
    /// Returns the next polynomial coefficient value.
    fn next(&mut self) -> &Dfp;
}

/// Computes `acc + c0·x_first + c1·x_first·x_step + c2·x_first·x_step^2 + ...` where `ci` are
/// produced by `polycoeff_gen`. Summation stops when a term no longer affects the sum.
pub(crate) fn series_run<T: PolycoeffGen>(acc: Dfp, x_first: Dfp, x_step: &Dfp, polycoeff_gen: &mut T) -> Dfp {
    let n = acc.mantissa().len() as i32;
    let mut acc = acc;
    let mut x_pow = x_first;

    loop {
        let part = x_pow.mul(polycoeff_gen.next());
        if part.kind() == Kind::Zero {
            break;
        }

        if acc.kind() == Kind::Finite && part.exponent_radix() < acc.exponent_radix() - n {
            break;
        }

        acc = acc.add(&part);
        x_pow = x_pow.mul(x_step);
    }

    acc
}

/// Coefficients `1/k!` starting from `k = 1`.
pub(crate) struct ExpCoeff {
    k: u64,
    val: Dfp,
}

impl ExpCoeff {
    pub fn new(one: Dfp) -> Self {
        ExpCoeff { k: 0, val: one }
    }
}

impl PolycoeffGen for ExpCoeff {
    fn next(&mut self) -> &Dfp {
        self.k += 1;
        self.val = self.val.div_u64(self.k);
        &self.val
    }
}

/// Coefficients `1/(2k+1)` starting from `k = 0`, optionally with alternating signs.
pub(crate) struct AtanhCoeff {
    k: u64,
    alternate: bool,
    one: Dfp,
    val: Dfp,
}

impl AtanhCoeff {
    pub fn new(one: Dfp, alternate: bool) -> Self {
        AtanhCoeff {
            k: 0,
            alternate,
            val: one.clone(),
            one,
        }
    }
}

impl PolycoeffGen for AtanhCoeff {
    fn next(&mut self) -> &Dfp {
        self.val = self.one.div_u64(2 * self.k + 1);
        if self.alternate && self.k & 1 == 1 {
            self.val = self.val.neg();
        }
        self.k += 1;
        &self.val
    }
}

/// Coefficients `(-1)^k/(2k+p)!` starting from `k = 0`: `p = 1` for sine, `p = 0` for cosine.
pub(crate) struct SinCosCoeff {
    k: u64,
    p: u64,
    val: Dfp,
}

impl SinCosCoeff {
    pub fn new(one: Dfp, p: u64) -> Self {
        SinCosCoeff { k: 0, p, val: one }
    }
}

impl PolycoeffGen for SinCosCoeff {
    fn next(&mut self) -> &Dfp {
        if self.k > 0 {
            let i = 2 * self.k + self.p;
            self.val = self.val.div_u64(i * (i - 1)).neg();
        }
        self.k += 1;
        &self.val
    }
}
