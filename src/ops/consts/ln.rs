//! Natural logarithms of 2 and 5.

use crate::field::Field;
use crate::num::Dfp;
use crate::ops::series::series_run;
use crate::ops::series::AtanhCoeff;

/// Returns `2·atanh(1/d)`, i.e. `ln((d+1)/(d-1))`.
fn ln_ratio(wf: &Field, d: i32) -> Dfp {
    let one = wf.one();
    let x = one.div_int(d);
    series_run(wf.zero(), x.clone(), &x.mul(&x), &mut AtanhCoeff::new(one, false)).mul_int(2)
}

/// ln(2) = 2·atanh(1/3).
pub(super) fn compute_ln2(wf: &Field) -> Dfp {
    ln_ratio(wf, 3)
}

/// ln(5) = 2·ln(2) + 2·atanh(1/9).
pub(super) fn compute_ln5(wf: &Field, ln2: &Dfp) -> Dfp {
    ln2.mul_int(2).add(&ln_ratio(wf, 9))
}
