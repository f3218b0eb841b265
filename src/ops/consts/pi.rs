//! π number.

use crate::defs::Kind;
use crate::field::Field;
use crate::num::Dfp;

/// Upper bound of iterations, far beyond any supported precision.
const MAX_ITER: usize = 20;

/// Computes π with the quartically convergent Borwein iteration.
pub(super) fn compute_pi(wf: &Field) -> Dfp {
    let one = wf.one();
    let two = wf.two();
    let four = wf.from_i32(4);
    let sqrt2 = two.sqrt();
    let n = wf.radix_digits() as i32;

    let mut yk = sqrt2.sub(&one);
    let mut ak = two.mul(&wf.from_i32(3).sub(&two.mul(&sqrt2)));
    let mut two2kp3 = two;

    for _ in 0..MAX_ITER {
        let y2 = yk.mul(&yk);
        let s = one.sub(&y2.mul(&y2)).sqrt().sqrt();
        let yn = one.sub(&s).div(&one.add(&s));

        two2kp3 = two2kp3.mul(&four);

        let p = one.add(&yn);
        let p2 = p.mul(&p);
        let t = two2kp3.mul(&yn).mul(&p.add(&yn.mul(&yn)));
        ak = ak.mul(&p2.mul(&p2)).sub(&t);

        // further terms are below the precision
        if yn.kind() == Kind::Zero || yn.exponent_radix() < -n {
            break;
        }
        yk = yn;
    }

    one.div(&ak)
}
