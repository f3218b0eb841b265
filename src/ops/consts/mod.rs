//! Mathematical constants of a precision.

mod e;
mod ln;
mod pi;

use crate::common::buf::DigitBuf;
use crate::defs::Exponent;
use crate::defs::Kind;
use crate::defs::RoundingMode;
use crate::defs::Sign;
use crate::field::Field;
use crate::num::Dfp;

/// A number detached from any field.
pub(crate) struct RawDfp {
    sign: Sign,
    exp: Exponent,
    mant: DigitBuf,
}

impl RawDfp {
    /// Rounds `v` to the precision of `field` to nearest even.
    /// The flags of `field` are not modified.
    fn round(v: &Dfp, field: &Field) -> Self {
        let sf = field.scratch();
        Self::from_dfp(&v.new_instance(&sf, Some(RoundingMode::HalfEven)))
    }

    fn from_dfp(v: &Dfp) -> Self {
        debug_assert!(matches!(v.kind(), Kind::Finite | Kind::Zero));
        RawDfp {
            sign: v.sign(),
            exp: v.exponent_radix(),
            mant: DigitBuf::from_slice(v.mantissa()),
        }
    }

    /// Returns the value as a number of `field`.
    pub fn to_dfp(&self, field: &Field) -> Dfp {
        Dfp::from_parts(field, self.sign, self.exp, self.mant.clone())
    }
}

/// A constant stored as the sum of a high part holding the upper half of the radix digits and
/// a low part holding the rounded rest.
pub(crate) struct RawSplit {
    hi: RawDfp,
    lo: RawDfp,
}

impl RawSplit {
    /// Splits `v` computed with extra precision for the precision of `field`.
    fn split(v: &Dfp, field: &Field) -> Self {
        let sf = field.scratch();
        sf.set_rounding_mode(RoundingMode::HalfEven);

        let full = v.new_instance(&sf, None);
        let n = full.mantissa().len();
        let mut m = DigitBuf::from_slice(full.mantissa());
        m[..n - n / 2].fill(0);
        let hi = Dfp::from_parts(&sf, full.sign(), full.exponent_radix(), m);

        let lo = v.sub(&hi.new_instance(v.field(), None)).new_instance(&sf, None);

        RawSplit {
            hi: RawDfp::from_dfp(&hi),
            lo: RawDfp::from_dfp(&lo),
        }
    }

    /// Returns the high and the low parts as numbers of `field`.
    pub fn to_dfp(&self, field: &Field) -> (Dfp, Dfp) {
        (self.hi.to_dfp(field), self.lo.to_dfp(field))
    }
}

/// Constants of a precision.
pub(crate) struct Constants {
    pub pi: RawDfp,
    pub pi_split: RawSplit,
    pub e: RawDfp,
    pub e_split: RawSplit,
    pub ln2: RawDfp,
    pub ln2_split: RawSplit,
    pub ln5: RawDfp,
    pub ln5_split: RawSplit,
    pub ln10: RawDfp,
    pub sqr2: RawDfp,
    pub sqr2_split: RawSplit,
    pub sqr2_reciprocal: RawDfp,
    pub sqr3: RawDfp,
    pub sqr3_reciprocal: RawDfp,
}

impl Constants {
    /// Computes the constants with guard digits and rounds them to the precision of `field`.
    /// Only the arithmetic kernel is used, so constants of other precisions are not involved.
    pub fn compute(field: &Field) -> Self {
        let wf = field.working();
        wf.set_rounding_mode(RoundingMode::HalfEven);

        let pi = pi::compute_pi(&wf);
        let e = e::compute_e(&wf);
        let ln2 = ln::compute_ln2(&wf);
        let ln5 = ln::compute_ln5(&wf, &ln2);
        let ln10 = ln2.add(&ln5);
        let sqr2 = wf.two().sqrt();
        let sqr3 = wf.from_i32(3).sqrt();
        let one = wf.one();

        Constants {
            pi: RawDfp::round(&pi, field),
            pi_split: RawSplit::split(&pi, field),
            e: RawDfp::round(&e, field),
            e_split: RawSplit::split(&e, field),
            ln2: RawDfp::round(&ln2, field),
            ln2_split: RawSplit::split(&ln2, field),
            ln5: RawDfp::round(&ln5, field),
            ln5_split: RawSplit::split(&ln5, field),
            ln10: RawDfp::round(&ln10, field),
            sqr2: RawDfp::round(&sqr2, field),
            sqr2_split: RawSplit::split(&sqr2, field),
            sqr2_reciprocal: RawDfp::round(&one.div(&sqr2), field),
            sqr3: RawDfp::round(&sqr3, field),
            sqr3_reciprocal: RawDfp::round(&one.div(&sqr3), field),
        }
    }
}
