//! Exponential function.

use crate::defs::Kind;
use crate::defs::Sign;
use crate::num::Dfp;
use crate::ops::overflowed;
use crate::ops::series::series_run;
use crate::ops::series::ExpCoeff;
use crate::ops::underflowed;
use core::cmp::Ordering;

/// Integer part of the argument beyond which the result is out of range for any precision.
const EXP_LIMIT: i32 = 400_000;

impl Dfp {
    /// Returns `e^self`.
    pub fn exp(&self) -> Self {
        if let Some(nan) = self.nan_self() {
            return nan;
        }

        match self.kind() {
            Kind::Zero => return self.field().one(),
            Kind::Infinite => {
                return if self.sign().is_positive() {
                    self.clone()
                } else {
                    self.field().zero()
                };
            }
            _ => {}
        }

        let (wf, x) = self.to_working();
        if x.tiny_odd(true).is_some() {
            // 1 + x is within an ulp of 1 in the working field
            let one = wf.one();
            let r = if x.sign().is_positive() { one.add(&one.ulp()) } else { one.sub(&one.ulp()) };
            return self.from_working(&wf, &r);
        }

        let r = match x.exp_working() {
            Some(r) => r,
            None if self.sign().is_positive() => return overflowed(self.field(), Sign::Pos),
            None => return underflowed(self.field(), Sign::Pos),
        };

        self.from_working(&wf, &r)
    }

    /// e^x for a finite non-zero x of the working field, None if out of range.
    pub(crate) fn exp_working(&self) -> Option<Self> {
        let wf = self.field();
        let ipart = self.rint();
        let limit = wf.from_i32(EXP_LIMIT);
        if ipart.abs().cmp_values(&limit) == Ordering::Greater {
            return None;
        }

        let fpart = self.sub(&ipart);
        let one = wf.one();
        let ef = series_run(one.clone(), fpart.clone(), &fpart, &mut ExpCoeff::new(one));
        let ei = wf.e().pow_int(ipart.int_value());

        Some(ei.mul(&ef))
    }

    /// Returns `e^self - 1` without cancellation for small arguments.
    pub fn expm1(&self) -> Self {
        if let Some(nan) = self.nan_self() {
            return nan;
        }

        match self.kind() {
            Kind::Zero => return self.clone(),
            Kind::Infinite => {
                return if self.sign().is_positive() {
                    self.clone()
                } else {
                    self.field().one().neg()
                };
            }
            _ => {}
        }

        if let Some(r) = self.tiny_odd(self.sign().is_negative()) {
            return r;
        }

        let (wf, x) = self.to_working();
        match x.expm1_working() {
            Some(r) => self.from_working(&wf, &r),
            None => overflowed(self.field(), Sign::Pos),
        }
    }

    /// e^x - 1 for a finite non-zero x of the working field, None if out of range.
    pub(crate) fn expm1_working(&self) -> Option<Self> {
        let wf = self.field();
        let one = wf.one();
        let half = one.div_int(2);

        if self.abs().cmp_values(&half) == Ordering::Less {
            return Some(series_run(wf.zero(), self.clone(), self, &mut ExpCoeff::new(one)));
        }

        match self.exp_working() {
            Some(e) => Some(e.sub(&one)),
            None if self.sign().is_positive() => None,
            None => Some(one.neg()),
        }
    }
}
