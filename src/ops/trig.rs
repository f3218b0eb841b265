//! Argument reduction for trigonometric functions and angle conversion.

use crate::defs::Kind;
use crate::defs::RoundingMode;
use crate::defs::DECIMAL_POSITIONS;
use crate::field::Field;
use crate::num::Dfp;
use crate::ops::series::series_run;
use crate::ops::series::SinCosCoeff;

/// Limit on the number of decimal digits added for the reduction of large arguments.
const MAX_REDUCTION_DIGITS: i32 = 4000;

/// Argument reduced modulo `π/2`: `x = r + quadrant·π/2 (mod 2π)`, `|r| <= π/4`.
pub(crate) struct Reduced {
    pub r: Dfp,
    pub quadrant: u32,
}

impl Reduced {
    /// Reduces a finite non-zero `x` of the working field.
    ///
    /// Arguments with an integer part of `m` decimal digits are reduced with `m` additional
    /// digits of precision, so the result keeps the precision of the working field.
    pub fn new(x: &Dfp) -> Self {
        let wf = x.field();
        let m = x.int_log10();

        if m <= 0 {
            return Self::reduce(x);
        }

        let extra = m.min(MAX_REDUCTION_DIGITS) as usize + DECIMAL_POSITIONS;
        let rf = Field::with_digits(wf.decimal_digits() + extra);
        rf.set_rounding_mode(RoundingMode::HalfEven);

        let red = Self::reduce(&x.new_instance(&rf, None));
        wf.set_flags_bits(rf.flags());

        Reduced {
            r: red.r.new_instance(wf, None),
            quadrant: red.quadrant,
        }
    }

    fn reduce(x: &Dfp) -> Self {
        let f = x.field();
        let (hi, lo) = f.pi_split();
        let hi = hi.div_int(2);
        let lo = lo.div_int(2);

        let k = x.div(&f.pi().div_int(2)).rint();
        let r = x.sub(&k.mul(&hi)).sub(&k.mul(&lo));

        Reduced { r, quadrant: quadrant(&k) }
    }

    /// Sine of the reduced argument.
    pub fn sin_r(&self) -> Dfp {
        let one = self.r.field().one();
        let r2 = self.r.mul(&self.r);
        series_run(self.r.field().zero(), self.r.clone(), &r2, &mut SinCosCoeff::new(one, 1))
    }

    /// Cosine of the reduced argument.
    pub fn cos_r(&self) -> Dfp {
        let one = self.r.field().one();
        let r2 = self.r.mul(&self.r);
        series_run(self.r.field().zero(), one.clone(), &r2, &mut SinCosCoeff::new(one, 0))
    }
}

/// `k mod 4` of an integral number `k`.
fn quadrant(k: &Dfp) -> u32 {
    if k.kind() != Kind::Finite {
        return 0;
    }

    let m = k.mantissa();
    let n = m.len() as i32;
    let e = k.exponent_radix();
    if e > n {
        // multiple of 10000
        return 0;
    }

    // 10000 is divisible by 4, so the units group decides
    let q = m[(n - e) as usize] % 4;
    if k.sign().is_negative() {
        (4 - q) % 4
    } else {
        q
    }
}

impl Dfp {
    /// Converts the number from radians to degrees.
    pub fn to_degrees(&self) -> Self {
        let (wf, x) = self.to_working();
        let r = x.mul(&wf.from_i32(180)).div(&wf.pi());
        self.from_working(&wf, &r)
    }

    /// Converts the number from degrees to radians.
    pub fn to_radians(&self) -> Self {
        let (wf, x) = self.to_working();
        let r = x.mul(&wf.pi()).div_int(180);
        self.from_working(&wf, &r)
    }
}
