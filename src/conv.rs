//! Conversion between precisions and from and to native numbers.

use crate::common::buf::DigitBuf;
use crate::common::int;
use crate::common::util::split_u64;
use crate::common::util::POW10;
use crate::defs::DoubleDigit;
use crate::defs::Kind;
use crate::defs::RoundingMode;
use crate::defs::Sign;
use crate::defs::DECIMAL_POSITIONS;
use crate::field::Field;
use crate::num::finish;
use crate::num::Dfp;

/// Largest power of 5 fitting in a doubled digit multiplier without overflow.
const POW5_STEP: (u32, DoubleDigit) = (13, 1_220_703_125);

/// Largest power of 2 used as a single multiplier.
const POW2_STEP: (u32, DoubleDigit) = (30, 1 << 30);

impl Dfp {
    pub(crate) fn from_i64_in(field: &Field, v: i64) -> Self {
        let s = if v < 0 { Sign::Neg } else { Sign::Pos };
        let digits: DigitBuf = split_u64(v.unsigned_abs()).fold(DigitBuf::new(0), |mut b, d| {
            b.push(d);
            b
        });
        finish(field, s, &digits, false, 0, field.rounding_mode())
    }

    pub(crate) fn from_f64_in(field: &Field, f: f64) -> Self {
        let s = if f.is_sign_negative() { Sign::Neg } else { Sign::Pos };

        if f.is_nan() {
            return Self::new_special(field, Sign::Pos, Kind::QuietNan);
        }

        if f.is_infinite() {
            return Self::new_special(field, s, Kind::Infinite);
        }

        if f == 0.0 {
            return Self::new_special(field, s, Kind::Zero);
        }

        // |f| = m·2^e
        let bits = f.to_bits();
        let biased = ((bits >> 52) & 0x7ff) as i32;
        let frac = bits & ((1u64 << 52) - 1);
        let (m, e) = if biased == 0 {
            (frac, -1074)
        } else {
            (frac | (1u64 << 52), biased - 1075)
        };

        let mut n: DigitBuf = split_u64(m).fold(DigitBuf::new(0), |mut b, d| {
            b.push(d);
            b
        });

        let rm = field.rounding_mode();
        if e >= 0 {
            let mut k = e as u32;
            while k > 0 {
                let step = k.min(POW2_STEP.0);
                n = int::mul_digit(&n, 1 << step);
                k -= step;
            }
            finish(field, s, &n, false, 0, rm)
        } else {
            // m·2^e = m·5^k / 10^k, and 10^k is aligned to radix digits by an extra factor of 10
            let k = (-e) as u32;
            let mut p = k;
            while p > 0 {
                let step = p.min(POW5_STEP.0);
                n = int::mul_digit(&n, if step == POW5_STEP.0 { POW5_STEP.1 } else { 5u64.pow(step) });
                p -= step;
            }
            let dp = DECIMAL_POSITIONS as u32;
            let pad = (dp - k % dp) % dp;
            n = int::mul_digit(&n, POW10[pad as usize] as DoubleDigit);
            let unit = -(((k + pad) / dp) as i64);
            finish(field, s, &n, false, unit, rm)
        }
    }

    /// Converts the number to `f64` with correct rounding.
    /// Values beyond the `f64` range become infinity or zero of the same sign.
    pub fn to_f64(&self) -> f64 {
        match self.kind() {
            Kind::QuietNan | Kind::SignalingNan => f64::NAN,
            Kind::Infinite => {
                if self.sign().is_negative() {
                    f64::NEG_INFINITY
                } else {
                    f64::INFINITY
                }
            }
            Kind::Zero => {
                if self.sign().is_negative() {
                    -0.0
                } else {
                    0.0
                }
            }
            Kind::Finite => {
                let mut s = String::with_capacity(self.mantissa().len() * DECIMAL_POSITIONS + 16);
                if self.sign().is_negative() {
                    s.push('-');
                }
                s.push_str("0.");
                for d in self.mantissa().iter().rev() {
                    s.push_str(&format!("{:04}", d));
                }
                s.push_str(&format!(
                    "e{}",
                    self.exponent_radix() as i64 * DECIMAL_POSITIONS as i64
                ));
                s.parse::<f64>().unwrap_or(f64::NAN)
            }
        }
    }

    /// Returns the number converted to the precision of `target`.
    ///
    /// If the number of radix digits of the number and of `target` is the same, the number is
    /// returned as is, attached to its own field. Otherwise the number is rounded with `rm`, or
    /// with the rounding mode of `target` if `rm` is None, and the flags are raised in
    /// `target`.
    pub fn new_instance(&self, target: &Field, rm: Option<RoundingMode>) -> Self {
        if self.field().radix_digits() == target.radix_digits() {
            return self.clone();
        }

        match self.kind() {
            Kind::Finite => {
                let n = self.mantissa().len() as i64;
                let rm = rm.unwrap_or_else(|| target.rounding_mode());
                finish(
                    target,
                    self.sign(),
                    self.mantissa(),
                    false,
                    self.exponent_radix() as i64 - n,
                    rm,
                )
            }
            kind => Self::new_special(target, self.sign(), kind),
        }
    }
}

impl Field {
    /// Returns the number equal to `v` rounded to the precision of the field.
    pub fn from_i64(&self, v: i64) -> Dfp {
        Dfp::from_i64_in(self, v)
    }

    /// Returns the number equal to `v`.
    pub fn from_i32(&self, v: i32) -> Dfp {
        Dfp::from_i64_in(self, v as i64)
    }

    /// Returns the number equal to `v`.
    pub fn from_i8(&self, v: i8) -> Dfp {
        Dfp::from_i64_in(self, v as i64)
    }

    /// Returns the number equal to `f` rounded to the precision of the field.
    /// Signed zeroes and infinities are preserved, and `NaN` becomes a quiet `NaN`.
    pub fn from_f64(&self, f: f64) -> Dfp {
        Dfp::from_f64_in(self, f)
    }

    /// Returns a quiet `NaN` or a signaling `NaN` depending on `signaling`.
    pub fn nan(&self, signaling: bool) -> Dfp {
        let kind = if signaling { Kind::SignalingNan } else { Kind::QuietNan };
        Dfp::new_special(self, Sign::Pos, kind)
    }
}
