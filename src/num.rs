//! Dfp definition and the core arithmetic kernel: addition, subtraction, multiplication,
//! division, comparison, and sign manipulation.

use crate::common::buf::DigitBuf;
use crate::common::int;
use crate::defs::Digit;
use crate::defs::Exponent;
use crate::defs::Kind;
use crate::defs::Sign;
use crate::defs::FLAG_DIV_ZERO;
use crate::defs::FLAG_INEXACT;
use crate::defs::FLAG_INVALID;
use crate::defs::FLAG_OVERFLOW;
use crate::defs::FLAG_UNDERFLOW;
use crate::defs::MAX_EXP;
use crate::defs::MIN_EXP;
use crate::defs::RADIX;
use crate::defs::RoundingMode;
use crate::field::Field;
use crate::rounding::overflow_to_max;
use crate::rounding::should_increment;
use crate::rounding::Remainder;
use core::cmp::Ordering;
use core::hash::Hash;
use core::hash::Hasher;

/// Number of guard digits used by addition and subtraction.
const ADD_GUARD_DIGITS: usize = 2;

/// Decimal floating point number.
///
/// The value is `0.d[n-1] d[n-2] ... d[0] × 10000^exp` where `d` are radix 10000 digits of the
/// mantissa stored least significant first, and `n` is the number of radix digits of the field.
/// A finite non-zero number always has a non-zero most significant digit.
///
/// Numbers are immutable: every operation returns a new number. Exceptional conditions do not
/// produce errors; they raise status flags in the field of the number and produce a special
/// value when needed.
#[derive(Clone, Debug)]
pub struct Dfp {
    field: Field,
    mant: DigitBuf,
    sign: Sign,
    exp: Exponent,
    kind: Kind,
}

/// A mantissa rounded to the precision, before the exponent range checks.
pub(crate) struct Rounded {
    pub s: Sign,
    pub e: i64,
    pub m: DigitBuf,
    pub rem: Remainder,
}

/// Round integer `digits` scaled by `10000^unit` to `n` radix digits.
/// `sticky` indicates a non-zero part below the least significant digit of `digits`.
/// Returns None if `digits` is zero.
pub(crate) fn round_digits(
    n: usize,
    s: Sign,
    digits: &[Digit],
    sticky: bool,
    unit: i64,
    rm: RoundingMode,
) -> Option<Rounded> {
    let l = int::significant_len(digits);
    if l == 0 {
        return None;
    }

    let mut e = l as i64 + unit;
    let mut m = DigitBuf::new(n);
    let rem = if l > n {
        m.copy_from_slice(&digits[l - n..l]);
        let below = sticky || !int::is_zero(&digits[..l - n - 1]);
        Remainder::classify(digits[l - n - 1], below)
    } else {
        m[n - l..].copy_from_slice(&digits[..l]);
        if sticky {
            Remainder::BelowHalf
        } else {
            Remainder::Zero
        }
    };

    if should_increment(rm, s, rem, m[0] & 1 == 1) && int::increment(&mut m) {
        m[n - 1] = 1;
        e += 1;
    }

    Some(Rounded { s, e, m, rem })
}

/// Normalize and round the integer `digits` scaled by `10000^unit` into a number of `field`
/// checking the exponent range. Raises the status flags in `field`.
pub(crate) fn finish(
    field: &Field,
    s: Sign,
    digits: &[Digit],
    sticky: bool,
    unit: i64,
    rm: RoundingMode,
) -> Dfp {
    debug_assert!(digits.iter().all(|d| *d < RADIX));
    match round_digits(field.radix_digits(), s, digits, sticky, unit, rm) {
        Some(r) => Dfp::range_checked(field, r, rm),
        None => Dfp::new_special(field, s, Kind::Zero),
    }
}

impl Dfp {
    /// Special value of `field`. `Kind::Finite` produces a signed zero.
    pub(crate) fn new_special(field: &Field, s: Sign, kind: Kind) -> Self {
        let kind = if kind == Kind::Finite { Kind::Zero } else { kind };
        Dfp {
            field: field.clone(),
            mant: DigitBuf::new(field.radix_digits()),
            sign: s,
            exp: 0,
            kind,
        }
    }

    /// Number with a single non-zero radix digit `d` in the integer part.
    pub(crate) fn from_digit(field: &Field, s: Sign, d: Digit) -> Self {
        debug_assert!(d < RADIX);
        let mut mant = DigitBuf::new(field.radix_digits());
        let n = mant.len();
        mant[n - 1] = d;
        Self::from_parts(field, s, 1, mant)
    }

    /// Number from a normalized (or zero) mantissa of the field length.
    pub(crate) fn from_parts(field: &Field, s: Sign, exp: Exponent, mant: DigitBuf) -> Self {
        debug_assert!(mant.len() == field.radix_digits());
        if int::is_zero(&mant) {
            Self::new_special(field, s, Kind::Zero)
        } else {
            debug_assert!(mant[mant.len() - 1] != 0);
            Dfp {
                field: field.clone(),
                mant,
                sign: s,
                exp,
                kind: Kind::Finite,
            }
        }
    }

    /// Largest finite number with sign `s`.
    pub(crate) fn max_finite(field: &Field, s: Sign) -> Self {
        let mut mant = DigitBuf::new(field.radix_digits());
        mant.fill(RADIX - 1);
        Self::from_parts(field, s, MAX_EXP, mant)
    }

    fn range_checked(field: &Field, r: Rounded, rm: RoundingMode) -> Self {
        let n = field.radix_digits() as i64;
        if r.e > MAX_EXP as i64 {
            field.set_flags_bits(FLAG_OVERFLOW);
            if overflow_to_max(rm, r.s) {
                Self::max_finite(field, r.s)
            } else {
                Self::new_special(field, r.s, Kind::Infinite)
            }
        } else if r.e < MIN_EXP as i64 {
            field.set_flags_bits(FLAG_UNDERFLOW);
            if r.e + n < MIN_EXP as i64 {
                Self::new_special(field, r.s, Kind::Zero)
            } else {
                Self::from_parts(field, r.s, r.e as Exponent, r.m)
            }
        } else {
            if r.rem.is_inexact() {
                field.set_flags_bits(FLAG_INEXACT);
            }
            Self::from_parts(field, r.s, r.e as Exponent, r.m)
        }
    }

    /// Raise the invalid operation flag and return a quiet `NaN`.
    pub(crate) fn invalid(&self) -> Self {
        self.field.set_flags_bits(FLAG_INVALID);
        Self::new_special(&self.field, Sign::Pos, Kind::QuietNan)
    }

    /// Quiet `NaN` if `self` or `d2` is `NaN`, raising the invalid operation flag for a
    /// signaling `NaN`.
    pub(crate) fn nan_operand(&self, d2: &Self) -> Option<Self> {
        let nan = if self.is_nan() {
            self
        } else if d2.is_nan() {
            d2
        } else {
            return None;
        };

        if self.kind == Kind::SignalingNan || d2.kind == Kind::SignalingNan {
            self.field.set_flags_bits(FLAG_INVALID);
        }

        Some(Self::new_special(&self.field, nan.sign, Kind::QuietNan))
    }

    /// Same as `nan_operand` for a single operand.
    pub(crate) fn nan_self(&self) -> Option<Self> {
        self.nan_operand(self)
    }

    #[inline]
    pub(crate) fn compatible(&self, d2: &Self) -> bool {
        self.mant.len() == d2.mant.len()
    }

    /// Returns the field of the number.
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Returns the sign of the number. Zero, infinity, and `NaN` carry a sign as well.
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Returns the classification of the number.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[inline]
    pub(crate) fn mantissa(&self) -> &[Digit] {
        &self.mant
    }

    #[inline]
    pub(crate) fn exponent_radix(&self) -> Exponent {
        self.exp
    }

    #[inline]
    pub(crate) fn with_sign(&self, s: Sign) -> Self {
        let mut ret = self.clone();
        ret.sign = s;
        ret
    }

    /// The same number attached to another field with the same number of radix digits.
    pub(crate) fn rebind(&self, field: &Field) -> Self {
        debug_assert!(field.radix_digits() == self.mant.len());
        let mut ret = self.clone();
        ret.field = field.clone();
        ret
    }

    /// The same finite number with the radix exponent replaced by `exp`.
    pub(crate) fn with_exponent(&self, exp: Exponent) -> Self {
        debug_assert!(self.kind == Kind::Finite);
        let mut ret = self.clone();
        ret.exp = exp;
        ret
    }

    /// Returns true if the number is a quiet or a signaling `NaN`.
    pub fn is_nan(&self) -> bool {
        matches!(self.kind, Kind::QuietNan | Kind::SignalingNan)
    }

    /// Returns true if the number is infinite.
    pub fn is_infinite(&self) -> bool {
        self.kind == Kind::Infinite
    }

    /// Returns true if the number is neither infinite nor `NaN`.
    pub fn is_finite(&self) -> bool {
        matches!(self.kind, Kind::Finite | Kind::Zero)
    }

    /// Returns true if the number is zero of any sign.
    /// `NaN` raises the invalid operation flag.
    pub fn is_zero(&self) -> bool {
        if self.is_nan() {
            self.field.set_flags_bits(FLAG_INVALID);
            return false;
        }
        self.kind == Kind::Zero
    }

    /// Returns true if the number is less than zero.
    /// `NaN` raises the invalid operation flag.
    pub fn strictly_negative(&self) -> bool {
        if self.is_nan() {
            self.field.set_flags_bits(FLAG_INVALID);
            return false;
        }
        self.sign.is_negative() && self.kind != Kind::Zero
    }

    /// Returns true if the number is greater than zero.
    /// `NaN` raises the invalid operation flag.
    pub fn strictly_positive(&self) -> bool {
        if self.is_nan() {
            self.field.set_flags_bits(FLAG_INVALID);
            return false;
        }
        self.sign.is_positive() && self.kind != Kind::Zero
    }

    /// Returns true if the number is less than or equal to zero.
    /// `NaN` raises the invalid operation flag.
    pub fn negative_or_null(&self) -> bool {
        if self.is_nan() {
            self.field.set_flags_bits(FLAG_INVALID);
            return false;
        }
        self.sign.is_negative() || self.kind == Kind::Zero
    }

    /// Returns true if the number is greater than or equal to zero.
    /// `NaN` raises the invalid operation flag.
    pub fn positive_or_null(&self) -> bool {
        if self.is_nan() {
            self.field.set_flags_bits(FLAG_INVALID);
            return false;
        }
        self.sign.is_positive() || self.kind == Kind::Zero
    }

    /// Returns the negated number.
    pub fn neg(&self) -> Self {
        self.with_sign(self.sign.invert())
    }

    /// Returns the absolute value of the number.
    pub fn abs(&self) -> Self {
        self.with_sign(Sign::Pos)
    }

    /// Returns the magnitude of `self` with the sign of `sign_source`.
    pub fn copysign(&self, sign_source: &Self) -> Self {
        self.with_sign(sign_source.sign)
    }

    /// Returns the sum of `self` and `d2`.
    pub fn add(&self, d2: &Self) -> Self {
        self.add_sub(d2, d2.sign)
    }

    /// Returns the difference of `self` and `d2`.
    pub fn sub(&self, d2: &Self) -> Self {
        self.add_sub(d2, d2.sign.invert())
    }

    fn add_sub(&self, d2: &Self, s2: Sign) -> Self {
        if !self.compatible(d2) {
            return self.invalid();
        }

        if let Some(nan) = self.nan_operand(d2) {
            return nan;
        }

        match (self.kind, d2.kind) {
            (Kind::Infinite, Kind::Infinite) => {
                if self.sign == s2 {
                    self.clone()
                } else {
                    self.invalid()
                }
            }
            (Kind::Infinite, _) => self.clone(),
            (_, Kind::Infinite) => Self::new_special(&self.field, s2, Kind::Infinite),
            (Kind::Zero, Kind::Zero) => {
                let s = if self.sign.is_negative() && s2.is_negative() {
                    Sign::Neg
                } else {
                    Sign::Pos
                };
                Self::new_special(&self.field, s, Kind::Zero)
            }
            // the range check raises the underflow flag for a tiny operand
            (Kind::Zero, _) => {
                let unit = d2.exp as i64 - d2.mant.len() as i64;
                finish(&self.field, s2, &d2.mant, false, unit, self.field.rounding_mode())
            }
            (_, Kind::Zero) => {
                let unit = self.exp as i64 - self.mant.len() as i64;
                finish(&self.field, self.sign, &self.mant, false, unit, self.field.rounding_mode())
            }
            _ => self.add_finite(d2, s2),
        }
    }

    fn add_finite(&self, d2: &Self, s2: Sign) -> Self {
        let n = self.mant.len();
        let g = ADD_GUARD_DIGITS;
        let len = n + g;

        let (a, sa, b, sb) = if self.exp >= d2.exp {
            (self, self.sign, d2, s2)
        } else {
            (d2, s2, self, self.sign)
        };
        let shift = (a.exp as i64 - b.exp as i64) as usize;

        let mut am = DigitBuf::new(len);
        am[g..].copy_from_slice(&a.mant);

        let mut bm = DigitBuf::new(len);
        let mut sticky = false;
        if shift <= g {
            bm[g - shift..g - shift + n].copy_from_slice(&b.mant);
        } else if shift < len {
            let cut = shift - g;
            bm[..n - cut].copy_from_slice(&b.mant[cut..]);
            sticky = !int::is_zero(&b.mant[..cut]);
        } else {
            sticky = true;
        }

        let unit = a.exp as i64 - len as i64;
        let rm = self.field.rounding_mode();

        if sa == sb {
            let r = int::add(&am, &bm);
            return finish(&self.field, sa, &r, sticky, unit, rm);
        }

        match int::cmp(&am, &bm) {
            Ordering::Equal => Self::new_special(&self.field, Sign::Pos, Kind::Zero),
            Ordering::Less => {
                let r = int::sub(&bm, &am);
                finish(&self.field, sb, &r, false, unit, rm)
            }
            Ordering::Greater => {
                let mut r = int::sub(&am, &bm);
                if sticky {
                    // the shifted out part is borrowed from the least significant digit
                    int::decrement(&mut r);
                }
                finish(&self.field, sa, &r, sticky, unit, rm)
            }
        }
    }

    /// Returns the product of `self` and `d2`.
    pub fn mul(&self, d2: &Self) -> Self {
        if !self.compatible(d2) {
            return self.invalid();
        }

        if let Some(nan) = self.nan_operand(d2) {
            return nan;
        }

        let s = self.sign.xor(d2.sign);
        match (self.kind, d2.kind) {
            (Kind::Infinite, Kind::Zero) | (Kind::Zero, Kind::Infinite) => self.invalid(),
            (Kind::Infinite, _) | (_, Kind::Infinite) => {
                Self::new_special(&self.field, s, Kind::Infinite)
            }
            (Kind::Zero, _) | (_, Kind::Zero) => Self::new_special(&self.field, s, Kind::Zero),
            _ => {
                let n = self.mant.len() as i64;
                let r = int::mul(&self.mant, &d2.mant);
                let unit = self.exp as i64 + d2.exp as i64 - 2 * n;
                finish(&self.field, s, &r, false, unit, self.field.rounding_mode())
            }
        }
    }

    /// Returns the product of `self` and an integer.
    pub fn mul_int(&self, i: i32) -> Self {
        self.mul(&Self::from_i64_in(&self.field, i as i64))
    }

    /// Returns the quotient of `self` and `d2`.
    pub fn div(&self, d2: &Self) -> Self {
        if !self.compatible(d2) {
            return self.invalid();
        }

        if let Some(nan) = self.nan_operand(d2) {
            return nan;
        }

        let s = self.sign.xor(d2.sign);
        match (self.kind, d2.kind) {
            (Kind::Infinite, Kind::Infinite) => self.invalid(),
            (Kind::Infinite, _) => Self::new_special(&self.field, s, Kind::Infinite),
            (_, Kind::Infinite) => Self::new_special(&self.field, s, Kind::Zero),
            (_, Kind::Zero) => {
                self.field.set_flags_bits(FLAG_DIV_ZERO);
                if self.kind == Kind::Zero {
                    Self::new_special(&self.field, Sign::Pos, Kind::QuietNan)
                } else {
                    Self::new_special(&self.field, s, Kind::Infinite)
                }
            }
            (Kind::Zero, _) => Self::new_special(&self.field, s, Kind::Zero),
            _ => {
                let n = self.mant.len();

                // the quotient of 10000^(n+1)·A by B has n+1 or n+2 digits
                let mut u = DigitBuf::new(2 * n + 1);
                u[n + 1..].copy_from_slice(&self.mant);
                let (q, r) = int::div_rem(&u, &d2.mant);

                let unit = self.exp as i64 - d2.exp as i64 - n as i64 - 1;
                finish(&self.field, s, &q, !int::is_zero(&r), unit, self.field.rounding_mode())
            }
        }
    }

    /// Returns the quotient of `self` and an integer divisor `d` from the range (0, 10000).
    /// Other non-zero divisors raise the invalid operation flag.
    pub fn div_int(&self, d: i32) -> Self {
        if let Some(nan) = self.nan_self() {
            return nan;
        }

        if self.kind == Kind::Infinite {
            return self.clone();
        }

        if d == 0 {
            self.field.set_flags_bits(FLAG_DIV_ZERO);
            return if self.kind == Kind::Zero {
                Self::new_special(&self.field, Sign::Pos, Kind::QuietNan)
            } else {
                Self::new_special(&self.field, self.sign, Kind::Infinite)
            };
        }

        if d < 0 || d >= RADIX as i32 {
            return self.invalid();
        }

        if self.kind == Kind::Zero {
            return self.clone();
        }

        let n = self.mant.len();
        let mut u = DigitBuf::new(n + 2);
        u[2..].copy_from_slice(&self.mant);
        let (q, r) = int::div_digit(&u, d as Digit);

        let unit = self.exp as i64 - n as i64 - 2;
        finish(&self.field, self.sign, &q, r != 0, unit, self.field.rounding_mode())
    }

    /// Returns 1 / `self`.
    pub fn reciprocal(&self) -> Self {
        self.field.one().div(self)
    }

    /// Returns `self - rint(self / d) · d`. A zero result has the sign of `self`.
    pub fn rem(&self, d: &Self) -> Self {
        let q = self.div(d).rint();
        let r = self.sub(&q.mul(d));
        if r.kind == Kind::Zero {
            r.with_sign(self.sign)
        } else {
            r
        }
    }

    /// Total order of non-`NaN` numbers where zeroes of both signs are equal.
    pub(crate) fn cmp_values(&self, d2: &Self) -> Ordering {
        if self.kind == Kind::Zero && d2.kind == Kind::Zero {
            return Ordering::Equal;
        }

        if self.sign != d2.sign {
            return if self.sign.is_negative() {
                Ordering::Less
            } else {
                Ordering::Greater
            };
        }

        let mag = match (self.kind, d2.kind) {
            (Kind::Infinite, Kind::Infinite) => Ordering::Equal,
            (Kind::Infinite, _) | (_, Kind::Zero) => Ordering::Greater,
            (_, Kind::Infinite) | (Kind::Zero, _) => Ordering::Less,
            _ => self
                .exp
                .cmp(&d2.exp)
                .then_with(|| self.mant.iter().rev().cmp(d2.mant.iter().rev())),
        };

        if self.sign.is_negative() {
            mag.reverse()
        } else {
            mag
        }
    }

    /// Returns true if `self` is less than `d2`.
    /// A `NaN` operand or an incompatible precision raises the invalid operation flag.
    pub fn less_than(&self, d2: &Self) -> bool {
        if !self.compatible(d2) || self.is_nan() || d2.is_nan() {
            self.field.set_flags_bits(FLAG_INVALID);
            return false;
        }
        self.cmp_values(d2) == Ordering::Less
    }

    /// Returns true if `self` is greater than `d2`.
    /// A `NaN` operand or an incompatible precision raises the invalid operation flag.
    pub fn greater_than(&self, d2: &Self) -> bool {
        if !self.compatible(d2) || self.is_nan() || d2.is_nan() {
            self.field.set_flags_bits(FLAG_INVALID);
            return false;
        }
        self.cmp_values(d2) == Ordering::Greater
    }

    /// Returns true if `self` and `d2` are ordered and not equal. Raises no flags.
    pub fn unequal(&self, d2: &Self) -> bool {
        if !self.compatible(d2) || self.is_nan() || d2.is_nan() {
            return false;
        }
        self.cmp_values(d2) != Ordering::Equal
    }
}

impl PartialEq for Dfp {
    fn eq(&self, other: &Self) -> bool {
        self.compatible(other)
            && !self.is_nan()
            && !other.is_nan()
            && self.cmp_values(other) == Ordering::Equal
    }
}

impl PartialOrd for Dfp {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if !self.compatible(other) || self.is_nan() || other.is_nan() {
            None
        } else {
            Some(self.cmp_values(other))
        }
    }
}

impl Hash for Dfp {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        match self.kind {
            Kind::Finite => {
                self.sign.hash(state);
                self.exp.hash(state);
                self.mant.hash(state);
            }
            Kind::Infinite => self.sign.hash(state),
            _ => {}
        }
    }
}
