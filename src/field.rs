//! Precision context.
//!
//! A [`Field`] defines the precision and the rounding mode of the values it produces, and holds
//! the sticky status flags raised by operations on those values.
//!
//! The precision-dependent part of a field (digit counts and the cache of mathematical
//! constants) lives in a precision core. Exactly one core exists in the process for a given number
//! of decimal digits, and its constants are computed at most once, even under concurrent first
//! access.

use crate::defs::Error;
use crate::defs::Kind;
use crate::defs::RoundingMode;
use crate::defs::Sign;
use crate::defs::GUARD_DECIMAL_DIGITS;
use crate::defs::MAX_DECIMAL_DIGITS;
use crate::num::Dfp;
use crate::ops::consts::Constants;
use core::fmt::Debug;
use core::hash::Hash;
use core::hash::Hasher;
use lazy_static::lazy_static;
use std::collections::HashMap;
use std::sync::atomic::AtomicU32;
use std::sync::atomic::AtomicU8;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::OnceLock;

lazy_static! {
    static ref PRECISIONS: Mutex<HashMap<usize, Arc<PrecisionCore>>> = Mutex::new(HashMap::new());
}

/// Precision-dependent shared state.
pub(crate) struct PrecisionCore {
    decimal_digits: usize,
    radix_digits: usize,
    consts: OnceLock<Constants>,
}

impl PrecisionCore {
    fn new(decimal_digits: usize) -> Self {
        let radix_digits = if decimal_digits < 13 { 4 } else { (decimal_digits + 3) / 4 };
        PrecisionCore {
            decimal_digits,
            radix_digits,
            consts: OnceLock::new(),
        }
    }

    /// Returns the only core for `decimal_digits`, creating it on first request.
    fn intern(decimal_digits: usize) -> Arc<Self> {
        let mut map = PRECISIONS.lock().unwrap_or_else(|e| e.into_inner());
        map.entry(decimal_digits)
            .or_insert_with(|| Arc::new(PrecisionCore::new(decimal_digits)))
            .clone()
    }
}

struct FieldState {
    core: Arc<PrecisionCore>,
    rm: AtomicU8,
    flags: AtomicU32,
}

/// Precision context: a factory of values with a given precision.
///
/// Cloning a field produces a handle sharing the rounding mode and the status flags with the
/// field it was cloned from. Every value keeps a handle of the field it was produced by, and operations on values
/// raise flags in that handle.
///
/// Fields created separately with [`Field::new`] share the precision core (and the constant
/// cache), but have their own rounding mode and flags. Two fields are equal if they have the same
/// precision and rounding mode; status flags do not participate in equality.
///
/// Status flag updates are atomic, but a sequence of operations performed on the same field from
/// several threads is not coordinated: the flags then reflect an arbitrary interleaving. Use a
/// separate field per thread, or synchronize externally, when flags matter.
#[derive(Clone)]
pub struct Field {
    inner: Arc<FieldState>,
}

impl Field {
    /// Returns a new field with a precision of `decimal_digits` decimal digits and the default
    /// rounding mode.
    ///
    /// ## Errors
    ///
    ///  - InvalidPrecision: `decimal_digits` is zero or exceeds `MAX_DECIMAL_DIGITS`.
    pub fn new(decimal_digits: usize) -> Result<Self, Error> {
        if decimal_digits == 0 || decimal_digits > MAX_DECIMAL_DIGITS {
            return Err(Error::InvalidPrecision(decimal_digits));
        }
        Ok(Self::with_digits(decimal_digits))
    }

    pub(crate) fn with_digits(decimal_digits: usize) -> Self {
        Self::from_core(PrecisionCore::intern(decimal_digits), RoundingMode::default())
    }

    fn from_core(core: Arc<PrecisionCore>, rm: RoundingMode) -> Self {
        Field {
            inner: Arc::new(FieldState {
                core,
                rm: AtomicU8::new(rm as u8),
                flags: AtomicU32::new(0),
            }),
        }
    }

    /// Returns an independent field with the same precision and rounding mode and cleared
    /// flags.
    pub(crate) fn scratch(&self) -> Self {
        Self::from_core(self.inner.core.clone(), self.rounding_mode())
    }

    /// Returns an independent field with extra guard digits for intermediate computations.
    pub(crate) fn working(&self) -> Self {
        Self::with_digits(self.decimal_digits() + GUARD_DECIMAL_DIGITS)
    }

    /// Returns true if both fields share the precision core.
    #[cfg(test)]
    pub(crate) fn same_core(&self, other: &Field) -> bool {
        Arc::ptr_eq(&self.inner.core, &other.inner.core)
    }

    /// Returns the precision in decimal digits.
    pub fn decimal_digits(&self) -> usize {
        self.inner.core.decimal_digits
    }

    /// Returns the number of radix 10000 digits in the mantissa of the values.
    pub fn radix_digits(&self) -> usize {
        self.inner.core.radix_digits
    }

    /// Returns the current rounding mode.
    pub fn rounding_mode(&self) -> RoundingMode {
        RoundingMode::from_u8(self.inner.rm.load(Ordering::Relaxed))
    }

    /// Sets the rounding mode for all subsequent operations performed by values of the field.
    pub fn set_rounding_mode(&self, rm: RoundingMode) {
        self.inner.rm.store(rm as u8, Ordering::Relaxed);
    }

    /// Returns the sticky status flags.
    pub fn flags(&self) -> u32 {
        self.inner.flags.load(Ordering::Relaxed)
    }

    /// Replaces the status flags.
    pub fn set_flags(&self, flags: u32) {
        self.inner.flags.store(flags & crate::defs::FLAGS_ALL, Ordering::Relaxed);
    }

    /// Raises the status flags `bits` leaving other flags unchanged.
    pub fn set_flags_bits(&self, bits: u32) {
        self.inner.flags.fetch_or(bits & crate::defs::FLAGS_ALL, Ordering::Relaxed);
    }

    /// Clears all status flags.
    pub fn clear_flags(&self) {
        self.inner.flags.store(0, Ordering::Relaxed);
    }

    pub(crate) fn constants(&self) -> &Constants {
        self.inner.core.consts.get_or_init(|| Constants::compute(self))
    }

    /// Returns positive zero.
    pub fn zero(&self) -> Dfp {
        Dfp::new_special(self, Sign::Pos, Kind::Zero)
    }

    /// Returns one.
    pub fn one(&self) -> Dfp {
        Dfp::from_digit(self, Sign::Pos, 1)
    }

    /// Returns two.
    pub fn two(&self) -> Dfp {
        Dfp::from_digit(self, Sign::Pos, 2)
    }

    /// Returns π.
    pub fn pi(&self) -> Dfp {
        self.constants().pi.to_dfp(self)
    }

    /// Returns π split in a high part with half of the precision and a low part.
    pub fn pi_split(&self) -> (Dfp, Dfp) {
        self.constants().pi_split.to_dfp(self)
    }

    /// Returns Euler's number.
    pub fn e(&self) -> Dfp {
        self.constants().e.to_dfp(self)
    }

    /// Returns Euler's number split in a high part with half of the precision and a low part.
    pub fn e_split(&self) -> (Dfp, Dfp) {
        self.constants().e_split.to_dfp(self)
    }

    /// Returns ln(2).
    pub fn ln2(&self) -> Dfp {
        self.constants().ln2.to_dfp(self)
    }

    /// Returns ln(2) split in a high part with half of the precision and a low part.
    pub fn ln2_split(&self) -> (Dfp, Dfp) {
        self.constants().ln2_split.to_dfp(self)
    }

    /// Returns ln(5).
    pub fn ln5(&self) -> Dfp {
        self.constants().ln5.to_dfp(self)
    }

    /// Returns ln(5) split in a high part with half of the precision and a low part.
    pub fn ln5_split(&self) -> (Dfp, Dfp) {
        self.constants().ln5_split.to_dfp(self)
    }

    /// Returns ln(10).
    pub fn ln10(&self) -> Dfp {
        self.constants().ln10.to_dfp(self)
    }

    /// Returns √2.
    pub fn sqr2(&self) -> Dfp {
        self.constants().sqr2.to_dfp(self)
    }

    /// Returns √2 split in a high part with half of the precision and a low part.
    pub fn sqr2_split(&self) -> (Dfp, Dfp) {
        self.constants().sqr2_split.to_dfp(self)
    }

    /// Returns 1/√2.
    pub fn sqr2_reciprocal(&self) -> Dfp {
        self.constants().sqr2_reciprocal.to_dfp(self)
    }

    /// Returns √3.
    pub fn sqr3(&self) -> Dfp {
        self.constants().sqr3.to_dfp(self)
    }

    /// Returns 1/√3.
    pub fn sqr3_reciprocal(&self) -> Dfp {
        self.constants().sqr3_reciprocal.to_dfp(self)
    }

    /// Returns a special value: signed zero, signed infinity, or a `NaN` carrying a sign.
    /// `Kind::Finite` produces a signed zero.
    pub fn new_special(&self, s: Sign, kind: Kind) -> Dfp {
        Dfp::new_special(self, s, kind)
    }

    /// Returns a uniformly distributed random value in the interval [0, 1).
    #[cfg(feature = "random")]
    pub fn random(&self) -> Dfp {
        use crate::common::buf::DigitBuf;
        use crate::defs::RADIX;

        let n = self.radix_digits();
        let mut mant = DigitBuf::new(n);
        for d in mant.iter_mut() {
            *d = rand::random::<u32>() % RADIX;
        }
        crate::num::finish(self, Sign::Pos, &mant, false, -(n as i64), self.rounding_mode())
    }
}

impl PartialEq for Field {
    fn eq(&self, other: &Self) -> bool {
        self.decimal_digits() == other.decimal_digits()
            && self.rounding_mode() == other.rounding_mode()
    }
}

impl Eq for Field {}

impl Hash for Field {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.decimal_digits().hash(state);
    }
}

impl Debug for Field {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Field")
            .field("decimal_digits", &self.decimal_digits())
            .field("radix_digits", &self.radix_digits())
            .field("rounding_mode", &self.rounding_mode())
            .field("flags", &self.flags())
            .finish()
    }
}
