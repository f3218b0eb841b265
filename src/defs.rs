//! Definitions.

use core::fmt::Display;

/// A radix 10000 digit.
pub type Digit = u32;

/// Doubled digit.
pub type DoubleDigit = u64;

/// Digit with sign.
pub type SignedDigit = i64;

/// An exponent in radix 10000 digits.
pub type Exponent = i32;

/// Base of digits.
pub const RADIX: Digit = 10000;

/// Base of digits as a doubled digit.
pub const RADIX_DD: DoubleDigit = RADIX as DoubleDigit;

/// Half of the base, used to classify the discarded part while rounding.
pub const HALF_RADIX: Digit = RADIX / 2;

/// Number of decimal positions in a radix digit.
pub const DECIMAL_POSITIONS: usize = 4;

/// Minimum normal exponent value.
pub const MIN_EXP: Exponent = -32767;

/// Maximum exponent value.
pub const MAX_EXP: Exponent = 32768;

/// Margin in radix digits beyond the normal exponent range which parsed literals may occupy
/// before they are replaced with zero or infinity.
pub const ERR_SCALE: Exponent = 32760;

/// Maximum precision in decimal digits accepted by a field.
pub const MAX_DECIMAL_DIGITS: usize = 1_000_000;

/// Decimal digits of precision added to the working precision of transcendental functions
/// and constants.
pub const GUARD_DECIMAL_DIGITS: usize = 20;

/// Binary exponent reported for `NaN` and infinity.
pub const EXPONENT_NAN_INF: i32 = 435411;

/// Binary exponent reported for zero.
pub const EXPONENT_ZERO: i32 = -435412;

/// Invalid operation flag.
pub const FLAG_INVALID: u32 = 1;

/// Division by zero flag.
pub const FLAG_DIV_ZERO: u32 = 2;

/// Overflow flag.
pub const FLAG_OVERFLOW: u32 = 4;

/// Underflow flag.
pub const FLAG_UNDERFLOW: u32 = 8;

/// Inexact result flag.
pub const FLAG_INEXACT: u32 = 16;

/// All flags.
pub const FLAGS_ALL: u32 =
    FLAG_INVALID | FLAG_DIV_ZERO | FLAG_OVERFLOW | FLAG_UNDERFLOW | FLAG_INEXACT;

/// Sign.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
pub enum Sign {
    /// Negative.
    Neg = -1,

    /// Positive.
    Pos = 1,
}

impl Sign {
    /// Changes the sign to the opposite.
    pub fn invert(&self) -> Self {
        match *self {
            Sign::Pos => Sign::Neg,
            Sign::Neg => Sign::Pos,
        }
    }

    /// Returns true if the sign is positive.
    pub fn is_positive(&self) -> bool {
        *self == Sign::Pos
    }

    /// Returns true if the sign is negative.
    pub fn is_negative(&self) -> bool {
        *self == Sign::Neg
    }

    /// Sign of a product or a quotient of two values with signs `self` and `s2`.
    pub fn xor(&self, s2: Sign) -> Self {
        if *self == s2 {
            Sign::Pos
        } else {
            Sign::Neg
        }
    }
}

/// Classification of a value.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
pub enum Kind {
    /// Finite non-zero value.
    Finite,

    /// Signed zero.
    Zero,

    /// Signed infinity.
    Infinite,

    /// Quiet `NaN`, propagates silently.
    QuietNan,

    /// Signaling `NaN`, raises the invalid operation flag when consumed.
    SignalingNan,
}

/// Rounding modes.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub enum RoundingMode {
    /// Round toward zero.
    Down = 0,

    /// Round away from zero.
    Up = 1,

    /// Round to nearest, ties away from zero.
    HalfUp = 2,

    /// Round to nearest, ties toward zero.
    HalfDown = 3,

    /// Round to nearest, ties to even.
    HalfEven = 4,

    /// Round to nearest, ties to odd.
    HalfOdd = 5,

    /// Round toward positive infinity.
    Ceil = 6,

    /// Round toward negative infinity.
    Floor = 7,
}

impl RoundingMode {
    pub(crate) fn from_u8(v: u8) -> Self {
        match v {
            0 => RoundingMode::Down,
            1 => RoundingMode::Up,
            2 => RoundingMode::HalfUp,
            3 => RoundingMode::HalfDown,
            5 => RoundingMode::HalfOdd,
            6 => RoundingMode::Ceil,
            7 => RoundingMode::Floor,
            _ => RoundingMode::HalfEven,
        }
    }
}

impl Default for RoundingMode {
    fn default() -> Self {
        RoundingMode::HalfEven
    }
}

/// Possible errors.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid argument, e.g. a malformed decimal literal.
    InvalidArgument,

    /// Precision is zero or exceeds `MAX_DECIMAL_DIGITS`.
    InvalidPrecision(usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::InvalidArgument => f.write_str("invalid argument"),
            Error::InvalidPrecision(p) => write!(
                f,
                "invalid precision {p}, expected a value between 1 and {MAX_DECIMAL_DIGITS} decimal digits"
            ),
        }
    }
}

impl std::error::Error for Error {}
