//! Astro-decimal is a library of arbitrary precision decimal floating point numbers.
//!
//! Numbers are produced by a [`Field`], which defines the precision in decimal digits, the
//! rounding mode, and holds the sticky status flags of the IEEE 754 style: invalid operation,
//! division by zero, overflow, underflow, and inexact result. Arithmetic never fails: an
//! exceptional condition raises a flag and produces a special value (`NaN`, a signed infinity,
//! or a signed zero). Flags accumulate until cleared.
//!
//! The mantissa of a number is stored in radix 10000 digits.
//!
//! | Name                           | Value     |
//! |:-------------------------------|----------:|
//! | Maximum precision, digits      | 1000000   |
//! | Largest finite value           | ≈1e131072 |
//! | Smallest normal value          | 1e-131072 |
//!
//! ## Examples
//!
//! ```
//! use astro_decimal::{Field, RoundingMode, FLAG_INEXACT};
//!
//! let f = Field::new(30).unwrap();
//!
//! let two = f.parse("2").unwrap();
//! assert_eq!(two.sqrt().to_string(), "1.4142135623730950488016887242");
//! assert_eq!(f.flags(), FLAG_INEXACT);
//!
//! f.clear_flags();
//! f.set_rounding_mode(RoundingMode::Up);
//! let third = f.one().div_int(3);
//! assert_eq!(third.to_string(), "0.33333333333333333333333333333334");
//!
//! // constants are computed once for each precision
//! assert_eq!(f.pi().to_string(), "3.1415926535897932384626433833");
//! ```

#![deny(missing_docs)]
#![deny(clippy::suspicious)]
#![allow(clippy::comparison_chain)]
#![allow(clippy::should_implement_trait)]
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::module_inception)]

mod common;
mod conv;
mod defs;
mod ext;
mod field;
mod format;
mod num;
mod ops;
mod parser;
mod rounding;

#[cfg(feature = "serde")]
mod for_3rd;

pub use crate::defs::Digit;
pub use crate::defs::Error;
pub use crate::defs::Exponent;
pub use crate::defs::Kind;
pub use crate::defs::RoundingMode;
pub use crate::defs::Sign;
pub use crate::ext::FieldElement;
pub use crate::field::Field;
pub use crate::num::Dfp;

#[cfg(feature = "serde")]
pub use crate::for_3rd::DfpSeed;

pub use crate::defs::DECIMAL_POSITIONS;
pub use crate::defs::ERR_SCALE;
pub use crate::defs::EXPONENT_NAN_INF;
pub use crate::defs::EXPONENT_ZERO;
pub use crate::defs::FLAGS_ALL;
pub use crate::defs::FLAG_DIV_ZERO;
pub use crate::defs::FLAG_INEXACT;
pub use crate::defs::FLAG_INVALID;
pub use crate::defs::FLAG_OVERFLOW;
pub use crate::defs::FLAG_UNDERFLOW;
pub use crate::defs::MAX_DECIMAL_DIGITS;
pub use crate::defs::MAX_EXP;
pub use crate::defs::MIN_EXP;
pub use crate::defs::RADIX;
