//! Digit storage and big integer kernels shared by the arithmetic.

pub mod buf;
pub mod int;
pub mod util;
