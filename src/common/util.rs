//! Auxiliary functions.

use crate::defs::{Digit, DoubleDigit, RADIX, RADIX_DD};

/// Powers of ten fitting in a radix digit.
pub const POW10: [Digit; 4] = [1, 10, 100, 1000];

/// Add with carry. Returns the carry and stores the sum digit in `r`.
#[inline]
pub fn add_carry(a: Digit, b: Digit, c: Digit, r: &mut Digit) -> Digit {
    let s = a + b + c;
    if s >= RADIX {
        *r = s - RADIX;
        1
    } else {
        *r = s;
        0
    }
}

/// Subtract with borrow. Returns the borrow and stores the difference digit in `r`.
#[inline]
pub fn sub_borrow(a: Digit, b: Digit, c: Digit, r: &mut Digit) -> Digit {
    let s = b + c;
    if a < s {
        *r = a + RADIX - s;
        1
    } else {
        *r = a - s;
        0
    }
}

/// Number of decimal positions occupied by a non-zero radix digit.
#[inline]
pub fn decimal_len(d: Digit) -> usize {
    if d >= 1000 {
        4
    } else if d >= 100 {
        3
    } else if d >= 10 {
        2
    } else {
        1
    }
}

/// Square root of a doubled digit rounded down.
pub fn sqrt_int(a: DoubleDigit) -> DoubleDigit {
    if a < 2 {
        return a;
    }
    let mut x = (a as f64).sqrt() as DoubleDigit;
    while x * x > a {
        x -= 1;
    }
    while (x + 1) * (x + 1) <= a {
        x += 1;
    }
    x
}

/// Split a non-negative integer into radix digits, least significant first.
pub fn split_u64(mut v: u64) -> impl Iterator<Item = Digit> {
    core::iter::from_fn(move || {
        if v == 0 {
            None
        } else {
            let d = (v % RADIX_DD) as Digit;
            v /= RADIX_DD;
            Some(d)
        }
    })
}
