//! Lightweight unsigned integers.
//!
//! Integers are slices of radix 10000 digits, least significant digit first. Leading zeroes are
//! allowed everywhere.

use super::buf::DigitBuf;
use super::util::{add_carry, sqrt_int, sub_borrow};
use crate::defs::{Digit, DoubleDigit, SignedDigit, RADIX, RADIX_DD};
use core::cmp::Ordering;
use core::iter::repeat;
use itertools::izip;

/// Number of digits without leading zeroes.
#[inline]
pub fn significant_len(a: &[Digit]) -> usize {
    a.iter().rposition(|d| *d != 0).map_or(0, |i| i + 1)
}

#[inline]
pub fn is_zero(a: &[Digit]) -> bool {
    a.iter().all(|d| *d == 0)
}

/// Compare two integers.
pub fn cmp(a: &[Digit], b: &[Digit]) -> Ordering {
    let la = significant_len(a);
    let lb = significant_len(b);
    if la != lb {
        return la.cmp(&lb);
    }
    for (x, y) in a[..la].iter().rev().zip(b[..lb].iter().rev()) {
        match x.cmp(y) {
            Ordering::Equal => {}
            o => return o,
        }
    }
    Ordering::Equal
}

/// Returns `a + b` with one extra digit for the carry.
pub fn add(a: &[Digit], b: &[Digit]) -> DigitBuf {
    let (l, s) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut r = DigitBuf::new(l.len() + 1);
    let mut c = 0;
    for (x, y, d) in izip!(l.iter(), s.iter().chain(repeat(&0)), r.iter_mut()) {
        c = add_carry(*x, *y, c, d);
    }
    r[l.len()] = c;
    r
}

/// Returns `a - b`. `a` must not be less than `b`.
pub fn sub(a: &[Digit], b: &[Digit]) -> DigitBuf {
    debug_assert!(cmp(a, b) != Ordering::Less);
    let mut r = DigitBuf::new(a.len());
    let mut c = 0;
    for (x, y, d) in izip!(a.iter(), b.iter().chain(repeat(&0)), r.iter_mut()) {
        c = sub_borrow(*x, *y, c, d);
    }
    debug_assert!(c == 0);
    r
}

/// Add one unit in place. Returns true if the carry propagated out of `a`.
pub fn increment(a: &mut [Digit]) -> bool {
    for d in a.iter_mut() {
        if *d == RADIX - 1 {
            *d = 0;
        } else {
            *d += 1;
            return false;
        }
    }
    true
}

/// Subtract one unit in place. `a` must be non-zero.
pub fn decrement(a: &mut [Digit]) {
    for d in a.iter_mut() {
        if *d == 0 {
            *d = RADIX - 1;
        } else {
            *d -= 1;
            return;
        }
    }
}

/// Returns `a * b`.
pub fn mul(a: &[Digit], b: &[Digit]) -> DigitBuf {
    let mut r = DigitBuf::new(a.len() + b.len());
    for (i, ai) in a.iter().enumerate() {
        let ai = *ai as DoubleDigit;
        if ai == 0 {
            continue;
        }

        let mut k = 0;
        for (bj, rij) in b.iter().zip(r[i..].iter_mut()) {
            let m = ai * (*bj as DoubleDigit) + *rij as DoubleDigit + k;
            *rij = (m % RADIX_DD) as Digit;
            k = m / RADIX_DD;
        }
        r[i + b.len()] = k as Digit;
    }
    r
}

/// Returns `a * d`. The result has at least one extra digit, and more if the multiplier is not
/// below the radix.
pub fn mul_digit(a: &[Digit], d: DoubleDigit) -> DigitBuf {
    let mut r = DigitBuf::new(a.len() + 1);
    let mut k = 0;
    for (x, y) in a.iter().zip(r.iter_mut()) {
        let m = *x as DoubleDigit * d + k;
        *y = (m % RADIX_DD) as Digit;
        k = m / RADIX_DD;
    }
    r[a.len()] = (k % RADIX_DD) as Digit;
    k /= RADIX_DD;
    while k > 0 {
        r.push((k % RADIX_DD) as Digit);
        k /= RADIX_DD;
    }
    r
}

/// Returns quotient and remainder of `a / d`.
pub fn div_digit(a: &[Digit], d: Digit) -> (DigitBuf, Digit) {
    debug_assert!(d > 0);
    let d = d as DoubleDigit;
    let mut q = DigitBuf::new(a.len().max(1));
    let mut r: DoubleDigit = 0;
    for (x, y) in a.iter().zip(q.iter_mut()).rev() {
        let v = r * RADIX_DD + *x as DoubleDigit;
        *y = (v / d) as Digit;
        r = v % d;
    }
    (q, r as Digit)
}

/// Returns quotient and remainder of `u / v` (Knuth's algorithm D). `v` must be non-zero.
pub fn div_rem(u: &[Digit], v: &[Digit]) -> (DigitBuf, DigitBuf) {
    let n = significant_len(v);
    let ul = significant_len(u);
    debug_assert!(n > 0);

    if ul < n {
        return (DigitBuf::new(1), DigitBuf::from_slice(u));
    }

    let u = &u[..ul];
    let v = &v[..n];

    if n == 1 {
        let (q, r) = div_digit(u, v[0]);
        return (q, DigitBuf::from_slice(&[r]));
    }

    let m = ul - n;

    // normalize: factor d makes the most significant digit of the divisor at least RADIX / 2
    let d = RADIX_DD / (v[n - 1] as DoubleDigit + 1);
    let mut un = mul_digit(u, d);
    let vn = mul_digit(v, d);
    let v1 = vn[n - 1] as DoubleDigit;
    let v2 = vn[n - 2] as DoubleDigit;
    let mut q = DigitBuf::new(m + 1);

    for j in (0..=m).rev() {
        let num = un[j + n] as DoubleDigit * RADIX_DD + un[j + n - 1] as DoubleDigit;
        let mut qh = num / v1;
        let mut rh = num % v1;

        while qh >= RADIX_DD || qh * v2 > rh * RADIX_DD + un[j + n - 2] as DoubleDigit {
            qh -= 1;
            rh += v1;
            if rh >= RADIX_DD {
                break;
            }
        }

        // un[j..j+n+1] -= vn * qh
        let mut borrow: SignedDigit = 0;
        let mut carry: DoubleDigit = 0;
        for i in 0..n {
            let p = qh * vn[i] as DoubleDigit + carry;
            carry = p / RADIX_DD;
            let t = un[i + j] as SignedDigit - (p % RADIX_DD) as SignedDigit - borrow;
            if t < 0 {
                un[i + j] = (t + RADIX_DD as SignedDigit) as Digit;
                borrow = 1;
            } else {
                un[i + j] = t as Digit;
                borrow = 0;
            }
        }

        let t = un[j + n] as SignedDigit - carry as SignedDigit - borrow;
        if t < 0 {
            // compensate
            un[j + n] = (t + RADIX_DD as SignedDigit) as Digit;
            qh -= 1;
            let mut c = 0;
            for i in 0..n {
                let mut s = 0;
                c = add_carry(un[i + j], vn[i], c, &mut s);
                un[i + j] = s;
            }
            un[j + n] = (un[j + n] + c) % RADIX;
        } else {
            un[j + n] = t as Digit;
        }

        q[j] = qh as Digit;
    }

    let (r, _) = div_digit(&un[..n], d as Digit);
    (q, r)
}

/// Returns the integer square root of `m` and whether it is exact.
pub fn sqrt_rem(m: &[Digit]) -> (DigitBuf, bool) {
    let l = significant_len(m);
    if l == 0 {
        return (DigitBuf::new(1), true);
    }
    let m = &m[..l];

    // initial approximation is not less than the root
    let (top, low) = if l % 2 == 0 {
        (m[l - 1] as DoubleDigit * RADIX_DD + m[l - 2] as DoubleDigit, l - 2)
    } else {
        (m[l - 1] as DoubleDigit, l - 1)
    };
    let g = sqrt_int(top) + 1;
    let mut x = DigitBuf::new(low / 2 + 2);
    x[low / 2] = (g % RADIX_DD) as Digit;
    x[low / 2 + 1] = (g / RADIX_DD) as Digit;

    loop {
        let (q, _) = div_rem(m, &x);
        let s = add(&x, &q);
        let (y, _) = div_digit(&s, 2);
        if cmp(&y, &x) != Ordering::Less {
            break;
        }
        x = y;
    }

    let exact = cmp(&mul(&x, &x), m) == Ordering::Equal;
    (x, exact)
}
