//! Generic numeric contract and operator traits.

use crate::num::Dfp;
use core::ops::Add;
use core::ops::AddAssign;
use core::ops::Div;
use core::ops::DivAssign;
use core::ops::Mul;
use core::ops::MulAssign;
use core::ops::Neg;
use core::ops::Rem;
use core::ops::RemAssign;
use core::ops::Sub;
use core::ops::SubAssign;

/// Minimal set of operations that generic numerical algorithms require from a number type.
///
/// The trait is implemented for [`Dfp`] and for `f64`, so an algorithm written against it
/// can run at any decimal precision as well as in native floating point.
pub trait FieldElement: Clone + PartialEq + PartialOrd {
    /// Returns `self + rhs`.
    fn add(&self, rhs: &Self) -> Self;

    /// Returns `self - rhs`.
    fn sub(&self, rhs: &Self) -> Self;

    /// Returns `self * rhs`.
    fn mul(&self, rhs: &Self) -> Self;

    /// Returns `self / rhs`.
    fn div(&self, rhs: &Self) -> Self;

    /// Returns `-self`.
    fn neg(&self) -> Self;

    /// Returns `|self|`.
    fn abs(&self) -> Self;

    /// Returns true if `self < rhs`.
    fn less_than(&self, rhs: &Self) -> bool;

    /// Returns true if `self > rhs`.
    fn greater_than(&self, rhs: &Self) -> bool;

    /// Returns zero of the same kind as `self`.
    fn zero_like(&self) -> Self;

    /// Returns one of the same kind as `self`.
    fn one_like(&self) -> Self;

    /// Returns the nearest `f64` value.
    fn real(&self) -> f64;
}

impl FieldElement for Dfp {
    fn add(&self, rhs: &Self) -> Self {
        Dfp::add(self, rhs)
    }

    fn sub(&self, rhs: &Self) -> Self {
        Dfp::sub(self, rhs)
    }

    fn mul(&self, rhs: &Self) -> Self {
        Dfp::mul(self, rhs)
    }

    fn div(&self, rhs: &Self) -> Self {
        Dfp::div(self, rhs)
    }

    fn neg(&self) -> Self {
        Dfp::neg(self)
    }

    fn abs(&self) -> Self {
        Dfp::abs(self)
    }

    fn less_than(&self, rhs: &Self) -> bool {
        Dfp::less_than(self, rhs)
    }

    fn greater_than(&self, rhs: &Self) -> bool {
        Dfp::greater_than(self, rhs)
    }

    fn zero_like(&self) -> Self {
        self.field().zero()
    }

    fn one_like(&self) -> Self {
        self.field().one()
    }

    fn real(&self) -> f64 {
        self.to_f64()
    }
}

impl FieldElement for f64 {
    fn add(&self, rhs: &Self) -> Self {
        self + rhs
    }

    fn sub(&self, rhs: &Self) -> Self {
        self - rhs
    }

    fn mul(&self, rhs: &Self) -> Self {
        self * rhs
    }

    fn div(&self, rhs: &Self) -> Self {
        self / rhs
    }

    fn neg(&self) -> Self {
        -self
    }

    fn abs(&self) -> Self {
        f64::abs(*self)
    }

    fn less_than(&self, rhs: &Self) -> bool {
        self < rhs
    }

    fn greater_than(&self, rhs: &Self) -> bool {
        self > rhs
    }

    fn zero_like(&self) -> Self {
        0.0
    }

    fn one_like(&self) -> Self {
        1.0
    }

    fn real(&self) -> f64 {
        *self
    }
}

macro_rules! impl_binary_op {
    ($op:ident, $fname:ident, $op_assign:ident, $fname_assign:ident, $method:ident) => {
        impl $op for Dfp {
            type Output = Dfp;
            fn $fname(self, rhs: Dfp) -> Dfp {
                Dfp::$method(&self, &rhs)
            }
        }

        impl $op<&Dfp> for Dfp {
            type Output = Dfp;
            fn $fname(self, rhs: &Dfp) -> Dfp {
                Dfp::$method(&self, rhs)
            }
        }

        impl $op<Dfp> for &Dfp {
            type Output = Dfp;
            fn $fname(self, rhs: Dfp) -> Dfp {
                Dfp::$method(self, &rhs)
            }
        }

        impl $op<&Dfp> for &Dfp {
            type Output = Dfp;
            fn $fname(self, rhs: &Dfp) -> Dfp {
                Dfp::$method(self, rhs)
            }
        }

        impl $op_assign for Dfp {
            fn $fname_assign(&mut self, rhs: Dfp) {
                *self = Dfp::$method(self, &rhs)
            }
        }

        impl $op_assign<&Dfp> for Dfp {
            fn $fname_assign(&mut self, rhs: &Dfp) {
                *self = Dfp::$method(self, rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, AddAssign, add_assign, add);
impl_binary_op!(Sub, sub, SubAssign, sub_assign, sub);
impl_binary_op!(Mul, mul, MulAssign, mul_assign, mul);
impl_binary_op!(Div, div, DivAssign, div_assign, div);
impl_binary_op!(Rem, rem, RemAssign, rem_assign, rem);

impl Neg for Dfp {
    type Output = Dfp;
    fn neg(self) -> Dfp {
        Dfp::neg(&self)
    }
}

impl Neg for &Dfp {
    type Output = Dfp;
    fn neg(self) -> Dfp {
        Dfp::neg(self)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::defs::FLAG_INEXACT;
    use crate::field::Field;

    /// Square root by Newton iteration written against the generic contract.
    fn newton_sqrt<T: FieldElement>(a: &T, iter: usize) -> T {
        let one = a.one_like();
        let two = one.add(&one);
        let mut x = one;
        for _ in 0..iter {
            x = x.add(&a.div(&x)).div(&two);
        }
        x
    }

    /// Horner scheme.
    fn poly<T: FieldElement>(coeffs: &[T], x: &T) -> T {
        coeffs.iter().rev().fold(x.zero_like(), |acc, c| acc.mul(x).add(c))
    }

    #[test]
    fn test_field_element() {
        let f = Field::new(30).unwrap();
        let two = f.two();

        let r = newton_sqrt(&two, 10);
        assert!(!Dfp::sub(&r, &two.sqrt()).abs().greater_than(&r.ulp()));
        assert_eq!(r.real(), 2f64.sqrt());
        assert!((newton_sqrt(&2.0f64, 10) - 2f64.sqrt()).abs() < 1e-15);

        let c = [f.from_i32(1), f.from_i32(-3), f.from_i32(2)];
        assert_eq!(poly(&c, &f.from_i32(5)), f.from_i32(36));
        assert_eq!(poly(&[1.0f64, -3.0, 2.0], &5.0), 36.0);

        assert!(FieldElement::less_than(&f.one(), &two));
        assert!(FieldElement::greater_than(&1.5f64, &-2.0));
        assert_eq!(FieldElement::neg(&f.one()).abs(), f.one());
        assert_eq!(FieldElement::abs(&-2.5f64), 2.5);
        assert_eq!(f.one().zero_like(), f.zero());
        assert_eq!(3.0f64.one_like(), 1.0);
    }

    #[test]
    fn test_operators() {
        let f = Field::new(20).unwrap();
        let num = |s: &str| f.parse(s).unwrap();

        let a = num("1.5");
        let b = num("-0.25");

        assert_eq!(&a + &b, num("1.25"));
        assert_eq!(a.clone() - &b, num("1.75"));
        assert_eq!(&a * b.clone(), num("-0.375"));
        assert_eq!(a.clone() / b.clone(), num("-6"));
        assert_eq!(-&a, num("-1.5"));
        assert_eq!(-b.clone(), num("0.25"));

        let mut c = a.clone();
        c += &b;
        c *= num("4");
        c -= num("1");
        c /= &num("8");
        assert_eq!(c, num("0.5"));
        assert_eq!(f.flags(), 0);

        let mut d = f.one();
        d /= num("3");
        assert_eq!(d.to_string(), "0.33333333333333333333");
        assert_eq!(f.flags(), FLAG_INEXACT);

        assert_eq!(&a % num("0.4"), num("-0.1"));
        c %= num("0.3");
        assert_eq!(c, num("-0.1"));
    }
}
