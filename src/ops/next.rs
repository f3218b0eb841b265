//! Adjacent representable values.

use crate::common::buf::DigitBuf;
use crate::common::int;
use crate::defs::Kind;
use crate::defs::Sign;
use crate::defs::FLAG_INEXACT;
use crate::defs::MIN_EXP;
use crate::num::Dfp;
use core::cmp::Ordering;

impl Dfp {
    /// Returns the value of one unit in the last radix digit of the number.
    pub fn ulp(&self) -> Self {
        if let Some(nan) = self.nan_self() {
            return nan;
        }

        if self.kind() == Kind::Infinite {
            return self.abs();
        }

        let n = self.mantissa().len() as i32;
        self.unit_at(Sign::Pos, self.exponent_radix() - n + 1)
    }

    /// Number with the most significant digit 1, the other digits zero, and exponent `exp`.
    fn unit_at(&self, s: Sign, exp: i32) -> Self {
        let n = self.mantissa().len();
        let mut m = DigitBuf::new(n);
        m[n - 1] = 1;
        Dfp::from_parts(self.field(), s, exp, m)
    }

    /// Returns the representable number adjacent to `self` in the direction of `x`.
    ///
    /// If the numbers are equal, `x` is returned. Reaching infinity from a finite number or
    /// reaching zero from a non-zero number raises the inexact flag in addition to the flags of
    /// the underlying addition. Numbers of different precision raise the invalid operation flag.
    pub fn next_after(&self, x: &Self) -> Self {
        if !self.compatible(x) {
            return self.invalid();
        }

        if self.is_nan() || x.is_nan() {
            return self.invalid();
        }

        let ord = self.cmp_values(x);
        if ord == Ordering::Equal {
            return x.rebind(self.field());
        }

        if self.kind() == Kind::Infinite {
            return Dfp::max_finite(self.field(), self.sign());
        }

        let n = self.mantissa().len() as i32;
        let up = (ord == Ordering::Less) ^ self.sign().is_negative();

        let inc = if self.kind() == Kind::Zero {
            self.unit_at(self.sign(), MIN_EXP - n)
        } else if !up && self.is_radix_power() {
            self.unit_at(self.sign(), self.exponent_radix() - n)
        } else {
            self.unit_at(self.sign(), self.exponent_radix() - n + 1)
        };

        let ret = if up { self.add(&inc) } else { self.sub(&inc) };

        if (ret.is_infinite() && self.kind() != Kind::Infinite)
            || (ret.kind() == Kind::Zero && self.kind() != Kind::Zero)
        {
            self.field().set_flags_bits(FLAG_INEXACT);
        }

        ret
    }

    /// True for an exact power of 10000.
    fn is_radix_power(&self) -> bool {
        let m = self.mantissa();
        m[m.len() - 1] == 1 && int::is_zero(&m[..m.len() - 1])
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::defs::FLAG_INVALID;
    use crate::defs::FLAG_OVERFLOW;
    use crate::defs::FLAG_UNDERFLOW;
    use crate::field::Field;

    #[test]
    fn test_ulp() {
        let f40 = Field::new(40).unwrap();
        assert_eq!(f40.one().ulp(), f40.parse("1e-36").unwrap());

        let f41 = Field::new(41).unwrap();
        let one = f41.one();
        let ulp = one.ulp();
        assert_eq!(ulp, f41.parse("1e-40").unwrap());
        assert!(one.add(&ulp).greater_than(&one));
        assert!(!one.add(&ulp.div_int(2)).greater_than(&one));
        assert_eq!(f41.parse("-123.45").unwrap().ulp(), f41.parse("1e-40").unwrap());
        assert_eq!(f41.parse("-12345.6").unwrap().ulp(), f41.parse("1e-36").unwrap());
    }

    #[test]
    fn test_next_after() {
        let f = Field::new(20).unwrap();
        let num = |s: &str| f.parse(s).unwrap();

        for (a, b, r, flags) in [
            ("1", "2", "1.0000000000000001", 0),
            ("1", "0", "0.99999999999999999999", 0),
            ("1", "1", "1", 0),
            ("-1", "-2", "-1.0000000000000001", 0),
            ("-1", "0", "-0.99999999999999999999", 0),
            ("-1", "-1", "-1", 0),
            ("1.5", "2", "1.5000000000000001", 0),
            ("1.5", "1", "1.4999999999999999", 0),
            ("0", "1", "1e-131092", FLAG_UNDERFLOW),
            ("0", "-1", "-1e-131092", FLAG_UNDERFLOW),
            ("9.9999999999999999999e131071", "Infinity", "Infinity", FLAG_OVERFLOW | FLAG_INEXACT),
            ("1e-131092", "0", "0", FLAG_UNDERFLOW | FLAG_INEXACT),
        ] {
            let x = num(a);
            f.clear_flags();
            let n = x.next_after(&num(b));
            assert_eq!(n, num(r), "{a} -> {b}");
            assert_eq!(f.flags(), flags, "{a} -> {b}");
        }

        f.clear_flags();
        let inf = num("Infinity");
        assert_eq!(inf.next_after(&num("0")), num("9.9999999999999999999e131071"));
        assert_eq!(f.flags(), 0);

        let g = Field::new(40).unwrap();
        assert!(f.one().next_after(&g.one()).is_nan());
        assert_eq!(f.flags(), FLAG_INVALID);

        f.clear_flags();
        assert!(f.nan(false).next_after(&f.one()).is_nan());
        assert_eq!(f.flags(), FLAG_INVALID);
    }
}
