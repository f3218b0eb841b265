//! Arccosine.

use crate::defs::Kind;
use crate::num::Dfp;
use core::cmp::Ordering;

impl Dfp {
    /// Returns the arccosine of the number.
    ///
    /// Numbers with a magnitude greater than 1 raise the invalid operation flag and give `NaN`.
    pub fn acos(&self) -> Self {
        if let Some(nan) = self.nan_self() {
            return nan;
        }

        let one = self.field().one();
        if self.abs().cmp_values(&one) == Ordering::Greater {
            return self.invalid();
        }

        if self.kind() == Kind::Finite && self.cmp_values(&one) == Ordering::Equal {
            return self.field().zero();
        }

        let (wf, x) = self.to_working();
        let one = wf.one();
        let r = if x.kind() == Kind::Zero {
            wf.pi().div_int(2)
        } else if x.cmp_values(&one.neg()) == Ordering::Equal {
            wf.pi()
        } else {
            // acos(x) = 2·atan(sqrt((1 - x)/(1 + x)))
            one.sub(&x).div(&one.add(&x)).sqrt().atan_working().mul_int(2)
        };

        self.from_working(&wf, &r)
    }
}

#[cfg(test)]
mod tests {

    use crate::defs::FLAG_INEXACT;
    use crate::defs::FLAG_INVALID;
    use crate::field::Field;

    #[test]
    fn test_acos() {
        let f = Field::new(20).unwrap();
        let num = |s: &str| f.parse(s).unwrap();

        assert_eq!(num("1").acos(), f.zero());
        assert_eq!(f.flags(), 0);

        assert!(num("-1.0000000000000001").acos().is_nan());
        assert!(num("Infinity").acos().is_nan());
        assert_eq!(f.flags(), FLAG_INVALID);

        for (x, r) in [
            ("0.5", "1.0471975511965977"),
            ("-0.9", "2.6905658417935308"),
            ("1e-5", "1.5707863267948965"),
            ("0.99999999", "0.00014142135635516064"),
            ("0", "1.5707963267948966"),
            ("-0", "1.5707963267948966"),
            ("-1", "3.1415926535897932"),
        ] {
            f.clear_flags();
            assert_eq!(num(x).acos(), num(r), "{x}");
            assert_eq!(f.flags(), FLAG_INEXACT, "{x}");
        }
    }
}
