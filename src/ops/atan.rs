//! Arctangent and two-argument arctangent.

use crate::defs::Kind;
use crate::defs::FLAG_OVERFLOW;
use crate::num::Dfp;
use crate::ops::series::series_run;
use crate::ops::series::AtanhCoeff;
use core::cmp::Ordering;

impl Dfp {
    /// Returns the arctangent of the number.
    pub fn atan(&self) -> Self {
        if let Some(nan) = self.nan_self() {
            return nan;
        }

        if self.kind() == Kind::Zero {
            return self.clone();
        }

        if let Some(r) = self.tiny_odd(true) {
            return r;
        }

        let (wf, x) = self.to_working();
        let r = if x.kind() == Kind::Infinite {
            wf.pi().div_int(2).with_sign(x.sign())
        } else {
            x.atan_working()
        };

        self.from_working(&wf, &r)
    }

    /// atan(x) for a finite non-zero x of the working field.
    pub(crate) fn atan_working(&self) -> Self {
        let wf = self.field();
        let one = wf.one();

        let mut y = self.abs();
        let inv = y.cmp_values(&one) == Ordering::Greater;
        if inv {
            y = one.div(&y);
        }

        let r = match y.tiny_odd(true) {
            Some(r) => r,
            None => {
                // atan(y) = 2·atan(y/(1 + sqrt(1 + y²)))
                let limit = one.div_int(8);
                let mut p = 0;
                while y.cmp_values(&limit) == Ordering::Greater {
                    y = y.div(&one.add(&one.add(&y.mul(&y)).sqrt()));
                    p += 1;
                }

                series_run(wf.zero(), y.clone(), &y.mul(&y), &mut AtanhCoeff::new(one, true)).mul_int(1 << p)
            }
        };

        let r = if inv { wf.pi().div_int(2).sub(&r) } else { r };
        r.with_sign(self.sign())
    }

    /// Returns the angle of the point `(x, y)` in radians, where `self` is `y`.
    ///
    /// Signed zeroes and infinities give the IEEE 754 `atan2` results.
    pub fn atan2(&self, x: &Self) -> Self {
        if !self.compatible(x) {
            return self.invalid();
        }

        if let Some(nan) = self.nan_operand(x) {
            return nan;
        }

        let field = self.field();
        let ys = self.sign();
        let x_neg = x.sign().is_negative();

        let zero_angle = match (self.kind(), x.kind()) {
            (Kind::Zero, _) | (Kind::Finite, Kind::Infinite) => !x_neg,
            _ => false,
        };
        if zero_angle {
            return Dfp::new_special(field, ys, Kind::Zero);
        }

        let (wf, y) = self.to_working();
        let pi = wf.pi();

        let r = match (y.kind(), x.kind()) {
            (Kind::Zero, _) | (Kind::Finite, Kind::Infinite) => pi,
            (Kind::Infinite, Kind::Infinite) => {
                let q = pi.div_int(4);
                if x_neg {
                    q.mul_int(3)
                } else {
                    q
                }
            }
            (Kind::Infinite, _) | (_, Kind::Zero) => pi.div_int(2),
            _ => {
                let xw = x.new_instance(&wf, None);
                let sf = wf.scratch();
                let q = y.abs().rebind(&sf).div(&xw.abs());

                let a = match q.kind() {
                    Kind::Infinite => pi.div_int(2),
                    _ => {
                        // an overflowed quotient has no effect on the angle
                        wf.set_flags_bits(sf.flags() & !FLAG_OVERFLOW);
                        if q.kind() == Kind::Zero {
                            q.rebind(&wf)
                        } else {
                            q.rebind(&wf).atan_working()
                        }
                    }
                };

                if x_neg {
                    pi.sub(&a)
                } else {
                    a
                }
            }
        };

        self.from_working(&wf, &r.with_sign(ys))
    }
}

#[cfg(test)]
mod tests {

    use crate::defs::Sign;
    use crate::defs::FLAG_INEXACT;
    use crate::defs::FLAG_INVALID;
    use crate::field::Field;

    #[test]
    fn test_atan() {
        let f = Field::new(20).unwrap();
        let num = |s: &str| f.parse(s).unwrap();

        assert_eq!(num("-0").atan().sign(), Sign::Neg);
        assert_eq!(f.flags(), 0);

        for (x, r) in [
            ("1", "0.78539816339744830962"),
            ("-0.5", "-0.46364760900080611621"),
            ("3", "1.2490457723982544"),
            ("1e10", "1.5707963266948966"),
            ("-1e-5", "-0.000009999999999666666667"),
            ("0.125", "0.12435499454676143503"),
            ("1e40", "1.5707963267948966"),
            ("1e100000", "1.5707963267948966"),
            ("-Infinity", "-1.5707963267948966"),
        ] {
            f.clear_flags();
            assert_eq!(num(x).atan(), num(r), "{x}");
            assert_eq!(f.flags(), FLAG_INEXACT, "{x}");
        }
    }

    #[test]
    fn test_atan2() {
        let f = Field::new(20).unwrap();
        let num = |s: &str| f.parse(s).unwrap();

        for (y, x, r) in [
            ("0", "2", "0"),
            ("-0", "0", "-0"),
            ("3", "Infinity", "0"),
            ("-3", "Infinity", "-0"),
        ] {
            let v = num(y).atan2(&num(x));
            assert_eq!(v, num(r), "{y} {x}");
            assert_eq!(v.sign(), num(r).sign(), "{y} {x}");
        }
        assert_eq!(f.flags(), 0);

        for (y, x, r) in [
            ("0", "-0", "3.1415926535897932"),
            ("-0", "-5", "-3.1415926535897932"),
            ("1", "0", "1.5707963267948966"),
            ("-1", "-0", "-1.5707963267948966"),
            ("Infinity", "Infinity", "0.78539816339744830962"),
            ("-Infinity", "-Infinity", "-2.3561944901923449"),
            ("Infinity", "-3", "1.5707963267948966"),
            ("3", "-Infinity", "3.1415926535897932"),
            ("1", "-1", "2.3561944901923449"),
            ("-2", "-3", "-2.5535900500422257"),
            ("3", "4", "0.6435011087932843868"),
            ("-1e-5", "-1", "-3.1415826535897936"),
            ("1", "1e-30", "1.5707963267948966"),
            ("1e-30", "-1", "3.1415926535897932"),
            ("1e100000", "1e-100000", "1.5707963267948966"),
        ] {
            f.clear_flags();
            assert_eq!(num(y).atan2(&num(x)), num(r), "{y} {x}");
            assert_eq!(f.flags(), FLAG_INEXACT, "{y} {x}");
        }

        f.clear_flags();
        assert!(num("1").atan2(&num("NaN")).is_nan());
        assert_eq!(f.flags(), 0);
        assert!(num("1").atan2(&f.nan(true)).is_nan());
        assert_eq!(f.flags(), FLAG_INVALID);
    }
}
