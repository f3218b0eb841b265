//! Sine.

use crate::defs::Kind;
use crate::num::Dfp;
use crate::ops::trig::Reduced;

impl Dfp {
    /// Returns the sine of the number. Infinity raises the invalid operation flag.
    pub fn sin(&self) -> Self {
        if let Some(nan) = self.nan_self() {
            return nan;
        }

        match self.kind() {
            Kind::Zero => return self.clone(),
            Kind::Infinite => return self.invalid(),
            _ => {}
        }

        if let Some(r) = self.tiny_odd(true) {
            return r;
        }

        let (wf, x) = self.to_working();
        let red = Reduced::new(&x);
        let r = match red.quadrant {
            0 => red.sin_r(),
            1 => red.cos_r(),
            2 => red.sin_r().neg(),
            _ => red.cos_r().neg(),
        };

        self.from_working(&wf, &r)
    }
}

#[cfg(test)]
mod tests {

    use crate::defs::Sign;
    use crate::defs::FLAG_INEXACT;
    use crate::defs::FLAG_INVALID;
    use crate::field::Field;

    #[test]
    fn test_sin() {
        let f = Field::new(20).unwrap();
        let num = |s: &str| f.parse(s).unwrap();

        assert_eq!(num("-0").sin().sign(), Sign::Neg);
        assert_eq!(f.flags(), 0);
        assert!(num("Infinity").sin().is_nan());
        assert_eq!(f.flags(), FLAG_INVALID);

        for (x, r) in [
            ("1", "0.84147098480789650665"),
            ("-0.5", "-0.47942553860420300027"),
            ("3", "0.1411200080598672221"),
            ("100", "-0.50636564110975879366"),
            ("1e22", "-0.85220084976718880177"),
            ("-7.25", "-0.82308087901150545842"),
            ("1e-10", "1.000000000000000000e-10"),
            ("3.1415926535897932", "3.8462643383279502884e-17"),
        ] {
            f.clear_flags();
            assert_eq!(num(x).sin(), num(r), "{x}");
            assert_eq!(f.flags(), FLAG_INEXACT, "{x}");
        }
    }
}
