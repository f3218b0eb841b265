//! Tangent.

use crate::defs::Kind;
use crate::num::Dfp;
use crate::ops::trig::Reduced;

impl Dfp {
    /// Returns the tangent of the number. Infinity raises the invalid operation flag.
    pub fn tan(&self) -> Self {
        if let Some(nan) = self.nan_self() {
            return nan;
        }

        match self.kind() {
            Kind::Zero => return self.clone(),
            Kind::Infinite => return self.invalid(),
            _ => {}
        }

        if let Some(r) = self.tiny_odd(false) {
            return r;
        }

        let (wf, x) = self.to_working();
        let red = Reduced::new(&x);
        let (s, c) = (red.sin_r(), red.cos_r());
        let r = if red.quadrant & 1 == 0 { s.div(&c) } else { c.div(&s).neg() };

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
    fn test_tan() {
        let f = Field::new(20).unwrap();
        let num = |s: &str| f.parse(s).unwrap();

        assert_eq!(num("-0").tan().sign(), Sign::Neg);
        assert_eq!(f.flags(), 0);
        assert!(num("Infinity").tan().is_nan());
        assert_eq!(f.flags(), FLAG_INVALID);

        for (x, r) in [
            ("1", "1.5574077246549022"),
            ("-0.5", "-0.54630248984379051326"),
            ("3", "-0.1425465430742778053"),
            ("100", "-0.58721391515692907668"),
            ("1e22", "-1.6287782256068989"),
            ("-7.25", "-1.4492795301268254"),
            ("1e-10", "1.000000000000000000e-10"),
            ("1.5707963267948966", "51998506188720271"),
        ] {
            f.clear_flags();
            assert_eq!(num(x).tan(), num(r), "{x}");
            assert_eq!(f.flags(), FLAG_INEXACT, "{x}");
        }
    }
}
