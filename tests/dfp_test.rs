//! Behavioural tests of the decimal arithmetic through the public interface.

use astro_decimal::{
    Dfp, Field, FieldElement, Kind, RoundingMode, Sign, FLAG_DIV_ZERO, FLAG_INEXACT, FLAG_INVALID,
    FLAG_OVERFLOW, FLAG_UNDERFLOW,
};
use rand::random;

fn num(f: &Field, s: &str) -> Dfp {
    f.parse(s).unwrap()
}

/// Random finite non-zero number with a decimal exponent in the range (-rng, rng).
fn random_num(f: &Field, rng: i32) -> Dfp {
    let mut x = f.from_f64(random::<f64>() + 0.001).mul(&f.one().power10(random::<i32>() % rng));
    if random::<bool>() {
        x = x.neg();
    }
    x
}

/// Checks `|a - b| <= 10^-40·max(1, |b|)`.
fn assert_close(a: &Dfp, b: &Dfp, msg: &str) {
    let f = b.field();
    let d = a.sub(b).abs();
    let scale = if b.abs().greater_than(&f.one()) { b.abs() } else { f.one() };
    assert!(!d.greater_than(&scale.mul(&f.one().power10(-40))), "{msg}: {a} != {b}");
}

#[test]
fn test_scenarios() {
    let f = Field::new(20).unwrap();

    let r = num(&f, "1").add(&num(&f, "1e-17"));
    assert_eq!(r, f.one());
    assert_eq!(f.flags(), FLAG_INEXACT);

    f.clear_flags();
    let r = num(&f, "9.9999999999999999999e131071").add(&num(&f, "1e131052"));
    assert!(r.is_infinite());
    assert_eq!(r.sign(), Sign::Pos);
    assert_eq!(f.flags(), FLAG_OVERFLOW);

    f.clear_flags();
    assert!(f.zero().div(&f.zero()).is_nan());
    assert_eq!(f.flags(), FLAG_DIV_ZERO);

    f.clear_flags();
    assert!(num(&f, "Infinity").add(&num(&f, "-Infinity")).is_nan());
    assert_eq!(f.flags(), FLAG_INVALID);

    f.clear_flags();
    assert!(!num(&f, "1e20").less_than(&num(&f, "1.0000000000000001")));
    assert_eq!(f.flags(), 0);

    let g = Field::new(26).unwrap();
    let h = Field::new(16).unwrap();
    let x = num(&g, "9999.99999999999950000000");
    assert_eq!(g.flags(), 0);
    let r = x.new_instance(&h, Some(RoundingMode::HalfEven));
    assert_eq!(r.to_string(), "10000.");
    assert_eq!(h.flags(), FLAG_INEXACT);
}

#[test]
fn test_rounding_modes() {
    let f = Field::new(20).unwrap();
    let two = f.two();
    let three = f.from_i32(3);

    for (rm, pos, neg) in [
        (RoundingMode::Down, "0.66666666666666666666", "-0.66666666666666666666"),
        (RoundingMode::Up, "0.66666666666666666667", "-0.66666666666666666667"),
        (RoundingMode::HalfUp, "0.66666666666666666667", "-0.66666666666666666667"),
        (RoundingMode::HalfDown, "0.66666666666666666667", "-0.66666666666666666667"),
        (RoundingMode::HalfEven, "0.66666666666666666667", "-0.66666666666666666667"),
        (RoundingMode::HalfOdd, "0.66666666666666666667", "-0.66666666666666666667"),
        (RoundingMode::Ceil, "0.66666666666666666667", "-0.66666666666666666666"),
        (RoundingMode::Floor, "0.66666666666666666666", "-0.66666666666666666667"),
    ] {
        f.set_rounding_mode(rm);
        assert_eq!(two.div(&three).to_string(), pos, "{rm:?}");
        assert_eq!(two.neg().div(&three).to_string(), neg, "{rm:?}");
    }

    // ties
    f.set_rounding_mode(RoundingMode::HalfEven);
    let tie = num(&f, "5e-17");
    assert_eq!(f.one().add(&tie), f.one());
    assert_eq!(num(&f, "1.0000000000000001").add(&tie), num(&f, "1.0000000000000002"));

    f.set_rounding_mode(RoundingMode::HalfOdd);
    assert_eq!(f.one().add(&tie), num(&f, "1.0000000000000001"));

    f.set_rounding_mode(RoundingMode::HalfDown);
    assert_eq!(f.one().add(&tie), f.one());

    f.set_rounding_mode(RoundingMode::HalfUp);
    assert_eq!(f.one().add(&tie), num(&f, "1.0000000000000001"));
}

#[test]
fn test_properties() {
    let f = Field::new(30).unwrap();

    for _ in 0..1000 {
        let a = random_num(&f, 40);
        let b = random_num(&f, 40);

        // commutativity is bit-exact
        let s1 = a.add(&b);
        let s2 = b.add(&a);
        assert_eq!(s1.to_string(), s2.to_string());
        assert_eq!(s1.sign(), s2.sign());
        assert_eq!(a.mul(&b).to_string(), b.mul(&a).to_string());

        // x / x == 1 exactly
        f.clear_flags();
        assert_eq!(a.div(&a), f.one());
        assert_eq!(f.flags(), 0);

        // formatting and parsing round trip
        let p = num(&f, &a.to_string());
        assert_eq!(p, a);
        assert_eq!(f.flags(), 0);

        // conversion to the same precision
        let g = Field::new(30).unwrap();
        assert_eq!(a.new_instance(&g, None), a);
        assert_eq!(f.flags() | g.flags(), 0);

        // sqrt is correctly rounded
        let w = Field::new(80).unwrap();
        let r = a.abs().sqrt().new_instance(&w, None);
        let half_ulp = a.abs().sqrt().ulp().new_instance(&w, None).div_int(2);
        let lo = r.sub(&half_ulp);
        let hi = r.add(&half_ulp);
        let a80 = a.abs().new_instance(&w, None);
        assert!(!lo.mul(&lo).greater_than(&a80));
        assert!(!hi.mul(&hi).less_than(&a80));
    }

    let nan = f.nan(false);
    assert!(nan != nan);
    assert!(nan.partial_cmp(&nan).is_none());
    assert!(!nan.less_than(&f.one()) && !nan.greater_than(&f.one()));
}

#[test]
fn test_conversions() {
    let f = Field::new(40).unwrap();

    assert_eq!(f.from_i64(i64::MIN).to_string(), "-9223372036854775808.");
    assert_eq!(f.from_i64(i64::MAX).to_string(), "9223372036854775807.");
    assert_eq!(f.from_i8(-128), num(&f, "-128"));
    assert_eq!(f.from_f64(0.1).to_string(), "0.1000000000000000055511151231257827021182");
    assert_eq!(f.from_f64(-0.0).sign(), Sign::Neg);
    assert!(f.from_f64(f64::NAN).is_nan());
    assert_eq!(f.from_f64(f64::NEG_INFINITY), num(&f, "-Infinity"));

    for _ in 0..1000 {
        let v = random::<f64>() * 10f64.powi(random::<i32>() % 300);
        assert_eq!(f.from_f64(v).to_f64(), v);
        assert_eq!(f.from_f64(v).real(), v);
    }

    assert_eq!(num(&f, "-0").to_f64().to_bits(), (-0.0f64).to_bits());
    assert_eq!(num(&f, "1e400").to_f64(), f64::INFINITY);
    assert_eq!(num(&f, "-1e-400").to_f64(), 0.0);

    // different precisions
    let g = Field::new(20).unwrap();
    let x = f.pi().new_instance(&g, None);
    assert_eq!(g.flags(), FLAG_INEXACT);
    assert_eq!(x, g.pi());
    assert!(x.add(&f.one()).is_nan());
    assert_eq!(g.flags(), FLAG_INEXACT | FLAG_INVALID);
}

#[test]
fn test_range() {
    let f = Field::new(20).unwrap();

    // gradual underflow keeps the digits
    let tiny = num(&f, "1e-131072");
    assert_eq!(f.flags(), 0);
    let r = tiny.div_int(100);
    assert_eq!(r.kind(), Kind::Finite);
    assert_eq!(f.flags(), FLAG_UNDERFLOW);

    f.clear_flags();
    let r = tiny.mul(&num(&f, "1e-100"));
    assert!(r.is_zero());
    assert_eq!(f.flags() & FLAG_UNDERFLOW, FLAG_UNDERFLOW);

    // toward zero overflow saturates
    f.clear_flags();
    f.set_rounding_mode(RoundingMode::Down);
    let big = num(&f, "9e131071");
    let max = num(&f, "9.9999999999999999999e131071");
    let r = big.mul_int(2);
    assert_eq!(r, max);
    assert_eq!(f.flags(), FLAG_OVERFLOW);

    f.set_rounding_mode(RoundingMode::HalfEven);
    assert!(big.mul_int(-2).is_infinite());
}

#[test]
fn test_elementary_identities() {
    let f = Field::new(50).unwrap();

    for _ in 0..100 {
        let x = random_num(&f, 3);

        let s = x.sin();
        let c = x.cos();
        assert_close(&s.mul(&s).add(&c.mul(&c)), &f.one(), "sin^2 + cos^2");
        assert_close(&x.tan(), &s.div(&c), "tan");

        let y = x.abs();
        assert_close(&y.ln().exp(), &y, "exp(ln)");
        assert_close(&y.sqrt().mul(&y.sqrt()), &y, "sqrt");
        assert_close(&y.log10(), &y.ln().div(&f.ln10()), "log10");

        // sinh and cosh cancel for negative x, so the error is relative to cosh
        let d = x.sinh().add(&x.cosh()).sub(&x.exp()).abs();
        assert!(!d.greater_than(&x.cosh().mul(&f.one().power10(-40))), "sinh + cosh: {x}");
        assert_close(&x.tanh(), &x.sinh().div(&x.cosh()), "tanh");

        let a = x.atan();
        assert_close(&a.tan().atan(), &a, "atan(tan)");

        let t = s.asin();
        assert_close(&t.sin(), &s, "sin(asin)");
        assert_close(&c.acos().cos(), &c, "cos(acos)");

        assert_close(&x.to_degrees().to_radians(), &x, "degrees");
    }
}
