//! Parser of decimal numbers in positional and scientific notation.

use crate::common::buf::DigitBuf;
use crate::defs::Digit;
use crate::defs::Error;
use crate::defs::Exponent;
use crate::defs::Kind;
use crate::defs::Sign;
use crate::defs::DECIMAL_POSITIONS;
use crate::defs::ERR_SCALE;
use crate::defs::FLAG_INEXACT;
use crate::defs::FLAG_OVERFLOW;
use crate::defs::FLAG_UNDERFLOW;
use crate::defs::MAX_EXP;
use crate::defs::MIN_EXP;
use crate::field::Field;
use crate::num::round_digits;
use crate::num::Dfp;
use std::str::Chars;

/// Limit of the absolute value of a parsed decimal exponent. Anything beyond it is out of
/// range for any precision.
const EXP10_LIMIT: i64 = 1_000_000_000_000;

pub(crate) struct ParserState<'a> {
    chars: Chars<'a>,
    cur_ch: Option<char>,
    sign: Sign,
    digits: Vec<u8>,
    e10: i64,
    inf: bool,
    nan: bool,
    signaling: bool,
    valid: bool,
}

impl<'a> ParserState<'a> {
    fn new(s: &'a str) -> Self {
        ParserState {
            chars: s.chars(),
            cur_ch: None,
            sign: Sign::Pos,
            digits: Vec::new(),
            e10: 0,
            inf: false,
            nan: false,
            signaling: false,
            valid: false,
        }
    }

    fn next_char(&mut self) -> Option<char> {
        self.cur_ch = self.chars.next();
        self.cur_ch
    }

    fn cur_char(&self) -> Option<char> {
        self.cur_ch
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Significant decimal digits without leading and trailing zeroes, sign, and the decimal
    /// exponent `e` such that the value is `0.d1 d2 d3 ... × 10^e`.
    pub fn raw_parts(&self) -> (&[u8], Sign, i64) {
        (&self.digits, self.sign, self.e10)
    }
}

/// Parse a decimal number.
pub(crate) fn parse(s: &str) -> ParserState<'_> {
    let mut parser_state = ParserState::new(s);

    match s {
        "NaN" | "SNaN" => {
            parser_state.nan = true;
            parser_state.signaling = s.starts_with('S');
            parser_state.valid = true;
            return parser_state;
        }
        "Infinity" | "+Infinity" | "-Infinity" => {
            parser_state.inf = true;
            parser_state.valid = true;
            if s.starts_with('-') {
                parser_state.sign = Sign::Neg;
            }
            return parser_state;
        }
        _ => {}
    }

    let mut ch = parser_state.next_char();
    match ch {
        Some('+') => ch = parser_state.next_char(),
        Some('-') => {
            parser_state.sign = Sign::Neg;
            ch = parser_state.next_char();
        }
        _ => {}
    }

    if let Some('0'..='9' | '.') = ch {
        parse_num(&mut parser_state);
    }

    // trailing characters
    if parser_state.cur_char().is_some() {
        parser_state.valid = false;
    }

    parser_state
}

fn parse_num(parser_state: &mut ParserState) {
    let (int_skip, int_len) = parse_digits(parser_state, true);
    let (mut frac_skip, mut frac_len) = (0, 0);
    if Some('.') == parser_state.cur_char() {
        parser_state.next_char();
        (frac_skip, frac_len) = parse_digits(parser_state, int_len == 0);
    }

    if int_skip + int_len + frac_skip + frac_len == 0 {
        return;
    }

    let mut e = 0;
    if let Some('e' | 'E') = parser_state.cur_char() {
        parser_state.next_char();
        match parse_exp(parser_state) {
            Some(v) => e = v,
            None => return,
        }
    }

    parser_state.valid = true;

    while parser_state.digits.last() == Some(&0) {
        parser_state.digits.pop();
    }

    parser_state.e10 = if parser_state.digits.is_empty() {
        0
    } else if int_len > 0 {
        e + int_len as i64
    } else {
        e - frac_skip as i64
    };
}

/// Collect digits, optionally skipping leading zeroes.
/// Returns the number of skipped zeroes and the number of collected digits.
fn parse_digits(parser_state: &mut ParserState, skip_zeroes: bool) -> (usize, usize) {
    let mut ch = parser_state.cur_char();
    let mut skip_cnt = 0;
    let mut len = 0;

    if skip_zeroes {
        while let Some('0') = ch {
            skip_cnt += 1;
            ch = parser_state.next_char();
        }
    }

    while let Some(c @ '0'..='9') = ch {
        parser_state.digits.push(c as u8 - b'0');
        len += 1;
        ch = parser_state.next_char();
    }

    (skip_cnt, len)
}

fn parse_exp(parser_state: &mut ParserState) -> Option<i64> {
    let mut ch = parser_state.cur_char();
    let mut neg = false;
    match ch {
        Some('+') => ch = parser_state.next_char(),
        Some('-') => {
            neg = true;
            ch = parser_state.next_char();
        }
        _ => {}
    }

    let mut e: i64 = 0;
    let mut len = 0;
    while let Some(c @ '0'..='9') = ch {
        e = (e * 10 + (c as u8 - b'0') as i64).min(EXP10_LIMIT);
        len += 1;
        ch = parser_state.next_char();
    }

    if len == 0 {
        None
    } else if neg {
        Some(-e)
    } else {
        Some(e)
    }
}

impl Field {
    /// Parses a number from a string.
    ///
    /// Accepted forms are `NaN`, `SNaN` (signaling `NaN`), `Infinity`, `+Infinity`, `-Infinity`, and an optional sign
    /// followed by decimal digits with an optional decimal point and an optional exponent part
    /// `e` or `E` followed by an optionally signed integer.
    ///
    /// The literal is rounded with the rounding mode of the field. A literal below or above the
    /// normal exponent range raises the underflow or the overflow flag and is kept finite if
    /// it is still representable, otherwise it becomes zero or infinity.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the string is not a valid number.
    pub fn parse(&self, s: &str) -> Result<Dfp, Error> {
        let ps = parse(s);
        if !ps.is_valid() {
            return Err(Error::InvalidArgument);
        }

        if ps.nan {
            return Ok(self.nan(ps.signaling));
        }

        if ps.inf {
            return Ok(Dfp::new_special(self, ps.sign, Kind::Infinite));
        }

        let (digits, s, e10) = ps.raw_parts();
        Ok(from_decimal_digits(self, s, digits, e10))
    }
}

/// Number `0.d1 d2 d3 ... × 10^e10` of `field` with out of range literal handling.
pub(crate) fn from_decimal_digits(field: &Field, s: Sign, digits: &[u8], e10: i64) -> Dfp {
    if digits.is_empty() {
        return Dfp::new_special(field, s, Kind::Zero);
    }

    let dp = DECIMAL_POSITIONS as i64;
    let exp = e10.div_euclid(dp) + if e10.rem_euclid(dp) != 0 { 1 } else { 0 };
    let pad = (exp * dp - e10) as usize;

    // group padded digits by radix digits, least significant first
    let total = pad + digits.len();
    let groups = (total + DECIMAL_POSITIONS - 1) / DECIMAL_POSITIONS;
    let mut buf = DigitBuf::new(groups);
    for (i, d) in digits.iter().enumerate() {
        let pos = pad + i;
        let g = groups - 1 - pos / DECIMAL_POSITIONS;
        buf[g] = buf[g] * 10 + *d as Digit;
    }
    let tail = groups * DECIMAL_POSITIONS - total;
    for _ in 0..tail {
        buf[0] *= 10;
    }

    let rm = field.rounding_mode();
    let r = match round_digits(field.radix_digits(), s, &buf, false, exp - groups as i64, rm) {
        Some(r) => r,
        None => return Dfp::new_special(field, s, Kind::Zero),
    };

    if r.e > (MAX_EXP + ERR_SCALE) as i64 {
        field.set_flags_bits(FLAG_OVERFLOW);
        Dfp::new_special(field, s, Kind::Infinite)
    } else if r.e > MAX_EXP as i64 {
        field.set_flags_bits(FLAG_OVERFLOW);
        Dfp::from_parts(field, s, r.e as Exponent, r.m)
    } else if r.e < (MIN_EXP - ERR_SCALE) as i64 {
        field.set_flags_bits(FLAG_UNDERFLOW);
        Dfp::new_special(field, s, Kind::Zero)
    } else if r.e < MIN_EXP as i64 {
        field.set_flags_bits(FLAG_UNDERFLOW);
        Dfp::from_parts(field, s, r.e as Exponent, r.m)
    } else {
        if r.rem.is_inexact() {
            field.set_flags_bits(FLAG_INEXACT);
        }
        Dfp::from_parts(field, s, r.e as Exponent, r.m)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    fn parts(s: &str) -> (Vec<u8>, Sign, i64) {
        let ps = parse(s);
        assert!(ps.is_valid(), "{s}");
        let (d, s, e) = ps.raw_parts();
        (d.to_vec(), s, e)
    }

    #[test]
    fn test_parser() {
        assert_eq!(parts("0"), (vec![], Sign::Pos, 0));
        assert_eq!(parts("-0.000"), (vec![], Sign::Neg, 0));
        assert_eq!(parts("123.456"), (vec![1, 2, 3, 4, 5, 6], Sign::Pos, 3));
        assert_eq!(parts("+00123.4500"), (vec![1, 2, 3, 4, 5], Sign::Pos, 3));
        assert_eq!(parts("0.00120"), (vec![1, 2], Sign::Pos, -2));
        assert_eq!(parts(".5"), (vec![5], Sign::Pos, 0));
        assert_eq!(parts("5."), (vec![5], Sign::Pos, 1));
        assert_eq!(parts("-1e-17"), (vec![1], Sign::Neg, -16));
        assert_eq!(parts("12E+3"), (vec![1, 2], Sign::Pos, 5));
        assert_eq!(parts("1000"), (vec![1], Sign::Pos, 4));

        let ps = parse("-Infinity");
        assert!(ps.is_valid() && ps.inf && ps.sign == Sign::Neg);
        let ps = parse("NaN");
        assert!(ps.is_valid() && ps.nan && !ps.signaling);
        let ps = parse("SNaN");
        assert!(ps.is_valid() && ps.nan && ps.signaling);

        let f = Field::new(20).unwrap();
        assert_eq!(f.parse("SNaN").unwrap().kind(), Kind::SignalingNan);
        assert_eq!(f.parse("NaN").unwrap().kind(), Kind::QuietNan);
        assert_eq!(f.flags(), 0);
    }

    #[test]
    fn test_invalid() {
        for s in ["", "-", ".", "e5", "1e", "1e+", "1.2.3", "12a", "nan", "inf", "--1", " 1", "1 ", "-NaN", "snan", "-SNaN"] {
            assert!(!parse(s).is_valid(), "{s:?}");
        }

        let f = Field::new(20).unwrap();
        assert_eq!(f.parse("1x").unwrap_err(), Error::InvalidArgument);
    }

    #[test]
    fn test_from_decimal_digits() {
        let f = Field::new(16).unwrap();

        let d = f.parse("12345.678").unwrap();
        assert_eq!(d.exponent_radix(), 2);
        assert_eq!(d.mantissa(), &[0, 6780, 2345, 1]);

        let d = f.parse("0.00001234").unwrap();
        assert_eq!(d.exponent_radix(), -1);
        assert_eq!(d.mantissa(), &[0, 0, 0, 1234]);

        let d = f.parse("-1e-131073").unwrap();
        assert_eq!(d.sign(), Sign::Neg);
        assert_eq!(d.exponent_radix(), -32768);
        assert_eq!(d.mantissa(), &[0, 0, 0, 1000]);
        assert_eq!(f.flags(), FLAG_UNDERFLOW);
        f.clear_flags();

        f.parse("1e-131072").unwrap();
        assert_eq!(f.flags(), 0);

        f.parse("1e-131078").unwrap();
        assert_eq!(f.flags(), FLAG_UNDERFLOW);
        f.clear_flags();

        let d = f.parse("1e1000000").unwrap();
        assert!(d.is_infinite());
        assert_eq!(f.flags(), FLAG_OVERFLOW);
        f.clear_flags();

        let d = f.parse("-1e-1000000").unwrap();
        assert!(d.is_zero());
        assert_eq!(d.sign(), Sign::Neg);
        assert_eq!(f.flags(), FLAG_UNDERFLOW);
        f.clear_flags();

        let d = f.parse("1.00000000000000005").unwrap();
        assert_eq!(d, f.one());
        assert_eq!(f.flags(), FLAG_INEXACT);
    }
}
