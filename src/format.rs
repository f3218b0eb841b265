//! Dfp formatting.

use crate::defs::Kind;
use crate::defs::DECIMAL_POSITIONS;
use crate::num::Dfp;
use core::fmt::Display;
use core::fmt::Formatter;
use core::fmt::Write;

impl Dfp {
    /// Decimal digits of the mantissa, most significant first, including leading zeroes of the
    /// most significant radix digit.
    fn raw_digits(&self) -> Vec<u8> {
        let mut ret = Vec::with_capacity(self.mantissa().len() * DECIMAL_POSITIONS);
        for d in self.mantissa().iter().rev() {
            ret.push((d / 1000) as u8 + b'0');
            ret.push((d / 100 % 10) as u8 + b'0');
            ret.push((d / 10 % 10) as u8 + b'0');
            ret.push((d % 10) as u8 + b'0');
        }
        ret
    }

    /// Scientific notation: the first significant digit, the point, all remaining mantissa
    /// digits, and the decimal exponent.
    fn write_sci(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let raw = self.raw_digits();
        let shf = raw.iter().take_while(|c| **c == b'0').count();
        let e = self.exponent_radix() as i64 * DECIMAL_POSITIONS as i64 - shf as i64 - 1;

        if self.sign().is_negative() {
            f.write_char('-')?;
        }
        f.write_char(raw[shf] as char)?;
        f.write_char('.')?;
        for c in &raw[shf + 1..] {
            f.write_char(*c as char)?;
        }
        write!(f, "e{}", e)
    }

    /// Positional notation: leading and trailing zeroes are suppressed, and the point is
    /// always present.
    fn write_plain(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let mut buf: Vec<u8> = Vec::with_capacity(self.mantissa().len() * DECIMAL_POSITIONS + 8);
        let mut e = self.exponent_radix();
        let mut point = false;

        if e <= 0 {
            buf.extend_from_slice(b"0.");
            point = true;
        }

        while e < 0 {
            buf.extend_from_slice(b"0000");
            e += 1;
        }

        for chunk in self.raw_digits().chunks(DECIMAL_POSITIONS) {
            buf.extend_from_slice(chunk);
            e -= 1;
            if e == 0 {
                buf.push(b'.');
                point = true;
            }
        }

        if !point {
            buf.push(b'.');
        }

        let mut q = buf.iter().take_while(|c| **c == b'0').count();
        if buf[q] == b'.' {
            q -= 1;
        }

        let mut p = buf.len();
        while buf[p - 1] == b'0' {
            p -= 1;
        }

        if self.sign().is_negative() {
            f.write_char('-')?;
        }
        for c in &buf[q..p] {
            f.write_char(*c as char)?;
        }
        Ok(())
    }
}

impl Display for Dfp {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self.kind() {
            Kind::QuietNan | Kind::SignalingNan => f.write_str("NaN"),
            Kind::Infinite => {
                if self.sign().is_negative() {
                    f.write_str("-Infinity")
                } else {
                    f.write_str("Infinity")
                }
            }
            _ => {
                let e = self.exponent_radix();
                if e > self.mantissa().len() as i32 || e < -1 {
                    self.write_sci(f)
                } else {
                    self.write_plain(f)
                }
            }
        }
    }
}
