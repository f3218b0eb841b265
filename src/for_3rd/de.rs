//! Deserialization of Dfp.
//! A number belongs to a field, so deserialization is driven by a seed that carries the field.

use core::fmt::Formatter;

use crate::field::Field;
use crate::num::Dfp;
use serde::de::DeserializeSeed;
use serde::de::Error;
use serde::de::Visitor;
use serde::Deserializer;

/// Deserializes numbers of a field from strings, integers, and floats.
///
/// ## Examples
///
/// ```
/// use astro_decimal::{DfpSeed, Field};
/// use serde::de::DeserializeSeed;
///
/// let f = Field::new(20).unwrap();
/// let mut de = serde_json::Deserializer::from_str("\"2.5\"");
/// let d = DfpSeed(&f).deserialize(&mut de).unwrap();
/// assert_eq!(d, f.parse("2.5").unwrap());
/// ```
#[derive(Clone, Copy)]
pub struct DfpSeed<'a>(pub &'a Field);

impl<'a, 'de> DeserializeSeed<'de> for DfpSeed<'a> {
    type Value = Dfp;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(DfpVisitor { field: self.0 })
    }
}

impl<'a, 'de> DeserializeSeed<'de> for &'a Field {
    type Value = Dfp;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        DfpSeed(self).deserialize(deserializer)
    }
}

struct DfpVisitor<'a> {
    field: &'a Field,
}

impl<'a, 'de> Visitor<'de> for DfpVisitor<'a> {
    type Value = Dfp;

    fn expecting(&self, formatter: &mut Formatter) -> core::fmt::Result {
        write!(formatter, "expect `String` or `Number`")
    }

    fn visit_i64<E: Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(self.field.from_i64(v))
    }

    fn visit_u64<E: Error>(self, v: u64) -> Result<Self::Value, E> {
        match i64::try_from(v) {
            Ok(i) => Ok(self.field.from_i64(i)),
            Err(_) => self.visit_str(&v.to_string()),
        }
    }

    fn visit_f64<E: Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(self.field.from_f64(v))
    }

    fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
        match self.field.parse(v) {
            Ok(o) => Ok(o),
            Err(e) => Err(Error::custom(format!("{e:?}"))),
        }
    }

    fn visit_string<E: Error>(self, v: String) -> Result<Self::Value, E> {
        self.visit_str(&v)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use serde_json::Deserializer;

    fn from_str(f: &Field, s: &str) -> Result<Dfp, serde_json::Error> {
        let mut de = Deserializer::from_str(s);
        f.deserialize(&mut de)
    }

    #[test]
    fn from_json() {
        let f = Field::new(20).unwrap();

        let x = from_str(&f, "-0").unwrap();
        assert!(x.is_zero());
        assert_eq!(from_str(&f, "0.0").unwrap(), f.zero());
        assert_eq!(from_str(&f, "-17").unwrap(), f.from_i32(-17));
        assert_eq!(from_str(&f, "18446744073709551615").unwrap(), f.parse("18446744073709551615").unwrap());
        assert_eq!(from_str(&f, "0.3").unwrap(), f.from_f64(0.3));
        assert_eq!(from_str(&f, "\"0.3\"").unwrap(), f.parse("0.3").unwrap());
        assert!(from_str(&f, "\"NaN\"").unwrap().is_nan());
        assert!(from_str(&f, "\"1.2.3\"").is_err());
        assert!(from_str(&f, "[1]").is_err());

        let v: Vec<Dfp> = serde_json::from_str::<Vec<String>>("[\"1.5\", \"-2\"]")
            .unwrap()
            .iter()
            .map(|s| f.parse(s).unwrap())
            .collect();
        assert_eq!(serde_json::to_string(&v).unwrap(), "[\"1.5\",\"-2.\"]");
    }

    #[test]
    fn round_trip() {
        let f = Field::new(30).unwrap();
        let x = f.pi().div_int(7).neg();
        let s = serde_json::to_string(&x).unwrap();
        f.clear_flags();
        assert_eq!(from_str(&f, &s).unwrap(), x);
        assert_eq!(f.flags(), 0);
    }
}
