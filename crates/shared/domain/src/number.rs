//! Whole-number decoding for numeric wire fields.
//!
//! Producers that only have a double type (JavaScript, a boxed `Double`) write
//! `2.0` where an integer is meant. Those values are accepted; fractional ones
//! and values outside `i64` are rejected.

use serde::Deserialize;
use serde::de::{self, Deserializer, Unexpected, Visitor};
use std::fmt;

struct WholeNumber;

impl Visitor<'_> for WholeNumber {
    type Value = i64;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a whole number")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
        Ok(v)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
        i64::try_from(v).map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    fn visit_f64<E: de::Error>(self, v: f64) -> Result<i64, E> {
        // `i64::MAX as f64` rounds up to 2^63, hence the strict upper bound.
        if v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 {
            Ok(v as i64)
        } else {
            Err(E::invalid_value(Unexpected::Float(v), &self))
        }
    }
}

struct Whole(i64);

impl<'de> Deserialize<'de> for Whole {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        whole(deserializer).map(Self)
    }
}

pub(crate) fn whole<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    deserializer.deserialize_i64(WholeNumber)
}

/// `deserialize_with` target for `Option<i64>` fields; `null` stays `None`.
pub(crate) fn optional_whole<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<i64>, D::Error> {
    Ok(Option::<Whole>::deserialize(deserializer)?.map(|Whole(n)| n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn read(value: serde_json::Value) -> Result<i64, serde_json::Error> {
        whole(value)
    }

    #[test]
    fn integral_floats_are_whole() {
        assert_eq!(read(json!(2.0)).unwrap(), 2);
        assert_eq!(read(json!(-4.0)).unwrap(), -4);
        assert_eq!(read(json!(1_665_014_400_000.0)).unwrap(), 1_665_014_400_000);
    }

    #[test]
    fn fractions_and_overflow_are_rejected() {
        assert!(read(json!(1.5)).unwrap_err().to_string().contains("a whole number"));
        assert!(read(json!(u64::MAX)).is_err());
        assert!(read(json!(1e19)).is_err());
    }

    #[test]
    fn null_is_absent() {
        let value = optional_whole(serde_json::Value::Null).unwrap();
        assert_eq!(value, None);
        assert_eq!(optional_whole(json!(3_000_000_000_u64)).unwrap(), Some(3_000_000_000));
    }
}
