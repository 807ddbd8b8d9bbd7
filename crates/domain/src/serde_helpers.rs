//! Lenient numeric decoding.
//!
//! Some Site24x7 payloads carry numbers as JSON strings (`"2"` instead of
//! `2`). Fields that are known to vary use these helpers on the read side and
//! are always written back as integers.

use serde::de::{self, Deserializer};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(i64),
    Float(f64),
    Str(String),
}

fn coerce<E: de::Error>(raw: IntOrString) -> Result<i64, E> {
    match raw {
        IntOrString::Int(value) => Ok(value),
        IntOrString::Float(value) if value.fract() == 0.0 => Ok(value as i64),
        IntOrString::Float(value) => Err(E::custom(format!("expected an integer, got {value}"))),
        IntOrString::Str(text) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| E::custom(format!("expected a numeric string, got {text:?}"))),
    }
}

/// Deserialize an `i64` from either a JSON number or a numeric string.
pub fn flexible_int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    coerce(IntOrString::deserialize(deserializer)?)
}

/// Like [`flexible_int`] but maps `null` to `None`.
pub fn flexible_int_opt<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<IntOrString>::deserialize(deserializer)?.map(coerce).transpose()
}

/// Parse a loosely typed JSON value as an integer, for config-tree readers.
pub fn value_as_i64(value: &serde_json::Value) -> Option<i64> {
    match value {
        serde_json::Value::Number(number) => {
            number.as_i64().or_else(|| number.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
        }
        serde_json::Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[serde(deserialize_with = "flexible_int")]
        severity: i64,
        #[serde(default, deserialize_with = "flexible_int_opt")]
        polls: Option<i64>,
    }

    #[test]
    fn accepts_numbers_and_numeric_strings() {
        let sample: Sample = serde_json::from_value(json!({"severity": "3", "polls": 5})).unwrap();
        assert_eq!(sample.severity, 3);
        assert_eq!(sample.polls, Some(5));

        let sample: Sample = serde_json::from_value(json!({"severity": 2, "polls": null})).unwrap();
        assert_eq!(sample.severity, 2);
        assert_eq!(sample.polls, None);
    }

    #[test]
    fn rejects_non_numeric_strings() {
        let err = serde_json::from_value::<Sample>(json!({"severity": "high"})).unwrap_err();
        assert!(err.to_string().contains("numeric string"));
    }

    #[test]
    fn value_as_i64_handles_loose_values() {
        assert_eq!(value_as_i64(&json!(10000)), Some(10000));
        assert_eq!(value_as_i64(&json!("20000")), Some(20000));
        assert_eq!(value_as_i64(&json!(5.0)), Some(5));
        assert_eq!(value_as_i64(&json!(true)), None);
    }
}
