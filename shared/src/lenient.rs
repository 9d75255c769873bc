//! Lenient field deserializers
//!
//! Form submissions carry every value as text while JSON clients send real
//! numbers. These helpers accept both and normalize empty strings to `None`.

use rust_decimal::Decimal;
use serde::de::{Deserialize, Deserializer, Error};
use serde_json::Value;
use std::str::FromStr;

/// Text field that may arrive as a string, number or boolean
pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(D::Error::custom(format!("expected text, found {other}"))),
    }
}

/// Integer field that may arrive as a number or numeric string
pub fn opt_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => s
            .trim()
            .parse::<i32>()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("invalid integer: {s:?}"))),
        Some(Value::Number(n)) => n
            .as_i64()
            .and_then(|v| i32::try_from(v).ok())
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid integer: {n}"))),
        Some(other) => Err(D::Error::custom(format!(
            "expected integer, found {other}"
        ))),
    }
}

/// Decimal field that may arrive as a number or numeric string
pub fn opt_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => Decimal::from_str(s.trim())
            .map(Some)
            .map_err(|_| D::Error::custom(format!("invalid number: {s:?}"))),
        // Go through the textual form so 72.4 stays 72.4 instead of a binary float
        Some(Value::Number(n)) => Decimal::from_str(&n.to_string())
            .or_else(|_| Decimal::from_scientific(&n.to_string()))
            .map(Some)
            .map_err(|_| D::Error::custom(format!("invalid number: {n}"))),
        Some(other) => Err(D::Error::custom(format!("expected number, found {other}"))),
    }
}

/// Length of an array field; anything that is not an array counts as zero
pub fn array_len<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => items.len(),
        _ => 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "opt_string")]
        text: Option<String>,
        #[serde(default, deserialize_with = "opt_i32")]
        year: Option<i32>,
        #[serde(default, deserialize_with = "opt_decimal")]
        score: Option<Decimal>,
        #[serde(default, deserialize_with = "array_len")]
        items: usize,
    }

    fn sample(json: &str) -> Result<Sample, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[test]
    fn missing_fields_are_absent() {
        let p = sample("{}").unwrap();
        assert!(p.text.is_none());
        assert!(p.year.is_none());
        assert!(p.score.is_none());
        assert_eq!(p.items, 0);
    }

    #[test]
    fn numbers_and_strings_are_both_accepted() {
        let p = sample(r#"{"text": 9876543210, "year": "2019", "score": 72.4}"#).unwrap();
        assert_eq!(p.text.as_deref(), Some("9876543210"));
        assert_eq!(p.year, Some(2019));
        assert_eq!(p.score, Some(Decimal::from_str("72.4").unwrap()));

        let p = sample(r#"{"year": 2021, "score": " 88.25 "}"#).unwrap();
        assert_eq!(p.year, Some(2021));
        assert_eq!(p.score, Some(Decimal::from_str("88.25").unwrap()));
    }

    #[test]
    fn empty_strings_and_null_mean_absent() {
        let p = sample(r#"{"text": null, "year": "", "score": "  "}"#).unwrap();
        assert!(p.text.is_none());
        assert!(p.year.is_none());
        assert!(p.score.is_none());
    }

    #[test]
    fn garbage_numbers_are_rejected() {
        assert!(sample(r#"{"year": "twenty"}"#).is_err());
        assert!(sample(r#"{"year": 3000000000}"#).is_err());
        assert!(sample(r#"{"score": "abc"}"#).is_err());
        assert!(sample(r#"{"score": [1]}"#).is_err());
    }

    #[test]
    fn array_len_counts_only_arrays() {
        assert_eq!(sample(r#"{"items": [{}, {}, "x"]}"#).unwrap().items, 3);
        assert_eq!(sample(r#"{"items": "two"}"#).unwrap().items, 0);
        assert_eq!(sample(r#"{"items": null}"#).unwrap().items, 0);
    }
}
