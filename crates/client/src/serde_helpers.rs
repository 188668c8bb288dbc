//! Serde helpers for Splunk's inconsistent JSON typing.
//!
//! Responsibilities:
//! - Accept either JSON numbers, booleans or strings for scalar fields.
//! - Accept either a JSON array or a comma-separated string for list fields.
//! - Keep parsing behavior centralized so model definitions stay readable and consistent.
//!
//! Explicitly does NOT handle:
//! - Validating higher-level semantics (ranges, required/optional business rules).
//!
//! Invariants / assumptions:
//! - Splunk may return `"1"`, `1`, `true` or `"true"` for the same boolean setting
//!   depending on endpoint and version.
//! - These helpers must not log or print values; errors name the expected type only.

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    U64(u64),
    I64(i64),
    F64(f64),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StringOrSeq {
    Seq(Vec<Value>),
    String(String),
}

pub(crate) fn bool_from_json(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_f64().map(|f| f != 0.0),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "t" | "yes" | "y" | "on" => Some(true),
            "0" | "false" | "f" | "no" | "n" | "off" | "" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

pub(crate) fn i64_from_json(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        Value::Bool(b) => Some(i64::from(*b)),
        _ => None,
    }
}

pub(crate) fn u64_from_json(value: &Value) -> Option<u64> {
    i64_from_json(value)
        .and_then(|i| u64::try_from(i).ok())
        .or_else(|| value.as_u64())
        .or_else(|| value.as_str().and_then(|s| s.trim().parse().ok()))
}

pub(crate) fn f64_from_json(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub(crate) fn string_from_json(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

pub fn string_from_number_or_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = StringOrNumber::deserialize(deserializer)?;
    match value {
        StringOrNumber::String(s) => Ok(s),
        StringOrNumber::U64(v) => Ok(v.to_string()),
        StringOrNumber::I64(v) => Ok(v.to_string()),
        StringOrNumber::F64(v) => Ok(v.to_string()),
    }
}

/// Deserialize a list that Splunk may return as an array or as `"a,b,c"`.
///
/// `null` and the empty string both yield an empty list.
pub fn vec_from_string_or_seq<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match Option::<StringOrSeq>::deserialize(deserializer)? {
        None => Ok(Vec::new()),
        Some(raw) => list_items(raw),
    }
}

/// Like [`vec_from_string_or_seq`], but `null` stays `None`.
pub fn option_vec_from_string_or_seq<'de, D>(
    deserializer: D,
) -> Result<Option<Vec<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<StringOrSeq>::deserialize(deserializer)?
        .map(list_items)
        .transpose()
}

fn list_items<E: serde::de::Error>(raw: StringOrSeq) -> Result<Vec<String>, E> {
    match raw {
        StringOrSeq::String(s) => Ok(s
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()),
        StringOrSeq::Seq(items) => items
            .iter()
            .map(|item| {
                string_from_json(item).ok_or_else(|| E::custom("expected a list of strings"))
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bool_from_json_variants() {
        assert_eq!(bool_from_json(&json!(true)), Some(true));
        assert_eq!(bool_from_json(&json!("1")), Some(true));
        assert_eq!(bool_from_json(&json!("False")), Some(false));
        assert_eq!(bool_from_json(&json!(0)), Some(false));
        assert_eq!(bool_from_json(&json!("sometimes")), None);
        assert_eq!(bool_from_json(&json!([true])), None);
    }

    #[test]
    fn test_i64_from_json_variants() {
        assert_eq!(i64_from_json(&json!(42)), Some(42));
        assert_eq!(i64_from_json(&json!("-7")), Some(-7));
        assert_eq!(i64_from_json(&json!(3.0)), Some(3));
        assert_eq!(i64_from_json(&json!(3.5)), None);
        assert_eq!(i64_from_json(&json!("auto")), None);
    }

    #[test]
    fn test_u64_from_json_rejects_negative() {
        assert_eq!(u64_from_json(&json!("500000")), Some(500000));
        assert_eq!(u64_from_json(&json!(-1)), None);
    }

    #[test]
    fn test_string_from_json_stringifies_scalars() {
        assert_eq!(string_from_json(&json!(10)).as_deref(), Some("10"));
        assert_eq!(string_from_json(&json!(false)).as_deref(), Some("false"));
        assert_eq!(string_from_json(&json!(null)), None);
    }

    #[test]
    fn test_string_from_number_or_string_accepts_number() {
        #[derive(Deserialize)]
        struct Wrapper {
            #[serde(deserialize_with = "string_from_number_or_string")]
            value: String,
        }

        let parsed: Wrapper = serde_json::from_str(r#"{ "value": 9997 }"#).unwrap();
        assert_eq!(parsed.value, "9997");
    }

    #[test]
    fn test_vec_from_string_or_seq() {
        #[derive(Deserialize)]
        struct Wrapper {
            #[serde(default, deserialize_with = "vec_from_string_or_seq")]
            value: Vec<String>,
        }

        let parsed: Wrapper = serde_json::from_str(r#"{ "value": ["a", "b"] }"#).unwrap();
        assert_eq!(parsed.value, vec!["a", "b"]);

        let parsed: Wrapper = serde_json::from_str(r#"{ "value": "a, b,,c" }"#).unwrap();
        assert_eq!(parsed.value, vec!["a", "b", "c"]);

        let parsed: Wrapper = serde_json::from_str(r#"{ "value": "" }"#).unwrap();
        assert!(parsed.value.is_empty());

        let parsed: Wrapper = serde_json::from_str(r#"{ "value": null }"#).unwrap();
        assert!(parsed.value.is_empty());

        let parsed: Wrapper = serde_json::from_str(r#"{}"#).unwrap();
        assert!(parsed.value.is_empty());
    }

    #[test]
    fn test_option_vec_from_string_or_seq_keeps_absence() {
        #[derive(Deserialize)]
        struct Wrapper {
            #[serde(default, deserialize_with = "option_vec_from_string_or_seq")]
            value: Option<Vec<String>>,
        }

        let parsed: Wrapper = serde_json::from_str(r#"{ "value": "email,webhook" }"#).unwrap();
        assert_eq!(parsed.value, Some(vec!["email".to_string(), "webhook".to_string()]));

        let parsed: Wrapper = serde_json::from_str(r#"{ "value": "" }"#).unwrap();
        assert_eq!(parsed.value, Some(Vec::new()));

        let parsed: Wrapper = serde_json::from_str(r#"{ "value": null }"#).unwrap();
        assert_eq!(parsed.value, None);

        let parsed: Wrapper = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(parsed.value, None);
    }
}
