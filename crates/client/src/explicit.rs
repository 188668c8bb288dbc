//! Values that remember whether they were set.
//!
//! Splunk treats an absent form parameter differently from one explicitly set
//! to `0`, `false` or the empty string. [`Explicit`] keeps that distinction:
//! an unset value encodes to nothing, a set value always encodes, even when
//! it equals the type's zero value.
//!
//! Decoding is lenient: Splunk's `"1"`/`"0"`/`"true"` and numbers-as-strings
//! are accepted, and JSON `null` (as found in Terraform state) means unset.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::serde_helpers::{
    bool_from_json, f64_from_json, i64_from_json, string_from_json, u64_from_json,
};

/// An optional value whose "set" state is significant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Explicit<T>(Option<T>);

impl<T> Explicit<T> {
    /// A value explicitly set to `value`.
    pub const fn new(value: T) -> Self {
        Self(Some(value))
    }

    /// A value that was never set.
    pub const fn unset() -> Self {
        Self(None)
    }

    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }

    pub fn get(&self) -> Option<&T> {
        self.0.as_ref()
    }

    pub fn into_inner(self) -> Option<T> {
        self.0
    }

    pub fn set(&mut self, value: T) {
        self.0 = Some(value);
    }

    pub fn clear(&mut self) {
        self.0 = None;
    }
}

impl<T: Default + Clone> Explicit<T> {
    /// The set value, or the zero value when unset.
    pub fn value_or_default(&self) -> T {
        self.0.clone().unwrap_or_default()
    }
}

impl<T> Default for Explicit<T> {
    fn default() -> Self {
        Self::unset()
    }
}

impl<T> From<T> for Explicit<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T> From<Option<T>> for Explicit<T> {
    fn from(value: Option<T>) -> Self {
        Self(value)
    }
}

impl From<&str> for Explicit<String> {
    fn from(value: &str) -> Self {
        Self::new(value.to_string())
    }
}

impl<T: Serialize> Serialize for Explicit<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.0 {
            Some(value) => serializer.serialize_some(value),
            None => serializer.serialize_none(),
        }
    }
}

/// Scalar types that can be decoded leniently into an [`Explicit`].
pub trait ExplicitValue: Sized {
    /// Name used in decode errors.
    const EXPECTED: &'static str;

    fn from_json(value: &Value) -> Option<Self>;
}

macro_rules! explicit_value {
    ($($ty:ty => $expected:literal, $parse:expr;)*) => {
        $(
            impl ExplicitValue for $ty {
                const EXPECTED: &'static str = $expected;

                fn from_json(value: &Value) -> Option<Self> {
                    $parse(value)
                }
            }
        )*
    };
}

explicit_value! {
    bool => "a boolean", bool_from_json;
    i64 => "an integer", i64_from_json;
    u64 => "a non-negative integer", u64_from_json;
    f64 => "a number", f64_from_json;
    String => "a string", string_from_json;
}

impl ExplicitValue for i32 {
    const EXPECTED: &'static str = "a 32-bit integer";

    fn from_json(value: &Value) -> Option<Self> {
        i64_from_json(value).and_then(|i| i32::try_from(i).ok())
    }
}

impl<'de, T: ExplicitValue> Deserialize<'de> for Explicit<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Option::<Value>::deserialize(deserializer)? {
            None | Some(Value::Null) => Ok(Self::unset()),
            Some(raw) => T::from_json(&raw)
                .map(Self::new)
                .ok_or_else(|| D::Error::custom(format!("expected {}", T::EXPECTED))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values;

    #[derive(Serialize, Deserialize, Default)]
    #[serde(default)]
    struct Settings {
        disabled: Explicit<bool>,
        #[serde(rename = "maxHotBuckets")]
        max_hot_buckets: Explicit<i64>,
        description: Explicit<String>,
    }

    #[test]
    fn test_unset_values_are_omitted() {
        let encoded = values::encode(&Settings::default()).unwrap();
        assert!(encoded.is_empty());
    }

    #[test]
    fn test_zero_values_are_sent_when_set() {
        let settings = Settings {
            disabled: Explicit::new(false),
            max_hot_buckets: Explicit::new(0),
            description: Explicit::new(String::new()),
        };

        let encoded = values::encode(&settings).unwrap();
        assert_eq!(encoded.get("disabled"), Some("false"));
        assert_eq!(encoded.get("maxHotBuckets"), Some("0"));
        assert_eq!(encoded.get("description"), Some(""));
    }

    #[test]
    fn test_decodes_splunk_loose_typing() {
        let parsed: Settings = serde_json::from_str(
            r#"{ "disabled": "1", "maxHotBuckets": "10", "description": 5 }"#,
        )
        .unwrap();

        assert_eq!(parsed.disabled, Explicit::new(true));
        assert_eq!(parsed.max_hot_buckets, Explicit::new(10));
        assert_eq!(parsed.description, Explicit::new("5".to_string()));
    }

    #[test]
    fn test_null_and_missing_decode_as_unset() {
        let parsed: Settings = serde_json::from_str(r#"{ "disabled": null }"#).unwrap();
        assert!(!parsed.disabled.is_set());
        assert!(!parsed.max_hot_buckets.is_set());
    }

    #[test]
    fn test_rejects_wrong_type() {
        let result = serde_json::from_str::<Settings>(r#"{ "maxHotBuckets": "auto" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_value_or_default() {
        assert_eq!(Explicit::<i64>::unset().value_or_default(), 0);
        assert_eq!(Explicit::new(7i64).value_or_default(), 7);
    }

    #[test]
    fn test_round_trips_through_terraform_state_json() {
        let value = serde_json::to_value(Explicit::new(false)).unwrap();
        assert_eq!(value, serde_json::json!(false));

        let value = serde_json::to_value(Explicit::<bool>::unset()).unwrap();
        assert_eq!(value, Value::Null);
    }
}
