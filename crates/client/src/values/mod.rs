//! Form values encoding for Splunk write requests.
//!
//! Responsibilities:
//! - Walk any `serde::Serialize` value and flatten it into ordered
//!   `key=value` pairs suitable for an `application/x-www-form-urlencoded` body.
//! - Project fields per write operation so immutable fields are not sent on update.
//!
//! Does NOT handle:
//! - Decoding responses (Splunk answers in JSON; see `models`).
//! - Percent-encoding URL paths (see `endpoints::url_encoding`).
//!
//! # Encoding rules
//! - Struct fields become keys; `#[serde(rename)]` customizes the key.
//! - Nested structs and maps produce dotted keys (`dispatch.earliest_time`).
//! - `#[serde(flatten)]` embeds a struct's fields without a prefix.
//! - `None`, unit values and unset [`Explicit`](crate::Explicit) values are omitted.
//! - Sequences repeat their key once per element.
//! - Booleans encode as `true`/`false`; unit enum variants as their serde name.
//!
//! Field markers (`#[serde(with = "...")]`) adjust the defaults:
//! - [`fill_empty`]: an empty sequence emits `key=` instead of nothing.
//! - [`comma_separated`]: a sequence emits one comma-joined value.
//! - [`create_only`] / [`update_only`]: the field is only sent for that [`Operation`].
//!
//! A type overrides its own encoding through its `Serialize` impl: emitting a
//! scalar replaces the value, emitting a map chooses the sub-keys, and
//! emitting a sequence adds one pair per element.

mod markers;
mod ser;

use serde::Serialize;
use thiserror::Error;

pub use markers::{comma_separated, create_only, fill_empty, update_only};

/// Write operation a value is being encoded for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Create,
    Update,
}

/// Errors produced while encoding form values.
#[derive(Debug, Error)]
pub enum ValuesError {
    #[error("{0}")]
    Custom(String),

    #[error("only structs and maps can be encoded at the top level")]
    Unkeyed,

    #[error("cannot encode {kind} at '{key}'")]
    Unsupported { key: String, kind: &'static str },

    #[error("map keys must be non-empty scalar values")]
    InvalidKey,
}

impl serde::ser::Error for ValuesError {
    fn custom<T: std::fmt::Display>(msg: T) -> Self {
        Self::Custom(msg.to_string())
    }
}

/// Ordered multimap of form key/value pairs.
///
/// Insertion order is preserved so encoded bodies are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Values {
    pairs: Vec<(String, String)>,
}

impl Values {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pair, keeping any existing values for the key.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// Replace every value for `key` with a single value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        self.pairs.retain(|(k, _)| *k != key);
        self.pairs.push((key, value.into()));
    }

    /// First value stored for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All values stored for `key`, in insertion order.
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    /// Remove every value for `key`.
    pub fn remove(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }

    /// Append all pairs from `other`.
    pub fn extend(&mut self, other: Values) {
        self.pairs.extend(other.pairs);
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The raw pairs, as accepted by `reqwest::RequestBuilder::form`.
    pub fn as_pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Encode as an `application/x-www-form-urlencoded` string.
    pub fn encode(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Values {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Encode every field of `value`.
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Values, ValuesError> {
    encode_with(value, None)
}

/// Encode the fields of `value` selected for `operation`.
pub fn encode_for<T: Serialize + ?Sized>(
    value: &T,
    operation: Operation,
) -> Result<Values, ValuesError> {
    encode_with(value, Some(operation))
}

fn encode_with<T: Serialize + ?Sized>(
    value: &T,
    operation: Option<Operation>,
) -> Result<Values, ValuesError> {
    let mut values = Values::new();
    value.serialize(ser::ValueSerializer::new(&mut values, operation))?;
    Ok(values)
}

/// `skip_serializing_if` helper that omits a field holding its zero value.
pub fn is_zero<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}
