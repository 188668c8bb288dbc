//! The attribute map a resource operation reads from and writes to.
//!
//! Responsibilities:
//! - Hold the Terraform id, the current attribute values and the prior state.
//! - Convert attributes to and from typed values through serde.
//! - Report whether an attribute changed relative to the prior state.
//!
//! Invariants:
//! - An empty id means the resource does not exist (`is_removed`).
//! - `null` and an absent attribute are interchangeable everywhere.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::SyncError;

const ID_KEY: &str = "id";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceData {
    id: String,
    attributes: Map<String, Value>,
    prior: Option<Map<String, Value>>,
}

impl ResourceData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resource data for a create, or for a nested block. A string `id` key
    /// becomes the Terraform id.
    pub fn from_config(mut config: Map<String, Value>) -> Self {
        let id = match config.remove(ID_KEY) {
            Some(Value::String(id)) => id,
            _ => String::new(),
        };
        Self {
            id,
            attributes: config,
            prior: None,
        }
    }

    /// Resource data for a read, delete or import: the stored state is both
    /// the current and the prior value.
    pub fn from_state(state: Value) -> Result<Self, SyncError> {
        let Value::Object(state) = state else {
            return Err(SyncError::NotAnObject);
        };
        let mut data = Self::from_config(state);
        data.prior = Some(data.attributes.clone());
        Ok(data)
    }

    /// Resource data for an update: new configuration over the stored state.
    pub fn planned(state: Value, config: Map<String, Value>) -> Result<Self, SyncError> {
        let prior = Self::from_state(state)?;
        Ok(Self {
            id: prior.id,
            attributes: config
                .into_iter()
                .filter(|(key, _)| key != ID_KEY)
                .collect(),
            prior: prior.prior,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    pub fn is_removed(&self) -> bool {
        self.id.is_empty()
    }

    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key).filter(|value| !value.is_null())
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Decode an attribute; `Ok(None)` when it is absent or null.
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, SyncError> {
        self.get(key)
            .map(|value| {
                serde_json::from_value(value.clone()).map_err(|e| SyncError::invalid(key, e))
            })
            .transpose()
    }

    /// Decode a required attribute.
    pub fn require<T: DeserializeOwned>(&self, key: &str) -> Result<T, SyncError> {
        self.get_as(key)?.ok_or_else(|| SyncError::Missing {
            attr: key.to_string(),
        })
    }

    pub fn set(&mut self, key: &str, value: Value) {
        self.attributes.insert(key.to_string(), value);
    }

    pub fn set_as<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), SyncError> {
        let value = serde_json::to_value(value).map_err(|e| SyncError::invalid(key, e))?;
        self.set(key, value);
        Ok(())
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.attributes.remove(key)
    }

    /// The value an attribute had in the prior state.
    pub fn prior(&self, key: &str) -> Option<&Value> {
        self.prior
            .as_ref()
            .and_then(|prior| prior.get(key))
            .filter(|value| !value.is_null())
    }

    /// Whether `key` differs from the prior state. Without prior state every
    /// set attribute counts as changed.
    pub fn has_change(&self, key: &str) -> bool {
        match &self.prior {
            Some(_) => self.prior(key) != self.get(key),
            None => self.get(key).is_some(),
        }
    }

    /// Serialize as Terraform state; `null` once the resource is removed.
    pub fn to_state(&self) -> Value {
        if self.is_removed() {
            return Value::Null;
        }
        let mut state = self.attributes.clone();
        state.insert(ID_KEY.to_string(), Value::String(self.id.clone()));
        Value::Object(state)
    }

    pub(crate) fn into_attributes(self) -> Map<String, Value> {
        self.attributes
    }
}
