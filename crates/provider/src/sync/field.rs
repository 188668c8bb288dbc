//! Direct and list field adapters.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::FieldSync;
use crate::error::SyncError;
use crate::resource_data::ResourceData;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Both,
    ToObjectOnly,
    ToResourceOnly,
}

/// One attribute mapped onto one object field through serde.
///
/// `null` in the data leaves the field untouched, so an unset
/// `Explicit` stays unset and is not sent.
pub struct Field<T, V> {
    attr: &'static str,
    get: fn(&T) -> &V,
    get_mut: fn(&mut T) -> &mut V,
    direction: Direction,
}

impl<T, V> Field<T, V> {
    pub fn new(attr: &'static str, get: fn(&T) -> &V, get_mut: fn(&mut T) -> &mut V) -> Self {
        Self {
            attr,
            get,
            get_mut,
            direction: Direction::Both,
        }
    }

    /// Keep the configured value in state instead of Splunk's.
    pub fn write_only(mut self) -> Self {
        self.direction = Direction::ToObjectOnly;
        self
    }

    /// Ignore configured values.
    pub fn read_only(mut self) -> Self {
        self.direction = Direction::ToResourceOnly;
        self
    }
}

impl<T, V> FieldSync<T> for Field<T, V>
where
    V: Serialize + DeserializeOwned,
{
    fn to_resource(&self, object: &T, data: &mut ResourceData) -> Result<(), SyncError> {
        if self.direction == Direction::ToObjectOnly {
            return Ok(());
        }
        data.set_as(self.attr, (self.get)(object))
    }

    fn to_object(&self, data: &ResourceData, object: &mut T) -> Result<(), SyncError> {
        if self.direction == Direction::ToResourceOnly {
            return Ok(());
        }
        if let Some(value) = data.get_as::<V>(self.attr)? {
            *(self.get_mut)(object) = value;
        }
        Ok(())
    }
}

/// A list-valued object field.
pub trait StringList: Send + Sync + 'static {
    fn items(&self) -> &[String];
    fn assign(&mut self, items: Vec<String>);
}

impl StringList for Vec<String> {
    fn items(&self) -> &[String] {
        self
    }

    fn assign(&mut self, items: Vec<String>) {
        *self = items;
    }
}

/// `None` until configured, so a list nobody set is not sent.
impl StringList for Option<Vec<String>> {
    fn items(&self) -> &[String] {
        self.as_deref().unwrap_or(&[])
    }

    fn assign(&mut self, items: Vec<String>) {
        *self = Some(items);
    }
}

/// A list attribute mapped onto a [`StringList`] field.
///
/// An empty list read from Splunk is not written over an attribute that was
/// never set, so `null` and `[]` do not flap between plans.
pub struct ListField<T, L = Vec<String>> {
    attr: &'static str,
    get: fn(&T) -> &L,
    get_mut: fn(&mut T) -> &mut L,
}

impl<T, L> ListField<T, L> {
    pub fn new(attr: &'static str, get: fn(&T) -> &L, get_mut: fn(&mut T) -> &mut L) -> Self {
        Self { attr, get, get_mut }
    }
}

impl<T, L: StringList> FieldSync<T> for ListField<T, L> {
    fn to_resource(&self, object: &T, data: &mut ResourceData) -> Result<(), SyncError> {
        let items = (self.get)(object).items();
        if items.is_empty() && data.get(self.attr).is_none() {
            return Ok(());
        }
        data.set(
            self.attr,
            Value::Array(items.iter().cloned().map(Value::String).collect()),
        );
        Ok(())
    }

    fn to_object(&self, data: &ResourceData, object: &mut T) -> Result<(), SyncError> {
        if let Some(items) = data.get_as::<Vec<String>>(self.attr)? {
            (self.get_mut)(object).assign(items);
        }
        Ok(())
    }
}
