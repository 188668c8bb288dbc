//! Adapters that move values between resource data and Splunk objects.
//!
//! Responsibilities:
//! - Define [`FieldSync`], the two-way bridge between one slice of resource
//!   data and one slice of an object.
//! - Provide the generic adapters every resource is assembled from: direct
//!   fields, list fields, the computed id and single nested blocks.
//!
//! Does NOT handle:
//! - HTTP calls (see `resource`).
//! - Form encoding of the object (see `splunk_client::values`).
//!
//! Invariants:
//! - `to_object` never clears object state for attributes absent from the data.
//! - Adapters in a [`SyncSet`] run in insertion order.

mod field;
mod id;
mod indirect;

pub use field::{Field, ListField, StringList};
pub use id::ComputedId;
pub use indirect::IndirectObject;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::SyncError;
use crate::resource_data::ResourceData;

/// Two-way synchronization between resource data and an object of type `T`.
pub trait FieldSync<T>: Send + Sync {
    /// Copy values read from Splunk into resource data.
    fn to_resource(&self, object: &T, data: &mut ResourceData) -> Result<(), SyncError>;

    /// Copy configured values into the object about to be sent.
    fn to_object(&self, data: &ResourceData, object: &mut T) -> Result<(), SyncError>;
}

/// An ordered collection of adapters acting as one.
pub struct SyncSet<T> {
    syncs: Vec<Box<dyn FieldSync<T>>>,
}

impl<T> Default for SyncSet<T> {
    fn default() -> Self {
        Self { syncs: Vec::new() }
    }
}

impl<T: 'static> SyncSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, sync: impl FieldSync<T> + 'static) -> Self {
        self.syncs.push(Box::new(sync));
        self
    }

    /// A configurable attribute mirrored from the object.
    pub fn field<V>(
        self,
        attr: &'static str,
        get: fn(&T) -> &V,
        get_mut: fn(&mut T) -> &mut V,
    ) -> Self
    where
        V: Serialize + DeserializeOwned + 'static,
    {
        self.with(Field::new(attr, get, get_mut))
    }

    /// An attribute Splunk never returns, such as a password.
    pub fn write_only<V>(
        self,
        attr: &'static str,
        get: fn(&T) -> &V,
        get_mut: fn(&mut T) -> &mut V,
    ) -> Self
    where
        V: Serialize + DeserializeOwned + 'static,
    {
        self.with(Field::new(attr, get, get_mut).write_only())
    }

    /// An attribute only Splunk sets.
    pub fn computed<V>(
        self,
        attr: &'static str,
        get: fn(&T) -> &V,
        get_mut: fn(&mut T) -> &mut V,
    ) -> Self
    where
        V: Serialize + DeserializeOwned + 'static,
    {
        self.with(Field::new(attr, get, get_mut).read_only())
    }

    pub fn list<L: StringList>(
        self,
        attr: &'static str,
        get: fn(&T) -> &L,
        get_mut: fn(&mut T) -> &mut L,
    ) -> Self {
        self.with(ListField::new(attr, get, get_mut))
    }

    pub fn len(&self) -> usize {
        self.syncs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.syncs.is_empty()
    }
}

impl<T> FieldSync<T> for SyncSet<T> {
    fn to_resource(&self, object: &T, data: &mut ResourceData) -> Result<(), SyncError> {
        self.syncs
            .iter()
            .try_for_each(|sync| sync.to_resource(object, data))
    }

    fn to_object(&self, data: &ResourceData, object: &mut T) -> Result<(), SyncError> {
        self.syncs
            .iter()
            .try_for_each(|sync| sync.to_object(data, object))
    }
}
