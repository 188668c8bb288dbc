//! The Terraform id of an entity-backed resource.

use splunk_client::{Entity, Object};

use super::FieldSync;
use crate::error::SyncError;
use crate::resource_data::ResourceData;

/// Maps the object name to both the Terraform id and a name attribute.
///
/// The configured attribute wins over the id, which is all an import has.
pub struct ComputedId {
    attr: &'static str,
}

impl ComputedId {
    pub fn new(attr: &'static str) -> Self {
        Self { attr }
    }

    /// The object name the data refers to.
    pub fn name<'a>(&self, data: &'a ResourceData) -> Result<&'a str, SyncError> {
        match data.get_str(self.attr) {
            Some(name) if !name.is_empty() => Ok(name),
            _ if !data.id().is_empty() => Ok(data.id()),
            _ => Err(SyncError::Missing {
                attr: self.attr.to_string(),
            }),
        }
    }
}

impl Default for ComputedId {
    fn default() -> Self {
        Self::new("name")
    }
}

impl<E: Entity> FieldSync<Object<E>> for ComputedId {
    fn to_resource(&self, object: &Object<E>, data: &mut ResourceData) -> Result<(), SyncError> {
        data.set_id(object.id.name.clone());
        data.set_as(self.attr, &object.id.name)
    }

    fn to_object(&self, data: &ResourceData, object: &mut Object<E>) -> Result<(), SyncError> {
        object.id.name = self.name(data)?.to_string();
        Ok(())
    }
}
