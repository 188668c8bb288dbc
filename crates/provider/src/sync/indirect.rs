//! Single nested blocks backed by an optional sub-object.

use serde_json::Value;

use super::{FieldSync, SyncSet};
use crate::error::SyncError;
use crate::resource_data::ResourceData;

/// A nested block (a list holding at most one map) synced into an
/// `Option<V>` on the parent through its own adapters.
pub struct IndirectObject<T, V> {
    attr: &'static str,
    get: fn(&T) -> Option<&V>,
    get_mut: fn(&mut T) -> &mut Option<V>,
    init: fn() -> V,
    inner: SyncSet<V>,
}

impl<T, V> IndirectObject<T, V> {
    /// `init` builds the sub-object the configured block is applied over.
    pub fn new(
        attr: &'static str,
        get: fn(&T) -> Option<&V>,
        get_mut: fn(&mut T) -> &mut Option<V>,
        init: fn() -> V,
        inner: SyncSet<V>,
    ) -> Self {
        Self {
            attr,
            get,
            get_mut,
            init,
            inner,
        }
    }

    fn block(&self, value: Option<&Value>) -> Result<Option<ResourceData>, SyncError> {
        let items = match value {
            None => return Ok(None),
            Some(Value::Array(items)) => items,
            Some(_) => return Err(SyncError::invalid(self.attr, "expected a block")),
        };
        match items.as_slice() {
            [] => Ok(None),
            [Value::Object(map)] => Ok(Some(ResourceData::from_config(map.clone()))),
            [_] => Err(SyncError::invalid(self.attr, "expected a block")),
            _ => Err(SyncError::invalid(self.attr, "expected at most one block")),
        }
    }
}

impl<T, V> FieldSync<T> for IndirectObject<T, V> {
    fn to_resource(&self, object: &T, data: &mut ResourceData) -> Result<(), SyncError> {
        let Some(value) = (self.get)(object) else {
            return Ok(());
        };
        let mut block = self.block(data.get(self.attr))?.unwrap_or_default();
        self.inner.to_resource(value, &mut block)?;
        data.set(
            self.attr,
            Value::Array(vec![Value::Object(block.into_attributes())]),
        );
        Ok(())
    }

    fn to_object(&self, data: &ResourceData, object: &mut T) -> Result<(), SyncError> {
        let Some(block) = self.block(data.get(self.attr))? else {
            return Ok(());
        };
        let mut value = (self.init)();
        self.inner.to_object(&block, &mut value)?;
        *(self.get_mut)(object) = Some(value);
        Ok(())
    }
}
