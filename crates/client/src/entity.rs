//! The generic object model shared by every Splunk REST collection.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::endpoints::{Namespace, ServicePath};
use crate::models::Acl;

/// A Splunk object type with a REST collection.
///
/// `name` is the full object name as the user knows it. Most types use it
/// verbatim as the entry name; config stanzas encode their file into it.
pub trait Entity: Serialize + DeserializeOwned + Default + Clone + Send + Sync + 'static {
    /// Human-readable kind, used in logs and errors.
    const KIND: &'static str;

    /// Collection path below the namespace prefix, e.g. `data/indexes`.
    fn collection_path(name: &str) -> String;

    /// Entry name within the collection.
    fn entry_name(name: &str) -> &str {
        name
    }
}

/// Identifies one object: where it lives and what it is called.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ObjectId {
    pub namespace: Namespace,
    pub name: String,
}

impl ObjectId {
    pub fn new(namespace: Namespace, name: impl Into<String>) -> Self {
        Self {
            namespace,
            name: name.into(),
        }
    }

    /// An object under `services/`.
    pub fn global(name: impl Into<String>) -> Self {
        Self::new(Namespace::Global, name)
    }

    pub fn collection_path<E: Entity>(&self) -> ServicePath {
        ServicePath::new(self.namespace.clone(), E::collection_path(&self.name))
    }

    pub fn entry_path<E: Entity>(&self) -> ServicePath {
        self.collection_path::<E>().entry(E::entry_name(&self.name))
    }
}

/// A decoded object together with its ACL.
#[derive(Debug, Clone, Default)]
pub struct Object<E> {
    pub id: ObjectId,
    pub content: E,
    pub acl: Option<Acl>,
}
