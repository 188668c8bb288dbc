//! The resource callback surface and its generic entity implementation.
//!
//! Responsibilities:
//! - Define [`Resource`], the create/read/update/delete/import surface the
//!   plugin host drives.
//! - Implement it once for every Splunk [`Entity`] in [`EntityResource`].
//!
//! Does NOT handle:
//! - Schema validation (done by the provider before dispatch).
//! - Retries; every callback issues its requests once.
//!
//! Invariants:
//! - Create and update finish with a read, so stored state is what Splunk
//!   reports.
//! - A read that finds nothing clears the id instead of failing.

use async_trait::async_trait;
use splunk_client::{Entity, Namespace, Object, ObjectId, SplunkClient};
use tracing::warn;

use crate::error::{ProviderError, Result, SyncError};
use crate::resource_data::ResourceData;
use crate::resources::acl;
use crate::schema::{Attribute, Block, NestedBlock, Schema};
use crate::sync::{ComputedId, FieldSync, SyncSet};

type SyncResult<T> = std::result::Result<T, SyncError>;

/// A Terraform resource type backed by Splunk.
#[async_trait]
pub trait Resource: Send + Sync {
    /// Terraform type name, e.g. `splunk_indexes`.
    fn type_name(&self) -> &'static str;

    fn schema(&self) -> Schema;

    async fn create(&self, client: &SplunkClient, data: &mut ResourceData) -> Result<()>;

    /// Refresh `data` from Splunk, clearing the id if the object is gone.
    async fn read(&self, client: &SplunkClient, data: &mut ResourceData) -> Result<()>;

    async fn update(&self, client: &SplunkClient, data: &mut ResourceData) -> Result<()>;

    async fn delete(&self, client: &SplunkClient, data: &mut ResourceData) -> Result<()>;

    /// Build state for an existing object from its id.
    async fn import(&self, client: &SplunkClient, id: &str) -> Result<ResourceData> {
        let mut data = ResourceData::new();
        data.set_id(id);
        self.read(client, &mut data).await?;
        if data.is_removed() {
            return Err(ProviderError::NotFound {
                kind: self.type_name().to_string(),
                id: id.to_string(),
            });
        }
        Ok(data)
    }
}

/// Where the objects of a resource type live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Under `servicesNS/<owner>/<app>/`, addressed through the `acl` block.
    Namespaced,
    /// Under `services/`.
    Global,
}

/// Applies an entity's content adapters to `Object::content`.
struct Content<E>(SyncSet<E>);

impl<E: Entity> FieldSync<Object<E>> for Content<E> {
    fn to_resource(&self, object: &Object<E>, data: &mut ResourceData) -> SyncResult<()> {
        self.0.to_resource(&object.content, data)
    }

    fn to_object(&self, data: &ResourceData, object: &mut Object<E>) -> SyncResult<()> {
        self.0.to_object(data, &mut object.content)
    }
}

/// A resource whose lifecycle is plain entity CRUD.
pub struct EntityResource<E: Entity> {
    type_name: &'static str,
    scope: Scope,
    schema: Schema,
    id: ComputedId,
    syncs: SyncSet<Object<E>>,
    check_name: Option<fn(&str) -> std::result::Result<(), String>>,
}

impl<E: Entity> EntityResource<E> {
    /// `block` declares the content attributes that `content` syncs; the
    /// `name` attribute and, for namespaced types, the `acl` block are added.
    pub fn new(type_name: &'static str, scope: Scope, block: Block, content: SyncSet<E>) -> Self {
        let mut block = block;
        if !block.attributes.contains_key("name") {
            block = block.attribute(
                "name",
                Attribute::string(format!("Name of the {}", E::KIND))
                    .required()
                    .force_new(),
            );
        }

        let id = ComputedId::default();
        let mut syncs = SyncSet::<Object<E>>::new()
            .with(ComputedId::default())
            .with(Content(content));
        if scope == Scope::Namespaced {
            block = block.block("acl", NestedBlock::Optional(acl::block()));
            syncs = syncs.with(acl::sync::<Object<E>>(|o| o.acl.as_ref(), |o| &mut o.acl));
        }

        Self {
            type_name,
            scope,
            schema: Schema::new(block),
            id,
            syncs,
            check_name: None,
        }
    }

    /// Reject names `check` refuses before any request is made.
    pub fn validate_name(mut self, check: fn(&str) -> std::result::Result<(), String>) -> Self {
        self.check_name = Some(check);
        self
    }

    fn checked(&self, name: String) -> SyncResult<String> {
        match self.check_name.map(|check| check(&name)) {
            Some(Err(message)) => Err(SyncError::invalid("name", message)),
            _ => Ok(name),
        }
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    fn namespace(&self, acl_block: Option<&serde_json::Value>) -> Namespace {
        match self.scope {
            Scope::Global => Namespace::Global,
            Scope::Namespaced => acl::namespace(acl_block),
        }
    }

    /// The object as configured in `data`.
    pub(crate) fn object_from(&self, data: &ResourceData) -> SyncResult<Object<E>> {
        let mut object = Object::<E>::default();
        self.syncs.to_object(data, &mut object)?;
        object.id.name = self.checked(object.id.name)?;
        object.id.namespace = self.namespace(data.get("acl"));
        Ok(object)
    }

    /// The id of the existing object, located through the prior ACL when an
    /// update moves it.
    pub(crate) fn existing_id(&self, data: &ResourceData) -> SyncResult<ObjectId> {
        let name = self.checked(self.id.name(data)?.to_string())?;
        let acl_block = data.prior("acl").or_else(|| data.get("acl"));
        Ok(ObjectId::new(self.namespace(acl_block), name))
    }

    /// `data` with its `acl` block laid over the prior one, so keys left
    /// unset keep the object where it is.
    fn planned(&self, data: &ResourceData) -> ResourceData {
        let mut planned = data.clone();
        let block = match self.scope {
            Scope::Namespaced => acl::overlay(data.get("acl"), data.prior("acl")),
            Scope::Global => None,
        };
        if let Some(block) = block {
            planned.set("acl", block);
        }
        planned
    }

    async fn read_at(
        &self,
        client: &SplunkClient,
        id: &ObjectId,
        data: &mut ResourceData,
    ) -> Result<()> {
        match client.read_entity::<E>(id).await? {
            Some(object) => self.apply(&object, data),
            None => {
                warn!(
                    resource = self.type_name,
                    name = %id.name,
                    "Object no longer exists in Splunk, removing it from state"
                );
                data.set_id("");
                Ok(())
            }
        }
    }

    /// Record what Splunk returned.
    pub(crate) fn apply(&self, object: &Object<E>, data: &mut ResourceData) -> Result<()> {
        self.syncs.to_resource(object, data)?;
        Ok(())
    }
}

#[async_trait]
impl<E: Entity> Resource for EntityResource<E> {
    fn type_name(&self) -> &'static str {
        self.type_name
    }

    fn schema(&self) -> Schema {
        self.schema.clone()
    }

    async fn create(&self, client: &SplunkClient, data: &mut ResourceData) -> Result<()> {
        let object = self.object_from(data)?;
        client.create_entity(&object.id, &object.content).await?;
        if let Some(acl) = &object.acl {
            client.update_acl::<E>(&object.id, acl).await?;
        }

        data.set_id(object.id.name.clone());
        self.read_at(client, &object.id, data).await
    }

    async fn read(&self, client: &SplunkClient, data: &mut ResourceData) -> Result<()> {
        let id = self.existing_id(data)?;
        self.read_at(client, &id, data).await
    }

    /// Posts the ACL only when a configured key differs from state; a new
    /// owner or app moves the object, so the final read follows it.
    async fn update(&self, client: &SplunkClient, data: &mut ResourceData) -> Result<()> {
        let id = self.existing_id(data)?;
        let object = self.object_from(&self.planned(data))?;
        client.update_entity(&id, &object.content).await?;

        let acl_changed = acl::changed(data.get("acl"), data.prior("acl"));
        match object.acl.as_ref().filter(|_| acl_changed) {
            Some(acl) => {
                client.update_acl::<E>(&id, acl).await?;
                self.read_at(client, &object.id, data).await
            }
            None => self.read_at(client, &id, data).await,
        }
    }

    async fn delete(&self, client: &SplunkClient, data: &mut ResourceData) -> Result<()> {
        let id = self.existing_id(data)?;
        client.delete_entity::<E>(&id).await?;
        data.set_id("");
        Ok(())
    }
}
