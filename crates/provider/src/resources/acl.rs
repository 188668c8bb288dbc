//! The `acl` block shared by namespaced resources, and `splunk_generic_acl`.

use async_trait::async_trait;
use serde_json::{Map, Value};
use splunk_client::models::{Acl, Perms, Sharing};
use splunk_client::{Namespace, ServicePath, SplunkClient};
use splunk_config::constants::{DEFAULT_APP, DEFAULT_OWNER};
use tracing::{debug, warn};

use crate::error::{Result, SyncError};
use crate::resource::Resource;
use crate::resource_data::ResourceData;
use crate::schema::{Attribute, Block, NestedBlock, Schema};
use crate::sync::{FieldSync, IndirectObject, SyncSet};

static NO_ROLES: Vec<String> = Vec::new();

pub(crate) fn block() -> Block {
    Block::new("Ownership and permissions of the object")
        .attribute(
            "app",
            Attribute::string("App the object belongs to")
                .optional_computed()
                .force_new(),
        )
        .attribute(
            "owner",
            Attribute::string("User owning the object").optional_computed(),
        )
        .attribute(
            "sharing",
            Attribute::string("One of user, app, global or system").optional_computed(),
        )
        .attribute(
            "read",
            Attribute::string_list("Roles allowed to read the object").optional_computed(),
        )
        .attribute(
            "write",
            Attribute::string_list("Roles allowed to modify the object").optional_computed(),
        )
}

/// The ACL a configured block is applied over.
fn default_acl() -> Acl {
    Acl {
        app: DEFAULT_APP.to_string(),
        owner: DEFAULT_OWNER.to_string(),
        sharing: Sharing::App,
        perms: None,
    }
}

pub(crate) fn sync<T: 'static>(
    get: fn(&T) -> Option<&Acl>,
    get_mut: fn(&mut T) -> &mut Option<Acl>,
) -> IndirectObject<T, Acl> {
    let fields = SyncSet::<Acl>::new()
        .field("app", |a| &a.app, |a| &mut a.app)
        .field("owner", |a| &a.owner, |a| &mut a.owner)
        .field("sharing", |a| &a.sharing, |a| &mut a.sharing)
        .list(
            "read",
            |a| a.perms.as_ref().map_or(&NO_ROLES, |p| &p.read),
            |a| &mut a.perms.get_or_insert_with(Perms::default).read,
        )
        .list(
            "write",
            |a| a.perms.as_ref().map_or(&NO_ROLES, |p| &p.write),
            |a| &mut a.perms.get_or_insert_with(Perms::default).write,
        );
    IndirectObject::new("acl", get, get_mut, default_acl, fields)
}

fn block_str<'a>(fields: Option<&'a Map<String, Value>>, key: &str) -> &'a str {
    fields
        .and_then(|fields| fields.get(key))
        .and_then(Value::as_str)
        .unwrap_or_default()
}

fn first_fields(acl_block: Option<&Value>) -> Option<&Map<String, Value>> {
    acl_block
        .and_then(Value::as_array)
        .and_then(|items| items.first())
        .and_then(Value::as_object)
}

/// The namespace an `acl` block value points at; `nobody`/`search` when
/// the block or its fields are absent.
pub(crate) fn namespace(acl_block: Option<&Value>) -> Namespace {
    let fields = first_fields(acl_block);
    Namespace::user(block_str(fields, "owner"), block_str(fields, "app"))
}

/// The configured block over the prior one. Keys the configuration leaves
/// null keep their prior value; no configured block keeps the prior block.
pub(crate) fn overlay(config: Option<&Value>, prior: Option<&Value>) -> Option<Value> {
    let Some(configured) = first_fields(config) else {
        return prior.cloned();
    };
    let mut merged = first_fields(prior).cloned().unwrap_or_default();
    for (key, value) in configured.iter().filter(|(_, value)| !value.is_null()) {
        merged.insert(key.clone(), value.clone());
    }
    Some(Value::Array(vec![Value::Object(merged)]))
}

/// Whether any key set in the configured block differs from the prior block.
pub(crate) fn changed(config: Option<&Value>, prior: Option<&Value>) -> bool {
    let Some(configured) = first_fields(config) else {
        return false;
    };
    let prior = first_fields(prior);
    configured
        .iter()
        .filter(|(_, value)| !value.is_null())
        .any(|(key, value)| prior.and_then(|fields| fields.get(key)) != Some(value))
}

/// `splunk_generic_acl`: the ACL of any object, addressed by REST path.
pub struct GenericAclResource {
    acl: IndirectObject<Option<Acl>, Acl>,
}

impl GenericAclResource {
    pub fn new() -> Self {
        Self {
            acl: sync::<Option<Acl>>(Option::as_ref, |acl| acl),
        }
    }

    /// Where the object is now: below the prior ACL's namespace when there is one.
    fn object_path(&self, data: &ResourceData) -> std::result::Result<ServicePath, SyncError> {
        self.path_in(data, data.prior("acl").or_else(|| data.get("acl")))
    }

    /// `path` split into collection and entry, below `acl_block`'s namespace.
    fn path_in(
        &self,
        data: &ResourceData,
        acl_block: Option<&Value>,
    ) -> std::result::Result<ServicePath, SyncError> {
        let path = data
            .get_str("path")
            .filter(|path| !path.is_empty())
            .unwrap_or(data.id());
        let (collection, entry) = path
            .trim_matches('/')
            .rsplit_once('/')
            .filter(|(collection, entry)| !collection.is_empty() && !entry.is_empty())
            .ok_or_else(|| {
                SyncError::invalid("path", format!("expected <collection>/<name>, got '{path}'"))
            })?;
        Ok(ServicePath::new(namespace(acl_block), collection).entry(entry))
    }

    fn path_attr(data: &ResourceData) -> String {
        data.get_str("path")
            .unwrap_or(data.id())
            .trim_matches('/')
            .to_string()
    }

    /// Post the ACL `planned` describes, then read it back from wherever
    /// the new owner and app put the object.
    async fn apply(
        &self,
        client: &SplunkClient,
        data: &mut ResourceData,
        planned: &ResourceData,
    ) -> Result<()> {
        let path = self.object_path(data)?;
        let mut acl = None;
        self.acl.to_object(planned, &mut acl)?;
        let acl = acl.ok_or_else(|| SyncError::Missing {
            attr: "acl".to_string(),
        })?;
        client.update_acl_at(&path, &acl).await?;

        data.set_id(Self::path_attr(data));
        let moved = self.path_in(data, planned.get("acl"))?;
        self.read_at(client, &moved, data).await
    }

    async fn read_at(
        &self,
        client: &SplunkClient,
        path: &ServicePath,
        data: &mut ResourceData,
    ) -> Result<()> {
        match client.read_acl_at(path).await? {
            Some(acl) => {
                let path_attr = Self::path_attr(data);
                data.set("path", Value::String(path_attr));
                self.acl.to_resource(&Some(acl), data)?;
            }
            None => {
                warn!(%path, "Object no longer exists in Splunk, removing its ACL from state");
                data.set_id("");
            }
        }
        Ok(())
    }
}

impl Default for GenericAclResource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Resource for GenericAclResource {
    fn type_name(&self) -> &'static str {
        "splunk_generic_acl"
    }

    fn schema(&self) -> Schema {
        Schema::new(
            Block::new("ACL of an arbitrary Splunk object")
                .attribute(
                    "path",
                    Attribute::string(
                        "REST path of the object below its namespace, e.g. saved/searches/errors",
                    )
                    .required()
                    .force_new(),
                )
                .block("acl", NestedBlock::Single(block())),
        )
    }

    async fn create(&self, client: &SplunkClient, data: &mut ResourceData) -> Result<()> {
        let planned = data.clone();
        self.apply(client, data, &planned).await
    }

    async fn read(&self, client: &SplunkClient, data: &mut ResourceData) -> Result<()> {
        let path = self.object_path(data)?;
        self.read_at(client, &path, data).await
    }

    async fn update(&self, client: &SplunkClient, data: &mut ResourceData) -> Result<()> {
        let mut planned = data.clone();
        if let Some(block) = overlay(data.get("acl"), data.prior("acl")) {
            planned.set("acl", block);
        }
        self.apply(client, data, &planned).await
    }

    /// Hands the object back to `nobody` with app sharing.
    async fn delete(&self, client: &SplunkClient, data: &mut ResourceData) -> Result<()> {
        let path = self.object_path(data)?;
        match client.update_acl_at(&path, &default_acl()).await {
            Ok(()) => {}
            Err(e) if e.is_not_found() => {
                debug!(%path, "Object already deleted, nothing to reset");
            }
            Err(e) => return Err(e.into()),
        }
        data.set_id("");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_namespace_from_block() {
        let block = json!([{"owner": "admin", "app": "launcher"}]);
        assert_eq!(
            namespace(Some(&block)),
            Namespace::user("admin", "launcher")
        );
    }

    #[test]
    fn test_namespace_defaults() {
        assert_eq!(namespace(None), Namespace::default());
        assert_eq!(namespace(Some(&json!([{"owner": ""}]))), Namespace::default());
    }

    #[test]
    fn test_overlay_keeps_prior_keys_the_config_leaves_unset() {
        let prior = json!([{"app": "search", "owner": "alice", "sharing": "user", "read": ["admin"]}]);
        let config = json!([{"owner": "bob", "sharing": null}]);
        assert_eq!(
            overlay(Some(&config), Some(&prior)),
            Some(json!([{"app": "search", "owner": "bob", "sharing": "user", "read": ["admin"]}]))
        );
        assert_eq!(overlay(None, Some(&prior)), Some(prior.clone()));
        assert_eq!(overlay(None, None), None);
    }

    #[test]
    fn test_changed_only_looks_at_configured_keys() {
        let prior = json!([{
            "app": "search",
            "owner": "nobody",
            "sharing": "app",
            "read": ["*"],
            "write": ["admin"],
        }]);
        assert!(!changed(Some(&json!([{"sharing": "app"}])), Some(&prior)));
        assert!(!changed(Some(&json!([{"owner": null, "read": ["*"]}])), Some(&prior)));
        assert!(!changed(None, Some(&prior)));
        assert!(changed(Some(&json!([{"write": ["admin", "power"]}])), Some(&prior)));
        assert!(changed(Some(&json!([{"sharing": "app"}])), None));
    }

    #[test]
    fn test_object_path_splits_collection_and_entry() {
        let resource = GenericAclResource::new();
        let data = ResourceData::from_config(
            json!({"path": "/saved/searches/Errors by host", "acl": [{"app": "ops"}]})
                .as_object()
                .cloned()
                .unwrap(),
        );
        assert_eq!(
            resource.object_path(&data).unwrap().to_string(),
            "servicesNS/nobody/ops/saved/searches/Errors%20by%20host"
        );
    }

    #[test]
    fn test_object_path_requires_collection() {
        let resource = GenericAclResource::new();
        let mut data = ResourceData::new();
        data.set("path", json!("searches"));
        assert!(resource.object_path(&data).is_err());
    }
}
