//! `splunk_cluster_config`
//!
//! The cluster configuration is a singleton that always exists: create and
//! update both edit it, and delete turns clustering off.

use async_trait::async_trait;
use splunk_client::models::{CLUSTER_CONFIG_NAME, ClusterConfig};
use splunk_client::{ObjectId, SplunkClient};
use tracing::info;

use super::fields;
use crate::error::Result;
use crate::resource::{EntityResource, Resource, Scope};
use crate::resource_data::ResourceData;
use crate::schema::{Attribute, Block, Schema};
use crate::sync::SyncSet;

pub struct ClusterConfigResource {
    inner: EntityResource<ClusterConfig>,
}

impl ClusterConfigResource {
    pub fn new() -> Self {
        let block = Block::new("Indexer clustering settings of the instance")
            .attribute(
                "name",
                Attribute::string("Always \"config\"").computed(),
            )
            .attribute(
                "mode",
                Attribute::string("manager, peer, searchhead or disabled").required(),
            )
            .attribute(
                "manager_uri",
                Attribute::string("URI of the cluster manager, for peers and search heads")
                    .optional_computed(),
            )
            .attribute(
                "replication_factor",
                Attribute::number("Copies of each bucket kept by the cluster").optional_computed(),
            )
            .attribute(
                "search_factor",
                Attribute::number("Searchable copies of each bucket").optional_computed(),
            )
            .attribute(
                "cluster_label",
                Attribute::string("Label of the cluster").optional_computed(),
            )
            .attribute(
                "secret",
                Attribute::string("Key shared by all cluster members")
                    .optional()
                    .sensitive(),
            );

        let content = fields!(SyncSet::<ClusterConfig>::new();
            "mode" => mode,
            "manager_uri" => manager_uri,
            "replication_factor" => replication_factor,
            "search_factor" => search_factor,
            "cluster_label" => cluster_label,
        )
        .write_only("secret", |c| &c.secret, |c| &mut c.secret);

        Self {
            inner: EntityResource::new("splunk_cluster_config", Scope::Global, block, content),
        }
    }

    async fn apply(&self, client: &SplunkClient, data: &mut ResourceData) -> Result<()> {
        data.set_id(CLUSTER_CONFIG_NAME);
        let object = self.inner.object_from(data)?;
        client.update_entity(&object.id, &object.content).await?;
        self.inner.read(client, data).await
    }
}

impl Default for ClusterConfigResource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Resource for ClusterConfigResource {
    fn type_name(&self) -> &'static str {
        self.inner.type_name()
    }

    fn schema(&self) -> Schema {
        self.inner.schema()
    }

    async fn create(&self, client: &SplunkClient, data: &mut ResourceData) -> Result<()> {
        self.apply(client, data).await
    }

    async fn read(&self, client: &SplunkClient, data: &mut ResourceData) -> Result<()> {
        self.inner.read(client, data).await
    }

    async fn update(&self, client: &SplunkClient, data: &mut ResourceData) -> Result<()> {
        self.apply(client, data).await
    }

    async fn delete(&self, client: &SplunkClient, data: &mut ResourceData) -> Result<()> {
        info!("Disabling indexer clustering");
        client
            .update_entity(&ObjectId::global(CLUSTER_CONFIG_NAME), &ClusterConfig::disabled())
            .await?;
        data.set_id("");
        Ok(())
    }
}
