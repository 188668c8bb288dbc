//! `splunk_lookup_table_file`

use async_trait::async_trait;
use serde_json::Value;
use splunk_client::SplunkClient;
use splunk_client::models::{LookupContents, LookupTableFile};
use splunk_config::constants::DEFAULT_OWNER;
use tracing::warn;

use crate::error::{ProviderError, Result, SyncError};
use crate::resource::Resource;
use crate::resource_data::ResourceData;
use crate::schema::{Attribute, AttributeType, Block, Schema};

/// Where a lookup file lives; the resource id is `<app>/<owner>/<file_name>`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Location {
    app: String,
    owner: String,
    file_name: String,
}

impl Location {
    fn from_id(id: &str) -> Option<Self> {
        let mut parts = id.splitn(3, '/');
        let (app, owner, file_name) = (parts.next()?, parts.next()?, parts.next()?);
        if [app, owner, file_name].iter().any(|part| part.is_empty()) {
            return None;
        }
        Some(Self {
            app: app.to_string(),
            owner: owner.to_string(),
            file_name: file_name.to_string(),
        })
    }

    /// From the attributes, falling back to the id on import.
    fn from_data(data: &ResourceData) -> std::result::Result<Self, SyncError> {
        if let (Some(app), Some(file_name)) = (data.get_str("app"), data.get_str("file_name")) {
            return Ok(Self {
                app: app.to_string(),
                owner: data.get_str("owner").unwrap_or(DEFAULT_OWNER).to_string(),
                file_name: file_name.to_string(),
            });
        }
        Self::from_id(data.id()).ok_or_else(|| SyncError::Missing {
            attr: "file_name".to_string(),
        })
    }

    fn id(&self) -> String {
        format!("{}/{}/{}", self.app, self.owner, self.file_name)
    }

    fn record(&self, data: &mut ResourceData) {
        data.set_id(self.id());
        data.set("app", Value::String(self.app.clone()));
        data.set("owner", Value::String(self.owner.clone()));
        data.set("file_name", Value::String(self.file_name.clone()));
    }
}

/// CSV lookup files uploaded through `data/lookup_edit`.
pub struct LookupTableFileResource;

impl LookupTableFileResource {
    pub fn new() -> Self {
        Self
    }

    async fn upload(&self, client: &SplunkClient, data: &mut ResourceData) -> Result<()> {
        let location = Location::from_data(data)?;
        let contents = LookupContents(data.require("file_contents")?);
        client
            .upload_lookup_table(&LookupTableFile {
                app: location.app.clone(),
                file_name: location.file_name.clone(),
                owner: location.owner.clone(),
                contents,
            })
            .await?;

        location.record(data);
        self.read(client, data).await
    }
}

impl Default for LookupTableFileResource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Resource for LookupTableFileResource {
    fn type_name(&self) -> &'static str {
        "splunk_lookup_table_file"
    }

    fn schema(&self) -> Schema {
        Schema::new(
            Block::new("A CSV lookup table file")
                .attribute(
                    "app",
                    Attribute::string("App the file belongs to").required().force_new(),
                )
                .attribute(
                    "owner",
                    Attribute::string("Owner of the file, nobody when shared")
                        .optional_computed()
                        .force_new(),
                )
                .attribute(
                    "file_name",
                    Attribute::string("File name, e.g. http_status.csv")
                        .required()
                        .force_new(),
                )
                .attribute(
                    "file_contents",
                    Attribute::new(
                        AttributeType::list_of(AttributeType::list_of(AttributeType::String)),
                        "Rows of the file, header first",
                    )
                    .required(),
                ),
        )
    }

    async fn create(&self, client: &SplunkClient, data: &mut ResourceData) -> Result<()> {
        self.upload(client, data).await
    }

    async fn read(&self, client: &SplunkClient, data: &mut ResourceData) -> Result<()> {
        let location = Location::from_data(data)?;
        let contents = client
            .read_lookup_table(&location.app, &location.owner, &location.file_name)
            .await?;
        match contents {
            Some(contents) => {
                location.record(data);
                data.set_as("file_contents", contents.rows())?;
            }
            None => {
                warn!(
                    app = %location.app,
                    file = %location.file_name,
                    "Lookup table no longer exists in Splunk, removing it from state"
                );
                data.set_id("");
            }
        }
        Ok(())
    }

    async fn update(&self, client: &SplunkClient, data: &mut ResourceData) -> Result<()> {
        self.upload(client, data).await
    }

    async fn delete(&self, client: &SplunkClient, data: &mut ResourceData) -> Result<()> {
        let location = Location::from_data(data)?;
        client
            .delete_lookup_table(&location.app, &location.owner, &location.file_name)
            .await?;
        data.set_id("");
        Ok(())
    }

    async fn import(&self, client: &SplunkClient, id: &str) -> Result<ResourceData> {
        if Location::from_id(id).is_none() {
            return Err(ProviderError::InvalidImportId {
                id: id.to_string(),
                message: "expected <app>/<owner>/<file_name>".to_string(),
            });
        }
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
