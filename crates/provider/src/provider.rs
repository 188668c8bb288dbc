//! The provider: configuration, resource registry and dispatch.
//!
//! Responsibilities:
//! - Declare the provider block schema and turn it into a configured client.
//! - Look up resources by Terraform type name.
//! - Validate resource data against the resource schema before dispatching.
//!
//! Invariants:
//! - Provider block values take precedence over `SPLUNK_*` environment variables.
//! - Resource callbacks are never invoked before `configure` succeeds.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use splunk_client::SplunkClient;
use splunk_config::ConfigLoader;
use tracing::debug;

use crate::error::{ProviderError, Result};
use crate::resource::Resource;
use crate::resource_data::ResourceData;
use crate::resources;
use crate::schema::{Attribute, Block, Schema};

pub struct SplunkProvider {
    resources: BTreeMap<&'static str, Arc<dyn Resource>>,
    client: Option<SplunkClient>,
}

impl Default for SplunkProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl SplunkProvider {
    pub fn new() -> Self {
        let resources = resources::all()
            .into_iter()
            .map(|resource| (resource.type_name(), resource))
            .collect();
        Self {
            resources,
            client: None,
        }
    }

    /// Schema of the `provider "splunk"` block.
    pub fn schema() -> Schema {
        Schema::new(
            Block::new("Splunk management API connection")
                .attribute(
                    "url",
                    Attribute::string("Management endpoint as host:port or a full URL (SPLUNK_URL)"),
                )
                .attribute(
                    "username",
                    Attribute::string("Username for session or Basic auth (SPLUNK_USERNAME)"),
                )
                .attribute(
                    "password",
                    Attribute::string("Password for session or Basic auth (SPLUNK_PASSWORD)")
                        .sensitive(),
                )
                .attribute(
                    "auth_token",
                    Attribute::string("Bearer token, preferred over other credentials (SPLUNK_AUTH_TOKEN)")
                        .sensitive(),
                )
                .attribute(
                    "session_key",
                    Attribute::string("Session key obtained elsewhere (SPLUNK_SESSION_KEY)")
                        .sensitive(),
                )
                .attribute(
                    "basic_auth",
                    Attribute::bool("Send username/password as Basic auth on every request (SPLUNK_BASIC_AUTH)"),
                )
                .attribute(
                    "insecure_skip_verify",
                    Attribute::bool("Skip TLS certificate verification (SPLUNK_INSECURE_SKIP_VERIFY)"),
                )
                .attribute(
                    "timeout",
                    Attribute::number("Request timeout in seconds (SPLUNK_TIMEOUT)"),
                ),
        )
    }

    /// Build the client from the provider block and the environment.
    pub fn configure(&mut self, config: &ResourceData) -> Result<()> {
        Self::schema()
            .validate(config)
            .map_err(|problems| ProviderError::Validation {
                resource: "provider".to_string(),
                problems,
            })?;

        let mut loader = ConfigLoader::new();
        if let Some(url) = config.get_as::<String>("url")? {
            loader = loader.with_url(url);
        }
        if let Some(username) = config.get_as::<String>("username")? {
            loader = loader.with_username(username);
        }
        if let Some(password) = config.get_as::<String>("password")? {
            loader = loader.with_password(password);
        }
        if let Some(token) = config.get_as::<String>("auth_token")? {
            loader = loader.with_auth_token(token);
        }
        if let Some(key) = config.get_as::<String>("session_key")? {
            loader = loader.with_session_key(key);
        }
        if let Some(basic) = config.get_as::<bool>("basic_auth")? {
            loader = loader.with_basic_auth(basic);
        }
        if let Some(skip) = config.get_as::<bool>("insecure_skip_verify")? {
            loader = loader.with_skip_verify(skip);
        }
        if let Some(secs) = config.get_as::<u64>("timeout")? {
            loader = loader.with_timeout(Duration::from_secs(secs));
        }

        let config = loader.from_env()?.build()?;
        debug!(base_url = %config.connection.base_url, "Configuring Splunk provider");
        self.client = Some(SplunkClient::builder().from_config(&config).build()?);
        Ok(())
    }

    /// Use an already built client instead of `configure`.
    pub fn with_client(mut self, client: SplunkClient) -> Self {
        self.client = Some(client);
        self
    }

    pub fn client(&self) -> Result<&SplunkClient> {
        self.client.as_ref().ok_or(ProviderError::NotConfigured)
    }

    pub fn resource_types(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.resources.keys().copied()
    }

    pub fn resource(&self, type_name: &str) -> Result<&dyn Resource> {
        self.resources
            .get(type_name)
            .map(|resource| resource.as_ref())
            .ok_or_else(|| ProviderError::UnknownResource(type_name.to_string()))
    }

    pub fn resource_schemas(&self) -> BTreeMap<&'static str, Schema> {
        self.resources
            .iter()
            .map(|(name, resource)| (*name, resource.schema()))
            .collect()
    }

    fn validated(&self, type_name: &str, data: &ResourceData) -> Result<&dyn Resource> {
        let resource = self.resource(type_name)?;
        resource
            .schema()
            .validate(data)
            .map_err(|problems| ProviderError::Validation {
                resource: type_name.to_string(),
                problems,
            })?;
        Ok(resource)
    }

    pub async fn create(&self, type_name: &str, data: &mut ResourceData) -> Result<()> {
        let resource = self.validated(type_name, data)?;
        resource.create(self.client()?, data).await
    }

    pub async fn read(&self, type_name: &str, data: &mut ResourceData) -> Result<()> {
        let resource = self.resource(type_name)?;
        resource.read(self.client()?, data).await
    }

    pub async fn update(&self, type_name: &str, data: &mut ResourceData) -> Result<()> {
        let resource = self.validated(type_name, data)?;
        resource.update(self.client()?, data).await
    }

    pub async fn delete(&self, type_name: &str, data: &mut ResourceData) -> Result<()> {
        let resource = self.resource(type_name)?;
        resource.delete(self.client()?, data).await
    }

    pub async fn import(&self, type_name: &str, id: &str) -> Result<ResourceData> {
        let resource = self.resource(type_name)?;
        resource.import(self.client()?, id).await
    }
}
