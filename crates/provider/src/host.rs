//! One-shot operation requests exchanged with the plugin host as JSON.
//!
//! A request carries the provider block, the resource configuration, the
//! stored state and, for imports, the id to import. The response carries the
//! new state, `null` once the resource is gone.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::info;

use crate::error::{ProviderError, Result};
use crate::provider::SplunkProvider;
use crate::resource_data::ResourceData;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ResourceOperation {
    Create,
    Read,
    Update,
    Delete,
    Import,
}

impl ResourceOperation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Read => "read",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Import => "import",
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OperationRequest {
    /// The `provider "splunk"` block.
    pub provider: Map<String, Value>,
    /// Planned resource configuration (create, update).
    pub config: Map<String, Value>,
    /// Stored state (read, update, delete).
    pub state: Value,
    pub import_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperationResponse {
    pub state: Value,
}

/// Configure a provider from the request and run one operation.
pub async fn execute(
    type_name: &str,
    operation: ResourceOperation,
    request: OperationRequest,
) -> Result<OperationResponse> {
    let mut provider = SplunkProvider::new();
    provider.configure(&ResourceData::from_config(request.provider.clone()))?;
    run(&provider, type_name, operation, request).await
}

/// Run one operation against an already configured provider.
pub async fn run(
    provider: &SplunkProvider,
    type_name: &str,
    operation: ResourceOperation,
    request: OperationRequest,
) -> Result<OperationResponse> {
    info!(resource = type_name, operation = operation.as_str(), "Running resource operation");

    let data = match operation {
        ResourceOperation::Create => {
            let mut data = ResourceData::from_config(request.config);
            provider.create(type_name, &mut data).await?;
            data
        }
        ResourceOperation::Read => {
            let mut data = ResourceData::from_state(request.state)?;
            provider.read(type_name, &mut data).await?;
            data
        }
        ResourceOperation::Update => {
            let mut data = ResourceData::planned(request.state, request.config)?;
            provider.update(type_name, &mut data).await?;
            data
        }
        ResourceOperation::Delete => {
            let mut data = ResourceData::from_state(request.state)?;
            provider.delete(type_name, &mut data).await?;
            data
        }
        ResourceOperation::Import => {
            let id = request
                .import_id
                .filter(|id| !id.is_empty())
                .ok_or_else(|| ProviderError::InvalidImportId {
                    id: String::new(),
                    message: "import requires a non-empty import_id".to_string(),
                })?;
            provider.import(type_name, &id).await?
        }
    };

    Ok(OperationResponse {
        state: data.to_state(),
    })
}
