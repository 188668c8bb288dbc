//! Provider error types.

use splunk_client::ClientError;
use splunk_config::ConfigError;
use thiserror::Error;

/// Failure moving a value between resource data and a Splunk object.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("attribute '{attr}': {message}")]
    InvalidValue { attr: String, message: String },

    #[error("attribute '{attr}' is required")]
    Missing { attr: String },

    #[error("resource state must be a JSON object")]
    NotAnObject,
}

impl SyncError {
    pub(crate) fn invalid(attr: &str, message: impl std::fmt::Display) -> Self {
        Self::InvalidValue {
            attr: attr.to_string(),
            message: message.to_string(),
        }
    }
}

/// Errors surfaced to the plugin host as a failed resource operation.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("invalid provider configuration: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Sync(#[from] SyncError),

    #[error("invalid configuration for {resource}: {}", .problems.join("; "))]
    Validation {
        resource: String,
        problems: Vec<String>,
    },

    #[error("unknown resource type '{0}'")]
    UnknownResource(String),

    #[error("provider has not been configured")]
    NotConfigured,

    #[error("invalid import id '{id}': {message}")]
    InvalidImportId { id: String, message: String },

    #[error("{kind} '{id}' does not exist")]
    NotFound { kind: String, id: String },
}

pub type Result<T> = std::result::Result<T, ProviderError>;
