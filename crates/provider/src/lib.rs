//! Terraform provider for Splunk Enterprise.
//!
//! Resources map Terraform attributes onto Splunk REST entities through
//! declarative sync adapters; the [`SplunkProvider`] dispatches resource
//! operations to them with a configured [`splunk_client::SplunkClient`].

pub mod error;
pub mod exit_code;
pub mod host;
pub mod logging;
pub mod provider;
pub mod resource;
pub mod resource_data;
pub mod resources;
pub mod schema;
pub mod sync;

pub use error::{ProviderError, Result, SyncError};
pub use host::{OperationRequest, OperationResponse, ResourceOperation};
pub use provider::SplunkProvider;
pub use resource::{EntityResource, Resource, Scope};
pub use resource_data::ResourceData;
pub use schema::{Attribute, AttributeType, Block, NestedBlock, Schema};
