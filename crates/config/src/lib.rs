//! Configuration management for the Splunk Terraform provider.
//!
//! This crate provides the connection and authentication settings the
//! provider needs to reach a Splunk management endpoint, loaded from
//! explicit provider-block values with environment variable fallbacks.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{AuthConfig, AuthStrategy, Config, ConnectionConfig};
