//! Connection configuration types.
//!
//! Responsibilities:
//! - Define connection settings (URL, TLS verification, timeout).
//! - Define the main `Config` structure combining connection and auth.
//!
//! Does NOT handle:
//! - Configuration loading (see `loader` module).
//!
//! Invariants:
//! - `base_url` always carries a scheme and never ends with a slash once built by the loader.

use crate::constants::DEFAULT_TIMEOUT_SECS;
use crate::types::auth::{AuthConfig, AuthStrategy};
use secrecy::SecretString;
use std::time::Duration;

/// Connection configuration for the Splunk management endpoint.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Base URL of the Splunk server (e.g., https://localhost:8089)
    pub base_url: String,
    /// Whether to skip TLS verification (for self-signed certificates)
    pub skip_verify: bool,
    /// Request timeout
    pub timeout: Duration,
}

impl ConnectionConfig {
    fn new(base_url: String) -> Self {
        Self {
            base_url,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone)]
pub struct Config {
    pub connection: ConnectionConfig,
    pub auth: AuthConfig,
}

impl Config {
    fn with_strategy(base_url: String, strategy: AuthStrategy) -> Self {
        Self {
            connection: ConnectionConfig::new(base_url),
            auth: AuthConfig { strategy },
        }
    }

    /// Create a config that authenticates with a bearer token.
    pub fn with_api_token(base_url: String, token: SecretString) -> Self {
        Self::with_strategy(base_url, AuthStrategy::ApiToken { token })
    }

    /// Create a config that logs in once and reuses the session key.
    pub fn with_session_token(base_url: String, username: String, password: SecretString) -> Self {
        Self::with_strategy(base_url, AuthStrategy::SessionToken { username, password })
    }

    /// Create a config that sends Basic credentials on every request.
    pub fn with_basic_auth(base_url: String, username: String, password: SecretString) -> Self {
        Self::with_strategy(base_url, AuthStrategy::Basic { username, password })
    }
}
