//! Client builder for constructing [`SplunkClient`] instances.
//!
//! This module is responsible for:
//! - Validating required settings (base URL, auth strategy)
//! - Mapping a loaded [`Config`] onto client settings
//! - Configuring the underlying HTTP client (timeout, redirects, TLS verification)
//!
//! # Invariants
//! - The base URL is stored without trailing slashes.
//! - `skip_verify` only affects HTTPS connections; HTTP connections log a warning.

use std::time::Duration;

use splunk_config::{
    AuthStrategy as ConfigAuthStrategy, Config,
    constants::{DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS},
};
use tracing::warn;

use crate::auth::{AuthStrategy, SessionManager};
use crate::client::SplunkClient;
use crate::error::{ClientError, Result};

/// Builder for [`SplunkClient`].
#[derive(Debug)]
pub struct SplunkClientBuilder {
    base_url: Option<String>,
    auth_strategy: Option<AuthStrategy>,
    skip_verify: bool,
    timeout: Duration,
}

impl Default for SplunkClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            auth_strategy: None,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl SplunkClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scheme, host and management port, e.g. `https://localhost:8089`.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    pub fn auth_strategy(mut self, strategy: AuthStrategy) -> Self {
        self.auth_strategy = Some(strategy);
        self
    }

    /// Accept invalid TLS certificates. Development and test servers only.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Take connection and auth settings from a loaded configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        let auth_strategy = match &config.auth.strategy {
            ConfigAuthStrategy::Basic { username, password } => AuthStrategy::Basic {
                username: username.clone(),
                password: password.clone(),
            },
            ConfigAuthStrategy::SessionToken { username, password } => AuthStrategy::SessionToken {
                username: username.clone(),
                password: password.clone(),
            },
            ConfigAuthStrategy::SessionKey { key } => AuthStrategy::SessionKey { key: key.clone() },
            ConfigAuthStrategy::ApiToken { token } => AuthStrategy::ApiToken {
                token: token.clone(),
            },
        };

        self.base_url = Some(config.connection.base_url.clone());
        self.auth_strategy = Some(auth_strategy);
        self.skip_verify = config.connection.skip_verify;
        self.timeout = config.connection.timeout;
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// - [`ClientError::InvalidUrl`] if no base URL was given.
    /// - [`ClientError::AuthFailed`] if no auth strategy was given.
    /// - [`ClientError::HttpError`] if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<SplunkClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?
            .trim_end_matches('/')
            .to_string();

        let auth_strategy = self
            .auth_strategy
            .ok_or_else(|| ClientError::AuthFailed("auth_strategy is required".to_string()))?;

        let mut http_builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

        if self.skip_verify {
            if base_url.starts_with("https://") {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                warn!("insecure_skip_verify has no effect on plain HTTP URLs");
            }
        }

        Ok(SplunkClient {
            http: http_builder.build()?,
            base_url,
            session_manager: SessionManager::new(auth_strategy),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    fn secret(value: &str) -> SecretString {
        SecretString::new(value.to_string().into())
    }

    #[test]
    fn test_from_config_maps_every_strategy() {
        let url = "https://splunk.example.com:8089".to_string();
        let cases = [
            (
                Config::with_api_token(url.clone(), secret("t")),
                "ApiToken",
            ),
            (
                Config::with_session_token(url.clone(), "admin".into(), secret("p")),
                "SessionToken",
            ),
            (
                Config::with_basic_auth(url.clone(), "admin".into(), secret("p")),
                "Basic",
            ),
        ];

        for (config, expected) in cases {
            let client = SplunkClient::builder().from_config(&config).build().unwrap();
            let actual = match client.session_manager().strategy() {
                AuthStrategy::ApiToken { .. } => "ApiToken",
                AuthStrategy::SessionToken { .. } => "SessionToken",
                AuthStrategy::Basic { .. } => "Basic",
                AuthStrategy::SessionKey { .. } => "SessionKey",
            };
            assert_eq!(actual, expected);
            assert_eq!(client.base_url(), url);
        }
    }

    #[test]
    fn test_from_config_preserves_connection_settings() {
        let mut config =
            Config::with_api_token("https://splunk.example.com:8089/".to_string(), secret("t"));
        config.connection.skip_verify = true;
        config.connection.timeout = Duration::from_secs(120);

        let builder = SplunkClient::builder().from_config(&config);
        assert!(builder.skip_verify);
        assert_eq!(builder.timeout, Duration::from_secs(120));
        assert_eq!(
            builder.build().unwrap().base_url(),
            "https://splunk.example.com:8089"
        );
    }
}
