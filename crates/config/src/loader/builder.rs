//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for merging configuration sources.
//! - Build the final `Config` from loaded values.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables.
//! - A URL without a scheme gets `HTTPScheme` from the environment, or `https`.
//! - An auth token wins over a session key, which wins over username/password.

use secrecy::SecretString;
use std::time::Duration;

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::{DEFAULT_SCHEME, DEFAULT_SPLUNK_URL, DEFAULT_TIMEOUT_SECS, MAX_TIMEOUT_SECS};
use crate::types::{AuthConfig, AuthStrategy, Config, ConnectionConfig};

/// Configuration loader that builds config from explicit values and environment variables.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    pub(super) url: Option<String>,
    pub(super) scheme: Option<String>,
    pub(super) username: Option<String>,
    pub(super) password: Option<SecretString>,
    pub(super) auth_token: Option<SecretString>,
    pub(super) session_key: Option<SecretString>,
    pub(super) basic_auth: Option<bool>,
    pub(super) skip_verify: Option<bool>,
    pub(super) timeout: Option<Duration>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill unset values from environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the Splunk management URL, with or without a scheme.
    pub fn with_url(mut self, url: String) -> Self {
        self.url = Some(url);
        self
    }

    /// Set the scheme used when the URL has none.
    pub fn with_scheme(mut self, scheme: String) -> Self {
        self.scheme = Some(scheme);
        self
    }

    pub fn with_username(mut self, username: String) -> Self {
        self.username = Some(username);
        self
    }

    pub fn with_password(mut self, password: String) -> Self {
        self.password = Some(SecretString::new(password.into()));
        self
    }

    pub fn with_auth_token(mut self, token: String) -> Self {
        self.auth_token = Some(SecretString::new(token.into()));
        self
    }

    pub fn with_session_key(mut self, key: String) -> Self {
        self.session_key = Some(SecretString::new(key.into()));
        self
    }

    /// Send username/password as Basic credentials instead of logging in for a session key.
    pub fn with_basic_auth(mut self, basic: bool) -> Self {
        self.basic_auth = Some(basic);
        self
    }

    pub fn with_skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = Some(skip);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the final configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        let scheme = self.scheme.as_deref().unwrap_or(DEFAULT_SCHEME);
        let base_url =
            resolve_base_url(self.url.as_deref().unwrap_or(DEFAULT_SPLUNK_URL), scheme)?;

        let strategy = if let Some(token) = self.auth_token {
            AuthStrategy::ApiToken { token }
        } else if let Some(key) = self.session_key {
            AuthStrategy::SessionKey { key }
        } else {
            match (self.username, self.password) {
                (Some(username), Some(password)) if self.basic_auth.unwrap_or(false) => {
                    AuthStrategy::Basic { username, password }
                }
                (Some(username), Some(password)) => {
                    AuthStrategy::SessionToken { username, password }
                }
                (Some(username), None) => return Err(ConfigError::MissingPassword { username }),
                _ => return Err(ConfigError::MissingAuth),
            }
        };

        let timeout = self
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        validate_timeout(timeout)?;

        tracing::debug!(
            %base_url,
            auth = strategy_name(&strategy),
            timeout_secs = timeout.as_secs(),
            "resolved provider configuration"
        );

        Ok(Config {
            connection: ConnectionConfig {
                base_url,
                skip_verify: self.skip_verify.unwrap_or(false),
                timeout,
            },
            auth: AuthConfig { strategy },
        })
    }
}

fn strategy_name(strategy: &AuthStrategy) -> &'static str {
    match strategy {
        AuthStrategy::Basic { .. } => "basic",
        AuthStrategy::SessionToken { .. } => "session",
        AuthStrategy::SessionKey { .. } => "session_key",
        AuthStrategy::ApiToken { .. } => "token",
    }
}

fn validate_timeout(timeout: Duration) -> Result<(), ConfigError> {
    let secs = timeout.as_secs();
    if secs == 0 {
        return Err(ConfigError::InvalidTimeout {
            message: "timeout must be greater than 0 seconds".to_string(),
        });
    }
    if secs > MAX_TIMEOUT_SECS {
        return Err(ConfigError::InvalidTimeout {
            message: format!("timeout exceeds maximum allowed value of {MAX_TIMEOUT_SECS} seconds"),
        });
    }
    Ok(())
}

/// Turn a configured URL into an absolute base URL without a trailing slash.
///
/// `localhost:8089` becomes `<scheme>://localhost:8089`; a URL that already
/// carries a scheme is kept as is.
pub(super) fn resolve_base_url(raw: &str, scheme: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::InvalidValue {
            var: "url".into(),
            message: "must not be empty".into(),
        });
    }

    let candidate = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("{scheme}://{trimmed}")
    };

    let parsed = url::Url::parse(&candidate).map_err(|e| ConfigError::InvalidValue {
        var: "url".into(),
        message: format!("must be a host[:port] or an absolute http(s) URL: {e}"),
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ConfigError::InvalidValue {
            var: "url".into(),
            message: format!("scheme must be http or https, got: {scheme}"),
        });
    }

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidValue {
            var: "url".into(),
            message: "host is required (e.g. localhost:8089)".into(),
        });
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
