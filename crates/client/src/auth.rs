//! Authentication strategies and session management.
//!
//! Responsibilities:
//! - Define the supported ways to authenticate against Splunk.
//! - Cache the session key obtained from a lazy login.
//! - Turn the active strategy into request credentials.
//!
//! Does NOT handle:
//! - The login HTTP call itself (see `endpoints::auth`).
//! - Re-authentication after expiry; a rejected session key surfaces as an API error.
//!
//! Invariants:
//! - A single mutex guards the cached session key, so concurrent first
//!   requests trigger exactly one login.
//! - Secrets are `SecretString` and never appear in `Debug` output.

use std::future::Future;

use reqwest::RequestBuilder;
use reqwest::header::AUTHORIZATION;
use secrecy::{ExposeSecret, SecretString};
use tokio::sync::Mutex;

use crate::error::Result;

/// Strategy for authenticating with Splunk.
#[derive(Debug, Clone)]
pub enum AuthStrategy {
    /// HTTP Basic credentials on every request.
    Basic {
        username: String,
        password: SecretString,
    },
    /// Username and password exchanged once for a session key.
    SessionToken {
        username: String,
        password: SecretString,
    },
    /// A session key obtained elsewhere, sent as `Authorization: Splunk <key>`.
    SessionKey { key: SecretString },
    /// Bearer token authentication.
    ApiToken { token: SecretString },
}

/// Credentials attached to a single request.
#[derive(Debug, Clone)]
pub(crate) enum Credential {
    Basic {
        username: String,
        password: SecretString,
    },
    SessionKey(SecretString),
    Bearer(SecretString),
}

impl Credential {
    pub(crate) fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        match self {
            Self::Basic { username, password } => {
                builder.basic_auth(username, Some(password.expose_secret()))
            }
            Self::SessionKey(key) => {
                builder.header(AUTHORIZATION, format!("Splunk {}", key.expose_secret()))
            }
            Self::Bearer(token) => builder.bearer_auth(token.expose_secret()),
        }
    }
}

/// Holds the auth strategy and the lazily obtained session key.
#[derive(Debug)]
pub struct SessionManager {
    auth_strategy: AuthStrategy,
    session_key: Mutex<Option<SecretString>>,
}

impl SessionManager {
    /// Create a new session manager with the given auth strategy.
    pub fn new(strategy: AuthStrategy) -> Self {
        Self {
            auth_strategy: strategy,
            session_key: Mutex::new(None),
        }
    }

    /// Get the current auth strategy.
    pub fn strategy(&self) -> &AuthStrategy {
        &self.auth_strategy
    }

    /// Whether requests need a login before they can be authorized.
    pub fn uses_login(&self) -> bool {
        matches!(self.auth_strategy, AuthStrategy::SessionToken { .. })
    }

    /// Whether a session key from a previous login is cached.
    pub async fn has_session(&self) -> bool {
        self.session_key.lock().await.is_some()
    }

    /// Drop the cached session key; the next request logs in again.
    pub async fn clear_session(&self) {
        *self.session_key.lock().await = None;
    }

    /// Resolve the credential for the next request.
    ///
    /// For [`AuthStrategy::SessionToken`], `login` runs while the session lock
    /// is held, and only when no key is cached yet.
    pub(crate) async fn credential<F, Fut>(&self, login: F) -> Result<Credential>
    where
        F: FnOnce(String, SecretString) -> Fut,
        Fut: Future<Output = Result<SecretString>>,
    {
        match &self.auth_strategy {
            AuthStrategy::Basic { username, password } => Ok(Credential::Basic {
                username: username.clone(),
                password: password.clone(),
            }),
            AuthStrategy::SessionKey { key } => Ok(Credential::SessionKey(key.clone())),
            AuthStrategy::ApiToken { token } => Ok(Credential::Bearer(token.clone())),
            AuthStrategy::SessionToken { username, password } => {
                let mut cached = self.session_key.lock().await;
                if let Some(key) = cached.as_ref() {
                    return Ok(Credential::SessionKey(key.clone()));
                }
                let key = login(username.clone(), password.clone()).await?;
                *cached = Some(key.clone());
                Ok(Credential::SessionKey(key))
            }
        }
    }
}
