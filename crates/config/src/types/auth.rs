//! Authentication types for provider configuration.
//!
//! Responsibilities:
//! - Define the authentication strategies a Splunk connection can use.
//!
//! Does NOT handle:
//! - Login or token exchange (see client crate).
//!
//! Invariants:
//! - All secret values use `secrecy::SecretString` so `Debug` output never leaks them.

use secrecy::SecretString;

/// Strategy for authenticating with Splunk.
#[derive(Debug, Clone)]
pub enum AuthStrategy {
    /// HTTP Basic credentials sent with every request.
    Basic {
        username: String,
        password: SecretString,
    },
    /// Username and password exchanged once for a session key.
    SessionToken {
        username: String,
        password: SecretString,
    },
    /// A session key obtained outside the provider.
    SessionKey { key: SecretString },
    /// Bearer token authentication.
    ApiToken { token: SecretString },
}

/// Authentication configuration.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// The authentication strategy to use.
    pub strategy: AuthStrategy,
}
