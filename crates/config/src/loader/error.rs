//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for all configuration loading failures.
//!
//! Invariants:
//! - Error variants carry the offending variable or field name.
//! - Secret values never appear in error messages.

use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error(
        "Authentication configuration is required (auth_token, session_key, or username and password)"
    )]
    MissingAuth,

    #[error("Username '{username}' was given without a password")]
    MissingPassword { username: String },

    #[error("invalid timeout: {message}")]
    InvalidTimeout { message: String },
}
