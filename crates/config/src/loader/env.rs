//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse environment variables for Splunk configuration.
//! - Fill in loader values that were not set explicitly.
//!
//! Does NOT handle:
//! - Building the final Config (see builder.rs).
//!
//! Invariants:
//! - Values already set on the loader are never overwritten.
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid boolean or numeric values return ConfigError::InvalidValue.

use secrecy::SecretString;
use std::str::FromStr;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::HTTP_SCHEME_ENV;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn parse_env<T: FromStr>(var: &str, message: &str) -> Result<Option<T>, ConfigError> {
    env_var_or_none(var)
        .map(|raw| {
            raw.parse::<T>().map_err(|_| ConfigError::InvalidValue {
                var: var.to_string(),
                message: message.to_string(),
            })
        })
        .transpose()
}

/// Apply environment variable configuration to the loader.
///
/// Only fields that are still unset on the loader are filled.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if loader.url.is_none() {
        loader.url = env_var_or_none("SPLUNK_URL");
    }
    if loader.username.is_none() {
        loader.username = env_var_or_none("SPLUNK_USERNAME");
    }
    if loader.password.is_none() {
        loader.password = env_var_or_none("SPLUNK_PASSWORD").map(|p| SecretString::new(p.into()));
    }
    if loader.auth_token.is_none() {
        loader.auth_token =
            env_var_or_none("SPLUNK_AUTH_TOKEN").map(|t| SecretString::new(t.into()));
    }
    if loader.session_key.is_none() {
        loader.session_key =
            env_var_or_none("SPLUNK_SESSION_KEY").map(|k| SecretString::new(k.into()));
    }
    if loader.basic_auth.is_none() {
        loader.basic_auth = parse_env("SPLUNK_BASIC_AUTH", "must be true or false")?;
    }
    if loader.skip_verify.is_none() {
        loader.skip_verify = parse_env("SPLUNK_INSECURE_SKIP_VERIFY", "must be true or false")?;
    }
    if loader.timeout.is_none() {
        loader.timeout = parse_env::<u64>("SPLUNK_TIMEOUT", "must be a number of seconds")?
            .map(Duration::from_secs);
    }
    if loader.scheme.is_none() {
        loader.scheme = env_var_or_none(HTTP_SCHEME_ENV);
    }
    Ok(())
}
