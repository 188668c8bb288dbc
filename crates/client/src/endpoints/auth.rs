//! Username/password login exchange.

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use tracing::debug;

use super::request::{read_json, send_request};
use crate::error::{ClientError, Result};

/// POST `services/auth/login` and return the session key.
///
/// Splunk answers either with a top-level `sessionKey` or wrapped in an
/// Atom-style `entry[0].content`; both are accepted.
pub async fn login(
    http: &Client,
    base_url: &str,
    username: String,
    password: SecretString,
) -> Result<SecretString> {
    debug!(%username, "Logging in to Splunk");

    let url = format!("{}/services/auth/login", base_url.trim_end_matches('/'));
    let builder = http
        .post(&url)
        .query(&[("output_mode", "json")])
        .form(&[
            ("username", username.as_str()),
            ("password", password.expose_secret()),
        ]);
    let response = match send_request(builder).await {
        Err(e) if e.is_auth_error() => {
            return Err(ClientError::AuthFailed(format!(
                "login rejected for user '{username}': {e}"
            )));
        }
        other => other?,
    };

    let body: Value = read_json(response).await?;
    body.get("sessionKey")
        .or_else(|| body.pointer("/entry/0/content/sessionKey"))
        .and_then(Value::as_str)
        .filter(|key| !key.is_empty())
        .map(|key| SecretString::from(key.to_string()))
        .ok_or_else(|| ClientError::InvalidResponse("Missing sessionKey in login response".into()))
}
