//! The Splunk REST client.
//!
//! # Submodules
//! - [`builder`]: client construction from explicit settings or a [`splunk_config::Config`]
//! - `session`: attaching credentials, logging in lazily for session auth
//! - `entities`: generic create/read/update/delete over any [`Entity`](crate::Entity)
//! - `acl`: reading and updating object permissions
//! - `lookups`: lookup table file upload and removal
//!
//! # What this module does NOT handle:
//! - Retrying failed requests. Every call is exactly one HTTP request,
//!   apart from the one-time login for session auth.
//!
//! # Invariants
//! - Every request carries `output_mode=json`.
//! - POST bodies are `application/x-www-form-urlencoded`.

mod acl;
pub mod builder;
mod entities;
mod lookups;
mod session;

use reqwest::{Method, Response};

use crate::auth::SessionManager;
use crate::endpoints::{self, ServicePath};
use crate::error::Result;
use crate::values::Values;

/// Splunk REST API client.
///
/// ```rust,ignore
/// use splunk_client::{AuthStrategy, SplunkClient};
///
/// let client = SplunkClient::builder()
///     .base_url("https://localhost:8089".to_string())
///     .auth_strategy(AuthStrategy::ApiToken { token })
///     .build()?;
/// ```
#[derive(Debug)]
pub struct SplunkClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) session_manager: SessionManager,
}

impl SplunkClient {
    pub fn builder() -> builder::SplunkClientBuilder {
        builder::SplunkClientBuilder::new()
    }

    /// Scheme, host and port, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session_manager(&self) -> &SessionManager {
        &self.session_manager
    }

    /// GET `path` with extra query parameters.
    pub async fn get(&self, path: &ServicePath, query: &[(&str, &str)]) -> Result<Response> {
        let builder = self.request(Method::GET, path).await?.query(query);
        endpoints::send_request(builder).await
    }

    /// POST `values` as a form body to `path`.
    pub async fn post(&self, path: &ServicePath, values: &Values) -> Result<Response> {
        let builder = self
            .request(Method::POST, path)
            .await?
            .form(values.as_pairs());
        endpoints::send_request(builder).await
    }

    pub async fn delete(&self, path: &ServicePath) -> Result<Response> {
        let builder = self.request(Method::DELETE, path).await?;
        endpoints::send_request(builder).await
    }

    async fn request(&self, method: Method, path: &ServicePath) -> Result<reqwest::RequestBuilder> {
        let url = path.to_url(&self.base_url)?;
        let builder = self
            .http
            .request(method, url)
            .query(&[("output_mode", "json")]);
        self.authorize(builder).await
    }
}
