//! Splunk service paths.

use std::fmt;

use splunk_config::constants::{DEFAULT_APP, DEFAULT_OWNER};
use url::Url;

use super::url_encoding::encode_path_segment;
use crate::error::{ClientError, Result};

/// Where an object lives in Splunk's REST namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// `services/...`
    Global,
    /// `servicesNS/<owner>/<app>/...`
    User { owner: String, app: String },
}

impl Namespace {
    /// A user/app namespace; blank parts fall back to `nobody` and `search`.
    pub fn user(owner: impl Into<String>, app: impl Into<String>) -> Self {
        let owner = owner.into();
        let app = app.into();
        Self::User {
            owner: if owner.trim().is_empty() {
                DEFAULT_OWNER.to_string()
            } else {
                owner
            },
            app: if app.trim().is_empty() {
                DEFAULT_APP.to_string()
            } else {
                app
            },
        }
    }

    fn prefix(&self) -> String {
        match self {
            Self::Global => "services".to_string(),
            Self::User { owner, app } => format!(
                "servicesNS/{}/{}",
                encode_path_segment(owner),
                encode_path_segment(app)
            ),
        }
    }
}

impl Default for Namespace {
    fn default() -> Self {
        Self::user(DEFAULT_OWNER, DEFAULT_APP)
    }
}

/// A REST path below the server root.
///
/// The collection is trusted and may span several segments
/// (`data/inputs/tcp/raw`); the entry is user data and is always encoded as
/// one segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServicePath {
    namespace: Namespace,
    collection: String,
    entry: Option<String>,
    action: Option<String>,
}

impl ServicePath {
    pub fn new(namespace: Namespace, collection: impl Into<String>) -> Self {
        Self {
            namespace,
            collection: collection.into().trim_matches('/').to_string(),
            entry: None,
            action: None,
        }
    }

    /// Address a single entry of the collection.
    pub fn entry(mut self, name: impl Into<String>) -> Self {
        self.entry = Some(name.into());
        self
    }

    /// Append an action such as `acl` after the entry.
    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// Render against `base_url` (scheme, host and port, no trailing slash required).
    pub fn to_url(&self, base_url: &str) -> Result<Url> {
        let raw = format!("{}/{}", base_url.trim_end_matches('/'), self);
        Url::parse(&raw).map_err(|e| ClientError::InvalidUrl(format!("{raw}: {e}")))
    }
}

impl fmt::Display for ServicePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace.prefix(), self.collection)?;
        if let Some(entry) = &self.entry {
            write!(f, "/{}", encode_path_segment(entry))?;
        }
        if let Some(action) = &self.action {
            write!(f, "/{action}")?;
        }
        Ok(())
    }
}
