//! Indexer clustering configuration (`cluster/config/config`).
//!
//! A singleton: it always exists, is created by updating it and is removed by
//! disabling clustering.

use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::explicit::Explicit;

/// Entry name of the singleton.
pub const CLUSTER_CONFIG_NAME: &str = "config";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterConfig {
    /// `manager`, `peer`, `searchhead` or `disabled`.
    pub mode: Explicit<String>,
    pub manager_uri: Explicit<String>,
    pub replication_factor: Explicit<i64>,
    pub search_factor: Explicit<i64>,
    pub cluster_label: Explicit<String>,
    #[serde(skip_deserializing)]
    pub secret: Explicit<String>,
}

impl ClusterConfig {
    /// The update that turns clustering off.
    pub fn disabled() -> Self {
        Self {
            mode: "disabled".into(),
            ..Self::default()
        }
    }
}

impl Entity for ClusterConfig {
    const KIND: &'static str = "cluster config";

    fn collection_path(_name: &str) -> String {
        "cluster/config".to_string()
    }

    fn entry_name(_name: &str) -> &str {
        CLUSTER_CONFIG_NAME
    }
}
