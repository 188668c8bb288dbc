//! Users (`authentication/users`).

use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::explicit::Explicit;
use crate::serde_helpers::option_vec_from_string_or_seq;
use crate::values;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub email: Explicit<String>,
    #[serde(rename = "force-change-pass")]
    pub force_change_pass: Explicit<bool>,
    /// Write-only; Splunk never returns it.
    #[serde(skip_deserializing)]
    pub password: Explicit<String>,
    pub realname: Explicit<String>,
    /// `None` is not sent; an empty list is sent as `roles=`.
    #[serde(
        serialize_with = "values::fill_empty::serialize",
        deserialize_with = "option_vec_from_string_or_seq"
    )]
    pub roles: Option<Vec<String>>,
    pub tz: Explicit<String>,
    #[serde(rename = "defaultApp")]
    pub default_app: Explicit<String>,
    pub restart_background_jobs: Explicit<bool>,
    #[serde(rename = "type", skip_serializing)]
    pub user_type: Explicit<String>,
}

impl Entity for User {
    const KIND: &'static str = "user";

    fn collection_path(_name: &str) -> String {
        "authentication/users".to_string()
    }
}
