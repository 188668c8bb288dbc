//! Roles (`authorization/roles`).

use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::explicit::Explicit;
use crate::serde_helpers::vec_from_string_or_seq;
use crate::values;

/// Role settings.
///
/// List fields repeat their key per element; an empty list sends `key=` so
/// removing the last capability actually clears it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Role {
    #[serde(
        serialize_with = "values::fill_empty::serialize",
        deserialize_with = "vec_from_string_or_seq"
    )]
    pub capabilities: Vec<String>,
    #[serde(
        serialize_with = "values::fill_empty::serialize",
        deserialize_with = "vec_from_string_or_seq"
    )]
    pub imported_roles: Vec<String>,
    #[serde(rename = "cumulativeRTSrchJobsQuota")]
    pub cumulative_rt_srch_jobs_quota: Explicit<i64>,
    #[serde(rename = "cumulativeSrchJobsQuota")]
    pub cumulative_srch_jobs_quota: Explicit<i64>,
    #[serde(rename = "defaultApp")]
    pub default_app: Explicit<String>,
    #[serde(rename = "rtSrchJobsQuota")]
    pub rt_srch_jobs_quota: Explicit<i64>,
    #[serde(rename = "srchDiskQuota")]
    pub srch_disk_quota: Explicit<i64>,
    #[serde(rename = "srchFilter")]
    pub srch_filter: Explicit<String>,
    #[serde(
        rename = "srchIndexesAllowed",
        serialize_with = "values::fill_empty::serialize",
        deserialize_with = "vec_from_string_or_seq"
    )]
    pub srch_indexes_allowed: Vec<String>,
    #[serde(
        rename = "srchIndexesDefault",
        serialize_with = "values::fill_empty::serialize",
        deserialize_with = "vec_from_string_or_seq"
    )]
    pub srch_indexes_default: Vec<String>,
    #[serde(rename = "srchJobsQuota")]
    pub srch_jobs_quota: Explicit<i64>,
    #[serde(rename = "srchTimeWin")]
    pub srch_time_win: Explicit<i64>,
}

impl Entity for Role {
    const KIND: &'static str = "role";

    fn collection_path(_name: &str) -> String {
        "authorization/roles".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capabilities_repeat_and_fill_empty() {
        let role = Role {
            capabilities: vec!["search".into(), "rest_properties_get".into()],
            srch_indexes_allowed: vec!["main".into()],
            srch_jobs_quota: Explicit::new(3),
            ..Role::default()
        };

        let encoded = values::encode(&role).unwrap();
        assert_eq!(
            encoded.get_all("capabilities"),
            vec!["search", "rest_properties_get"]
        );
        assert_eq!(encoded.get_all("imported_roles"), vec![""]);
        assert_eq!(encoded.get_all("srchIndexesAllowed"), vec!["main"]);
        assert_eq!(encoded.get_all("srchIndexesDefault"), vec![""]);
        assert_eq!(encoded.get("srchJobsQuota"), Some("3"));
    }

    #[test]
    fn test_decode_role_content() {
        let role: Role = serde_json::from_str(
            r#"{
                "capabilities": ["search"],
                "imported_roles": [],
                "srchIndexesAllowed": ["*", "_internal"],
                "srchDiskQuota": 100,
                "srchFilter": "",
                "imported_capabilities": ["x"]
            }"#,
        )
        .unwrap();

        assert_eq!(role.capabilities, vec!["search"]);
        assert!(role.imported_roles.is_empty());
        assert_eq!(role.srch_indexes_allowed, vec!["*", "_internal"]);
        assert_eq!(role.srch_disk_quota, Explicit::new(100));
        assert_eq!(role.srch_filter, Explicit::new(String::new()));
    }
}
