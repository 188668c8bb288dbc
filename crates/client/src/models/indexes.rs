//! Event and metrics indexes (`data/indexes`).

use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::explicit::Explicit;
use crate::values;

/// Index settings.
///
/// Storage paths and the data type are fixed once the index exists, so they
/// are only sent on create.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Index {
    /// `event` or `metric`.
    #[serde(with = "values::create_only")]
    pub datatype: Explicit<String>,
    #[serde(rename = "homePath", with = "values::create_only")]
    pub home_path: Explicit<String>,
    #[serde(rename = "coldPath", with = "values::create_only")]
    pub cold_path: Explicit<String>,
    #[serde(rename = "thawedPath", with = "values::create_only")]
    pub thawed_path: Explicit<String>,
    #[serde(rename = "bucketRebuildMemoryHint")]
    pub bucket_rebuild_memory_hint: Explicit<String>,
    #[serde(rename = "coldToFrozenDir")]
    pub cold_to_frozen_dir: Explicit<String>,
    #[serde(rename = "coldToFrozenScript")]
    pub cold_to_frozen_script: Explicit<String>,
    #[serde(rename = "enableOnlineBucketRepair")]
    pub enable_online_bucket_repair: Explicit<bool>,
    #[serde(rename = "frozenTimePeriodInSecs")]
    pub frozen_time_period_in_secs: Explicit<i64>,
    #[serde(rename = "homePath.maxDataSizeMB")]
    pub home_path_max_data_size_mb: Explicit<i64>,
    #[serde(rename = "coldPath.maxDataSizeMB")]
    pub cold_path_max_data_size_mb: Explicit<i64>,
    #[serde(rename = "maxDataSize")]
    pub max_data_size: Explicit<String>,
    #[serde(rename = "maxHotBuckets")]
    pub max_hot_buckets: Explicit<String>,
    #[serde(rename = "maxHotIdleSecs")]
    pub max_hot_idle_secs: Explicit<i64>,
    #[serde(rename = "maxTotalDataSizeMB")]
    pub max_total_data_size_mb: Explicit<i64>,
    #[serde(rename = "maxWarmDBCount")]
    pub max_warm_db_count: Explicit<i64>,
    #[serde(rename = "repFactor")]
    pub rep_factor: Explicit<String>,
    #[serde(rename = "currentDBSizeMB", skip_serializing)]
    pub current_db_size_mb: Explicit<i64>,
    #[serde(rename = "totalEventCount", skip_serializing)]
    pub total_event_count: Explicit<i64>,
    #[serde(skip_serializing)]
    pub disabled: Explicit<bool>,
}

impl Entity for Index {
    const KIND: &'static str = "index";

    fn collection_path(_name: &str) -> String {
        "data/indexes".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::Operation;

    fn sample() -> Index {
        Index {
            datatype: "event".into(),
            home_path: "$SPLUNK_DB/web/db".into(),
            max_total_data_size_mb: Explicit::new(1024),
            frozen_time_period_in_secs: Explicit::new(0),
            ..Index::default()
        }
    }

    #[test]
    fn test_create_sends_paths() {
        let encoded = values::encode_for(&sample(), Operation::Create).unwrap();
        assert_eq!(encoded.get("datatype"), Some("event"));
        assert_eq!(encoded.get("homePath"), Some("$SPLUNK_DB/web/db"));
        assert_eq!(encoded.get("maxTotalDataSizeMB"), Some("1024"));
        assert_eq!(encoded.get("frozenTimePeriodInSecs"), Some("0"));
        assert!(!encoded.contains_key("coldPath"));
    }

    #[test]
    fn test_update_omits_immutable_fields() {
        let encoded = values::encode_for(&sample(), Operation::Update).unwrap();
        assert!(!encoded.contains_key("datatype"));
        assert!(!encoded.contains_key("homePath"));
        assert_eq!(encoded.len(), 2);
    }

    #[test]
    fn test_computed_fields_decode_but_never_encode() {
        let index: Index = serde_json::from_str(
            r#"{
                "currentDBSizeMB": 12,
                "totalEventCount": "3400",
                "maxHotBuckets": "auto",
                "homePath.maxDataSizeMB": "0",
                "disabled": false,
                "eai:acl": null
            }"#,
        )
        .unwrap();

        assert_eq!(index.current_db_size_mb, Explicit::new(12));
        assert_eq!(index.total_event_count, Explicit::new(3400));
        assert_eq!(index.max_hot_buckets, Explicit::new("auto".to_string()));
        assert_eq!(index.home_path_max_data_size_mb, Explicit::new(0));

        let encoded = values::encode(&index).unwrap();
        assert!(!encoded.contains_key("currentDBSizeMB"));
        assert!(!encoded.contains_key("disabled"));
    }
}
