//! Arbitrary `.conf` stanzas (`configs/conf-<file>`).
//!
//! A stanza is named `<file>/<stanza>`, e.g. `props/source::/var/log/app.log`.
//! Everything after the first `/` is the stanza name.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::endpoints::url_encoding::encode_path_segment;
use crate::entity::Entity;
use crate::serde_helpers::string_from_json;

/// Key/value settings of one stanza.
///
/// Splunk's `eai:*` metadata is dropped on decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConfigStanza {
    #[serde(flatten)]
    pub variables: BTreeMap<String, String>,
}

impl ConfigStanza {
    /// Split `<file>/<stanza>`; `None` if either half is empty.
    pub fn split_name(name: &str) -> Option<(&str, &str)> {
        name.split_once('/')
            .filter(|(file, stanza)| !file.is_empty() && !stanza.is_empty())
    }
}

impl<'de> Deserialize<'de> for ConfigStanza {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Map::<String, Value>::deserialize(deserializer)?;
        let variables = raw
            .into_iter()
            .filter(|(key, _)| !key.starts_with("eai:"))
            .filter_map(|(key, value)| string_from_json(&value).map(|v| (key, v)))
            .collect();
        Ok(Self { variables })
    }
}

impl Entity for ConfigStanza {
    const KIND: &'static str = "config stanza";

    fn collection_path(name: &str) -> String {
        let file = name.split_once('/').map_or(name, |(file, _)| file);
        format!("configs/conf-{}", encode_path_segment(file))
    }

    fn entry_name(name: &str) -> &str {
        name.split_once('/').map_or(name, |(_, stanza)| stanza)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values;

    #[test]
    fn test_decode_drops_metadata() {
        let stanza: ConfigStanza = serde_json::from_str(
            r#"{
                "SHOULD_LINEMERGE": "false",
                "TRUNCATE": 10000,
                "disabled": false,
                "eai:acl": null,
                "eai:appName": "search",
                "nested": {"ignored": true}
            }"#,
        )
        .unwrap();

        let keys: Vec<_> = stanza.variables.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["SHOULD_LINEMERGE", "TRUNCATE", "disabled"]);
        assert_eq!(stanza.variables["TRUNCATE"], "10000");
    }

    #[test]
    fn test_variables_encode_as_top_level_keys() {
        let mut stanza = ConfigStanza::default();
        stanza
            .variables
            .insert("TIME_FORMAT".into(), "%Y-%m-%d".into());
        stanza.variables.insert("KV_MODE".into(), "json".into());

        let encoded = values::encode(&stanza).unwrap();
        let pairs: Vec<_> = encoded.iter().collect();
        assert_eq!(
            pairs,
            vec![("KV_MODE", "json"), ("TIME_FORMAT", "%Y-%m-%d")]
        );
    }

    #[test]
    fn test_split_name() {
        assert_eq!(
            ConfigStanza::split_name("transforms/strip/prefix"),
            Some(("transforms", "strip/prefix"))
        );
        assert_eq!(ConfigStanza::split_name("props"), None);
        assert_eq!(ConfigStanza::split_name("/stanza"), None);
    }
}
