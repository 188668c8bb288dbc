//! Data inputs: monitored files, raw TCP and UDP.

use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::explicit::Explicit;
use crate::values;

/// Settings shared by network inputs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkInputSettings {
    pub index: Explicit<String>,
    pub host: Explicit<String>,
    pub source: Explicit<String>,
    pub sourcetype: Explicit<String>,
    pub queue: Explicit<String>,
    /// `ip`, `dns` or `none`.
    pub connection_host: Explicit<String>,
    #[serde(rename = "restrictToHost", with = "values::create_only")]
    pub restrict_to_host: Explicit<String>,
    pub disabled: Explicit<bool>,
}

/// A monitored file or directory (`data/inputs/monitor`), named by its path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorInput {
    pub index: Explicit<String>,
    pub host: Explicit<String>,
    pub sourcetype: Explicit<String>,
    #[serde(rename = "rename-source")]
    pub rename_source: Explicit<String>,
    pub blacklist: Explicit<String>,
    pub whitelist: Explicit<String>,
    #[serde(rename = "crcSalt")]
    pub crc_salt: Explicit<String>,
    #[serde(rename = "followTail")]
    pub follow_tail: Explicit<bool>,
    pub recursive: Explicit<bool>,
    pub host_regex: Explicit<String>,
    pub host_segment: Explicit<i64>,
    pub ignore_older_than: Explicit<String>,
    pub time_before_close: Explicit<i64>,
    pub disabled: Explicit<bool>,
}

impl Entity for MonitorInput {
    const KIND: &'static str = "monitor input";

    fn collection_path(_name: &str) -> String {
        "data/inputs/monitor".to_string()
    }
}

/// A raw TCP input (`data/inputs/tcp/raw`), named by port or `host:port`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TcpRawInput {
    #[serde(flatten)]
    pub settings: NetworkInputSettings,
    #[serde(rename = "rawTcpDoneTimeout")]
    pub raw_tcp_done_timeout: Explicit<i64>,
}

impl Entity for TcpRawInput {
    const KIND: &'static str = "tcp raw input";

    fn collection_path(_name: &str) -> String {
        "data/inputs/tcp/raw".to_string()
    }
}

/// A UDP input (`data/inputs/udp`), named by port or `host:port`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UdpInput {
    #[serde(flatten)]
    pub settings: NetworkInputSettings,
    pub no_appending_timestamp: Explicit<bool>,
    pub no_priority_stripping: Explicit<bool>,
}

impl Entity for UdpInput {
    const KIND: &'static str = "udp input";

    fn collection_path(_name: &str) -> String {
        "data/inputs/udp".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::Operation;

    #[test]
    fn test_monitor_input_keys() {
        let input = MonitorInput {
            index: "main".into(),
            rename_source: "app".into(),
            follow_tail: Explicit::new(false),
            ..MonitorInput::default()
        };

        let encoded = values::encode(&input).unwrap();
        assert_eq!(encoded.get("index"), Some("main"));
        assert_eq!(encoded.get("rename-source"), Some("app"));
        assert_eq!(encoded.get("followTail"), Some("false"));
        assert_eq!(encoded.len(), 3);
    }

    #[test]
    fn test_network_settings_are_flattened() {
        let input = UdpInput {
            settings: NetworkInputSettings {
                sourcetype: "syslog".into(),
                restrict_to_host: "10.0.0.1".into(),
                ..NetworkInputSettings::default()
            },
            no_appending_timestamp: Explicit::new(true),
            ..UdpInput::default()
        };

        let create = values::encode_for(&input, Operation::Create).unwrap();
        assert_eq!(create.get("sourcetype"), Some("syslog"));
        assert_eq!(create.get("restrictToHost"), Some("10.0.0.1"));
        assert_eq!(create.get("no_appending_timestamp"), Some("true"));

        let update = values::encode_for(&input, Operation::Update).unwrap();
        assert!(!update.contains_key("restrictToHost"));
    }

    #[test]
    fn test_tcp_input_decodes_flattened_settings() {
        let input: TcpRawInput = serde_json::from_str(
            r#"{"index":"default","connection_host":"dns","disabled":"0","rawTcpDoneTimeout":10}"#,
        )
        .unwrap();

        assert_eq!(input.settings.index, Explicit::new("default".to_string()));
        assert_eq!(input.settings.disabled, Explicit::new(false));
        assert_eq!(input.raw_tcp_done_timeout, Explicit::new(10));
    }
}
