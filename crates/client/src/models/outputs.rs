//! Forwarding outputs (`data/outputs/tcp/...`).

use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::explicit::Explicit;
use crate::serde_helpers::vec_from_string_or_seq;
use crate::values;

/// A `[tcpout:<group>]` target group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TcpOutputGroup {
    #[serde(
        serialize_with = "values::comma_separated::serialize",
        deserialize_with = "vec_from_string_or_seq"
    )]
    pub servers: Vec<String>,
    pub compressed: Explicit<bool>,
    pub disabled: Explicit<bool>,
    #[serde(rename = "dropEventsOnQueueFull")]
    pub drop_events_on_queue_full: Explicit<i64>,
    #[serde(rename = "heartbeatFrequency")]
    pub heartbeat_frequency: Explicit<i64>,
    #[serde(rename = "maxQueueSize")]
    pub max_queue_size: Explicit<String>,
    /// `tcpout`, `clone` or `syslog`.
    pub method: Explicit<String>,
    #[serde(rename = "sendCookedData")]
    pub send_cooked_data: Explicit<bool>,
    #[serde(skip_deserializing)]
    pub token: Explicit<String>,
}

impl Entity for TcpOutputGroup {
    const KIND: &'static str = "tcp output group";

    fn collection_path(_name: &str) -> String {
        "data/outputs/tcp/group".to_string()
    }
}

/// A `[tcpout-server://host:port]` receiver.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TcpOutputServer {
    pub method: Explicit<String>,
    #[serde(rename = "sslAltNameToCheck")]
    pub ssl_alt_name_to_check: Explicit<String>,
    #[serde(rename = "sslCertPath")]
    pub ssl_cert_path: Explicit<String>,
    #[serde(rename = "sslCipher")]
    pub ssl_cipher: Explicit<String>,
    #[serde(rename = "sslCommonNameToCheck")]
    pub ssl_common_name_to_check: Explicit<String>,
    #[serde(rename = "sslPassword", skip_deserializing)]
    pub ssl_password: Explicit<String>,
    #[serde(rename = "sslRootCAPath")]
    pub ssl_root_ca_path: Explicit<String>,
    #[serde(rename = "sslVerifyServerCert")]
    pub ssl_verify_server_cert: Explicit<bool>,
    pub disabled: Explicit<bool>,
}

impl Entity for TcpOutputServer {
    const KIND: &'static str = "tcp output server";

    fn collection_path(_name: &str) -> String {
        "data/outputs/tcp/server".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_servers_are_comma_joined() {
        let group = TcpOutputGroup {
            servers: vec!["idx1:9997".into(), "idx2:9997".into()],
            send_cooked_data: Explicit::new(true),
            ..TcpOutputGroup::default()
        };

        let encoded = values::encode(&group).unwrap();
        assert_eq!(encoded.get_all("servers"), vec!["idx1:9997,idx2:9997"]);
        assert_eq!(encoded.get("sendCookedData"), Some("true"));
    }

    #[test]
    fn test_servers_decode_from_string_or_list() {
        let from_string: TcpOutputGroup =
            serde_json::from_str(r#"{"servers":"idx1:9997, idx2:9997"}"#).unwrap();
        let from_list: TcpOutputGroup =
            serde_json::from_str(r#"{"servers":["idx1:9997","idx2:9997"]}"#).unwrap();
        assert_eq!(from_string.servers, from_list.servers);
    }

    #[test]
    fn test_secrets_are_never_read_back() {
        let server: TcpOutputServer =
            serde_json::from_str(r#"{"sslPassword":"********","method":"autobalance"}"#).unwrap();
        assert!(!server.ssl_password.is_set());
        assert_eq!(server.method, Explicit::new("autobalance".to_string()));
    }
}
