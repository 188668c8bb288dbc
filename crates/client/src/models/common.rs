//! Response envelopes shared by every Splunk collection.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Acl;

/// Type of message from Splunk API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MessageType {
    #[serde(rename = "ERROR")]
    Error,
    #[serde(rename = "WARN")]
    Warn,
    #[serde(rename = "INFO")]
    Info,
    #[serde(other)]
    #[default]
    Unknown,
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Error => "ERROR",
            Self::Warn => "WARN",
            Self::Info => "INFO",
            Self::Unknown => "UNKNOWN",
        };
        f.write_str(label)
    }
}

/// `{"entry": [...]}` envelope returned for every collection and entry GET/POST.
#[derive(Debug, Deserialize, Clone)]
pub struct SplunkResponse<T> {
    #[serde(default = "Vec::new")]
    pub entry: Vec<Entry<T>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Entry<T> {
    pub name: String,
    pub content: T,
    #[serde(default)]
    pub acl: Option<Acl>,
}

impl<T> SplunkResponse<T> {
    /// The entry called `name`, or the first one if none matches exactly.
    pub fn take_entry(self, name: &str) -> Option<Entry<T>> {
        let position = self
            .entry
            .iter()
            .position(|entry| entry.name == name)
            .unwrap_or(0);
        self.entry.into_iter().nth(position)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SplunkMessage {
    #[serde(rename = "type")]
    pub message_type: MessageType,
    pub text: String,
}

/// The `messages[]` body Splunk returns alongside errors.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SplunkMessages {
    pub messages: Vec<SplunkMessage>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_message_type_fallback() {
        assert_eq!(
            serde_json::from_str::<MessageType>("\"WARN\"").unwrap(),
            MessageType::Warn
        );
        assert_eq!(
            serde_json::from_str::<MessageType>("\"FATAL\"").unwrap(),
            MessageType::Unknown
        );
        assert_eq!(MessageType::Error.to_string(), "ERROR");
    }

    #[test]
    fn test_take_entry_prefers_exact_name() {
        let response: SplunkResponse<Value> = serde_json::from_str(
            r#"{"entry":[
                {"name":"main2","content":{}},
                {"name":"main","content":{"x":1}}
            ]}"#,
        )
        .unwrap();

        let entry = response.take_entry("main").unwrap();
        assert_eq!(entry.name, "main");
        assert!(entry.acl.is_none());
    }

    #[test]
    fn test_take_entry_falls_back_to_first() {
        let response: SplunkResponse<Value> =
            serde_json::from_str(r#"{"entry":[{"name":"config","content":{}}]}"#).unwrap();
        assert_eq!(response.take_entry("other").unwrap().name, "config");
    }

    #[test]
    fn test_missing_entry_list_is_empty() {
        let response: SplunkResponse<Value> = serde_json::from_str("{}").unwrap();
        assert!(response.take_entry("x").is_none());
    }
}
