//! Shared helpers for provider integration tests.
//!
//! # Invariants
//! - Every provider talks to a wiremock server over plain HTTP with a bearer token
//! - Resource data is built from JSON literals the way the plugin host sends it

#[allow(unused_imports)]
pub use splunk_client::testing::load_fixture;
#[allow(unused_imports)]
pub use terraform_provider_splunk::{ProviderError, ResourceData, SplunkProvider};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use serde_json::{Map, Value};
use splunk_client::{AuthStrategy, SplunkClient};

#[allow(dead_code)]
pub const TEST_TOKEN: &str = "test-token";

/// Provider configured against `server`.
#[allow(dead_code)]
pub fn provider_for(server: &MockServer) -> SplunkProvider {
    let client = SplunkClient::builder()
        .base_url(server.uri())
        .auth_strategy(AuthStrategy::ApiToken {
            token: secrecy::SecretString::new(TEST_TOKEN.to_string().into()),
        })
        .build()
        .expect("client should build");
    SplunkProvider::new().with_client(client)
}

#[allow(dead_code)]
pub fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}

#[allow(dead_code)]
pub fn config(value: Value) -> ResourceData {
    ResourceData::from_config(object(value))
}

#[allow(dead_code)]
pub fn state(value: Value) -> ResourceData {
    ResourceData::from_state(value).expect("state should be an object")
}

/// A single-entry Splunk response.
#[allow(dead_code)]
pub fn entry_response(name: &str, acl: Value, content: Value) -> Value {
    serde_json::json!({
        "entry": [{"name": name, "acl": acl, "content": content}]
    })
}

/// Decode a form-urlencoded request body into ordered pairs.
#[allow(dead_code)]
pub fn form_pairs(body: &[u8]) -> Vec<(String, String)> {
    url::form_urlencoded::parse(body).into_owned().collect()
}

/// The single value sent for `key`, if any.
#[allow(dead_code)]
pub fn form_value(body: &[u8], key: &str) -> Option<String> {
    form_pairs(body)
        .into_iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v)
}
