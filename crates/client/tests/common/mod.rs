//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - Clients point at a wiremock server over plain HTTP

#[allow(unused_imports)]
pub use splunk_client::testing::load_fixture;

#[allow(unused_imports)]
pub use splunk_client::{
    AuthStrategy, ClientError, Namespace, ObjectId, ServicePath, SplunkClient,
};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use secrecy::SecretString;

#[allow(dead_code)]
pub const TEST_TOKEN: &str = "test-token";

#[allow(dead_code)]
pub fn secret(value: &str) -> SecretString {
    SecretString::new(value.to_string().into())
}

/// Client using bearer token auth against `server`.
#[allow(dead_code)]
pub fn token_client(server: &MockServer) -> SplunkClient {
    client_with(
        server,
        AuthStrategy::ApiToken {
            token: secret(TEST_TOKEN),
        },
    )
}

#[allow(dead_code)]
pub fn client_with(server: &MockServer, strategy: AuthStrategy) -> SplunkClient {
    SplunkClient::builder()
        .base_url(server.uri())
        .auth_strategy(strategy)
        .build()
        .expect("client should build")
}

/// Decode a form-urlencoded request body into ordered pairs.
#[allow(dead_code)]
pub fn form_pairs(body: &[u8]) -> Vec<(String, String)> {
    url::form_urlencoded::parse(body).into_owned().collect()
}

/// All values sent for `key` in a form body.
#[allow(dead_code)]
pub fn form_values(body: &[u8], key: &str) -> Vec<String> {
    form_pairs(body)
        .into_iter()
        .filter(|(k, _)| k == key)
        .map(|(_, v)| v)
        .collect()
}
