//! Validation failures reported by `ConfigLoader::build`.

use std::time::Duration;

use crate::loader::builder::{ConfigLoader, resolve_base_url};
use crate::loader::error::ConfigError;

#[test]
fn test_missing_auth() {
    let err = ConfigLoader::new().build().unwrap_err();
    assert!(matches!(err, ConfigError::MissingAuth));
}

#[test]
fn test_username_without_password() {
    let err = ConfigLoader::new()
        .with_username("admin".to_string())
        .build()
        .unwrap_err();
    match err {
        ConfigError::MissingPassword { username } => assert_eq!(username, "admin"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_zero_timeout_rejected() {
    let err = ConfigLoader::new()
        .with_auth_token("t".to_string())
        .with_timeout(Duration::from_secs(0))
        .build()
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidTimeout { .. }));
}

#[test]
fn test_oversized_timeout_rejected() {
    let err = ConfigLoader::new()
        .with_auth_token("t".to_string())
        .with_timeout(Duration::from_secs(7200))
        .build()
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidTimeout { .. }));
}

#[test]
fn test_unsupported_scheme_rejected() {
    let err = resolve_base_url("ftp://splunk:8089", "https").unwrap_err();
    match err {
        ConfigError::InvalidValue { var, message } => {
            assert_eq!(var, "url");
            assert!(message.contains("ftp"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_blank_url_rejected() {
    assert!(resolve_base_url("   ", "https").is_err());
}

#[test]
fn test_resolve_trims_whitespace_and_slashes() {
    assert_eq!(
        resolve_base_url("  localhost:8089/ ", "https").unwrap(),
        "https://localhost:8089"
    );
}

mod property {
    use super::resolve_base_url;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn bare_hosts_always_gain_the_scheme(
            host in "[a-z][a-z0-9-]{0,20}(\\.[a-z][a-z0-9-]{0,10}){0,2}",
            port in 1u16..,
            scheme in prop_oneof![Just("http"), Just("https")],
        ) {
            let url = resolve_base_url(&format!("{host}:{port}"), scheme).unwrap();
            let expected_prefix = format!("{}://", scheme);
            prop_assert!(url.starts_with(&expected_prefix));
            prop_assert!(!url.ends_with('/'));
        }
    }
}
