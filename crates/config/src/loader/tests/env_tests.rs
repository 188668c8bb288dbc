//! Environment variable fallbacks.

use std::time::Duration;

use secrecy::ExposeSecret;
use serial_test::serial;

use super::with_clean_env;
use crate::loader::builder::ConfigLoader;
use crate::loader::env::env_var_or_none;
use crate::loader::error::ConfigError;
use crate::types::AuthStrategy;

#[test]
#[serial]
fn test_env_fills_unset_values() {
    with_clean_env(|| {
        temp_env::with_vars(
            [
                ("SPLUNK_URL", Some("splunk.example.com:8089")),
                ("SPLUNK_USERNAME", Some("admin")),
                ("SPLUNK_PASSWORD", Some("changeme")),
                ("SPLUNK_INSECURE_SKIP_VERIFY", Some("true")),
                ("SPLUNK_TIMEOUT", Some("90")),
            ],
            || {
                let config = ConfigLoader::new().from_env().unwrap().build().unwrap();

                assert_eq!(config.connection.base_url, "https://splunk.example.com:8089");
                assert!(config.connection.skip_verify);
                assert_eq!(config.connection.timeout, Duration::from_secs(90));
                assert!(matches!(
                    config.auth.strategy,
                    AuthStrategy::SessionToken { .. }
                ));
            },
        );
    });
}

#[test]
#[serial]
fn test_explicit_values_win_over_env() {
    with_clean_env(|| {
        temp_env::with_vars(
            [
                ("SPLUNK_URL", Some("env-host:8089")),
                ("SPLUNK_AUTH_TOKEN", Some("env-token")),
            ],
            || {
                let config = ConfigLoader::new()
                    .with_url("https://explicit:8089".to_string())
                    .with_auth_token("explicit-token".to_string())
                    .from_env()
                    .unwrap()
                    .build()
                    .unwrap();

                assert_eq!(config.connection.base_url, "https://explicit:8089");
                match config.auth.strategy {
                    AuthStrategy::ApiToken { token } => {
                        assert_eq!(token.expose_secret(), "explicit-token")
                    }
                    other => panic!("expected ApiToken, got {other:?}"),
                }
            },
        );
    });
}

#[test]
#[serial]
fn test_http_scheme_env_overrides_default() {
    with_clean_env(|| {
        temp_env::with_vars(
            [
                ("HTTPScheme", Some("http")),
                ("SPLUNK_AUTH_TOKEN", Some("token")),
            ],
            || {
                let config = ConfigLoader::new()
                    .with_url("localhost:8089".to_string())
                    .from_env()
                    .unwrap()
                    .build()
                    .unwrap();

                assert_eq!(config.connection.base_url, "http://localhost:8089");
            },
        );
    });
}

#[test]
#[serial]
fn test_http_scheme_env_ignored_for_full_url() {
    with_clean_env(|| {
        temp_env::with_vars(
            [
                ("HTTPScheme", Some("http")),
                ("SPLUNK_AUTH_TOKEN", Some("token")),
            ],
            || {
                let config = ConfigLoader::new()
                    .with_url("https://secure:8089".to_string())
                    .from_env()
                    .unwrap()
                    .build()
                    .unwrap();

                assert_eq!(config.connection.base_url, "https://secure:8089");
            },
        );
    });
}

#[test]
#[serial]
fn test_basic_auth_env() {
    with_clean_env(|| {
        temp_env::with_vars(
            [
                ("SPLUNK_USERNAME", Some("admin")),
                ("SPLUNK_PASSWORD", Some("changeme")),
                ("SPLUNK_BASIC_AUTH", Some("true")),
            ],
            || {
                let config = ConfigLoader::new().from_env().unwrap().build().unwrap();
                assert!(matches!(config.auth.strategy, AuthStrategy::Basic { .. }));
            },
        );
    });
}

#[test]
#[serial]
fn test_empty_env_vars_ignored() {
    with_clean_env(|| {
        temp_env::with_vars(
            [
                ("SPLUNK_AUTH_TOKEN", Some("")),
                ("SPLUNK_USERNAME", Some("   ")),
                ("SPLUNK_PASSWORD", Some("")),
            ],
            || {
                let err = ConfigLoader::new()
                    .from_env()
                    .unwrap()
                    .build()
                    .unwrap_err();
                assert!(matches!(err, ConfigError::MissingAuth));
            },
        );
    });
}

#[test]
#[serial]
fn test_invalid_timeout_env() {
    with_clean_env(|| {
        temp_env::with_var("SPLUNK_TIMEOUT", Some("soon"), || {
            let err = ConfigLoader::new().from_env().unwrap_err();
            match err {
                ConfigError::InvalidValue { var, .. } => assert_eq!(var, "SPLUNK_TIMEOUT"),
                other => panic!("unexpected error: {other:?}"),
            }
        });
    });
}

#[test]
#[serial]
fn test_invalid_skip_verify_env() {
    with_clean_env(|| {
        temp_env::with_var("SPLUNK_INSECURE_SKIP_VERIFY", Some("maybe"), || {
            assert!(ConfigLoader::new().from_env().is_err());
        });
    });
}

#[test]
#[serial]
fn test_env_var_or_none_trims() {
    temp_env::with_var("SPLUNK_URL", Some("  host:8089  "), || {
        assert_eq!(env_var_or_none("SPLUNK_URL"), Some("host:8089".to_string()));
    });
}
