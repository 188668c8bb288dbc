//! Tests for the configuration loader.
//!
//! Invariants:
//! - Tests that touch the environment run under `serial_test` and scope
//!   their variables with `temp-env`.

mod env_tests;
mod validation_tests;

/// Every variable the loader reads; cleared so the host environment cannot leak in.
pub(super) const LOADER_ENV_VARS: [&str; 9] = [
    "SPLUNK_URL",
    "SPLUNK_USERNAME",
    "SPLUNK_PASSWORD",
    "SPLUNK_AUTH_TOKEN",
    "SPLUNK_SESSION_KEY",
    "SPLUNK_BASIC_AUTH",
    "SPLUNK_INSECURE_SKIP_VERIFY",
    "SPLUNK_TIMEOUT",
    "HTTPScheme",
];

/// Run `f` with all loader variables unset.
pub(super) fn with_clean_env<R>(f: impl FnOnce() -> R) -> R {
    temp_env::with_vars_unset(LOADER_ENV_VARS, f)
}
