//! Centralized constants for the Splunk provider workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Maximum allowed connection timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default Splunk management endpoint when none is configured.
pub const DEFAULT_SPLUNK_URL: &str = "localhost:8089";

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// URL Scheme
// =============================================================================

/// Scheme used when the configured URL does not carry one.
pub const DEFAULT_SCHEME: &str = "https";

/// Environment variable that overrides [`DEFAULT_SCHEME`].
pub const HTTP_SCHEME_ENV: &str = "HTTPScheme";

// =============================================================================
// Namespace Defaults
// =============================================================================

/// Owner used for `servicesNS` paths when none is configured.
pub const DEFAULT_OWNER: &str = "nobody";

/// App context used for `servicesNS` paths when none is configured.
pub const DEFAULT_APP: &str = "search";
