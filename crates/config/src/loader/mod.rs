//! Configuration loader for provider-block values and environment variables.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` that merges explicit values with env fallbacks.
//! - Resolve the effective base URL, scheme and auth strategy.
//!
//! Does NOT handle:
//! - Reading the Terraform provider block itself (see provider crate).
//! - Interaction with the Splunk API (see client crate).
//!
//! Invariants / Assumptions:
//! - Explicit builder values take precedence over environment variables.
//! - `from_env()` must be called explicitly for environment fallbacks to apply.

mod builder;
mod env;
mod error;

pub use builder::ConfigLoader;
pub use env::env_var_or_none;
pub use error::ConfigError;

#[cfg(test)]
mod tests;
