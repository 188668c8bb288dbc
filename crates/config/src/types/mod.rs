//! Configuration type definitions.
//!
//! Responsibilities:
//! - Define authentication strategies and connection settings.
//! - Provide convenience constructors for common config shapes.
//!
//! Does NOT handle:
//! - Loading from the environment or provider blocks (see `loader` module).
//! - Actual network connections or authentication flows (see client crate).
//!
//! Invariants:
//! - All secret types use `secrecy::SecretString` to prevent accidental logging.

mod auth;
mod connection;

pub use auth::{AuthConfig, AuthStrategy};
pub use connection::{Config, ConnectionConfig};
