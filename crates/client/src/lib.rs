//! Splunk REST API client for managing configuration objects.
//!
//! The crate maps typed Splunk objects to form-encoded write requests and
//! JSON responses:
//! - [`values`] flattens any `Serialize` value into form pairs, with
//!   per-operation field selection.
//! - [`Explicit`] keeps "unset" apart from "set to zero".
//! - [`SplunkClient`] sends single-shot requests under `services/` or
//!   `servicesNS/<owner>/<app>/` with Basic, session or bearer auth, and
//!   offers generic CRUD over any [`Entity`].

mod auth;
pub mod client;
pub mod endpoints;
mod entity;
pub mod error;
mod explicit;
pub mod models;
pub mod serde_helpers;
pub mod values;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use auth::{AuthStrategy, SessionManager};
pub use client::SplunkClient;
pub use client::builder::SplunkClientBuilder;
pub use endpoints::{Namespace, ServicePath};
pub use entity::{Entity, Object, ObjectId};
pub use error::{ClientError, Result};
pub use explicit::{Explicit, ExplicitValue};
pub use values::{Operation, Values, ValuesError};
