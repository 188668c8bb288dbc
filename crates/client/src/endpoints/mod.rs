//! Low-level REST plumbing shared by the client.
//!
//! Responsibilities:
//! - Build Splunk service paths (`services/...`, `servicesNS/<owner>/<app>/...`).
//! - Send requests and normalize non-2xx responses into typed errors.
//! - Perform the username/password login exchange.
//!
//! Does NOT handle:
//! - Choosing credentials for a request (see [`crate::auth`]).
//! - Object-level CRUD (see [`crate::client`]).

mod auth;
mod path;
mod request;
pub mod url_encoding;

pub use auth::login;
pub use path::{Namespace, ServicePath};
pub use request::{read_json, send_request};
