//! Splunk object types and response envelopes.

pub mod acl;
pub mod cluster;
pub mod common;
pub mod configs;
pub mod indexes;
pub mod inputs;
pub mod lookups;
pub mod outputs;
pub mod roles;
pub mod saved_searches;
pub mod users;

pub use acl::{Acl, Perms, Sharing};
pub use cluster::{CLUSTER_CONFIG_NAME, ClusterConfig};
pub use common::{Entry, MessageType, SplunkMessage, SplunkMessages, SplunkResponse};
pub use configs::ConfigStanza;
pub use indexes::Index;
pub use inputs::{MonitorInput, NetworkInputSettings, TcpRawInput, UdpInput};
pub use lookups::{LookupContents, LookupTableFile};
pub use outputs::{TcpOutputGroup, TcpOutputServer};
pub use roles::Role;
pub use saved_searches::SavedSearch;
pub use users::User;
