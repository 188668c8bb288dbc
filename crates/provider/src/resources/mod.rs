//! Every Splunk resource type the provider serves.
//!
//! Plain CRUD types are [`EntityResource`](crate::resource::EntityResource)
//! instances assembled from a schema block and content adapters. Lookup
//! tables, generic ACLs and the cluster configuration have their own
//! lifecycles and implement [`Resource`] directly.

use std::sync::Arc;

use crate::resource::Resource;

pub(crate) mod acl;
mod cluster;
mod configs;
mod indexes;
mod inputs;
mod lookups;
mod outputs;
mod roles;
mod saved_searches;
mod users;

/// Adds one direct field adapter per `"attribute" => field.path` pair.
macro_rules! fields {
    ($set:expr; $($attr:literal => $($field:ident).+),* $(,)?) => {
        $set$(.field($attr, |c| &c.$($field).+, |c| &mut c.$($field).+))*
    };
}
pub(crate) use fields;

/// All resource types, in registration order.
pub fn all() -> Vec<Arc<dyn Resource>> {
    vec![
        Arc::new(indexes::resource()),
        Arc::new(inputs::monitor()),
        Arc::new(inputs::tcp_raw()),
        Arc::new(inputs::udp()),
        Arc::new(outputs::tcp_group()),
        Arc::new(outputs::tcp_server()),
        Arc::new(saved_searches::resource()),
        Arc::new(roles::resource()),
        Arc::new(users::resource()),
        Arc::new(configs::resource()),
        Arc::new(lookups::LookupTableFileResource::new()),
        Arc::new(acl::GenericAclResource::new()),
        Arc::new(cluster::ClusterConfigResource::new()),
    ]
}
