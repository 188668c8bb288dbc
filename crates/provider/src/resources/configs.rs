//! `splunk_configs_conf`

use std::collections::BTreeMap;

use splunk_client::models::ConfigStanza;

use crate::error::SyncError;
use crate::resource::{EntityResource, Scope};
use crate::resource_data::ResourceData;
use crate::schema::{Attribute, Block};
use crate::sync::{FieldSync, SyncSet};

const VARIABLES: &str = "variables";

/// The stanza's key/value map.
///
/// Splunk returns every inherited default alongside the configured keys, so
/// once keys are configured only those are recorded.
struct StanzaVariables;

impl FieldSync<ConfigStanza> for StanzaVariables {
    fn to_resource(&self, stanza: &ConfigStanza, data: &mut ResourceData) -> Result<(), SyncError> {
        let configured: Option<BTreeMap<String, String>> = data.get_as(VARIABLES)?;
        let variables: BTreeMap<&String, &String> = match &configured {
            Some(configured) => stanza
                .variables
                .iter()
                .filter(|(key, _)| configured.contains_key(*key))
                .collect(),
            None => stanza.variables.iter().collect(),
        };
        data.set_as(VARIABLES, &variables)
    }

    fn to_object(&self, data: &ResourceData, stanza: &mut ConfigStanza) -> Result<(), SyncError> {
        if let Some(variables) = data.get_as::<BTreeMap<String, String>>(VARIABLES)? {
            stanza.variables = variables;
        }
        Ok(())
    }
}

pub(super) fn resource() -> EntityResource<ConfigStanza> {
    let block = Block::new("A stanza of a .conf file")
        .attribute(
            "name",
            Attribute::string("<file>/<stanza>, e.g. props/sourcetype::access_combined")
                .required()
                .force_new(),
        )
        .attribute(
            VARIABLES,
            Attribute::string_map("Settings of the stanza").optional_computed(),
        );

    let content = SyncSet::<ConfigStanza>::new().with(StanzaVariables);

    EntityResource::new("splunk_configs_conf", Scope::Namespaced, block, content)
        .validate_name(check_name)
}

/// Both halves are needed: `props` alone would address a stanza named
/// `props`, and `props/` the whole file.
fn check_name(name: &str) -> Result<(), String> {
    ConfigStanza::split_name(name)
        .map(|_| ())
        .ok_or_else(|| format!("expected <file>/<stanza>, got '{name}'"))
}
