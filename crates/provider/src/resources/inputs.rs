//! `splunk_inputs_monitor`, `splunk_inputs_tcp_raw` and `splunk_inputs_udp`

use splunk_client::models::{MonitorInput, TcpRawInput, UdpInput};

use super::fields;
use crate::resource::{EntityResource, Scope};
use crate::schema::{Attribute, Block};
use crate::sync::SyncSet;

fn common_attributes(block: Block) -> Block {
    block
        .attribute(
            "index",
            Attribute::string("Destination index").optional_computed(),
        )
        .attribute(
            "host",
            Attribute::string("Host field value for events").optional_computed(),
        )
        .attribute(
            "sourcetype",
            Attribute::string("Source type field value for events").optional_computed(),
        )
        .attribute(
            "disabled",
            Attribute::bool("Whether the input is disabled").optional_computed(),
        )
}

pub(super) fn monitor() -> EntityResource<MonitorInput> {
    let block = common_attributes(Block::new("A file or directory monitor input"))
        .attribute(
            "name",
            Attribute::string("Path of the file or directory to monitor")
                .required()
                .force_new(),
        )
        .attribute(
            "rename_source",
            Attribute::string("Source field value for events").optional_computed(),
        )
        .attribute(
            "blacklist",
            Attribute::string("Regex of paths to skip").optional_computed(),
        )
        .attribute(
            "whitelist",
            Attribute::string("Regex of paths to read").optional_computed(),
        )
        .attribute(
            "crc_salt",
            Attribute::string("Salt for the initial CRC, e.g. <SOURCE>").optional_computed(),
        )
        .attribute(
            "follow_tail",
            Attribute::bool("Start reading at the end of files").optional_computed(),
        )
        .attribute(
            "recursive",
            Attribute::bool("Descend into subdirectories").optional_computed(),
        )
        .attribute(
            "host_regex",
            Attribute::string("Regex extracting the host from the path").optional_computed(),
        )
        .attribute(
            "host_segment",
            Attribute::number("Path segment used as the host").optional_computed(),
        )
        .attribute(
            "ignore_older_than",
            Attribute::string("Skip files last modified before this age, e.g. 7d")
                .optional_computed(),
        )
        .attribute(
            "time_before_close",
            Attribute::number("Seconds to wait before closing a file").optional_computed(),
        );

    let content = fields!(SyncSet::<MonitorInput>::new();
        "index" => index,
        "host" => host,
        "sourcetype" => sourcetype,
        "disabled" => disabled,
        "rename_source" => rename_source,
        "blacklist" => blacklist,
        "whitelist" => whitelist,
        "crc_salt" => crc_salt,
        "follow_tail" => follow_tail,
        "recursive" => recursive,
        "host_regex" => host_regex,
        "host_segment" => host_segment,
        "ignore_older_than" => ignore_older_than,
        "time_before_close" => time_before_close,
    );

    EntityResource::new("splunk_inputs_monitor", Scope::Namespaced, block, content)
}

fn network_attributes(block: Block) -> Block {
    common_attributes(block)
        .attribute(
            "name",
            Attribute::string("Port to listen on, optionally prefixed by <host>:")
                .required()
                .force_new(),
        )
        .attribute(
            "source",
            Attribute::string("Source field value for events").optional_computed(),
        )
        .attribute(
            "queue",
            Attribute::string("Queue receiving the data: parsingQueue or indexQueue")
                .optional_computed(),
        )
        .attribute(
            "connection_host",
            Attribute::string("How the host is set: ip, dns or none").optional_computed(),
        )
        .attribute(
            "restrict_to_host",
            Attribute::string("Only accept connections from this host")
                .optional_computed()
                .force_new(),
        )
}

/// Adapters for the settings shared by network inputs, reached through `settings`.
macro_rules! network_fields {
    ($set:expr) => {
        fields!($set;
            "index" => settings.index,
            "host" => settings.host,
            "source" => settings.source,
            "sourcetype" => settings.sourcetype,
            "queue" => settings.queue,
            "connection_host" => settings.connection_host,
            "restrict_to_host" => settings.restrict_to_host,
            "disabled" => settings.disabled,
        )
    };
}

pub(super) fn tcp_raw() -> EntityResource<TcpRawInput> {
    let block = network_attributes(Block::new("A raw TCP input")).attribute(
        "raw_tcp_done_timeout",
        Attribute::number("Seconds of silence that end an event").optional_computed(),
    );

    let content = network_fields!(SyncSet::<TcpRawInput>::new()).field(
        "raw_tcp_done_timeout",
        |c| &c.raw_tcp_done_timeout,
        |c| &mut c.raw_tcp_done_timeout,
    );

    EntityResource::new("splunk_inputs_tcp_raw", Scope::Namespaced, block, content)
}

pub(super) fn udp() -> EntityResource<UdpInput> {
    let block = network_attributes(Block::new("A UDP input"))
        .attribute(
            "no_appending_timestamp",
            Attribute::bool("Do not prepend a timestamp and host to events").optional_computed(),
        )
        .attribute(
            "no_priority_stripping",
            Attribute::bool("Keep the syslog priority in events").optional_computed(),
        );

    let content = fields!(network_fields!(SyncSet::<UdpInput>::new());
        "no_appending_timestamp" => no_appending_timestamp,
        "no_priority_stripping" => no_priority_stripping,
    );

    EntityResource::new("splunk_inputs_udp", Scope::Namespaced, block, content)
}
