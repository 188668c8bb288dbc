//! `splunk_outputs_tcp_group` and `splunk_outputs_tcp_server`

use splunk_client::models::{TcpOutputGroup, TcpOutputServer};

use super::fields;
use crate::resource::{EntityResource, Scope};
use crate::schema::{Attribute, Block};
use crate::sync::SyncSet;

pub(super) fn tcp_group() -> EntityResource<TcpOutputGroup> {
    let block = Block::new("A group of forwarding targets")
        .attribute(
            "servers",
            Attribute::string_list("Receivers as <host>:<port>").required(),
        )
        .attribute(
            "compressed",
            Attribute::bool("Compress forwarded data").optional_computed(),
        )
        .attribute(
            "disabled",
            Attribute::bool("Whether the group is disabled").optional_computed(),
        )
        .attribute(
            "drop_events_on_queue_full",
            Attribute::number("Seconds to wait before dropping events when the queue is full")
                .optional_computed(),
        )
        .attribute(
            "heartbeat_frequency",
            Attribute::number("Seconds between heartbeats").optional_computed(),
        )
        .attribute(
            "max_queue_size",
            Attribute::string("Output queue size, e.g. auto or 7MB").optional_computed(),
        )
        .attribute(
            "method",
            Attribute::string("tcpout or clone").optional_computed(),
        )
        .attribute(
            "send_cooked_data",
            Attribute::bool("Send processed events instead of raw data").optional_computed(),
        )
        .attribute(
            "token",
            Attribute::string("Token receivers require from this forwarder")
                .optional()
                .sensitive(),
        );

    let content = fields!(SyncSet::<TcpOutputGroup>::new();
        "compressed" => compressed,
        "disabled" => disabled,
        "drop_events_on_queue_full" => drop_events_on_queue_full,
        "heartbeat_frequency" => heartbeat_frequency,
        "max_queue_size" => max_queue_size,
        "method" => method,
        "send_cooked_data" => send_cooked_data,
    )
    .list("servers", |c| &c.servers, |c| &mut c.servers)
    .write_only("token", |c| &c.token, |c| &mut c.token);

    EntityResource::new("splunk_outputs_tcp_group", Scope::Namespaced, block, content)
}

pub(super) fn tcp_server() -> EntityResource<TcpOutputServer> {
    let block = Block::new("A forwarding target")
        .attribute(
            "name",
            Attribute::string("Receiver as <host>:<port>")
                .required()
                .force_new(),
        )
        .attribute(
            "method",
            Attribute::string("tcpout or clone").optional_computed(),
        )
        .attribute(
            "ssl_alt_name_to_check",
            Attribute::string("Alternate name expected in the receiver certificate")
                .optional_computed(),
        )
        .attribute(
            "ssl_cert_path",
            Attribute::string("Client certificate path").optional_computed(),
        )
        .attribute(
            "ssl_cipher",
            Attribute::string("Allowed SSL ciphers").optional_computed(),
        )
        .attribute(
            "ssl_common_name_to_check",
            Attribute::string("Common name expected in the receiver certificate")
                .optional_computed(),
        )
        .attribute(
            "ssl_password",
            Attribute::string("Password of the client certificate")
                .optional()
                .sensitive(),
        )
        .attribute(
            "ssl_root_ca_path",
            Attribute::string("Root CA certificate path").optional_computed(),
        )
        .attribute(
            "ssl_verify_server_cert",
            Attribute::bool("Verify the receiver certificate").optional_computed(),
        )
        .attribute(
            "disabled",
            Attribute::bool("Whether the server is disabled").optional_computed(),
        );

    let content = fields!(SyncSet::<TcpOutputServer>::new();
        "method" => method,
        "ssl_alt_name_to_check" => ssl_alt_name_to_check,
        "ssl_cert_path" => ssl_cert_path,
        "ssl_cipher" => ssl_cipher,
        "ssl_common_name_to_check" => ssl_common_name_to_check,
        "ssl_root_ca_path" => ssl_root_ca_path,
        "ssl_verify_server_cert" => ssl_verify_server_cert,
        "disabled" => disabled,
    )
    .write_only("ssl_password", |c| &c.ssl_password, |c| &mut c.ssl_password);

    EntityResource::new("splunk_outputs_tcp_server", Scope::Namespaced, block, content)
}
