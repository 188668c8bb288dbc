//! `splunk_indexes`

use splunk_client::models::Index;

use super::fields;
use crate::resource::{EntityResource, Scope};
use crate::schema::{Attribute, Block};
use crate::sync::SyncSet;

pub(super) fn resource() -> EntityResource<Index> {
    let block = Block::new("A Splunk index")
        .attribute(
            "datatype",
            Attribute::string("Index type: event or metric")
                .optional_computed()
                .force_new(),
        )
        .attribute(
            "home_path",
            Attribute::string("Path for hot and warm buckets")
                .optional_computed()
                .force_new(),
        )
        .attribute(
            "cold_path",
            Attribute::string("Path for cold buckets")
                .optional_computed()
                .force_new(),
        )
        .attribute(
            "thawed_path",
            Attribute::string("Path for thawed buckets")
                .optional_computed()
                .force_new(),
        )
        .attribute(
            "bucket_rebuild_memory_hint",
            Attribute::string("Memory hint for bucket rebuilds, e.g. auto or 5MB").optional_computed(),
        )
        .attribute(
            "cold_to_frozen_dir",
            Attribute::string("Archive directory for frozen buckets").optional_computed(),
        )
        .attribute(
            "cold_to_frozen_script",
            Attribute::string("Script run when buckets freeze").optional_computed(),
        )
        .attribute(
            "enable_online_bucket_repair",
            Attribute::bool("Repair buckets in the background").optional_computed(),
        )
        .attribute(
            "frozen_time_period_in_secs",
            Attribute::number("Age at which buckets freeze").optional_computed(),
        )
        .attribute(
            "home_path_max_data_size_mb",
            Attribute::number("Size limit of hot and warm buckets").optional_computed(),
        )
        .attribute(
            "cold_path_max_data_size_mb",
            Attribute::number("Size limit of cold buckets").optional_computed(),
        )
        .attribute(
            "max_data_size",
            Attribute::string("Maximum hot bucket size: auto, auto_high_volume or MB")
                .optional_computed(),
        )
        .attribute(
            "max_hot_buckets",
            Attribute::string("Maximum number of hot buckets").optional_computed(),
        )
        .attribute(
            "max_hot_idle_secs",
            Attribute::number("Seconds a hot bucket may stay idle").optional_computed(),
        )
        .attribute(
            "max_total_data_size_mb",
            Attribute::number("Maximum index size").optional_computed(),
        )
        .attribute(
            "max_warm_db_count",
            Attribute::number("Maximum number of warm buckets").optional_computed(),
        )
        .attribute(
            "rep_factor",
            Attribute::string("Replication: auto or 0").optional_computed(),
        )
        .attribute("current_db_size_mb", Attribute::number("Current size").computed())
        .attribute("total_event_count", Attribute::number("Indexed events").computed())
        .attribute("disabled", Attribute::bool("Whether the index is disabled").computed());

    let content = fields!(SyncSet::<Index>::new();
        "datatype" => datatype,
        "home_path" => home_path,
        "cold_path" => cold_path,
        "thawed_path" => thawed_path,
        "bucket_rebuild_memory_hint" => bucket_rebuild_memory_hint,
        "cold_to_frozen_dir" => cold_to_frozen_dir,
        "cold_to_frozen_script" => cold_to_frozen_script,
        "enable_online_bucket_repair" => enable_online_bucket_repair,
        "frozen_time_period_in_secs" => frozen_time_period_in_secs,
        "home_path_max_data_size_mb" => home_path_max_data_size_mb,
        "cold_path_max_data_size_mb" => cold_path_max_data_size_mb,
        "max_data_size" => max_data_size,
        "max_hot_buckets" => max_hot_buckets,
        "max_hot_idle_secs" => max_hot_idle_secs,
        "max_total_data_size_mb" => max_total_data_size_mb,
        "max_warm_db_count" => max_warm_db_count,
        "rep_factor" => rep_factor,
    )
    .computed("current_db_size_mb", |c| &c.current_db_size_mb, |c| &mut c.current_db_size_mb)
    .computed("total_event_count", |c| &c.total_event_count, |c| &mut c.total_event_count)
    .computed("disabled", |c| &c.disabled, |c| &mut c.disabled);

    EntityResource::new("splunk_indexes", Scope::Namespaced, block, content)
}
