//! `splunk_authorization_roles`

use splunk_client::models::Role;

use super::fields;
use crate::resource::{EntityResource, Scope};
use crate::schema::{Attribute, Block};
use crate::sync::SyncSet;

pub(super) fn resource() -> EntityResource<Role> {
    let block = Block::new("An authorization role")
        .attribute(
            "capabilities",
            Attribute::string_list("Capabilities granted to the role").optional_computed(),
        )
        .attribute(
            "imported_roles",
            Attribute::string_list("Roles whose capabilities are inherited").optional_computed(),
        )
        .attribute(
            "search_indexes_allowed",
            Attribute::string_list("Indexes the role may search").optional_computed(),
        )
        .attribute(
            "search_indexes_default",
            Attribute::string_list("Indexes searched when none is given").optional_computed(),
        )
        .attribute(
            "cumulative_realtime_search_jobs_quota",
            Attribute::number("Real-time search jobs allowed across all users of the role")
                .optional_computed(),
        )
        .attribute(
            "cumulative_search_jobs_quota",
            Attribute::number("Search jobs allowed across all users of the role")
                .optional_computed(),
        )
        .attribute(
            "default_app",
            Attribute::string("App shown after login").optional_computed(),
        )
        .attribute(
            "realtime_search_jobs_quota",
            Attribute::number("Real-time search jobs allowed per user").optional_computed(),
        )
        .attribute(
            "search_disk_quota",
            Attribute::number("Disk space in MB for search artifacts").optional_computed(),
        )
        .attribute(
            "search_filter",
            Attribute::string("Search restricting the events the role sees").optional_computed(),
        )
        .attribute(
            "search_jobs_quota",
            Attribute::number("Search jobs allowed per user").optional_computed(),
        )
        .attribute(
            "search_time_win",
            Attribute::number("Maximum search time range in seconds").optional_computed(),
        );

    let content = fields!(SyncSet::<Role>::new();
        "cumulative_realtime_search_jobs_quota" => cumulative_rt_srch_jobs_quota,
        "cumulative_search_jobs_quota" => cumulative_srch_jobs_quota,
        "default_app" => default_app,
        "realtime_search_jobs_quota" => rt_srch_jobs_quota,
        "search_disk_quota" => srch_disk_quota,
        "search_filter" => srch_filter,
        "search_jobs_quota" => srch_jobs_quota,
        "search_time_win" => srch_time_win,
    )
    .list("capabilities", |c| &c.capabilities, |c| &mut c.capabilities)
    .list("imported_roles", |c| &c.imported_roles, |c| &mut c.imported_roles)
    .list(
        "search_indexes_allowed",
        |c| &c.srch_indexes_allowed,
        |c| &mut c.srch_indexes_allowed,
    )
    .list(
        "search_indexes_default",
        |c| &c.srch_indexes_default,
        |c| &mut c.srch_indexes_default,
    );

    EntityResource::new("splunk_authorization_roles", Scope::Global, block, content)
}
