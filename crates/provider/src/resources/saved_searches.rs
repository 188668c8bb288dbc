//! `splunk_saved_searches`

use splunk_client::models::SavedSearch;

use super::fields;
use crate::resource::{EntityResource, Scope};
use crate::schema::{Attribute, Block};
use crate::sync::SyncSet;

/// `(attribute, description)` for every optional string setting.
const STRING_SETTINGS: &[(&str, &str)] = &[
    ("description", "Description of the search"),
    ("cron_schedule", "Cron expression scheduling the search"),
    ("schedule_window", "Minutes the scheduler may delay the run, or auto"),
    ("schedule_priority", "default, higher or highest"),
    ("alert_type", "always, custom, or a number of events/hosts/sources"),
    ("alert_comparator", "Comparison applied to alert_threshold"),
    ("alert_threshold", "Value compared against the alert type"),
    ("alert_condition", "Search whose results trigger the alert"),
    ("alert_expires", "Lifetime of triggered alerts, e.g. 24h"),
    ("alert_suppress_fields", "Fields whose values suppress repeated alerts"),
    ("alert_suppress_period", "Suppression period, e.g. 1h"),
    ("action_email_to", "Recipients of the email action"),
    ("action_email_subject", "Subject of the email action"),
    ("action_email_format", "Format of results in emails: csv, html, raw, table"),
    ("action_webhook_url", "URL the webhook action posts to"),
    ("dispatch_earliest_time", "Earliest time of the search window"),
    ("dispatch_latest_time", "Latest time of the search window"),
    ("dispatch_index_earliest", "Earliest index time of the search window"),
    ("dispatch_index_latest", "Latest index time of the search window"),
    ("dispatch_ttl", "Lifetime of search artifacts"),
    ("request_ui_dispatch_app", "App the search opens in"),
    ("request_ui_dispatch_view", "View the search opens in"),
];

const BOOL_SETTINGS: &[(&str, &str)] = &[
    ("disabled", "Whether the search is disabled"),
    ("is_scheduled", "Whether the search runs on a schedule"),
    ("is_visible", "Whether the search is listed in the UI"),
    ("realtime_schedule", "Schedule based on real time rather than data"),
    ("alert_digest_mode", "Trigger one alert per run instead of per result"),
    ("alert_suppress", "Suppress repeated alerts"),
    ("alert_track", "Record triggered alerts"),
    ("action_email_send_results", "Attach results to emails"),
    ("action_email_inline", "Include results in the email body"),
];

pub(super) fn resource() -> EntityResource<SavedSearch> {
    let mut block = Block::new("A saved search, report or alert")
        .attribute("search", Attribute::string("The search query").required())
        .attribute(
            "actions",
            Attribute::string_list("Alert actions to run, e.g. email or webhook")
                .optional_computed(),
        )
        .attribute(
            "alert_severity",
            Attribute::number("Alert severity from 1 (debug) to 6 (fatal)").optional_computed(),
        )
        .attribute(
            "next_scheduled_time",
            Attribute::string("Next time the scheduler runs the search").computed(),
        );
    for (name, description) in STRING_SETTINGS {
        block = block.attribute(name, Attribute::string(*description).optional_computed());
    }
    for (name, description) in BOOL_SETTINGS {
        block = block.attribute(name, Attribute::bool(*description).optional_computed());
    }

    let content = fields!(SyncSet::<SavedSearch>::new();
        "search" => search,
        "description" => description,
        "disabled" => disabled,
        "is_scheduled" => is_scheduled,
        "is_visible" => is_visible,
        "cron_schedule" => cron_schedule,
        "schedule_window" => schedule_window,
        "schedule_priority" => schedule_priority,
        "realtime_schedule" => realtime_schedule,
        "alert_type" => alert_type,
        "alert_comparator" => alert_comparator,
        "alert_threshold" => alert_threshold,
        "alert_condition" => alert_condition,
        "alert_digest_mode" => alert_digest_mode,
        "alert_expires" => alert_expires,
        "alert_severity" => alert_severity,
        "alert_suppress" => alert_suppress,
        "alert_suppress_fields" => alert_suppress_fields,
        "alert_suppress_period" => alert_suppress_period,
        "alert_track" => alert_track,
        "action_email_to" => action_email_to,
        "action_email_subject" => action_email_subject,
        "action_email_format" => action_email_format,
        "action_email_send_results" => action_email_send_results,
        "action_email_inline" => action_email_inline,
        "action_webhook_url" => action_webhook_url,
        "dispatch_earliest_time" => dispatch_earliest_time,
        "dispatch_latest_time" => dispatch_latest_time,
        "dispatch_index_earliest" => dispatch_index_earliest,
        "dispatch_index_latest" => dispatch_index_latest,
        "dispatch_ttl" => dispatch_ttl,
        "request_ui_dispatch_app" => request_ui_dispatch_app,
        "request_ui_dispatch_view" => request_ui_dispatch_view,
    )
    .list("actions", |c| &c.actions, |c| &mut c.actions)
    .computed(
        "next_scheduled_time",
        |c| &c.next_scheduled_time,
        |c| &mut c.next_scheduled_time,
    );

    EntityResource::new("splunk_saved_searches", Scope::Namespaced, block, content)
}

