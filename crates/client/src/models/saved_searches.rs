//! Saved searches and alerts (`saved/searches`).
//!
//! Splunk uses dotted parameter names (`dispatch.earliest_time`,
//! `action.email.to`) both in form bodies and in JSON content, so the fields
//! carry those names directly.

use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::explicit::Explicit;
use crate::serde_helpers::option_vec_from_string_or_seq;
use crate::values;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SavedSearch {
    pub search: Explicit<String>,
    pub description: Explicit<String>,
    pub disabled: Explicit<bool>,
    pub is_scheduled: Explicit<bool>,
    pub is_visible: Explicit<bool>,
    pub cron_schedule: Explicit<String>,
    pub schedule_window: Explicit<String>,
    pub schedule_priority: Explicit<String>,
    pub realtime_schedule: Explicit<bool>,

    /// Enabled alert actions, e.g. `email,webhook`. `None` is not sent;
    /// an empty list clears them.
    #[serde(
        serialize_with = "values::comma_separated::serialize",
        deserialize_with = "option_vec_from_string_or_seq"
    )]
    pub actions: Option<Vec<String>>,

    pub alert_type: Explicit<String>,
    pub alert_comparator: Explicit<String>,
    pub alert_threshold: Explicit<String>,
    pub alert_condition: Explicit<String>,
    #[serde(rename = "alert.digest_mode")]
    pub alert_digest_mode: Explicit<bool>,
    #[serde(rename = "alert.expires")]
    pub alert_expires: Explicit<String>,
    #[serde(rename = "alert.severity")]
    pub alert_severity: Explicit<i64>,
    #[serde(rename = "alert.suppress")]
    pub alert_suppress: Explicit<bool>,
    #[serde(rename = "alert.suppress.fields")]
    pub alert_suppress_fields: Explicit<String>,
    #[serde(rename = "alert.suppress.period")]
    pub alert_suppress_period: Explicit<String>,
    #[serde(rename = "alert.track")]
    pub alert_track: Explicit<bool>,

    #[serde(rename = "action.email.to")]
    pub action_email_to: Explicit<String>,
    #[serde(rename = "action.email.subject")]
    pub action_email_subject: Explicit<String>,
    #[serde(rename = "action.email.format")]
    pub action_email_format: Explicit<String>,
    #[serde(rename = "action.email.sendresults")]
    pub action_email_send_results: Explicit<bool>,
    #[serde(rename = "action.email.inline")]
    pub action_email_inline: Explicit<bool>,
    #[serde(rename = "action.webhook.param.url")]
    pub action_webhook_url: Explicit<String>,

    #[serde(rename = "dispatch.earliest_time")]
    pub dispatch_earliest_time: Explicit<String>,
    #[serde(rename = "dispatch.latest_time")]
    pub dispatch_latest_time: Explicit<String>,
    #[serde(rename = "dispatch.index_earliest")]
    pub dispatch_index_earliest: Explicit<String>,
    #[serde(rename = "dispatch.index_latest")]
    pub dispatch_index_latest: Explicit<String>,
    #[serde(rename = "dispatch.ttl")]
    pub dispatch_ttl: Explicit<String>,

    #[serde(rename = "request.ui_dispatch_app")]
    pub request_ui_dispatch_app: Explicit<String>,
    #[serde(rename = "request.ui_dispatch_view")]
    pub request_ui_dispatch_view: Explicit<String>,

    #[serde(rename = "next_scheduled_time", skip_serializing)]
    pub next_scheduled_time: Explicit<String>,
}

impl Entity for SavedSearch {
    const KIND: &'static str = "saved search";

    fn collection_path(_name: &str) -> String {
        "saved/searches".to_string()
    }
}
