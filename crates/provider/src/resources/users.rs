//! `splunk_authentication_users`

use splunk_client::models::User;

use super::fields;
use crate::resource::{EntityResource, Scope};
use crate::schema::{Attribute, Block};
use crate::sync::SyncSet;

pub(super) fn resource() -> EntityResource<User> {
    let block = Block::new("A Splunk user")
        .attribute(
            "email",
            Attribute::string("Email address").optional_computed(),
        )
        .attribute(
            "force_change_pass",
            Attribute::bool("Require a password change at next login").optional(),
        )
        .attribute(
            "password",
            Attribute::string("Login password").optional().sensitive(),
        )
        .attribute("realname", Attribute::string("Full name").optional_computed())
        .attribute(
            "roles",
            Attribute::string_list("Roles assigned to the user").optional_computed(),
        )
        .attribute(
            "tz",
            Attribute::string("Time zone used when displaying dates").optional_computed(),
        )
        .attribute(
            "default_app",
            Attribute::string("App shown after login").optional_computed(),
        )
        .attribute(
            "restart_background_jobs",
            Attribute::bool("Restart interrupted background searches").optional_computed(),
        )
        .attribute(
            "type",
            Attribute::string("Authentication system owning the user").computed(),
        );

    let content = fields!(SyncSet::<User>::new();
        "email" => email,
        "realname" => realname,
        "tz" => tz,
        "default_app" => default_app,
        "restart_background_jobs" => restart_background_jobs,
    )
    .list("roles", |c| &c.roles, |c| &mut c.roles)
    .write_only("password", |c| &c.password, |c| &mut c.password)
    .write_only(
        "force_change_pass",
        |c| &c.force_change_pass,
        |c| &mut c.force_change_pass,
    )
    .computed("type", |c| &c.user_type, |c| &mut c.user_type);

    EntityResource::new("splunk_authentication_users", Scope::Global, block, content)
}
