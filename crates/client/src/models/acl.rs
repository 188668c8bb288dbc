//! Object permissions.

use serde::{Deserialize, Serialize};

use crate::serde_helpers::vec_from_string_or_seq;
use crate::values;

/// Sharing level of a knowledge object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sharing {
    User,
    #[default]
    App,
    Global,
    System,
}

impl Sharing {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::App => "app",
            Self::Global => "global",
            Self::System => "system",
        }
    }
}

impl std::str::FromStr for Sharing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "app" => Ok(Self::App),
            "global" => Ok(Self::Global),
            "system" => Ok(Self::System),
            other => Err(format!(
                "invalid sharing '{other}', expected one of user, app, global, system"
            )),
        }
    }
}

/// Role lists allowed to read and write an object.
///
/// Sent as `perms.read=a,b` and `perms.write=c`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Perms {
    #[serde(
        serialize_with = "values::comma_separated::serialize",
        deserialize_with = "vec_from_string_or_seq"
    )]
    pub read: Vec<String>,
    #[serde(
        serialize_with = "values::comma_separated::serialize",
        deserialize_with = "vec_from_string_or_seq"
    )]
    pub write: Vec<String>,
}

/// ACL as returned in every entry and accepted by `<entry>/acl`.
///
/// `app` is where the object lives; it is part of the URL, not the body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Acl {
    #[serde(skip_serializing)]
    pub app: String,
    pub owner: String,
    pub sharing: Sharing,
    pub perms: Option<Perms>,
}
