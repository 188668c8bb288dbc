//! Field markers understood by the values encoder.
//!
//! Each marker wraps the field in a newtype struct whose name the encoder
//! recognizes. Other serializers (such as `serde_json`) see a transparent
//! newtype, and deserialization is untouched.

pub(super) const FILL_EMPTY: &str = "$values::fill_empty";
pub(super) const COMMA_SEPARATED: &str = "$values::comma_separated";
pub(super) const CREATE_ONLY: &str = "$values::create_only";
pub(super) const UPDATE_ONLY: &str = "$values::update_only";

macro_rules! marker {
    ($(#[$doc:meta])* $module:ident => $name:ident) => {
        $(#[$doc])*
        pub mod $module {
            use serde::{Deserialize, Deserializer, Serialize, Serializer};

            pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
            where
                T: Serialize + ?Sized,
                S: Serializer,
            {
                serializer.serialize_newtype_struct(super::$name, value)
            }

            pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
            where
                T: Deserialize<'de>,
                D: Deserializer<'de>,
            {
                T::deserialize(deserializer)
            }
        }
    };
}

marker! {
    /// Emit `key=` for an empty sequence so Splunk clears the setting.
    fill_empty => FILL_EMPTY
}

marker! {
    /// Join a sequence into a single comma-separated value.
    comma_separated => COMMA_SEPARATED
}

marker! {
    /// Send the field on create only; it is immutable afterwards.
    create_only => CREATE_ONLY
}

marker! {
    /// Send the field on update only.
    update_only => UPDATE_ONLY
}
