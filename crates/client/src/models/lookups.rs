//! CSV lookup table files managed through the `lookup_edit` endpoints.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::serde_helpers::string_from_json;
use crate::values;

/// Rows of a lookup table; the first row is the header.
///
/// Splunk takes the table as a JSON document inside a single form field, so
/// it serializes to a JSON string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupContents(pub Vec<Vec<String>>);

impl LookupContents {
    pub fn rows(&self) -> &[Vec<String>] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for LookupContents {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let json = serde_json::to_string(&self.0).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&json)
    }
}

impl<'de> Deserialize<'de> for LookupContents {
    /// Accepts either the row array or the same array encoded as a string.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = match Value::deserialize(deserializer)? {
            Value::String(encoded) => serde_json::from_str(&encoded).map_err(D::Error::custom)?,
            Value::Null => return Ok(Self::default()),
            other => other,
        };
        let Value::Array(rows) = rows else {
            return Err(D::Error::custom("expected a list of rows"));
        };

        rows.iter()
            .map(|row| match row {
                Value::Array(cells) => Ok(cells
                    .iter()
                    .map(|cell| string_from_json(cell).unwrap_or_default())
                    .collect::<Vec<String>>()),
                _ => Err(D::Error::custom("expected each row to be a list")),
            })
            .collect::<Result<Vec<_>, D::Error>>()
            .map(Self)
    }
}

/// A lookup file upload: `POST services/data/lookup_edit/lookup_contents`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LookupTableFile {
    #[serde(rename = "namespace")]
    pub app: String,
    #[serde(rename = "lookup_file")]
    pub file_name: String,
    #[serde(skip_serializing_if = "values::is_zero")]
    pub owner: String,
    pub contents: LookupContents,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> LookupContents {
        LookupContents(vec![
            vec!["status".into(), "description".into()],
            vec!["404".into(), "Not Found".into()],
        ])
    }

    #[test]
    fn test_contents_encode_as_json_string() {
        let file = LookupTableFile {
            app: "search".into(),
            file_name: "http_status.csv".into(),
            owner: String::new(),
            contents: rows(),
        };

        let encoded = values::encode(&file).unwrap();
        assert_eq!(encoded.get("namespace"), Some("search"));
        assert_eq!(encoded.get("lookup_file"), Some("http_status.csv"));
        assert!(!encoded.contains_key("owner"));
        assert_eq!(
            encoded.get("contents"),
            Some(r#"[["status","description"],["404","Not Found"]]"#)
        );
    }

    #[test]
    fn test_contents_decode_from_rows_or_string() {
        let from_rows: LookupContents =
            serde_json::from_str(r#"[["status","description"],[404,"Not Found"]]"#).unwrap();
        let from_string: LookupContents = serde_json::from_str(
            r#""[[\"status\",\"description\"],[\"404\",\"Not Found\"]]""#,
        )
        .unwrap();

        assert_eq!(from_rows, rows());
        assert_eq!(from_string, rows());
    }

    #[test]
    fn test_contents_reject_flat_list() {
        assert!(serde_json::from_str::<LookupContents>(r#"["a","b"]"#).is_err());
    }
}
