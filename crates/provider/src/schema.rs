//! Terraform-shaped schema declarations for the provider and its resources.
//!
//! Responsibilities:
//! - Describe attribute types, constraints and nested blocks.
//! - Serialize schemas into the JSON layout printed by the `schema` command.
//! - Validate resource data against a schema before any API call is made.
//!
//! Does NOT handle:
//! - Plan diffing or `force_new` replacement (the plugin host owns planning).
//!
//! Invariants:
//! - Attribute and block names are unique within a block; maps are ordered so
//!   serialized output is stable.
//! - A `null` attribute value is equivalent to an absent one.

use std::collections::BTreeMap;
use std::fmt::Display;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::resource_data::ResourceData;

/// The value type of an attribute.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum AttributeType {
    String,
    /// Integer or float.
    Number,
    Bool,
    List(Box<AttributeType>),
    Map(Box<AttributeType>),
}

impl AttributeType {
    pub fn list_of(element: AttributeType) -> Self {
        Self::List(Box::new(element))
    }

    pub fn map_of(element: AttributeType) -> Self {
        Self::Map(Box::new(element))
    }

    fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (_, Value::Null) => true,
            (AttributeType::String, Value::String(_)) => true,
            (AttributeType::Number, Value::Number(_)) => true,
            (AttributeType::Bool, Value::Bool(_)) => true,
            (AttributeType::List(element), Value::Array(items)) => {
                items.iter().all(|item| element.accepts(item))
            }
            (AttributeType::Map(element), Value::Object(entries)) => {
                entries.values().all(|item| element.accepts(item))
            }
            _ => false,
        }
    }
}

impl Serialize for AttributeType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            AttributeType::String => serializer.serialize_str("string"),
            AttributeType::Number => serializer.serialize_str("number"),
            AttributeType::Bool => serializer.serialize_str("bool"),
            AttributeType::List(element) => ("list", element).serialize(serializer),
            AttributeType::Map(element) => ("map", element).serialize(serializer),
        }
    }
}

impl Display for AttributeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&serde_json::to_string(self).map_err(|_| std::fmt::Error)?)
    }
}

/// Who may supply an attribute's value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeConstraint {
    /// Output only; set by the provider from Splunk.
    Computed,
    Optional,
    /// May be omitted, in which case Splunk's value is recorded.
    OptionalComputed,
    Required,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct Attribute {
    #[serde(rename = "type")]
    pub attr_type: AttributeType,
    pub description: String,
    pub constraint: AttributeConstraint,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub sensitive: bool,
    /// Changing the value replaces the resource.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub force_new: bool,
}

impl Attribute {
    pub fn new(attr_type: AttributeType, description: impl Into<String>) -> Self {
        Self {
            attr_type,
            description: description.into(),
            constraint: AttributeConstraint::Optional,
            sensitive: false,
            force_new: false,
        }
    }

    pub fn string(description: impl Into<String>) -> Self {
        Self::new(AttributeType::String, description)
    }

    pub fn number(description: impl Into<String>) -> Self {
        Self::new(AttributeType::Number, description)
    }

    pub fn bool(description: impl Into<String>) -> Self {
        Self::new(AttributeType::Bool, description)
    }

    pub fn string_list(description: impl Into<String>) -> Self {
        Self::new(AttributeType::list_of(AttributeType::String), description)
    }

    pub fn string_map(description: impl Into<String>) -> Self {
        Self::new(AttributeType::map_of(AttributeType::String), description)
    }

    pub fn required(mut self) -> Self {
        self.constraint = AttributeConstraint::Required;
        self
    }

    pub fn optional(mut self) -> Self {
        self.constraint = AttributeConstraint::Optional;
        self
    }

    pub fn computed(mut self) -> Self {
        self.constraint = AttributeConstraint::Computed;
        self
    }

    pub fn optional_computed(mut self) -> Self {
        self.constraint = AttributeConstraint::OptionalComputed;
        self
    }

    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    pub fn force_new(mut self) -> Self {
        self.force_new = true;
        self
    }
}

/// How many times a nested block may appear.
///
/// Both forms are carried in resource data as a list of objects.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
#[serde(tag = "nesting", content = "block", rename_all = "snake_case")]
pub enum NestedBlock {
    /// Exactly once.
    Single(Block),
    /// At most once.
    Optional(Block),
}

impl NestedBlock {
    fn block(&self) -> &Block {
        match self {
            NestedBlock::Single(block) | NestedBlock::Optional(block) => block,
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize)]
pub struct Block {
    pub description: String,
    pub attributes: BTreeMap<String, Attribute>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub blocks: BTreeMap<String, NestedBlock>,
}

impl Block {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Self::default()
        }
    }

    pub fn attribute(mut self, name: &str, attribute: Attribute) -> Self {
        self.attributes.insert(name.to_string(), attribute);
        self
    }

    pub fn block(mut self, name: &str, block: NestedBlock) -> Self {
        self.blocks.insert(name.to_string(), block);
        self
    }

    fn validate(&self, path: &str, values: &Map<String, Value>, problems: &mut Vec<String>) {
        for (name, value) in values {
            let qualified = qualify(path, name);
            if let Some(attribute) = self.attributes.get(name) {
                if !attribute.attr_type.accepts(value) {
                    problems.push(format!(
                        "{qualified}: expected {}, got {}",
                        attribute.attr_type,
                        kind_of(value)
                    ));
                }
            } else if let Some(nested) = self.blocks.get(name) {
                validate_nested(&qualified, nested, value, problems);
            } else {
                problems.push(format!("{qualified}: unsupported attribute"));
            }
        }

        for (name, attribute) in &self.attributes {
            if attribute.constraint == AttributeConstraint::Required
                && values.get(name).is_none_or(Value::is_null)
            {
                problems.push(format!("{}: required attribute is missing", qualify(path, name)));
            }
        }

        for (name, nested) in &self.blocks {
            if matches!(nested, NestedBlock::Single(_))
                && values.get(name).is_none_or(Value::is_null)
            {
                problems.push(format!("{}: required block is missing", qualify(path, name)));
            }
        }
    }
}

fn validate_nested(path: &str, nested: &NestedBlock, value: &Value, problems: &mut Vec<String>) {
    let items = match value {
        Value::Null => return,
        Value::Array(items) => items,
        other => {
            problems.push(format!("{path}: expected a block, got {}", kind_of(other)));
            return;
        }
    };

    match (nested, items.len()) {
        (NestedBlock::Single(_), 1) | (NestedBlock::Optional(_), 0 | 1) => {}
        (_, count) => {
            problems.push(format!("{path}: expected at most one block, got {count}"));
            return;
        }
    }

    for item in items {
        match item {
            Value::Object(values) => nested.block().validate(path, values, problems),
            other => problems.push(format!("{path}: expected a block, got {}", kind_of(other))),
        }
    }
}

fn qualify(path: &str, name: &str) -> String {
    if path.is_empty() {
        name.to_string()
    } else {
        format!("{path}.{name}")
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "map",
    }
}

/// A versioned resource or provider schema.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct Schema {
    pub version: i64,
    pub block: Block,
}

impl Schema {
    pub fn new(block: Block) -> Self {
        Self { version: 0, block }
    }

    /// Check resource data against the schema, collecting every problem.
    pub fn validate(&self, data: &ResourceData) -> Result<(), Vec<String>> {
        let mut problems = Vec::new();
        self.block.validate("", data.attributes(), &mut problems);
        if problems.is_empty() {
            Ok(())
        } else {
            Err(problems)
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.block.attributes.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn schema() -> Schema {
        Schema::new(
            Block::new("test")
                .attribute("name", Attribute::string("name").required().force_new())
                .attribute("count", Attribute::number("count").optional())
                .attribute("roles", Attribute::string_list("roles").optional_computed())
                .attribute("password", Attribute::string("password").sensitive())
                .block(
                    "acl",
                    NestedBlock::Optional(
                        Block::new("acl")
                            .attribute("owner", Attribute::string("owner").optional_computed()),
                    ),
                ),
        )
    }

    fn data(value: Value) -> ResourceData {
        match value {
            Value::Object(map) => ResourceData::from_config(map),
            _ => unreachable!("test data must be an object"),
        }
    }

    #[test]
    fn test_valid_data_passes() {
        let data = data(json!({
            "name": "web",
            "count": 3,
            "roles": ["admin"],
            "acl": [{"owner": "nobody"}],
        }));
        assert_eq!(schema().validate(&data), Ok(()));
    }

    #[test]
    fn test_missing_required_attribute() {
        let problems = schema().validate(&data(json!({"count": 1}))).unwrap_err();
        assert_eq!(problems, vec!["name: required attribute is missing"]);
    }

    #[test]
    fn test_null_counts_as_missing() {
        let problems = schema().validate(&data(json!({"name": null}))).unwrap_err();
        assert_eq!(problems.len(), 1);
    }

    #[test]
    fn test_type_mismatch_and_unknown_attribute() {
        let problems = schema()
            .validate(&data(json!({"name": "web", "count": "3", "colour": "blue"})))
            .unwrap_err();
        assert!(problems.contains(&"count: expected \"number\", got string".to_string()));
        assert!(problems.contains(&"colour: unsupported attribute".to_string()));
    }

    #[test]
    fn test_nested_block_is_validated() {
        let problems = schema()
            .validate(&data(json!({"name": "web", "acl": [{"owner": 1}, {"owner": "x"}]})))
            .unwrap_err();
        assert_eq!(problems, vec!["acl: expected at most one block, got 2"]);

        let problems = schema()
            .validate(&data(json!({"name": "web", "acl": [{"group": "x"}]})))
            .unwrap_err();
        assert_eq!(problems, vec!["acl.group: unsupported attribute"]);
    }

    #[test]
    fn test_list_element_types_are_checked() {
        let problems = schema()
            .validate(&data(json!({"name": "web", "roles": ["admin", 1]})))
            .unwrap_err();
        assert_eq!(problems.len(), 1);
    }

    #[test]
    fn test_serialized_layout() {
        let value = serde_json::to_value(schema()).unwrap();
        assert_eq!(value["block"]["attributes"]["roles"]["type"], json!(["list", "string"]));
        assert_eq!(value["block"]["attributes"]["name"]["force_new"], json!(true));
        assert_eq!(value["block"]["attributes"]["password"]["sensitive"], json!(true));
        assert!(value["block"]["attributes"]["count"].get("sensitive").is_none());
        assert_eq!(value["block"]["blocks"]["acl"]["nesting"], json!("optional"));
    }

    #[test]
    fn test_attribute_type_display() {
        assert_eq!(
            AttributeType::map_of(AttributeType::list_of(AttributeType::Bool)).to_string(),
            r#"["map",["list","bool"]]"#
        );
    }
}
