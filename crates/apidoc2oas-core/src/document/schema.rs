use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The canonical schema kinds every declared type is coerced into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaKind {
    String,
    Integer,
    Boolean,
    Array,
    Object,
}

/// A JSON Schema object, restricted to what the converter emits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    #[serde(rename = "type")]
    pub kind: SchemaKind,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, Schema>,

    #[serde(
        rename = "additionalProperties",
        skip_serializing_if = "Option::is_none"
    )]
    pub additional_properties: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
}

impl Schema {
    pub fn of(kind: SchemaKind) -> Self {
        Self {
            kind,
            description: None,
            properties: IndexMap::new(),
            additional_properties: None,
            items: None,
        }
    }

    pub fn string() -> Self {
        Self::of(SchemaKind::String)
    }

    /// An array of strings.
    pub fn string_array() -> Self {
        Self {
            items: Some(Box::new(Self::string())),
            ..Self::of(SchemaKind::Array)
        }
    }

    /// An object schema with the given properties.
    pub fn object(properties: IndexMap<String, Schema>) -> Self {
        Self {
            properties,
            ..Self::of(SchemaKind::Object)
        }
    }

    /// An object schema that accepts any properties.
    pub fn open_object() -> Self {
        Self {
            additional_properties: Some(true),
            ..Self::of(SchemaKind::Object)
        }
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }
}
