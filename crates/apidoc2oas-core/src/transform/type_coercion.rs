use crate::document::{Schema, SchemaKind};

/// Substrings matched against a lowercased type token, in priority order.
const TYPE_TABLE: &[(&str, SchemaKind)] = &[
    ("string", SchemaKind::String),
    ("number", SchemaKind::Integer),
    ("integer", SchemaKind::Integer),
    ("int", SchemaKind::Integer),
    ("boolean", SchemaKind::Boolean),
    ("bool", SchemaKind::Boolean),
    ("array", SchemaKind::Array),
    ("object", SchemaKind::Object),
];

/// Map a free-text apiDoc type token to a canonical schema kind.
///
/// The first table entry contained in the token wins; anything unmatched
/// becomes a string.
pub fn coerce_kind(token: Option<&str>) -> SchemaKind {
    let Some(token) = token else {
        return SchemaKind::String;
    };
    let lowered = token.to_lowercase();
    TYPE_TABLE
        .iter()
        .find(|(key, _)| lowered.contains(key))
        .map(|(_, kind)| *kind)
        .unwrap_or(SchemaKind::String)
}

/// Build the schema for a type token. Arrays always carry string items.
pub fn coerce_type(token: Option<&str>) -> Schema {
    match coerce_kind(token) {
        SchemaKind::Array => Schema::string_array(),
        kind => Schema::of(kind),
    }
}
