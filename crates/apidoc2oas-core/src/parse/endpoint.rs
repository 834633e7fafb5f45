use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::ConvertError;

/// The parsed apiDoc payload: an ordered list of endpoint records.
#[derive(Debug, Clone, Default)]
pub struct ApiDocDocument {
    pub records: Vec<EndpointRecord>,
}

impl ApiDocDocument {
    /// Extract the `api` list from a parsed payload.
    ///
    /// Fails when the list is missing. Entries that are not objects are
    /// skipped with a warning.
    pub fn from_value(document: &Value) -> Result<Self, ConvertError> {
        let entries = document
            .get("api")
            .and_then(Value::as_array)
            .ok_or(ConvertError::MissingEndpointList)?;

        let records = entries
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| {
                match EndpointRecord::deserialize(entry) {
                    Ok(record) => Some(record),
                    Err(e) => {
                        warn!("skipping unreadable endpoint record #{index}: {e}");
                        None
                    }
                }
            })
            .collect();

        Ok(Self { records })
    }
}

/// Read a value of any shape, keeping the default when it has the wrong type.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_else(|e| {
        debug!("ignoring mistyped record value: {e}");
        T::default()
    }))
}

/// One documented HTTP endpoint as emitted by apiDoc.
///
/// Scalars of the wrong type read as absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EndpointRecord {
    #[serde(rename = "type", alias = "method", deserialize_with = "lenient")]
    pub method: String,
    #[serde(deserialize_with = "lenient")]
    pub url: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub group: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub deprecated: Option<Deprecated>,
    pub parameter: Option<Value>,
    pub header: Option<Value>,
    pub success: Option<Value>,
    pub error: Option<Value>,
    /// Top-level `@apiQuery` list written by newer apiDoc releases.
    pub query: Option<Value>,
    /// Top-level `@apiBody` list written by newer apiDoc releases.
    pub body: Option<Value>,
    #[serde(rename = "isPublic", deserialize_with = "lenient")]
    pub is_public: bool,
}

impl EndpointRecord {
    /// Declared fields of `section`, probing its label aliases in order.
    ///
    /// Query and body fields fall back to the top-level `query`/`body`
    /// lists. Missing or malformed sections yield no fields.
    pub fn fields(&self, section: FieldSection) -> Vec<Field> {
        let container = match section {
            FieldSection::Query | FieldSection::Body => self.parameter.as_ref(),
            FieldSection::Header => self.header.as_ref(),
            FieldSection::Success => self.success.as_ref(),
            FieldSection::Error => self.error.as_ref(),
        };

        if let Some(groups) = container.and_then(|c| c.get("fields")) {
            for label in section.aliases() {
                let found = groups.get(*label).and_then(|list| read_fields(list, label));
                if let Some(fields) = found {
                    return fields;
                }
            }
        }

        let fallback = match section {
            FieldSection::Query => self.query.as_ref().map(|list| (list, "query")),
            FieldSection::Body => self.body.as_ref().map(|list| (list, "body")),
            _ => None,
        };
        fallback
            .and_then(|(list, label)| read_fields(list, label))
            .unwrap_or_default()
    }

    /// Whether any field is declared under `section`.
    pub fn has_fields(&self, section: FieldSection) -> bool {
        !self.fields(section).is_empty()
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecated
            .as_ref()
            .is_some_and(Deprecated::is_deprecated)
    }

    pub fn deprecation_note(&self) -> Option<&str> {
        self.deprecated.as_ref().and_then(Deprecated::note)
    }
}

/// Fields of one group, or `None` when the group is not a list.
fn read_fields(list: &Value, label: &str) -> Option<Vec<Field>> {
    let Some(items) = list.as_array() else {
        debug!("field group {label:?} is not a list, ignoring");
        return None;
    };
    Some(
        items
            .iter()
            .filter_map(|item| match Field::deserialize(item) {
                Ok(field) => Some(field),
                Err(e) => {
                    debug!("ignoring malformed field in group {label:?}: {e}");
                    None
                }
            })
            .collect(),
    )
}

/// A declared field (parameter, header, success or error property).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Field {
    pub field: String,

    #[serde(rename = "type", default)]
    pub type_name: Option<String>,

    #[serde(default)]
    pub optional: bool,

    #[serde(default)]
    pub description: Option<String>,
}

impl Field {
    pub fn required(&self) -> bool {
        !self.optional
    }
}

/// apiDoc emits `deprecated` either as a flag or as `{ "content": note }`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Deprecated {
    Flag(bool),
    Note {
        #[serde(default, deserialize_with = "lenient")]
        content: Option<String>,
    },
}

impl Deprecated {
    pub fn is_deprecated(&self) -> bool {
        match self {
            Deprecated::Flag(flag) => *flag,
            Deprecated::Note { .. } => true,
        }
    }

    pub fn note(&self) -> Option<&str> {
        match self {
            Deprecated::Note { content } => content.as_deref().filter(|c| !c.trim().is_empty()),
            Deprecated::Flag(_) => None,
        }
    }
}

/// The field groups an endpoint record can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSection {
    Query,
    Body,
    Header,
    Success,
    Error,
}

impl FieldSection {
    /// Accepted group labels, highest priority first.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            FieldSection::Query => &["Parameter", "Query"],
            FieldSection::Body => &["Body", "Request Body"],
            FieldSection::Header => &["Header"],
            FieldSection::Success => &["Success 200", "Success"],
            FieldSection::Error => &["Error 4xx", "Error"],
        }
    }
}
