use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Name of the bearer-token scheme registered in `components.securitySchemes`.
pub const BEARER_AUTH: &str = "BearerAuth";

/// A security scheme type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SecuritySchemeType {
    Http,
}

/// A security scheme definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityScheme {
    #[serde(rename = "type")]
    pub scheme_type: SecuritySchemeType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
}

impl SecurityScheme {
    pub fn bearer() -> Self {
        Self {
            scheme_type: SecuritySchemeType::Http,
            scheme: Some("bearer".to_string()),
        }
    }
}

/// A security requirement: map of scheme name → required scopes.
pub type SecurityRequirement = IndexMap<String, Vec<String>>;

/// The requirement attached to every non-public operation.
pub fn bearer_requirement() -> SecurityRequirement {
    let mut requirement = SecurityRequirement::new();
    requirement.insert(BEARER_AUTH.to_string(), Vec::new());
    requirement
}
