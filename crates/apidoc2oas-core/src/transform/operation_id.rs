use heck::ToPascalCase;

use crate::config::NamingConfig;
use crate::document::HttpMethod;

use super::path_normalizer::{NormalizedPath, pascal_case_segment};

/// Derives readable PascalCase operation identifiers.
///
/// Identifiers produced here are candidates; uniqueness is enforced by
/// [`OperationIdLedger`](super::ledger::OperationIdLedger).
#[derive(Debug, Clone)]
pub struct OperationIdSynthesizer {
    /// Lowercased generic vocabulary.
    generic_names: Vec<String>,
    default_group: String,
    min_specific_length: usize,
}

impl OperationIdSynthesizer {
    pub fn new(naming: &NamingConfig) -> Self {
        Self {
            generic_names: naming
                .generic_names
                .iter()
                .map(|n| n.to_lowercase())
                .filter(|n| !n.is_empty())
                .collect(),
            default_group: naming.default_group.clone(),
            min_specific_length: naming.min_specific_length,
        }
    }

    /// Build the candidate identifier for one endpoint.
    pub fn synthesize(
        &self,
        method: HttpMethod,
        path: &NormalizedPath,
        name: Option<&str>,
        group: Option<&str>,
    ) -> String {
        let segments = path.segments();

        let Some(name) = name.filter(|n| !n.trim().is_empty()) else {
            return route_to_id(method, &segments);
        };

        let clean = clean_name(name);
        if self.is_generic(&clean) {
            return self.contextual_id(&clean, &segments, group);
        }

        if segments.len() > 2 {
            let tail: String = segments[segments.len() - 2..]
                .iter()
                .map(|s| pascal_case_segment(s))
                .collect();
            format!("{tail}{clean}")
        } else {
            clean
        }
    }

    /// Whether a cleaned name is too common or too short to identify an endpoint.
    pub fn is_generic(&self, clean_name: &str) -> bool {
        if clean_name.chars().count() < self.min_specific_length {
            return true;
        }
        let lowered = clean_name.to_lowercase();
        self.generic_names.iter().any(|g| lowered.contains(g.as_str()))
    }

    /// Group prefix + every path segment + the declared name.
    fn contextual_id(&self, clean: &str, segments: &[&str], group: Option<&str>) -> String {
        let mut id = String::new();
        if let Some(group) = group.filter(|g| !g.trim().is_empty() && *g != self.default_group) {
            id.push_str(&pascal_case_segment(group));
        }
        for segment in segments {
            id.push_str(&pascal_case_segment(segment));
        }
        id.push_str(clean);
        capitalize_first(&id)
    }
}

/// Method + every path segment, e.g. `GET /company/stats` → `GetCompanyStats`.
fn route_to_id(method: HttpMethod, segments: &[&str]) -> String {
    let mut id = method.as_str().to_pascal_case();
    for segment in segments {
        id.push_str(&pascal_case_segment(segment));
    }
    id
}

/// Keep only alphanumeric characters.
pub fn clean_name(name: &str) -> String {
    name.chars().filter(|c| c.is_alphanumeric()).collect()
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
