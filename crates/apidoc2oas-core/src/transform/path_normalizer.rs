use std::sync::LazyLock;

use regex::Regex;

static PATH_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":([A-Za-z_][A-Za-z0-9_]*)").expect("valid path param regex"));

static URL_ORIGIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://[^/]*").expect("valid url origin regex")
});

/// A path rewritten to brace syntax, with its parameter names in URL order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedPath {
    pub path: String,
    pub params: Vec<String>,
}

impl NormalizedPath {
    /// Non-empty `/`-separated segments.
    pub fn segments(&self) -> Vec<&str> {
        self.path.split('/').filter(|s| !s.is_empty()).collect()
    }
}

/// Rewrite `:token` markers into `{token}` and collect the token names.
///
/// Absolute URLs are reduced to their path and any query string is dropped.
pub fn normalize_path(url: &str) -> NormalizedPath {
    let without_origin = URL_ORIGIN.replace(url.trim(), "");
    let raw = without_origin
        .split(['?', '#'])
        .next()
        .unwrap_or_default();

    let params = PATH_PARAM
        .captures_iter(raw)
        .map(|caps| caps[1].to_string())
        .collect();

    let mut path = PATH_PARAM.replace_all(raw, "{$1}").into_owned();
    if !path.starts_with('/') {
        path.insert(0, '/');
    }

    NormalizedPath { path, params }
}

/// PascalCase a path segment, group or token for use in an identifier.
///
/// Every non-alphanumeric character is a word boundary and is dropped; the
/// character after a boundary is uppercased, as is the first character.
/// Other characters keep their case, so `user_id` becomes `UserId` and
/// `userID` becomes `UserID`.
pub fn pascal_case_segment(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    let mut upper_next = true;
    for ch in segment.chars() {
        if ch.is_alphanumeric() {
            if upper_next {
                out.extend(ch.to_uppercase());
            } else {
                out.push(ch);
            }
            upper_next = false;
        } else {
            upper_next = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_become_braces() {
        let p = normalize_path("/user/:id");
        assert_eq!(p.path, "/user/{id}");
        assert_eq!(p.params, vec!["id".to_string()]);
    }

    #[test]
    fn test_multiple_params_keep_order_and_underscores() {
        let p = normalize_path("/org/:org_id/member/:member_id/role");
        assert_eq!(p.path, "/org/{org_id}/member/{member_id}/role");
        assert_eq!(p.params, vec!["org_id".to_string(), "member_id".to_string()]);
    }

    #[test]
    fn test_no_params() {
        let p = normalize_path("/company/stats");
        assert_eq!(p.path, "/company/stats");
        assert!(p.params.is_empty());
        assert_eq!(p.segments(), vec!["company", "stats"]);
    }

    #[test]
    fn test_param_inside_segment() {
        let p = normalize_path("/files/:name.json");
        assert_eq!(p.path, "/files/{name}.json");
        assert_eq!(p.params, vec!["name".to_string()]);
    }

    #[test]
    fn test_absolute_url_and_query_are_dropped() {
        let p = normalize_path("https://api.example.com:8443/v1/items/:item?expand=true");
        assert_eq!(p.path, "/v1/items/{item}");
        assert_eq!(p.params, vec!["item".to_string()]);
    }

    #[test]
    fn test_missing_leading_slash() {
        assert_eq!(normalize_path("status").path, "/status");
        assert_eq!(normalize_path("").path, "/");
    }

    #[test]
    fn test_pascal_case_segment() {
        assert_eq!(pascal_case_segment("company"), "Company");
        assert_eq!(pascal_case_segment("user_id"), "UserId");
        assert_eq!(pascal_case_segment("b_c"), "BC");
        assert_eq!(pascal_case_segment("userID"), "UserID");
        assert_eq!(pascal_case_segment("{org_id}"), "OrgId");
        assert_eq!(pascal_case_segment("access-keys"), "AccessKeys");
        assert_eq!(pascal_case_segment("Billing Admin"), "BillingAdmin");
        assert_eq!(pascal_case_segment(""), "");
    }
}
