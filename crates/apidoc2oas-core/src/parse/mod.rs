pub mod endpoint;

use crate::error::ParseError;

/// Parse a raw apiDoc payload from JSON.
pub fn from_json(input: &str) -> Result<serde_json::Value, ParseError> {
    Ok(serde_json::from_str(input)?)
}

/// Parse an apiDoc payload that may be wrapped in a function call,
/// e.g. the `define({ "api": [...] });` form of `api_data.js`.
pub fn from_apidoc_js(input: &str) -> Result<serde_json::Value, ParseError> {
    from_json(strip_wrapper(input)?)
}

/// Return the outermost JSON object inside `input`.
///
/// Plain JSON passes through unchanged; anything before the first `{` or
/// after the last `}` is discarded.
pub fn strip_wrapper(input: &str) -> Result<&str, ParseError> {
    let trimmed = input.trim();
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        return Ok(trimmed);
    }
    let start = trimmed.find('{').ok_or(ParseError::MissingWrapperPayload)?;
    let end = trimmed.rfind('}').ok_or(ParseError::MissingWrapperPayload)?;
    if end < start {
        return Err(ParseError::MissingWrapperPayload);
    }
    Ok(&trimmed[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_json_passes_through() {
        assert_eq!(strip_wrapper("  {\"api\": []}\n").unwrap(), "{\"api\": []}");
    }

    #[test]
    fn test_define_wrapper_is_stripped() {
        let js = "define({ \"api\": [{\"type\": \"get\"}] });\n";
        assert_eq!(
            strip_wrapper(js).unwrap(),
            "{ \"api\": [{\"type\": \"get\"}] }"
        );
        let value = from_apidoc_js(js).unwrap();
        assert_eq!(value["api"][0]["type"], "get");
    }

    #[test]
    fn test_wrapper_without_object_fails() {
        assert!(matches!(
            strip_wrapper("define();"),
            Err(ParseError::MissingWrapperPayload)
        ));
        assert!(matches!(
            strip_wrapper("} nothing {"),
            Err(ParseError::MissingWrapperPayload)
        ));
    }

    #[test]
    fn test_invalid_json_is_reported() {
        assert!(matches!(from_json("{api: }"), Err(ParseError::Json(_))));
    }
}
