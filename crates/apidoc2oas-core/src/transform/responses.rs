use indexmap::IndexMap;

use crate::document::security::bearer_requirement;
use crate::document::{
    HttpMethod, JSON_MEDIA_TYPE, MediaType, RequestBody, Response, Schema, SecurityRequirement,
};
use crate::parse::endpoint::{EndpointRecord, Field, FieldSection};

use super::type_coercion::coerce_type;

const SUCCESS_DESCRIPTION: &str = "Successful operation";
const BAD_REQUEST_DESCRIPTION: &str = "Bad Request";

/// Responses present on every operation regardless of declared fields.
const STANDARD_RESPONSES: &[(&str, &str)] = &[
    ("401", "Unauthorized"),
    ("403", "Forbidden"),
    ("404", "Not Found"),
    ("500", "Internal Server Error"),
];

/// Object schema with one property per declared field.
pub fn fields_schema(fields: &[Field]) -> Schema {
    let properties = fields
        .iter()
        .map(|field| {
            let schema =
                coerce_type(field.type_name.as_deref()).with_description(field.description.clone());
            (field.field.clone(), schema)
        })
        .collect();
    Schema::object(properties)
}

fn json_content(schema: Schema) -> IndexMap<String, MediaType> {
    let mut content = IndexMap::new();
    content.insert(JSON_MEDIA_TYPE.to_string(), MediaType { schema });
    content
}

/// `{ "error": { "message": string } }`
fn error_schema() -> Schema {
    let mut inner = IndexMap::new();
    inner.insert("message".to_string(), Schema::string());
    let mut outer = IndexMap::new();
    outer.insert("error".to_string(), Schema::object(inner));
    Schema::object(outer)
}

/// Build the response map: 200, 400 when errors are declared, then the standard set.
pub fn build_responses(record: &EndpointRecord) -> IndexMap<String, Response> {
    let mut responses = IndexMap::new();

    let success_fields = record.fields(FieldSection::Success);
    let success_schema = if success_fields.is_empty() {
        Schema::open_object()
    } else {
        fields_schema(&success_fields)
    };
    responses.insert(
        "200".to_string(),
        Response {
            description: SUCCESS_DESCRIPTION.to_string(),
            content: json_content(success_schema),
        },
    );

    if record.has_fields(FieldSection::Error) {
        responses.insert(
            "400".to_string(),
            Response {
                description: BAD_REQUEST_DESCRIPTION.to_string(),
                content: json_content(error_schema()),
            },
        );
    }

    for (status, description) in STANDARD_RESPONSES {
        responses.insert(status.to_string(), Response::described(description));
    }

    responses
}

/// Request body from declared body fields, for methods that carry one.
pub fn build_request_body(record: &EndpointRecord, method: HttpMethod) -> Option<RequestBody> {
    if !method.accepts_body() {
        return None;
    }
    let fields = record.fields(FieldSection::Body);
    if fields.is_empty() {
        return None;
    }
    Some(RequestBody {
        required: fields.iter().any(Field::required),
        content: json_content(fields_schema(&fields)),
    })
}

/// Bearer auth unless the endpoint is public.
pub fn build_security(record: &EndpointRecord) -> Option<Vec<SecurityRequirement>> {
    if record.is_public {
        None
    } else {
        Some(vec![bearer_requirement()])
    }
}

/// The record description with any deprecation note appended.
pub fn build_description(record: &EndpointRecord) -> Option<String> {
    let note = record
        .deprecation_note()
        .filter(|_| record.is_deprecated())
        .map(|note| format!("Deprecated: {note}"));

    match (record.description.clone(), note) {
        (Some(description), Some(note)) => Some(format!("{description}\n\n{note}")),
        (description, None) => description,
        (None, note) => note,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{BEARER_AUTH, SchemaKind};
    use serde::Deserialize;
    use serde_json::json;

    fn record(value: serde_json::Value) -> EndpointRecord {
        EndpointRecord::deserialize(&value).unwrap()
    }

    fn statuses(responses: &IndexMap<String, Response>) -> Vec<&str> {
        responses.keys().map(String::as_str).collect()
    }

    #[test]
    fn test_defaults_without_declared_fields() {
        let responses = build_responses(&record(json!({"type": "get", "url": "/x"})));
        assert_eq!(statuses(&responses), vec!["200", "401", "403", "404", "500"]);

        let ok = &responses["200"];
        assert_eq!(ok.description, "Successful operation");
        let schema = &ok.content[JSON_MEDIA_TYPE].schema;
        assert_eq!(schema.kind, SchemaKind::Object);
        assert_eq!(schema.additional_properties, Some(true));
        assert!(schema.properties.is_empty());

        assert_eq!(responses["404"].description, "Not Found");
        assert!(responses["500"].content.is_empty());
    }

    #[test]
    fn test_success_and_error_fields() {
        let r = record(json!({
            "type": "get",
            "url": "/x",
            "success": {"fields": {"Success 200": [
                {"field": "id", "type": "Number", "description": "Identifier"},
                {"field": "active", "type": "Boolean"}
            ]}},
            "error": {"fields": {"Error 4xx": [{"field": "UserNotFound"}]}}
        }));
        let responses = build_responses(&r);
        assert_eq!(statuses(&responses), vec!["200", "400", "401", "403", "404", "500"]);

        let schema = &responses["200"].content[JSON_MEDIA_TYPE].schema;
        assert_eq!(schema.properties.len(), 2);
        assert_eq!(schema.properties["id"].kind, SchemaKind::Integer);
        assert_eq!(schema.properties["id"].description.as_deref(), Some("Identifier"));
        assert_eq!(schema.properties["active"].kind, SchemaKind::Boolean);
        assert!(schema.additional_properties.is_none());

        let bad = &responses["400"];
        assert_eq!(bad.description, "Bad Request");
        let error = &bad.content[JSON_MEDIA_TYPE].schema.properties["error"];
        assert_eq!(error.properties["message"].kind, SchemaKind::String);
    }

    #[test]
    fn test_error_alias_label() {
        let r = record(json!({
            "type": "get",
            "error": {"fields": {"Error": [{"field": "Oops"}]}}
        }));
        assert!(build_responses(&r).contains_key("400"));
    }

    #[test]
    fn test_request_body_only_for_body_methods() {
        let value = json!({
            "type": "post",
            "url": "/users",
            "parameter": {"fields": {"Body": [
                {"field": "email", "type": "String"},
                {"field": "nickname", "type": "String", "optional": true}
            ]}}
        });
        let r = record(value);

        let body = build_request_body(&r, HttpMethod::Post).expect("post should carry a body");
        assert!(body.required);
        assert_eq!(body.content[JSON_MEDIA_TYPE].schema.properties.len(), 2);

        assert!(build_request_body(&r, HttpMethod::Get).is_none());
        assert!(build_request_body(&r, HttpMethod::Delete).is_none());
    }

    #[test]
    fn test_request_body_optional_fields_and_alias() {
        let r = record(json!({
            "type": "patch",
            "parameter": {"fields": {"Request Body": [{"field": "name", "optional": true}]}}
        }));
        let body = build_request_body(&r, HttpMethod::Patch).unwrap();
        assert!(!body.required);
    }

    #[test]
    fn test_request_body_omitted_without_fields() {
        let r = record(json!({"type": "put", "url": "/x"}));
        assert!(build_request_body(&r, HttpMethod::Put).is_none());
    }

    #[test]
    fn test_security() {
        let private = build_security(&record(json!({"type": "get"}))).unwrap();
        assert_eq!(private.len(), 1);
        assert!(private[0].contains_key(BEARER_AUTH));

        assert!(build_security(&record(json!({"type": "get", "isPublic": true}))).is_none());
    }

    #[test]
    fn test_description_with_deprecation_note() {
        let r = record(json!({
            "type": "get",
            "description": "Reads a user.",
            "deprecated": {"content": "Use /v2/user instead."}
        }));
        assert_eq!(
            build_description(&r).as_deref(),
            Some("Reads a user.\n\nDeprecated: Use /v2/user instead.")
        );

        let bare = record(json!({"type": "get", "deprecated": {"content": "Gone soon."}}));
        assert_eq!(build_description(&bare).as_deref(), Some("Deprecated: Gone soon."));

        let plain = record(json!({"type": "get", "description": "Hi", "deprecated": true}));
        assert_eq!(build_description(&plain).as_deref(), Some("Hi"));
    }
}
