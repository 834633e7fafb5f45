use crate::document::{Parameter, ParameterLocation, Schema};
use crate::parse::endpoint::{EndpointRecord, FieldSection};

use super::path_normalizer::NormalizedPath;
use super::type_coercion::coerce_type;

/// Collect an endpoint's parameters: path, then query, then header.
pub fn extract_parameters(record: &EndpointRecord, path: &NormalizedPath) -> Vec<Parameter> {
    let path_params = path.params.iter().map(|name| Parameter {
        name: name.clone(),
        location: ParameterLocation::Path,
        description: None,
        required: true,
        schema: Schema::string(),
    });

    let query_params = record
        .fields(FieldSection::Query)
        .into_iter()
        .map(|field| Parameter {
            required: field.required(),
            schema: coerce_type(field.type_name.as_deref()),
            name: field.field,
            location: ParameterLocation::Query,
            description: field.description,
        });

    let header_params = record
        .fields(FieldSection::Header)
        .into_iter()
        .map(|field| Parameter {
            required: field.required(),
            schema: Schema::string(),
            name: field.field,
            location: ParameterLocation::Header,
            description: field.description,
        });

    path_params.chain(query_params).chain(header_params).collect()
}
