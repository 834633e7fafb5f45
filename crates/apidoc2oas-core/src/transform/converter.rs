use indexmap::{IndexMap, IndexSet};
use log::{debug, warn};
use serde_json::Value;

use crate::config::ConverterConfig;
use crate::document::{
    BEARER_AUTH, Components, Contact, HttpMethod, Info, License, OpenApiDocument, Operation,
    SecurityScheme, Server, Tag,
};
use crate::error::ConvertError;
use crate::parse;
use crate::parse::endpoint::{ApiDocDocument, EndpointRecord};

use super::ledger::OperationIdLedger;
use super::operation_id::OperationIdSynthesizer;
use super::parameters::extract_parameters;
use super::path_normalizer::{NormalizedPath, normalize_path};
use super::responses::{build_description, build_request_body, build_responses, build_security};

/// Converts loaded apiDoc endpoint records into an OpenAPI document.
///
/// Each instance owns its own input and identifier ledger, so separate
/// instances can convert concurrently. The ledger is reset on every
/// [`convert`](Converter::convert) call.
#[derive(Debug)]
pub struct Converter {
    config: ConverterConfig,
    synthesizer: OperationIdSynthesizer,
    input: Option<ApiDocDocument>,
    ledger: OperationIdLedger,
}

impl Converter {
    pub fn new(config: ConverterConfig) -> Self {
        Self {
            synthesizer: OperationIdSynthesizer::new(&config.naming),
            config,
            input: None,
            ledger: OperationIdLedger::new(),
        }
    }

    /// Load a parsed apiDoc payload of shape `{ "api": [...] }`.
    ///
    /// On failure the converter is left without data.
    pub fn load(&mut self, document: &Value) -> Result<(), ConvertError> {
        self.input = None;
        let parsed = ApiDocDocument::from_value(document)?;
        self.load_records(parsed);
        Ok(())
    }

    /// Parse and load a raw payload, with or without a `define(...)` wrapper.
    pub fn load_str(&mut self, input: &str) -> Result<(), ConvertError> {
        self.input = None;
        let value = parse::from_apidoc_js(input)?;
        self.load(&value)
    }

    /// Load records that were already parsed.
    pub fn load_records(&mut self, document: ApiDocDocument) {
        debug!("loaded {} endpoint records", document.records.len());
        self.input = Some(document);
    }

    #[cfg(test)]
    fn is_ready(&self) -> bool {
        self.input.is_some()
    }

    /// Number of loaded endpoint records.
    pub fn record_count(&self) -> usize {
        self.input.as_ref().map_or(0, |doc| doc.records.len())
    }

    /// Build the document from the loaded records.
    pub fn convert(&mut self) -> Result<OpenApiDocument, ConvertError> {
        let input = self.input.as_ref().ok_or(ConvertError::NoData)?;
        self.ledger.clear();

        let mut document = skeleton(&self.config);
        let mut tags: IndexSet<String> = IndexSet::new();

        for (index, record) in input.records.iter().enumerate() {
            let Some(url) = record.url.as_deref().filter(|u| !u.trim().is_empty()) else {
                warn!("skipping endpoint record #{index}: no url");
                continue;
            };
            let method: HttpMethod = match record.method.parse() {
                Ok(method) => method,
                Err(e) => {
                    warn!("skipping endpoint record #{index} ({url}): {e}");
                    continue;
                }
            };

            let path = normalize_path(url);
            let candidate = self.synthesizer.synthesize(
                method,
                &path,
                record.name.as_deref(),
                record.group.as_deref(),
            );
            let operation_id = self.ledger.reserve(&candidate);
            debug!("{} {} -> {}", method, path.path, operation_id);

            let tag = record
                .group
                .clone()
                .filter(|g| !g.trim().is_empty())
                .unwrap_or_else(|| self.config.naming.default_group.clone());
            tags.insert(tag.clone());

            let op = build_operation(record, method, &path, operation_id, tag);
            let item = document.paths.entry(path.path.clone()).or_default();
            if let Some(previous) = item.insert(method, op) {
                warn!(
                    "{} {} declared more than once; {} replaces {}",
                    method,
                    path.path,
                    item.operation(method).map_or("?", |op| op.operation_id.as_str()),
                    previous.operation_id
                );
            }
        }

        // Overwritten operations may leave a group with no operation.
        let used: IndexSet<&str> = document
            .operations()
            .flat_map(|(_, _, op)| op.tags.iter().map(String::as_str))
            .collect();
        tags.retain(|tag| used.contains(tag.as_str()));
        document.tags = tags.into_iter().map(|name| Tag { name }).collect();
        Ok(document)
    }
}

/// Metadata, servers and components with empty paths.
fn skeleton(config: &ConverterConfig) -> OpenApiDocument {
    let info = &config.info;
    let mut security_schemes = IndexMap::new();
    security_schemes.insert(BEARER_AUTH.to_string(), SecurityScheme::bearer());

    OpenApiDocument {
        openapi: config.openapi_version.clone(),
        info: Info {
            title: info.title.clone(),
            description: info.description.clone(),
            version: info.version.clone(),
            contact: Contact {
                name: info.contact_name.clone(),
                url: info.contact_url.clone(),
            },
            license: License {
                name: info.license_name.clone(),
                url: info.license_url.clone(),
            },
        },
        servers: vec![Server {
            url: config.server.url.clone(),
            description: Some(config.server.description.clone()),
        }],
        tags: Vec::new(),
        paths: IndexMap::new(),
        components: Components {
            schemas: IndexMap::new(),
            security_schemes,
        },
    }
}

fn build_operation(
    record: &EndpointRecord,
    method: HttpMethod,
    path: &NormalizedPath,
    operation_id: String,
    tag: String,
) -> Operation {
    Operation {
        operation_id,
        summary: record.title.clone(),
        description: build_description(record),
        tags: vec![tag],
        parameters: extract_parameters(record, path),
        request_body: build_request_body(record, method),
        responses: build_responses(record),
        deprecated: record.is_deprecated().then_some(true),
        security: build_security(record),
    }
}
