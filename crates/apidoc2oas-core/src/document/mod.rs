//! The generated OpenAPI document model.

pub mod components;
pub mod media_type;
pub mod operation;
pub mod parameter;
pub mod request_body;
pub mod response;
pub mod schema;
pub mod security;
pub mod server;
pub mod spec;

pub use components::Components;
pub use media_type::MediaType;
pub use operation::{HttpMethod, Operation, PathItem};
pub use parameter::{Parameter, ParameterLocation};
pub use request_body::RequestBody;
pub use response::Response;
pub use schema::{Schema, SchemaKind};
pub use security::{BEARER_AUTH, SecurityRequirement, SecurityScheme};
pub use server::Server;
pub use spec::{Contact, Info, License, OpenApiDocument, Tag};

/// Media type used for every generated request and response body.
pub const JSON_MEDIA_TYPE: &str = "application/json";
