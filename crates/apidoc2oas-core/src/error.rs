use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no JSON object found inside the wrapped payload")]
    MissingWrapperPayload,
}

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("no data available: load an apiDoc document before converting")]
    NoData,

    #[error("input document has no `api` endpoint list")]
    MissingEndpointList,

    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}
