use serde::{Deserialize, Serialize};

use super::schema::Schema;

/// A media type object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaType {
    pub schema: Schema,
}
