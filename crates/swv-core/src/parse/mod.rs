pub mod document;
pub mod operation;
pub mod parameter;
pub mod response;
pub mod schema;
pub mod security;
pub mod spec;
pub mod v1;

use serde_json::Value;

use crate::error::ParseError;
pub use document::SwaggerDocument;

/// Parse a Swagger document from YAML.
pub fn from_yaml(input: &str) -> Result<SwaggerDocument, ParseError> {
    let value: Value = serde_yaml_ng::from_str(input)?;
    from_value(value)
}

/// Parse a Swagger document from JSON.
pub fn from_json(input: &str) -> Result<SwaggerDocument, ParseError> {
    let value: Value = serde_json::from_str(input)?;
    from_value(value)
}

/// Interpret an already-deserialized document, picking the version from its `swagger` field.
pub fn from_value(value: Value) -> Result<SwaggerDocument, ParseError> {
    SwaggerDocument::from_value(value).map_err(|e| ParseError::InvalidDocument(e.to_string()))
}
