//! Swagger 1.x API declarations (`apis[]` → `operations[]`).

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use super::parameter::Parameter;
use super::security::SecurityScheme;
use super::spec::Info;

/// Top-level Swagger 1.x document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SwaggerV1 {
    #[serde(rename = "swaggerVersion")]
    pub swagger_version: Option<String>,

    pub description: Option<String>,

    pub info: Option<Info>,

    #[serde(rename = "basePath")]
    pub base_path: Option<String>,

    pub apis: Vec<Api>,

    pub produces: Option<Vec<String>>,

    pub consumes: Option<Vec<String>>,

    /// Scheme declarations, keyed by the names operations refer to.
    pub authorizations: Option<IndexMap<String, SecurityScheme>>,
}

impl SwaggerV1 {
    pub fn description(&self) -> Option<&str> {
        self.description
            .as_deref()
            .or_else(|| self.info.as_ref()?.description.as_deref())
    }
}

/// One API path and its operations.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Api {
    pub path: String,

    pub description: Option<String>,

    #[serde(default)]
    pub operations: Vec<OperationV1>,
}

/// A Swagger 1.x operation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OperationV1 {
    pub method: String,

    pub nickname: Option<String>,

    pub summary: Option<String>,

    pub notes: Option<String>,

    #[serde(default)]
    pub parameters: Vec<Parameter>,

    pub produces: Option<Vec<String>>,

    pub consumes: Option<Vec<String>>,

    /// Scheme name to scope list.
    pub authorizations: Option<IndexMap<String, Value>>,

    #[serde(rename = "type")]
    pub response_type: Option<String>,
}
