use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The kind of a declared security scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SecuritySchemeType {
    #[serde(rename = "basic", alias = "basicAuth")]
    Basic,
    #[serde(rename = "apiKey")]
    ApiKey,
    #[serde(rename = "oauth2")]
    OAuth2,
    #[serde(other)]
    Other,
}

/// A security scheme from `securityDefinitions` (2.0) or `authorizations` (1.2).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityScheme {
    #[serde(rename = "type")]
    pub scheme_type: SecuritySchemeType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// A security requirement: map of scheme name to required scopes.
pub type SecurityRequirement = IndexMap<String, Vec<String>>;
