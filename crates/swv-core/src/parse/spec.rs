use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::operation::PathItem;
use super::parameter::Parameter;
use super::schema::Schema;
use super::security::{SecurityRequirement, SecurityScheme};

/// Info object describing the API.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Info {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// Tag definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// Top-level Swagger 2.0 document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SwaggerV2 {
    pub swagger: String,

    pub info: Info,

    pub host: Option<String>,

    #[serde(rename = "basePath")]
    pub base_path: Option<String>,

    #[serde(default)]
    pub schemes: Vec<String>,

    pub produces: Option<Vec<String>>,

    pub consumes: Option<Vec<String>>,

    #[serde(deserialize_with = "deserialize_paths")]
    pub paths: IndexMap<String, PathItem>,

    #[serde(default)]
    pub definitions: IndexMap<String, Schema>,

    /// Shared parameters, the targets of `#/parameters/<name>` references.
    #[serde(default)]
    pub parameters: IndexMap<String, Parameter>,

    #[serde(rename = "securityDefinitions")]
    pub security_definitions: Option<IndexMap<String, SecurityScheme>>,

    pub security: Option<Vec<SecurityRequirement>>,

    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl SwaggerV2 {
    /// `scheme://host/basePath` when all three are declared, else empty.
    pub fn domain(&self) -> String {
        match (self.schemes.first(), &self.host, &self.base_path) {
            (Some(scheme), Some(host), Some(base_path)) => {
                format!("{scheme}://{host}{}", base_path.trim_end_matches('/'))
            }
            _ => String::new(),
        }
    }

    pub fn tag(&self, name: &str) -> Option<&Tag> {
        self.tags.iter().find(|t| t.name == name)
    }
}

/// Read the Paths Object, skipping `x-` extension keys.
fn deserialize_paths<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<IndexMap<String, PathItem>, D::Error> {
    use serde::de::Error;

    let raw = IndexMap::<String, Value>::deserialize(deserializer)?;
    let mut paths = IndexMap::with_capacity(raw.len());
    for (key, value) in raw {
        if key.starts_with("x-") {
            log::trace!("skipping paths extension `{key}`");
            continue;
        }
        let item = serde_json::from_value(value)
            .map_err(|e| D::Error::custom(format!("{key}: {e}")))?;
        paths.insert(key, item);
    }
    Ok(paths)
}
