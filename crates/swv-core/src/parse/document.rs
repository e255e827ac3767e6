use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::spec::SwaggerV2;
use super::v1::SwaggerV1;

/// The only `swagger` value routed to the 2.0 model.
pub const SWAGGER_2_VERSION: &str = "2.0";

/// A Swagger document of either supported generation.
///
/// Anything whose `swagger` field is not exactly `"2.0"` (including a missing
/// field or an explicit `"1.2"`) is read as a 1.x document.
#[derive(Debug, Clone, PartialEq)]
pub enum SwaggerDocument {
    V1(SwaggerV1),
    V2(SwaggerV2),
}

impl SwaggerDocument {
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        if is_swagger2(&value) {
            log::debug!("reading document as Swagger 2.0");
            Ok(SwaggerDocument::V2(serde_json::from_value(value)?))
        } else {
            log::debug!("reading document as Swagger 1.x");
            Ok(SwaggerDocument::V1(serde_json::from_value(value)?))
        }
    }

    /// The declared version string, if any.
    pub fn version(&self) -> Option<&str> {
        match self {
            SwaggerDocument::V1(doc) => doc.swagger_version.as_deref(),
            SwaggerDocument::V2(doc) => Some(doc.swagger.as_str()),
        }
    }

    pub fn as_v2(&self) -> Option<&SwaggerV2> {
        match self {
            SwaggerDocument::V2(doc) => Some(doc),
            SwaggerDocument::V1(_) => None,
        }
    }
}

fn is_swagger2(value: &Value) -> bool {
    value.get("swagger").and_then(Value::as_str) == Some(SWAGGER_2_VERSION)
}

impl<'de> Deserialize<'de> for SwaggerDocument {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        SwaggerDocument::from_value(value).map_err(serde::de::Error::custom)
    }
}
