use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::parameter::ParameterOrRef;
use super::response::Response;
use super::security::SecurityRequirement;

/// HTTP verbs accepted as operation keys under a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Copy,
    Head,
    Options,
    Link,
    Unlink,
    Purge,
    Lock,
    Unlock,
    Propfind,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Copy => "COPY",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Link => "LINK",
            HttpMethod::Unlink => "UNLINK",
            HttpMethod::Purge => "PURGE",
            HttpMethod::Lock => "LOCK",
            HttpMethod::Unlock => "UNLOCK",
            HttpMethod::Propfind => "PROPFIND",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMethod(pub String);

impl FromStr for HttpMethod {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let method = match s.to_ascii_uppercase().as_str() {
            "GET" => HttpMethod::Get,
            "POST" => HttpMethod::Post,
            "PUT" => HttpMethod::Put,
            "DELETE" => HttpMethod::Delete,
            "PATCH" => HttpMethod::Patch,
            "COPY" => HttpMethod::Copy,
            "HEAD" => HttpMethod::Head,
            "OPTIONS" => HttpMethod::Options,
            "LINK" => HttpMethod::Link,
            "UNLINK" => HttpMethod::Unlink,
            "PURGE" => HttpMethod::Purge,
            "LOCK" => HttpMethod::Lock,
            "UNLOCK" => HttpMethod::Unlock,
            "PROPFIND" => HttpMethod::Propfind,
            _ => return Err(UnknownMethod(s.to_string())),
        };
        Ok(method)
    }
}

/// A Swagger 2.0 operation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Operation {
    #[serde(rename = "operationId")]
    pub operation_id: Option<String>,

    pub summary: Option<String>,

    pub description: Option<String>,

    #[serde(rename = "externalDocs")]
    pub external_docs: Option<Value>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub parameters: Vec<ParameterOrRef>,

    #[serde(default)]
    pub responses: IndexMap<String, Response>,

    pub produces: Option<Vec<String>>,

    pub consumes: Option<Vec<String>>,

    pub security: Option<Vec<SecurityRequirement>>,

    pub deprecated: Option<bool>,
}

/// A path item: path-level parameters plus operations in document order.
///
/// Keys outside the verb allow-list (`$ref`, vendor extensions, unknown verbs)
/// are skipped while reading. Keys differing only in case (`get`, `GET`) are
/// distinct operations.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathItem {
    pub parameters: Vec<ParameterOrRef>,
    pub operations: Vec<(HttpMethod, Operation)>,
}

impl<'de> Deserialize<'de> for PathItem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;

        let raw = IndexMap::<String, Value>::deserialize(deserializer)?;
        let mut item = PathItem::default();
        for (key, value) in raw {
            if key.eq_ignore_ascii_case("parameters") {
                item.parameters = serde_json::from_value(value).map_err(D::Error::custom)?;
                continue;
            }
            match key.parse::<HttpMethod>() {
                Ok(method) => {
                    let op = serde_json::from_value(value)
                        .map_err(|e| D::Error::custom(format!("{key}: {e}")))?;
                    item.operations.push((method, op));
                }
                Err(UnknownMethod(key)) => log::trace!("skipping path item key `{key}`"),
            }
        }
        Ok(item)
    }
}
