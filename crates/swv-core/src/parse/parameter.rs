use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::schema::Schema;

/// Where a parameter travels on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterLocation {
    Body,
    Path,
    Query,
    Header,
    FormData,
}

impl ParameterLocation {
    /// Classify a Swagger 2.0 `in` value.
    pub fn from_in(value: &str) -> Option<Self> {
        match value {
            "body" => Some(ParameterLocation::Body),
            "path" => Some(ParameterLocation::Path),
            "query" => Some(ParameterLocation::Query),
            "header" => Some(ParameterLocation::Header),
            "formData" => Some(ParameterLocation::FormData),
            _ => None,
        }
    }

    /// Classify a Swagger 1.x `paramType` value.
    pub fn from_param_type(value: &str) -> Option<Self> {
        match value {
            "body" => Some(ParameterLocation::Body),
            "path" => Some(ParameterLocation::Path),
            "query" => Some(ParameterLocation::Query),
            "header" => Some(ParameterLocation::Header),
            "form" => Some(ParameterLocation::FormData),
            _ => None,
        }
    }
}

/// An operation parameter. Both document generations share this shape: 2.0
/// declares its location in `in`, 1.x in `paramType`. Unmodelled keys are kept
/// in `extra` so they can be echoed back to templates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,

    #[serde(rename = "in", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(rename = "paramType", skip_serializing_if = "Option::is_none")]
    pub param_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub required: bool,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Value>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,

    #[serde(
        rename = "x-exclude-from-bindings",
        skip_serializing_if = "Option::is_none"
    )]
    pub exclude_from_bindings: Option<bool>,

    #[serde(rename = "x-proxy-header", skip_serializing_if = "Option::is_none")]
    pub proxy_header: Option<Value>,

    #[serde(rename = "x-name-pattern", skip_serializing_if = "Option::is_none")]
    pub name_pattern: Option<String>,

    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl Parameter {
    /// `x-exclude-from-bindings: true`
    pub fn is_excluded_from_bindings(&self) -> bool {
        self.exclude_from_bindings == Some(true)
    }

    /// Headers injected by proxies and app servers, never set by a client.
    pub fn is_proxy_header(&self) -> bool {
        self.proxy_header.as_ref().is_some_and(is_truthy)
    }

    /// The single allowed value of a one-element `enum`.
    pub fn singleton(&self) -> Option<&Value> {
        match self.enum_values.as_deref() {
            Some([only]) => Some(only),
            _ => None,
        }
    }
}

/// A reference to a shared parameter, or an inline parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterOrRef {
    /// `$ref` entry. The binding extensions may sit beside the reference and
    /// apply on top of whatever the target declares.
    Ref {
        #[serde(rename = "$ref")]
        ref_path: String,

        #[serde(
            rename = "x-exclude-from-bindings",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        exclude_from_bindings: Option<bool>,

        #[serde(
            rename = "x-proxy-header",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        proxy_header: Option<Value>,
    },
    Parameter(Box<Parameter>),
}

impl ParameterOrRef {
    /// `x-exclude-from-bindings: true` on the entry itself.
    pub fn is_excluded_from_bindings(&self) -> bool {
        match self {
            ParameterOrRef::Ref {
                exclude_from_bindings,
                ..
            } => *exclude_from_bindings == Some(true),
            ParameterOrRef::Parameter(parameter) => parameter.is_excluded_from_bindings(),
        }
    }

    /// A truthy `x-proxy-header` on the entry itself.
    pub fn is_proxy_header(&self) -> bool {
        match self {
            ParameterOrRef::Ref { proxy_header, .. } => {
                proxy_header.as_ref().is_some_and(is_truthy)
            }
            ParameterOrRef::Parameter(parameter) => parameter.is_proxy_header(),
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
