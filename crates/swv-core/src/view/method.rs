use serde::Serialize;
use serde_json::Value;

use crate::parse::response::Response;
use crate::parse::schema::Schema;

use super::is_false;
use super::parameter::{ByIn, ComputedType, ParameterView};

/// A synthesized request header (`Accept`, `Content-Type`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    pub name: String,
    pub value: String,
}

/// A response entry tagged with its literal status code.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseView {
    pub response_code: String,

    #[serde(flatten)]
    pub response: Response,
}

/// A response schema carrying its computed type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaView {
    #[serde(flatten)]
    pub schema: Schema,

    #[serde(flatten)]
    pub computed: ComputedType,
}

/// What a method returns: a selected response schema, or the caller's default type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ReturnView {
    Schema(SchemaView),
    Default(Value),
}

/// One operation, flattened for rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Method {
    pub path: String,
    pub class_name: String,
    pub method_name: String,
    /// Uppercase HTTP verb.
    pub method: String,
    #[serde(rename = "isGET")]
    pub is_get: bool,
    #[serde(rename = "isPOST")]
    pub is_post: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<Value>,
    #[serde(skip_serializing_if = "is_false")]
    pub deprecated: bool,

    pub is_secure: bool,
    pub is_secure_token: bool,
    pub is_secure_api_key: bool,
    pub is_secure_basic: bool,

    pub parameters: Vec<ParameterView>,
    pub by_in: ByIn,
    pub headers: Vec<Header>,

    #[serde(rename = "return", skip_serializing_if = "Option::is_none")]
    pub return_type: Option<ReturnView>,

    // Swagger 2.0 only.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_group: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub not_first_by_tag: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub responses: Vec<ResponseView>,
    #[serde(skip_serializing_if = "is_false")]
    pub is_first_path: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub not_first_method: bool,

    // Swagger 1.x only.
    #[serde(skip_serializing_if = "is_false")]
    pub not_first_path: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub is_first_method: bool,
}

impl Method {
    /// The computed return type, when the return came from a response schema.
    pub fn return_computed_type(&self) -> Option<&Value> {
        match self.return_type.as_ref()? {
            ReturnView::Schema(view) => view.computed.value(),
            ReturnView::Default(value) => Some(value),
        }
    }
}
