use serde::Serialize;
use serde_json::Value;

use crate::parse::spec::{Info, Tag};

use super::method::Method;
use super::parameter::ComputedType;

/// The complete view handed to a template.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub module_name: String,
    pub class_name: String,
    pub imports: Vec<String>,
    /// Base URL, or empty when the document does not pin one.
    pub domain: String,

    pub is_secure: bool,
    pub is_secure_token: bool,
    pub is_secure_api_key: bool,
    pub is_secure_basic: bool,

    pub methods: Vec<Method>,
    pub definitions: Vec<DefinitionView>,

    #[serde(flatten)]
    pub swagger2: Option<Swagger2View>,
}

/// Fields only a Swagger 2.0 document contributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Swagger2View {
    pub has_tags: bool,
    pub by_tags: Vec<TagGroup>,
    pub info: Info,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_path: Option<String>,
    pub tags: Vec<Tag>,
    pub schemes: Vec<String>,
}

/// Methods sharing one tag signature.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TagGroup {
    /// Comma-joined tags, or `"none"`.
    pub name: String,
    /// Tag objects resolved from the document's tag list.
    pub tags: Vec<Tag>,
    pub methods: Vec<Method>,
}

/// A named schema from `definitions`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DefinitionView {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<PropertyView>>,
    #[serde(flatten)]
    pub computed: ComputedType,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyView {
    pub name: String,
    pub schema: Value,
    #[serde(flatten)]
    pub computed: ComputedType,
}
