use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::parse::parameter::{Parameter, ParameterLocation};

use super::is_false;

/// A converter-computed type, serialized under a caller-chosen key
/// (`__type` unless configured otherwise). Absent values serialize to nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComputedType {
    key: String,
    value: Option<Value>,
}

impl ComputedType {
    pub fn new(key: impl Into<String>, value: Option<Value>) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }
}

impl Serialize for ComputedType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(usize::from(self.value.is_some())))?;
        if let Some(ref value) = self.value {
            map.serialize_entry(&self.key, value)?;
        }
        map.end()
    }
}

/// A parameter enriched with the flags templates branch on.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterView {
    #[serde(flatten)]
    pub parameter: Parameter,

    #[serde(skip)]
    pub location: Option<ParameterLocation>,

    pub camel_case_name: String,

    #[serde(skip_serializing_if = "is_false")]
    pub is_body_parameter: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub is_path_parameter: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub is_query_parameter: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub is_header_parameter: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub is_form_parameter: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub is_singleton: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub singleton: Option<Value>,

    #[serde(skip_serializing_if = "is_false")]
    pub is_pattern_type: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// `""` when required, `"?"` otherwise.
    pub cardinality: String,

    #[serde(skip_serializing_if = "is_false")]
    pub not_first_parameter: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub not_first_by_in: bool,

    #[serde(flatten)]
    pub computed: ComputedType,
}

/// Parameters partitioned by location.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ByIn {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub body: Vec<ParameterView>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<ParameterView>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub query: Vec<ParameterView>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub header: Vec<ParameterView>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub form_data: Vec<ParameterView>,

    pub has_body: bool,
    pub has_path: bool,
    pub has_query: bool,
    pub has_header: bool,
    pub has_form_data: bool,
    pub has_query_and_body: bool,
}

impl ByIn {
    /// The bucket for `location` together with its `has<Bucket>` flag.
    pub fn bucket_mut(
        &mut self,
        location: ParameterLocation,
    ) -> (&mut Vec<ParameterView>, &mut bool) {
        match location {
            ParameterLocation::Body => (&mut self.body, &mut self.has_body),
            ParameterLocation::Path => (&mut self.path, &mut self.has_path),
            ParameterLocation::Query => (&mut self.query, &mut self.has_query),
            ParameterLocation::Header => (&mut self.header, &mut self.has_header),
            ParameterLocation::FormData => (&mut self.form_data, &mut self.has_form_data),
        }
    }

    pub fn bucket(&self, location: ParameterLocation) -> &[ParameterView] {
        match location {
            ParameterLocation::Body => &self.body,
            ParameterLocation::Path => &self.path,
            ParameterLocation::Query => &self.query,
            ParameterLocation::Header => &self.header,
            ParameterLocation::FormData => &self.form_data,
        }
    }
}
