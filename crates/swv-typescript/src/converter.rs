use serde_json::Value;

use swv_core::parse::spec::SwaggerV2;
use swv_core::{PrepareOptions, SchemaNode, TypeConverter};

use crate::type_mapper::{TsType, parameter_to_ts, schema_to_ts};

/// Attaches a [`TsType`] descriptor to every parameter, response schema and
/// definition in the view model.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptConverter;

impl TypeScriptConverter {
    pub fn new() -> Self {
        Self
    }

    pub fn describe(&self, node: SchemaNode<'_>) -> TsType {
        match node {
            SchemaNode::Parameter(parameter) => parameter_to_ts(parameter),
            SchemaNode::Schema(schema) => schema_to_ts(schema),
        }
    }
}

impl TypeConverter for TypeScriptConverter {
    fn convert_type(
        &self,
        node: SchemaNode<'_>,
        _swagger: &SwaggerV2,
        _options: &PrepareOptions<'_>,
    ) -> Value {
        // TsType holds only strings, bools and nested descriptors.
        serde_json::to_value(self.describe(node)).unwrap_or(Value::Null)
    }
}
