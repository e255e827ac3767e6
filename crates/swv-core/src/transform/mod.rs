pub mod name_normalizer;
pub mod parameters;
pub mod security;
pub mod swagger1;
pub mod swagger2;

use serde_json::Value;

use crate::error::TransformError;
use crate::parse::SwaggerDocument;
use crate::parse::parameter::Parameter;
use crate::parse::schema::Schema;
use crate::parse::spec::SwaggerV2;
use crate::view::{ComputedType, ViewModel};

/// Key computed types are attached under unless the caller picks another.
pub const DEFAULT_TYPE_PROPERTY_NAME: &str = "__type";

/// A node handed to a [`TypeConverter`].
#[derive(Debug, Clone, Copy)]
pub enum SchemaNode<'a> {
    Parameter(&'a Parameter),
    Schema(&'a Schema),
}

/// Maps a Swagger type definition to a target-language type representation.
///
/// The representation is opaque to the transform; it is attached verbatim
/// under [`PrepareOptions::type_property_name`].
pub trait TypeConverter {
    fn convert_type(
        &self,
        node: SchemaNode<'_>,
        swagger: &SwaggerV2,
        options: &PrepareOptions<'_>,
    ) -> Value;
}

/// Inputs to [`prepare`].
pub struct PrepareOptions<'a> {
    pub swagger: &'a SwaggerDocument,
    pub module_name: String,
    pub class_name: String,
    pub imports: Vec<String>,
    pub convert_type: Option<&'a dyn TypeConverter>,
    /// Return type used when no response qualifies.
    pub default_type: Option<Value>,
    pub type_property_name: String,
}

impl<'a> PrepareOptions<'a> {
    pub fn new(swagger: &'a SwaggerDocument) -> Self {
        Self {
            swagger,
            module_name: String::new(),
            class_name: String::new(),
            imports: Vec::new(),
            convert_type: None,
            default_type: None,
            type_property_name: DEFAULT_TYPE_PROPERTY_NAME.to_string(),
        }
    }

    pub fn with_module_name(mut self, module_name: impl Into<String>) -> Self {
        self.module_name = module_name.into();
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn with_imports(mut self, imports: Vec<String>) -> Self {
        self.imports = imports;
        self
    }

    pub fn with_type_converter(mut self, converter: &'a dyn TypeConverter) -> Self {
        self.convert_type = Some(converter);
        self
    }

    pub fn with_default_type(mut self, default_type: Value) -> Self {
        self.default_type = Some(default_type);
        self
    }

    pub fn with_type_property_name(mut self, name: impl Into<String>) -> Self {
        self.type_property_name = name.into();
        self
    }

    /// Run the converter, if any, and wrap the result under the configured key.
    pub(crate) fn compute_type(&self, node: SchemaNode<'_>, swagger: &SwaggerV2) -> ComputedType {
        let value = self
            .convert_type
            .map(|converter| converter.convert_type(node, swagger, self));
        ComputedType::new(self.type_property_name.as_str(), value)
    }

    pub(crate) fn no_type(&self) -> ComputedType {
        ComputedType::new(self.type_property_name.as_str(), None)
    }
}

/// Build the view model for a Swagger document, dispatching on its version.
pub fn prepare(options: &PrepareOptions<'_>) -> Result<ViewModel, TransformError> {
    match options.swagger {
        SwaggerDocument::V2(swagger) => swagger2::view_for_swagger2(swagger, options),
        SwaggerDocument::V1(swagger) => Ok(swagger1::view_for_swagger1(swagger, options)),
    }
}
