use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::error::ConfigError;
use crate::parse::SwaggerDocument;
use crate::transform::{DEFAULT_TYPE_PROPERTY_NAME, PrepareOptions};

/// Top-level project configuration loaded from `.swv.yaml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SwvConfig {
    pub input: String,
    /// Where `render` writes; stdout when unset.
    pub output: Option<String>,
    pub template: Option<String>,
    pub module_name: String,
    pub class_name: String,
    pub imports: Vec<String>,
    pub type_property_name: String,
    pub default_type: Option<Value>,
    pub converter: ConverterKind,
}

impl Default for SwvConfig {
    fn default() -> Self {
        Self {
            input: "swagger.json".to_string(),
            output: None,
            template: None,
            module_name: String::new(),
            class_name: "Api".to_string(),
            imports: Vec::new(),
            type_property_name: DEFAULT_TYPE_PROPERTY_NAME.to_string(),
            default_type: None,
            converter: ConverterKind::None,
        }
    }
}

impl SwvConfig {
    /// Transform options for `swagger`, without a type converter.
    pub fn prepare_options<'a>(&self, swagger: &'a SwaggerDocument) -> PrepareOptions<'a> {
        let mut options = PrepareOptions::new(swagger)
            .with_module_name(self.module_name.clone())
            .with_class_name(self.class_name.clone())
            .with_imports(self.imports.clone())
            .with_type_property_name(self.type_property_name.clone());
        if let Some(ref default_type) = self.default_type {
            options = options.with_default_type(default_type.clone());
        }
        options
    }
}

/// Which type converter feeds the view model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConverterKind {
    #[default]
    None,
    Typescript,
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".swv.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<SwvConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let config = serde_yaml_ng::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# swagger-view configuration
input: swagger.json
# output: src/generated/api.ts   # render target; stdout when unset
# template: templates/class.j2

module_name: ""
class_name: Api
imports: []

converter: none          # none | typescript
type_property_name: __type
# default_type:            # return type used when no response qualifies
#   tsType: void
"#
}
