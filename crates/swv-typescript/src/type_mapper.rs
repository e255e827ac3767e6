use serde::Serialize;
use serde_json::{Map, Value};

use swv_core::parse::parameter::Parameter;
use swv_core::parse::schema::Schema;

/// A TypeScript type descriptor, as attached to view-model nodes.
///
/// `tsType` is the rendered type expression; the flags and nested descriptors
/// let templates emit something richer than a plain annotation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TsType {
    pub ts_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    pub is_ref: bool,
    pub is_array: bool,
    pub is_object: bool,
    pub is_atomic: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element_type: Option<Box<TsType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<TsProperty>>,
}

/// One property of an object descriptor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TsProperty {
    pub name: String,
    pub optional: bool,
    #[serde(flatten)]
    pub ty: TsType,
}

impl TsType {
    fn atomic(ts_type: impl Into<String>) -> Self {
        Self {
            ts_type: ts_type.into(),
            target: None,
            is_ref: false,
            is_array: false,
            is_object: false,
            is_atomic: true,
            element_type: None,
            properties: None,
        }
    }

    fn reference(target: &str) -> Self {
        Self {
            target: Some(target.to_string()),
            is_ref: true,
            is_atomic: false,
            ..Self::atomic(target)
        }
    }

    fn array(element: TsType) -> Self {
        let ts_type = if element.ts_type.contains('|') {
            format!("({})[]", element.ts_type)
        } else {
            format!("{}[]", element.ts_type)
        };
        Self {
            is_array: true,
            is_atomic: false,
            element_type: Some(Box::new(element)),
            ..Self::atomic(ts_type)
        }
    }

    fn object(ts_type: String, properties: Option<Vec<TsProperty>>) -> Self {
        Self {
            is_object: true,
            is_atomic: false,
            properties,
            ..Self::atomic(ts_type)
        }
    }
}

/// Map a schema object to its TypeScript descriptor.
pub fn schema_to_ts(schema: &Schema) -> TsType {
    if let Some(reference) = schema.get("$ref").and_then(Value::as_str) {
        return TsType::reference(ref_target(reference));
    }

    match schema.get("enum").and_then(Value::as_array) {
        Some(values) if !values.is_empty() => {
            let variants: Vec<String> = values.iter().map(literal).collect();
            return TsType::atomic(variants.join(" | "));
        }
        _ => {}
    }

    match schema.get("type").and_then(Value::as_str) {
        Some("string") => TsType::atomic(string_type(schema)),
        Some("number" | "integer") => TsType::atomic("number"),
        Some("boolean") => TsType::atomic("boolean"),
        Some("file") => TsType::atomic("Blob"),
        Some("null") => TsType::atomic("null"),
        Some("array") => TsType::array(value_to_ts(schema.get("items"))),
        Some("object") => object_to_ts(schema),
        Some(_) | None if schema.contains_key("properties") => object_to_ts(schema),
        Some(other) => {
            log::trace!("unmapped schema type `{other}`, using unknown");
            TsType::atomic("unknown")
        }
        None => TsType::atomic("unknown"),
    }
}

/// Map a parameter to its TypeScript descriptor: its `schema` for body
/// parameters, its inline `type`/`enum`/`items` otherwise.
pub fn parameter_to_ts(parameter: &Parameter) -> TsType {
    if let Some(ref schema) = parameter.schema {
        return schema_to_ts(schema);
    }

    let mut inline = Map::new();
    if let Some(ref schema_type) = parameter.schema_type {
        inline.insert("type".to_string(), Value::String(schema_type.clone()));
    }
    if let Some(ref format) = parameter.format {
        inline.insert("format".to_string(), Value::String(format.clone()));
    }
    if let Some(ref values) = parameter.enum_values {
        inline.insert("enum".to_string(), Value::Array(values.clone()));
    }
    if let Some(ref items) = parameter.items {
        inline.insert("items".to_string(), items.clone());
    }
    schema_to_ts(&inline)
}

fn value_to_ts(value: Option<&Value>) -> TsType {
    match value.and_then(Value::as_object) {
        Some(schema) => schema_to_ts(schema),
        None => TsType::atomic("unknown"),
    }
}

fn object_to_ts(schema: &Schema) -> TsType {
    let required: Vec<&str> = schema
        .get("required")
        .and_then(Value::as_array)
        .map(|names| names.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    match schema.get("properties").and_then(Value::as_object) {
        Some(properties) if !properties.is_empty() => {
            let properties: Vec<TsProperty> = properties
                .iter()
                .map(|(name, property)| TsProperty {
                    name: name.clone(),
                    optional: !required.contains(&name.as_str()),
                    ty: value_to_ts(Some(property)),
                })
                .collect();
            let fields: Vec<String> = properties
                .iter()
                .map(|p| {
                    let marker = if p.optional { "?" } else { "" };
                    format!("{}{marker}: {}", p.name, p.ty.ts_type)
                })
                .collect();
            TsType::object(format!("{{ {} }}", fields.join("; ")), Some(properties))
        }
        _ => {
            let ts_type = match schema.get("additionalProperties") {
                Some(Value::Object(values)) => {
                    format!("Record<string, {}>", schema_to_ts(values).ts_type)
                }
                _ => "Record<string, unknown>".to_string(),
            };
            TsType::object(ts_type, None)
        }
    }
}

fn string_type(schema: &Schema) -> &'static str {
    match schema.get("format").and_then(Value::as_str) {
        Some("binary") => "Blob",
        _ => "string",
    }
}

/// `#/definitions/Pet` → `Pet`.
fn ref_target(reference: &str) -> &str {
    reference.rsplit('/').next().unwrap_or(reference)
}

fn literal(value: &Value) -> String {
    match value {
        Value::String(s) => format!("\"{s}\""),
        other => other.to_string(),
    }
}
