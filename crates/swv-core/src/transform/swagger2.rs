use indexmap::IndexMap;

use crate::error::TransformError;
use crate::parse::operation::{HttpMethod, Operation, PathItem};
use crate::parse::parameter::ParameterLocation;
use crate::parse::response::is_success_code;
use crate::parse::spec::SwaggerV2;
use crate::view::*;

use super::name_normalizer::{MethodNames, normalize_name, path_to_method_name};
use super::parameters::{
    enrich_parameter, is_entry_skipped, is_skipped, push_parameter, resolve_parameter,
    sort_parameter_by_in,
};
use super::security::{SecurityFlags, is_secure_v2, operation_security_v2};
use super::{PrepareOptions, SchemaNode};

/// Group key for operations without tags.
pub const UNTAGGED_GROUP: &str = "none";

/// Transform a Swagger 2.0 document into the view model.
pub fn view_for_swagger2(
    swagger: &SwaggerV2,
    options: &PrepareOptions<'_>,
) -> Result<ViewModel, TransformError> {
    // Phase 1: Definitions, independent of the path walk
    let definitions = build_definitions(swagger, options);

    // Phase 2: Walk paths in document order
    let mut walk = Walk::default();
    for (path, item) in &swagger.paths {
        for (verb, op) in &item.operations {
            let method = build_method(swagger, options, &mut walk.names, path, *verb, op, item)?;
            walk.push(swagger, path, method);
        }
    }

    let has_tags = walk.methods.iter().any(|m| !m.tags.is_empty());
    log::debug!(
        "prepared {} methods in {} tag groups",
        walk.methods.len(),
        walk.groups.len()
    );

    Ok(ViewModel {
        description: swagger.info.description.clone(),
        module_name: options.module_name.clone(),
        class_name: options.class_name.clone(),
        imports: options.imports.clone(),
        domain: swagger.domain(),
        is_secure: swagger.security_definitions.is_some(),
        is_secure_token: walk.security.token,
        is_secure_api_key: walk.security.api_key,
        is_secure_basic: walk.security.basic,
        methods: walk.methods,
        definitions,
        swagger2: Some(Swagger2View {
            has_tags,
            by_tags: walk.groups.into_values().collect(),
            info: swagger.info.clone(),
            host: swagger.host.clone(),
            base_path: swagger.base_path.clone(),
            tags: swagger.tags.clone(),
            schemes: swagger.schemes.clone(),
        }),
    })
}

/// State threaded through one path walk.
#[derive(Default)]
struct Walk<'a> {
    names: MethodNames,
    methods: Vec<Method>,
    groups: IndexMap<String, TagGroup>,
    security: SecurityFlags,
    last_path: Option<&'a str>,
}

impl<'a> Walk<'a> {
    /// Place a built method: positional markers, tag group, document flags.
    fn push(&mut self, swagger: &SwaggerV2, path: &'a str, mut method: Method) {
        method.is_first_path = self.last_path != Some(path);
        method.not_first_method = !self.methods.is_empty();
        self.last_path = Some(path);

        self.security.absorb(SecurityFlags {
            token: method.is_secure_token,
            api_key: method.is_secure_api_key,
            basic: method.is_secure_basic,
        });

        let group_name = method
            .tag_group
            .clone()
            .unwrap_or_else(|| UNTAGGED_GROUP.to_string());
        // Groups hold full copies so a template can render `byTags` without
        // reaching back into `methods`.
        match self.groups.get_mut(&group_name) {
            Some(group) => {
                method.not_first_by_tag = true;
                group.methods.push(method.clone());
            }
            None => {
                let tags = method
                    .tags
                    .iter()
                    .filter_map(|name| swagger.tag(name).cloned())
                    .collect();
                self.groups.insert(
                    group_name.clone(),
                    TagGroup {
                        name: group_name,
                        tags,
                        methods: vec![method.clone()],
                    },
                );
            }
        }

        self.methods.push(method);
    }
}

fn build_definitions(swagger: &SwaggerV2, options: &PrepareOptions<'_>) -> Vec<DefinitionView> {
    swagger
        .definitions
        .iter()
        .map(|(name, definition)| {
            let properties = definition
                .get("properties")
                .and_then(|p| p.as_object())
                .map(|properties| {
                    properties
                        .iter()
                        .map(|(prop_name, prop)| PropertyView {
                            name: prop_name.clone(),
                            schema: prop.clone(),
                            computed: match prop.as_object() {
                                Some(schema) => {
                                    options.compute_type(SchemaNode::Schema(schema), swagger)
                                }
                                None => options.no_type(),
                            },
                        })
                        .collect()
                });
            DefinitionView {
                name: name.clone(),
                description: definition
                    .get("description")
                    .and_then(|d| d.as_str())
                    .map(String::from),
                properties,
                computed: options.compute_type(SchemaNode::Schema(definition), swagger),
            }
        })
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn build_method(
    swagger: &SwaggerV2,
    options: &PrepareOptions<'_>,
    names: &mut MethodNames,
    path: &str,
    verb: HttpMethod,
    op: &Operation,
    item: &PathItem,
) -> Result<Method, TransformError> {
    let raw_name = match op.operation_id {
        Some(ref id) => normalize_name(id),
        None => path_to_method_name(verb.as_str(), path),
    };
    let method_name = names.claim(raw_name);

    let security = operation_security_v2(swagger, op);

    let mut parameters = build_parameters(swagger, options, op, item)?;
    let by_in = sort_parameter_by_in(&mut parameters);

    let (responses, return_type) = select_responses(swagger, options, op);

    let tag_group = if op.tags.is_empty() {
        UNTAGGED_GROUP.to_string()
    } else {
        op.tags.join(",")
    };

    Ok(Method {
        path: path.to_string(),
        class_name: options.class_name.clone(),
        method_name,
        method: verb.as_str().to_string(),
        is_get: verb == HttpMethod::Get,
        is_post: verb == HttpMethod::Post,
        summary: op.description.clone().or_else(|| op.summary.clone()),
        external_docs: op.external_docs.clone(),
        deprecated: op.deprecated.unwrap_or(false),
        is_secure: is_secure_v2(swagger, op),
        is_secure_token: security.token,
        is_secure_api_key: security.api_key,
        is_secure_basic: security.basic,
        parameters,
        by_in,
        headers: build_headers(swagger, op),
        return_type,
        tags: op.tags.clone(),
        tag_group: Some(tag_group),
        responses,
        ..Default::default()
    })
}

/// `Accept` from `produces`, `Content-Type` from `consumes`; the operation's
/// lists win over the document's.
fn build_headers(swagger: &SwaggerV2, op: &Operation) -> Vec<Header> {
    let mut headers = Vec::new();
    if let Some(produces) = op.produces.as_ref().or(swagger.produces.as_ref()) {
        headers.push(Header {
            name: "Accept".to_string(),
            value: format!("'{}'", produces.join(", ")),
        });
    }
    if let Some(consumes) = op.consumes.as_ref().or(swagger.consumes.as_ref()) {
        headers.push(Header {
            name: "Content-Type".to_string(),
            value: format!("'{}'", consumes.join(",")),
        });
    }
    headers
}

/// Operation parameters first, then the path-level ones.
fn build_parameters(
    swagger: &SwaggerV2,
    options: &PrepareOptions<'_>,
    op: &Operation,
    item: &PathItem,
) -> Result<Vec<ParameterView>, TransformError> {
    let mut parameters = Vec::new();
    for entry in op.parameters.iter().chain(&item.parameters) {
        if is_entry_skipped(entry) {
            continue;
        }
        let parameter = resolve_parameter(swagger, entry)?;
        if is_skipped(parameter) {
            continue;
        }
        let location = parameter
            .location
            .as_deref()
            .and_then(ParameterLocation::from_in);
        let computed = options.compute_type(SchemaNode::Parameter(parameter), swagger);
        push_parameter(
            &mut parameters,
            enrich_parameter(parameter, location, computed),
        );
    }
    Ok(parameters)
}

/// Every response in declaration order, plus the return type: the first
/// success response carrying a schema, else the caller's default type.
fn select_responses(
    swagger: &SwaggerV2,
    options: &PrepareOptions<'_>,
    op: &Operation,
) -> (Vec<ResponseView>, Option<ReturnView>) {
    let mut responses = Vec::with_capacity(op.responses.len());
    let mut return_type = None;

    for (code, response) in &op.responses {
        responses.push(ResponseView {
            response_code: code.clone(),
            response: response.clone(),
        });
        if return_type.is_some() || !is_success_code(code) {
            continue;
        }
        if let Some(ref schema) = response.schema {
            return_type = Some(ReturnView::Schema(SchemaView {
                schema: schema.clone(),
                computed: options.compute_type(SchemaNode::Schema(schema), swagger),
            }));
        }
    }

    if return_type.is_none() {
        return_type = options.default_type.clone().map(ReturnView::Default);
    }
    (responses, return_type)
}
