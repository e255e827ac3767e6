use crate::parse::parameter::ParameterLocation;
use crate::parse::v1::{Api, OperationV1, SwaggerV1};
use crate::view::{Header, Method, ParameterView, ViewModel};

use super::PrepareOptions;
use super::name_normalizer::{MethodNames, normalize_name, path_to_method_name};
use super::parameters::{enrich_parameter, is_skipped, push_parameter, sort_parameter_by_in};
use super::security::{SecurityFlags, operation_security_v1};

/// Transform a Swagger 1.x document into the view model.
///
/// 1.x documents carry no per-status responses, tags or shared definitions,
/// so methods get neither a return type nor tag grouping.
pub fn view_for_swagger1(swagger: &SwaggerV1, options: &PrepareOptions<'_>) -> ViewModel {
    let mut names = MethodNames::new();
    let mut methods: Vec<Method> = Vec::new();
    let mut security = SecurityFlags::default();

    for api in &swagger.apis {
        let mut opens_path = true;
        for op in &api.operations {
            if op.method.eq_ignore_ascii_case("OPTIONS") {
                log::trace!("skipping OPTIONS {}", api.path);
                continue;
            }
            let mut method = build_method(swagger, options, &mut names, api, op);
            method.is_first_method = methods.is_empty();
            method.not_first_path = !opens_path;
            opens_path = false;

            security.absorb(SecurityFlags {
                token: method.is_secure_token,
                api_key: method.is_secure_api_key,
                basic: method.is_secure_basic,
            });
            methods.push(method);
        }
    }

    log::debug!("prepared {} methods from Swagger 1.x", methods.len());

    ViewModel {
        description: swagger.description().map(String::from),
        module_name: options.module_name.clone(),
        class_name: options.class_name.clone(),
        imports: options.imports.clone(),
        domain: swagger.base_path.clone().unwrap_or_default(),
        is_secure: swagger.authorizations.is_some(),
        is_secure_token: security.token,
        is_secure_api_key: security.api_key,
        is_secure_basic: security.basic,
        methods,
        definitions: Vec::new(),
        swagger2: None,
    }
}

fn build_method(
    swagger: &SwaggerV1,
    options: &PrepareOptions<'_>,
    names: &mut MethodNames,
    api: &Api,
    op: &OperationV1,
) -> Method {
    let raw_name = match op.nickname {
        Some(ref nickname) => normalize_name(nickname),
        None => path_to_method_name(&op.method, &api.path),
    };
    let verb = op.method.to_uppercase();

    let mut parameters = build_parameters(options, op);
    let by_in = sort_parameter_by_in(&mut parameters);
    let security = operation_security_v1(swagger, op);

    Method {
        path: api.path.clone(),
        class_name: options.class_name.clone(),
        method_name: names.claim(raw_name),
        is_get: verb == "GET",
        is_post: verb == "POST",
        method: verb,
        summary: op.summary.clone(),
        is_secure: op.authorizations.is_some(),
        is_secure_token: security.token,
        is_secure_api_key: security.api_key,
        is_secure_basic: security.basic,
        parameters,
        by_in,
        headers: build_headers(op),
        ..Default::default()
    }
}

/// `Accept` lists each produced type quoted on its own: `'a', 'b'`.
fn build_headers(op: &OperationV1) -> Vec<Header> {
    op.produces
        .iter()
        .map(|produces| Header {
            name: "Accept".to_string(),
            value: produces
                .iter()
                .map(|value| format!("'{value}'"))
                .collect::<Vec<_>>()
                .join(", "),
        })
        .collect()
}

fn build_parameters(options: &PrepareOptions<'_>, op: &OperationV1) -> Vec<ParameterView> {
    let mut parameters = Vec::new();
    for parameter in &op.parameters {
        if is_skipped(parameter) {
            continue;
        }
        let location = parameter
            .param_type
            .as_deref()
            .and_then(ParameterLocation::from_param_type);
        push_parameter(
            &mut parameters,
            enrich_parameter(parameter, location, options.no_type()),
        );
    }
    parameters
}
