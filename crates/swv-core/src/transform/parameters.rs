use crate::error::TransformError;
use crate::parse::parameter::{Parameter, ParameterLocation, ParameterOrRef};
use crate::parse::spec::SwaggerV2;
use crate::view::{ByIn, ComputedType, ParameterView};

use super::name_normalizer::camel_case_name;

/// Name of the shared parameter a `$ref` points at: `#/parameters/limit` and
/// bare `limit` both name `limit`.
pub fn shared_parameter_name(ref_path: &str) -> &str {
    let segments: Vec<&str> = ref_path.split('/').collect();
    match segments.as_slice() {
        [single] => *single,
        [_, _, name, ..] => *name,
        _ => "",
    }
}

/// Resolve a parameter reference against the document's shared parameters.
pub fn resolve_parameter<'a>(
    swagger: &'a SwaggerV2,
    entry: &'a ParameterOrRef,
) -> Result<&'a Parameter, TransformError> {
    match entry {
        ParameterOrRef::Parameter(parameter) => Ok(&**parameter),
        ParameterOrRef::Ref { ref_path, .. } => swagger
            .parameters
            .get(shared_parameter_name(ref_path))
            .ok_or_else(|| TransformError::UnresolvedReference(ref_path.clone())),
    }
}

/// Whether a parameter entry is flagged out of bindings before resolution.
pub fn is_entry_skipped(entry: &ParameterOrRef) -> bool {
    match entry {
        ParameterOrRef::Ref { ref_path, .. } if entry.is_excluded_from_bindings() => {
            log::debug!("parameter reference `{ref_path}` excluded from bindings");
            true
        }
        ParameterOrRef::Ref { ref_path, .. } if entry.is_proxy_header() => {
            log::debug!("parameter reference `{ref_path}` is a proxy header");
            true
        }
        ParameterOrRef::Ref { .. } => false,
        ParameterOrRef::Parameter(parameter) => is_skipped(parameter),
    }
}

/// Whether a parameter is left out of generated bindings altogether.
pub fn is_skipped(parameter: &Parameter) -> bool {
    if parameter.is_excluded_from_bindings() {
        log::debug!("parameter `{}` excluded from bindings", parameter.name);
        return true;
    }
    if parameter.is_proxy_header() {
        log::debug!("parameter `{}` is a proxy header", parameter.name);
        return true;
    }
    false
}

/// Build the view of one parameter. The caller's parameter is copied, never
/// written to, so a shared parameter yields independent views per operation.
pub fn enrich_parameter(
    parameter: &Parameter,
    location: Option<ParameterLocation>,
    computed: ComputedType,
) -> ParameterView {
    let mut parameter = parameter.clone();
    let singleton = parameter.singleton().cloned();

    let pattern = match location {
        Some(ParameterLocation::Query) => parameter.name_pattern.clone(),
        _ => None,
    };
    if pattern.is_some() {
        parameter.extra.shift_remove("pattern");
    }

    ParameterView {
        camel_case_name: camel_case_name(&parameter.name),
        location,
        is_body_parameter: location == Some(ParameterLocation::Body),
        is_path_parameter: location == Some(ParameterLocation::Path),
        is_query_parameter: location == Some(ParameterLocation::Query),
        is_header_parameter: location == Some(ParameterLocation::Header),
        is_form_parameter: location == Some(ParameterLocation::FormData),
        is_singleton: singleton.is_some(),
        singleton,
        is_pattern_type: pattern.is_some(),
        pattern,
        cardinality: if parameter.required { "" } else { "?" }.to_string(),
        not_first_parameter: false,
        not_first_by_in: false,
        computed,
        parameter,
    }
}

/// Append to a method's flat parameter list, marking all but the first.
pub fn push_parameter(parameters: &mut Vec<ParameterView>, mut view: ParameterView) {
    view.not_first_parameter = !parameters.is_empty();
    parameters.push(view);
}

/// Partition parameters by location.
///
/// Marks `notFirstByIn` on every parameter after the first of its bucket (on
/// the flat list as well as in the bucket). Parameters with an unrecognized
/// location stay in the flat list but land in no bucket.
pub fn sort_parameter_by_in(parameters: &mut [ParameterView]) -> ByIn {
    let mut by_in = ByIn::default();
    for parameter in parameters.iter_mut() {
        let Some(location) = parameter.location else {
            log::trace!(
                "parameter `{}` has no recognized location, not indexed",
                parameter.parameter.name
            );
            continue;
        };
        let (bucket, has) = by_in.bucket_mut(location);
        parameter.not_first_by_in = *has;
        *has = true;
        bucket.push(parameter.clone());
    }
    by_in.has_query_and_body = by_in.has_query && by_in.has_body;
    by_in
}
