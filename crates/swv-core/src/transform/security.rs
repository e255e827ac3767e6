use std::collections::HashSet;

use indexmap::IndexMap;

use crate::parse::operation::Operation;
use crate::parse::security::{SecurityRequirement, SecurityScheme, SecuritySchemeType};
use crate::parse::spec::SwaggerV2;
use crate::parse::v1::{OperationV1, SwaggerV1};

/// Which scheme kinds an operation (or, accumulated, a document) uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SecurityFlags {
    pub token: bool,
    pub api_key: bool,
    pub basic: bool,
}

impl SecurityFlags {
    pub fn from_types<I: IntoIterator<Item = SecuritySchemeType>>(types: I) -> Self {
        let mut flags = Self::default();
        for scheme_type in types {
            match scheme_type {
                SecuritySchemeType::OAuth2 => flags.token = true,
                SecuritySchemeType::ApiKey => flags.api_key = true,
                SecuritySchemeType::Basic => flags.basic = true,
                SecuritySchemeType::Other => {}
            }
        }
        flags
    }

    /// Sticky OR: once set, a flag is never cleared.
    pub fn absorb(&mut self, other: SecurityFlags) {
        self.token |= other.token;
        self.api_key |= other.api_key;
        self.basic |= other.basic;
    }
}

/// Merge operation requirements onto document requirements index by index:
/// the operation's keys override or extend the document's at the same
/// position, and scope lists merge the same way.
pub fn merge_requirements(
    document: &[SecurityRequirement],
    operation: &[SecurityRequirement],
) -> Vec<SecurityRequirement> {
    let mut merged = document.to_vec();
    for (i, requirement) in operation.iter().enumerate() {
        match merged.get_mut(i) {
            Some(target) => {
                for (name, scopes) in requirement {
                    let entry = target.entry(name.clone()).or_default();
                    for (j, scope) in scopes.iter().enumerate() {
                        match entry.get_mut(j) {
                            Some(slot) => slot.clone_from(scope),
                            None => entry.push(scope.clone()),
                        }
                    }
                }
            }
            None => merged.push(requirement.clone()),
        }
    }
    merged
}

/// Flags for the schemes among `definitions` whose names appear in `names`.
fn flags_for_names(
    names: &HashSet<&str>,
    definitions: &IndexMap<String, SecurityScheme>,
) -> SecurityFlags {
    SecurityFlags::from_types(
        definitions
            .iter()
            .filter(|(name, _)| names.contains(name.as_str()))
            .map(|(_, scheme)| scheme.scheme_type),
    )
}

/// Resolve the scheme kinds a Swagger 2.0 operation requires.
pub fn operation_security_v2(swagger: &SwaggerV2, op: &Operation) -> SecurityFlags {
    if swagger.security_definitions.is_none() && op.security.is_none() {
        return SecurityFlags::default();
    }
    let merged = merge_requirements(
        swagger.security.as_deref().unwrap_or_default(),
        op.security.as_deref().unwrap_or_default(),
    );
    let names: HashSet<&str> = merged
        .iter()
        .flat_map(|requirement| requirement.keys())
        .map(String::as_str)
        .collect();
    match swagger.security_definitions {
        Some(ref definitions) => flags_for_names(&names, definitions),
        None => SecurityFlags::default(),
    }
}

/// Whether a Swagger 2.0 operation is secured at all, resolvable or not.
pub fn is_secure_v2(swagger: &SwaggerV2, op: &Operation) -> bool {
    swagger.security.is_some() || op.security.is_some()
}

/// Resolve the scheme kinds a Swagger 1.x operation's `authorizations` select.
pub fn operation_security_v1(swagger: &SwaggerV1, op: &OperationV1) -> SecurityFlags {
    match (&swagger.authorizations, &op.authorizations) {
        (Some(definitions), Some(selected)) => {
            let names: HashSet<&str> = selected.keys().map(String::as_str).collect();
            flags_for_names(&names, definitions)
        }
        _ => SecurityFlags::default(),
    }
}
