use std::collections::HashSet;

use heck::ToLowerCamelCase;

/// Make an explicit operation id safe as an identifier: `.`, `-`, `{` and `}`
/// become `_`.
pub fn normalize_name(id: &str) -> String {
    id.chars()
        .map(|ch| match ch {
            '.' | '-' | '{' | '}' => '_',
            other => other,
        })
        .collect()
}

/// camelCase form of a parameter name (`pet-id` → `petId`, `page2size` →
/// `page2Size`).
pub fn camel_case_name(name: &str) -> String {
    split_digit_runs(name).to_lower_camel_case()
}

/// Put a word break between letters and digits, so `v2beta` camel-cases as
/// `v2Beta` rather than one word.
fn split_digit_runs(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 4);
    let mut prev: Option<char> = None;
    for ch in input.chars() {
        if prev.is_some_and(|p| {
            (p.is_ascii_digit() && ch.is_alphabetic()) || (p.is_alphabetic() && ch.is_ascii_digit())
        }) {
            out.push('_');
        }
        out.push(ch);
        prev = Some(ch);
    }
    out
}

/// Derive a method name from an HTTP verb and URL template.
///
/// Examples:
/// - `GET /users/{id}/posts` → `getUsersByIdPosts`
/// - `POST /pets/` → `postPets`
/// - `GET /` → `GET` (the verb, verbatim)
pub fn path_to_method_name(method: &str, path: &str) -> String {
    if path.is_empty() || path == "/" {
        return method.to_string();
    }

    let clean_path = path.strip_suffix('/').unwrap_or(path);
    let segments: Vec<String> = clean_path.split('/').skip(1).map(rewrite_segment).collect();
    let rest = split_digit_runs(&segments.join("-")).to_lower_camel_case();

    let verb = method.to_lowercase();
    let mut chars = rest.chars();
    match chars.next() {
        Some(first) => format!("{verb}{}{}", first.to_uppercase(), chars.as_str()),
        None => verb,
    }
}

/// `{petId}` → `byPetId`; literal segments pass through.
fn rewrite_segment(segment: &str) -> String {
    match segment
        .strip_prefix('{')
        .and_then(|inner| inner.strip_suffix('}'))
    {
        Some(variable) => {
            let mut chars = variable.chars();
            match chars.next() {
                Some(first) => format!("by{}{}", first.to_uppercase(), chars.as_str()),
                None => "by".to_string(),
            }
        }
        None => segment.to_string(),
    }
}

/// Method names already handed out during one transform call.
#[derive(Debug, Default)]
pub struct MethodNames {
    seen: HashSet<String>,
}

impl MethodNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve `name`, suffixing `_1`, `_2`, … until it is unused.
    pub fn claim(&mut self, name: String) -> String {
        if !self.seen.contains(&name) {
            self.seen.insert(name.clone());
            return name;
        }
        let mut i = 1;
        loop {
            let candidate = format!("{name}_{i}");
            if !self.seen.contains(&candidate) {
                log::debug!("method name `{name}` already taken, using `{candidate}`");
                self.seen.insert(candidate.clone());
                return candidate;
            }
            i += 1;
        }
    }
}
