use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::schema::Schema;

/// A Swagger 2.0 response definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,

    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// Read a status-code key the way a lenient integer parser would: leading
/// digits only, so `"200"` and `"2XX"` yield a number and `"default"` does not.
pub fn status_code(key: &str) -> Option<u64> {
    let digits: String = key
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}

/// Responses in `(0, 400)` may supply a method's return type.
pub fn is_success_code(key: &str) -> bool {
    status_code(key).is_some_and(|code| code > 0 && code < 400)
}
