use serde_json::{Map, Value};

/// A JSON schema node, kept opaque and in declaration order.
pub type Schema = Map<String, Value>;
