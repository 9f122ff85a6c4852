use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Reserved field name whose presence marks an object as a sub-resource.
pub const INTEGRITY_KEY: &str = "integrity";

/// Lookup table from integrity value to the fields of the object carrying it.
///
/// Values are object field maps by construction, so a table can never hold a
/// non-object replacement. Inserting under an existing key overwrites.
pub type ResourceMap = BTreeMap<String, Map<String, Value>>;

/// Shape of a value as seen by the traversals, decided by inspecting the
/// value at runtime. No schema is assumed.
#[derive(Debug, Clone, Copy)]
pub enum NodeKind<'a> {
    /// Ordered sequence; traversed element by element, order preserved.
    Array(&'a Vec<Value>),
    /// Object whose own `integrity` field holds a string.
    Resource {
        integrity: &'a str,
        fields: &'a Map<String, Value>,
    },
    /// Object without a string `integrity` field.
    Object(&'a Map<String, Value>),
    /// Scalar or null; never traversed into.
    Leaf,
}

pub fn classify(value: &Value) -> NodeKind<'_> {
    match value {
        Value::Array(items) => NodeKind::Array(items),
        Value::Object(fields) => match fields.get(INTEGRITY_KEY).and_then(Value::as_str) {
            Some(integrity) => NodeKind::Resource { integrity, fields },
            None => NodeKind::Object(fields),
        },
        _ => NodeKind::Leaf,
    }
}
