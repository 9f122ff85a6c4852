use crate::node::{NodeKind, ResourceMap, classify};
use serde_json::{Map, Value};

/// Rebuild `value` with table entries shallow-merged over any object whose
/// integrity value has one. The input is never mutated; scalars are cloned
/// as-is, arrays keep their length and order.
pub fn patch_resources(value: &Value, map: &ResourceMap) -> Value {
    match classify(value) {
        NodeKind::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| patch_resources(item, map))
                .collect(),
        ),
        NodeKind::Resource { integrity, fields } => match map.get(integrity) {
            // Replacement fields win on conflicting keys and are inserted
            // as-is: neither the original's fields nor the replacement's are
            // patched any further inside a merge.
            Some(replacement) => {
                let mut merged = fields.clone();
                for (key, val) in replacement {
                    merged.insert(key.clone(), val.clone());
                }
                Value::Object(merged)
            }
            None => rebuild_object(fields, map),
        },
        NodeKind::Object(fields) => rebuild_object(fields, map),
        NodeKind::Leaf => value.clone(),
    }
}

fn rebuild_object(fields: &Map<String, Value>, map: &ResourceMap) -> Value {
    let mut out = Map::new();
    for (key, val) in fields {
        out.insert(key.clone(), patch_resources(val, map));
    }
    Value::Object(out)
}
