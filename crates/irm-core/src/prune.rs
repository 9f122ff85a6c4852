use crate::node::{NodeKind, classify};
use serde_json::{Map, Value};

/// Rebuild `value` with every object whose `integrity` equals the target
/// removed. `None` is the removal signal to the caller: a pruned array
/// element is omitted (the array shortens), a pruned property loses its key
/// entirely, and a pruned root yields `None` outright. Scalars and null pass
/// through unchanged and never become `None`.
pub fn prune_resources(value: &Value, integrity: &str) -> Option<Value> {
    match classify(value) {
        NodeKind::Array(items) => Some(Value::Array(
            items
                .iter()
                .filter_map(|item| prune_resources(item, integrity))
                .collect(),
        )),
        NodeKind::Resource {
            integrity: found, ..
        } if found == integrity => None,
        NodeKind::Resource { fields, .. } | NodeKind::Object(fields) => {
            let mut out = Map::new();
            for (key, val) in fields {
                if let Some(kept) = prune_resources(val, integrity) {
                    out.insert(key.clone(), kept);
                }
            }
            Some(Value::Object(out))
        }
        NodeKind::Leaf => Some(value.clone()),
    }
}
