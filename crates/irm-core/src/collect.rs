use crate::node::{NodeKind, ResourceMap, classify};
use serde_json::Value;

/// Collect every integrity-keyed object in `value` into a fresh table.
pub fn collect_resource_map(value: &Value) -> ResourceMap {
    let mut map = ResourceMap::new();
    collect_resource_map_into(value, &mut map);
    map
}

/// Same as [`collect_resource_map`], but accumulates into a caller-supplied
/// table so several roots can feed one table. A resource is recorded before
/// its children are visited, so when two nodes share an integrity value the
/// later visit overwrites the earlier entry.
pub fn collect_resource_map_into(value: &Value, map: &mut ResourceMap) {
    match classify(value) {
        NodeKind::Array(items) => {
            for item in items {
                collect_resource_map_into(item, map);
            }
        }
        NodeKind::Resource { integrity, fields } => {
            map.insert(integrity.to_string(), fields.clone());
            // A collected resource may still contain further resources.
            for child in fields.values() {
                collect_resource_map_into(child, map);
            }
        }
        NodeKind::Object(fields) => {
            for child in fields.values() {
                collect_resource_map_into(child, map);
            }
        }
        NodeKind::Leaf => {}
    }
}
