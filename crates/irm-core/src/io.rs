use crate::node::ResourceMap;
use serde_json::Value;
use std::fs;
use std::path::Path;

pub fn load_json_file(path: &Path) -> Result<Value, String> {
    let data = fs::read(path).map_err(|e| e.to_string())?;
    serde_json::from_slice(&data).map_err(|e| e.to_string())
}

pub fn write_json_file(path: &Path, value: &Value) -> Result<(), String> {
    let s = serde_json::to_string_pretty(value).map_err(|e| e.to_string())?;
    fs::write(path, s).map_err(|e| e.to_string())
}

/// Load a resource table file: a JSON object whose every value is itself an
/// object. Shape is checked here because the in-memory table type cannot
/// hold anything else.
pub fn load_resource_map_file(path: &Path) -> Result<ResourceMap, String> {
    let value = load_json_file(path)?;
    let Value::Object(entries) = value else {
        return Err("resource map file must be a JSON object".to_string());
    };
    let mut map = ResourceMap::new();
    for (integrity, entry) in entries {
        match entry {
            Value::Object(fields) => {
                map.insert(integrity, fields);
            }
            _ => return Err(format!("resource map entry is not an object: {}", integrity)),
        }
    }
    Ok(map)
}
