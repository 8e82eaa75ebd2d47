use serde_json::Value;

/// flat, human readable rendering of a json value for table cells
pub fn value2str(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(value2str).collect::<Vec<_>>().join(", "),
        Value::Object(_) => value.to_string(),
    }
}

/// "total_vcpus" -> "total vcpus"
pub fn key2label(key: &str) -> String {
    key.replace(['_', '-'], " ")
}
