//! Dot-path access into JSON records
//!
//! Tables and forms work on `serde_json::Value` so they stay independent of
//! entity shape. Keys like `district.title` walk nested objects.

use halqa_core::{ID_FIELD, TITLE_FIELD};
use serde_json::Value;

/// Resolve a dot-separated path against a record
///
/// Returns `None` when any segment is missing or a non-object is traversed.
pub fn lookup<'a>(record: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return Some(record);
    }
    path.split('.')
        .try_fold(record, |current, segment| current.as_object()?.get(segment))
}

/// Stringify a value the way a table cell shows it
///
/// Objects collapse to their title (or id); arrays join their items.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(value_text)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(map) => map
            .get(TITLE_FIELD)
            .or_else(|| map.get(ID_FIELD))
            .map(value_text)
            .unwrap_or_default(),
    }
}

/// Stringified value at `path`, empty when absent
pub fn text_at(record: &Value, path: &str) -> String {
    lookup(record, path).map(value_text).unwrap_or_default()
}

/// Id carried by a reference value
///
/// Accepts both populated references (`{"_id": "d1", ...}`) and bare ids.
pub fn reference_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Object(map) => map.get(ID_FIELD).and_then(reference_id),
        _ => None,
    }
}

/// Value a filter compares against
///
/// References compare by id so `district` matches populated and bare
/// references alike; everything else compares by its text.
pub fn filter_value(value: &Value) -> String {
    match value {
        Value::Object(_) => reference_id(value).unwrap_or_default(),
        other => value_text(other),
    }
}

/// Id of the record itself (`_id`, falling back to `id`)
pub fn record_id(record: &Value) -> String {
    lookup(record, ID_FIELD)
        .or_else(|| lookup(record, "id"))
        .and_then(reference_id)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_lookup_nested() {
        let area = json!({"title": "Zone A", "district": {"_id": "d1", "title": "North"}});
        assert_eq!(lookup(&area, "district.title"), Some(&json!("North")));
        assert_eq!(lookup(&area, "district.code"), None);
        assert_eq!(lookup(&area, "title.length"), None);
    }

    #[test]
    fn test_value_text() {
        assert_eq!(value_text(&json!(null)), "");
        assert_eq!(value_text(&json!(42)), "42");
        assert_eq!(value_text(&json!({"_id": "d1", "title": "North"})), "North");
        assert_eq!(value_text(&json!({"_id": "d1"})), "d1");
        assert_eq!(value_text(&json!(["a", null, "b"])), "a, b");
    }

    #[test]
    fn test_reference_id_accepts_both_shapes() {
        assert_eq!(reference_id(&json!("d1")), Some("d1".to_string()));
        assert_eq!(reference_id(&json!({"_id": "d1", "title": "North"})), Some("d1".to_string()));
        assert_eq!(reference_id(&json!("")), None);
        assert_eq!(reference_id(&json!(null)), None);
    }

    #[test]
    fn test_filter_value_uses_reference_ids() {
        assert_eq!(filter_value(&json!({"_id": "d1", "title": "North"})), "d1");
        assert_eq!(filter_value(&json!("d1")), "d1");
        assert_eq!(filter_value(&json!("admin")), "admin");
    }

    #[test]
    fn test_record_id_fallback() {
        assert_eq!(record_id(&json!({"_id": "a1"})), "a1");
        assert_eq!(record_id(&json!({"id": 7})), "7");
        assert_eq!(record_id(&json!({"title": "x"})), "");
    }
}
