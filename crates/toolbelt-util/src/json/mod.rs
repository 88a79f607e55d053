//! Recursive merging of JSON documents.

use serde_json::{Map, Value};

/// ## Summary
/// Merges `incoming` into `original` in place.
///
/// Keys only in `incoming` are added. Keys in both whose values are objects on
/// both sides are merged recursively; otherwise the incoming value replaces the
/// original one. Keys only in `original` are left as they are.
pub fn merge(original: &mut Map<String, Value>, incoming: &Map<String, Value>) {
    for (key, new_value) in incoming {
        match (original.get_mut(key), new_value) {
            (Some(Value::Object(existing)), Value::Object(nested)) => merge(existing, nested),
            _ => {
                original.insert(key.clone(), new_value.clone());
            }
        }
    }
}

/// ## Summary
/// Value-level form of [`merge`].
///
/// Two objects are merged recursively; any other pair replaces `original`
/// with a clone of `incoming`.
pub fn merge_value(original: &mut Value, incoming: &Value) {
    match (original, incoming) {
        (Value::Object(existing), Value::Object(nested)) => merge(existing, nested),
        (slot, _) => *slot = incoming.clone(),
    }
}
