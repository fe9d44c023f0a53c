//! Rule tree merging.
//!
//! The default tree defines the complete recognized schema. Overrides may
//! narrow or replace existing fields but never introduce new ones: keys
//! unknown to the default are dropped. Lists merge positionally and the
//! override list's length wins, so an empty override list clears the
//! default list rather than appending to it.

use serde_json::{Map, Value};

/// Merge an optional override tree onto the default tree.
pub fn merge(default: Value, override_tree: Option<Value>) -> Value {
    match override_tree {
        Some(tree) => merge_trees(default, tree),
        None => default,
    }
}

/// Deep-merge `override_tree` onto `default`.
///
/// Objects merge key-by-key, lists merge positionally, and everything else
/// (scalars, or any type mismatch) resolves to the override value
/// wholesale.
pub fn merge_trees(default: Value, override_tree: Value) -> Value {
    match (default, override_tree) {
        (Value::Object(default_map), Value::Object(override_map)) => {
            Value::Object(merge_objects(default_map, override_map))
        }
        (Value::Array(default_items), Value::Array(override_items)) => {
            Value::Array(merge_arrays(default_items, override_items))
        }
        (_, override_value) => override_value,
    }
}

fn merge_objects(
    mut default: Map<String, Value>,
    override_map: Map<String, Value>,
) -> Map<String, Value> {
    for (key, override_value) in override_map {
        // Keys absent from the default schema are dropped.
        if let Some(default_value) = default.remove(&key) {
            default.insert(key, merge_trees(default_value, override_value));
        }
    }
    default
}

/// Positional list merge: the result has exactly the override list's
/// length. Elements paired with a default object recurse-merge; all others
/// are taken from the override as-is.
fn merge_arrays(default_items: Vec<Value>, override_items: Vec<Value>) -> Vec<Value> {
    let mut defaults = default_items.into_iter();
    override_items
        .into_iter()
        .map(|override_item| match (defaults.next(), override_item) {
            (Some(Value::Object(default_obj)), Value::Object(override_obj)) => {
                Value::Object(merge_objects(default_obj, override_obj))
            }
            (_, item) => item,
        })
        .collect()
}
