//! Recursive adjustment over JSON data stores
//!
//! Walks a JSON tree and rewrites every leaf that satisfies a condition,
//! preserving object keys, array order, and untouched values.

use serde_json::Value;

/// Apply `adjust` to every leaf for which `condition` holds.
///
/// Objects and arrays are traversed; all other values are leaves. The input
/// is consumed and a new tree returned.
pub fn adjust_recursively<C, A>(data: Value, condition: &C, adjust: &A) -> Value
where
    C: Fn(&Value) -> bool,
    A: Fn(Value) -> Value,
{
    match data {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (k, adjust_recursively(v, condition, adjust)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| adjust_recursively(item, condition, adjust))
                .collect(),
        ),
        leaf => {
            if condition(&leaf) {
                adjust(leaf)
            } else {
                leaf
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn mark_dark(value: Value) -> Value {
        match value {
            Value::String(s) => Value::String(format!("adjusted_{}", s)),
            other => other,
        }
    }

    fn is_dark(value: &Value) -> bool {
        matches!(value, Value::String(s) if s.contains("dark"))
    }

    #[test]
    fn test_adjusts_matching_leaves_at_any_depth() {
        let data = json!({
            "example_key": "dark_string",
            "nested": {"inner_key": "another_dark_string"},
            "list": ["dark_item", "light_item", {"deep": "dark_deep"}]
        });

        let adjusted = adjust_recursively(data, &is_dark, &mark_dark);

        assert_eq!(adjusted["example_key"], "adjusted_dark_string");
        assert_eq!(adjusted["nested"]["inner_key"], "adjusted_another_dark_string");
        assert_eq!(adjusted["list"][0], "adjusted_dark_item");
        assert_eq!(adjusted["list"][1], "light_item");
        assert_eq!(adjusted["list"][2]["deep"], "adjusted_dark_deep");
    }

    #[test]
    fn test_untouched_tree_is_unchanged() {
        let data = json!({"a": 1, "b": ["x", {"c": true}], "d": null});
        let adjusted = adjust_recursively(data.clone(), &is_dark, &mark_dark);
        assert_eq!(adjusted, data);
    }

    #[test]
    fn test_numeric_condition() {
        let data = json!({"small": 1, "big": 100, "list": [5, 50]});
        let adjusted = adjust_recursively(
            data,
            &|v| matches!(v, Value::Number(n) if n.as_i64().unwrap_or(0) >= 50),
            &|_| json!("capped"),
        );
        assert_eq!(adjusted["small"], 1);
        assert_eq!(adjusted["big"], "capped");
        assert_eq!(adjusted["list"], json!([5, "capped"]));
    }
}
