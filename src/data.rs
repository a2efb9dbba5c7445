//! Deep copies and structural comparison of plain nested data.
//!
//! "Plain data" here means anything that serializes to JSON: maps,
//! sequences, strings, numbers, booleans, and null.

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Makes a fully independent copy of `value` by passing it through a plain
/// data tree.
///
/// Unlike `Clone`, shared handles such as `Arc` or `Rc` inside `value` are not
/// shared with the copy.
///
/// # Errors
///
/// Returns [`Error::Serialization`](crate::Error::Serialization) if the type
/// does not survive the round trip (for example maps with non-string keys).
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use std::sync::Arc;
///
/// let original: BTreeMap<String, Arc<Vec<u32>>> =
///     [("ids".to_string(), Arc::new(vec![1, 2, 3]))].into_iter().collect();
/// let copy = utilkit::deep_clone(&original)?;
///
/// assert_eq!(copy, original);
/// assert!(!Arc::ptr_eq(&copy["ids"], &original["ids"]));
/// # Ok::<(), utilkit::Error>(())
/// ```
pub fn deep_clone<T>(value: &T) -> Result<T>
where
    T: Serialize + DeserializeOwned,
{
    let tree = serde_json::to_value(value)?;
    Ok(serde_json::from_value(tree)?)
}

/// Compares two JSON values structurally.
///
/// Objects are equal when they have the same keys with equal values, in any
/// order. Arrays compare element by element. Numbers compare by value, so `1`
/// equals `1.0`.
///
/// ```rust
/// use serde_json::json;
///
/// assert!(utilkit::deep_equal(&json!({"a": [1, 2], "b": null}), &json!({"b": null, "a": [1.0, 2]})));
/// assert!(!utilkit::deep_equal(&json!([1, 2]), &json!([2, 1])));
/// ```
#[must_use]
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => {
            if let (Some(x), Some(y)) = (x.as_i64(), y.as_i64()) {
                x == y
            } else if let (Some(x), Some(y)) = (x.as_u64(), y.as_u64()) {
                x == y
            } else {
                x.as_f64() == y.as_f64()
            }
        }
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(x, y)| deep_equal(x, y))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x
                    .iter()
                    .all(|(key, x)| y.get(key).is_some_and(|y| deep_equal(x, y)))
        }
        _ => false,
    }
}

/// Structurally compares any two serializable values, even of different
/// types.
///
/// # Errors
///
/// Returns [`Error::Serialization`](crate::Error::Serialization) if either
/// side cannot be represented as plain data.
///
/// ```rust
/// #[derive(serde::Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let map: std::collections::HashMap<&str, f64> = [("x", 1.0), ("y", 2.0)].into_iter().collect();
/// assert!(utilkit::deep_equal_serialized(&Point { x: 1, y: 2 }, &map)?);
/// # Ok::<(), utilkit::Error>(())
/// ```
pub fn deep_equal_serialized<A, B>(a: &A, b: &B) -> Result<bool>
where
    A: Serialize + ?Sized,
    B: Serialize + ?Sized,
{
    Ok(deep_equal(
        &serde_json::to_value(a)?,
        &serde_json::to_value(b)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Settings {
        theme: String,
        volume: u8,
        recent: Vec<String>,
        parent: Option<Box<Settings>>,
    }

    #[test]
    fn test_deep_clone_nested_struct() {
        let settings = Settings {
            theme: "dark".to_string(),
            volume: 7,
            recent: vec!["a.txt".to_string()],
            parent: Some(Box::new(Settings {
                theme: "light".to_string(),
                volume: 3,
                recent: vec![],
                parent: None,
            })),
        };
        assert_eq!(deep_clone(&settings).unwrap(), settings);
    }

    #[test]
    fn test_deep_equal_mismatches() {
        assert!(!deep_equal(&json!({"a": 1}), &json!({"a": 1, "b": 2})));
        assert!(!deep_equal(&json!({"a": 1}), &json!({"b": 1})));
        assert!(!deep_equal(&json!([1]), &json!({"0": 1})));
        assert!(!deep_equal(&json!(null), &json!(false)));
        assert!(!deep_equal(&json!("1"), &json!(1)));
    }

    #[test]
    fn test_deep_equal_numbers() {
        assert!(deep_equal(&json!(-3), &json!(-3.0)));
        assert!(deep_equal(&json!(u64::MAX), &json!(u64::MAX)));
        assert!(!deep_equal(&json!(u64::MAX), &json!(u64::MAX - 1)));
    }
}
