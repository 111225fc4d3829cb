//! Recursive merge of nested JSON mappings
//!
//! `dict_join` overlays one mapping on another. Nested mappings present on
//! both sides are merged key by key; any other overlapping value is
//! replaced by the override. A key holding a mapping on one side and a
//! non-mapping on the other is a hard [`Error::TypeMismatch`].
//!
//! Output keeps base keys in their original order, followed by keys only the
//! override has. Owned `serde_json` values form strict trees, so the
//! recursion always terminates.

use crate::errors::{Error, Result};
use serde_json::{Map, Value};
use std::borrow::Cow;

/// Merge `override_map` into `base`.
///
/// When the override is absent or empty the result is `Cow::Borrowed(base)`:
/// the caller gets the very same mapping back, not a copy. Convert with
/// `into_owned` before mutating if independence from `base` matters.
///
/// ```
/// use physocts_core::dict_join;
/// use serde_json::json;
///
/// let base = json!({"a": 1, "b": {"x": 1}});
/// let over = json!({"b": {"y": 2}, "c": 3});
/// let merged = dict_join(
///     base.as_object().unwrap(),
///     over.as_object(),
/// ).unwrap();
/// assert_eq!(
///     serde_json::Value::Object(merged.into_owned()),
///     json!({"a": 1, "b": {"x": 1, "y": 2}, "c": 3}),
/// );
/// ```
pub fn dict_join<'a>(
    base: &'a Map<String, Value>,
    override_map: Option<&Map<String, Value>>,
) -> Result<Cow<'a, Map<String, Value>>> {
    match override_map {
        Some(over) if !over.is_empty() => merge(base, over).map(Cow::Owned),
        _ => Ok(Cow::Borrowed(base)),
    }
}

/// [`dict_join`] over arbitrary JSON values.
///
/// Both operands must be objects; anything else is rejected with
/// [`Error::NotAMapping`]. A `null` override counts as absent.
pub fn dict_join_values<'a>(
    base: &'a Value,
    override_value: Option<&Value>,
) -> Result<Cow<'a, Value>> {
    let base_map = base
        .as_object()
        .ok_or_else(|| Error::not_a_mapping("base", base.clone()))?;

    let over_map = match override_value {
        None | Some(Value::Null) => None,
        Some(Value::Object(map)) => Some(map),
        Some(other) => return Err(Error::not_a_mapping("override", other.clone())),
    };

    Ok(match dict_join(base_map, over_map)? {
        Cow::Borrowed(_) => Cow::Borrowed(base),
        Cow::Owned(merged) => Cow::Owned(Value::Object(merged)),
    })
}

/// Owning variant of [`dict_join`]; consumes both maps and never clones
/// the base.
pub fn dict_join_owned(
    mut base: Map<String, Value>,
    override_map: Option<Map<String, Value>>,
) -> Result<Map<String, Value>> {
    let Some(over) = override_map else {
        return Ok(base);
    };

    for (key, over_value) in over {
        match base.get_mut(&key) {
            None => {
                base.insert(key, over_value);
            }
            Some(slot) => {
                let base_value = std::mem::take(slot);
                *slot = join_entry(&key, base_value, over_value)?;
            }
        }
    }
    Ok(base)
}

fn merge(base: &Map<String, Value>, over: &Map<String, Value>) -> Result<Map<String, Value>> {
    let mut out = Map::with_capacity(base.len() + over.len());

    for (key, base_value) in base {
        let value = match over.get(key) {
            None => base_value.clone(),
            Some(over_value) => match (base_value, over_value) {
                (Value::Object(b), Value::Object(o)) => Value::Object(merge(b, o)?),
                (Value::Object(_), _) | (_, Value::Object(_)) => {
                    return Err(Error::type_mismatch(
                        key.clone(),
                        base_value.clone(),
                        over_value.clone(),
                    ));
                }
                (_, _) => over_value.clone(),
            },
        };
        out.insert(key.clone(), value);
    }

    for (key, over_value) in over {
        if !base.contains_key(key) {
            out.insert(key.clone(), over_value.clone());
        }
    }

    Ok(out)
}

fn join_entry(key: &str, base_value: Value, over_value: Value) -> Result<Value> {
    match (base_value, over_value) {
        (Value::Object(b), Value::Object(o)) => Ok(Value::Object(dict_join_owned(b, Some(o))?)),
        (b @ Value::Object(_), o) | (b, o @ Value::Object(_)) => {
            Err(Error::type_mismatch(key, b, o))
        }
        (_, o) => Ok(o),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("not an object: {other}"),
        }
    }

    #[test]
    fn test_merges_nested_mappings() {
        let base = obj(json!({"a": 1, "b": {"x": 1}}));
        let over = obj(json!({"b": {"y": 2}, "c": 3}));

        let merged = dict_join(&base, Some(&over)).unwrap().into_owned();
        assert_eq!(Value::Object(merged), json!({"a": 1, "b": {"x": 1, "y": 2}, "c": 3}));
    }

    #[test]
    fn test_override_replaces_leaf_values() {
        let base = obj(json!({"d": 1, "a": {"aa": 11, "ab": 12}, "b": 2}));
        let over = obj(json!({"d": 1, "a": {"ab": -12}, "c": 3}));

        let merged = dict_join(&base, Some(&over)).unwrap().into_owned();
        assert_eq!(
            Value::Object(merged),
            json!({"d": 1, "a": {"aa": 11, "ab": -12}, "b": 2, "c": 3})
        );
    }

    #[test]
    fn test_keeps_base_order_then_new_keys() {
        let base = obj(json!({"z": 1, "m": 2}));
        let over = obj(json!({"a": 0, "z": 9}));

        let merged = dict_join(&base, Some(&over)).unwrap();
        let keys: Vec<&str> = merged.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "m", "a"]);
    }

    #[test]
    fn test_absent_or_empty_override_returns_base_itself() {
        let base = obj(json!({"a": 1}));

        let same = dict_join(&base, None).unwrap();
        assert!(matches!(same, Cow::Borrowed(b) if std::ptr::eq(b, &base)));

        let empty = Map::new();
        let same = dict_join(&base, Some(&empty)).unwrap();
        assert!(matches!(same, Cow::Borrowed(b) if std::ptr::eq(b, &base)));
    }

    #[test]
    fn test_mapping_against_scalar_is_a_type_mismatch() {
        let base = obj(json!({"a": {"x": 1}}));
        let over = obj(json!({"a": 5}));

        match dict_join(&base, Some(&over)) {
            Err(Error::TypeMismatch {
                key,
                base,
                override_value,
            }) => {
                assert_eq!(key, "a");
                assert_eq!(base, json!({"x": 1}));
                assert_eq!(override_value, json!(5));
            }
            other => panic!("expected a type mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_scalar_against_mapping_is_also_a_type_mismatch() {
        let base = obj(json!({"a": 5}));
        let over = obj(json!({"a": {"x": 1}}));

        let err = dict_join(&base, Some(&over)).unwrap_err();
        assert!(err.to_string().contains("key 'a'"));
    }

    #[test]
    fn test_mismatch_deep_in_the_tree_names_the_inner_key() {
        let base = obj(json!({"outer": {"inner": {"x": 1}}}));
        let over = obj(json!({"outer": {"inner": [1, 2]}}));

        match dict_join(&base, Some(&over)) {
            Err(Error::TypeMismatch { key, .. }) => assert_eq!(key, "inner"),
            other => panic!("expected a type mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_values_variant_rejects_non_objects() {
        let base = json!([1, 2]);
        assert!(matches!(
            dict_join_values(&base, None),
            Err(Error::NotAMapping { side: "base", .. })
        ));

        let base = json!({"a": 1});
        assert!(matches!(
            dict_join_values(&base, Some(&json!("text"))),
            Err(Error::NotAMapping { side: "override", .. })
        ));

        let same = dict_join_values(&base, Some(&Value::Null)).unwrap();
        assert!(matches!(same, Cow::Borrowed(b) if std::ptr::eq(b, &base)));
    }

    #[test]
    fn test_owned_variant_agrees_with_borrowed() {
        let base = obj(json!({"a": 1, "b": {"x": 1, "y": {"k": true}}}));
        let over = obj(json!({"b": {"y": {"k": false, "j": null}}, "c": [3]}));

        let borrowed = dict_join(&base, Some(&over)).unwrap().into_owned();
        let owned = dict_join_owned(base, Some(over)).unwrap();
        assert_eq!(borrowed, owned);
    }
}
