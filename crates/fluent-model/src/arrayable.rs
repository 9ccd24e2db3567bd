//! Mapping conversion and subset helpers.
//!
//! [`Arrayable`] is the "can be turned into a mapping" capability; anything
//! implementing it can feed [`Model::fill`](crate::model::Model::fill).
//! [`IntoAttributes`] is the input side of `fill`: it either yields a mapping
//! or rejects the value with [`ModelError::InvalidArgument`] before anything
//! is written.

use serde_json::{Map, Value};

use crate::error::{ModelError, Result};
use crate::fluent::Fluent;

/// A value that can export itself as a field → value mapping.
pub trait Arrayable {
    fn to_array(&self) -> Result<Map<String, Value>>;
}

impl Arrayable for Map<String, Value> {
    fn to_array(&self) -> Result<Map<String, Value>> {
        Ok(self.clone())
    }
}

impl Arrayable for Fluent {
    fn to_array(&self) -> Result<Map<String, Value>> {
        Ok(self.as_map().clone())
    }
}

/// Input accepted by `fill`.
pub trait IntoAttributes {
    fn into_attributes(self) -> Result<Map<String, Value>>;
}

impl IntoAttributes for Map<String, Value> {
    fn into_attributes(self) -> Result<Map<String, Value>> {
        Ok(self)
    }
}

impl IntoAttributes for Value {
    fn into_attributes(self) -> Result<Map<String, Value>> {
        match self {
            Value::Object(map) => Ok(map),
            other => Err(ModelError::InvalidArgument(format!(
                "expected a mapping or Arrayable, got {}",
                kind_of(&other)
            ))),
        }
    }
}

impl<T: Arrayable + ?Sized> IntoAttributes for &T {
    fn into_attributes(self) -> Result<Map<String, Value>> {
        self.to_array()
    }
}

impl<K: Into<String>, V: Into<Value>> IntoAttributes for Vec<(K, V)> {
    fn into_attributes(self) -> Result<Map<String, Value>> {
        Ok(self
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect())
    }
}

impl<K: Into<String>, V: Into<Value>, const N: usize> IntoAttributes for [(K, V); N] {
    fn into_attributes(self) -> Result<Map<String, Value>> {
        Ok(self
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect())
    }
}

impl<K: Into<String>, V: Into<Value>> IntoAttributes for std::collections::BTreeMap<K, V> {
    fn into_attributes(self) -> Result<Map<String, Value>> {
        Ok(self
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect())
    }
}

pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Keep only the entries whose key is in `keys`. Missing keys are skipped, not defaulted.
pub fn only<I, S>(map: &Map<String, Value>, keys: I) -> Map<String, Value>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let wanted: Vec<S> = keys.into_iter().collect();
    map.iter()
        .filter(|(k, _)| wanted.iter().any(|w| w.as_ref() == k.as_str()))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// Drop the entries whose key is in `keys`.
pub fn except<I, S>(map: &Map<String, Value>, keys: I) -> Map<String, Value>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let unwanted: Vec<S> = keys.into_iter().collect();
    map.iter()
        .filter(|(k, _)| !unwanted.iter().any(|w| w.as_ref() == k.as_str()))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Map<String, Value> {
        match json!({"foo": "FOO", "bar": "BAR"}) {
            Value::Object(m) => m,
            _ => unreachable!(),
        }
    }

    #[test]
    fn object_value_converts() {
        let map = json!({"a": 1}).into_attributes().unwrap();
        assert_eq!(map.get("a"), Some(&json!(1)));
    }

    #[test]
    fn scalar_values_are_rejected() {
        for bad in [json!("string"), json!(1), json!(null), json!([1, 2])] {
            let err = bad.into_attributes().unwrap_err();
            assert!(matches!(err, ModelError::InvalidArgument(_)));
        }
    }

    #[test]
    fn pairs_keep_their_order() {
        let map = vec![("z", 1), ("a", 2)].into_attributes().unwrap();
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["z", "a"]);
    }

    #[test]
    fn arrayable_reference_converts() {
        let mut fluent = Fluent::new();
        fluent.insert("foo", "FOO");
        let map = (&fluent).into_attributes().unwrap();
        assert_eq!(map, *fluent.as_map());
    }

    #[test]
    fn only_skips_missing_keys() {
        let picked = only(&sample(), ["foo", "baz"]);
        assert_eq!(picked.len(), 1);
        assert!(picked.contains_key("foo"));
    }

    #[test]
    fn except_and_only_partition() {
        let keys = ["foo"];
        let a = only(&sample(), keys);
        let b = except(&sample(), keys);
        assert!(a.keys().all(|k| !b.contains_key(k)));
        assert_eq!(a.len() + b.len(), sample().len());
    }
}
