//! Plain key/value storage.
//!
//! [`Fluent`] is the raw attribute bag underneath [`Model`](crate::model::Model).
//! It knows nothing about hooks: reads return what was written, writes
//! overwrite. Hooks receive a `Fluent` so they can do their own storage.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fluent {
    attributes: Map<String, Value>,
}

impl Fluent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value at `key`, or `None` when absent.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// Raw value at `key`, with absent keys reading as `Value::Null`.
    pub fn value(&self, key: &str) -> Value {
        self.attributes.get(key).cloned().unwrap_or(Value::Null)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.attributes.contains_key(key)
    }

    /// Store `value` at `key`. Last write wins; first insertion fixes the position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.attributes.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        // shift_remove keeps the remaining keys in insertion order
        self.attributes.shift_remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.attributes
    }
}

impl From<Map<String, Value>> for Fluent {
    fn from(attributes: Map<String, Value>) -> Self {
        Self { attributes }
    }
}
