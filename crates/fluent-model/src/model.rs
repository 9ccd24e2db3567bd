//! # Model: Hook-Aware Attribute Container
//!
//! [`Model`] wraps a [`Fluent`] bag and routes every read, write and presence
//! check through the hooks registered for the field, if any.
//!
//! ## Precedence
//!
//! - **set**: a setter hook replaces storage entirely; otherwise the value is
//!   stored as given.
//! - **get**: the raw value (`Null` when absent) is passed through the getter
//!   hook if there is one, even when nothing was stored. A `Null` result is
//!   replaced by the caller's default.
//! - **has**: a presence hook's answer is final; otherwise a field is present
//!   when `get` yields something other than `Null`.
//! - **unset**: always removes from storage directly; no hook is consulted.
//!
//! ## Bulk Export
//!
//! [`Model::attributes`] walks the stored keys in insertion order, skipping
//! `hidden` ones, and exports each through `get`. Then every `visible` field
//! is exported through `get` as well, whether or not it is stored or hidden.
//! `only`, `except`, `to_array`, `to_json` and `Serialize` all build on that.

use serde::ser::{Error as _, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::arrayable::{self, Arrayable, IntoAttributes};
use crate::case;
use crate::config::ExportConfig;
use crate::error::{ModelError, Result};
use crate::fluent::Fluent;
use crate::mutator::{self, MutatorSpec, Plain, Schema};

#[derive(Debug, Clone)]
pub struct Model {
    attributes: Fluent,
    mutators: &'static [MutatorSpec],
    hidden: Vec<String>,
    visible: Vec<String>,
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl Model {
    /// An empty model with no hooks.
    pub fn new() -> Self {
        Self::of::<Plain>()
    }

    /// An empty model using the hooks and visibility declared by `S`.
    pub fn of<S: Schema>() -> Self {
        Self {
            attributes: Fluent::new(),
            mutators: S::MUTATORS,
            hidden: S::HIDDEN.iter().map(|s| s.to_string()).collect(),
            visible: S::VISIBLE.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// An empty model using an explicit hook table.
    pub fn with_mutators(mutators: &'static [MutatorSpec]) -> Self {
        Self {
            mutators,
            ..Self::new()
        }
    }

    /// A hook-less model filled with `values`.
    pub fn from_attributes(values: impl IntoAttributes) -> Result<Self> {
        let mut model = Self::new();
        model.fill(values)?;
        Ok(model)
    }

    /// A model of schema `S` filled with `values`.
    pub fn from_schema<S: Schema>(values: impl IntoAttributes) -> Result<Self> {
        let mut model = Self::of::<S>();
        model.fill(values)?;
        Ok(model)
    }

    // --- hook introspection ---

    pub fn has_set_mutator(&self, key: &str) -> bool {
        mutator::set_hook(self.mutators, key).is_some()
    }

    pub fn has_get_mutator(&self, key: &str) -> bool {
        mutator::get_hook(self.mutators, key).is_some()
    }

    pub fn has_has_mutator(&self, key: &str) -> bool {
        mutator::has_hook(self.mutators, key).is_some()
    }

    pub fn set_mutator_name(&self, key: &str) -> String {
        case::set_mutator_name(key)
    }

    pub fn get_mutator_name(&self, key: &str) -> String {
        case::get_mutator_name(key)
    }

    pub fn has_mutator_name(&self, key: &str) -> String {
        case::has_mutator_name(key)
    }

    // --- attribute access ---

    /// Write `value` to `key`, through the setter hook if one is registered.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) -> Result<&mut Self> {
        let value = value.into();
        match mutator::set_hook(self.mutators, key) {
            Some(hook) => {
                tracing::trace!(key, "dispatching set hook");
                hook(&mut self.attributes, value)?;
            }
            None => self.attributes.insert(key, value),
        }
        Ok(self)
    }

    /// Set every pair in `values`, in order.
    ///
    /// Input is validated before the first write, so a rejected argument
    /// leaves the model untouched. A hook failing midway does not roll back
    /// the pairs already set.
    pub fn fill(&mut self, values: impl IntoAttributes) -> Result<&mut Self> {
        let values = values.into_attributes().inspect_err(|err| {
            tracing::debug!(%err, "rejected fill input");
        })?;
        tracing::trace!(count = values.len(), "filling model");
        for (key, value) in values {
            self.set(&key, value)?;
        }
        Ok(self)
    }

    /// Fill from any serializable value that serializes to a JSON object.
    pub fn fill_from_serialize<T: serde::Serialize + ?Sized>(
        &mut self,
        source: &T,
    ) -> Result<&mut Self> {
        let value = serde_json::to_value(source)?;
        self.fill(value)
    }

    /// Read `key`, through the getter hook if one is registered. Absent or
    /// `Null` results come back as `Value::Null`.
    pub fn get(&self, key: &str) -> Result<Value> {
        self.get_or(key, Value::Null)
    }

    /// Like [`get`](Self::get) but with `default` in place of `Null`.
    pub fn get_or(&self, key: &str, default: impl Into<Value>) -> Result<Value> {
        let mut value = self.attributes.value(key);
        if let Some(hook) = mutator::get_hook(self.mutators, key) {
            tracing::trace!(key, "dispatching get hook");
            value = hook(&self.attributes, value)?;
        }
        Ok(if value.is_null() { default.into() } else { value })
    }

    /// Whether `key` is present. A presence hook's answer is taken as is;
    /// otherwise present means `get` is not `Null`.
    pub fn has(&self, key: &str) -> Result<bool> {
        if let Some(hook) = mutator::has_hook(self.mutators, key) {
            tracing::trace!(key, "dispatching has hook");
            return hook(&self.attributes, key);
        }
        Ok(!self.get(key)?.is_null())
    }

    /// Remove `key` from storage. Hooks are not consulted.
    pub fn unset(&mut self, key: &str) -> Option<Value> {
        let removed = self.attributes.remove(key);
        tracing::trace!(key, removed = removed.is_some(), "unset attribute");
        removed
    }

    /// Treat `name` as a setter call: no arguments store `Null`, one stores
    /// that argument, more store them all as an array.
    pub fn call(&mut self, name: &str, mut args: Vec<Value>) -> Result<&mut Self> {
        let value = match args.len() {
            0 => Value::Null,
            1 => args.remove(0),
            _ => Value::Array(args),
        };
        self.set(name, value)
    }

    /// Raw storage, bypassing every hook.
    pub fn raw(&self) -> &Fluent {
        &self.attributes
    }

    // --- visibility ---

    pub fn hidden(&self) -> &[String] {
        &self.hidden
    }

    pub fn set_hidden<I, S>(&mut self, fields: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hidden = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn visible(&self) -> &[String] {
        &self.visible
    }

    pub fn set_visible<I, S>(&mut self, fields: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.visible = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Replace hidden/visible lists with those from `config`.
    pub fn configure(&mut self, config: &ExportConfig) -> &mut Self {
        self.hidden = config.hidden.clone();
        self.visible = config.visible.clone();
        self
    }

    // --- export ---

    /// Bulk export through `get`, honoring `hidden` then `visible`.
    pub fn attributes(&self) -> Result<Map<String, Value>> {
        let mut export = Map::new();
        for key in self.attributes.keys() {
            if !self.hidden.iter().any(|h| h == key) {
                export.insert(key.to_string(), self.get(key)?);
            }
        }
        for key in &self.visible {
            export.insert(key.clone(), self.get(key)?);
        }
        Ok(export)
    }

    /// Same as [`attributes`](Self::attributes).
    pub fn to_array(&self) -> Result<Map<String, Value>> {
        self.attributes()
    }

    /// The exported fields named in `keys`.
    pub fn only<I, S>(&self, keys: I) -> Result<Map<String, Value>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(arrayable::only(&self.attributes()?, keys))
    }

    /// The exported fields not named in `keys`.
    pub fn except<I, S>(&self, keys: I) -> Result<Map<String, Value>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(arrayable::except(&self.attributes()?, keys))
    }

    /// The export as a JSON value, for nesting inside another model.
    pub fn to_value(&self) -> Result<Value> {
        Ok(Value::Object(self.attributes()?))
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.attributes()?)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.attributes()?)?)
    }
}

impl Arrayable for Model {
    fn to_array(&self) -> Result<Map<String, Value>> {
        self.attributes()
    }
}

impl Serialize for Model {
    fn serialize<Ser: Serializer>(
        &self,
        serializer: Ser,
    ) -> std::result::Result<Ser::Ok, Ser::Error> {
        self.attributes()
            .map_err(Ser::Error::custom)?
            .serialize(serializer)
    }
}

impl TryFrom<Value> for Model {
    type Error = ModelError;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_attributes(value)
    }
}
