//! Per-field hook registry.
//!
//! A model type declares its hooks up front in a static table instead of
//! having them discovered at runtime. Each [`MutatorSpec`] names a field and
//! optionally carries a setter, a getter and a presence check:
//!
//! ```
//! use fluent_model::{Fluent, Model, MutatorSpec, Result, Schema};
//! use serde_json::Value;
//!
//! fn lowercase_email(store: &mut Fluent, value: Value) -> Result<()> {
//!     store.insert("email", value.as_str().unwrap_or_default().to_lowercase());
//!     Ok(())
//! }
//!
//! fn join_names(store: &Fluent, _: Value) -> Result<Value> {
//!     let first = store.value("first");
//!     let last = store.value("last");
//!     Ok(Value::from(format!(
//!         "{} {}",
//!         first.as_str().unwrap_or_default(),
//!         last.as_str().unwrap_or_default()
//!     )))
//! }
//!
//! struct User;
//!
//! impl Schema for User {
//!     const MUTATORS: &'static [MutatorSpec] = &[
//!         MutatorSpec::new("email").setter(lowercase_email),
//!         MutatorSpec::new("full_name").getter(join_names),
//!     ];
//! }
//!
//! # fn main() -> Result<()> {
//! let mut user = Model::of::<User>();
//! user.set("email", "Ada@Example.com")?
//!     .set("first", "Ada")?
//!     .set("last", "Lovelace")?;
//! assert_eq!(user.get("email")?, "ada@example.com");
//! assert_eq!(user.get("fullName")?, "Ada Lovelace");
//! # Ok(())
//! # }
//! ```
//!
//! Lookup compares the [`studly`] forms of the declared field and the
//! requested key without regard to ASCII case, so a spec for `full_name`
//! also answers `fullName`, `FullName`, `full-name` and `FULL_NAME`.

use serde_json::Value;

use crate::case::studly;
use crate::error::Result;
use crate::fluent::Fluent;

/// Intercepts `set`. Receives the incoming value and does its own storage.
pub type SetHook = fn(&mut Fluent, Value) -> Result<()>;

/// Intercepts `get`. Receives the raw stored value (`Null` when absent).
pub type GetHook = fn(&Fluent, Value) -> Result<Value>;

/// Intercepts `has`. Receives the requested key; its answer is final.
pub type HasHook = fn(&Fluent, &str) -> Result<bool>;

/// Hooks registered for a single field.
#[derive(Clone, Copy)]
pub struct MutatorSpec {
    /// Field name as declared; matched in studly form.
    pub field: &'static str,
    pub set: Option<SetHook>,
    pub get: Option<GetHook>,
    pub has: Option<HasHook>,
}

impl MutatorSpec {
    /// A spec with no hooks attached.
    pub const fn new(field: &'static str) -> Self {
        Self {
            field,
            set: None,
            get: None,
            has: None,
        }
    }

    /// Attach a setter. It replaces direct storage for the field.
    pub const fn setter(mut self, hook: SetHook) -> Self {
        self.set = Some(hook);
        self
    }

    /// Attach a getter. It sees the raw value on every read, even when absent.
    pub const fn getter(mut self, hook: GetHook) -> Self {
        self.get = Some(hook);
        self
    }

    /// Attach a presence check. Its answer is returned by `has` as is.
    pub const fn presence(mut self, hook: HasHook) -> Self {
        self.has = Some(hook);
        self
    }

    /// Whether this spec answers for `key`: studly forms equal, ASCII case ignored.
    pub fn matches(&self, key: &str) -> bool {
        studly(self.field).eq_ignore_ascii_case(&studly(key))
    }
}

impl std::fmt::Debug for MutatorSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MutatorSpec")
            .field("field", &self.field)
            .field("set", &self.set.is_some())
            .field("get", &self.get.is_some())
            .field("has", &self.has.is_some())
            .finish()
    }
}

/// Declarative description of a concrete model type.
///
/// All items default to empty, so `impl Schema for Plain {}` is a model with
/// no hooks and nothing hidden.
pub trait Schema {
    const MUTATORS: &'static [MutatorSpec] = &[];

    /// Fields left out of bulk export.
    const HIDDEN: &'static [&'static str] = &[];

    /// Fields always added to bulk export, after `HIDDEN` filtering.
    const VISIBLE: &'static [&'static str] = &[];
}

/// A model with no hooks.
#[derive(Debug, Clone, Copy, Default)]
pub struct Plain;

impl Schema for Plain {}

/// First spec in `table` that answers for `key`.
pub fn find<'a>(table: &'a [MutatorSpec], key: &str) -> Option<&'a MutatorSpec> {
    table.iter().find(|spec| spec.matches(key))
}

pub fn set_hook(table: &[MutatorSpec], key: &str) -> Option<SetHook> {
    find(table, key).and_then(|spec| spec.set)
}

pub fn get_hook(table: &[MutatorSpec], key: &str) -> Option<GetHook> {
    find(table, key).and_then(|spec| spec.get)
}

pub fn has_hook(table: &[MutatorSpec], key: &str) -> Option<HasHook> {
    find(table, key).and_then(|spec| spec.has)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upper(store: &mut Fluent, value: Value) -> Result<()> {
        let s = value.as_str().unwrap_or_default().to_uppercase();
        store.insert("name", s);
        Ok(())
    }

    fn always(_: &Fluent, _: &str) -> Result<bool> {
        Ok(true)
    }

    const TABLE: &[MutatorSpec] = &[
        MutatorSpec::new("name").setter(upper),
        MutatorSpec::new("first_name").presence(always),
    ];

    #[test]
    fn lookup_ignores_spelling() {
        for key in ["first_name", "firstName", "FirstName", "first-name"] {
            assert!(find(TABLE, key).is_some(), "{key}");
        }
        assert!(find(TABLE, "last_name").is_none());
    }

    #[test]
    fn hooks_are_resolved_per_kind() {
        assert!(set_hook(TABLE, "name").is_some());
        assert!(get_hook(TABLE, "name").is_none());
        assert!(has_hook(TABLE, "name").is_none());
        assert!(has_hook(TABLE, "firstName").is_some());
    }

    #[test]
    fn setter_does_its_own_storage() {
        let mut store = Fluent::new();
        let hook = set_hook(TABLE, "Name").unwrap();
        hook(&mut store, Value::from("ada")).unwrap();
        assert_eq!(store.value("name"), Value::from("ADA"));
    }

    #[test]
    fn plain_schema_is_empty() {
        assert!(Plain::MUTATORS.is_empty());
        assert!(Plain::HIDDEN.is_empty());
        assert!(Plain::VISIBLE.is_empty());
    }

    #[test]
    fn spec_matches_by_studly_form() {
        let spec = MutatorSpec::new("foo_bar");
        assert!(spec.matches("fooBar"));
        assert!(!spec.matches("foo"));
    }

    #[test]
    fn lookup_ignores_ascii_case() {
        assert!(find(TABLE, "NAME").is_some());
        assert!(find(TABLE, "FIRST_NAME").is_some());
        assert!(MutatorSpec::new("foobar").matches("fooBar"));
        assert!(MutatorSpec::new("foo").matches("FOO"));
    }
}
