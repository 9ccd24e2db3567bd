//! # fluent-model
//!
//! An attribute container whose fields can carry their own setter, getter
//! and presence hooks.
//!
//! ## Layers
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │  Model (model.rs)                                         │
//! │  - set / get / has / fill / unset / call                  │
//! │  - bulk export with hidden / visible fields               │
//! └───────────────────────────────────────────────────────────┘
//!                │ looks up hooks in        │ stores into
//!                ▼                          ▼
//! ┌────────────────────────────┐  ┌──────────────────────────┐
//! │  MutatorSpec table         │  │  Fluent (fluent.rs)      │
//! │  (mutator.rs, case.rs)     │  │  raw ordered key/value   │
//! └────────────────────────────┘  └──────────────────────────┘
//! ```
//!
//! Hooks are declared statically through [`Schema`]; field names are matched
//! in studly case ignoring ASCII case, so `first_name`, `firstName`,
//! `first-name` and `FIRST_NAME` share hooks.
//!
//! ```
//! use fluent_model::{Fluent, Model, MutatorSpec, Result, Schema};
//! use serde_json::Value;
//!
//! fn trim_email(store: &mut Fluent, value: Value) -> Result<()> {
//!     let email = value.as_str().unwrap_or_default().trim().to_lowercase();
//!     store.insert("email", email);
//!     Ok(())
//! }
//!
//! struct User;
//!
//! impl Schema for User {
//!     const MUTATORS: &'static [MutatorSpec] = &[MutatorSpec::new("email").setter(trim_email)];
//!     const HIDDEN: &'static [&'static str] = &["password"];
//! }
//!
//! # fn main() -> Result<()> {
//! let mut user = Model::of::<User>();
//! user.set("email", "  Ada@Example.com ")?.set("password", "hunter2")?;
//! assert_eq!(user.get("email")?, "ada@example.com");
//! assert_eq!(user.to_json()?, r#"{"email":"ada@example.com"}"#);
//! # Ok(())
//! # }
//! ```
//!
//! Values are [`serde_json::Value`]; export maps keep insertion order.

pub mod arrayable;
pub mod case;
pub mod config;
pub mod error;
pub mod fluent;
pub mod model;
pub mod mutator;

pub use arrayable::{Arrayable, IntoAttributes};
pub use config::ExportConfig;
pub use error::{ModelError, Result};
pub use fluent::Fluent;
pub use model::Model;
pub use mutator::{GetHook, HasHook, MutatorSpec, Plain, Schema, SetHook};
