//! # Export Configuration
//!
//! Which fields a model leaves out of (or forces into) its bulk export can be
//! set in code via [`Schema`](crate::mutator::Schema) or loaded at runtime
//! with [`confique`]. Sources, highest priority first:
//!
//! 1. **Environment variables**: `FLUENT_MODEL_HIDDEN`, `FLUENT_MODEL_VISIBLE`
//!    (comma separated, e.g. `password,token`).
//! 2. **Config file**: a TOML file passed to [`ExportConfig::load`].
//! 3. **Compiled defaults**: both lists empty.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `hidden` | `[]` | Fields excluded from `attributes()` / `to_array()` |
//! | `visible` | `[]` | Fields always included, even if hidden or never stored |

use std::path::Path;

use confique::Config;
use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Config, Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportConfig {
    /// Fields excluded from bulk export.
    #[config(
        default = [],
        env = "FLUENT_MODEL_HIDDEN",
        parse_env = confique::env::parse::list_by_comma
    )]
    pub hidden: Vec<String>,

    /// Fields forced into bulk export, applied after `hidden`.
    #[config(
        default = [],
        env = "FLUENT_MODEL_VISIBLE",
        parse_env = confique::env::parse::list_by_comma
    )]
    pub visible: Vec<String>,
}

impl ExportConfig {
    /// Load from `path` (if it exists) layered under the environment.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let config = Self::builder().env().file(path.as_ref()).load()?;
        tracing::debug!(
            path = %path.as_ref().display(),
            hidden = config.hidden.len(),
            visible = config.visible.len(),
            "loaded export config"
        );
        Ok(config)
    }

    /// Load from the environment only.
    pub fn from_env() -> Result<Self> {
        Ok(Self::builder().env().load()?)
    }
}
