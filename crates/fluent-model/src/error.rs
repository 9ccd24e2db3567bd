use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Raised by user hooks. The container never wraps or rewrites it.
    #[error("Hook failed for `{field}`: {message}")]
    Hook { field: String, message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),
}

impl ModelError {
    /// Convenience for hook authors.
    pub fn hook(field: impl Into<String>, message: impl Into<String>) -> Self {
        ModelError::Hook {
            field: field.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
