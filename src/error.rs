use thiserror::Error;

use crate::form::ValidationError;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Not in a therapy-catalog project. Run 'therapy-catalog init' first.")]
    NotInitialized,

    #[error("Already initialized. Remove .therapy-catalog/ to reinitialize.")]
    AlreadyInitialized,

    #[error("Access denied. You don't have permission to manage therapy content.")]
    AccessDenied,

    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    #[error("No entry is open in the form")]
    FormNotOpen,

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid {field}: '{value}'")]
    InvalidValue { field: String, value: String },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
