//! Error types for loading the curriculum.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading or checking a curriculum file.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Error reading a curriculum file.
    #[error("failed to read curriculum file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error parsing curriculum TOML.
    #[error("failed to parse curriculum {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    /// Two modules share an id.
    #[error("duplicate module id: {0}")]
    DuplicateModule(String),

    /// Two fields of one simulator share a name.
    #[error("duplicate field '{field}' in simulator of module '{module}'")]
    DuplicateField { module: String, field: String },

    /// Structurally valid TOML that breaks a content rule.
    #[error("invalid field '{field}' in module '{module}': {message}")]
    InvalidField { module: String, field: String, message: String },
}
