//! Error types for the model boundary
//!
//! Raised when untyped payloads (JSON/YAML text or files) are converted into
//! the typed profile and insight model.

use std::path::PathBuf;

/// Errors while loading model values at the boundary
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// JSON payload did not match the model
    #[error("invalid json: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// YAML payload did not match the model
    #[error("invalid yaml: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),

    /// File could not be read
    #[error("io error reading {path}: {source}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// File extension is neither JSON nor YAML
    #[error("unsupported file format: '{0}' (expected .json, .yaml or .yml)")]
    UnsupportedFormat(String),

    /// Profile or insight field name not recognised
    #[error("unknown field: '{0}'")]
    UnknownField(String),

    /// Artifact kind name not recognised
    #[error("unknown artifact kind: '{0}'")]
    UnknownKind(String),
}

impl ModelError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
