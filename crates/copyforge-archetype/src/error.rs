//! Error types for the archetype library
//!
//! Provides error handling for:
//! - Archetype and artifact-kind lookups (fatal, surfaced to the caller)
//! - Copy deck loading and validation

use std::path::PathBuf;

use copyforge_model::ArtifactKind;

/// Library lookup errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LibraryError {
    /// Archetype id not in the library, or registered under another kind
    #[error("invalid archetype reference: '{id}'")]
    InvalidArchetypeReference {
        /// Requested id
        id: String,
        /// Kind the caller expected, if any
        kind: Option<ArtifactKind>,
    },

    /// Artifact kind name not recognised
    #[error("unknown artifact kind: '{0}'")]
    UnknownArtifactKind(String),
}

impl LibraryError {
    /// Unknown archetype id
    pub fn unknown_archetype(id: impl Into<String>) -> Self {
        Self::InvalidArchetypeReference {
            id: id.into(),
            kind: None,
        }
    }
}

/// Copy deck errors
#[derive(Debug, thiserror::Error)]
pub enum DeckError {
    /// TOML did not parse
    #[error("invalid copy deck toml: {0}")]
    InvalidToml(#[from] toml::de::Error),

    /// Copy deck could not be serialized
    #[error("copy deck serialization failed: {0}")]
    Serialization(#[from] toml::ser::Error),

    /// A fallback phrase is blank
    #[error("copy deck fallback '{0}' is blank")]
    BlankFallback(String),

    /// File could not be read
    #[error("io error reading {path}: {source}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}
