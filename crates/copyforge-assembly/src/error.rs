//! Engine errors

use copyforge_archetype::LibraryError;
use copyforge_model::ArtifactKind;

/// Generation failures
///
/// Incomplete profiles never reach the engine (see `copyforge_gate`), and
/// missing insight selects baseline copy, so neither appears here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// Unknown archetype id or artifact kind
    #[error(transparent)]
    Library(#[from] LibraryError),

    /// Profile passed the gate for a different kind
    #[error("request is for {requested} but the profile was validated for {validated}")]
    KindMismatch {
        /// Kind in the request
        requested: ArtifactKind,
        /// Kind of the ready profile
        validated: ArtifactKind,
    },

    /// Shifting the sequence by `start_day` would overflow the last email day
    #[error("email start day {start_day} is out of range (1..={max})")]
    StartDayOutOfRange {
        /// Requested first day
        start_day: u16,
        /// Largest start day the sequence fits
        max: u16,
    },
}

/// Export failures
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Format name not recognised
    #[error("unknown export format: '{0}' (expected json, markdown or html)")]
    UnknownFormat(String),

    /// JSON serialization failed
    #[error("json export failed: {0}")]
    Json(#[from] serde_json::Error),
}
