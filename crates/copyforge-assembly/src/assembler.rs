//! Assembler trait
//!
//! One implementation per artifact kind. An assembler turns a single
//! archetype into typed records plus the [`ContentArtifact`]s behind them.

use copyforge_archetype::{Archetype, LibraryError};
use copyforge_model::{ArtifactKind, ContentArtifact};
use serde::Serialize;

use crate::context::AssemblyContext;
use crate::error::EngineError;

/// Records and artifacts produced from one archetype
#[derive(Debug, Clone)]
pub struct Assembly<R> {
    /// Kind-specific records, in display order
    pub records: Vec<R>,
    /// One artifact per record
    pub artifacts: Vec<ContentArtifact>,
}

impl<R> Assembly<R> {
    /// Single record with its artifact
    #[must_use]
    pub fn single(record: R, artifact: ContentArtifact) -> Self {
        Self {
            records: vec![record],
            artifacts: vec![artifact],
        }
    }
}

/// Kind-specific artifact assembly
///
/// # Contract
/// Assembly never fails on incomplete input; blank profile fields render as
/// copy deck fallbacks. Errors are an archetype of the wrong kind or request
/// options the archetype cannot honour.
pub trait Assembler: Send + Sync + std::fmt::Debug {
    /// Output record type
    type Record: Clone + Serialize + Send;

    /// Kind this assembler handles
    fn kind(&self) -> ArtifactKind;

    /// Render one archetype
    ///
    /// # Errors
    /// - [`EngineError::Library`] if `archetype` belongs to another kind
    /// - [`EngineError::StartDayOutOfRange`] if shifted email days overflow
    fn assemble(
        &self,
        ctx: &AssemblyContext<'_>,
        archetype: &'static Archetype,
    ) -> Result<Assembly<Self::Record>, EngineError>;

    /// Reject archetypes of another kind
    ///
    /// # Errors
    /// [`LibraryError::InvalidArchetypeReference`] on mismatch
    fn check_kind(&self, archetype: &Archetype) -> Result<(), LibraryError> {
        if archetype.kind == self.kind() {
            Ok(())
        } else {
            Err(self.wrong_kind(archetype))
        }
    }

    /// Rejection for an archetype this assembler cannot render
    fn wrong_kind(&self, archetype: &Archetype) -> LibraryError {
        LibraryError::InvalidArchetypeReference {
            id: archetype.id.to_string(),
            kind: Some(self.kind()),
        }
    }
}
