//! Email sequence assembler

use copyforge_archetype::{Archetype, ArchetypeLibrary, ArchetypeMeta};
use copyforge_model::ArtifactKind;
use serde::{Deserialize, Serialize};

use crate::assembler::{Assembler, Assembly};
use crate::context::AssemblyContext;
use crate::error::EngineError;

/// One email of the sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailRecord {
    /// Source archetype
    pub archetype_id: String,
    /// "Email 1: Welcome"
    pub title: String,
    /// Send day, counted from the first email
    pub day: u16,
    /// Subject line
    pub subject: String,
    /// Plain-text body
    pub body: String,
    /// What the email is for
    pub purpose: String,
}

/// Largest start day for which every email day still fits in a `u16`
#[must_use]
pub fn max_start_day() -> u16 {
    let last = ArchetypeLibrary::new()
        .archetypes(ArtifactKind::Email)
        .iter()
        .filter_map(|a| match a.meta {
            ArchetypeMeta::Email { day } => Some(day),
            _ => None,
        })
        .max()
        .unwrap_or(1);
    u16::MAX - (last.max(1) - 1)
}

/// Library day moved so that day 1 lands on `start_day`
fn shifted_day(day: u16, start_day: u16) -> Option<u16> {
    day.checked_add(start_day.checked_sub(1)?)
}

/// Builds [`EmailRecord`]s
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailAssembler;

impl Assembler for EmailAssembler {
    type Record = EmailRecord;

    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Email
    }

    fn assemble(
        &self,
        ctx: &AssemblyContext<'_>,
        archetype: &'static Archetype,
    ) -> Result<Assembly<EmailRecord>, EngineError> {
        self.check_kind(archetype)?;
        let ArchetypeMeta::Email { day } = archetype.meta else {
            return Err(self.wrong_kind(archetype).into());
        };
        let start_day = ctx.request.start_day;
        let day = shifted_day(day, start_day).ok_or_else(|| EngineError::StartDayOutOfRange {
            start_day,
            max: max_start_day(),
        })?;

        let slots = ctx.render(archetype);
        let title = ctx.title(archetype);
        let record = EmailRecord {
            archetype_id: archetype.id.to_string(),
            title: title.clone(),
            day,
            subject: slots.text("subject"),
            body: slots.text("body"),
            purpose: slots.text("purpose"),
        };
        let artifact = slots.artifact_with(
            title,
            [("day".to_string(), day.to_string())],
            slots.provenance(),
        );
        Ok(Assembly::single(record, artifact))
    }
}
