//! Ad assembler

use copyforge_archetype::{Archetype, ArchetypeMeta};
use copyforge_model::{AdPlatform, ArtifactKind, InsightField, Provenance};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::assembler::{Assembler, Assembly};
use crate::context::AssemblyContext;
use crate::error::EngineError;

/// One ad variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdRecord {
    /// Source archetype
    pub archetype_id: String,
    /// "Ad 1: Competitive Advantage"
    pub title: String,
    /// Placement
    pub platform: AdPlatform,
    /// Headline
    pub headline: String,
    /// Primary text
    pub body: String,
    /// Button label
    pub cta: String,
    /// Why the framing works
    pub psychology_rationale: String,
    /// Emotional triggers, archetype's own first
    pub emotional_triggers: IndexSet<String>,
}

/// Builds [`AdRecord`]s
#[derive(Debug, Clone, Copy, Default)]
pub struct AdAssembler;

impl Assembler for AdAssembler {
    type Record = AdRecord;

    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Ad
    }

    fn assemble(
        &self,
        ctx: &AssemblyContext<'_>,
        archetype: &'static Archetype,
    ) -> Result<Assembly<AdRecord>, EngineError> {
        self.check_kind(archetype)?;
        let slots = ctx.render(archetype);

        let mut emotional_triggers: IndexSet<String> = match archetype.meta {
            ArchetypeMeta::Ad { triggers } => triggers.iter().map(|t| (*t).to_string()).collect(),
            _ => IndexSet::new(),
        };
        let mut provenance = slots.provenance();
        if let Some(emotion) = ctx.insight.and_then(|i| i.common_emotion()) {
            emotional_triggers.insert(emotion.to_lowercase());
            provenance = provenance.union(&Provenance::from_fields(
                [InsightField::CommonEmotions].into_iter().collect(),
            ));
        }

        let platform = ctx.request.platform;
        let title = ctx.title(archetype);
        let record = AdRecord {
            archetype_id: archetype.id.to_string(),
            title: title.clone(),
            platform,
            headline: slots.text("headline"),
            body: slots.text("body"),
            cta: slots.text("cta"),
            psychology_rationale: slots.text("rationale"),
            emotional_triggers,
        };
        let triggers = record
            .emotional_triggers
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        let artifact = slots.artifact_with(
            title,
            [
                ("platform".to_string(), platform.as_str().to_string()),
                ("emotionalTriggers".to_string(), triggers),
            ],
            provenance,
        );
        Ok(Assembly::single(record, artifact))
    }
}
