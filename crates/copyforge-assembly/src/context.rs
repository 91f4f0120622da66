//! Shared rendering context for assemblers

use copyforge_archetype::{
    Archetype, ArchetypeLibrary, BranchPlan, BranchSelector, CopyDeck, Interpolator, NumberSource,
};
use copyforge_model::{BusinessProfile, CompetitiveInsight, ContentArtifact, Provenance};
use indexmap::IndexMap;
use tracing::debug;

use crate::request::GenerationRequest;

/// Everything an assembler reads while rendering one request
#[derive(Debug, Clone, Copy)]
pub struct AssemblyContext<'a> {
    /// Archetype lookup
    pub library: &'a ArchetypeLibrary,
    /// Copy dictionary
    pub deck: &'a CopyDeck,
    /// Numeric placeholder values
    pub numbers: &'a dyn NumberSource,
    /// Ready profile
    pub profile: &'a BusinessProfile,
    /// Optional insight snapshot
    pub insight: Option<&'a CompetitiveInsight>,
    /// Request options
    pub request: &'a GenerationRequest,
}

impl AssemblyContext<'_> {
    /// Select branches and render every slot of `archetype`
    #[must_use]
    pub fn render(&self, archetype: &'static Archetype) -> RenderedSlots {
        let plan = BranchSelector::new().select(archetype, self.insight);
        let interpolator = Interpolator::new(self.deck, self.numbers).scoped(archetype.id);
        let values = archetype
            .slots
            .iter()
            .enumerate()
            .map(|(i, slot)| {
                let text = interpolator.render(slot, plan.branch(i), self.profile, self.insight);
                (slot.field, text)
            })
            .collect();
        debug!(
            archetype = archetype.id,
            enriched = plan.use_enriched(),
            consumed = ?plan.fields_consumed(),
            "rendered slots"
        );
        RenderedSlots {
            archetype,
            plan,
            values,
            missing: self.deck.unknown_placeholder.clone(),
        }
    }

    /// "Ad 1: Competitive Advantage"
    #[must_use]
    pub fn title(&self, archetype: &Archetype) -> String {
        self.library.numbered_title(archetype)
    }
}

/// Rendered slot values of one archetype with the branch plan behind them
#[derive(Debug, Clone)]
pub struct RenderedSlots {
    archetype: &'static Archetype,
    plan: BranchPlan,
    values: IndexMap<&'static str, String>,
    missing: String,
}

impl RenderedSlots {
    /// Archetype rendered
    #[inline]
    #[must_use]
    pub fn archetype(&self) -> &'static Archetype {
        self.archetype
    }

    /// Branch decisions
    #[inline]
    #[must_use]
    pub fn plan(&self) -> &BranchPlan {
        &self.plan
    }

    /// Text of a slot; the deck's unknown-placeholder phrase if the archetype has no such slot
    #[must_use]
    pub fn text(&self, field: &str) -> String {
        self.values
            .get(field)
            .cloned()
            .unwrap_or_else(|| self.missing.clone())
    }

    /// Text of a slot if the archetype declares it
    #[must_use]
    pub fn optional(&self, field: &str) -> Option<String> {
        self.values.get(field).cloned()
    }

    /// Every rendered value in slot order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.values.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Provenance of every slot
    #[must_use]
    pub fn provenance(&self) -> Provenance {
        self.plan.provenance()
    }

    /// Artifact over every slot
    #[must_use]
    pub fn artifact(&self, title: impl Into<String>) -> ContentArtifact {
        self.artifact_with(title, std::iter::empty(), self.provenance())
    }

    /// Artifact over every slot plus `extra` fields, with explicit provenance
    #[must_use]
    pub fn artifact_with<I>(
        &self,
        title: impl Into<String>,
        extra: I,
        provenance: Provenance,
    ) -> ContentArtifact
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let fields = self
            .values
            .iter()
            .map(|(k, v)| ((*k).to_string(), v.clone()))
            .chain(extra)
            .collect();
        ContentArtifact::new(self.archetype.id, self.archetype.kind, title, fields, provenance)
    }
}
