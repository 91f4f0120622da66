//! Enrichment branch selection
//!
//! Decides, per archetype, which slots render their enriched template and
//! which insight fields that consumes. A slot is enrichable only if every
//! insight field its enriched template references is present and non-empty.

use std::collections::BTreeSet;

use copyforge_model::{CompetitiveInsight, InsightField, Provenance};
use serde::Serialize;

use crate::archetype::{Archetype, Branching, SlotTemplate};

/// Template branch of a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Branch {
    /// Baseline template
    #[default]
    Baseline,
    /// Insight-enriched template
    Enriched,
}

impl Branch {
    /// Branch a single slot would take on its own
    #[must_use]
    pub fn for_slot(slot: &SlotTemplate, insight: Option<&CompetitiveInsight>) -> Self {
        if slot_enrichable(slot, insight) {
            Self::Enriched
        } else {
            Self::Baseline
        }
    }
}

/// Whether a slot's enriched template can be fully satisfied
#[must_use]
pub fn slot_enrichable(slot: &SlotTemplate, insight: Option<&CompetitiveInsight>) -> bool {
    match (slot.enriched, insight) {
        (Some(_), Some(insight)) => slot
            .insight_requirements()
            .iter()
            .all(|field| insight.has(*field)),
        _ => false,
    }
}

/// Branch decision for one slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotBranch {
    /// Chosen branch
    pub branch: Branch,
    /// Insight fields consumed by rendering this branch
    pub consumed: BTreeSet<InsightField>,
}

/// Branch decisions for every slot of an archetype
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchPlan {
    slots: Vec<SlotBranch>,
    fields_consumed: BTreeSet<InsightField>,
}

impl BranchPlan {
    /// Whether any slot renders enriched
    #[inline]
    #[must_use]
    pub fn use_enriched(&self) -> bool {
        self.slots.iter().any(|s| s.branch == Branch::Enriched)
    }

    /// Branch for the slot at `index` (baseline when out of range)
    #[inline]
    #[must_use]
    pub fn branch(&self, index: usize) -> Branch {
        self.slots.get(index).map(|s| s.branch).unwrap_or_default()
    }

    /// Per-slot decisions in slot order
    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[SlotBranch] {
        &self.slots
    }

    /// Union of consumed insight fields
    #[inline]
    #[must_use]
    pub fn fields_consumed(&self) -> &BTreeSet<InsightField> {
        &self.fields_consumed
    }

    /// Provenance covering every slot
    #[must_use]
    pub fn provenance(&self) -> Provenance {
        Provenance::from_fields(self.fields_consumed.clone())
    }

    /// Provenance covering only the slots at `indices`
    #[must_use]
    pub fn provenance_for<I>(&self, indices: I) -> Provenance
    where
        I: IntoIterator<Item = usize>,
    {
        let fields = indices
            .into_iter()
            .filter_map(|i| self.slots.get(i))
            .flat_map(|s| s.consumed.iter().copied())
            .collect();
        Provenance::from_fields(fields)
    }
}

/// Chooses baseline or enriched branches
#[derive(Debug, Clone, Copy, Default)]
pub struct BranchSelector;

impl BranchSelector {
    /// Create new selector
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Select branches for every slot of `archetype`
    ///
    /// # Selection Logic
    /// - no insight → every slot baseline
    /// - `PerField` → each slot enriched iff its own requirements hold
    /// - `AllOrNothing` → every slot with an enriched template goes enriched
    ///   iff all of them are enrichable, otherwise all stay baseline
    #[must_use]
    pub fn select(&self, archetype: &Archetype, insight: Option<&CompetitiveInsight>) -> BranchPlan {
        let enrichable: Vec<bool> = archetype
            .slots
            .iter()
            .map(|slot| slot_enrichable(slot, insight))
            .collect();

        let all_enrichable = archetype
            .slots
            .iter()
            .zip(&enrichable)
            .filter(|(slot, _)| slot.enriched.is_some())
            .all(|(_, ok)| *ok);

        let slots: Vec<SlotBranch> = archetype
            .slots
            .iter()
            .zip(&enrichable)
            .map(|(slot, ok)| {
                let enriched = match archetype.branching {
                    Branching::PerField => *ok,
                    Branching::AllOrNothing => *ok && all_enrichable,
                };
                if enriched {
                    SlotBranch {
                        branch: Branch::Enriched,
                        consumed: slot.insight_requirements(),
                    }
                } else {
                    SlotBranch {
                        branch: Branch::Baseline,
                        consumed: BTreeSet::new(),
                    }
                }
            })
            .collect();

        let fields_consumed = slots
            .iter()
            .flat_map(|s| s.consumed.iter().copied())
            .collect();

        BranchPlan {
            slots,
            fields_consumed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use copyforge_model::{ArtifactKind, Performer};

    const SLOTS: &[SlotTemplate] = &[
        SlotTemplate::enriched(
            "headline",
            "Hello {{profile.name}}",
            "Fix {{insight.marketGaps}}",
        ),
        SlotTemplate::enriched(
            "body",
            "We help {{profile.targetAudience}}",
            "Unlike {{insight.topPerformers}}, we help",
        ),
        SlotTemplate::baseline("cta", "Go"),
    ];

    const fn archetype(branching: Branching) -> Archetype {
        Archetype {
            id: "ad.test",
            kind: ArtifactKind::Ad,
            name: "Test",
            version: 1,
            branching,
            meta: crate::archetype::ArchetypeMeta::Ad { triggers: &[] },
            slots: SLOTS,
        }
    }

    fn gap_only() -> CompetitiveInsight {
        CompetitiveInsight::new().with_market_gap("slow onboarding")
    }

    #[test]
    fn no_insight_is_all_baseline() {
        let plan = BranchSelector::new().select(&archetype(Branching::PerField), None);
        assert!(!plan.use_enriched());
        assert!(plan.fields_consumed().is_empty());
        assert!(!plan.provenance().used_insight);
    }

    #[test]
    fn per_field_enriches_satisfied_slots_only() {
        let insight = gap_only();
        let plan = BranchSelector::new().select(&archetype(Branching::PerField), Some(&insight));
        assert_eq!(plan.branch(0), Branch::Enriched);
        assert_eq!(plan.branch(1), Branch::Baseline);
        assert_eq!(plan.branch(2), Branch::Baseline);
        assert_eq!(
            plan.fields_consumed().iter().copied().collect::<Vec<_>>(),
            vec![InsightField::MarketGaps]
        );
    }

    #[test]
    fn all_or_nothing_refuses_partial_enrichment() {
        let insight = gap_only();
        let plan =
            BranchSelector::new().select(&archetype(Branching::AllOrNothing), Some(&insight));
        assert!(!plan.use_enriched());
        assert!(plan.fields_consumed().is_empty());
    }

    #[test]
    fn all_or_nothing_enriches_when_complete() {
        let insight = gap_only().with_top_performer(Performer::named("Rival"));
        let plan =
            BranchSelector::new().select(&archetype(Branching::AllOrNothing), Some(&insight));
        assert_eq!(plan.branch(0), Branch::Enriched);
        assert_eq!(plan.branch(1), Branch::Enriched);
        assert_eq!(plan.branch(2), Branch::Baseline);
        assert!(plan.provenance().contains("topPerformers"));
        assert!(plan.provenance().contains("marketGaps"));
    }

    #[test]
    fn provenance_for_subset_of_slots() {
        let insight = gap_only().with_top_performer(Performer::named("Rival"));
        let plan = BranchSelector::new().select(&archetype(Branching::PerField), Some(&insight));
        let head = plan.provenance_for([0]);
        assert!(head.contains("marketGaps"));
        assert!(!head.contains("topPerformers"));
        assert!(!plan.provenance_for([2]).used_insight);
    }

    #[test]
    fn empty_list_counts_as_absent() {
        let insight = CompetitiveInsight {
            market_gaps: vec![String::new()],
            ..CompetitiveInsight::default()
        };
        assert!(!slot_enrichable(&SLOTS[0], Some(&insight)));
    }
}
