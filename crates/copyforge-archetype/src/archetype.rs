//! Archetype and slot template records
//!
//! Archetypes are static configuration: `const` tables compiled into the
//! binary, never mutated and never registered at runtime.

use std::collections::BTreeSet;

use copyforge_model::{ArtifactKind, InsightField, ScriptChannel};
use serde::Serialize;

use crate::placeholder::{tokens, Placeholder};

/// How enrichment is applied across an archetype's slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Branching {
    /// Every enriched slot switches together, or none does
    #[default]
    AllOrNothing,
    /// Each slot decides independently
    PerField,
}

/// A single named output field with its templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlotTemplate {
    /// Output field name ("headline", "hero.body", ...)
    pub field: &'static str,
    /// Template used without (sufficient) insight
    pub baseline: &'static str,
    /// Template used when every insight field it references is present
    pub enriched: Option<&'static str>,
}

impl SlotTemplate {
    /// Slot with only a baseline template
    #[must_use]
    pub const fn baseline(field: &'static str, baseline: &'static str) -> Self {
        Self {
            field,
            baseline,
            enriched: None,
        }
    }

    /// Slot with baseline and enriched templates
    #[must_use]
    pub const fn enriched(
        field: &'static str,
        baseline: &'static str,
        enriched: &'static str,
    ) -> Self {
        Self {
            field,
            baseline,
            enriched: Some(enriched),
        }
    }

    /// Every resolvable placeholder referenced by either template
    #[must_use]
    pub fn placeholders(&self) -> BTreeSet<Placeholder> {
        std::iter::once(self.baseline)
            .chain(self.enriched)
            .flat_map(tokens)
            .filter_map(|t| t.placeholder.ok())
            .collect()
    }

    /// Insight fields the enriched template needs
    #[must_use]
    pub fn insight_requirements(&self) -> BTreeSet<InsightField> {
        self.enriched
            .map(|text| {
                tokens(text)
                    .into_iter()
                    .filter_map(|t| t.placeholder.ok().and_then(Placeholder::insight_field))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Section prefix of a dotted field name ("hero" for "hero.body")
    #[must_use]
    pub fn section(&self) -> Option<&'static str> {
        self.field.split_once('.').map(|(section, _)| section)
    }

    /// Field name without section prefix
    #[must_use]
    pub fn leaf(&self) -> &'static str {
        self.field
            .split_once('.')
            .map_or(self.field, |(_, leaf)| leaf)
    }
}

/// A page section of a website archetype
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionSpec {
    /// Slot prefix and insertion-point name
    pub name: &'static str,
    /// Display title
    pub title: &'static str,
    /// Layout guidance for designers
    pub layout: &'static str,
}

/// Kind-specific static data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ArchetypeMeta {
    /// Ad framing
    Ad {
        /// Emotional triggers the ad leans on
        triggers: &'static [&'static str],
    },
    /// Website page layout
    Website {
        /// Page sections in display order
        sections: &'static [SectionSpec],
    },
    /// Email schedule
    Email {
        /// Day of the sequence the email is sent
        day: u16,
    },
    /// Social post type
    Social {
        /// Post type label
        post_type: &'static str,
        /// Hashtag seeds (without '#')
        hashtags: &'static [&'static str],
    },
    /// Sales script delivery
    SalesScript {
        /// Live call or async message
        channel: ScriptChannel,
    },
}

/// A named narrative framing for one artifact kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Archetype {
    /// Stable identifier ("ad.competitive-advantage")
    pub id: &'static str,
    /// Artifact kind this archetype produces
    pub kind: ArtifactKind,
    /// Display name
    pub name: &'static str,
    /// Template revision
    pub version: u16,
    /// Enrichment policy
    pub branching: Branching,
    /// Kind-specific data
    pub meta: ArchetypeMeta,
    /// Output slots in display order
    pub slots: &'static [SlotTemplate],
}

impl Archetype {
    /// Slot by field name
    #[must_use]
    pub fn slot(&self, field: &str) -> Option<&'static SlotTemplate> {
        self.slots.iter().find(|s| s.field == field)
    }

    /// Slots that belong to a website section, in declaration order
    pub fn section_slots<'a>(
        &'a self,
        section: &'a str,
    ) -> impl Iterator<Item = (usize, &'static SlotTemplate)> + 'a {
        self.slots
            .iter()
            .enumerate()
            .filter(move |(_, s)| s.section() == Some(section))
    }

    /// Every placeholder referenced by any slot
    #[must_use]
    pub fn placeholders(&self) -> BTreeSet<Placeholder> {
        self.slots.iter().flat_map(SlotTemplate::placeholders).collect()
    }

    /// Whether any slot has an enriched variant
    #[must_use]
    pub fn is_enrichable(&self) -> bool {
        self.slots.iter().any(|s| s.enriched.is_some())
    }
}
