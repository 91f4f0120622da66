//! Content artifacts
//!
//! A [`ContentArtifact`] is one generated, ready-to-display unit of copy. It is
//! created once per generation call and never mutated afterwards; callers that
//! want different copy generate again.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::hash::Fingerprint;
use crate::insight::InsightField;
use crate::kind::ArtifactKind;

/// Which enrichment data produced an artifact
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provenance {
    /// Whether any insight field was consumed
    pub used_insight: bool,
    /// Insight fields actually consumed
    pub insight_fields_used: BTreeSet<InsightField>,
}

impl Provenance {
    /// Provenance of baseline-only output
    #[inline]
    #[must_use]
    pub fn baseline() -> Self {
        Self::default()
    }

    /// Provenance from the set of consumed insight fields
    #[must_use]
    pub fn from_fields(fields: BTreeSet<InsightField>) -> Self {
        Self {
            used_insight: !fields.is_empty(),
            insight_fields_used: fields,
        }
    }

    /// Whether the insight field with wire name `key` was consumed
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.insight_fields_used.iter().any(|f| f.key() == key)
    }

    /// Merge another provenance into this one
    #[must_use]
    pub fn union(mut self, other: &Provenance) -> Self {
        self.insight_fields_used
            .extend(other.insight_fields_used.iter().copied());
        self.used_insight = !self.insight_fields_used.is_empty();
        self
    }
}

/// One generated unit of marketing copy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentArtifact {
    archetype_id: String,
    kind: ArtifactKind,
    title: String,
    fields: IndexMap<String, String>,
    provenance: Provenance,
    fingerprint: Fingerprint,
}

impl ContentArtifact {
    /// Create an artifact; the fingerprint is computed from id and fields
    #[must_use]
    pub fn new(
        archetype_id: impl Into<String>,
        kind: ArtifactKind,
        title: impl Into<String>,
        fields: IndexMap<String, String>,
        provenance: Provenance,
    ) -> Self {
        let archetype_id = archetype_id.into();
        let fingerprint = Self::compute_fingerprint(&archetype_id, &fields);
        Self {
            archetype_id,
            kind,
            title: title.into(),
            fields,
            provenance,
            fingerprint,
        }
    }

    fn compute_fingerprint(archetype_id: &str, fields: &IndexMap<String, String>) -> Fingerprint {
        let parts = std::iter::once(archetype_id).chain(
            fields
                .iter()
                .flat_map(|(name, value)| [name.as_str(), value.as_str()]),
        );
        Fingerprint::compute_parts(parts)
    }

    /// Archetype that produced this artifact
    #[inline]
    #[must_use]
    pub fn archetype_id(&self) -> &str {
        &self.archetype_id
    }

    /// Artifact kind
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ArtifactKind {
        self.kind
    }

    /// Display title ("Ad 1: Competitive Advantage")
    #[inline]
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// All fields in slot order
    #[inline]
    #[must_use]
    pub fn fields(&self) -> &IndexMap<String, String> {
        &self.fields
    }

    /// A single field
    #[inline]
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// A single field, empty when the archetype has no such slot
    #[inline]
    #[must_use]
    pub fn text(&self, name: &str) -> &str {
        self.field(name).unwrap_or_default()
    }

    /// Enrichment provenance
    #[inline]
    #[must_use]
    pub fn provenance(&self) -> &Provenance {
        &self.provenance
    }

    /// Content fingerprint
    #[inline]
    #[must_use]
    pub fn fingerprint(&self) -> Fingerprint {
        self.fingerprint
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn fingerprint_depends_on_content() {
        let a = ContentArtifact::new(
            "ad.test",
            ArtifactKind::Ad,
            "Ad 1",
            fields(&[("headline", "Hi")]),
            Provenance::baseline(),
        );
        let b = ContentArtifact::new(
            "ad.test",
            ArtifactKind::Ad,
            "Ad 1 again",
            fields(&[("headline", "Hi")]),
            Provenance::baseline(),
        );
        let c = ContentArtifact::new(
            "ad.test",
            ArtifactKind::Ad,
            "Ad 1",
            fields(&[("headline", "Hello")]),
            Provenance::baseline(),
        );
        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_ne!(a.fingerprint(), c.fingerprint());
    }

    #[test]
    fn field_accessors() {
        let artifact = ContentArtifact::new(
            "email.welcome",
            ArtifactKind::Email,
            "Day 1",
            fields(&[("subject", "Welcome"), ("body", "Thanks")]),
            Provenance::baseline(),
        );
        assert_eq!(artifact.field("subject"), Some("Welcome"));
        assert_eq!(artifact.text("missing"), "");
        assert_eq!(
            artifact.fields().keys().collect::<Vec<_>>(),
            vec!["subject", "body"]
        );
    }

    #[test]
    fn provenance_tracks_usage() {
        let baseline = Provenance::baseline();
        assert!(!baseline.used_insight);

        let used = Provenance::from_fields([InsightField::MarketGaps].into_iter().collect());
        assert!(used.used_insight);
        assert!(used.contains("marketGaps"));
        assert!(!used.contains("topPerformers"));

        let merged = baseline.union(&used);
        assert!(merged.used_insight);
    }

    #[test]
    fn provenance_serializes_wire_names() {
        let used = Provenance::from_fields([InsightField::TopPerformers].into_iter().collect());
        let json = serde_json::to_string(&used).unwrap();
        assert_eq!(json, r#"{"usedInsight":true,"insightFieldsUsed":["topPerformers"]}"#);
    }
}
