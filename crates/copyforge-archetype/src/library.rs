//! Archetype library
//!
//! Provides [`ArchetypeLibrary`], a read-only lookup over the built-in
//! archetype tables.

use std::str::FromStr;

use copyforge_model::ArtifactKind;

use crate::archetype::Archetype;
use crate::catalog;
use crate::error::LibraryError;

/// Read-only registry of archetypes, keyed by kind and id
///
/// The tables are compiled in, so the library is zero-sized and safe to
/// share across threads without synchronization.
#[derive(Debug, Default, Clone, Copy)]
pub struct ArchetypeLibrary;

impl ArchetypeLibrary {
    /// Create library handle
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Archetypes of `kind` in display order
    #[inline]
    #[must_use]
    pub const fn archetypes(&self, kind: ArtifactKind) -> &'static [Archetype] {
        catalog::for_kind(kind)
    }

    /// Look up an archetype by id
    ///
    /// # Errors
    /// Returns [`LibraryError::InvalidArchetypeReference`] when no archetype has `id`
    pub fn get(&self, id: &str) -> Result<&'static Archetype, LibraryError> {
        self.iter()
            .find(|a| a.id == id)
            .ok_or_else(|| LibraryError::unknown_archetype(id))
    }

    /// Look up an archetype by id, requiring it to belong to `kind`
    ///
    /// # Errors
    /// Returns [`LibraryError::InvalidArchetypeReference`] carrying `kind` when
    /// `id` is unknown or names an archetype of another kind
    pub fn get_for(&self, kind: ArtifactKind, id: &str) -> Result<&'static Archetype, LibraryError> {
        self.archetypes(kind)
            .iter()
            .find(|a| a.id == id)
            .ok_or_else(|| LibraryError::InvalidArchetypeReference {
                id: id.to_string(),
                kind: Some(kind),
            })
    }

    /// 1-based position of an archetype within its kind
    #[must_use]
    pub fn number(&self, archetype: &Archetype) -> Option<usize> {
        self.archetypes(archetype.kind)
            .iter()
            .position(|a| a.id == archetype.id)
            .map(|i| i + 1)
    }

    /// Display title such as "Ad 1: Competitive Advantage"
    #[must_use]
    pub fn numbered_title(&self, archetype: &Archetype) -> String {
        match self.number(archetype) {
            Some(n) => format!("{} {n}: {}", archetype.kind.label(), archetype.name),
            None => archetype.name.to_string(),
        }
    }

    /// Parse a user-supplied artifact kind name
    ///
    /// # Errors
    /// Returns [`LibraryError::UnknownArtifactKind`] for an unrecognised name
    pub fn kind_named(&self, name: &str) -> Result<ArtifactKind, LibraryError> {
        ArtifactKind::from_str(name).map_err(|_| LibraryError::UnknownArtifactKind(name.to_string()))
    }

    /// Number of archetypes across all kinds
    #[must_use]
    pub fn len(&self) -> usize {
        ArtifactKind::ALL
            .iter()
            .map(|kind| self.archetypes(*kind).len())
            .sum()
    }

    /// Whether the library has no archetypes
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every archetype, grouped by kind in presentation order
    pub fn iter(&self) -> impl Iterator<Item = &'static Archetype> {
        ArtifactKind::ALL
            .into_iter()
            .flat_map(|kind| catalog::for_kind(kind).iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    use crate::archetype::ArchetypeMeta;
    use crate::placeholder::tokens;

    const LIBRARY: ArchetypeLibrary = ArchetypeLibrary::new();

    #[test]
    fn every_kind_has_two_to_six_archetypes() {
        for kind in ArtifactKind::ALL {
            let n = LIBRARY.archetypes(kind).len();
            assert!((2..=6).contains(&n), "{kind} has {n} archetypes");
        }
    }

    #[test]
    fn ids_are_unique_and_kind_prefixed() {
        let mut seen = HashSet::new();
        for archetype in LIBRARY.iter() {
            assert!(seen.insert(archetype.id), "duplicate id {}", archetype.id);
            assert!(!archetype.slots.is_empty());
        }
        assert_eq!(seen.len(), LIBRARY.len());
    }

    #[test]
    fn archetypes_are_filed_under_their_kind() {
        for kind in ArtifactKind::ALL {
            assert!(LIBRARY.archetypes(kind).iter().all(|a| a.kind == kind));
        }
    }

    #[test]
    fn every_placeholder_resolves() {
        for archetype in LIBRARY.iter() {
            for slot in archetype.slots {
                for template in std::iter::once(slot.baseline).chain(slot.enriched) {
                    for token in tokens(template) {
                        assert!(
                            token.placeholder.is_ok(),
                            "{}:{} has unresolved {:?}",
                            archetype.id,
                            slot.field,
                            token.placeholder
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn slot_fields_are_unique_per_archetype() {
        for archetype in LIBRARY.iter() {
            let mut fields = HashSet::new();
            for slot in archetype.slots {
                assert!(fields.insert(slot.field), "{} repeats {}", archetype.id, slot.field);
            }
        }
    }

    #[test]
    fn website_sections_have_headline_body_and_cta() {
        for archetype in LIBRARY.archetypes(ArtifactKind::WebsiteSection) {
            let ArchetypeMeta::Website { sections } = archetype.meta else {
                panic!("{} lacks website meta", archetype.id);
            };
            assert_eq!(sections.first().map(|s| s.name), Some("hero"));
            for section in sections {
                for leaf in ["headline", "body", "cta"] {
                    let field = format!("{}.{leaf}", section.name);
                    assert!(archetype.slot(&field).is_some(), "{} lacks {field}", archetype.id);
                }
            }
            let declared: HashSet<_> = sections.iter().map(|s| s.name).collect();
            for slot in archetype.slots {
                assert!(slot.section().is_some_and(|s| declared.contains(s)));
            }
        }
    }

    #[test]
    fn email_days_strictly_increase() {
        let days: Vec<u16> = LIBRARY
            .archetypes(ArtifactKind::Email)
            .iter()
            .map(|a| match a.meta {
                ArchetypeMeta::Email { day } => day,
                _ => panic!("{} lacks email meta", a.id),
            })
            .collect();
        assert!(days.windows(2).all(|w| w[0] < w[1]), "{days:?}");
    }

    #[test]
    fn meta_matches_kind() {
        for archetype in LIBRARY.iter() {
            let ok = matches!(
                (archetype.kind, archetype.meta),
                (ArtifactKind::Ad, ArchetypeMeta::Ad { .. })
                    | (ArtifactKind::WebsiteSection, ArchetypeMeta::Website { .. })
                    | (ArtifactKind::Email, ArchetypeMeta::Email { .. })
                    | (ArtifactKind::SocialPost, ArchetypeMeta::Social { .. })
                    | (ArtifactKind::SalesScript, ArchetypeMeta::SalesScript { .. })
            );
            assert!(ok, "{} meta does not match kind", archetype.id);
        }
    }

    #[test]
    fn every_kind_offers_enrichment() {
        for kind in ArtifactKind::ALL {
            assert!(LIBRARY.archetypes(kind).iter().any(Archetype::is_enrichable));
        }
    }

    #[test]
    fn lookup_by_id() {
        let ad = LIBRARY.get("ad.social-proof").unwrap();
        assert_eq!(ad.kind, ArtifactKind::Ad);
        assert_eq!(LIBRARY.number(ad), Some(3));
        assert_eq!(LIBRARY.numbered_title(ad), "Ad 3: Social Proof");
    }

    #[test]
    fn unknown_id_is_invalid_reference() {
        let err = LIBRARY.get("ad.nope").unwrap_err();
        assert_eq!(err, LibraryError::unknown_archetype("ad.nope"));
        assert_eq!(err.to_string(), "invalid archetype reference: 'ad.nope'");
    }

    #[test]
    fn wrong_kind_is_invalid_reference() {
        let err = LIBRARY
            .get_for(ArtifactKind::Email, "ad.social-proof")
            .unwrap_err();
        assert!(matches!(
            err,
            LibraryError::InvalidArchetypeReference {
                kind: Some(ArtifactKind::Email),
                ..
            }
        ));
    }

    #[test]
    fn kind_names() {
        assert_eq!(LIBRARY.kind_named("ad").unwrap(), ArtifactKind::Ad);
        assert!(matches!(
            LIBRARY.kind_named("billboard"),
            Err(LibraryError::UnknownArtifactKind(name)) if name == "billboard"
        ));
    }
}
