//! Built-in archetype tables, one module per artifact kind

mod ads;
mod emails;
mod sales;
mod social;
mod website;

use copyforge_model::ArtifactKind;

use crate::archetype::Archetype;

/// Archetypes of `kind` in their fixed display order
pub(crate) const fn for_kind(kind: ArtifactKind) -> &'static [Archetype] {
    match kind {
        ArtifactKind::Ad => ads::ADS,
        ArtifactKind::WebsiteSection => website::WEBSITES,
        ArtifactKind::Email => emails::EMAILS,
        ArtifactKind::SocialPost => social::SOCIAL,
        ArtifactKind::SalesScript => sales::SALES,
    }
}
