//! Website assembler
//!
//! A website archetype is a whole-page strategy; each of its sections becomes
//! one [`WebsiteSection`] record and one artifact.

use copyforge_archetype::{Archetype, ArchetypeMeta};
use copyforge_model::{ArtifactKind, ContentArtifact};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::assembler::{Assembler, Assembly};
use crate::context::AssemblyContext;
use crate::error::EngineError;

/// One page section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebsiteSection {
    /// Source archetype
    pub archetype_id: String,
    /// Insertion-point name ("hero")
    pub section_name: String,
    /// Display title ("Hero")
    pub title: String,
    /// Section headline
    pub headline: String,
    /// Supporting line, hero sections only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subheadline: Option<String>,
    /// Body copy
    pub body: String,
    /// Button label
    pub cta: String,
    /// Guidance for designers
    pub layout_guidance: String,
}

/// Builds [`WebsiteSection`]s
#[derive(Debug, Clone, Copy, Default)]
pub struct WebsiteAssembler;

impl Assembler for WebsiteAssembler {
    type Record = WebsiteSection;

    fn kind(&self) -> ArtifactKind {
        ArtifactKind::WebsiteSection
    }

    fn assemble(
        &self,
        ctx: &AssemblyContext<'_>,
        archetype: &'static Archetype,
    ) -> Result<Assembly<WebsiteSection>, EngineError> {
        self.check_kind(archetype)?;
        let ArchetypeMeta::Website { sections } = archetype.meta else {
            return Err(self.wrong_kind(archetype).into());
        };
        let slots = ctx.render(archetype);
        let page_title = ctx.title(archetype);

        let mut assembly = Assembly {
            records: Vec::with_capacity(sections.len()),
            artifacts: Vec::with_capacity(sections.len()),
        };
        for section in sections {
            let field = |leaf: &str| format!("{}.{leaf}", section.name);
            let record = WebsiteSection {
                archetype_id: archetype.id.to_string(),
                section_name: section.name.to_string(),
                title: section.title.to_string(),
                headline: slots.text(&field("headline")),
                subheadline: slots.optional(&field("subheadline")),
                body: slots.text(&field("body")),
                cta: slots.text(&field("cta")),
                layout_guidance: section.layout.to_string(),
            };

            let indices: Vec<usize> = archetype.section_slots(section.name).map(|(i, _)| i).collect();
            let mut fields: IndexMap<String, String> = archetype
                .section_slots(section.name)
                .map(|(_, slot)| (slot.leaf().to_string(), slots.text(slot.field)))
                .collect();
            fields.insert("layoutGuidance".to_string(), section.layout.to_string());
            let artifact = ContentArtifact::new(
                archetype.id,
                ArtifactKind::WebsiteSection,
                format!("{page_title}, {}", section.title),
                fields,
                slots.plan().provenance_for(indices),
            );

            assembly.records.push(record);
            assembly.artifacts.push(artifact);
        }
        Ok(assembly)
    }
}
