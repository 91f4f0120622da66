//! Social post assembler

use copyforge_archetype::{Archetype, ArchetypeMeta};
use copyforge_model::ArtifactKind;
use serde::{Deserialize, Serialize};

use crate::assembler::{Assembler, Assembly};
use crate::context::AssemblyContext;
use crate::error::EngineError;

/// One organic social post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialPost {
    /// Source archetype
    pub archetype_id: String,
    /// "Social Post 1: Educational Tip"
    pub title: String,
    /// Post type label
    pub post_type: String,
    /// Caption text
    pub caption: String,
    /// Hashtags including '#', in display order
    pub hashtags: Vec<String>,
    /// Closing prompt
    pub call_to_action: String,
}

/// Builds [`SocialPost`]s
#[derive(Debug, Clone, Copy, Default)]
pub struct SocialAssembler;

impl Assembler for SocialAssembler {
    type Record = SocialPost;

    fn kind(&self) -> ArtifactKind {
        ArtifactKind::SocialPost
    }

    fn assemble(
        &self,
        ctx: &AssemblyContext<'_>,
        archetype: &'static Archetype,
    ) -> Result<Assembly<SocialPost>, EngineError> {
        self.check_kind(archetype)?;
        let ArchetypeMeta::Social {
            post_type,
            hashtags: seeds,
        } = archetype.meta
        else {
            return Err(self.wrong_kind(archetype).into());
        };

        let slots = ctx.render(archetype);
        let title = ctx.title(archetype);
        let industry_tag = camel_case_tag(&ctx.profile.industry);
        let hashtags = hashtags(seeds.iter().copied().chain(industry_tag.as_deref()));

        let record = SocialPost {
            archetype_id: archetype.id.to_string(),
            title: title.clone(),
            post_type: post_type.to_string(),
            caption: slots.text("caption"),
            hashtags,
            call_to_action: slots.text("callToAction"),
        };
        let artifact = slots.artifact_with(
            title,
            [
                ("postType".to_string(), record.post_type.clone()),
                ("hashtags".to_string(), record.hashtags.join(" ")),
            ],
            slots.provenance(),
        );
        Ok(Assembly::single(record, artifact))
    }
}

/// `#`-prefixed tags, first spelling wins on case-insensitive duplicates
#[must_use]
pub fn hashtags<'a, I>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = std::collections::HashSet::new();
    tags.into_iter()
        .map(|t| t.trim().trim_start_matches('#'))
        .filter(|t| !t.is_empty())
        .filter(|t| seen.insert(t.to_lowercase()))
        .map(|t| format!("#{t}"))
        .collect()
}

/// "real estate" → "RealEstate"; acronyms keep their case ("SaaS")
#[must_use]
pub fn camel_case_tag(text: &str) -> Option<String> {
    let tag: String = text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            chars
                .next()
                .map(|first| first.to_uppercase().chain(chars).collect::<String>())
                .unwrap_or_default()
        })
        .collect();
    (!tag.is_empty()).then_some(tag)
}
