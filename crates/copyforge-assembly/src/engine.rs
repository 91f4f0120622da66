//! Generation engine
//!
//! Routes a request to the assembler for its kind, reports progress after
//! each archetype, and runs independent batches in parallel.

use std::sync::Arc;

use copyforge_archetype::{
    Archetype, ArchetypeLibrary, CopyDeck, LibraryError, NumberSource, SeededNumbers,
};
use copyforge_gate::ReadyProfile;
use copyforge_model::{ArtifactKind, CompetitiveInsight, ContentArtifact, ProfileField};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::ad::AdAssembler;
use crate::assembler::Assembler;
use crate::context::AssemblyContext;
use crate::email::EmailAssembler;
use crate::error::EngineError;
use crate::records::{GeneratedContent, Generation};
use crate::request::{BatchJob, GenerationRequest, Progress};
use crate::sales::{SalesAssembler, SalesScriptSet};
use crate::site::SiteBuilder;
use crate::social::SocialAssembler;
use crate::website::WebsiteAssembler;

/// Content generation engine
///
/// Holds only read-only configuration, so one engine can serve many threads.
#[derive(Debug, Clone)]
pub struct Engine {
    library: ArchetypeLibrary,
    deck: Arc<CopyDeck>,
    numbers: Arc<dyn NumberSource>,
}

impl Default for Engine {
    /// Default copy deck with entropy-seeded numbers
    fn default() -> Self {
        Self::new(CopyDeck::default(), SeededNumbers::from_entropy())
    }
}

impl Engine {
    /// Create engine from a copy deck and number source
    #[must_use]
    pub fn new<N>(deck: CopyDeck, numbers: N) -> Self
    where
        N: NumberSource + 'static,
    {
        Self::from_shared(Arc::new(deck), Arc::new(numbers))
    }

    /// Create engine over shared configuration
    #[must_use]
    pub fn from_shared(deck: Arc<CopyDeck>, numbers: Arc<dyn NumberSource>) -> Self {
        Self {
            library: ArchetypeLibrary::new(),
            deck,
            numbers,
        }
    }

    /// Default copy deck with a fixed seed
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(CopyDeck::default(), SeededNumbers::new(seed))
    }

    /// Copy deck in use
    #[inline]
    #[must_use]
    pub fn deck(&self) -> &CopyDeck {
        &self.deck
    }

    /// Archetype library
    #[inline]
    #[must_use]
    pub fn library(&self) -> &ArchetypeLibrary {
        &self.library
    }

    /// Generate content for a ready profile
    ///
    /// # Errors
    /// - [`EngineError::KindMismatch`] if `ready` was validated for another kind
    /// - [`EngineError::Library`] for an unknown or wrong-kind archetype id
    /// - [`EngineError::StartDayOutOfRange`] if email days would overflow
    pub fn generate(
        &self,
        request: &GenerationRequest,
        ready: &ReadyProfile,
        insight: Option<&CompetitiveInsight>,
    ) -> Result<Generation, EngineError> {
        self.generate_with_progress(request, ready, insight, |_| {})
    }

    /// Generate content, calling `on_progress` after each archetype
    ///
    /// # Errors
    /// Same as [`Engine::generate`]
    pub fn generate_with_progress<F>(
        &self,
        request: &GenerationRequest,
        ready: &ReadyProfile,
        insight: Option<&CompetitiveInsight>,
        mut on_progress: F,
    ) -> Result<Generation, EngineError>
    where
        F: FnMut(Progress),
    {
        if ready.kind() != request.kind {
            return Err(EngineError::KindMismatch {
                requested: request.kind,
                validated: ready.kind(),
            });
        }
        let archetypes = self.archetypes_for(request)?;
        info!(
            kind = %request.kind,
            archetypes = archetypes.len(),
            insight = insight.is_some(),
            "generating content"
        );

        let profile = ready.profile();
        let ctx = AssemblyContext {
            library: &self.library,
            deck: &self.deck,
            numbers: self.numbers.as_ref(),
            profile,
            insight,
            request,
        };
        let progress = &mut on_progress;

        let (content, artifacts) = match request.kind {
            ArtifactKind::Ad => {
                let (ads, artifacts) = run(&AdAssembler, &ctx, &archetypes, progress)?;
                (GeneratedContent::Ads { ads }, artifacts)
            }
            ArtifactKind::WebsiteSection => {
                let (sections, artifacts) = run(&WebsiteAssembler, &ctx, &archetypes, progress)?;
                let site = match (request.full_site, archetypes.first()) {
                    (true, Some(archetype)) => {
                        Some(SiteBuilder::new(&self.deck).build(profile, archetype, &sections))
                    }
                    _ => None,
                };
                (GeneratedContent::Website { sections, site }, artifacts)
            }
            ArtifactKind::Email => {
                let (emails, artifacts) = run(&EmailAssembler, &ctx, &archetypes, progress)?;
                (GeneratedContent::Emails { emails }, artifacts)
            }
            ArtifactKind::SocialPost => {
                let (posts, artifacts) = run(&SocialAssembler, &ctx, &archetypes, progress)?;
                (GeneratedContent::Social { posts }, artifacts)
            }
            ArtifactKind::SalesScript => {
                let (scripts, artifacts) = run(&SalesAssembler, &ctx, &archetypes, progress)?;
                let scripts = SalesScriptSet::from_scripts(&scripts);
                (GeneratedContent::SalesScripts { scripts }, artifacts)
            }
        };

        let generation = Generation {
            business_name: profile
                .field_text(ProfileField::Name)
                .unwrap_or_else(|| self.deck.profile.name.clone()),
            content,
            artifacts,
        };
        info!(
            kind = %request.kind,
            artifacts = generation.artifacts.len(),
            used_insight = generation.used_insight(),
            "generation complete"
        );
        Ok(generation)
    }

    /// Generate independent jobs in parallel; results keep job order
    #[must_use]
    pub fn generate_batch(&self, jobs: &[BatchJob]) -> Vec<Result<Generation, EngineError>> {
        jobs.par_iter()
            .map(|job| self.generate(&job.request, &job.ready, job.insight.as_ref()))
            .collect()
    }

    /// Archetypes a request covers, in library order
    ///
    /// # Errors
    /// [`LibraryError::InvalidArchetypeReference`] for an unknown or wrong-kind id
    pub fn archetypes_for(
        &self,
        request: &GenerationRequest,
    ) -> Result<Vec<&'static Archetype>, LibraryError> {
        if let Some(id) = &request.archetype {
            return Ok(vec![self.library.get_for(request.kind, id)?]);
        }
        let all = self.library.archetypes(request.kind);
        Ok(match request.kind {
            ArtifactKind::WebsiteSection => all.iter().take(1).collect(),
            _ => all.iter().collect(),
        })
    }
}

fn run<A, F>(
    assembler: &A,
    ctx: &AssemblyContext<'_>,
    archetypes: &[&'static Archetype],
    on_progress: &mut F,
) -> Result<(Vec<A::Record>, Vec<ContentArtifact>), EngineError>
where
    A: Assembler,
    F: FnMut(Progress),
{
    let total = archetypes.len();
    let mut records = Vec::with_capacity(total);
    let mut artifacts = Vec::with_capacity(total);
    for (i, archetype) in archetypes.iter().enumerate() {
        let assembly = assembler.assemble(ctx, archetype)?;
        debug!(
            archetype = archetype.id,
            records = assembly.records.len(),
            "assembled archetype"
        );
        records.extend(assembly.records);
        artifacts.extend(assembly.artifacts);
        on_progress(Progress {
            kind: assembler.kind(),
            completed: i + 1,
            total,
            archetype: archetype.id,
        });
    }
    Ok((records, artifacts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use copyforge_archetype::FixedNumbers;
    use copyforge_model::BusinessProfile;

    fn ready(kind: ArtifactKind) -> ReadyProfile {
        let profile = BusinessProfile::new()
            .with_name("Acme")
            .with_industry("SaaS")
            .with_business_model("subscription")
            .with_target_audience("founders")
            .with_product_or_service("a dashboard")
            .with_unique_value("24h support")
            .with_tone("friendly")
            .with_budget(10_000)
            .with_timeline("Q3")
            .with_objective(copyforge_model::Objective::LeadGeneration);
        ReadyProfile::check(kind, profile).unwrap()
    }

    fn engine() -> Engine {
        Engine::new(CopyDeck::default(), FixedNumbers::new())
    }

    #[test]
    fn rejects_kind_mismatch() {
        let err = engine()
            .generate(&GenerationRequest::new(ArtifactKind::Email), &ready(ArtifactKind::Ad), None)
            .unwrap_err();
        assert_eq!(
            err,
            EngineError::KindMismatch {
                requested: ArtifactKind::Email,
                validated: ArtifactKind::Ad
            }
        );
    }

    #[test]
    fn rejects_unknown_archetype() {
        let request = GenerationRequest::new(ArtifactKind::Ad).with_archetype("ad.billboard");
        let err = engine()
            .generate(&request, &ready(ArtifactKind::Ad), None)
            .unwrap_err();
        assert!(matches!(
            err,
            EngineError::Library(LibraryError::InvalidArchetypeReference { ref id, .. }) if id == "ad.billboard"
        ));
        assert_eq!(err.to_string(), "invalid archetype reference: 'ad.billboard'");
    }

    #[test]
    fn rejects_archetype_of_other_kind() {
        let request = GenerationRequest::new(ArtifactKind::Ad).with_archetype("email.welcome");
        assert!(engine().generate(&request, &ready(ArtifactKind::Ad), None).is_err());
    }

    #[test]
    fn website_defaults_to_first_archetype() {
        let engine = engine();
        let archetypes = engine
            .archetypes_for(&GenerationRequest::new(ArtifactKind::WebsiteSection))
            .unwrap();
        assert_eq!(archetypes.len(), 1);
        assert_eq!(archetypes[0].id, "website.authority");
    }

    #[test]
    fn progress_reports_each_archetype() {
        let mut seen = Vec::new();
        let generation = engine()
            .generate_with_progress(
                &GenerationRequest::new(ArtifactKind::SocialPost),
                &ready(ArtifactKind::SocialPost),
                None,
                |p| seen.push((p.completed, p.total, p.archetype)),
            )
            .unwrap();
        let total = engine().library().archetypes(ArtifactKind::SocialPost).len();
        assert_eq!(seen.len(), total);
        assert_eq!(seen.first().map(|s| s.0), Some(1));
        assert!(seen.iter().all(|s| s.1 == total));
        assert_eq!(seen.last().map(|s| s.0), Some(total));
        assert_eq!(generation.artifacts.len(), total);
    }

    #[test]
    fn engine_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Engine>();
    }
}
