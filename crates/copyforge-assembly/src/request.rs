//! Generation requests and progress events

use copyforge_gate::ReadyProfile;
use copyforge_model::{AdPlatform, ArtifactKind, CompetitiveInsight};
use serde::{Deserialize, Serialize};

use crate::email::max_start_day;

/// What to generate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerationRequest {
    /// Artifact kind
    pub kind: ArtifactKind,
    /// Ad placement (ads only)
    pub platform: AdPlatform,
    /// Restrict to one archetype id; websites default to the first archetype
    pub archetype: Option<String>,
    /// Also build the static site bundle (websites only)
    pub full_site: bool,
    /// Day of the first email (emails only, 1-based)
    pub start_day: u16,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            kind: ArtifactKind::Ad,
            platform: AdPlatform::default(),
            archetype: None,
            full_site: false,
            start_day: 1,
        }
    }
}

impl GenerationRequest {
    /// Request every archetype of `kind`
    #[must_use]
    pub fn new(kind: ArtifactKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// With ad platform
    #[inline]
    #[must_use]
    pub fn with_platform(mut self, platform: AdPlatform) -> Self {
        self.platform = platform;
        self
    }

    /// With a single archetype
    #[inline]
    #[must_use]
    pub fn with_archetype(mut self, id: impl Into<String>) -> Self {
        self.archetype = Some(id.into());
        self
    }

    /// With the static site bundle
    #[inline]
    #[must_use]
    pub fn with_full_site(mut self, full_site: bool) -> Self {
        self.full_site = full_site;
        self
    }

    /// With first email day, clamped to `1..=max_start_day()`
    #[inline]
    #[must_use]
    pub fn with_start_day(mut self, day: u16) -> Self {
        self.start_day = day.clamp(1, max_start_day());
        self
    }
}

/// Reported after each archetype is assembled
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    /// Kind being generated
    pub kind: ArtifactKind,
    /// Archetypes finished so far
    pub completed: usize,
    /// Archetypes in this request
    pub total: usize,
    /// Id of the archetype just finished
    pub archetype: &'static str,
}

/// One independent unit of batch work
#[derive(Debug, Clone)]
pub struct BatchJob {
    /// What to generate
    pub request: GenerationRequest,
    /// Profile that passed the gate
    pub ready: ReadyProfile,
    /// Insight snapshot
    pub insight: Option<CompetitiveInsight>,
}

impl BatchJob {
    /// Job without insight
    #[must_use]
    pub fn new(request: GenerationRequest, ready: ReadyProfile) -> Self {
        Self {
            request,
            ready,
            insight: None,
        }
    }

    /// With insight snapshot
    #[must_use]
    pub fn with_insight(mut self, insight: CompetitiveInsight) -> Self {
        self.insight = Some(insight);
        self
    }
}
