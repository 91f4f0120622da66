//! Input steps per artifact kind

use copyforge_model::{ArtifactKind, BusinessProfile, ProfileField};
use serde::Serialize;

use ProfileField::{
    Budget, BusinessModel, Industry, Name, Objectives, ProductOrService, TargetAudience, Timeline,
    Tone, UniqueValue,
};

/// One step of the input-collection flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepSpec {
    /// Step title shown to the user
    pub title: &'static str,
    /// Fields that must be filled before leaving the step
    pub required: &'static [ProfileField],
}

impl StepSpec {
    const fn new(title: &'static str, required: &'static [ProfileField]) -> Self {
        Self { title, required }
    }

    /// Required fields still blank in `profile`
    #[must_use]
    pub fn missing(&self, profile: &BusinessProfile) -> Vec<ProfileField> {
        profile.missing(self.required)
    }

    /// Whether every required field is filled
    #[must_use]
    pub fn holds(&self, profile: &BusinessProfile) -> bool {
        self.required.iter().all(|f| profile.has(*f))
    }
}

const AD: &[StepSpec] = &[
    StepSpec::new("Business Basics", &[Name, Industry]),
    StepSpec::new("Audience", &[TargetAudience]),
    StepSpec::new("Offer", &[UniqueValue]),
    StepSpec::new("Goals", &[Objectives]),
];

const WEBSITE: &[StepSpec] = &[
    StepSpec::new("Business", &[Name, Industry, BusinessModel]),
    StepSpec::new("Audience", &[TargetAudience]),
    StepSpec::new("Offer", &[ProductOrService, UniqueValue]),
    StepSpec::new("Brand Voice", &[Tone]),
];

const EMAIL: &[StepSpec] = &[
    StepSpec::new("Business", &[Name, ProductOrService]),
    StepSpec::new("Audience", &[TargetAudience]),
    StepSpec::new("Goals", &[Objectives]),
];

const SOCIAL: &[StepSpec] = &[
    StepSpec::new("Business", &[Name, Industry]),
    StepSpec::new("Audience & Voice", &[TargetAudience, Tone]),
    StepSpec::new("Goals", &[Objectives]),
];

const SALES: &[StepSpec] = &[
    StepSpec::new("Business", &[Name, ProductOrService]),
    StepSpec::new("Prospect", &[TargetAudience]),
    StepSpec::new("Value", &[UniqueValue]),
    StepSpec::new("Budget & Timing", &[Budget, Timeline]),
    StepSpec::new("Objectives", &[Objectives]),
];

/// Ordered steps for `kind`
#[must_use]
pub const fn steps_for(kind: ArtifactKind) -> &'static [StepSpec] {
    match kind {
        ArtifactKind::Ad => AD,
        ArtifactKind::WebsiteSection => WEBSITE,
        ArtifactKind::Email => EMAIL,
        ArtifactKind::SocialPost => SOCIAL,
        ArtifactKind::SalesScript => SALES,
    }
}
