//! Copy deck
//!
//! The editable dictionary of fallback phrases and site chrome text. It is an
//! explicit configuration value: loaded once (usually from TOML) and passed to
//! whatever needs copy text. Nothing reads it from ambient state.

use std::path::Path;

use copyforge_model::{InsightField, ProfileField};
use serde::{Deserialize, Serialize};

use crate::error::DeckError;

/// Fallback phrases for blank profile fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileFallbacks {
    /// `name`
    pub name: String,
    /// `industry`
    pub industry: String,
    /// `businessModel`
    pub business_model: String,
    /// `targetAudience`
    pub target_audience: String,
    /// `productOrService`
    pub product_or_service: String,
    /// `uniqueValue`
    pub unique_value: String,
    /// `tone`
    pub tone: String,
    /// `budget`
    pub budget: String,
    /// `timeline`
    pub timeline: String,
    /// `objectives`
    pub objectives: String,
}

impl Default for ProfileFallbacks {
    fn default() -> Self {
        Self {
            name: "our team".to_string(),
            industry: "your industry".to_string(),
            business_model: "our business".to_string(),
            target_audience: "people like you".to_string(),
            product_or_service: "our solution".to_string(),
            unique_value: "a smarter way to get results".to_string(),
            tone: "professional".to_string(),
            budget: "an amount that fits their stage".to_string(),
            timeline: "the next few months".to_string(),
            objectives: "growth".to_string(),
        }
    }
}

/// Fallback phrases for insight fields
///
/// Only reached when a caller forces the enriched branch without data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InsightFallbacks {
    /// `topPerformers`
    pub top_performers: String,
    /// `commonEmotions`
    pub common_emotions: String,
    /// `marketGaps`
    pub market_gaps: String,
    /// `successMetrics`
    pub success_metrics: String,
}

impl Default for InsightFallbacks {
    fn default() -> Self {
        Self {
            top_performers: "the big names".to_string(),
            common_emotions: "confidence".to_string(),
            market_gaps: "the problems others overlook".to_string(),
            success_metrics: "an industry-average".to_string(),
        }
    }
}

/// Text for the generated site skeleton
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteCopy {
    /// Navigation button label
    pub nav_cta: String,
    /// Accessibility skip link
    pub skip_link: String,
    /// Footer line after the business name
    pub footer_tagline: String,
    /// Rights notice
    pub rights: String,
}

impl Default for SiteCopy {
    fn default() -> Self {
        Self {
            nav_cta: "Get Started".to_string(),
            skip_link: "Skip to content".to_string(),
            footer_tagline: "Built for the people we serve.".to_string(),
            rights: "All rights reserved.".to_string(),
        }
    }
}

/// The injected copy dictionary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CopyDeck {
    /// Rendered for tokens that name no known field
    pub unknown_placeholder: String,
    /// Prefix for budget amounts
    pub currency_symbol: String,
    /// Profile fallbacks
    pub profile: ProfileFallbacks,
    /// Insight fallbacks
    pub insight: InsightFallbacks,
    /// Site chrome
    pub site: SiteCopy,
}

impl Default for CopyDeck {
    fn default() -> Self {
        Self {
            unknown_placeholder: "this".to_string(),
            currency_symbol: "$".to_string(),
            profile: ProfileFallbacks::default(),
            insight: InsightFallbacks::default(),
            site: SiteCopy::default(),
        }
    }
}

impl CopyDeck {
    /// Parse from TOML; keys left out keep their defaults
    ///
    /// # Errors
    /// Returns error on invalid TOML or a blank fallback phrase
    pub fn from_toml_str(text: &str) -> Result<Self, DeckError> {
        let deck: Self = toml::from_str(text)?;
        deck.validate()?;
        Ok(deck)
    }

    /// Load from a TOML file
    ///
    /// # Errors
    /// Returns I/O, parse or validation errors
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DeckError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| DeckError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Serialize to TOML
    ///
    /// # Errors
    /// Returns error if serialization fails
    pub fn to_toml(&self) -> Result<String, DeckError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject blank fallbacks; interpolated copy must never come out empty
    ///
    /// # Errors
    /// Returns [`DeckError::BlankFallback`] naming the first blank entry
    pub fn validate(&self) -> Result<(), DeckError> {
        let profile = ProfileField::ALL
            .into_iter()
            .map(|f| (f.key(), self.profile_fallback(f)));
        let insight = InsightField::ALL
            .into_iter()
            .map(|f| (f.key(), self.insight_fallback(f)));
        let other = [("unknownPlaceholder", self.unknown_placeholder.as_str())];
        match profile.chain(insight).chain(other).find(|(_, text)| text.trim().is_empty()) {
            Some((key, _)) => Err(DeckError::BlankFallback(key.to_string())),
            None => Ok(()),
        }
    }

    /// Fallback phrase for a blank profile field
    #[must_use]
    pub fn profile_fallback(&self, field: ProfileField) -> &str {
        let p = &self.profile;
        match field {
            ProfileField::Name => &p.name,
            ProfileField::Industry => &p.industry,
            ProfileField::BusinessModel => &p.business_model,
            ProfileField::TargetAudience => &p.target_audience,
            ProfileField::ProductOrService => &p.product_or_service,
            ProfileField::UniqueValue => &p.unique_value,
            ProfileField::Tone => &p.tone,
            ProfileField::Budget => &p.budget,
            ProfileField::Timeline => &p.timeline,
            ProfileField::Objectives => &p.objectives,
        }
    }

    /// Fallback phrase for an absent insight field
    #[must_use]
    pub fn insight_fallback(&self, field: InsightField) -> &str {
        let i = &self.insight;
        match field {
            InsightField::TopPerformers => &i.top_performers,
            InsightField::CommonEmotions => &i.common_emotions,
            InsightField::MarketGaps => &i.market_gaps,
            InsightField::SuccessMetrics => &i.success_metrics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_deck_is_valid() {
        assert!(CopyDeck::default().validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let deck = CopyDeck::from_toml_str(
            r#"
currency_symbol = "€"

[profile]
name = "the studio"
"#,
        )
        .unwrap();
        assert_eq!(deck.currency_symbol, "€");
        assert_eq!(deck.profile_fallback(ProfileField::Name), "the studio");
        assert_eq!(deck.profile_fallback(ProfileField::Industry), "your industry");
        assert_eq!(deck.site.nav_cta, "Get Started");
    }

    #[test]
    fn blank_fallback_is_rejected() {
        let err = CopyDeck::from_toml_str("[profile]\ntarget_audience = \"  \"\n").unwrap_err();
        assert!(matches!(err, DeckError::BlankFallback(key) if key == "targetAudience"));
    }

    #[test]
    fn invalid_toml_is_rejected() {
        assert!(matches!(
            CopyDeck::from_toml_str("currency_symbol = "),
            Err(DeckError::InvalidToml(_))
        ));
    }

    #[test]
    fn toml_round_trip() {
        let deck = CopyDeck::default();
        let text = deck.to_toml().unwrap();
        assert_eq!(CopyDeck::from_toml_str(&text).unwrap(), deck);
    }

    #[test]
    fn from_path_reads_overrides_and_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("copy-deck.toml");
        std::fs::write(&path, "[site]\nnav_cta = \"Book a Call\"\n").unwrap();

        let deck = CopyDeck::from_path(&path).unwrap();
        assert_eq!(deck.site.nav_cta, "Book a Call");
        assert_eq!(deck.site.skip_link, CopyDeck::default().site.skip_link);

        let missing = dir.path().join("absent.toml");
        let err = CopyDeck::from_path(&missing).unwrap_err();
        assert!(matches!(err, DeckError::Io { ref path, .. } if *path == missing));
    }

    #[test]
    fn shipped_deck_parses() {
        let text = include_str!("../../../config/copy-deck.toml");
        let deck = CopyDeck::from_toml_str(text).unwrap();
        assert!(deck.validate().is_ok());
    }
}
