//! Competitive insight model
//!
//! Findings from an external market-analysis provider. The whole object is
//! optional for the engine and every field inside it is optional too, so all
//! accessors here are null-safe and report absence as `None`.

use std::fmt::{self, Display, Formatter};
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::load::{parse_file, parse_str, PayloadFormat};

/// Competitive and market findings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompetitiveInsight {
    /// Best-performing competitors, strongest first
    pub top_performers: Vec<Performer>,
    /// Emotional triggers common across winning campaigns
    pub common_emotions: Vec<String>,
    /// Needs nobody in the market serves well
    pub market_gaps: Vec<String>,
    /// Benchmarks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_metrics: Option<SuccessMetrics>,
}

/// A competitor that performs well
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Performer {
    /// Competitor name
    pub name: String,
    /// Landing page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Their best headline
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    /// Engagement rate in percent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engagement_rate: Option<f64>,
}

impl Performer {
    /// Performer with only a name
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Market benchmarks
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SuccessMetrics {
    /// Average conversion rate in percent
    pub avg_conversion_rate: Option<f64>,
    /// Average engagement rate in percent
    pub avg_engagement_rate: Option<f64>,
    /// Average cost per click
    pub avg_cost_per_click: Option<f64>,
}

impl CompetitiveInsight {
    /// Create an empty insight
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a top performer
    #[must_use]
    pub fn with_top_performer(mut self, performer: Performer) -> Self {
        self.top_performers.push(performer);
        self
    }

    /// Add a common emotion
    #[must_use]
    pub fn with_common_emotion(mut self, emotion: impl Into<String>) -> Self {
        self.common_emotions.push(emotion.into());
        self
    }

    /// Add a market gap
    #[must_use]
    pub fn with_market_gap(mut self, gap: impl Into<String>) -> Self {
        self.market_gaps.push(gap.into());
        self
    }

    /// Set the average conversion rate benchmark
    #[must_use]
    pub fn with_avg_conversion_rate(mut self, rate: f64) -> Self {
        self.success_metrics
            .get_or_insert_with(SuccessMetrics::default)
            .avg_conversion_rate = Some(rate);
        self
    }

    /// Name of the strongest competitor
    #[must_use]
    pub fn top_performer(&self) -> Option<&str> {
        self.top_performers
            .first()
            .map(|p| p.name.trim())
            .filter(|name| !name.is_empty())
    }

    /// Most common emotional trigger
    #[must_use]
    pub fn common_emotion(&self) -> Option<&str> {
        first_non_blank(&self.common_emotions)
    }

    /// Most significant market gap
    #[must_use]
    pub fn market_gap(&self) -> Option<&str> {
        first_non_blank(&self.market_gaps)
    }

    /// Average conversion rate, only when positive and finite
    #[must_use]
    pub fn avg_conversion_rate(&self) -> Option<f64> {
        self.success_metrics
            .as_ref()
            .and_then(|m| m.avg_conversion_rate)
            .filter(|rate| rate.is_finite() && *rate > 0.0)
    }

    /// Whether an insight field is present and non-empty
    #[must_use]
    pub fn has(&self, field: InsightField) -> bool {
        match field {
            InsightField::TopPerformers => self.top_performer().is_some(),
            InsightField::CommonEmotions => self.common_emotion().is_some(),
            InsightField::MarketGaps => self.market_gap().is_some(),
            InsightField::SuccessMetrics => self.avg_conversion_rate().is_some(),
        }
    }

    /// Whether nothing usable is present
    #[must_use]
    pub fn is_empty(&self) -> bool {
        InsightField::ALL.iter().all(|f| !self.has(*f))
    }

    /// Parse from JSON text
    ///
    /// # Errors
    /// Returns error if the JSON does not describe an insight
    pub fn from_json_str(json: &str) -> Result<Self, ModelError> {
        parse_str(json, PayloadFormat::Json)
    }

    /// Parse from YAML text
    ///
    /// # Errors
    /// Returns error if the YAML does not describe an insight
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ModelError> {
        parse_str(yaml, PayloadFormat::Yaml)
    }

    /// Load from a `.json`, `.yaml` or `.yml` file
    ///
    /// # Errors
    /// Returns I/O, format or parse errors
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        parse_file(path.as_ref())
    }
}

fn first_non_blank(items: &[String]) -> Option<&str> {
    items.first().map(|s| s.trim()).filter(|s| !s.is_empty())
}

/// Addressable insight fields
///
/// The key of each field is what ends up in artifact provenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InsightField {
    /// `topPerformers[0].name`
    TopPerformers,
    /// `commonEmotions[0]`
    CommonEmotions,
    /// `marketGaps[0]`
    MarketGaps,
    /// `successMetrics.avgConversionRate`
    SuccessMetrics,
}

impl InsightField {
    /// Every field, in declaration order
    pub const ALL: [InsightField; 4] = [
        Self::TopPerformers,
        Self::CommonEmotions,
        Self::MarketGaps,
        Self::SuccessMetrics,
    ];

    /// Wire name
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::TopPerformers => "topPerformers",
            Self::CommonEmotions => "commonEmotions",
            Self::MarketGaps => "marketGaps",
            Self::SuccessMetrics => "successMetrics",
        }
    }
}

impl Display for InsightField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for InsightField {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.key() == s)
            .ok_or_else(|| ModelError::UnknownField(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_insight_has_nothing() {
        let insight = CompetitiveInsight::new();
        assert!(insight.is_empty());
        assert_eq!(insight.top_performer(), None);
        assert_eq!(insight.avg_conversion_rate(), None);
    }

    #[test]
    fn blank_first_entries_are_absent() {
        let insight = CompetitiveInsight::new()
            .with_top_performer(Performer::named("  "))
            .with_market_gap("");
        assert!(!insight.has(InsightField::TopPerformers));
        assert!(!insight.has(InsightField::MarketGaps));
    }

    #[test]
    fn performers_without_metrics() {
        let insight = CompetitiveInsight::new().with_top_performer(Performer::named("Rival"));
        assert!(insight.has(InsightField::TopPerformers));
        assert!(!insight.has(InsightField::SuccessMetrics));
    }

    #[test]
    fn non_positive_rate_is_absent() {
        let insight = CompetitiveInsight::new().with_avg_conversion_rate(0.0);
        assert!(!insight.has(InsightField::SuccessMetrics));
        let insight = CompetitiveInsight::new().with_avg_conversion_rate(f64::NAN);
        assert!(!insight.has(InsightField::SuccessMetrics));
        let insight = CompetitiveInsight::new().with_avg_conversion_rate(3.2);
        assert_eq!(insight.avg_conversion_rate(), Some(3.2));
    }

    #[test]
    fn parses_partial_json() {
        let insight = CompetitiveInsight::from_json_str(
            r#"{"topPerformers":[{"name":"Rival"}],"marketGaps":["slow onboarding"]}"#,
        )
        .unwrap();
        assert_eq!(insight.top_performer(), Some("Rival"));
        assert_eq!(insight.market_gap(), Some("slow onboarding"));
        assert!(insight.success_metrics.is_none());
    }

    #[test]
    fn parses_metrics_from_yaml() {
        let insight = CompetitiveInsight::from_yaml_str(
            "successMetrics:\n  avgConversionRate: 4.5\ncommonEmotions: [urgency]\n",
        )
        .unwrap();
        assert_eq!(insight.avg_conversion_rate(), Some(4.5));
        assert_eq!(insight.common_emotion(), Some("urgency"));
    }

    #[test]
    fn field_keys_parse_back() {
        for field in InsightField::ALL {
            assert_eq!(field.key().parse::<InsightField>().unwrap(), field);
        }
    }
}
