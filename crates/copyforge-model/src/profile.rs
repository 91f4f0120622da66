//! Business profile model
//!
//! The facts a user supplies about their business. Every string field may be
//! blank and `budget` defaults to zero; consumers substitute fallbacks rather
//! than reject incomplete profiles.

use std::collections::BTreeSet;
use std::fmt::{self, Display, Formatter};
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::load::{parse_file, parse_str, PayloadFormat};

/// Structured business and marketing facts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BusinessProfile {
    /// Business or brand name
    pub name: String,
    /// Industry or vertical
    pub industry: String,
    /// Business model (B2B SaaS, marketplace, agency, ...)
    pub business_model: String,
    /// Who the marketing speaks to
    pub target_audience: String,
    /// What is being sold
    pub product_or_service: String,
    /// Differentiator
    pub unique_value: String,
    /// Voice (professional, friendly, bold, luxury, ...)
    pub tone: String,
    /// Budget in whole currency units, 0 when unknown
    pub budget: u64,
    /// Free-form timeline ("Q3", "6 weeks")
    pub timeline: String,
    /// Marketing objectives
    pub objectives: BTreeSet<Objective>,
}

impl BusinessProfile {
    /// Create an empty profile
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// With industry
    #[must_use]
    pub fn with_industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = industry.into();
        self
    }

    /// With business model
    #[must_use]
    pub fn with_business_model(mut self, model: impl Into<String>) -> Self {
        self.business_model = model.into();
        self
    }

    /// With target audience
    #[must_use]
    pub fn with_target_audience(mut self, audience: impl Into<String>) -> Self {
        self.target_audience = audience.into();
        self
    }

    /// With product or service
    #[must_use]
    pub fn with_product_or_service(mut self, product: impl Into<String>) -> Self {
        self.product_or_service = product.into();
        self
    }

    /// With unique value proposition
    #[must_use]
    pub fn with_unique_value(mut self, value: impl Into<String>) -> Self {
        self.unique_value = value.into();
        self
    }

    /// With tone
    #[must_use]
    pub fn with_tone(mut self, tone: impl Into<String>) -> Self {
        self.tone = tone.into();
        self
    }

    /// With budget
    #[must_use]
    pub fn with_budget(mut self, budget: u64) -> Self {
        self.budget = budget;
        self
    }

    /// With timeline
    #[must_use]
    pub fn with_timeline(mut self, timeline: impl Into<String>) -> Self {
        self.timeline = timeline.into();
        self
    }

    /// Add an objective
    #[must_use]
    pub fn with_objective(mut self, objective: Objective) -> Self {
        self.objectives.insert(objective);
        self
    }

    /// Raw text of a field, `None` when blank/zero/empty
    ///
    /// `budget` is returned unformatted and `objectives` returns the first
    /// objective in set order.
    #[must_use]
    pub fn field_text(&self, field: ProfileField) -> Option<String> {
        let text = match field {
            ProfileField::Name => self.name.trim(),
            ProfileField::Industry => self.industry.trim(),
            ProfileField::BusinessModel => self.business_model.trim(),
            ProfileField::TargetAudience => self.target_audience.trim(),
            ProfileField::ProductOrService => self.product_or_service.trim(),
            ProfileField::UniqueValue => self.unique_value.trim(),
            ProfileField::Tone => self.tone.trim(),
            ProfileField::Timeline => self.timeline.trim(),
            ProfileField::Budget => {
                return (self.budget > 0).then(|| self.budget.to_string());
            }
            ProfileField::Objectives => {
                return self
                    .objectives
                    .iter()
                    .map(Objective::label)
                    .find(|label| !label.trim().is_empty())
                    .map(|label| label.trim().to_string());
            }
        };
        (!text.is_empty()).then(|| text.to_string())
    }

    /// Whether a field counts as filled in
    #[inline]
    #[must_use]
    pub fn has(&self, field: ProfileField) -> bool {
        self.field_text(field).is_some()
    }

    /// Fields from `fields` that are still blank, in the given order
    #[must_use]
    pub fn missing<'a, I>(&self, fields: I) -> Vec<ProfileField>
    where
        I: IntoIterator<Item = &'a ProfileField>,
    {
        fields.into_iter().copied().filter(|f| !self.has(*f)).collect()
    }

    /// Parse from JSON text
    ///
    /// # Errors
    /// Returns error if the JSON does not describe a profile
    pub fn from_json_str(json: &str) -> Result<Self, ModelError> {
        parse_str(json, PayloadFormat::Json)
    }

    /// Parse from YAML text
    ///
    /// # Errors
    /// Returns error if the YAML does not describe a profile
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

/// Marketing objective
///
/// Known objectives serialize to their display label; anything else is kept
/// verbatim as [`Objective::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Objective {
    /// Capture leads
    LeadGeneration,
    /// Grow awareness
    BrandAwareness,
    /// Drive purchases
    Sales,
    /// Keep existing customers
    CustomerRetention,
    /// Grow interaction
    Engagement,
    /// Anything else
    Custom(String),
}

impl Objective {
    /// Display label
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::LeadGeneration => "Lead Generation",
            Self::BrandAwareness => "Brand Awareness",
            Self::Sales => "Sales",
            Self::CustomerRetention => "Customer Retention",
            Self::Engagement => "Engagement",
            Self::Custom(label) => label,
        }
    }
}

impl From<String> for Objective {
    fn from(value: String) -> Self {
        let normalized: String = value
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "leadgeneration" | "leads" => Self::LeadGeneration,
            "brandawareness" | "awareness" => Self::BrandAwareness,
            "sales" => Self::Sales,
            "customerretention" | "retention" => Self::CustomerRetention,
            "engagement" => Self::Engagement,
            _ => Self::Custom(value),
        }
    }
}

impl From<&str> for Objective {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<Objective> for String {
    fn from(value: Objective) -> Self {
        value.label().to_string()
    }
}

impl Display for Objective {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Addressable profile fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProfileField {
    /// `name`
    Name,
    /// `industry`
    Industry,
    /// `businessModel`
    BusinessModel,
    /// `targetAudience`
    TargetAudience,
    /// `productOrService`
    ProductOrService,
    /// `uniqueValue`
    UniqueValue,
    /// `tone`
    Tone,
    /// `budget`
    Budget,
    /// `timeline`
    Timeline,
    /// `objectives`
    Objectives,
}

impl ProfileField {
    /// Every field, in declaration order
    pub const ALL: [ProfileField; 10] = [
        Self::Name,
        Self::Industry,
        Self::BusinessModel,
        Self::TargetAudience,
        Self::ProductOrService,
        Self::UniqueValue,
        Self::Tone,
        Self::Budget,
        Self::Timeline,
        Self::Objectives,
    ];

    /// Wire name (camelCase)
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Industry => "industry",
            Self::BusinessModel => "businessModel",
            Self::TargetAudience => "targetAudience",
            Self::ProductOrService => "productOrService",
            Self::UniqueValue => "uniqueValue",
            Self::Tone => "tone",
            Self::Budget => "budget",
            Self::Timeline => "timeline",
            Self::Objectives => "objectives",
        }
    }
}

impl Display for ProfileField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ProfileField {
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
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn empty_profile_has_no_fields() {
        let profile = BusinessProfile::new();
        for field in ProfileField::ALL {
            assert!(!profile.has(field), "{field} should be blank");
        }
    }

    #[test]
    fn whitespace_counts_as_blank() {
        let profile = BusinessProfile::new().with_name("   ");
        assert!(!profile.has(ProfileField::Name));
        assert_eq!(profile.missing(&[ProfileField::Name]), vec![ProfileField::Name]);
    }

    #[test]
    fn budget_zero_is_missing() {
        let profile = BusinessProfile::new();
        assert!(!profile.has(ProfileField::Budget));
        assert!(profile.with_budget(500).has(ProfileField::Budget));
    }

    #[test]
    fn objectives_parse_known_labels() {
        assert_eq!(Objective::from("Lead Generation"), Objective::LeadGeneration);
        assert_eq!(Objective::from("brand-awareness"), Objective::BrandAwareness);
        assert_eq!(
            Objective::from("Win awards"),
            Objective::Custom("Win awards".to_string())
        );
    }

    #[test]
    fn field_text_for_objectives_uses_first_in_order() {
        let profile = BusinessProfile::new()
            .with_objective(Objective::Sales)
            .with_objective(Objective::LeadGeneration);
        assert_eq!(
            profile.field_text(ProfileField::Objectives).as_deref(),
            Some("Lead Generation")
        );
    }

    #[test]
    fn json_uses_camel_case_and_defaults() {
        let profile = BusinessProfile::from_json_str(
            r#"{"name":"Acme","targetAudience":"founders","objectives":["Lead Generation"]}"#,
        )
        .unwrap();
        assert_eq!(profile.name, "Acme");
        assert_eq!(profile.target_audience, "founders");
        assert_eq!(profile.budget, 0);
        assert!(profile.objectives.contains(&Objective::LeadGeneration));
    }

    #[test]
    fn yaml_round_trips_objective_labels() {
        let profile = BusinessProfile::from_yaml_str(
            "name: Acme\nuniqueValue: 24h support\nobjectives:\n  - Sales\n",
        )
        .unwrap();
        assert_eq!(profile.unique_value, "24h support");
        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains(r#""objectives":["Sales"]"#));
    }

    #[test]
    fn loads_from_yaml_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "name: Acme\nindustry: SaaS").unwrap();
        let profile = BusinessProfile::from_path(file.path()).unwrap();
        assert_eq!(profile.industry, "SaaS");
    }

    #[test]
    fn rejects_unknown_extension() {
        let file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        assert!(matches!(
            BusinessProfile::from_path(file.path()),
            Err(ModelError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn profile_field_keys_parse_back() {
        for field in ProfileField::ALL {
            assert_eq!(field.key().parse::<ProfileField>().unwrap(), field);
        }
    }
}
