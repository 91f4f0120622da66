//! Testing utilities for the copyforge workspace
//!
//! Shared profile and insight fixtures plus proptest strategies.

#![allow(missing_docs)]

use copyforge_model::{BusinessProfile, CompetitiveInsight, Objective, Performer};
use proptest::prelude::*;

/// Complete profile that satisfies every artifact kind's gate
pub fn acme_profile() -> BusinessProfile {
    BusinessProfile::new()
        .with_name("Acme Analytics")
        .with_industry("SaaS")
        .with_business_model("B2B subscription")
        .with_target_audience("growing marketing teams")
        .with_product_or_service("an analytics dashboard")
        .with_unique_value("setup in under ten minutes")
        .with_tone("friendly")
        .with_budget(25_000)
        .with_timeline("the next quarter")
        .with_objective(Objective::LeadGeneration)
}

pub fn empty_profile() -> BusinessProfile {
    BusinessProfile::new()
}

/// Profile with only a name; passes no gate beyond the first field
pub fn name_only_profile() -> BusinessProfile {
    BusinessProfile::new().with_name("Acme Analytics")
}

/// Insight with every field populated
pub fn rival_insight() -> CompetitiveInsight {
    CompetitiveInsight::new()
        .with_top_performer(Performer::named("Rival"))
        .with_common_emotion("Urgency")
        .with_market_gap("slow onboarding")
        .with_avg_conversion_rate(2.4)
}

/// Insight carrying market gaps only
pub fn gap_only_insight() -> CompetitiveInsight {
    CompetitiveInsight::new().with_market_gap("slow onboarding")
}

pub fn empty_insight() -> CompetitiveInsight {
    CompetitiveInsight::default()
}

fn optional_text() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("   ".to_string()),
        "[A-Za-z][A-Za-z ]{0,20}",
    ]
}

fn objective() -> impl Strategy<Value = Objective> {
    prop_oneof![
        Just(Objective::LeadGeneration),
        Just(Objective::BrandAwareness),
        Just(Objective::Sales),
        Just(Objective::CustomerRetention),
        Just(Objective::Engagement),
        "[a-z]{3,12}".prop_map(Objective::Custom),
    ]
}

prop_compose! {
    /// Profiles with any mix of blank, whitespace and populated fields
    pub fn arb_profile()(
        name in optional_text(),
        industry in optional_text(),
        business_model in optional_text(),
        target_audience in optional_text(),
        product_or_service in optional_text(),
        unique_value in optional_text(),
        tone in optional_text(),
        budget in prop_oneof![Just(0u64), 1u64..1_000_000],
        timeline in optional_text(),
        objectives in proptest::collection::btree_set(objective(), 0..3),
    ) -> BusinessProfile {
        BusinessProfile {
            name,
            industry,
            business_model,
            target_audience,
            product_or_service,
            unique_value,
            tone,
            budget,
            timeline,
            objectives,
        }
    }
}

prop_compose! {
    /// Insights with each field independently present or absent
    pub fn arb_insight()(
        performers in proptest::collection::vec("[A-Z][a-z]{2,10}", 0..3),
        emotions in proptest::collection::vec(optional_text(), 0..3),
        gaps in proptest::collection::vec(optional_text(), 0..3),
        rate in proptest::option::of(0.0f64..20.0),
    ) -> CompetitiveInsight {
        let mut insight = CompetitiveInsight::new();
        for name in performers {
            insight = insight.with_top_performer(Performer::named(name));
        }
        insight.common_emotions = emotions;
        insight.market_gaps = gaps;
        if let Some(rate) = rate {
            insight = insight.with_avg_conversion_rate(rate);
        }
        insight
    }
}

/// Optional insight, absent about a quarter of the time
pub fn arb_optional_insight() -> impl Strategy<Value = Option<CompetitiveInsight>> {
    proptest::option::weighted(0.75, arb_insight())
}
