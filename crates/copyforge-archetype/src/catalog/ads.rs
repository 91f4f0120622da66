//! Ad archetypes

use copyforge_model::ArtifactKind;

use crate::archetype::{Archetype, ArchetypeMeta, Branching, SlotTemplate};

pub(crate) const ADS: &[Archetype] = &[
    Archetype {
        id: "ad.competitive-advantage",
        kind: ArtifactKind::Ad,
        name: "Competitive Advantage",
        version: 1,
        branching: Branching::AllOrNothing,
        meta: ArchetypeMeta::Ad {
            triggers: &["confidence", "superiority"],
        },
        slots: &[
            SlotTemplate::enriched(
                "headline",
                "Why {{profile.targetAudience}} are switching to {{profile.name}}",
                "Tired of {{insight.marketGaps}}? {{profile.name}} fixes that",
            ),
            SlotTemplate::enriched(
                "body",
                "{{profile.name}} gives {{profile.targetAudience}} {{profile.uniqueValue}}. See why teams in {{profile.industry}} make the switch.",
                "Unlike {{insight.topPerformers}}, {{profile.name}} gives {{profile.targetAudience}} {{profile.uniqueValue}} without the {{insight.marketGaps}}.",
            ),
            SlotTemplate::baseline("cta", "See the Difference"),
            SlotTemplate::baseline(
                "rationale",
                "Positions {{profile.name}} against the status quo so {{profile.targetAudience}} see a clear reason to switch.",
            ),
        ],
    },
    Archetype {
        id: "ad.problem-solution",
        kind: ArtifactKind::Ad,
        name: "Problem-Solution",
        version: 1,
        branching: Branching::PerField,
        meta: ArchetypeMeta::Ad {
            triggers: &["frustration", "relief"],
        },
        slots: &[
            SlotTemplate::enriched(
                "headline",
                "Still struggling? {{profile.name}} has the answer",
                "Still dealing with {{insight.marketGaps}}? There's a better way",
            ),
            SlotTemplate::baseline(
                "body",
                "Most {{profile.targetAudience}} waste hours on tools that never deliver. {{profile.productOrService}} from {{profile.name}} changes that with {{profile.uniqueValue}}.",
            ),
            SlotTemplate::baseline("cta", "Solve It Today"),
            SlotTemplate::baseline(
                "rationale",
                "Names the pain first and then presents {{profile.name}} as the relief, a problem-agitation-solution arc.",
            ),
        ],
    },
    Archetype {
        id: "ad.social-proof",
        kind: ArtifactKind::Ad,
        name: "Social Proof",
        version: 1,
        branching: Branching::AllOrNothing,
        meta: ArchetypeMeta::Ad {
            triggers: &["belonging", "trust"],
        },
        slots: &[
            SlotTemplate::enriched(
                "headline",
                "Join {{number.customers}}+ {{profile.targetAudience}} who trust {{profile.name}}",
                "The market converts at {{insight.successMetrics}}. {{profile.name}} customers beat it",
            ),
            SlotTemplate::baseline(
                "body",
                "{{profile.targetAudience}} choose {{profile.name}} for {{profile.uniqueValue}}. See what the buzz is about.",
            ),
            SlotTemplate::baseline("cta", "Join Them Today"),
            SlotTemplate::baseline(
                "rationale",
                "Social proof: {{profile.targetAudience}} follow the choices of people like them.",
            ),
        ],
    },
    Archetype {
        id: "ad.transformation",
        kind: ArtifactKind::Ad,
        name: "Transformation",
        version: 1,
        branching: Branching::PerField,
        meta: ArchetypeMeta::Ad {
            triggers: &["aspiration", "hope"],
        },
        slots: &[
            SlotTemplate::baseline("headline", "From stuck to scaling with {{profile.name}}"),
            SlotTemplate::enriched(
                "body",
                "Picture your business a few months from now: more {{profile.objectives}}, less stress. {{profile.name}} makes it happen with {{profile.uniqueValue}}.",
                "Turn {{insight.commonEmotions}} into momentum. {{profile.name}} helps {{profile.targetAudience}} get more {{profile.objectives}} with {{profile.uniqueValue}}.",
            ),
            SlotTemplate::baseline("cta", "Start Your Transformation"),
            SlotTemplate::baseline(
                "rationale",
                "Sells the after-state so {{profile.targetAudience}} can picture the result before they buy.",
            ),
        ],
    },
    Archetype {
        id: "ad.exclusive-offer",
        kind: ArtifactKind::Ad,
        name: "Exclusive Offer",
        version: 1,
        branching: Branching::AllOrNothing,
        meta: ArchetypeMeta::Ad {
            triggers: &["exclusivity", "urgency"],
        },
        slots: &[
            SlotTemplate::baseline("headline", "An invitation for {{profile.targetAudience}} only"),
            SlotTemplate::enriched(
                "body",
                "Spots are limited. Get {{profile.productOrService}} from {{profile.name}} with {{profile.uniqueValue}}, reserved for a small group each month.",
                "Spots are limited. While {{insight.topPerformers}} chase everyone, {{profile.name}} reserves {{profile.uniqueValue}} for a small group each month.",
            ),
            SlotTemplate::baseline("cta", "Claim Your Spot"),
            SlotTemplate::baseline(
                "rationale",
                "Scarcity raises perceived value and prompts a faster decision.",
            ),
        ],
    },
];
