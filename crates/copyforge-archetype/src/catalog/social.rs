//! Social post archetypes

use copyforge_model::ArtifactKind;

use crate::archetype::{Archetype, ArchetypeMeta, Branching, SlotTemplate};

pub(crate) const SOCIAL: &[Archetype] = &[
    Archetype {
        id: "social.educational-tip",
        kind: ArtifactKind::SocialPost,
        name: "Educational Tip",
        version: 1,
        branching: Branching::PerField,
        meta: ArchetypeMeta::Social {
            post_type: "Educational Tip",
            hashtags: &["Tips", "HowTo"],
        },
        slots: &[
            SlotTemplate::enriched(
                "caption",
                "Quick tip for {{profile.targetAudience}}: the fastest path to more {{profile.objectives}} is leaning into what makes you different. For us, that's {{profile.uniqueValue}}.",
                "Quick tip for {{profile.targetAudience}}: most of the market still ignores {{insight.marketGaps}}. Solve it and you stand out instantly.",
            ),
            SlotTemplate::baseline("callToAction", "Save this for later"),
        ],
    },
    Archetype {
        id: "social.behind-the-scenes",
        kind: ArtifactKind::SocialPost,
        name: "Behind the Scenes",
        version: 1,
        branching: Branching::PerField,
        meta: ArchetypeMeta::Social {
            post_type: "Behind the Scenes",
            hashtags: &["BehindTheScenes", "TeamWork"],
        },
        slots: &[
            SlotTemplate::baseline(
                "caption",
                "A peek behind the curtain at {{profile.name}}: this is how we deliver {{profile.uniqueValue}}, day in and day out.",
            ),
            SlotTemplate::baseline("callToAction", "Follow for more"),
        ],
    },
    Archetype {
        id: "social.customer-story",
        kind: ArtifactKind::SocialPost,
        name: "Customer Story",
        version: 1,
        branching: Branching::PerField,
        meta: ArchetypeMeta::Social {
            post_type: "Customer Story",
            hashtags: &["CustomerLove", "SuccessStory"],
        },
        slots: &[
            SlotTemplate::baseline(
                "caption",
                "\"{{profile.name}} changed how we work.\" Hear from one of our {{number.customers}}+ happy customers about {{profile.productOrService}}.",
            ),
            SlotTemplate::baseline("callToAction", "Read the full story"),
        ],
    },
    Archetype {
        id: "social.engagement-question",
        kind: ArtifactKind::SocialPost,
        name: "Engagement Question",
        version: 1,
        branching: Branching::PerField,
        meta: ArchetypeMeta::Social {
            post_type: "Engagement Question",
            hashtags: &["Community", "LetsTalk"],
        },
        slots: &[
            SlotTemplate::enriched(
                "caption",
                "Question for {{profile.targetAudience}}: what's the biggest thing standing between you and more {{profile.objectives}}? Tell us below.",
                "Question for {{profile.targetAudience}}: is {{insight.marketGaps}} holding you back too? Tell us below.",
            ),
            SlotTemplate::baseline("callToAction", "Comment below"),
        ],
    },
    Archetype {
        id: "social.promotional",
        kind: ArtifactKind::SocialPost,
        name: "Promotional",
        version: 1,
        branching: Branching::PerField,
        meta: ArchetypeMeta::Social {
            post_type: "Promotional",
            hashtags: &["SpecialOffer"],
        },
        slots: &[
            SlotTemplate::enriched(
                "caption",
                "{{profile.productOrService}} with {{profile.uniqueValue}} is here. Built for {{profile.targetAudience}} who want results, not excuses.",
                "Everyone's talking about {{insight.topPerformers}}. Here's what they don't offer: {{profile.uniqueValue}}. Meet {{profile.productOrService}}.",
            ),
            SlotTemplate::baseline("callToAction", "Learn more at the link in bio"),
        ],
    },
];
