//! Email sequence archetypes, in send order

use copyforge_model::ArtifactKind;

use crate::archetype::{Archetype, ArchetypeMeta, Branching, SlotTemplate};

pub(crate) const EMAILS: &[Archetype] = &[
    Archetype {
        id: "email.welcome",
        kind: ArtifactKind::Email,
        name: "Welcome",
        version: 1,
        branching: Branching::PerField,
        meta: ArchetypeMeta::Email { day: 1 },
        slots: &[
            SlotTemplate::baseline("subject", "Welcome to {{profile.name}}"),
            SlotTemplate::baseline(
                "body",
                "Hi there,\n\nThanks for joining {{profile.name}}. We built {{profile.productOrService}} for {{profile.targetAudience}} who want {{profile.uniqueValue}}.\n\nOver the next few days we'll share how to get the most out of it.\n\nTalk soon,\n{{profile.name}}",
            ),
            SlotTemplate::baseline("purpose", "Set expectations and deliver the first quick win."),
        ],
    },
    Archetype {
        id: "email.objection-handling",
        kind: ArtifactKind::Email,
        name: "Objection Handling",
        version: 1,
        branching: Branching::AllOrNothing,
        meta: ArchetypeMeta::Email { day: 3 },
        slots: &[
            SlotTemplate::enriched(
                "subject",
                "Is {{profile.name}} right for you?",
                "Why not just use {{insight.topPerformers}}?",
            ),
            SlotTemplate::enriched(
                "body",
                "Hi there,\n\nA question we hear a lot: \"Is this worth it?\" Here's the honest answer. {{profile.productOrService}} pays for itself through {{profile.uniqueValue}}.\n\nStill unsure? Reply and ask us anything.\n\nTalk soon,\n{{profile.name}}",
                "Hi there,\n\nFair question. {{insight.topPerformers}} is a solid choice, but it leaves {{insight.marketGaps}} unsolved. {{profile.name}} was built to close that gap with {{profile.uniqueValue}}.\n\nStill unsure? Reply and ask us anything.\n\nTalk soon,\n{{profile.name}}",
            ),
            SlotTemplate::baseline(
                "purpose",
                "Address the most common objection before it stalls the decision.",
            ),
        ],
    },
    Archetype {
        id: "email.urgency",
        kind: ArtifactKind::Email,
        name: "Urgency",
        version: 1,
        branching: Branching::PerField,
        meta: ArchetypeMeta::Email { day: 5 },
        slots: &[
            SlotTemplate::baseline("subject", "Your offer ends soon"),
            SlotTemplate::enriched(
                "body",
                "Hi there,\n\nOur current offer on {{profile.productOrService}} ends soon. Every week you wait is another week without {{profile.uniqueValue}}.\n\nLock it in today.\n\n{{profile.name}}",
                "Hi there,\n\nBusinesses in your market convert at {{insight.successMetrics}} on average. Waiting keeps you there. Our offer on {{profile.productOrService}} ends soon.\n\nLock it in today.\n\n{{profile.name}}",
            ),
            SlotTemplate::baseline("purpose", "Create a time-bound reason to act now."),
        ],
    },
    Archetype {
        id: "email.re-engagement",
        kind: ArtifactKind::Email,
        name: "Re-engagement",
        version: 1,
        branching: Branching::PerField,
        meta: ArchetypeMeta::Email { day: 8 },
        slots: &[
            SlotTemplate::enriched(
                "subject",
                "We saved your spot",
                "Still feeling the {{insight.commonEmotions}}?",
            ),
            SlotTemplate::baseline(
                "body",
                "Hi there,\n\nIt's been a few days. If {{profile.objectives}} is still a priority, {{profile.name}} is ready when you are.\n\nA quick reminder of what you get: {{profile.uniqueValue}}.\n\n{{profile.name}}",
            ),
            SlotTemplate::baseline("purpose", "Win back attention from subscribers who went quiet."),
        ],
    },
    Archetype {
        id: "email.breakup",
        kind: ArtifactKind::Email,
        name: "Breakup",
        version: 1,
        branching: Branching::PerField,
        meta: ArchetypeMeta::Email { day: 12 },
        slots: &[
            SlotTemplate::baseline("subject", "Should we close your file?"),
            SlotTemplate::baseline(
                "body",
                "Hi there,\n\nWe haven't heard back, so this is our last email for now. If {{profile.productOrService}} isn't a fit, no hard feelings.\n\nIf it is, just reply \"yes\" and we'll pick things up right away.\n\n{{profile.name}}",
            ),
            SlotTemplate::baseline("purpose", "Prompt a final decision with a respectful goodbye."),
        ],
    },
];
