//! Sales script archetypes
//!
//! Live-call scripts first, then asynchronous-message scripts. Each script is
//! three paragraphs: `opening`, `body`, `close`.

use copyforge_model::{ArtifactKind, ScriptChannel};

use crate::archetype::{Archetype, ArchetypeMeta, Branching, SlotTemplate};

pub(crate) const SALES: &[Archetype] = &[
    Archetype {
        id: "sales.cold-call-opener",
        kind: ArtifactKind::SalesScript,
        name: "Cold Call Opener",
        version: 1,
        branching: Branching::AllOrNothing,
        meta: ArchetypeMeta::SalesScript {
            channel: ScriptChannel::LiveCall,
        },
        slots: &[
            SlotTemplate::baseline(
                "opening",
                "Hi, this is [your name] from {{profile.name}}. I'll be brief: I work with {{profile.targetAudience}} in {{profile.industry}}, and most of them tell me the same thing.",
            ),
            SlotTemplate::enriched(
                "body",
                "They want more {{profile.objectives}} without adding more work. We help with {{profile.productOrService}}, and what makes us different is {{profile.uniqueValue}}.",
                "They're frustrated by {{insight.marketGaps}}, and even {{insight.topPerformers}} hasn't fixed it. We built {{profile.productOrService}} around {{profile.uniqueValue}} to solve exactly that.",
            ),
            SlotTemplate::baseline(
                "close",
                "Would it be crazy to grab 15 minutes this week to see if it's a fit?",
            ),
        ],
    },
    Archetype {
        id: "sales.discovery-call",
        kind: ArtifactKind::SalesScript,
        name: "Discovery Call",
        version: 1,
        branching: Branching::PerField,
        meta: ArchetypeMeta::SalesScript {
            channel: ScriptChannel::LiveCall,
        },
        slots: &[
            SlotTemplate::baseline(
                "opening",
                "Thanks for making time today. My goal is to understand where you are and where you want to be, then see whether {{profile.name}} can help.",
            ),
            SlotTemplate::baseline(
                "body",
                "Questions to cover:\n1. What does success look like for you over {{profile.timeline}}?\n2. What have you tried so far for {{profile.objectives}}?\n3. What budget have you set aside? For reference, clients like you typically invest {{profile.budget}}.\n4. Who else is involved in the decision?",
            ),
            SlotTemplate::baseline(
                "close",
                "Based on what you've shared, here's the next step I'd suggest...",
            ),
        ],
    },
    Archetype {
        id: "sales.objection-handling",
        kind: ArtifactKind::SalesScript,
        name: "Objection Handling",
        version: 1,
        branching: Branching::AllOrNothing,
        meta: ArchetypeMeta::SalesScript {
            channel: ScriptChannel::LiveCall,
        },
        slots: &[
            SlotTemplate::baseline(
                "opening",
                "I hear you, and that's a fair concern. Can I share how other {{profile.targetAudience}} thought about it?",
            ),
            SlotTemplate::enriched(
                "body",
                "\"It's too expensive\": compare it to the cost of leaving the problem unsolved. {{profile.uniqueValue}} pays back quickly.\n\"We already use someone\": most of our clients did too. They switched for {{profile.uniqueValue}}.\n\"Now isn't a good time\": totally fair. When would {{profile.objectives}} become a priority?",
                "\"It's too expensive\": compare it to the cost of leaving the problem unsolved. {{profile.uniqueValue}} pays back quickly.\n\"We already use {{insight.topPerformers}}\": many of our clients did. They switched because {{insight.marketGaps}} kept slowing them down.\n\"Now isn't a good time\": totally fair. When would {{profile.objectives}} become a priority?",
            ),
            SlotTemplate::baseline(
                "close",
                "Does that address your concern, or is something else holding you back?",
            ),
        ],
    },
    Archetype {
        id: "sales.linkedin-message",
        kind: ArtifactKind::SalesScript,
        name: "LinkedIn Message",
        version: 1,
        branching: Branching::PerField,
        meta: ArchetypeMeta::SalesScript {
            channel: ScriptChannel::AsyncMessage,
        },
        slots: &[
            SlotTemplate::baseline(
                "opening",
                "Hi [first name], I noticed you work with {{profile.targetAudience}} and thought this might be relevant.",
            ),
            SlotTemplate::baseline(
                "body",
                "At {{profile.name}} we help teams make progress on {{profile.objectives}} through {{profile.productOrService}}. Our edge is {{profile.uniqueValue}}.",
            ),
            SlotTemplate::baseline("close", "Open to a quick chat next week?"),
        ],
    },
    Archetype {
        id: "sales.follow-up-email",
        kind: ArtifactKind::SalesScript,
        name: "Follow-Up Email",
        version: 1,
        branching: Branching::PerField,
        meta: ArchetypeMeta::SalesScript {
            channel: ScriptChannel::AsyncMessage,
        },
        slots: &[
            SlotTemplate::baseline(
                "opening",
                "Subject: Following up on {{profile.productOrService}}\n\nHi [first name],",
            ),
            SlotTemplate::enriched(
                "body",
                "Just following up on my last note. {{profile.targetAudience}} use {{profile.name}} to get {{profile.uniqueValue}} without the usual hassle.",
                "Just following up. Many teams in your space still struggle with {{insight.marketGaps}}. {{profile.name}} fixes that with {{profile.uniqueValue}}.",
            ),
            SlotTemplate::baseline(
                "close",
                "Worth a 15-minute call? Here's my calendar: [link]",
            ),
        ],
    },
    Archetype {
        id: "sales.voicemail-drop",
        kind: ArtifactKind::SalesScript,
        name: "Voicemail Drop",
        version: 1,
        branching: Branching::PerField,
        meta: ArchetypeMeta::SalesScript {
            channel: ScriptChannel::AsyncMessage,
        },
        slots: &[
            SlotTemplate::baseline(
                "opening",
                "Hi [first name], this is [your name] from {{profile.name}}.",
            ),
            SlotTemplate::baseline(
                "body",
                "I'm reaching out because we help {{profile.targetAudience}} with {{profile.productOrService}}, and I think {{profile.uniqueValue}} could make a real difference for you.",
            ),
            SlotTemplate::baseline(
                "close",
                "Give me a call back at [number], or I'll follow up by email. Thanks!",
            ),
        ],
    },
];
