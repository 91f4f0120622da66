//! Website archetypes
//!
//! Slot fields are `<section>.<leaf>`; every section has `headline`, `body`
//! and `cta`, and the hero also has a `subheadline`.

use copyforge_model::ArtifactKind;

use crate::archetype::{Archetype, ArchetypeMeta, Branching, SectionSpec, SlotTemplate};

const HERO: SectionSpec = SectionSpec {
    name: "hero",
    title: "Hero",
    layout: "Full-width hero: headline and subheadline left, supporting image right, primary button above the fold.",
};

const CLOSING: SectionSpec = SectionSpec {
    name: "closing",
    title: "Closing Call to Action",
    layout: "Centered band on a contrasting background with one button and no competing links.",
};

pub(crate) const WEBSITES: &[Archetype] = &[
    Archetype {
        id: "website.authority",
        kind: ArtifactKind::WebsiteSection,
        name: "Authority",
        version: 1,
        branching: Branching::PerField,
        meta: ArchetypeMeta::Website {
            sections: &[
                HERO,
                SectionSpec {
                    name: "credentials",
                    title: "Credentials",
                    layout: "Three-column grid of credentials, each with an icon and a one-line proof point.",
                },
                SectionSpec {
                    name: "proof",
                    title: "Proof",
                    layout: "Testimonial carousel above a strip of client logos.",
                },
                CLOSING,
            ],
        },
        slots: &[
            SlotTemplate::baseline("hero.headline", "Expertise {{profile.targetAudience}} can rely on"),
            SlotTemplate::baseline(
                "hero.subheadline",
                "{{profile.name}} brings {{profile.uniqueValue}} to every project.",
            ),
            SlotTemplate::baseline(
                "hero.body",
                "{{profile.productOrService}} built on proven methods and delivered by specialists who know {{profile.industry}} inside out.",
            ),
            SlotTemplate::baseline("hero.cta", "Book a Consultation"),
            SlotTemplate::baseline("credentials.headline", "Why {{profile.targetAudience}} trust {{profile.name}}"),
            SlotTemplate::enriched(
                "credentials.body",
                "Proven processes and transparent reporting, backed by {{profile.uniqueValue}}. Every engagement is measured against your goals.",
                "While {{insight.topPerformers}} rely on reputation, {{profile.name}} backs every promise with {{profile.uniqueValue}}.",
            ),
            SlotTemplate::baseline("credentials.cta", "See Our Approach"),
            SlotTemplate::enriched(
                "proof.headline",
                "Results that speak for themselves",
                "Clients beat the {{insight.successMetrics}} industry conversion benchmark",
            ),
            SlotTemplate::baseline(
                "proof.body",
                "Join {{number.customers}}+ clients who chose {{profile.name}} for {{profile.productOrService}}.",
            ),
            SlotTemplate::baseline("proof.cta", "Read Case Studies"),
            SlotTemplate::baseline("closing.headline", "Ready to work with specialists?"),
            SlotTemplate::baseline(
                "closing.body",
                "Talk to {{profile.name}} today and get a clear plan for {{profile.objectives}}.",
            ),
            SlotTemplate::baseline("closing.cta", "Get Started"),
        ],
    },
    Archetype {
        id: "website.problem-solution",
        kind: ArtifactKind::WebsiteSection,
        name: "Problem-Solution",
        version: 1,
        branching: Branching::AllOrNothing,
        meta: ArchetypeMeta::Website {
            sections: &[
                HERO,
                SectionSpec {
                    name: "problem",
                    title: "The Problem",
                    layout: "Narrow text column with a bold pull quote describing the pain.",
                },
                SectionSpec {
                    name: "solution",
                    title: "The Solution",
                    layout: "Split layout: product screenshot left, three benefit bullets right.",
                },
                CLOSING,
            ],
        },
        slots: &[
            SlotTemplate::baseline("hero.headline", "Stop settling for less than {{profile.uniqueValue}}"),
            SlotTemplate::baseline(
                "hero.subheadline",
                "{{profile.name}} helps {{profile.targetAudience}} fix what's holding them back.",
            ),
            SlotTemplate::baseline(
                "hero.body",
                "{{profile.productOrService}} designed around the problems you actually have.",
            ),
            SlotTemplate::baseline("hero.cta", "Fix It Now"),
            SlotTemplate::enriched(
                "problem.headline",
                "The problem nobody talks about",
                "{{insight.marketGaps}} is costing you more than you think",
            ),
            SlotTemplate::enriched(
                "problem.body",
                "{{profile.targetAudience}} lose time and money to workarounds that never quite work.",
                "Most providers ignore {{insight.marketGaps}}. {{profile.targetAudience}} pay for it every single day.",
            ),
            SlotTemplate::baseline("problem.cta", "See the Fix"),
            SlotTemplate::baseline("solution.headline", "How {{profile.name}} solves it"),
            SlotTemplate::baseline(
                "solution.body",
                "{{profile.productOrService}} with {{profile.uniqueValue}}, so you can focus on {{profile.objectives}}.",
            ),
            SlotTemplate::baseline("solution.cta", "Explore the Solution"),
            SlotTemplate::baseline("closing.headline", "Your problem, solved"),
            SlotTemplate::baseline(
                "closing.body",
                "Join {{number.customers}}+ {{profile.targetAudience}} who stopped struggling.",
            ),
            SlotTemplate::baseline("closing.cta", "Get Started Today"),
        ],
    },
    Archetype {
        id: "website.transformation",
        kind: ArtifactKind::WebsiteSection,
        name: "Transformation",
        version: 1,
        branching: Branching::PerField,
        meta: ArchetypeMeta::Website {
            sections: &[
                HERO,
                SectionSpec {
                    name: "before-after",
                    title: "Before and After",
                    layout: "Two contrasting cards side by side, muted 'before' and vivid 'after'.",
                },
                SectionSpec {
                    name: "journey",
                    title: "The Journey",
                    layout: "Horizontal three-step timeline with numbered markers.",
                },
                CLOSING,
            ],
        },
        slots: &[
            SlotTemplate::baseline("hero.headline", "Where you are is not where you have to stay"),
            SlotTemplate::baseline(
                "hero.subheadline",
                "{{profile.name}} guides {{profile.targetAudience}} from stuck to thriving.",
            ),
            SlotTemplate::baseline(
                "hero.body",
                "With {{profile.productOrService}} and {{profile.uniqueValue}}, the next chapter starts now.",
            ),
            SlotTemplate::baseline("hero.cta", "Begin Your Journey"),
            SlotTemplate::baseline("before-after.headline", "Before and after {{profile.name}}"),
            SlotTemplate::enriched(
                "before-after.body",
                "Before: scattered efforts and slow progress. After: focused work toward {{profile.objectives}}.",
                "Before: {{insight.marketGaps}}. After: {{profile.uniqueValue}} and steady progress toward {{profile.objectives}}.",
            ),
            SlotTemplate::baseline("before-after.cta", "See the Difference"),
            SlotTemplate::baseline("journey.headline", "Your path in three steps"),
            SlotTemplate::baseline(
                "journey.body",
                "Share your goals, get a tailored plan, then watch results build week after week.",
            ),
            SlotTemplate::baseline("journey.cta", "Map My Path"),
            SlotTemplate::baseline("closing.headline", "Your transformation starts today"),
            SlotTemplate::enriched(
                "closing.body",
                "{{number.percent}}% of clients see measurable progress in their first month.",
                "Turn {{insight.commonEmotions}} into progress. {{number.percent}}% of clients see results in their first month.",
            ),
            SlotTemplate::baseline("closing.cta", "Start Now"),
        ],
    },
    Archetype {
        id: "website.premium",
        kind: ArtifactKind::WebsiteSection,
        name: "Premium/Exclusive",
        version: 1,
        branching: Branching::AllOrNothing,
        meta: ArchetypeMeta::Website {
            sections: &[
                HERO,
                SectionSpec {
                    name: "craft",
                    title: "The Craft",
                    layout: "Generous whitespace, large photography and a single short paragraph.",
                },
                SectionSpec {
                    name: "invitation",
                    title: "The Invitation",
                    layout: "Minimal application form on a dark background.",
                },
            ],
        },
        slots: &[
            SlotTemplate::baseline("hero.headline", "Not for everyone. Made for {{profile.targetAudience}}."),
            SlotTemplate::baseline(
                "hero.subheadline",
                "{{profile.name}} offers {{profile.productOrService}} to a select few.",
            ),
            SlotTemplate::baseline(
                "hero.body",
                "Every detail is considered and every client is known by name. That is what {{profile.uniqueValue}} looks like.",
            ),
            SlotTemplate::baseline("hero.cta", "Request Access"),
            SlotTemplate::baseline("craft.headline", "Crafted without compromise"),
            SlotTemplate::enriched(
                "craft.body",
                "We limit how many clients we take so each one receives {{profile.uniqueValue}}.",
                "Where {{insight.topPerformers}} scale by cutting corners, {{profile.name}} stays small on purpose and delivers {{profile.uniqueValue}}.",
            ),
            SlotTemplate::baseline("craft.cta", "Discover the Craft"),
            SlotTemplate::baseline("invitation.headline", "Membership is by invitation"),
            SlotTemplate::baseline(
                "invitation.body",
                "Availability for {{profile.timeline}} is limited. Reserve your place with {{profile.name}}.",
            ),
            SlotTemplate::baseline("invitation.cta", "Apply Now"),
        ],
    },
    Archetype {
        id: "website.community",
        kind: ArtifactKind::WebsiteSection,
        name: "Community",
        version: 1,
        branching: Branching::PerField,
        meta: ArchetypeMeta::Website {
            sections: &[
                HERO,
                SectionSpec {
                    name: "belonging",
                    title: "Belonging",
                    layout: "Photo mosaic of members with a short overlay headline.",
                },
                SectionSpec {
                    name: "stories",
                    title: "Member Stories",
                    layout: "Three story cards with avatar, quote and outcome.",
                },
                CLOSING,
            ],
        },
        slots: &[
            SlotTemplate::baseline("hero.headline", "Where {{profile.targetAudience}} grow together"),
            SlotTemplate::baseline(
                "hero.subheadline",
                "Join the {{profile.name}} community and never build alone.",
            ),
            SlotTemplate::baseline(
                "hero.body",
                "{{profile.productOrService}} plus a network of peers who share your goals.",
            ),
            SlotTemplate::baseline("hero.cta", "Join the Community"),
            SlotTemplate::enriched(
                "belonging.headline",
                "You're not alone in this",
                "Turn {{insight.commonEmotions}} into momentum, together",
            ),
            SlotTemplate::baseline(
                "belonging.body",
                "Members swap ideas, wins and lessons every day, so nobody has to figure it out alone.",
            ),
            SlotTemplate::baseline("belonging.cta", "Meet the Members"),
            SlotTemplate::baseline("stories.headline", "Stories from the community"),
            SlotTemplate::baseline(
                "stories.body",
                "{{number.customers}}+ members have used {{profile.uniqueValue}} to move toward {{profile.objectives}}.",
            ),
            SlotTemplate::baseline("stories.cta", "Read Their Stories"),
            SlotTemplate::baseline("closing.headline", "Your seat is waiting"),
            SlotTemplate::baseline(
                "closing.body",
                "Membership includes {{profile.productOrService}} and {{profile.uniqueValue}}.",
            ),
            SlotTemplate::baseline("closing.cta", "Join Now"),
        ],
    },
];
