//! Slot interpolation
//!
//! Fills slot templates with profile and insight values. Blank fields take
//! the copy deck's fallback phrase, so the output is always readable text:
//! never empty and never containing raw `{{...}}` syntax.

use copyforge_model::{BusinessProfile, CompetitiveInsight, InsightField, ProfileField};
use tracing::warn;

use crate::archetype::SlotTemplate;
use crate::branch::Branch;
use crate::deck::CopyDeck;
use crate::numbers::NumberSource;
use crate::placeholder::{tokens, Placeholder};

/// Renders slot templates
///
/// Cheap to copy; holds only borrowed configuration.
#[derive(Debug, Clone, Copy)]
pub struct Interpolator<'a> {
    deck: &'a CopyDeck,
    numbers: &'a dyn NumberSource,
    scope: &'a str,
}

impl<'a> Interpolator<'a> {
    /// Create an interpolator over a copy deck and number source
    #[must_use]
    pub fn new(deck: &'a CopyDeck, numbers: &'a dyn NumberSource) -> Self {
        Self {
            deck,
            numbers,
            scope: "",
        }
    }

    /// Same interpolator with numeric placeholders scoped to an archetype
    #[must_use]
    pub fn scoped(self, scope: &'a str) -> Self {
        Self { scope, ..self }
    }

    /// Copy deck in use
    #[inline]
    #[must_use]
    pub fn deck(&self) -> &'a CopyDeck {
        self.deck
    }

    /// Interpolate a slot, choosing the branch from the insight
    ///
    /// The enriched template is used only when `insight` carries every field
    /// it references; otherwise the baseline template is used in full.
    #[must_use]
    pub fn interpolate(
        &self,
        slot: &SlotTemplate,
        profile: &BusinessProfile,
        insight: Option<&CompetitiveInsight>,
    ) -> String {
        self.render(slot, Branch::for_slot(slot, insight), profile, insight)
    }

    /// Interpolate a slot on an explicitly selected branch
    ///
    /// `Branch::Enriched` on a slot without an enriched template renders the
    /// baseline.
    #[must_use]
    pub fn render(
        &self,
        slot: &SlotTemplate,
        branch: Branch,
        profile: &BusinessProfile,
        insight: Option<&CompetitiveInsight>,
    ) -> String {
        let template = match (branch, slot.enriched) {
            (Branch::Enriched, Some(enriched)) => enriched,
            _ => slot.baseline,
        };
        self.fill(template, profile, insight)
    }

    /// Replace every token in `template`
    #[must_use]
    pub fn fill(
        &self,
        template: &str,
        profile: &BusinessProfile,
        insight: Option<&CompetitiveInsight>,
    ) -> String {
        let mut out = String::with_capacity(template.len() + 64);
        let mut last = 0;
        for token in tokens(template) {
            out.push_str(&template[last..token.span.start]);
            let value = match token.placeholder {
                Ok(placeholder) => self.resolve(placeholder, profile, insight),
                Err(unresolved) => {
                    warn!(token = %unresolved.raw, "unresolved placeholder, using fallback");
                    self.deck.unknown_placeholder.clone()
                }
            };
            let value = strip_token_syntax(&value);
            if at_sentence_start(&out) {
                out.push_str(&capitalize(&value));
            } else {
                out.push_str(&value);
            }
            last = token.span.end;
        }
        out.push_str(&template[last..]);

        let trimmed = out.trim();
        if trimmed.is_empty() {
            capitalize(&self.deck.unknown_placeholder)
        } else {
            trimmed.to_string()
        }
    }

    /// Value of a single placeholder
    #[must_use]
    pub fn resolve(
        &self,
        placeholder: Placeholder,
        profile: &BusinessProfile,
        insight: Option<&CompetitiveInsight>,
    ) -> String {
        match placeholder {
            Placeholder::Profile(field) => self.profile_value(field, profile),
            Placeholder::Insight(field) => insight
                .and_then(|i| insight_value(field, i))
                .unwrap_or_else(|| self.deck.insight_fallback(field).to_string()),
            Placeholder::Number(slot) => group_thousands(self.numbers.value(slot, self.scope)),
        }
    }

    fn profile_value(&self, field: ProfileField, profile: &BusinessProfile) -> String {
        let Some(text) = profile.field_text(field) else {
            return self.deck.profile_fallback(field).to_string();
        };
        match field {
            ProfileField::Budget => {
                format!("{}{}", self.deck.currency_symbol, group_thousands(profile.budget))
            }
            ProfileField::Objectives => lowercase_words(&text),
            _ => text,
        }
    }
}

fn insight_value(field: InsightField, insight: &CompetitiveInsight) -> Option<String> {
    match field {
        InsightField::TopPerformers => insight.top_performer().map(str::to_string),
        InsightField::CommonEmotions => insight.common_emotion().map(lowercase_words),
        InsightField::MarketGaps => insight.market_gap().map(str::to_string),
        InsightField::SuccessMetrics => insight.avg_conversion_rate().map(|r| format!("{r:.1}%")),
    }
}

/// Format an integer with comma thousands separators
#[must_use]
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn strip_token_syntax(value: &str) -> String {
    let mut text = value.to_string();
    while text.contains("{{") || text.contains("}}") {
        text = text.replace("{{", "{").replace("}}", "}");
    }
    text
}

fn at_sentence_start(rendered: &str) -> bool {
    let tail = rendered.trim_end_matches([' ', '\t', '"', '(', '\u{201c}']);
    tail.is_empty() || tail.ends_with(['.', '!', '?', '\n'])
}

/// Uppercase the first letter unless the leading word is already mixed case
fn capitalize(text: &str) -> String {
    let leading = text.split_whitespace().next().unwrap_or_default();
    if has_inner_capital(leading) {
        return text.to_string();
    }
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercase title-cased words; acronyms and brand casing ("SEO", "iOS") stay
fn lowercase_words(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            if has_inner_capital(word) {
                word.to_string()
            } else {
                word.to_lowercase()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn has_inner_capital(word: &str) -> bool {
    word.chars().skip(1).any(char::is_uppercase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numbers::FixedNumbers;
    use crate::placeholder::{contains_token_syntax, NumberSlot};
    use copyforge_model::{Objective, Performer};
    use pretty_assertions::assert_eq;

    const HEADLINE: SlotTemplate = SlotTemplate::enriched(
        "headline",
        "Why {{profile.targetAudience}} choose {{profile.name}}",
        "Tired of {{insight.marketGaps}}? {{profile.name}} fixes that",
    );

    fn acme() -> BusinessProfile {
        BusinessProfile::new()
            .with_name("Acme")
            .with_target_audience("founders")
    }

    #[test]
    fn fills_profile_fields() {
        let deck = CopyDeck::default();
        let numbers = FixedNumbers::new();
        let interp = Interpolator::new(&deck, &numbers);
        assert_eq!(
            interp.interpolate(&HEADLINE, &acme(), None),
            "Why founders choose Acme"
        );
    }

    #[test]
    fn blank_fields_take_fallbacks() {
        let deck = CopyDeck::default();
        let numbers = FixedNumbers::new();
        let interp = Interpolator::new(&deck, &numbers);
        assert_eq!(
            interp.interpolate(&HEADLINE, &BusinessProfile::new(), None),
            "Why people like you choose our team"
        );
    }

    #[test]
    fn enriched_when_insight_has_the_field() {
        let deck = CopyDeck::default();
        let numbers = FixedNumbers::new();
        let interp = Interpolator::new(&deck, &numbers);
        let insight = CompetitiveInsight::new().with_market_gap("slow onboarding");
        assert_eq!(
            interp.interpolate(&HEADLINE, &acme(), Some(&insight)),
            "Tired of slow onboarding? Acme fixes that"
        );
    }

    #[test]
    fn baseline_when_referenced_field_missing() {
        let deck = CopyDeck::default();
        let numbers = FixedNumbers::new();
        let interp = Interpolator::new(&deck, &numbers);
        let insight = CompetitiveInsight::new().with_top_performer(Performer::named("Rival"));
        assert_eq!(
            interp.interpolate(&HEADLINE, &acme(), Some(&insight)),
            interp.interpolate(&HEADLINE, &acme(), None)
        );
    }

    #[test]
    fn capitalizes_at_sentence_start() {
        let deck = CopyDeck::default();
        let numbers = FixedNumbers::new();
        let interp = Interpolator::new(&deck, &numbers);
        let text = interp.fill(
            "{{profile.targetAudience}} love it. Talk soon,\n{{profile.name}}",
            &BusinessProfile::new(),
            None,
        );
        assert_eq!(text, "People like you love it. Talk soon,\nOur team");
    }

    #[test]
    fn formats_budget_objectives_and_numbers() {
        let deck = CopyDeck::default();
        let numbers = FixedNumbers::new().with(NumberSlot::Customers, 12_500);
        let interp = Interpolator::new(&deck, &numbers);
        let profile = BusinessProfile::new()
            .with_budget(1_250_000)
            .with_objective("Lead Generation".into());
        assert_eq!(
            interp.fill(
                "Invest {{profile.budget}} in {{profile.objectives}} like {{number.customers}} others",
                &profile,
                None
            ),
            "Invest $1,250,000 in lead generation like 12,500 others"
        );
    }

    #[test]
    fn keeps_user_casing_of_acronyms_and_brands() {
        let deck = CopyDeck::default();
        let numbers = FixedNumbers::new();
        let interp = Interpolator::new(&deck, &numbers);
        let profile = BusinessProfile::new()
            .with_target_audience("iOS developers")
            .with_objective(Objective::Custom("SEO Growth".into()));
        assert_eq!(
            interp.fill(
                "{{profile.targetAudience}} want {{profile.objectives}}.",
                &profile,
                None
            ),
            "iOS developers want SEO growth."
        );

        let insight = CompetitiveInsight::new().with_common_emotion("FOMO");
        assert_eq!(
            interp.fill("Skip the {{insight.commonEmotions}}", &acme(), Some(&insight)),
            "Skip the FOMO"
        );
    }

    #[test]
    fn capitalize_leaves_mixed_case_words() {
        assert_eq!(capitalize("iOS developers"), "iOS developers");
        assert_eq!(capitalize("eBay sellers"), "eBay sellers");
        assert_eq!(capitalize("founders"), "Founders");
        assert_eq!(lowercase_words("Brand Awareness"), "brand awareness");
        assert_eq!(lowercase_words("SEO"), "SEO");
    }

    #[test]
    fn formats_conversion_rate() {
        let deck = CopyDeck::default();
        let numbers = FixedNumbers::new();
        let interp = Interpolator::new(&deck, &numbers);
        let insight = CompetitiveInsight::new().with_avg_conversion_rate(3.25);
        let text = interp.fill("Average is {{insight.successMetrics}}", &acme(), Some(&insight));
        assert!(text == "Average is 3.2%" || text == "Average is 3.3%");
    }

    #[test]
    fn unknown_tokens_use_documented_fallback() {
        let deck = CopyDeck::default();
        let numbers = FixedNumbers::new();
        let interp = Interpolator::new(&deck, &numbers);
        let text = interp.fill("Try {{profile.shoeSize}} now", &acme(), None);
        assert_eq!(text, "Try this now");
    }

    #[test]
    fn profile_text_cannot_inject_token_syntax() {
        let deck = CopyDeck::default();
        let numbers = FixedNumbers::new();
        let interp = Interpolator::new(&deck, &numbers);
        let profile = BusinessProfile::new().with_name("{{{{profile.name}}}}");
        let text = interp.fill("Hi {{profile.name}}", &profile, None);
        assert!(!contains_token_syntax(&text), "{text}");
    }

    #[test]
    fn empty_template_is_never_empty_output() {
        let deck = CopyDeck::default();
        let numbers = FixedNumbers::new();
        let interp = Interpolator::new(&deck, &numbers);
        assert_eq!(interp.fill("   ", &acme(), None), "This");
    }

    #[test]
    fn group_thousands_formats() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }
}
