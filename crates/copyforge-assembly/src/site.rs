//! Static site bundle
//!
//! Serializes website sections into markup, a stylesheet and a small script
//! built from a fixed skeleton. Each section lands at its own insertion point
//! (`<!-- section:<name> -->`). Every interpolated string is HTML-escaped.

use copyforge_archetype::{Archetype, CopyDeck};
use copyforge_model::BusinessProfile;
use serde::{Deserialize, Serialize};

use crate::website::WebsiteSection;

const HTML_SKELETON: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{%title%}</title>
<meta name="description" content="{%description%}">
<link rel="stylesheet" href="styles.css">
</head>
<body class="theme-{%theme%}">
<a class="skip-link" href="#main">{%skip_link%}</a>
<header class="site-header">
  <nav class="nav container">
    <a class="brand" href="#{%first_section%}">{%brand%}</a>
    <button class="nav-toggle" type="button" aria-expanded="false" aria-controls="nav-links">Menu</button>
    <ul id="nav-links" class="nav-links">
{%nav%}
    </ul>
    <a class="button nav-cta" href="#{%last_section%}">{%nav_cta%}</a>
  </nav>
</header>
<main id="main">
{%sections%}
</main>
<footer class="site-footer">
  <div class="container">
    <p>{%footer_tagline%}</p>
    <p>&copy; {%brand%}. {%rights%}</p>
  </div>
</footer>
<script src="script.js"></script>
</body>
</html>
"##;

const CSS_SKELETON: &str = r":root {
  --primary: {%primary%};
  --accent: {%accent%};
  --background: {%background%};
  --text: {%text%};
  --radius: 8px;
}
* { box-sizing: border-box; }
body { margin: 0; font-family: system-ui, -apple-system, 'Segoe UI', sans-serif; background: var(--background); color: var(--text); line-height: 1.6; }
.container { max-width: 1080px; margin: 0 auto; padding: 0 1.5rem; }
.skip-link { position: absolute; left: -999px; }
.skip-link:focus { left: 1rem; top: 1rem; background: var(--primary); color: #fff; padding: .5rem 1rem; }
.site-header { position: sticky; top: 0; background: var(--background); border-bottom: 1px solid rgba(0,0,0,.08); z-index: 10; }
.nav { display: flex; align-items: center; gap: 1.5rem; min-height: 64px; }
.brand { font-weight: 700; color: var(--primary); text-decoration: none; }
.nav-links { display: flex; gap: 1rem; list-style: none; margin: 0 0 0 auto; padding: 0; }
.nav-links a { color: var(--text); text-decoration: none; }
.nav-toggle { display: none; }
.button { display: inline-block; background: var(--primary); color: #fff; padding: .75rem 1.5rem; border-radius: var(--radius); text-decoration: none; font-weight: 600; }
.button:hover { background: var(--accent); }
.section { padding: 5rem 0; }
.section:nth-child(even) { background: rgba(0,0,0,.03); }
.section-hero { padding: 7rem 0; }
.section-hero h1 { font-size: clamp(2rem, 5vw, 3.25rem); line-height: 1.15; margin: 0 0 1rem; }
.subheadline { font-size: 1.25rem; opacity: .85; }
.site-footer { padding: 2rem 0; font-size: .9rem; opacity: .8; }
@media (max-width: 720px) {
  .nav-toggle { display: block; margin-left: auto; }
  .nav-links { display: none; position: absolute; top: 64px; left: 0; right: 0; flex-direction: column; background: var(--background); padding: 1rem 1.5rem; }
  .nav-links.open { display: flex; }
  .nav-cta { display: none; }
}
";

const JS: &str = r##"document.addEventListener('DOMContentLoaded', function () {
  var toggle = document.querySelector('.nav-toggle');
  var links = document.getElementById('nav-links');
  if (toggle && links) {
    toggle.addEventListener('click', function () {
      var open = links.classList.toggle('open');
      toggle.setAttribute('aria-expanded', open ? 'true' : 'false');
    });
  }
  document.querySelectorAll('a[href^="#"]').forEach(function (link) {
    link.addEventListener('click', function (event) {
      var target = document.querySelector(link.getAttribute('href'));
      if (target) {
        event.preventDefault();
        target.scrollIntoView({ behavior: 'smooth' });
        if (links) { links.classList.remove('open'); }
      }
    });
  });
});
"##;

/// Colour scheme derived from the profile tone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Navy and sky blue
    #[default]
    Professional,
    /// Coral and teal
    Friendly,
    /// Red and amber
    Bold,
    /// Charcoal and gold
    Luxury,
}

impl Theme {
    /// Theme for a free-text tone; unknown tones are professional
    #[must_use]
    pub fn from_tone(tone: &str) -> Self {
        let tone = tone.to_lowercase();
        let has = |words: &[&str]| words.iter().any(|w| tone.contains(w));
        if has(&["luxur", "premium", "elegant", "exclusive"]) {
            Self::Luxury
        } else if has(&["bold", "energetic", "edgy"]) {
            Self::Bold
        } else if has(&["friendly", "casual", "playful", "warm"]) {
            Self::Friendly
        } else {
            Self::Professional
        }
    }

    /// CSS class suffix
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Professional => "professional",
            Self::Friendly => "friendly",
            Self::Bold => "bold",
            Self::Luxury => "luxury",
        }
    }

    /// `(primary, accent, background, text)` colours
    #[must_use]
    pub const fn palette(self) -> (&'static str, &'static str, &'static str, &'static str) {
        match self {
            Self::Professional => ("#1e3a8a", "#0ea5e9", "#ffffff", "#1f2937"),
            Self::Friendly => ("#ff7a59", "#2ec4b6", "#fffaf5", "#2d2d2d"),
            Self::Bold => ("#e63946", "#ffb703", "#ffffff", "#111111"),
            Self::Luxury => ("#1c1c1c", "#c9a227", "#faf8f3", "#1c1c1c"),
        }
    }
}

/// Markup, stylesheet and script of a generated site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteDocument {
    /// `index.html`
    pub html: String,
    /// `styles.css`
    pub css: String,
    /// `script.js`
    pub js: String,
}

impl SiteDocument {
    /// One HTML file with style and script inlined
    #[must_use]
    pub fn to_single_file(&self) -> String {
        self.html
            .replacen(
                r#"<link rel="stylesheet" href="styles.css">"#,
                &format!("<style>\n{}</style>", self.css),
                1,
            )
            .replacen(
                r#"<script src="script.js"></script>"#,
                &format!("<script>\n{}</script>", self.js),
                1,
            )
    }
}

/// Builds [`SiteDocument`]s from website sections
#[derive(Debug, Clone, Copy)]
pub struct SiteBuilder<'a> {
    deck: &'a CopyDeck,
}

impl<'a> SiteBuilder<'a> {
    /// Builder using the deck's site chrome
    #[must_use]
    pub fn new(deck: &'a CopyDeck) -> Self {
        Self { deck }
    }

    /// Serialize `sections` of `archetype` into a site
    #[must_use]
    pub fn build(
        &self,
        profile: &BusinessProfile,
        archetype: &Archetype,
        sections: &[WebsiteSection],
    ) -> SiteDocument {
        let theme = Theme::from_tone(&profile.tone);
        let brand = profile
            .field_text(copyforge_model::ProfileField::Name)
            .unwrap_or_else(|| self.deck.profile.name.clone());
        let first = sections.first().map_or("main", |s| s.section_name.as_str());
        let last = sections.last().map_or("main", |s| s.section_name.as_str());
        let description = sections
            .first()
            .map(|s| s.subheadline.clone().unwrap_or_else(|| s.body.clone()))
            .unwrap_or_default();

        let nav = sections
            .iter()
            .skip(1)
            .map(|s| {
                format!(
                    r##"      <li><a href="#{}">{}</a></li>"##,
                    escape_html(&s.section_name),
                    escape_html(&s.title)
                )
            })
            .collect::<Vec<_>>()
            .join("\n");
        let body = sections
            .iter()
            .enumerate()
            .map(|(i, s)| render_section(s, i == 0, last))
            .collect::<Vec<_>>()
            .join("\n");

        let title = format!("{brand} | {}", archetype.name);
        let html = fill(
            HTML_SKELETON,
            &[
                ("title", &escape_html(&title)),
                ("description", &escape_html(&description)),
                ("theme", theme.as_str()),
                ("skip_link", &escape_html(&self.deck.site.skip_link)),
                ("brand", &escape_html(&brand)),
                ("first_section", &escape_html(first)),
                ("last_section", &escape_html(last)),
                ("nav", &nav),
                ("nav_cta", &escape_html(&self.deck.site.nav_cta)),
                ("sections", &body),
                ("footer_tagline", &escape_html(&self.deck.site.footer_tagline)),
                ("rights", &escape_html(&self.deck.site.rights)),
            ],
        );
        let (primary, accent, background, text) = theme.palette();
        let css = fill(
            CSS_SKELETON,
            &[
                ("primary", primary),
                ("accent", accent),
                ("background", background),
                ("text", text),
            ],
        );
        SiteDocument {
            html,
            css,
            js: JS.to_string(),
        }
    }
}

/// Insertion-point marker for a section
#[must_use]
pub fn insertion_point(section_name: &str) -> String {
    format!("<!-- section:{section_name} -->")
}

/// Escape text for HTML element and attribute content
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn render_section(section: &WebsiteSection, is_first: bool, cta_target: &str) -> String {
    let name = escape_html(&section.section_name);
    let heading = if is_first { "h1" } else { "h2" };
    let mut out = insertion_point(&section.section_name);
    out.push_str(&format!(
        "\n<section id=\"{name}\" class=\"section section-{name}\">\n  <div class=\"container\">\n    <{heading}>{}</{heading}>\n",
        escape_html(&section.headline)
    ));
    if let Some(sub) = &section.subheadline {
        out.push_str(&format!("    <p class=\"subheadline\">{}</p>\n", escape_html(sub)));
    }
    for paragraph in section.body.split("\n\n").filter(|p| !p.trim().is_empty()) {
        out.push_str(&format!("    <p>{}</p>\n", escape_html(paragraph.trim())));
    }
    out.push_str(&format!(
        "    <a class=\"button\" href=\"#{}\">{}</a>\n  </div>\n</section>",
        escape_html(cta_target),
        escape_html(&section.cta)
    ));
    out
}

/// Single pass over `{%name%}` markers; inserted values are never rescanned
fn fill(skeleton: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(skeleton.len() * 2);
    let mut rest = skeleton;
    while let Some(start) = rest.find("{%") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("%}") {
            Some(end) => {
                let key = &after[..end];
                match values.iter().find(|(k, _)| *k == key) {
                    Some((_, value)) => out.push_str(value),
                    None => out.push_str(&rest[start..start + 2 + end + 2]),
                }
                rest = &after[end + 2..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(name: &str, headline: &str) -> WebsiteSection {
        WebsiteSection {
            archetype_id: "website.test".into(),
            section_name: name.into(),
            title: name.to_uppercase(),
            headline: headline.into(),
            subheadline: None,
            body: "First.\n\nSecond.".into(),
            cta: "Go".into(),
            layout_guidance: String::new(),
        }
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn theme_follows_tone() {
        assert_eq!(Theme::from_tone("Luxury"), Theme::Luxury);
        assert_eq!(Theme::from_tone("friendly and warm"), Theme::Friendly);
        assert_eq!(Theme::from_tone("Bold"), Theme::Bold);
        assert_eq!(Theme::from_tone(""), Theme::Professional);
    }

    #[test]
    fn fill_does_not_rescan_values() {
        let out = fill("a {%x%} b {%y%} {%z%}", &[("x", "{%y%}"), ("y", "Y")]);
        assert_eq!(out, "a {%y%} b Y {%z%}");
    }

    #[test]
    fn sections_land_at_insertion_points() {
        let deck = CopyDeck::default();
        let archetype = copyforge_archetype::ArchetypeLibrary::new()
            .get("website.authority")
            .unwrap();
        let profile = BusinessProfile::new().with_name("Acme <Labs>").with_tone("bold");
        let site = SiteBuilder::new(&deck).build(
            &profile,
            archetype,
            &[section("hero", "Hi"), section("closing", "Bye")],
        );
        assert!(site.html.contains("<!-- section:hero -->"));
        assert!(site.html.contains("<!-- section:closing -->"));
        assert!(site.html.contains("Acme &lt;Labs&gt;"));
        assert!(!site.html.contains("Acme <Labs>"));
        assert!(site.html.contains("<h1>Hi</h1>"));
        assert!(site.html.contains("<p>Second.</p>"));
        assert!(site.html.contains("theme-bold"));
        assert!(site.css.contains("--primary: #e63946;"));
        assert!(!site.html.contains("{%"));
    }

    #[test]
    fn single_file_inlines_assets() {
        let deck = CopyDeck::default();
        let archetype = copyforge_archetype::ArchetypeLibrary::new()
            .get("website.authority")
            .unwrap();
        let site = SiteBuilder::new(&deck).build(
            &BusinessProfile::new(),
            archetype,
            &[section("hero", "Hi")],
        );
        let single = site.to_single_file();
        assert!(single.contains("<style>"));
        assert!(single.contains("--accent"));
        assert!(single.contains("scrollIntoView"));
        assert!(!single.contains("styles.css"));
        assert!(!single.contains("script.js"));
    }
}
