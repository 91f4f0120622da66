//! Export renderings
//!
//! JSON mirrors [`Generation`] exactly. Markdown and HTML are derived from the
//! artifacts so every kind exports the same way; a full-site website exports
//! its [`SiteDocument`](crate::SiteDocument) as one self-contained page.

use std::fmt::{self, Display, Formatter, Write as _};
use std::str::FromStr;

use copyforge_model::{ArtifactKind, ContentArtifact};
use serde::{Deserialize, Serialize};

use crate::error::ExportError;
use crate::records::{GeneratedContent, Generation};
use crate::site::escape_html;

/// Export format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Pretty-printed JSON
    #[default]
    Json,
    /// Markdown document
    Markdown,
    /// Single HTML file
    Html,
}

impl ExportFormat {
    /// Every format
    pub const ALL: [ExportFormat; 3] = [Self::Json, Self::Markdown, Self::Html];

    /// Canonical name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Markdown => "markdown",
            Self::Html => "html",
        }
    }

    /// File extension without the dot
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Markdown => "md",
            Self::Html => "html",
        }
    }
}

impl Display for ExportFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "markdown" | "md" => Ok(Self::Markdown),
            "html" | "htm" => Ok(Self::Html),
            _ => Err(ExportError::UnknownFormat(s.to_string())),
        }
    }
}

/// Render `generation` in `format`
///
/// # Errors
/// [`ExportError::Json`] if JSON serialization fails
pub fn export(generation: &Generation, format: ExportFormat) -> Result<String, ExportError> {
    match format {
        ExportFormat::Json => to_json(generation),
        ExportFormat::Markdown => Ok(to_markdown(generation)),
        ExportFormat::Html => Ok(to_html(generation)),
    }
}

/// Pretty-printed JSON of the whole generation
///
/// # Errors
/// [`ExportError::Json`] if serialization fails
pub fn to_json(generation: &Generation) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(generation)?)
}

/// Markdown document with one section per artifact
#[must_use]
pub fn to_markdown(generation: &Generation) -> String {
    let mut out = format!("# {}\n", heading(generation));
    for artifact in &generation.artifacts {
        let _ = write!(out, "\n## {}\n", artifact.title());
        for (name, value) in artifact.fields() {
            let _ = write!(out, "\n**{}**\n\n{}\n", field_label(name), value.trim_end());
        }
        if let Some(note) = insight_note(artifact) {
            let _ = write!(out, "\n_{note}_\n");
        }
    }
    out
}

/// Single HTML file
///
/// Full-site websites export the site itself; everything else is a plain
/// document listing the artifacts.
#[must_use]
pub fn to_html(generation: &Generation) -> String {
    if let GeneratedContent::Website {
        site: Some(site), ..
    } = &generation.content
    {
        return site.to_single_file();
    }

    let title = escape_html(&heading(generation));
    let mut body = String::new();
    for artifact in &generation.artifacts {
        let _ = write!(
            body,
            "  <article>\n    <h2>{}</h2>\n    <dl>\n",
            escape_html(artifact.title())
        );
        for (name, value) in artifact.fields() {
            let _ = write!(
                body,
                "      <dt>{}</dt>\n      <dd>{}</dd>\n",
                escape_html(&field_label(name)),
                escape_html(value).replace('\n', "<br>\n")
            );
        }
        body.push_str("    </dl>\n");
        if let Some(note) = insight_note(artifact) {
            let _ = writeln!(body, "    <p><em>{}</em></p>", escape_html(&note));
        }
        body.push_str("  </article>\n");
    }
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n  <meta charset=\"utf-8\">\n  <title>{title}</title>\n</head>\n<body>\n  <h1>{title}</h1>\n{body}</body>\n</html>\n"
    )
}

/// Suggested download name, e.g. `acme-ads.md` or `acme-site.html`
#[must_use]
pub fn file_name(business_name: &str, kind: ArtifactKind, format: ExportFormat) -> String {
    let stem = match (kind, format) {
        (ArtifactKind::WebsiteSection, ExportFormat::Html) => "site",
        _ => kind.slug(),
    };
    format!("{}-{stem}.{}", slugify(business_name), format.extension())
}

/// Suggested download name for `generation`
#[must_use]
pub fn file_name_for(generation: &Generation, format: ExportFormat) -> String {
    file_name(&generation.business_name, generation.kind(), format)
}

/// Lowercase ASCII slug; `business` when nothing usable remains
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');
    if slug.is_empty() {
        "business".to_string()
    } else {
        slug.to_string()
    }
}

fn heading(generation: &Generation) -> String {
    format!("{} copy for {}", generation.kind().label(), generation.business_name)
}

fn insight_note(artifact: &ContentArtifact) -> Option<String> {
    let provenance = artifact.provenance();
    if !provenance.used_insight {
        return None;
    }
    let fields = provenance
        .insight_fields_used
        .iter()
        .map(|f| f.key())
        .collect::<Vec<_>>()
        .join(", ");
    Some(format!("Enriched with competitive insight: {fields}"))
}

/// `callToAction` -> `Call To Action`
fn field_label(name: &str) -> String {
    let mut label = String::with_capacity(name.len() + 4);
    for (i, ch) in name.chars().enumerate() {
        if i == 0 {
            label.extend(ch.to_uppercase());
        } else if ch.is_uppercase() {
            label.push(' ');
            label.push(ch);
        } else {
            label.push(ch);
        }
    }
    label
}
