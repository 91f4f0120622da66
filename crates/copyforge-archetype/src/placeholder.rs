//! Placeholder tokens
//!
//! Templates reference data with `{{scope.name}}` tokens:
//!
//! - `{{profile.targetAudience}}`: a [`ProfileField`] by wire name
//! - `{{insight.marketGaps}}`: an [`InsightField`]; indexed forms such as
//!   `{{insight.topPerformers[0].name}}` address the same field
//! - `{{number.customers}}`: a [`NumberSlot`] drawn from the injected number source

use std::fmt::{self, Display, Formatter};
use std::ops::Range;
use std::str::FromStr;

use copyforge_model::{InsightField, ProfileField};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

pub(crate) static TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{\s*([A-Za-z]+)\.([A-Za-z0-9_.\[\]]+)\s*\}\}").expect("token regex is valid")
});

/// Numeric marketing placeholders
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NumberSlot {
    /// "Join N+ customers"
    Customers,
    /// "N% of clients see results"
    Percent,
}

impl NumberSlot {
    /// Every numeric slot
    pub const ALL: [NumberSlot; 2] = [Self::Customers, Self::Percent];

    /// Token name
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Customers => "customers",
            Self::Percent => "percent",
        }
    }

    /// Inclusive range and step of generated values
    #[must_use]
    pub const fn range(self) -> (u64, u64, u64) {
        match self {
            Self::Customers => (500, 5_000, 50),
            Self::Percent => (60, 95, 1),
        }
    }
}

/// A resolved template reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(tag = "scope", content = "field", rename_all = "camelCase")]
pub enum Placeholder {
    /// Business profile field
    Profile(ProfileField),
    /// Competitive insight field
    Insight(InsightField),
    /// Generated number
    Number(NumberSlot),
}

impl Placeholder {
    /// Insight field referenced, if any
    #[inline]
    #[must_use]
    pub fn insight_field(self) -> Option<InsightField> {
        match self {
            Self::Insight(field) => Some(field),
            _ => None,
        }
    }
}

impl Display for Placeholder {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Profile(field) => write!(f, "{{{{profile.{}}}}}", field.key()),
            Self::Insight(field) => write!(f, "{{{{insight.{}}}}}", field.key()),
            Self::Number(slot) => write!(f, "{{{{number.{}}}}}", slot.key()),
        }
    }
}

/// Error for tokens that name no known field
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unresolved placeholder '{raw}'")]
pub struct UnresolvedPlaceholder {
    /// Token text as written in the template
    pub raw: String,
}

impl Placeholder {
    /// Resolve a `scope` / `path` pair
    ///
    /// # Errors
    /// Returns [`UnresolvedPlaceholder`] for unknown scopes or names
    pub fn resolve(scope: &str, path: &str) -> Result<Self, UnresolvedPlaceholder> {
        let unresolved = || UnresolvedPlaceholder {
            raw: format!("{{{{{scope}.{path}}}}}"),
        };
        match scope {
            "profile" => ProfileField::from_str(path)
                .map(Self::Profile)
                .map_err(|_| unresolved()),
            "insight" => {
                let head = path.split(['[', '.']).next().unwrap_or_default();
                InsightField::from_str(head)
                    .map(Self::Insight)
                    .map_err(|_| unresolved())
            }
            "number" => NumberSlot::ALL
                .into_iter()
                .find(|slot| slot.key() == path)
                .map(Self::Number)
                .ok_or_else(unresolved),
            _ => Err(unresolved()),
        }
    }
}

impl FromStr for Placeholder {
    type Err = UnresolvedPlaceholder;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = TOKEN
            .captures(s)
            .filter(|c| c.get(0).map(|m| m.as_str().len()) == Some(s.trim().len()))
            .ok_or_else(|| UnresolvedPlaceholder { raw: s.to_string() })?;
        Self::resolve(&caps[1], &caps[2])
    }
}

/// One token occurrence in a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Byte range of the whole `{{...}}` token
    pub span: Range<usize>,
    /// Resolution result
    pub placeholder: Result<Placeholder, UnresolvedPlaceholder>,
}

/// All tokens in a template, in order of appearance
#[must_use]
pub fn tokens(template: &str) -> Vec<Token> {
    TOKEN
        .captures_iter(template)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some(Token {
                span: whole.range(),
                placeholder: Placeholder::resolve(&caps[1], &caps[2]),
            })
        })
        .collect()
}

/// Whether a template still contains anything that looks like a token
#[must_use]
pub fn contains_token_syntax(text: &str) -> bool {
    text.contains("{{") || text.contains("}}")
}
