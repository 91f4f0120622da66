//! Generation output

use copyforge_model::{ArtifactKind, ContentArtifact};
use serde::{Deserialize, Serialize};

use crate::ad::AdRecord;
use crate::email::EmailRecord;
use crate::sales::SalesScriptSet;
use crate::site::SiteDocument;
use crate::social::SocialPost;
use crate::website::WebsiteSection;

/// Typed records of one generation, one variant per kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum GeneratedContent {
    /// Ad variants
    Ads {
        /// One per ad archetype
        ads: Vec<AdRecord>,
    },
    /// Website sections and optional site bundle
    Website {
        /// Sections of the chosen archetype
        sections: Vec<WebsiteSection>,
        /// Present for full-site requests
        #[serde(skip_serializing_if = "Option::is_none")]
        site: Option<SiteDocument>,
    },
    /// Email sequence
    Emails {
        /// Strictly increasing days
        emails: Vec<EmailRecord>,
    },
    /// Social posts
    Social {
        /// One per social archetype
        posts: Vec<SocialPost>,
    },
    /// Sales scripts
    SalesScripts {
        /// Scripts by channel
        scripts: SalesScriptSet,
    },
}

impl GeneratedContent {
    /// Kind of the content
    #[must_use]
    pub fn kind(&self) -> ArtifactKind {
        match self {
            Self::Ads { .. } => ArtifactKind::Ad,
            Self::Website { .. } => ArtifactKind::WebsiteSection,
            Self::Emails { .. } => ArtifactKind::Email,
            Self::Social { .. } => ArtifactKind::SocialPost,
            Self::SalesScripts { .. } => ArtifactKind::SalesScript,
        }
    }
}

/// Result of one generation call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Generation {
    /// Business name as rendered (fallback when blank)
    pub business_name: String,
    /// Typed records
    pub content: GeneratedContent,
    /// Artifacts behind the records, in the same order
    pub artifacts: Vec<ContentArtifact>,
}

impl Generation {
    /// Kind of the content
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ArtifactKind {
        self.content.kind()
    }

    /// Whether any artifact consumed insight
    #[must_use]
    pub fn used_insight(&self) -> bool {
        self.artifacts.iter().any(|a| a.provenance().used_insight)
    }
}
