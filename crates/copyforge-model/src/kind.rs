//! Artifact kinds and their small enumerations

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Kind of marketing artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
    /// Paid social/search ads
    Ad,
    /// Website page sections
    WebsiteSection,
    /// Email sequence
    Email,
    /// Organic social posts
    SocialPost,
    /// Sales call and outreach scripts
    SalesScript,
}

impl ArtifactKind {
    /// Every kind, in presentation order
    pub const ALL: [ArtifactKind; 5] = [
        Self::Ad,
        Self::WebsiteSection,
        Self::Email,
        Self::SocialPost,
        Self::SalesScript,
    ];

    /// Canonical wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ad => "ad",
            Self::WebsiteSection => "website-section",
            Self::Email => "email",
            Self::SocialPost => "social-post",
            Self::SalesScript => "sales-script",
        }
    }

    /// Short slug used in file names
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Ad => "ads",
            Self::WebsiteSection => "site",
            Self::Email => "emails",
            Self::SocialPost => "social",
            Self::SalesScript => "sales-scripts",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ad => "Ad",
            Self::WebsiteSection => "Website",
            Self::Email => "Email",
            Self::SocialPost => "Social Post",
            Self::SalesScript => "Sales Script",
        }
    }
}

impl Display for ArtifactKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArtifactKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "ad" | "ads" => Ok(Self::Ad),
            "website" | "website-section" | "site" | "web" => Ok(Self::WebsiteSection),
            "email" | "emails" | "email-sequence" => Ok(Self::Email),
            "social" | "social-post" | "social-posts" => Ok(Self::SocialPost),
            "sales" | "sales-script" | "sales-scripts" => Ok(Self::SalesScript),
            _ => Err(ModelError::UnknownKind(s.to_string())),
        }
    }
}

/// Ad placement platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdPlatform {
    /// Facebook feed
    #[default]
    Facebook,
    /// Instagram feed and stories
    Instagram,
    /// Google search
    Google,
    /// LinkedIn sponsored content
    Linkedin,
    /// TikTok in-feed
    Tiktok,
}

impl AdPlatform {
    /// Every platform
    pub const ALL: [AdPlatform; 5] = [
        Self::Facebook,
        Self::Instagram,
        Self::Google,
        Self::Linkedin,
        Self::Tiktok,
    ];

    /// Wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Facebook => "facebook",
            Self::Instagram => "instagram",
            Self::Google => "google",
            Self::Linkedin => "linkedin",
            Self::Tiktok => "tiktok",
        }
    }
}

impl Display for AdPlatform {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdPlatform {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == lowered)
            .ok_or_else(|| ModelError::UnknownField(s.to_string()))
    }
}

/// Delivery channel of a sales script
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScriptChannel {
    /// Spoken, real-time conversation
    LiveCall,
    /// Written or recorded, read later
    AsyncMessage,
}

impl ScriptChannel {
    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::LiveCall => "Live Call Scripts",
            Self::AsyncMessage => "Async Message Scripts",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_aliases() {
        assert_eq!("ads".parse::<ArtifactKind>().unwrap(), ArtifactKind::Ad);
        assert_eq!("Website".parse::<ArtifactKind>().unwrap(), ArtifactKind::WebsiteSection);
        assert_eq!("social_post".parse::<ArtifactKind>().unwrap(), ArtifactKind::SocialPost);
        assert!(matches!(
            "podcast".parse::<ArtifactKind>(),
            Err(ModelError::UnknownKind(name)) if name == "podcast"
        ));
    }

    #[test]
    fn kind_wire_names_parse_back() {
        for kind in ArtifactKind::ALL {
            assert_eq!(kind.as_str().parse::<ArtifactKind>().unwrap(), kind);
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn platform_parse() {
        assert_eq!("Facebook".parse::<AdPlatform>().unwrap(), AdPlatform::Facebook);
        assert!("myspace".parse::<AdPlatform>().is_err());
        assert_eq!(AdPlatform::default(), AdPlatform::Facebook);
    }
}
