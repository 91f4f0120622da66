//! Copyforge Model
//!
//! Typed inputs and outputs of the content generation engine.
//!
//! # Core Concepts
//!
//! - [`BusinessProfile`]: facts about the business, every field optional
//! - [`CompetitiveInsight`]: optional market findings, null-safe per field
//! - [`ContentArtifact`]: one generated unit of copy with [`Provenance`]
//! - [`Fingerprint`]: Blake3 content hash identifying artifact text
//!
//! # Example
//!
//! ```rust
//! use copyforge_model::{BusinessProfile, Objective, ProfileField};
//!
//! let profile = BusinessProfile::new()
//!     .with_name("Acme")
//!     .with_objective(Objective::LeadGeneration);
//! assert!(profile.has(ProfileField::Name));
//! assert!(!profile.has(ProfileField::Industry));
//! ```

#![warn(unreachable_pub)]
#![warn(missing_docs)]

mod artifact;
mod error;
mod hash;
mod insight;
mod kind;
mod load;
mod profile;

pub use artifact::{ContentArtifact, Provenance};
pub use error::ModelError;
pub use hash::{Fingerprint, FingerprintError};
pub use insight::{CompetitiveInsight, InsightField, Performer, SuccessMetrics};
pub use kind::{AdPlatform, ArtifactKind, ScriptChannel};
pub use load::{parse_file, parse_str, PayloadFormat};
pub use profile::{BusinessProfile, Objective, ProfileField};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
