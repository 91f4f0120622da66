//! Copyforge Assembly
//!
//! Turns a ready profile and an optional insight snapshot into finished,
//! kind-specific marketing content.
//!
//! # Core Concepts
//!
//! - [`Engine`]: routes a [`GenerationRequest`] to the assembler for its kind
//! - [`Assembler`]: one per artifact kind, producing typed records and
//!   [`ContentArtifact`](copyforge_model::ContentArtifact)s
//! - [`SiteBuilder`]: static HTML/CSS/JS bundle for full-site requests
//! - [`export`]: JSON, Markdown and HTML renderings with download file names
//!
//! # Example
//!
//! ```rust
//! use copyforge_assembly::{Engine, GeneratedContent, GenerationRequest};
//! use copyforge_gate::ReadyProfile;
//! use copyforge_model::{ArtifactKind, BusinessProfile, Objective};
//!
//! let profile = BusinessProfile::new()
//!     .with_name("Acme")
//!     .with_industry("SaaS")
//!     .with_target_audience("founders")
//!     .with_unique_value("24h support")
//!     .with_objective(Objective::LeadGeneration);
//! let ready = ReadyProfile::check(ArtifactKind::Ad, profile).unwrap();
//!
//! let engine = Engine::seeded(7);
//! let generation = engine
//!     .generate(&GenerationRequest::new(ArtifactKind::Ad), &ready, None)
//!     .unwrap();
//! let GeneratedContent::Ads { ads } = &generation.content else {
//!     unreachable!()
//! };
//! assert_eq!(ads.len(), 5);
//! assert!(!generation.used_insight());
//! ```

#![warn(unreachable_pub)]
#![warn(missing_docs)]

mod ad;
mod assembler;
mod context;
mod email;
mod engine;
mod error;
pub mod export;
mod records;
mod request;
mod sales;
mod site;
mod social;
mod website;

pub use ad::{AdAssembler, AdRecord};
pub use assembler::{Assembler, Assembly};
pub use context::{AssemblyContext, RenderedSlots};
pub use email::{max_start_day, EmailAssembler, EmailRecord};
pub use engine::Engine;
pub use error::{EngineError, ExportError};
pub use export::ExportFormat;
pub use records::{GeneratedContent, Generation};
pub use request::{BatchJob, GenerationRequest, Progress};
pub use sales::{SalesAssembler, SalesScript, SalesScriptSet};
pub use site::{escape_html, insertion_point, SiteBuilder, SiteDocument, Theme};
pub use social::{camel_case_tag, hashtags, SocialAssembler, SocialPost};
pub use website::{WebsiteAssembler, WebsiteSection};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
