//! Copyforge Archetypes
//!
//! The archetype library and the machinery that turns a slot template into
//! finished copy.
//!
//! # Core Concepts
//!
//! - [`Archetype`]: a named narrative framing with ordered [`SlotTemplate`]s
//! - [`ArchetypeLibrary`]: read-only lookup by kind and id
//! - [`BranchSelector`]: baseline or enriched, per slot or all-or-nothing
//! - [`Interpolator`]: fills `{{scope.field}}` tokens with fallbacks from a [`CopyDeck`]
//! - [`NumberSource`]: injected values for `{{number.*}}` tokens
//!
//! # Example
//!
//! ```rust
//! use copyforge_archetype::{ArchetypeLibrary, CopyDeck, FixedNumbers, Interpolator};
//! use copyforge_model::{ArtifactKind, BusinessProfile};
//!
//! let library = ArchetypeLibrary::new();
//! let archetype = &library.archetypes(ArtifactKind::Ad)[0];
//! let deck = CopyDeck::default();
//! let numbers = FixedNumbers::new();
//! let interpolator = Interpolator::new(&deck, &numbers).scoped(archetype.id);
//!
//! let profile = BusinessProfile::new().with_name("Acme");
//! let headline = interpolator.interpolate(&archetype.slots[0], &profile, None);
//! assert!(headline.contains("Acme"));
//! assert!(!headline.contains("{{"));
//! ```

#![warn(unreachable_pub)]
#![warn(missing_docs)]

mod archetype;
mod branch;
mod catalog;
mod deck;
mod error;
mod interpolate;
mod library;
mod numbers;
mod placeholder;

pub use archetype::{Archetype, ArchetypeMeta, Branching, SectionSpec, SlotTemplate};
pub use branch::{slot_enrichable, Branch, BranchPlan, BranchSelector, SlotBranch};
pub use deck::{CopyDeck, InsightFallbacks, ProfileFallbacks, SiteCopy};
pub use error::{DeckError, LibraryError};
pub use interpolate::{group_thousands, Interpolator};
pub use library::ArchetypeLibrary;
pub use numbers::{FixedNumbers, NumberSource, SeededNumbers};
pub use placeholder::{
    contains_token_syntax, tokens, NumberSlot, Placeholder, Token, UnresolvedPlaceholder,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
