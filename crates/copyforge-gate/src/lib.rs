//! Copyforge Step Gate
//!
//! Input-collection flow control: a profile must pass every step for its
//! artifact kind before content can be generated.
//!
//! # Core Concepts
//!
//! - [`StepSpec`]: a titled step and the profile fields it requires
//! - [`StepGate`]: `Step(1)..=Step(N)` then `Ready`
//! - [`ReadyProfile`]: the token the engine accepts
//!
//! # Example
//!
//! ```rust
//! use copyforge_gate::{GateState, StepGate};
//! use copyforge_model::{ArtifactKind, Objective};
//!
//! let mut gate = StepGate::new(ArtifactKind::Ad);
//! assert!(gate.advance().is_err());
//!
//! gate.edit(|p| {
//!     p.name = "Acme".into();
//!     p.industry = "SaaS".into();
//!     p.target_audience = "founders".into();
//!     p.unique_value = "24h support".into();
//!     p.objectives.insert(Objective::LeadGeneration);
//! });
//! while gate.state() != GateState::Ready {
//!     gate.advance().unwrap();
//! }
//! assert!(gate.ready().is_ok());
//! ```

#![warn(unreachable_pub)]
#![warn(missing_docs)]

mod error;
mod machine;
mod steps;

pub use error::GateError;
pub use machine::{allowed_transitions, GateState, ReadyProfile, StepGate};
pub use steps::{steps_for, StepSpec};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
