//! Step validation state machine
//!
//! States are `Step(1)..=Step(N)` plus terminal `Ready`. Every step before
//! the current one holds against the in-progress profile; edits that break
//! an earlier step move the gate back to it.

use std::fmt::{self, Display, Formatter};

use copyforge_model::{ArtifactKind, BusinessProfile, ProfileField};
use serde::Serialize;
use tracing::debug;

use crate::error::GateError;
use crate::steps::{steps_for, StepSpec};

/// Gate position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GateState {
    /// Collecting input for step `n` (1-based)
    Step(usize),
    /// Every step passed
    Ready,
}

impl Display for GateState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Step(n) => write!(f, "step {n}"),
            Self::Ready => f.write_str("ready"),
        }
    }
}

/// States reachable from `from` in one `advance` or `retreat`
///
/// Whether `advance` actually succeeds also depends on the profile.
#[must_use]
pub fn allowed_transitions(kind: ArtifactKind, from: GateState) -> Vec<GateState> {
    let last = steps_for(kind).len();
    match from {
        GateState::Ready => vec![GateState::Step(last)],
        GateState::Step(1) if last == 1 => vec![GateState::Ready],
        GateState::Step(1) => vec![GateState::Step(2)],
        GateState::Step(n) if n == last => vec![GateState::Ready, GateState::Step(n - 1)],
        GateState::Step(n) => vec![GateState::Step(n + 1), GateState::Step(n - 1)],
    }
}

/// Finite-state machine over a kind's input steps
#[derive(Debug, Clone)]
pub struct StepGate {
    kind: ArtifactKind,
    profile: BusinessProfile,
    state: GateState,
}

impl StepGate {
    /// Gate at step 1 with an empty profile
    #[must_use]
    pub fn new(kind: ArtifactKind) -> Self {
        Self::with_profile(kind, BusinessProfile::new())
    }

    /// Gate at step 1 over an existing profile
    #[must_use]
    pub fn with_profile(kind: ArtifactKind, profile: BusinessProfile) -> Self {
        Self {
            kind,
            profile,
            state: GateState::Step(1),
        }
    }

    /// Artifact kind the steps belong to
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ArtifactKind {
        self.kind
    }

    /// Current state
    #[inline]
    #[must_use]
    pub fn state(&self) -> GateState {
        self.state
    }

    /// In-progress profile
    #[inline]
    #[must_use]
    pub fn profile(&self) -> &BusinessProfile {
        &self.profile
    }

    /// All steps for this kind
    #[inline]
    #[must_use]
    pub fn steps(&self) -> &'static [StepSpec] {
        steps_for(self.kind)
    }

    /// Spec of the current step (`None` when ready)
    #[must_use]
    pub fn current_step(&self) -> Option<&'static StepSpec> {
        match self.state {
            GateState::Step(n) => self.steps().get(n - 1),
            GateState::Ready => None,
        }
    }

    /// Move forward if the current step holds
    ///
    /// # Errors
    /// - [`GateError::IncompleteProfile`] naming the blank fields; state is unchanged
    /// - [`GateError::AlreadyReady`] from `Ready`
    pub fn advance(&mut self) -> Result<GateState, GateError> {
        let GateState::Step(n) = self.state else {
            return Err(GateError::AlreadyReady);
        };
        let step = &self.steps()[n - 1];
        let missing = step.missing(&self.profile);
        if !missing.is_empty() {
            debug!(kind = %self.kind, step = n, ?missing, "advance rejected");
            return Err(GateError::IncompleteProfile {
                step: n,
                title: step.title,
                missing,
            });
        }
        self.state = if n == self.steps().len() {
            GateState::Ready
        } else {
            GateState::Step(n + 1)
        };
        debug!(kind = %self.kind, from = n, to = %self.state, "advanced");
        Ok(self.state)
    }

    /// Move back one step
    ///
    /// # Errors
    /// [`GateError::AtFirstStep`] from `Step(1)`
    pub fn retreat(&mut self) -> Result<GateState, GateError> {
        self.state = match self.state {
            GateState::Step(1) => return Err(GateError::AtFirstStep),
            GateState::Step(n) => GateState::Step(n - 1),
            GateState::Ready => GateState::Step(self.steps().len()),
        };
        Ok(self.state)
    }

    /// Mutate the profile, then fall back to the first earlier step that no
    /// longer holds
    pub fn edit<F>(&mut self, f: F) -> GateState
    where
        F: FnOnce(&mut BusinessProfile),
    {
        f(&mut self.profile);
        let passed = match self.state {
            GateState::Step(n) => n - 1,
            GateState::Ready => self.steps().len(),
        };
        if let Some(i) = self.steps()[..passed]
            .iter()
            .position(|s| !s.holds(&self.profile))
        {
            debug!(kind = %self.kind, from = %self.state, to = i + 1, "edit invalidated step");
            self.state = GateState::Step(i + 1);
        }
        self.state
    }

    /// Blank required fields of the current step (empty when ready)
    #[must_use]
    pub fn missing_fields(&self) -> Vec<ProfileField> {
        self.current_step()
            .map(|s| s.missing(&self.profile))
            .unwrap_or_default()
    }

    /// `(completed steps, total steps)`
    #[must_use]
    pub fn progress(&self) -> (usize, usize) {
        let total = self.steps().len();
        match self.state {
            GateState::Step(n) => (n - 1, total),
            GateState::Ready => (total, total),
        }
    }

    /// Token proving every step passed
    ///
    /// # Errors
    /// [`GateError::NotReady`] unless in `Ready`
    pub fn ready(&self) -> Result<ReadyProfile, GateError> {
        match self.state {
            GateState::Ready => Ok(ReadyProfile {
                kind: self.kind,
                profile: self.profile.clone(),
            }),
            state => Err(GateError::NotReady { state }),
        }
    }
}

/// A profile that passed every step for its kind
///
/// Only [`StepGate::ready`] and [`ReadyProfile::check`] construct one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadyProfile {
    kind: ArtifactKind,
    profile: BusinessProfile,
}

impl ReadyProfile {
    /// Validate all steps at once
    ///
    /// # Errors
    /// [`GateError::IncompleteProfile`] for the first failing step
    pub fn check(kind: ArtifactKind, profile: BusinessProfile) -> Result<Self, GateError> {
        for (i, step) in steps_for(kind).iter().enumerate() {
            let missing = step.missing(&profile);
            if !missing.is_empty() {
                return Err(GateError::IncompleteProfile {
                    step: i + 1,
                    title: step.title,
                    missing,
                });
            }
        }
        Ok(Self { kind, profile })
    }

    /// Kind the profile was validated for
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ArtifactKind {
        self.kind
    }

    /// Validated profile
    #[inline]
    #[must_use]
    pub fn profile(&self) -> &BusinessProfile {
        &self.profile
    }

    /// Take the profile back
    #[must_use]
    pub fn into_profile(self) -> BusinessProfile {
        self.profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use copyforge_model::Objective;

    fn email_ready_profile() -> BusinessProfile {
        BusinessProfile::new()
            .with_name("Acme")
            .with_product_or_service("a dashboard")
            .with_target_audience("founders")
            .with_objective(Objective::Sales)
    }

    #[test]
    fn new_gate_starts_at_step_one() {
        let gate = StepGate::new(ArtifactKind::Ad);
        assert_eq!(gate.state(), GateState::Step(1));
        assert_eq!(gate.progress(), (0, 4));
        assert_eq!(
            gate.missing_fields(),
            vec![ProfileField::Name, ProfileField::Industry]
        );
    }

    #[test]
    fn advance_rejects_with_missing_fields() {
        let mut gate = StepGate::new(ArtifactKind::Ad);
        gate.edit(|p| p.name = "Acme".into());
        let err = gate.advance().unwrap_err();
        assert_eq!(
            err,
            GateError::IncompleteProfile {
                step: 1,
                title: "Business Basics",
                missing: vec![ProfileField::Industry],
            }
        );
        assert_eq!(
            err.to_string(),
            "step 1 (Business Basics) is incomplete, missing: industry"
        );
        assert_eq!(gate.state(), GateState::Step(1));
    }

    #[test]
    fn walks_to_ready() {
        let mut gate = StepGate::with_profile(ArtifactKind::Email, email_ready_profile());
        assert_eq!(gate.advance(), Ok(GateState::Step(2)));
        assert_eq!(gate.advance(), Ok(GateState::Step(3)));
        assert_eq!(gate.advance(), Ok(GateState::Ready));
        assert_eq!(gate.advance(), Err(GateError::AlreadyReady));
        assert_eq!(gate.progress(), (3, 3));
        assert!(gate.missing_fields().is_empty());
        let ready = gate.ready().unwrap();
        assert_eq!(ready.kind(), ArtifactKind::Email);
        assert_eq!(ready.profile().name, "Acme");
    }

    #[test]
    fn retreat_rules() {
        let mut gate = StepGate::with_profile(ArtifactKind::Email, email_ready_profile());
        assert_eq!(gate.retreat(), Err(GateError::AtFirstStep));
        gate.advance().unwrap();
        assert_eq!(gate.retreat(), Ok(GateState::Step(1)));
        for _ in 0..3 {
            gate.advance().unwrap();
        }
        assert_eq!(gate.retreat(), Ok(GateState::Step(3)));
    }

    #[test]
    fn edit_falls_back_to_first_broken_step() {
        let mut gate = StepGate::with_profile(ArtifactKind::Email, email_ready_profile());
        for _ in 0..3 {
            gate.advance().unwrap();
        }
        assert_eq!(gate.edit(|p| p.target_audience.clear()), GateState::Step(2));
        assert_eq!(gate.edit(|p| p.name = "  ".into()), GateState::Step(1));
    }

    #[test]
    fn edit_of_later_step_keeps_position() {
        let mut gate = StepGate::with_profile(ArtifactKind::Email, email_ready_profile());
        gate.advance().unwrap();
        assert_eq!(gate.edit(|p| p.objectives.clear()), GateState::Step(2));
    }

    #[test]
    fn ready_requires_ready_state() {
        let gate = StepGate::new(ArtifactKind::SocialPost);
        assert_eq!(
            gate.ready(),
            Err(GateError::NotReady {
                state: GateState::Step(1)
            })
        );
    }

    #[test]
    fn check_reports_first_failing_step() {
        let profile = email_ready_profile().with_budget(0);
        let err = ReadyProfile::check(ArtifactKind::SalesScript, profile).unwrap_err();
        assert!(matches!(err, GateError::IncompleteProfile { step: 3, .. }));
        assert_eq!(err.missing_fields(), &[ProfileField::UniqueValue]);
        assert!(ReadyProfile::check(ArtifactKind::Email, email_ready_profile()).is_ok());
    }

    #[test]
    fn transitions_table() {
        assert_eq!(
            allowed_transitions(ArtifactKind::Ad, GateState::Step(1)),
            vec![GateState::Step(2)]
        );
        assert_eq!(
            allowed_transitions(ArtifactKind::Ad, GateState::Step(4)),
            vec![GateState::Ready, GateState::Step(3)]
        );
        assert_eq!(
            allowed_transitions(ArtifactKind::Ad, GateState::Ready),
            vec![GateState::Step(4)]
        );
    }
}
