use copyforge_gate::{allowed_transitions, steps_for, GateError, GateState, ReadyProfile, StepGate};
use copyforge_model::{ArtifactKind, ProfileField};
use copyforge_test_utils::{acme_profile, arb_profile, empty_profile, name_only_profile};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Action {
    Advance,
    Retreat,
    ClearField(ProfileField),
}

fn kind() -> impl Strategy<Value = ArtifactKind> {
    prop_oneof![
        Just(ArtifactKind::Ad),
        Just(ArtifactKind::WebsiteSection),
        Just(ArtifactKind::Email),
        Just(ArtifactKind::SocialPost),
        Just(ArtifactKind::SalesScript),
    ]
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        4 => Just(Action::Advance),
        2 => Just(Action::Retreat),
        1 => proptest::sample::select(ProfileField::ALL.to_vec()).prop_map(Action::ClearField),
    ]
}

fn clear(field: ProfileField, gate: &mut StepGate) -> GateState {
    gate.edit(|p| match field {
        ProfileField::Name => p.name.clear(),
        ProfileField::Industry => p.industry.clear(),
        ProfileField::BusinessModel => p.business_model.clear(),
        ProfileField::TargetAudience => p.target_audience.clear(),
        ProfileField::ProductOrService => p.product_or_service.clear(),
        ProfileField::UniqueValue => p.unique_value.clear(),
        ProfileField::Tone => p.tone.clear(),
        ProfileField::Budget => p.budget = 0,
        ProfileField::Timeline => p.timeline.clear(),
        ProfileField::Objectives => p.objectives.clear(),
    })
}

fn earlier_steps_hold(gate: &StepGate) -> bool {
    let passed = gate.progress().0;
    gate.steps()[..passed].iter().all(|s| s.holds(gate.profile()))
}

#[test]
fn acme_passes_every_kind() {
    for kind in ArtifactKind::ALL {
        let mut gate = StepGate::with_profile(kind, acme_profile());
        for _ in steps_for(kind) {
            gate.advance().unwrap();
        }
        assert_eq!(gate.state(), GateState::Ready);
        assert_eq!(gate.ready().unwrap().profile(), &acme_profile());
    }
}

#[test]
fn empty_profile_never_leaves_step_one() {
    for kind in ArtifactKind::ALL {
        let mut gate = StepGate::with_profile(kind, empty_profile());
        let err = gate.advance().unwrap_err();
        assert_eq!(err.missing_fields(), steps_for(kind)[0].required);
        assert_eq!(gate.state(), GateState::Step(1));
    }
}

#[test]
fn name_only_profile_is_incomplete_for_every_kind() {
    for kind in ArtifactKind::ALL {
        let err = ReadyProfile::check(kind, name_only_profile()).unwrap_err();
        assert!(!err.missing_fields().contains(&ProfileField::Name));
        assert!(matches!(err, GateError::IncompleteProfile { step: 1, .. }));
    }
}

proptest! {
    #[test]
    fn prop_advance_iff_step_predicate_holds(kind in kind(), profile in arb_profile()) {
        let mut gate = StepGate::with_profile(kind, profile.clone());
        for (i, step) in steps_for(kind).iter().enumerate() {
            prop_assert_eq!(gate.state(), GateState::Step(i + 1));
            let result = gate.advance();
            if step.holds(&profile) {
                prop_assert!(result.is_ok());
            } else {
                prop_assert!(result.is_err());
                prop_assert_eq!(gate.state(), GateState::Step(i + 1));
                return Ok(());
            }
        }
        prop_assert_eq!(gate.state(), GateState::Ready);
    }

    #[test]
    fn prop_ready_agrees_with_check(kind in kind(), profile in arb_profile()) {
        let mut gate = StepGate::with_profile(kind, profile.clone());
        while gate.advance().is_ok() {}
        let walked = gate.ready().is_ok();
        let checked = ReadyProfile::check(kind, profile).is_ok();
        prop_assert_eq!(walked, checked);
    }

    #[test]
    fn prop_invariant_under_random_actions(
        kind in kind(),
        actions in proptest::collection::vec(action(), 0..40),
    ) {
        let mut gate = StepGate::with_profile(kind, acme_profile());
        for action in actions {
            let before = gate.state();
            match action {
                Action::Advance => {
                    if gate.advance().is_ok() {
                        prop_assert!(allowed_transitions(kind, before).contains(&gate.state()));
                    } else {
                        prop_assert_eq!(gate.state(), before);
                    }
                }
                Action::Retreat => {
                    if gate.retreat().is_ok() {
                        prop_assert!(allowed_transitions(kind, before).contains(&gate.state()));
                    } else {
                        prop_assert_eq!(before, GateState::Step(1));
                    }
                }
                Action::ClearField(field) => {
                    clear(field, &mut gate);
                }
            }
            prop_assert!(earlier_steps_hold(&gate));
            if gate.state() == GateState::Ready {
                prop_assert!(steps_for(kind).iter().all(|s| s.holds(gate.profile())));
            }
        }
    }
}
