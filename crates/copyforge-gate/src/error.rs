//! Gate errors

use copyforge_model::ProfileField;

use crate::machine::GateState;

/// Rejected gate transitions
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GateError {
    /// Current step's required fields are not all filled
    #[error("step {step} ({title}) is incomplete, missing: {}", field_list(.missing))]
    IncompleteProfile {
        /// 1-based step number
        step: usize,
        /// Step title
        title: &'static str,
        /// Blank required fields, in step order
        missing: Vec<ProfileField>,
    },

    /// `retreat` from the first step
    #[error("already at the first step")]
    AtFirstStep,

    /// `advance` from `Ready`
    #[error("profile is already ready")]
    AlreadyReady,

    /// `ready` requested before the last step passed
    #[error("profile is not ready (at {state})")]
    NotReady {
        /// State at the time of the request
        state: GateState,
    },
}

impl GateError {
    /// Missing fields, if this is an incomplete-profile rejection
    #[must_use]
    pub fn missing_fields(&self) -> &[ProfileField] {
        match self {
            Self::IncompleteProfile { missing, .. } => missing,
            _ => &[],
        }
    }
}

fn field_list(fields: &[ProfileField]) -> String {
    fields
        .iter()
        .map(|f| f.key())
        .collect::<Vec<_>>()
        .join(", ")
}
