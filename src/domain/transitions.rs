//! Step transition logic
//!
//! Pure functions deciding where `advance` and `retreat` lead from a given
//! step state. They never mutate their input; the controller applies the
//! outcome.

use crate::schemas::{StepState, ValidationErrors, WizardStep};

use super::catalog::fields_for_step;
use super::controller::Submission;
use super::states::{get_next_step, get_previous_step};
use super::validation::validate_fields;

/// Result of a transition attempt
#[derive(Debug, Clone, PartialEq)]
pub enum TransitionResult {
    /// Navigation to another form step
    Moved {
        from: WizardStep,
        to: WizardStep,
    },
    /// Validation failed; the step stays put and the errors are shown inline
    Blocked { errors: ValidationErrors },
    /// Step 3 was submitted and the wizard reached its terminal state
    Submitted { submission: Submission },
    /// The move does not exist from this step (e.g. retreat from step 1)
    Rejected { reason: String },
}

impl TransitionResult {
    /// Check if the step changed
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            TransitionResult::Moved { .. } | TransitionResult::Submitted { .. }
        )
    }

    pub fn is_blocked(&self) -> bool {
        matches!(self, TransitionResult::Blocked { .. })
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, TransitionResult::Rejected { .. })
    }

    /// Step reached by the transition, if it succeeded
    pub fn target(&self) -> Option<WizardStep> {
        match self {
            TransitionResult::Moved { to, .. } => Some(*to),
            TransitionResult::Submitted { .. } => Some(WizardStep::Done),
            _ => None,
        }
    }

    /// Validation errors, if the transition was blocked
    pub fn errors(&self) -> Option<&ValidationErrors> {
        match self {
            TransitionResult::Blocked { errors } => Some(errors),
            _ => None,
        }
    }

    /// Reason the move was rejected
    pub fn reason(&self) -> Option<&str> {
        match self {
            TransitionResult::Rejected { reason } => Some(reason),
            _ => None,
        }
    }
}

/// Decide the outcome of `advance` for a step state.
///
/// Runs validation against the step's catalog. Leaving step 3 yields
/// `Moved { to: Done }`; the controller turns that into a submission.
pub fn apply_advance(state: &StepState) -> TransitionResult {
    let next = match get_next_step(state.step) {
        Some(step) => step,
        None => {
            return TransitionResult::Rejected {
                reason: format!("Cannot advance from terminal step: {}", state.step),
            };
        }
    };

    let errors = validate_fields(fields_for_step(state.step), &state.fields);
    if !errors.is_empty() {
        return TransitionResult::Blocked { errors };
    }

    TransitionResult::Moved {
        from: state.step,
        to: next,
    }
}

/// Decide the outcome of `retreat`. Field values and errors play no part.
pub fn apply_retreat(step: WizardStep) -> TransitionResult {
    match get_previous_step(step) {
        Some(previous) => TransitionResult::Moved {
            from: step,
            to: previous,
        },
        None => TransitionResult::Rejected {
            reason: format!("Cannot go back from {}", step),
        },
    }
}
