//! Wizard step machine definitions
//!
//! Forward progression is linear: step1 → step2 → step3 → done.
//! Backward moves are allowed between the form steps only.

use crate::schemas::WizardStep;

/// The canonical ordering of wizard steps.
///
/// IMPORTANT: This is the source of truth for step ordering.
pub const WIZARD_STEPS: &[WizardStep] = &[
    WizardStep::Step1,
    WizardStep::Step2,
    WizardStep::Step3,
    WizardStep::Done,
];

/// Number of visible steps in the indicator (the terminal state is not shown)
pub const TOTAL_FORM_STEPS: usize = 3;

/// Get the 0-based index of a step in the progression.
pub fn get_step_index(step: WizardStep) -> usize {
    WIZARD_STEPS
        .iter()
        .position(|&s| s == step)
        .unwrap_or(usize::MAX)
}

/// Returns the step reached by a successful advance.
///
/// Returns None for the terminal "done" state.
pub fn get_next_step(current: WizardStep) -> Option<WizardStep> {
    let index = get_step_index(current);
    if index >= WIZARD_STEPS.len() - 1 {
        return None;
    }
    Some(WIZARD_STEPS[index + 1])
}

/// Returns the step reached by a retreat.
///
/// Step 1 has nothing behind it, and done is terminal.
pub fn get_previous_step(current: WizardStep) -> Option<WizardStep> {
    match current {
        WizardStep::Step1 | WizardStep::Done => None,
        _ => Some(WIZARD_STEPS[get_step_index(current) - 1]),
    }
}

/// Check if a step is the terminal step (done).
pub fn is_terminal_step(step: WizardStep) -> bool {
    step == WizardStep::Done
}
