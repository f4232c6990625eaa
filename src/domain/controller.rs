//! Step flow controller
//!
//! Owns the current step and its state for the lifetime of one wizard run.
//! Forward navigation is gated by validation; backward navigation is free.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::schemas::{StepState, ValidationErrors, WizardStep};

use super::catalog::{blank_state, fields_for_step};
use super::indicator::StepIndicator;
use super::states::is_terminal_step;
use super::transitions::{apply_advance, apply_retreat, TransitionResult};
use super::validation::validate_fields;

/// Payload handed to the submit hook
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Submission {
    pub submitted_at: DateTime<Utc>,
    /// Values carried from earlier steps; empty unless carry-forward is on
    pub values: BTreeMap<String, String>,
}

/// A label/value pair shown on the review step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewEntry {
    pub step: WizardStep,
    pub label: &'static str,
    pub value: String,
}

/// Callback invoked once per successful submit
pub type SubmitHook = Arc<dyn Fn(&Submission) + Send + Sync>;

/// Options for controller construction
#[derive(Clone, Default)]
pub struct ControllerOptions {
    /// Keep step data when navigating away instead of discarding it
    pub carry_forward: bool,
    pub on_submit: Option<SubmitHook>,
}

impl std::fmt::Debug for ControllerOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ControllerOptions")
            .field("carry_forward", &self.carry_forward)
            .field("on_submit", &self.on_submit.is_some())
            .finish()
    }
}

/// Drives the signup flow: step1 → step2 → step3 → done
#[derive(Debug, Clone)]
pub struct StepFlowController {
    start: WizardStep,
    state: StepState,
    retained: BTreeMap<WizardStep, StepState>,
    options: ControllerOptions,
}

impl StepFlowController {
    /// Create a controller on step 1
    pub fn new(options: ControllerOptions) -> Self {
        Self::starting_at(WizardStep::Step1, options)
    }

    /// Create a controller on a specific view.
    ///
    /// The terminal state cannot be a starting point; it falls back to step 1.
    pub fn starting_at(step: WizardStep, options: ControllerOptions) -> Self {
        let start = if is_terminal_step(step) {
            warn!(step = %step, "Cannot start on terminal step, using step1");
            WizardStep::Step1
        } else {
            step
        };

        StepFlowController {
            start,
            state: blank_state(start),
            retained: BTreeMap::new(),
            options,
        }
    }

    pub fn current_step(&self) -> WizardStep {
        self.state.step
    }

    pub fn state(&self) -> &StepState {
        &self.state
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.state.errors
    }

    pub fn carry_forward(&self) -> bool {
        self.options.carry_forward
    }

    pub fn is_done(&self) -> bool {
        is_terminal_step(self.state.step)
    }

    pub fn indicator(&self) -> StepIndicator {
        StepIndicator::for_step(self.state.step)
    }

    /// Set a field on the current step.
    ///
    /// Clears the field's error without revalidating. Names that are not part
    /// of the current step are ignored; returns whether the value was stored.
    pub fn update_field(&mut self, name: &str, value: impl Into<String>) -> bool {
        let stored = self.state.set_field(name, value);
        if stored {
            debug!(step = %self.state.step, field = name, "Field updated");
        } else {
            warn!(step = %self.state.step, field = name, "Ignoring update to unknown field");
        }
        stored
    }

    /// Validate the current step's fields without touching stored errors
    pub fn validate(&self) -> ValidationErrors {
        validate_fields(fields_for_step(self.state.step), &self.state.fields)
    }

    /// Try to move forward.
    ///
    /// The validation result is stored as the step's errors either way. On
    /// step 3 this submits: the hook fires and the wizard enters done.
    pub fn advance(&mut self) -> TransitionResult {
        let result = apply_advance(&self.state);

        match result {
            TransitionResult::Moved { from, to } if is_terminal_step(to) => {
                self.state.errors = ValidationErrors::new();
                let submission = self.submit();
                info!(from = %from, values = submission.values.len(), "Signup submitted");
                TransitionResult::Submitted { submission }
            }
            TransitionResult::Moved { from, to } => {
                self.state.errors = ValidationErrors::new();
                info!(from = %from, to = %to, "Advanced");
                self.enter(to);
                TransitionResult::Moved { from, to }
            }
            TransitionResult::Blocked { errors } => {
                debug!(step = %self.state.step, failing = errors.len(), "Advance blocked");
                self.state.errors = errors.clone();
                TransitionResult::Blocked { errors }
            }
            other => {
                warn!(step = %self.state.step, "Advance rejected");
                other
            }
        }
    }

    /// Move back one step without validating
    pub fn retreat(&mut self) -> TransitionResult {
        let result = apply_retreat(self.state.step);
        if let TransitionResult::Moved { from, to } = result {
            info!(from = %from, to = %to, "Went back");
            self.enter(to);
        }
        result
    }

    /// Return to the starting view with fresh state and no retained data
    pub fn reset(&mut self) {
        info!(start = %self.start, "Wizard reset");
        self.retained.clear();
        self.state = blank_state(self.start);
    }

    /// Values from earlier steps for the review screen.
    ///
    /// Only populated with carry-forward enabled; otherwise earlier steps'
    /// data has already been discarded.
    pub fn review(&self) -> Vec<ReviewEntry> {
        self.retained
            .iter()
            .filter(|(step, _)| **step < self.state.step)
            .flat_map(|(step, state)| {
                fields_for_step(*step).iter().map(move |spec| ReviewEntry {
                    step: *step,
                    label: spec.label,
                    value: state.value(spec.name).to_string(),
                })
            })
            .collect()
    }

    fn submit(&mut self) -> Submission {
        let values = self
            .retained
            .values()
            .flat_map(|state| state.fields.iter())
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        let submission = Submission {
            submitted_at: Utc::now(),
            values,
        };

        if let Some(ref on_submit) = self.options.on_submit {
            on_submit(&submission);
        }

        self.retained.clear();
        self.state = blank_state(WizardStep::Done);
        submission
    }

    fn enter(&mut self, step: WizardStep) {
        let next = if self.options.carry_forward {
            let mut restored = self
                .retained
                .remove(&step)
                .unwrap_or_else(|| blank_state(step));
            restored.errors = ValidationErrors::new();
            restored
        } else {
            blank_state(step)
        };

        let previous = std::mem::replace(&mut self.state, next);
        if self.options.carry_forward {
            self.retained.insert(previous.step, previous);
        }
    }
}
