//! Domain logic for wizard steps, validation and transitions

mod catalog;
mod controller;
mod indicator;
mod states;
mod transitions;
mod validation;


pub use catalog::{blank_state, fields_for_step, find_field, STEP1_FIELDS, STEP2_FIELDS, US_STATES};
pub use controller::{
    ControllerOptions, ReviewEntry, StepFlowController, SubmitHook, Submission,
};
pub use indicator::{MarkerStatus, StepIndicator, StepMarker};
pub use states::{
    get_next_step, get_previous_step, get_step_index, is_terminal_step, TOTAL_FORM_STEPS,
    WIZARD_STEPS,
};
pub use transitions::{apply_advance, apply_retreat, TransitionResult};
pub use validation::{
    is_valid_email, required_message, validate_field, validate_fields, INVALID_EMAIL_MESSAGE,
};
