//! Signup wizard - a three-step signup flow with per-step validation
//!
//! This library provides:
//! - Schema definitions for steps, fields, step state and configuration
//! - The step flow controller: validation-gated advance, free retreat
//! - A terminal UI that renders the steps and drives the controller
//! - Headless commands for listing views and validating field values

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod fs;
pub mod logging;
pub mod schemas;
pub mod tui;

// Re-export commonly used types
pub use domain::{ControllerOptions, StepFlowController, TransitionResult};
pub use errors::{Result, WizardError};
pub use schemas::{FieldSpec, StepState, ValidationErrors, WizardConfig, WizardStep};
