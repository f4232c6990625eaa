//! Schema types for the signup wizard

mod config;
mod field;
mod step;
mod step_state;

pub use config::{LoggingConfig, WizardConfig, SCHEMA_VERSION};
pub use field::{FieldFormat, FieldSpec, FieldWidget};
pub use step::WizardStep;
pub use step_state::{StepState, ValidationErrors};
