//! CLI command implementations

pub mod routes;
pub mod run;
pub mod validate;

use crate::errors::{Result, WizardError};
use crate::schemas::WizardStep;

/// Resolve a route or step name given on the command line
pub fn parse_step(input: &str) -> Result<WizardStep> {
    input
        .parse::<WizardStep>()
        .map_err(|_| WizardError::UnknownRoute(input.to_string()))
}
