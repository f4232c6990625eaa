//! Validate command - Check field values for one step without the UI

use tracing::debug;

use crate::domain::{fields_for_step, find_field, ControllerOptions, StepFlowController};
use crate::errors::{Result, WizardError};
use crate::schemas::{ValidationErrors, WizardStep};

use super::parse_step;

/// Split a `name=value` argument. The value may itself contain `=`.
pub fn parse_assignment(input: &str) -> Result<(String, String)> {
    match input.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.to_string()))
        }
        _ => Err(WizardError::InvalidArgument(format!(
            "expected NAME=VALUE, got '{}'",
            input
        ))),
    }
}

/// Run the step's validation over the given assignments.
///
/// Unassigned fields count as blank, the same as a fresh step.
pub fn validate_step(step: WizardStep, assignments: &[(String, String)]) -> Result<ValidationErrors> {
    let mut controller = StepFlowController::starting_at(step, ControllerOptions::default());
    for (name, value) in assignments {
        if find_field(step, name).is_none() {
            return Err(WizardError::UnknownField(format!("{} (step {})", name, step)));
        }
        controller.update_field(name, value.clone());
    }
    Ok(controller.validate())
}

/// Format the validation result for the terminal
pub fn format_report(step: WizardStep, errors: &ValidationErrors) -> String {
    if errors.is_empty() {
        return format!("✓ {}: all fields valid", step.route());
    }

    // Catalog order, not alphabetical
    let mut lines = vec![format!("✗ {}: {} field(s) invalid", step.route(), errors.len())];
    for spec in fields_for_step(step) {
        if let Some(message) = errors.get(spec.name) {
            lines.push(format!("  {}: {}", spec.name, message));
        }
    }
    lines.join("\n")
}

/// Validate field values for one step
pub async fn run(route: &str, fields: &[String], json: bool) -> Result<()> {
    let step = parse_step(route)?;
    let assignments = fields
        .iter()
        .map(|f| parse_assignment(f))
        .collect::<Result<Vec<_>>>()?;

    debug!(step = %step, fields = assignments.len(), "Validating");
    let errors = validate_step(step, &assignments)?;

    if json {
        let out = serde_json::to_string_pretty(&errors)
            .map_err(|e| WizardError::InvalidJson(e.to_string()))?;
        println!("{}", out);
    } else {
        println!("{}", format_report(step, &errors));
    }
    Ok(())
}
