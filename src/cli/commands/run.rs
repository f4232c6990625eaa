//! Run command - Launch the interactive wizard

use std::sync::Arc;

use tracing::info;

use crate::config::ConfigOverrides;
use crate::domain::{ControllerOptions, StepFlowController, Submission};
use crate::errors::{Result, WizardError};
use crate::schemas::WizardConfig;
use crate::tui::{TuiRunner, TuiState};

use super::parse_step;

/// Build the initial UI state from configuration and command-line overrides
pub fn build_state(
    config: &WizardConfig,
    route: Option<&str>,
    carry_forward: bool,
) -> Result<TuiState> {
    let overrides = ConfigOverrides {
        carry_forward,
        start_step: route.map(parse_step).transpose()?,
    };
    let config = overrides.apply(config.clone());

    let options = ControllerOptions {
        carry_forward: config.carry_forward,
        on_submit: Some(Arc::new(|submission: &Submission| {
            info!(
                submitted_at = %submission.submitted_at,
                values = submission.values.len(),
                "Acknowledged submission"
            );
        })),
    };

    let controller = StepFlowController::starting_at(config.start_step, options);
    Ok(TuiState::new(controller, config.submit_message))
}

/// Launch the interactive wizard
pub async fn run(config: &WizardConfig, route: Option<&str>, carry_forward: bool) -> Result<()> {
    let state = build_state(config, route, carry_forward)?;
    let mut runner = TuiRunner::new(state);

    // The terminal loop blocks on input polling
    tokio::task::spawn_blocking(move || runner.run())
        .await
        .map_err(|e| WizardError::wrap(e, "Terminal task failed"))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::WizardStep;

    #[test]
    fn test_build_state_defaults() {
        let state = build_state(&WizardConfig::default(), None, false).unwrap();
        assert_eq!(state.controller.current_step(), WizardStep::Step1);
        assert!(!state.controller.carry_forward());
        assert_eq!(state.submit_message, "Form submitted successfully!");
    }

    #[test]
    fn test_build_state_overrides() {
        let state = build_state(&WizardConfig::default(), Some("/signup/step2"), true).unwrap();
        assert_eq!(state.controller.current_step(), WizardStep::Step2);
        assert!(state.controller.carry_forward());
    }

    #[test]
    fn test_build_state_uses_config_start() {
        let config = WizardConfig {
            start_step: WizardStep::Step3,
            submit_message: "Thanks!".to_string(),
            ..Default::default()
        };
        let state = build_state(&config, None, false).unwrap();
        assert_eq!(state.controller.current_step(), WizardStep::Step3);
        assert_eq!(state.submit_message, "Thanks!");
    }

    #[test]
    fn test_build_state_unknown_route() {
        let err = build_state(&WizardConfig::default(), Some("/signup/nope"), false).unwrap_err();
        assert_eq!(err.code(), "UNKNOWN_ROUTE");
    }
}
