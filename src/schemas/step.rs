//! Wizard step schema - the addressable views of the signup flow

use serde::{Deserialize, Serialize};

/// A position in the signup flow.
///
/// `Step1` through `Step3` are form views; `Done` is the terminal state reached
/// after submission, which navigates back to the entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    /// Personal information
    Step1,
    /// Address information
    Step2,
    /// Review & confirm
    Step3,
    /// Submitted
    Done,
}

impl WizardStep {
    /// Route of the view backing this step.
    pub fn route(self) -> &'static str {
        match self {
            WizardStep::Step1 => "/signup/step1",
            WizardStep::Step2 => "/signup/step2",
            WizardStep::Step3 => "/signup/step3",
            WizardStep::Done => "/",
        }
    }

    /// Resolve a route back to its step.
    pub fn from_route(route: &str) -> Option<WizardStep> {
        let route = route.trim_end_matches('/');
        match route {
            "/signup/step1" => Some(WizardStep::Step1),
            "/signup/step2" => Some(WizardStep::Step2),
            "/signup/step3" => Some(WizardStep::Step3),
            "" => Some(WizardStep::Done),
            _ => None,
        }
    }

    /// 1-based step number, `None` for the terminal state.
    pub fn number(self) -> Option<usize> {
        match self {
            WizardStep::Step1 => Some(1),
            WizardStep::Step2 => Some(2),
            WizardStep::Step3 => Some(3),
            WizardStep::Done => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::Step1 => "Personal Information",
            WizardStep::Step2 => "Address Information",
            WizardStep::Step3 => "Review & Confirm",
            WizardStep::Done => "Signup Complete",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            WizardStep::Step1 => "Please provide your basic information to get started",
            WizardStep::Step2 => "Add your address and profile details",
            WizardStep::Step3 => "Final step of the signup process",
            WizardStep::Done => "Thanks for signing up",
        }
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WizardStep::Step1 => write!(f, "step1"),
            WizardStep::Step2 => write!(f, "step2"),
            WizardStep::Step3 => write!(f, "step3"),
            WizardStep::Done => write!(f, "done"),
        }
    }
}

impl std::str::FromStr for WizardStep {
    type Err = String;

    /// Accepts a step name (`step2`), a bare number (`2`), or a route (`/signup/step2`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.starts_with('/') {
            return WizardStep::from_route(s).ok_or_else(|| format!("Unknown route: {}", s));
        }
        match s.to_ascii_lowercase().as_str() {
            "step1" | "1" => Ok(WizardStep::Step1),
            "step2" | "2" => Ok(WizardStep::Step2),
            "step3" | "3" => Ok(WizardStep::Step3),
            "done" => Ok(WizardStep::Done),
            _ => Err(format!("Unknown wizard step: {}", s)),
        }
    }
}
