//! Step indicator model
//!
//! A presentation-neutral description of the progress header, computed from
//! `(current step, total steps)` alone.

use serde::Serialize;

use crate::schemas::WizardStep;

use super::states::TOTAL_FORM_STEPS;

/// Status of a single marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerStatus {
    Completed,
    Current,
    Upcoming,
}

/// One numbered marker in the indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepMarker {
    pub number: usize,
    pub status: MarkerStatus,
    /// Connector drawn after this marker: `None` for the last marker,
    /// `Some(true)` when the marker is completed.
    pub connector_filled: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepIndicator {
    pub markers: Vec<StepMarker>,
}

impl StepIndicator {
    /// Build the indicator for a 1-based current step.
    ///
    /// A current step past `total` marks every step completed.
    pub fn new(current: usize, total: usize) -> Self {
        let markers = (1..=total)
            .map(|number| {
                let status = if number < current {
                    MarkerStatus::Completed
                } else if number == current {
                    MarkerStatus::Current
                } else {
                    MarkerStatus::Upcoming
                };
                let connector_filled = if number < total {
                    Some(status == MarkerStatus::Completed)
                } else {
                    None
                };
                StepMarker {
                    number,
                    status,
                    connector_filled,
                }
            })
            .collect();

        StepIndicator { markers }
    }

    /// Indicator for a wizard step; done shows every step completed
    pub fn for_step(step: WizardStep) -> Self {
        let current = step.number().unwrap_or(TOTAL_FORM_STEPS + 1);
        Self::new(current, TOTAL_FORM_STEPS)
    }

    pub fn completed_count(&self) -> usize {
        self.markers
            .iter()
            .filter(|m| m.status == MarkerStatus::Completed)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn statuses(indicator: &StepIndicator) -> Vec<MarkerStatus> {
        indicator.markers.iter().map(|m| m.status).collect()
    }

    #[test]
    fn test_first_step() {
        let indicator = StepIndicator::for_step(WizardStep::Step1);
        assert_eq!(
            statuses(&indicator),
            vec![MarkerStatus::Current, MarkerStatus::Upcoming, MarkerStatus::Upcoming]
        );
        assert_eq!(indicator.completed_count(), 0);
    }

    #[test]
    fn test_middle_step_connectors() {
        let indicator = StepIndicator::for_step(WizardStep::Step2);
        let connectors: Vec<_> = indicator.markers.iter().map(|m| m.connector_filled).collect();
        assert_eq!(connectors, vec![Some(true), Some(false), None]);
    }

    #[test]
    fn test_done_marks_everything_completed() {
        let indicator = StepIndicator::for_step(WizardStep::Done);
        assert_eq!(indicator.completed_count(), 3);
        assert_eq!(indicator.markers[2].connector_filled, None);
    }

    #[test]
    fn test_arbitrary_totals() {
        let indicator = StepIndicator::new(4, 5);
        assert_eq!(indicator.markers.len(), 5);
        assert_eq!(indicator.completed_count(), 3);
        assert_eq!(indicator.markers[3].status, MarkerStatus::Current);
        assert_eq!(indicator.markers[4].status, MarkerStatus::Upcoming);
    }

    #[test]
    fn test_zero_total_is_empty() {
        assert!(StepIndicator::new(1, 0).markers.is_empty());
    }
}
