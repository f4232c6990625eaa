//! TUI state management

use chrono::{DateTime, Utc};

use crate::domain::{fields_for_step, StepFlowController, TransitionResult};
use crate::schemas::FieldSpec;
use crate::tui::events::WizardAction;

/// Whether the event loop should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Main TUI state
#[derive(Debug, Clone)]
pub struct TuiState {
    pub controller: StepFlowController,
    /// Index of the focused field on the current step
    pub focus: usize,
    /// Acknowledgment shown after submission
    pub notice: Option<String>,
    /// One-line status (e.g. a move that does not exist)
    pub status: Option<String>,
    pub submit_message: String,
    pub start_time: DateTime<Utc>,
}

impl TuiState {
    pub fn new(controller: StepFlowController, submit_message: impl Into<String>) -> Self {
        Self {
            controller,
            focus: 0,
            notice: None,
            status: None,
            submit_message: submit_message.into(),
            start_time: Utc::now(),
        }
    }

    /// Fields on the current step
    pub fn fields(&self) -> &'static [FieldSpec] {
        fields_for_step(self.controller.current_step())
    }

    pub fn focused_field(&self) -> Option<&'static FieldSpec> {
        self.fields().get(self.focus)
    }

    // ===== IMMUTABLE BUILDER METHODS =====

    /// Return a new TuiState with focus moved (clamped to the step's fields)
    pub fn with_focus(mut self, focus: usize) -> Self {
        self.focus = focus.min(self.fields().len().saturating_sub(1));
        self
    }

    // ===== EVENT HANDLING =====

    /// Apply an action to the wizard
    pub fn apply(&mut self, action: WizardAction) -> Flow {
        if action != WizardAction::None {
            self.status = None;
        }

        match action {
            WizardAction::Quit => return Flow::Quit,
            WizardAction::None => {}
            WizardAction::Input(c) => self.input(c),
            WizardAction::Backspace => self.backspace(),
            WizardAction::NextField => self.move_focus(true),
            WizardAction::PrevField => self.move_focus(false),
            WizardAction::NextOption => self.cycle_option(true),
            WizardAction::PrevOption => self.cycle_option(false),
            WizardAction::Advance => {
                let result = self.controller.advance();
                self.after_transition(result);
            }
            WizardAction::Retreat => {
                let result = self.controller.retreat();
                self.after_transition(result);
            }
            WizardAction::Reset => {
                self.controller.reset();
                self.notice = None;
                self.focus = 0;
            }
        }

        Flow::Continue
    }

    fn after_transition(&mut self, result: TransitionResult) {
        match result {
            TransitionResult::Moved { .. } => self.focus = 0,
            TransitionResult::Blocked { errors } => {
                // Jump to the first failing field in display order
                if let Some(index) = self.fields().iter().position(|s| errors.contains(s.name)) {
                    self.focus = index;
                }
            }
            TransitionResult::Submitted { .. } => {
                self.focus = 0;
                self.notice = Some(self.submit_message.clone());
            }
            TransitionResult::Rejected { reason } => self.status = Some(reason),
        }
    }

    fn move_focus(&mut self, forward: bool) {
        let count = self.fields().len();
        if count == 0 {
            return;
        }
        self.focus = if forward {
            (self.focus + 1) % count
        } else {
            (self.focus + count - 1) % count
        };
    }

    fn input(&mut self, c: char) {
        let Some(spec) = self.focused_field() else {
            return;
        };

        if spec.is_select() {
            // Type-to-jump: next option starting with the typed letter
            let current = self.controller.state().value(spec.name);
            let start = spec.options.iter().position(|o| *o == current).map_or(0, |i| i + 1);
            let found = (0..spec.options.len())
                .map(|offset| spec.options[(start + offset) % spec.options.len()])
                .find(|o| o.chars().next().is_some_and(|f| f.eq_ignore_ascii_case(&c)));
            if let Some(option) = found {
                self.controller.update_field(spec.name, option);
            }
            return;
        }

        let mut value = self.controller.state().value(spec.name).to_string();
        value.push(c);
        self.controller.update_field(spec.name, value);
    }

    fn backspace(&mut self) {
        let Some(spec) = self.focused_field() else {
            return;
        };

        if spec.is_select() {
            self.controller.update_field(spec.name, "");
            return;
        }

        let mut value = self.controller.state().value(spec.name).to_string();
        if value.pop().is_some() {
            self.controller.update_field(spec.name, value);
        }
    }

    fn cycle_option(&mut self, forward: bool) {
        let Some(spec) = self.focused_field() else {
            return;
        };
        if spec.options.is_empty() {
            return;
        }

        let current = self.controller.state().value(spec.name);
        let next = cycle(spec.options, current, forward);
        self.controller.update_field(spec.name, next);
    }
}

/// Next or previous option; an unset or unknown value starts at either end
pub fn cycle(options: &[&'static str], current: &str, forward: bool) -> &'static str {
    let len = options.len();
    let index = match options.iter().position(|o| *o == current) {
        Some(i) if forward => (i + 1) % len,
        Some(i) => (i + len - 1) % len,
        None if forward => 0,
        None => len - 1,
    };
    options[index]
}
