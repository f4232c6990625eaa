//! Unit tests for TUI state management and rendering

use crate::domain::{ControllerOptions, StepFlowController};
use crate::schemas::WizardStep;
use crate::tui::events::WizardAction;
use crate::tui::state::{cycle, Flow, TuiState};
use crate::tui::widgets::{pad_to_width, render_wizard};
use ratatui::{backend::TestBackend, Terminal};

fn new_state(carry_forward: bool) -> TuiState {
    let controller = StepFlowController::new(ControllerOptions {
        carry_forward,
        ..Default::default()
    });
    TuiState::new(controller, "Form submitted successfully!")
}

fn type_text(state: &mut TuiState, text: &str) {
    for c in text.chars() {
        state.apply(WizardAction::Input(c));
    }
}

fn fill_step1(state: &mut TuiState) {
    type_text(state, "Ada Lovelace");
    state.apply(WizardAction::NextField);
    type_text(state, "ada@example.com");
    state.apply(WizardAction::NextField);
    type_text(state, "555-0100");
}

fn fill_step2(state: &mut TuiState) {
    type_text(state, "12 Analytical Way");
    state.apply(WizardAction::NextField);
    type_text(state, "Albany");
    state.apply(WizardAction::NextField);
    type_text(state, "n");
    state.apply(WizardAction::NextField);
    type_text(state, "12207");
}

fn render(state: &TuiState) -> String {
    let backend = TestBackend::new(100, 40);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| render_wizard(f, state)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn test_typing_updates_focused_field() {
    let mut state = new_state(false);
    type_text(&mut state, "Ada");
    assert_eq!(state.controller.state().value("fullName"), "Ada");

    state.apply(WizardAction::Backspace);
    assert_eq!(state.controller.state().value("fullName"), "Ad");
}

#[test]
fn test_focus_wraps() {
    let mut state = new_state(false);
    state.apply(WizardAction::PrevField);
    assert_eq!(state.focused_field().unwrap().name, "phone");
    state.apply(WizardAction::NextField);
    assert_eq!(state.focused_field().unwrap().name, "fullName");
}

#[test]
fn test_with_focus_clamps() {
    let state = new_state(false).with_focus(99);
    assert_eq!(state.focus, 2);
}

#[test]
fn test_blocked_advance_focuses_first_failing_field() {
    let mut state = new_state(false);
    type_text(&mut state, "Ada");
    state.apply(WizardAction::NextField);
    state.apply(WizardAction::NextField);

    state.apply(WizardAction::Advance);
    assert_eq!(state.controller.current_step(), WizardStep::Step1);
    assert_eq!(state.focused_field().unwrap().name, "email");
    assert!(state.controller.errors().contains("phone"));
}

#[test]
fn test_full_flow_reaches_done_and_resets() {
    let mut state = new_state(false);
    fill_step1(&mut state);
    state.apply(WizardAction::Advance);
    assert_eq!(state.controller.current_step(), WizardStep::Step2);
    assert_eq!(state.focus, 0);

    fill_step2(&mut state);
    state.apply(WizardAction::Advance);
    assert_eq!(state.controller.current_step(), WizardStep::Step3);

    state.apply(WizardAction::Advance);
    assert_eq!(state.controller.current_step(), WizardStep::Done);
    assert_eq!(state.notice.as_deref(), Some("Form submitted successfully!"));

    assert_eq!(state.apply(WizardAction::Reset), Flow::Continue);
    assert_eq!(state.controller.current_step(), WizardStep::Step1);
    assert!(state.notice.is_none());
}

#[test]
fn test_quit() {
    let mut state = new_state(false);
    assert_eq!(state.apply(WizardAction::Quit), Flow::Quit);
}

#[test]
fn test_retreat_from_step1_sets_status() {
    let mut state = new_state(false);
    state.apply(WizardAction::Retreat);
    assert!(state.status.as_deref().unwrap().contains("Cannot go back"));

    state.apply(WizardAction::Input('A'));
    assert!(state.status.is_none());
}

#[test]
fn test_select_cycling_and_type_to_jump() {
    let controller = StepFlowController::starting_at(WizardStep::Step2, ControllerOptions::default());
    let mut state = TuiState::new(controller, "done").with_focus(2);
    assert_eq!(state.focused_field().unwrap().name, "state");

    state.apply(WizardAction::NextOption);
    assert_eq!(state.controller.state().value("state"), "Alabama");
    state.apply(WizardAction::PrevOption);
    assert_eq!(state.controller.state().value("state"), "Wyoming");

    state.apply(WizardAction::Input('n'));
    assert_eq!(state.controller.state().value("state"), "Nebraska");
    state.apply(WizardAction::Input('n'));
    assert_eq!(state.controller.state().value("state"), "Nevada");

    state.apply(WizardAction::Backspace);
    assert_eq!(state.controller.state().value("state"), "");
}

#[test]
fn test_cycle_helper() {
    let options = &["a", "b", "c"];
    assert_eq!(cycle(options, "", true), "a");
    assert_eq!(cycle(options, "", false), "c");
    assert_eq!(cycle(options, "c", true), "a");
    assert_eq!(cycle(options, "a", false), "c");
    assert_eq!(cycle(options, "b", true), "c");
}

#[test]
fn test_render_inline_errors() {
    let mut state = new_state(false);
    state.apply(WizardAction::Advance);

    let screen = render(&state);
    assert!(screen.contains("Personal Information"));
    assert!(screen.contains("Please enter your full name"));
    assert!(screen.contains("Please enter a valid email address"));
    assert!(screen.contains("/signup/step1"));
}

#[test]
fn test_render_review_with_carry_forward() {
    let mut state = new_state(true);
    fill_step1(&mut state);
    state.apply(WizardAction::Advance);
    fill_step2(&mut state);
    state.apply(WizardAction::Advance);

    let screen = render(&state);
    assert!(screen.contains("Review & Confirm"));
    assert!(screen.contains("Ada Lovelace"));
    assert!(screen.contains("Nebraska"));
}

#[test]
fn test_render_done() {
    let controller = StepFlowController::starting_at(WizardStep::Step3, ControllerOptions::default());
    let mut state = TuiState::new(controller, "Form submitted successfully!");
    state.apply(WizardAction::Advance);

    let screen = render(&state);
    assert!(screen.contains("Form submitted successfully!"));
    assert!(screen.contains("start over"));
}

#[test]
fn test_pad_to_width() {
    assert_eq!(pad_to_width("abc", 5), "abc  ");
    assert_eq!(pad_to_width("abcdef", 4), "abc…");
    assert_eq!(pad_to_width("ééééé", 3), "éé…");
}
