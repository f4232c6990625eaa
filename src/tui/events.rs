//! Keyboard input mapped to wizard actions

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::schemas::{FieldSpec, WizardStep};

/// What a key press asks the wizard to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardAction {
    /// Type a character into the focused field
    Input(char),
    Backspace,
    NextField,
    PrevField,
    /// Cycle the focused select forward
    NextOption,
    /// Cycle the focused select backward
    PrevOption,
    /// Next / Submit
    Advance,
    /// Back
    Retreat,
    /// Start over after submission
    Reset,
    Quit,
    None,
}

/// Translate a key event into an action.
///
/// Pure: depends only on the key, the current step and the focused field, so
/// it can be tested without a terminal.
pub fn map_key(key: KeyEvent, step: WizardStep, focused: Option<&FieldSpec>) -> WizardAction {
    if key.kind != KeyEventKind::Press {
        return WizardAction::None;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return WizardAction::Quit;
    }

    if step == WizardStep::Done {
        return match key.code {
            KeyCode::Char('q') | KeyCode::Esc => WizardAction::Quit,
            _ => WizardAction::Reset,
        };
    }

    match key.code {
        KeyCode::Enter => WizardAction::Advance,
        KeyCode::Esc => WizardAction::Retreat,
        KeyCode::Tab | KeyCode::Down => WizardAction::NextField,
        KeyCode::BackTab | KeyCode::Up => WizardAction::PrevField,
        KeyCode::Right if focused.is_some_and(FieldSpec::is_select) => WizardAction::NextOption,
        KeyCode::Left if focused.is_some_and(FieldSpec::is_select) => WizardAction::PrevOption,
        KeyCode::Backspace if focused.is_some() => WizardAction::Backspace,
        KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => WizardAction::None,
        KeyCode::Char(c) => match focused {
            Some(_) => WizardAction::Input(c),
            None if c == 'q' => WizardAction::Quit,
            None => WizardAction::None,
        },
        _ => WizardAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::find_field;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_into_focused_field() {
        let field = find_field(WizardStep::Step1, "fullName");
        assert_eq!(
            map_key(press(KeyCode::Char('q')), WizardStep::Step1, field),
            WizardAction::Input('q')
        );
    }

    #[test]
    fn test_navigation_keys() {
        let field = find_field(WizardStep::Step1, "email");
        assert_eq!(map_key(press(KeyCode::Enter), WizardStep::Step1, field), WizardAction::Advance);
        assert_eq!(map_key(press(KeyCode::Esc), WizardStep::Step2, field), WizardAction::Retreat);
        assert_eq!(map_key(press(KeyCode::Tab), WizardStep::Step1, field), WizardAction::NextField);
        assert_eq!(map_key(press(KeyCode::BackTab), WizardStep::Step1, field), WizardAction::PrevField);
    }

    #[test]
    fn test_arrows_cycle_select_only() {
        let select = find_field(WizardStep::Step2, "state");
        let text = find_field(WizardStep::Step2, "city");
        assert_eq!(map_key(press(KeyCode::Right), WizardStep::Step2, select), WizardAction::NextOption);
        assert_eq!(map_key(press(KeyCode::Left), WizardStep::Step2, select), WizardAction::PrevOption);
        assert_eq!(map_key(press(KeyCode::Right), WizardStep::Step2, text), WizardAction::None);
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let field = find_field(WizardStep::Step1, "phone");
        assert_eq!(map_key(key, WizardStep::Step1, field), WizardAction::Quit);
        assert_eq!(map_key(key, WizardStep::Done, None), WizardAction::Quit);
    }

    #[test]
    fn test_review_step_without_fields() {
        assert_eq!(map_key(press(KeyCode::Char('q')), WizardStep::Step3, None), WizardAction::Quit);
        assert_eq!(map_key(press(KeyCode::Char('x')), WizardStep::Step3, None), WizardAction::None);
        assert_eq!(map_key(press(KeyCode::Enter), WizardStep::Step3, None), WizardAction::Advance);
        assert_eq!(map_key(press(KeyCode::Backspace), WizardStep::Step3, None), WizardAction::None);
    }

    #[test]
    fn test_done_screen() {
        assert_eq!(map_key(press(KeyCode::Char('q')), WizardStep::Done, None), WizardAction::Quit);
        assert_eq!(map_key(press(KeyCode::Enter), WizardStep::Done, None), WizardAction::Reset);
        assert_eq!(map_key(press(KeyCode::Char('x')), WizardStep::Done, None), WizardAction::Reset);
    }

    #[test]
    fn test_release_events_ignored() {
        let mut key = press(KeyCode::Enter);
        key.kind = KeyEventKind::Release;
        assert_eq!(map_key(key, WizardStep::Step1, None), WizardAction::None);
    }
}
