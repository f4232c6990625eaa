//! TUI widget rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::domain::{MarkerStatus, StepIndicator};
use crate::schemas::{FieldSpec, WizardStep};
use crate::tui::state::TuiState;

/// Render the whole wizard screen
pub fn render_wizard(f: &mut Frame, state: &TuiState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_step_indicator(f, chunks[0], &state.controller.indicator());

    match state.controller.current_step() {
        WizardStep::Step1 | WizardStep::Step2 => render_form(f, chunks[1], state),
        WizardStep::Step3 => render_review(f, chunks[1], state),
        WizardStep::Done => render_done(f, chunks[1], state),
    }

    render_footer(f, chunks[2], state);
}

/// Render the progress header: numbered markers joined by connectors
pub fn render_step_indicator(f: &mut Frame, area: Rect, indicator: &StepIndicator) {
    let mut spans = Vec::new();
    for marker in &indicator.markers {
        let (label, style) = match marker.status {
            MarkerStatus::Completed => (
                " ✓ ".to_string(),
                Style::default().fg(Color::Black).bg(Color::Green),
            ),
            MarkerStatus::Current => (
                format!(" {} ", marker.number),
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            ),
            MarkerStatus::Upcoming => (
                format!(" {} ", marker.number),
                Style::default().fg(Color::DarkGray).bg(Color::Gray),
            ),
        };
        spans.push(Span::styled(label, style));

        if let Some(filled) = marker.connector_filled {
            let color = if filled { Color::Green } else { Color::DarkGray };
            spans.push(Span::styled(" ──── ", Style::default().fg(color)));
        }
    }

    let paragraph = Paragraph::new(Text::from(Line::from(spans)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(paragraph, area);
}

/// Render a form step: label, value and inline error for each field
pub fn render_form(f: &mut Frame, area: Rect, state: &TuiState) {
    let step = state.controller.current_step();
    let mut lines = vec![
        Line::from(Span::styled(
            step.description(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
    ];

    for (index, spec) in state.fields().iter().enumerate() {
        lines.extend(field_lines(state, spec, index == state.focus));
    }

    let paragraph = Paragraph::new(lines)
        .block(card(step))
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn field_lines(state: &TuiState, spec: &FieldSpec, focused: bool) -> Vec<Line<'static>> {
    let value = state.controller.state().value(spec.name);
    let error = state.controller.errors().get(spec.name);

    let mut label = vec![Span::styled(
        spec.label.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    if spec.required {
        label.push(Span::styled(" *", Style::default().fg(Color::Red)));
    }

    let marker = if focused { "▸ " } else { "  " };
    let border = if error.is_some() {
        Color::Red
    } else if focused {
        Color::Yellow
    } else {
        Color::DarkGray
    };

    let shown = if value.is_empty() {
        Span::styled(spec.placeholder.to_string(), Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(value.to_string())
    };

    let mut input = vec![Span::styled(marker, Style::default().fg(Color::Yellow))];
    if spec.is_select() {
        input.push(Span::styled("◂ ", Style::default().fg(border)));
        input.push(shown);
        input.push(Span::styled(" ▸", Style::default().fg(border)));
    } else {
        input.push(Span::styled("[ ", Style::default().fg(border)));
        input.push(shown);
        if focused {
            input.push(Span::styled("█", Style::default().fg(Color::Yellow)));
        }
        input.push(Span::styled(" ]", Style::default().fg(border)));
    }

    let mut lines = vec![Line::from(label), Line::from(input)];
    if let Some(message) = error {
        lines.push(Line::from(Span::styled(
            format!("  {}", message),
            Style::default().fg(Color::Red),
        )));
    }
    lines.push(Line::from(""));
    lines
}

/// Render the review step
pub fn render_review(f: &mut Frame, area: Rect, state: &TuiState) {
    let step = state.controller.current_step();
    let mut lines = vec![
        Line::from(Span::styled(
            step.description(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
    ];

    let entries = state.controller.review();
    if entries.is_empty() {
        lines.push(
            Line::from(Span::styled(
                "✓",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
        );
    } else {
        let width = entries.iter().map(|e| e.label.len()).max().unwrap_or(0);
        for entry in entries {
            let value = if entry.value.is_empty() {
                Span::styled("—", Style::default().fg(Color::DarkGray))
            } else {
                Span::raw(entry.value)
            };
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:<width$}  ", entry.label, width = width),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                value,
            ]));
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(card(step))
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

/// Render the acknowledgment after submission
pub fn render_done(f: &mut Frame, area: Rect, state: &TuiState) {
    let message = state
        .notice
        .clone()
        .unwrap_or_else(|| state.submit_message.clone());

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            message,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Press any key to start over, q to quit"),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(card(WizardStep::Done));
    f.render_widget(paragraph, area);
}

/// Render the footer: key help, route and runtime
pub fn render_footer(f: &mut Frame, area: Rect, state: &TuiState) {
    let step = state.controller.current_step();
    let keys = match step {
        WizardStep::Step1 => "[Enter] next  [Tab] field  [Ctrl-C] quit",
        WizardStep::Step2 => "[Enter] next  [Esc] back  [Tab] field  [←/→] choose  [Ctrl-C] quit",
        WizardStep::Step3 => "[Enter] submit  [Esc] back  [q] quit",
        WizardStep::Done => "[any key] restart  [q] quit",
    };

    let info = match state.status {
        Some(ref status) => status.clone(),
        None => format!("{} | Runtime: {}", step.route(), format_runtime(state.start_time)),
    };

    let width = area.width.saturating_sub(2) as usize;
    let lines = vec![
        Line::from(pad_to_width(keys, width)),
        Line::from(Span::styled(
            pad_to_width(&info, width),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::TOP));
    f.render_widget(paragraph, area);
}

// ===== HELPER FUNCTIONS =====

fn card(step: WizardStep) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" {} ", step.title()))
}

/// Pad string to width (truncate with ellipsis if too long)
pub fn pad_to_width(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len > width {
        let kept: String = text.chars().take(width.saturating_sub(1)).collect();
        format!("{}…", kept)
    } else {
        format!("{:<width$}", text, width = width)
    }
}

/// Format runtime duration
pub fn format_runtime(start_time: chrono::DateTime<chrono::Utc>) -> String {
    let now = chrono::Utc::now();
    let duration = now.signed_duration_since(start_time);

    let total_seconds = duration.num_seconds().max(0);
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}
