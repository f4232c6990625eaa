//! TUI runner - manages terminal lifecycle and the event loop

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::event::{self, Event};
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::DisableMouseCapture,
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use tracing::info;

use crate::errors::Result;
use crate::tui::events::map_key;
use crate::tui::state::{Flow, TuiState};
use crate::tui::widgets::render_wizard;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Main TUI runner
pub struct TuiRunner {
    state: TuiState,
}

impl TuiRunner {
    pub fn new(state: TuiState) -> Self {
        Self { state }
    }

    /// Run the TUI until the user quits (blocking call)
    pub fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, DisableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.run_tui_loop(&mut terminal);

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    fn run_tui_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        info!(step = %self.state.controller.current_step(), "Wizard started");

        loop {
            terminal.draw(|f| render_wizard(f, &self.state))?;

            if !event::poll(POLL_INTERVAL)? {
                // Redraw for the runtime clock
                continue;
            }

            match event::read()? {
                Event::Key(key) => {
                    let action = map_key(
                        key,
                        self.state.controller.current_step(),
                        self.state.focused_field(),
                    );
                    if self.state.apply(action) == Flow::Quit {
                        info!(step = %self.state.controller.current_step(), "Wizard closed");
                        return Ok(());
                    }
                }
                Event::Resize(_, _) => {
                    // Force redraw
                }
                _ => {}
            }
        }
    }
}
