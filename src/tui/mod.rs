//! Terminal User Interface (TUI) module
//!
//! Renders the wizard steps and feeds key presses to the step controller.

pub mod events;
pub mod runner;
pub mod state;
pub mod widgets;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use events::{map_key, WizardAction};
pub use runner::TuiRunner;
pub use state::{Flow, TuiState};
