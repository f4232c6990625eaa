//! CLI module for the signup wizard
//!
//! Provides the command-line interface using clap.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Signup wizard - collect personal and address details in three validated steps
#[derive(Parser, Debug)]
#[command(name = "signup-wizard")]
#[command(version)]
#[command(about = "A three-step signup wizard with per-step validation")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a JSON config file (default: ./signup-wizard.json if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the working directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,
}

impl Cli {
    /// Whether the selected command takes over the terminal
    pub fn is_tui_mode(&self) -> bool {
        matches!(self.command, None | Some(Commands::Run { .. }))
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive wizard (default)
    Run {
        /// View to open on (e.g. /signup/step2)
        #[arg(long)]
        route: Option<String>,

        /// Keep entered data across steps and review it on step 3
        #[arg(long)]
        carry_forward: bool,
    },

    /// List the addressable views
    Routes {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate field values for one step without the UI
    Validate {
        /// Route or step name (e.g. /signup/step1, step1, 1)
        route: String,

        /// Field assignment as name=value; repeatable
        #[arg(short, long = "field", value_name = "NAME=VALUE")]
        fields: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
