//! Config schema - Configuration for the signup wizard

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::WizardStep;

/// Config schema version this build reads
pub const SCHEMA_VERSION: u32 = 1;

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset (e.g. "info")
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Write logs to a file while the terminal UI is active
    #[serde(default = "default_true")]
    pub to_file: bool,

    /// Directory for log files, relative to the working directory
    #[serde(default = "default_log_dir")]
    pub dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: default_log_level(),
            to_file: true,
            dir: default_log_dir(),
        }
    }
}

impl LoggingConfig {
    /// Resolve the log directory against the working directory
    pub fn logs_path(&self, root: &Path) -> PathBuf {
        let dir = Path::new(&self.dir);
        if dir.is_absolute() {
            dir.to_path_buf()
        } else {
            root.join(dir)
        }
    }
}

/// Main configuration for the wizard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WizardConfig {
    /// Schema version for forward compatibility
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Keep each step's values when navigating away so step 3 can review them
    #[serde(default)]
    pub carry_forward: bool,

    /// View the wizard opens on
    #[serde(default = "default_start_step")]
    pub start_step: WizardStep,

    /// Acknowledgment shown after a successful submit
    #[serde(default = "default_submit_message")]
    pub submit_message: String,

    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

fn default_start_step() -> WizardStep {
    WizardStep::Step1
}

fn default_submit_message() -> String {
    "Form submitted successfully!".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_dir() -> String {
    ".signup-wizard/logs".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for WizardConfig {
    fn default() -> Self {
        WizardConfig {
            schema_version: 1,
            carry_forward: false,
            start_step: WizardStep::Step1,
            submit_message: default_submit_message(),
            logging: LoggingConfig::default(),
        }
    }
}
