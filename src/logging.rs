//! Logging initialization
//!
//! TUI mode: logs to `<logging.dir>/signup-wizard-{datetime}.log`
//! CLI mode: logs to stderr

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::errors::{Result, WizardError};
use crate::schemas::WizardConfig;

/// Result of logging initialization
pub struct LoggingHandle {
    /// Keeps the file writer alive; buffered lines are flushed on drop.
    pub _guard: Option<WorkerGuard>,

    /// Path to the log file (only set in TUI mode with file logging enabled)
    pub log_file_path: Option<PathBuf>,
}

impl LoggingHandle {
    /// Line pointing at the session log, once the file has content
    pub fn session_notice(&self) -> Option<String> {
        let path = self.log_file_path.as_ref()?;
        let metadata = std::fs::metadata(path).ok()?;
        if metadata.len() == 0 {
            return None;
        }
        Some(format!("Session log: {}", path.display()))
    }
}

/// Pick the filter directive: `--verbose` and `--quiet` beat the configured level.
pub fn resolve_level(configured: &str, verbose: bool, quiet: bool) -> String {
    if verbose {
        "debug".to_string()
    } else if quiet {
        "warn".to_string()
    } else {
        configured.to_string()
    }
}

/// File name for a TUI session log
pub fn log_file_name(now: chrono::DateTime<chrono::Utc>) -> String {
    format!("signup-wizard-{}.log", now.format("%Y%m%dT%H%M%SZ"))
}

fn build_filter(level: &str, explicit_flag: bool) -> EnvFilter {
    if explicit_flag {
        return EnvFilter::new(level);
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Initialize logging based on mode and configuration.
///
/// # Arguments
/// * `config` - Wizard configuration
/// * `root` - Working directory the log directory is resolved against
/// * `is_tui_mode` - Whether the terminal UI will own the screen
/// * `verbose` / `quiet` - Command-line verbosity flags
///
/// # Returns
/// A `LoggingHandle` that must be kept alive for the duration of the program.
pub fn init_logging(
    config: &WizardConfig,
    root: &Path,
    is_tui_mode: bool,
    verbose: bool,
    quiet: bool,
) -> Result<LoggingHandle> {
    let level = resolve_level(&config.logging.level, verbose, quiet);
    let filter = build_filter(&level, verbose || quiet);

    if is_tui_mode && config.logging.to_file {
        let logs_dir = config.logging.logs_path(root);
        std::fs::create_dir_all(&logs_dir)?;

        let log_filename = log_file_name(chrono::Utc::now());
        let log_file_path = logs_dir.join(&log_filename);

        let file_appender = tracing_appender::rolling::never(&logs_dir, &log_filename);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(non_blocking),
            )
            .try_init()
            .map_err(|e| WizardError::wrap(e, "Failed to initialize logging"))?;

        Ok(LoggingHandle {
            _guard: Some(guard),
            log_file_path: Some(log_file_path),
        })
    } else if is_tui_mode {
        // Nothing may write to the terminal while the UI owns it.
        Ok(LoggingHandle {
            _guard: None,
            log_file_path: None,
        })
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .map_err(|e| WizardError::wrap(e, "Failed to initialize logging"))?;

        Ok(LoggingHandle {
            _guard: None,
            log_file_path: None,
        })
    }
}
