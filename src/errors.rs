//! Error types for the signup wizard
//!
//! Validation failures are not errors; they travel as `ValidationErrors`
//! mappings. This type covers configuration, arguments and terminal I/O.

use thiserror::Error;

/// Result type alias for wizard operations
pub type Result<T> = std::result::Result<T, WizardError>;

/// Main error type for all wizard operations
#[derive(Debug, Error)]
pub enum WizardError {
    /// Invalid JSON format
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Route or step name that does not exist
    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    /// Field name not present on the requested step
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// Malformed command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Operation was interrupted (e.g., by SIGINT)
    #[error("Operation interrupted")]
    Interrupted,

    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error with context
    #[error("{context}: {message}")]
    Wrapped { context: String, message: String },
}

impl WizardError {
    /// Get the error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            WizardError::InvalidJson(_) => "INVALID_JSON",
            WizardError::FileNotFound(_) => "FILE_NOT_FOUND",
            WizardError::ConfigError(_) => "CONFIG_ERROR",
            WizardError::UnknownRoute(_) => "UNKNOWN_ROUTE",
            WizardError::UnknownField(_) => "UNKNOWN_FIELD",
            WizardError::InvalidArgument(_) => "INVALID_ARGUMENT",
            WizardError::Interrupted => "INTERRUPTED",
            WizardError::Io(_) => "IO_ERROR",
            WizardError::Wrapped { .. } => "WRAPPED_ERROR",
        }
    }

    /// Wrap an error with additional context
    pub fn wrap<E: std::fmt::Display>(error: E, context: impl Into<String>) -> Self {
        WizardError::Wrapped {
            context: context.into(),
            message: error.to_string(),
        }
    }
}

/// Convert an error to an appropriate exit code
pub fn to_exit_code(error: &WizardError) -> i32 {
    match error {
        WizardError::Interrupted => 130, // Standard Unix exit code for SIGINT
        _ => 1,
    }
}
