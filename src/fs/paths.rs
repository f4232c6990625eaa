//! Path resolution utilities

use std::path::{Path, PathBuf};

/// File name of the wizard configuration in the working directory
pub const CONFIG_FILE_NAME: &str = "signup-wizard.json";

/// Resolve the current working directory, optionally using an override.
///
/// # Arguments
/// * `cwd_option` - Optional override for the working directory
///
/// # Returns
/// The resolved working directory path
pub fn resolve_cwd(cwd_option: Option<&Path>) -> PathBuf {
    match cwd_option {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}

/// Get the path to the default config file.
pub fn get_config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE_NAME)
}

/// Resolve an explicit config path against the working directory.
pub fn resolve_config_path(root: &Path, explicit: &Path) -> PathBuf {
    if explicit.is_absolute() {
        explicit.to_path_buf()
    } else {
        root.join(explicit)
    }
}
