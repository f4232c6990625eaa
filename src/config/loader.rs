//! Configuration loading with defaults

use std::path::Path;

use tracing::debug;

use crate::errors::{Result, WizardError};
use crate::fs;
use crate::schemas::{WizardConfig, WizardStep, SCHEMA_VERSION};

/// Command-line values that take precedence over the config file
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub carry_forward: bool,
    pub start_step: Option<WizardStep>,
}

impl ConfigOverrides {
    /// Apply the overrides to a loaded configuration
    pub fn apply(&self, mut config: WizardConfig) -> WizardConfig {
        if self.carry_forward {
            config.carry_forward = true;
        }
        if let Some(step) = self.start_step {
            config.start_step = step;
        }
        config
    }
}

/// Load configuration, falling back to defaults.
///
/// With an explicit path the file must exist. Without one, the default
/// `signup-wizard.json` in `root` is read when present.
///
/// # Arguments
/// * `root` - Working directory
/// * `explicit` - Path passed with `--config`, relative to `root` if not absolute
///
/// # Returns
/// The resolved configuration, or `ConfigError` for an unsupported
/// `schema_version`
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<WizardConfig> {
    let path = match explicit {
        Some(path) => fs::resolve_config_path(root, path),
        None => {
            let path = fs::get_config_path(root);
            if !path.exists() {
                debug!(path = %path.display(), "No config file, using defaults");
                return Ok(WizardConfig::default());
            }
            path
        }
    };

    debug!(path = %path.display(), "Loading config");
    let config: WizardConfig = fs::read_json(&path)?;

    if config.schema_version != SCHEMA_VERSION {
        return Err(WizardError::ConfigError(format!(
            "{}: unsupported schema_version {} (expected {})",
            path.display(),
            config.schema_version,
            SCHEMA_VERSION
        )));
    }

    Ok(config)
}
