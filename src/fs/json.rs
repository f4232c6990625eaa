//! JSON file operations with schema validation

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::errors::{Result, WizardError};

/// Read and deserialize a JSON file.
///
/// # Errors
/// * `FileNotFound` - If the file does not exist
/// * `InvalidJson` - If the file is not valid JSON or does not match the schema
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            WizardError::FileNotFound(format!("File not found: {}", path.display()))
        } else {
            WizardError::Io(e)
        }
    })?;

    serde_json::from_str(&content).map_err(|e| {
        WizardError::InvalidJson(format!("Invalid JSON in file {}: {}", path.display(), e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::WizardConfig;
    use tempfile::TempDir;

    #[test]
    fn test_read_json_file_not_found() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nonexistent.json");

        let result: Result<WizardConfig> = read_json(&path);
        assert!(matches!(result.unwrap_err(), WizardError::FileNotFound(_)));
    }

    #[test]
    fn test_read_json_invalid_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("invalid.json");
        fs::write(&path, "not valid json {").unwrap();

        let result: Result<WizardConfig> = read_json(&path);
        assert!(matches!(result.unwrap_err(), WizardError::InvalidJson(_)));
    }

    #[test]
    fn test_read_json_schema_mismatch() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        fs::write(&path, r#"{"start_step": "step7"}"#).unwrap();

        let result: Result<WizardConfig> = read_json(&path);
        assert!(matches!(result.unwrap_err(), WizardError::InvalidJson(_)));
    }

    #[test]
    fn test_read_json_valid() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        fs::write(&path, r#"{"carry_forward": true}"#).unwrap();

        let config: WizardConfig = read_json(&path).unwrap();
        assert!(config.carry_forward);
    }
}
