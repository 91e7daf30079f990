//! Settings files and flag layering

use std::fs;
use std::path::Path;

use reflow_core::{Settings, SettingsOverrides};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{CliError, Result};

/// Table or object that holds the settings when a file carries other keys too.
pub const SETTINGS_NAMESPACE: &str = "reflowMarkdown";

/// Format-agnostic settings file loader.
///
/// Detects the format from the file extension:
/// - `.toml` -> TOML
/// - `.json` -> JSON
/// - `.yaml`, `.yml` -> YAML
#[derive(Debug, Default)]
pub struct ConfigStore;

impl ConfigStore {
    pub fn new() -> Self {
        Self
    }

    /// Load the settings layer stored in `path`.
    ///
    /// A top-level `reflowMarkdown` entry is used when present, otherwise
    /// the whole document. Unknown keys are ignored.
    pub fn load(&self, path: &Path) -> Result<SettingsOverrides> {
        let content = fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        let parse_error = |format: &str, message: String| CliError::ConfigParse {
            path: path.to_path_buf(),
            format: format.into(),
            message,
        };

        let (format, document): (&str, Value) = match extension.as_str() {
            "toml" => (
                "TOML",
                toml::from_str(&content).map_err(|e| parse_error("TOML", e.to_string()))?,
            ),
            "json" => (
                "JSON",
                serde_json::from_str(&content).map_err(|e| parse_error("JSON", e.to_string()))?,
            ),
            "yaml" | "yml" => (
                "YAML",
                serde_yaml::from_str(&content).map_err(|e| parse_error("YAML", e.to_string()))?,
            ),
            _ => return Err(CliError::UnsupportedFormat { extension }),
        };

        let section = document.get(SETTINGS_NAMESPACE).unwrap_or(&document);
        if section.is_null() {
            return Ok(SettingsOverrides::default());
        }
        let overrides = SettingsOverrides::deserialize(section)
            .map_err(|e| parse_error(format, e.to_string()))?;
        debug!(path = %path.display(), ?overrides, "loaded settings file");
        Ok(overrides)
    }
}

/// Defaults, then the config file if any, then command-line flags.
pub fn resolve_settings(config: Option<&Path>, flags: &SettingsOverrides) -> Result<Settings> {
    let file = match config {
        Some(path) => ConfigStore::new().load(path)?,
        None => SettingsOverrides::default(),
    };
    Ok(Settings::default().apply(&file.merge(flags)))
}
