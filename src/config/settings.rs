use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, VezorError};

/// Project-level configuration, loaded from `.vezor.toml`.
///
/// Every field is optional so Vezor works without any config file at all;
/// unset fields fall through to the environment and then to defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Base URL of the Vezor API (e.g. "https://api.vezor.io").
    #[serde(default)]
    pub api_url: Option<String>,

    /// API key used as the bearer token.
    #[serde(default)]
    pub api_key: Option<String>,
}

impl Settings {
    /// Name of the config file we look for in the project root.
    pub const FILE_NAME: &'static str = ".vezor.toml";

    /// Load settings from `<project_dir>/.vezor.toml`.
    ///
    /// If the file does not exist, empty settings are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let config_path = project_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Load settings from an explicitly named file, which must exist.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(config_path).map_err(|e| {
            VezorError::Config(format!("Failed to read {}: {e}", config_path.display()))
        })?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            VezorError::Config(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        Ok(settings)
    }
}

// ── Tests ────────────────────────────────────────────────────────────
