/// User configuration
///
/// Stored as JSON in the user's config directory:
/// - Linux: ~/.config/art-prompt-lab/config.json
/// - macOS: ~/Library/Application Support/art-prompt-lab/config.json
/// - Windows: %APPDATA%\art-prompt-lab\config.json

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Environment variable that overrides the configured sample root
pub const SAMPLES_ENV: &str = "ART_PROMPT_LAB_SAMPLES";

const DEFAULT_SAMPLE_ROOT: &str = "Sample image";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Folder holding the base/positive/negative sample trees
    pub sample_root: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sample_root: PathBuf::from(DEFAULT_SAMPLE_ROOT),
        }
    }
}

impl Config {
    /// Load the config, falling back to defaults if it is missing or broken.
    /// `ART_PROMPT_LAB_SAMPLES` wins over the file.
    pub fn load() -> Self {
        let mut config = match Self::config_path() {
            Ok(path) if path.exists() => match fs::read_to_string(&path)
                .map_err(ConfigError::from)
                .and_then(|json| Self::from_json(&json).map_err(ConfigError::from))
            {
                Ok(config) => {
                    tracing::info!("📁 Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Ignoring config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Ok(_) => Self::default(),
            Err(e) => {
                tracing::warn!("Using default config: {}", e);
                Self::default()
            }
        };

        config.apply_env_override(std::env::var_os(SAMPLES_ENV).map(PathBuf::from));
        config
    }

    /// Write the config file, creating its directory if needed
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, self.to_json()?)?;
        Ok(path)
    }

    fn config_path() -> Result<PathBuf, ConfigError> {
        let mut path = dirs::config_dir()
            .or_else(dirs::home_dir)
            .ok_or(ConfigError::NoConfigDir)?;

        path.push("art-prompt-lab");
        path.push("config.json");
        Ok(path)
    }

    fn apply_env_override(&mut self, sample_root: Option<PathBuf>) {
        if let Some(root) = sample_root.filter(|r| !r.as_os_str().is_empty()) {
            tracing::debug!("Sample root overridden by {}: {}", SAMPLES_ENV, root.display());
            self.sample_root = root;
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.sample_root, PathBuf::from("Sample image"));
    }

    #[test]
    fn test_env_override() {
        let mut config = Config::from_json(r#"{"sample_root": "/data/samples"}"#).unwrap();
        assert_eq!(config.sample_root, PathBuf::from("/data/samples"));

        config.apply_env_override(Some(PathBuf::new()));
        assert_eq!(config.sample_root, PathBuf::from("/data/samples"));

        config.apply_env_override(Some(PathBuf::from("/mnt/other")));
        assert_eq!(config.sample_root, PathBuf::from("/mnt/other"));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(Config::from_json("{ sample_root").is_err());
    }
}
