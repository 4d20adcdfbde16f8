use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProviderConfig {
    pub base_url: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        ProviderConfig {
            base_url: "https://api.privatbank.ua".to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub provider: ProviderConfig,
}

impl AppConfig {
    /// Loads the config file from the platform config directory, falling back
    /// to defaults when no file exists.
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path()?;
        if config_path.exists() {
            Self::load_from_path(&config_path)
        } else {
            debug!("No config file at {}, using defaults", config_path.display());
            Ok(Self::default())
        }
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("", "", "pbrates")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }
}
