use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::AppConfig;

const CONFIG_FILE_NAME: &str = "config.toml";

/// Reads and writes the TOML configuration file.
pub struct SettingsService;

impl SettingsService {
    /// Default location of the configuration file in the user's config dir.
    pub fn default_config_path() -> Option<PathBuf> {
        ProjectDirs::from("br", "RLM", "rlm-schedule")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Load the configuration, falling back to defaults when the file is absent.
    pub fn load(path: &Path) -> Result<AppConfig> {
        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Ok(AppConfig::default());
        }

        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read config from {}", path.display()))?;
        let config: AppConfig = toml::from_str(&data)
            .with_context(|| format!("failed to parse config from {}", path.display()))?;
        config
            .report
            .validate()
            .map_err(|e| anyhow!("Invalid settings in {}: {}", path.display(), e))?;

        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load from [`default_config_path`](Self::default_config_path), or defaults.
    pub fn load_default() -> AppConfig {
        let Some(path) = Self::default_config_path() else {
            log::warn!("Could not resolve a config directory, using defaults");
            return AppConfig::default();
        };
        match Self::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Failed to load config: {:#}, using defaults", e);
                AppConfig::default()
            }
        }
    }

    pub fn save(path: &Path, config: &AppConfig) -> Result<()> {
        config
            .report
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }

        let data = toml::to_string_pretty(config).context("failed to serialize config")?;
        fs::write(path, data)
            .with_context(|| format!("failed to write config to {}", path.display()))?;
        Ok(())
    }
}
