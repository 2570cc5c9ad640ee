//! Settings Manager
//!
//! Resolves the platform configuration directory and loads/saves the client
//! settings file there.

use crate::config::ClientSettings;
use crate::error::{ConfigError, SettingsError, SettingsResult};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const CONFIG_DIR_NAME: &str = "jamlink";
const CONFIG_FILE_NAME: &str = "settings.toml";

/// Locates and manages the settings file on disk
pub struct SettingsManager;

impl SettingsManager {
    /// Platform-specific configuration directory for jamlink
    pub fn config_dir() -> SettingsResult<PathBuf> {
        let base = dirs::config_dir().ok_or_else(|| {
            ConfigError::UnsupportedPlatform(std::env::consts::OS.to_string())
        })?;
        Ok(base.join(CONFIG_DIR_NAME))
    }

    /// Full path of the settings file
    pub fn config_file_path() -> SettingsResult<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Create the configuration directory if it does not exist
    pub fn ensure_config_dir() -> SettingsResult<PathBuf> {
        let dir = Self::config_dir()?;
        std::fs::create_dir_all(&dir)
            .map_err(|e| SettingsError::ConfigDirectory(format!("{}: {}", dir.display(), e)))?;
        Ok(dir)
    }

    /// Load settings from `path`, falling back to defaults when the file does
    /// not exist yet
    pub fn load_or_default(path: &Path) -> SettingsResult<ClientSettings> {
        if !path.exists() {
            info!("No settings file at {}, using defaults", path.display());
            return Ok(ClientSettings::default());
        }

        let settings = ClientSettings::load_from_file(path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;
        debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings to `path`, creating parent directories as needed
    pub fn save(settings: &ClientSettings, path: &Path) -> SettingsResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                SettingsError::ConfigDirectory(format!("{}: {}", parent.display(), e))
            })?;
        }
        settings.save_to_file(path)?;
        info!("Saved settings to {}", path.display());
        Ok(())
    }
}
