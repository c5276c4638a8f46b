use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use thiserror::Error;

use crate::models::settings::Settings;

const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings TOML in {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize settings")]
    Serialize(#[from] toml::ser::Error),

    #[error("failed to write settings file {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings in {path}: {reason}")]
    Invalid { path: PathBuf, reason: String },
}

/// Loads and stores [`Settings`] as TOML.
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service backed by the platform config directory, or the working
    /// directory when none can be determined.
    pub fn from_project_dirs() -> Self {
        Self::new(resolve_config_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the current settings. A missing file yields the defaults.
    pub fn get(&self) -> Result<Settings, SettingsError> {
        if !self.path.exists() {
            return Ok(Settings::default());
        }

        let data = fs::read_to_string(&self.path).map_err(|source| SettingsError::Read {
            path: self.path.clone(),
            source,
        })?;
        let settings: Settings = toml::from_str(&data).map_err(|source| SettingsError::Parse {
            path: self.path.clone(),
            source,
        })?;
        settings
            .validate()
            .map_err(|reason| SettingsError::Invalid {
                path: self.path.clone(),
                reason,
            })?;

        Ok(settings)
    }

    /// Update settings
    pub fn update(&self, settings: &Settings) -> Result<(), SettingsError> {
        settings
            .validate()
            .map_err(|reason| SettingsError::Invalid {
                path: self.path.clone(),
                reason,
            })?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| SettingsError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let data = toml::to_string_pretty(settings)?;
        fs::write(&self.path, data).map_err(|source| SettingsError::Write {
            path: self.path.clone(),
            source,
        })?;
        Ok(())
    }

    /// Loads settings, writing the defaults out on first run. Errors never
    /// stop the app; they fall back to defaults with a warning.
    pub fn load_or_default(&self) -> Settings {
        if !self.path.exists() {
            let defaults = Settings::default();
            match self.update(&defaults) {
                Ok(()) => log::info!("Wrote default settings to {}", self.path.display()),
                Err(e) => log::warn!("Failed to write default settings: {}", e),
            }
            return defaults;
        }

        match self.get() {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Failed to load settings: {}, using defaults", e);
                Settings::default()
            }
        }
    }

    /// Reset settings to defaults
    pub fn reset(&self) -> Result<(), SettingsError> {
        self.update(&Settings::default())
    }
}

fn resolve_config_path() -> PathBuf {
    if let Some(dirs) = ProjectDirs::from("com", "EggTimer", "EggTimer") {
        dirs.config_dir().join(CONFIG_FILE_NAME)
    } else {
        log::warn!("Unable to resolve project directory; using current dir for settings");
        PathBuf::from(CONFIG_FILE_NAME)
    }
}
