//! Load and save stardrift settings.
//!
//! Settings live in a flat TOML table, one key per tunable, in the platform
//! config directory (`~/.config/stardrift/config.toml` on Linux). Loading is
//! best effort: a missing or unreadable file yields defaults, and every key
//! that is absent, mistyped or out of range falls back (or is clamped)
//! independently of the others.

mod document;
mod error;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use stardrift_core::Settings;

pub use document::{parse_settings, render_settings};
pub use error::ConfigError;

/// File name inside the config directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Platform directories for the application, if a home directory exists.
pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "stardrift")
}

/// A settings file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the platform default location.
    pub fn default_location() -> Result<Self, ConfigError> {
        let dirs = project_dirs().ok_or(ConfigError::NoConfigDir)?;
        Ok(Self::new(dirs.config_dir().join(CONFIG_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read settings, falling back to defaults for anything unusable.
    pub fn load(&self) -> Settings {
        match fs::read_to_string(&self.path) {
            Ok(text) => {
                log::info!("loading settings from {}", self.path.display());
                parse_settings(&text)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("no settings at {}, using defaults", self.path.display());
                Settings::default()
            }
            Err(e) => {
                log::warn!("cannot read {}: {e}; using defaults", self.path.display());
                Settings::default()
            }
        }
    }

    /// Write every setting, creating parent directories as needed.
    pub fn save(&self, settings: &Settings) -> Result<(), ConfigError> {
        let text = render_settings(settings)?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, text)?;
        log::info!("saved settings to {}", self.path.display());
        Ok(())
    }
}
