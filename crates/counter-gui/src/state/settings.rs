//! Application settings - persisted user preferences.
//!
//! Settings are loaded from disk at startup and saved when changed. Only
//! preferences live here; the counter value resets on every launch.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::GuiError;

/// Application settings.
///
/// Serialized to TOML and stored in the user's config directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Display settings.
    pub display: DisplaySettings,
}

impl Settings {
    /// Load settings from the default path, falling back to defaults.
    pub fn load() -> Self {
        match Self::load_from(&Self::config_path()) {
            Ok(settings) => settings,
            Err(err) => {
                tracing::warn!("{err}; using defaults");
                Self::default()
            }
        }
    }

    /// Load settings from a specific path.
    ///
    /// A missing file is the normal first-run case and yields defaults;
    /// an unreadable or malformed file is an error.
    pub fn load_from(path: &Path) -> Result<Self, GuiError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(GuiError::settings_load)?;
        toml::from_str(&content).map_err(GuiError::settings_load)
    }

    /// Save settings to the default path.
    pub fn save(&self) -> Result<(), GuiError> {
        self.save_to(&Self::config_path())
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), GuiError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(GuiError::settings_save)?;
        }
        let content = toml::to_string_pretty(self).map_err(GuiError::settings_save)?;
        std::fs::write(path, content).map_err(GuiError::settings_save)
    }

    /// Get the default config file path.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "ClickCounter", "ClickCounter")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("settings.toml"))
    }
}

/// Display settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Window theme.
    pub theme_mode: ThemeMode,
}

/// Window theme selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light theme.
    #[default]
    Light,
    /// Dark theme.
    Dark,
}

impl ThemeMode {
    /// Get display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }

    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}
