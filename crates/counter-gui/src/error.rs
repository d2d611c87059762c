//! GUI-specific error types.
//!
//! The widget domain itself has no faults: the "cannot go below 0" rule is
//! part of the render contract, not an error path. These variants cover
//! the shell's ambient operations around the widget.

use thiserror::Error;

/// Errors from the application shell.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GuiError {
    /// Failed to load settings.
    #[error("Failed to load settings: {reason}")]
    SettingsLoad {
        /// Description of what went wrong.
        reason: String,
    },

    /// Failed to save settings.
    #[error("Failed to save settings: {reason}")]
    SettingsSave {
        /// Description of what went wrong.
        reason: String,
    },
}

impl GuiError {
    /// Create a settings load error from any error source.
    pub fn settings_load(err: impl std::fmt::Display) -> Self {
        Self::SettingsLoad {
            reason: err.to_string(),
        }
    }

    /// Create a settings save error from any error source.
    pub fn settings_save(err: impl std::fmt::Display) -> Self {
        Self::SettingsSave {
            reason: err.to_string(),
        }
    }
}
