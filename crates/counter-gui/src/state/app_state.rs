//! Application-level state.

use counter_model::Counter;

use super::settings::Settings;

/// Top-level application state.
///
/// Holds the counter widget record and the persisted settings. The widget
/// record is replaced wholesale on every transition; it is created fresh
/// at startup and never persisted.
pub struct AppState {
    /// Current counter widget state.
    pub counter: Counter,
    /// Application settings (persisted).
    pub settings: Settings,
}

impl AppState {
    /// Create app state with loaded settings.
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            counter: Counter::new(),
            settings,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}
