//! Application state.
//!
//! `AppState` is the root of all state; `Settings` is the persisted slice
//! of it.

mod app_state;
mod settings;

pub use app_state::AppState;
pub use settings::{DisplaySettings, Settings, ThemeMode};
