//! Main application module.
//!
//! Implements the Iced 0.14.0 application using the builder pattern. The
//! architecture follows the Elm pattern: State → Message → Update → View.
//!
//! All state changes happen in `update()`; views are pure functions.

use iced::{Element, Task, Theme};

use crate::handler::{CounterHandler, MessageHandler, SettingsHandler};
use crate::message::Message;
use crate::state::{AppState, Settings, ThemeMode};
use crate::view::view_app;

/// Main application struct.
///
/// The root of the Iced application; holds the application state and
/// implements the Elm architecture methods.
pub struct App {
    /// All application state.
    pub state: AppState,
}

impl App {
    /// Create a new application instance.
    ///
    /// Called once at startup. Returns the initial state and any startup
    /// tasks.
    pub fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();
        let app = Self {
            state: AppState::with_settings(settings),
        };
        (app, Task::none())
    }

    /// Update application state in response to a message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Counter(msg) => CounterHandler.handle(&mut self.state, msg),
            Message::Settings(msg) => SettingsHandler.handle(&mut self.state, msg),
        }
    }

    /// Render the view.
    pub fn view(&self) -> Element<'_, Message> {
        view_app(&self.state)
    }

    /// Window title.
    pub fn title(&self) -> String {
        "Click Counter".to_string()
    }

    /// Window theme.
    pub fn theme(&self) -> Theme {
        match self.state.settings.display.theme_mode {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
        }
    }
}
