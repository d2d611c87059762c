//! Settings message handler.

use iced::Task;

use super::MessageHandler;
use crate::message::{Message, SettingsMessage};
use crate::state::AppState;

/// Handler for settings messages.
pub struct SettingsHandler;

impl MessageHandler<SettingsMessage> for SettingsHandler {
    fn handle(&self, state: &mut AppState, msg: SettingsMessage) -> Task<Message> {
        match msg {
            SettingsMessage::ThemeToggled => {
                state.settings.display.theme_mode = state.settings.display.theme_mode.toggled();
                if let Err(err) = state.settings.save() {
                    tracing::error!("{err}");
                }
                Task::none()
            }
        }
    }
}
