//! Message handler architecture.
//!
//! Each handler implements [`MessageHandler`] for one message type, and the
//! main `App::update()` dispatches to it:
//!
//! ```ignore
//! pub fn update(&mut self, message: Message) -> Task<Message> {
//!     match message {
//!         Message::Counter(msg) => CounterHandler.handle(&mut self.state, msg),
//!         Message::Settings(msg) => SettingsHandler.handle(&mut self.state, msg),
//!     }
//! }
//! ```
//!
//! Keeping handlers off the `App` struct lets them be tested against a
//! bare `AppState`.

mod counter;
mod settings;

use iced::Task;

use crate::message::Message;
use crate::state::AppState;

pub use counter::CounterHandler;
pub use settings::SettingsHandler;

/// Trait for handling messages in the Iced architecture.
pub trait MessageHandler<M> {
    /// Handle a message, potentially mutating state and returning a
    /// follow-up task, or `Task::none()` if complete.
    fn handle(&self, state: &mut AppState, msg: M) -> Task<Message>;
}
