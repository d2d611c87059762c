//! Counter widget message handler.
//!
//! Routes button clicks into the widget's transition functions. Every
//! click replaces the state record with the one the transition returns;
//! the view re-renders from it afterwards.

use iced::Task;

use super::MessageHandler;
use crate::message::{CounterMessage, Message};
use crate::state::AppState;

/// Handler for counter widget messages.
pub struct CounterHandler;

impl MessageHandler<CounterMessage> for CounterHandler {
    fn handle(&self, state: &mut AppState, msg: CounterMessage) -> Task<Message> {
        match msg {
            CounterMessage::IncrementPressed => {
                state.counter = state.counter.increment();
            }
            CounterMessage::DecrementPressed => {
                if state.counter.count() == 0 {
                    // Not a fault: the rejection surfaces as the error line.
                    tracing::debug!("decrement rejected at zero");
                }
                state.counter = state.counter.decrement();
            }
        }
        Task::none()
    }
}
