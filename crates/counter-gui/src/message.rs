//! Message types for the Elm-style architecture.
//!
//! All user interactions flow through these types; the `update` function
//! processes them to modify application state.

use counter_model::Action;

/// Counter widget messages.
///
/// One variant per click target in the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterMessage {
    /// Increment button clicked.
    IncrementPressed,
    /// Decrement button clicked.
    DecrementPressed,
}

impl CounterMessage {
    /// The widget action this message routes to.
    pub fn action(self) -> Action {
        match self {
            CounterMessage::IncrementPressed => Action::Increment,
            CounterMessage::DecrementPressed => Action::Decrement,
        }
    }

    /// The message a click dispatching this action produces.
    pub fn for_action(action: Action) -> Self {
        match action {
            Action::Increment => CounterMessage::IncrementPressed,
            Action::Decrement => CounterMessage::DecrementPressed,
        }
    }
}

/// Settings messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsMessage {
    /// Theme toggle clicked.
    ThemeToggled,
}

/// Root message enum for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Counter widget messages.
    Counter(CounterMessage),

    /// Settings messages.
    Settings(SettingsMessage),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_round_trip() {
        for msg in [
            CounterMessage::IncrementPressed,
            CounterMessage::DecrementPressed,
        ] {
            assert_eq!(CounterMessage::for_action(msg.action()), msg);
        }
    }
}
