//! Click Counter - Desktop Application
//!
//! A single-widget desktop application: a count display, an increment
//! control, and a decrement control that refuses to go below zero and
//! surfaces an inline error message instead.
//!
//! Built with Iced 0.14.0 using the Elm architecture (State, Message,
//! Update, View).

use counter_gui::app::App;
use iced::Size;
use iced::window;

/// Application entry point.
///
/// Initializes logging, then runs the Iced application with default window
/// settings.
pub fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("Starting Click Counter");

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window::Settings {
            size: Size::new(420.0, 340.0),
            min_size: Some(Size::new(320.0, 280.0)),
            ..Default::default()
        })
        .run()
}
