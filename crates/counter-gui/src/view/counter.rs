//! Counter widget view.
//!
//! The widget is rendered from its `ViewModel` rather than from the raw
//! state record, so the on-screen tree always has the shape the render
//! contract describes: display line, error line (visible only while the
//! rule is tripped), and the two control buttons.

use counter_model::{ButtonModel, ViewModel};
use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Length};

use crate::message::{CounterMessage, Message, SettingsMessage};
use crate::state::AppState;
use crate::theme;

/// Render the whole window: the counter widget plus shell chrome.
pub fn view_app(state: &AppState) -> Element<'_, Message> {
    let widget = view_counter(ViewModel::from_counter(&state.counter));

    let theme_toggle = button(text(state.settings.display.theme_mode.label()).size(12))
        .on_press(Message::Settings(SettingsMessage::ThemeToggled))
        .padding([4.0, 10.0]);

    column![
        row![Space::new().width(Length::Fill), theme_toggle],
        container(widget)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    ]
    .padding(theme::SPACING_LG)
    .into()
}

/// Render the counter widget itself.
fn view_counter(view_model: ViewModel) -> Element<'static, Message> {
    let mut widget = column![text(view_model.display_text).size(24)]
        .align_x(Alignment::Center)
        .spacing(theme::SPACING_MD);

    if !view_model.error_line.hidden {
        widget = widget.push(
            text(view_model.error_line.text)
                .size(14)
                .style(theme::error_text),
        );
    }

    widget
        .push(control_button(&view_model.increment_button))
        .push(control_button(&view_model.decrement_button))
        .into()
}

/// Render one click control from its model.
fn control_button(model: &ButtonModel) -> Element<'static, Message> {
    button(text(model.label).size(14))
        .on_press(Message::Counter(CounterMessage::for_action(model.action)))
        .padding([10.0, 24.0])
        .into()
}
