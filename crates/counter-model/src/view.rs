//! Declarative render contract for the counter widget.
//!
//! The rendering facility does not inspect [`Counter`] directly; it draws a
//! [`ViewModel`] built by [`ViewModel::from_counter`] and routes each
//! control's click back as the [`Action`] the control carries. Every
//! element bears a stable [`AutomationTag`] so an automation harness can
//! locate it without depending on layout or styling, and the error line
//! exposes its visibility as a presentation attribute distinct from its
//! text.

use crate::counter::{Action, Counter};

/// Fixed text of the error line.
pub const ERROR_LINE_TEXT: &str = "The counter cannot go below 0";

/// Leading text of the display line, ahead of the count itself.
pub const DISPLAY_PREFIX: &str = "The counter Display is";

/// Label of the increment button.
pub const INCREMENT_LABEL: &str = "Increment Counter";

/// Label of the decrement button.
pub const DECREMENT_LABEL: &str = "Decrement Counter";

/// Stable identifiers for the widget's rendered elements.
///
/// Tags survive restyling and relayout; automation harnesses address
/// elements exclusively through them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AutomationTag {
    /// Root container of the widget.
    Root,
    /// Display line ("The counter Display is …").
    Display,
    /// The bare count inside the display line.
    Count,
    /// The "cannot go below 0" error line.
    ErrorLine,
    /// The increment button.
    IncrementButton,
    /// The decrement button.
    DecrementButton,
}

impl AutomationTag {
    /// The wire form of the tag as exposed to automation harnesses.
    pub fn as_str(&self) -> &'static str {
        match self {
            AutomationTag::Root => "component-app",
            AutomationTag::Display => "counter-display",
            AutomationTag::Count => "count",
            AutomationTag::ErrorLine => "alert-message",
            AutomationTag::IncrementButton => "increment-button",
            AutomationTag::DecrementButton => "decrement-button",
        }
    }
}

/// The error line: fixed text plus a visibility attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorLineModel {
    /// Automation tag of the line.
    pub tag: AutomationTag,
    /// The message text; fixed regardless of visibility.
    pub text: &'static str,
    /// Whether the line is currently hidden.
    pub hidden: bool,
}

/// A clickable control and the action its click routes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonModel {
    /// Automation tag of the control.
    pub tag: AutomationTag,
    /// User-visible label.
    pub label: &'static str,
    /// Action dispatched when the control is clicked.
    pub action: Action,
}

/// Everything the rendering facility needs to draw the widget.
///
/// Built fresh from the current [`Counter`] after every transition; the
/// widget never renders stale state.
///
/// # Example
///
/// ```
/// use counter_model::{AutomationTag, Counter, ViewModel};
///
/// let view = ViewModel::from_counter(&Counter::new());
/// assert_eq!(view.text_of(AutomationTag::Count), Some("0"));
/// assert!(view.is_hidden(AutomationTag::ErrorLine));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    /// Full display line, e.g. "The counter Display is 3".
    pub display_text: String,
    /// Decimal form of the count, e.g. "3".
    pub count_text: String,
    /// Error line with its visibility attribute.
    pub error_line: ErrorLineModel,
    /// Increment control; always rendered.
    pub increment_button: ButtonModel,
    /// Decrement control; also always rendered, since the count can never
    /// be negative.
    pub decrement_button: ButtonModel,
}

impl ViewModel {
    /// Project the current counter state into its rendered form.
    pub fn from_counter(counter: &Counter) -> Self {
        let count_text = counter.count().to_string();
        Self {
            display_text: format!("{DISPLAY_PREFIX} {count_text}"),
            count_text,
            error_line: ErrorLineModel {
                tag: AutomationTag::ErrorLine,
                text: ERROR_LINE_TEXT,
                hidden: !counter.error_visible(),
            },
            increment_button: ButtonModel {
                tag: AutomationTag::IncrementButton,
                label: INCREMENT_LABEL,
                action: Action::Increment,
            },
            decrement_button: ButtonModel {
                tag: AutomationTag::DecrementButton,
                label: DECREMENT_LABEL,
                action: Action::Decrement,
            },
        }
    }

    /// Tags of every rendered element, in document order.
    pub fn tags(&self) -> [AutomationTag; 6] {
        [
            AutomationTag::Root,
            AutomationTag::Display,
            AutomationTag::Count,
            AutomationTag::ErrorLine,
            self.increment_button.tag,
            self.decrement_button.tag,
        ]
    }

    /// Whether an element with this tag is rendered.
    pub fn contains(&self, tag: AutomationTag) -> bool {
        self.tags().contains(&tag)
    }

    /// Text content of the tagged element.
    ///
    /// `None` for the root container, which has no text of its own.
    pub fn text_of(&self, tag: AutomationTag) -> Option<&str> {
        match tag {
            AutomationTag::Root => None,
            AutomationTag::Display => Some(&self.display_text),
            AutomationTag::Count => Some(&self.count_text),
            AutomationTag::ErrorLine => Some(self.error_line.text),
            AutomationTag::IncrementButton => Some(self.increment_button.label),
            AutomationTag::DecrementButton => Some(self.decrement_button.label),
        }
    }

    /// The `hidden` presentation attribute of the tagged element.
    ///
    /// Only the error line is ever hidden; everything else is always
    /// shown.
    pub fn is_hidden(&self, tag: AutomationTag) -> bool {
        match tag {
            AutomationTag::ErrorLine => self.error_line.hidden,
            _ => false,
        }
    }

    /// The action a click on the tagged element dispatches, if any.
    pub fn action_of(&self, tag: AutomationTag) -> Option<Action> {
        match tag {
            AutomationTag::IncrementButton => Some(self.increment_button.action),
            AutomationTag::DecrementButton => Some(self.decrement_button.action),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_are_unique() {
        let view = ViewModel::from_counter(&Counter::new());
        let tags = view.tags();
        for (i, tag) in tags.iter().enumerate() {
            assert!(!tags[i + 1..].contains(tag), "duplicate tag {tag:?}");
        }
    }

    #[test]
    fn test_wire_tags_are_stable() {
        assert_eq!(AutomationTag::Root.as_str(), "component-app");
        assert_eq!(AutomationTag::Display.as_str(), "counter-display");
        assert_eq!(AutomationTag::Count.as_str(), "count");
        assert_eq!(AutomationTag::ErrorLine.as_str(), "alert-message");
        assert_eq!(AutomationTag::IncrementButton.as_str(), "increment-button");
        assert_eq!(AutomationTag::DecrementButton.as_str(), "decrement-button");
    }

    #[test]
    fn test_display_line_embeds_count() {
        let counter = Counter::new().increment().increment().increment();
        let view = ViewModel::from_counter(&counter);
        assert_eq!(view.display_text, "The counter Display is 3");
        assert_eq!(view.count_text, "3");
    }

    #[test]
    fn test_error_text_is_fixed_while_hidden() {
        let view = ViewModel::from_counter(&Counter::new());
        assert!(view.is_hidden(AutomationTag::ErrorLine));
        assert_eq!(
            view.text_of(AutomationTag::ErrorLine),
            Some(ERROR_LINE_TEXT)
        );
    }

    #[test]
    fn test_buttons_route_their_actions() {
        let view = ViewModel::from_counter(&Counter::new());
        assert_eq!(
            view.action_of(AutomationTag::IncrementButton),
            Some(Action::Increment)
        );
        assert_eq!(
            view.action_of(AutomationTag::DecrementButton),
            Some(Action::Decrement)
        );
        assert_eq!(view.action_of(AutomationTag::Display), None);
    }
}
