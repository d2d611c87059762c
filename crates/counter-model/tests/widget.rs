//! Behavioral tests for the counter widget.
//!
//! These drive the widget the way a user would: clicks are resolved through
//! the render contract (`action_of` on the clicked control) and applied as
//! transitions, then assertions go back through automation tags. No test
//! reaches into the state record directly.

use counter_model::{AutomationTag, Counter, ViewModel};

/// Factory for the widget in its mount state.
fn setup() -> Counter {
    Counter::new()
}

/// Render the current state the way the host UI layer does.
fn render(counter: &Counter) -> ViewModel {
    ViewModel::from_counter(counter)
}

/// Simulate a click on the tagged control.
fn click(counter: Counter, tag: AutomationTag) -> Counter {
    let action = render(&counter)
        .action_of(tag)
        .unwrap_or_else(|| panic!("{tag:?} is not clickable"));
    counter.apply(action)
}

#[test]
fn renders_without_error() {
    let view = render(&setup());
    assert!(view.contains(AutomationTag::Root));
}

#[test]
fn renders_counter_display() {
    let view = render(&setup());
    assert!(view.contains(AutomationTag::Display));
}

#[test]
fn counter_display_starts_at_zero() {
    let view = render(&setup());
    assert_eq!(view.text_of(AutomationTag::Count), Some("0"));
}

#[test]
fn increment_then_decrement_displays_zero() {
    let counter = click(setup(), AutomationTag::IncrementButton);
    let counter = click(counter, AutomationTag::DecrementButton);
    let view = render(&counter);
    assert_eq!(view.text_of(AutomationTag::Count), Some("0"));
    assert!(view.is_hidden(AutomationTag::ErrorLine));
}

mod increment {
    use super::*;

    #[test]
    fn renders_increment_button() {
        let view = render(&setup());
        assert!(view.contains(AutomationTag::IncrementButton));
    }

    #[test]
    fn click_increments_counter_display() {
        let counter = click(setup(), AutomationTag::IncrementButton);
        let view = render(&counter);
        assert_eq!(view.text_of(AutomationTag::Count), Some("1"));
    }

    #[test]
    fn repeated_clicks_keep_error_hidden() {
        let mut counter = setup();
        for expected in 1..=5u32 {
            counter = click(counter, AutomationTag::IncrementButton);
            let view = render(&counter);
            assert_eq!(
                view.text_of(AutomationTag::Count),
                Some(expected.to_string().as_str())
            );
            assert!(view.is_hidden(AutomationTag::ErrorLine));
        }
    }
}

mod decrement {
    use super::*;

    #[test]
    fn renders_decrement_button() {
        let view = render(&setup());
        assert!(view.contains(AutomationTag::DecrementButton));
    }

    #[test]
    fn click_decrements_display_when_counter_above_zero() {
        let counter = click(setup(), AutomationTag::IncrementButton);
        let counter = click(counter, AutomationTag::DecrementButton);
        let view = render(&counter);
        assert_eq!(view.text_of(AutomationTag::Count), Some("0"));
    }

    #[test]
    fn two_increments_then_one_decrement_displays_one() {
        let counter = click(setup(), AutomationTag::IncrementButton);
        let counter = click(counter, AutomationTag::IncrementButton);
        let counter = click(counter, AutomationTag::DecrementButton);
        let view = render(&counter);
        assert_eq!(view.text_of(AutomationTag::Count), Some("1"));
        assert!(view.is_hidden(AutomationTag::ErrorLine));
    }
}

mod error_line {
    use super::*;

    #[test]
    fn hidden_when_not_needed() {
        let view = render(&setup());
        assert!(view.is_hidden(AutomationTag::ErrorLine));
    }
}

mod decrement_at_zero {
    use super::*;

    /// The widget immediately after a rejected decrement.
    fn after_rejected_decrement() -> Counter {
        click(setup(), AutomationTag::DecrementButton)
    }

    #[test]
    fn error_shows() {
        let view = render(&after_rejected_decrement());
        assert!(!view.is_hidden(AutomationTag::ErrorLine));
    }

    #[test]
    fn counter_still_displays_zero() {
        let view = render(&after_rejected_decrement());
        assert_eq!(view.text_of(AutomationTag::Count), Some("0"));
    }

    #[test]
    fn increment_clears_the_error() {
        let counter = click(after_rejected_decrement(), AutomationTag::IncrementButton);
        let view = render(&counter);
        assert!(view.is_hidden(AutomationTag::ErrorLine));
        assert_eq!(view.text_of(AutomationTag::Count), Some("1"));
    }
}
