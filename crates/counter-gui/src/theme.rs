//! Theme support: spacing constants and text styling hooks.
//!
//! Colors come from the active Iced palette so both theme modes work
//! without widget changes.

use iced::Theme;
use iced::widget::text;

/// Spacing between widget rows.
pub const SPACING_MD: f32 = 12.0;

/// Outer padding around the window content.
pub const SPACING_LG: f32 = 16.0;

/// Style for the error line (danger color from the active palette).
pub fn error_text(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.extended_palette().danger.base.color),
    }
}
