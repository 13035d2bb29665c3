// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Panel surface holding the feedback form.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so the panel stays readable in both light and dark modes.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Outcome region (thanks / error message) accented with `accent`.
pub fn outcome(accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        text_color: Some(accent),
        border: Border {
            color: accent,
            width: 1.0,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}
