// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Framed, darkened surface behind a viewer's image.
pub fn viewer_surface(theme: &Theme) -> container::Style {
    let (background, frame) = if matches!(theme, Theme::Light) {
        (palette::GRAY_100, palette::GRAY_200)
    } else {
        (palette::GRAY_800, palette::GRAY_700)
    };

    container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            color: frame,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}

/// Tinted box around the processing error message.
pub fn error_box(_theme: &Theme) -> container::Style {
    let accent = palette::ERROR_500;
    container::Style {
        background: Some(Background::Color(Color { a: 0.12, ..accent })),
        text_color: Some(accent),
        border: Border {
            color: accent,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewer_surface_adapts_to_theme() {
        let light = viewer_surface(&Theme::Light);
        let dark = viewer_surface(&Theme::Dark);
        assert_ne!(light.background, dark.background);
    }

    #[test]
    fn error_box_uses_error_accent() {
        let style = error_box(&Theme::Dark);
        assert_eq!(style.border.color, palette::ERROR_500);
        assert_eq!(style.text_color, Some(palette::ERROR_500));
    }
}
