// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action (submit).
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => disabled(is_light),
    }
}

/// Secondary actions (browse, clear, details toggle).
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    let (bg_color, text_color) = if is_light {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::GRAY_700, WHITE)
    };

    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(bg_color)),
            text_color,
            border: Border {
                color: palette::GRAY_400,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => {
            let hover_bg = if is_light {
                palette::GRAY_200
            } else {
                Color::from_rgb(0.35, 0.35, 0.35)
            };
            button::Style {
                background: Some(Background::Color(hover_bg)),
                text_color,
                border: Border {
                    color: palette::PRIMARY_500,
                    width: 1.0,
                    radius: radius::SM.into(),
                },
                shadow: shadow::SM,
                snap: true,
            }
        }
        button::Status::Disabled => disabled(is_light),
    }
}

fn disabled(is_light: bool) -> button::Style {
    button::Style {
        background: Some(Background::Color(if is_light {
            palette::GRAY_200
        } else {
            palette::GRAY_700
        })),
        text_color: palette::GRAY_400,
        border: Border {
            color: palette::GRAY_400,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let style = primary(&Theme::Dark, button::Status::Active);

        if let Some(Background::Color(bg)) = style.background {
            assert_eq!(bg, palette::PRIMARY_500);
        } else {
            panic!("Expected background color");
        }
    }

    #[test]
    fn disabled_buttons_look_the_same_for_both_kinds() {
        let theme = Theme::Light;
        let a = primary(&theme, button::Status::Disabled);
        let b = secondary(&theme, button::Status::Disabled);
        assert_eq!(a.background, b.background);
        assert_eq!(a.text_color, palette::GRAY_400);
    }
}
