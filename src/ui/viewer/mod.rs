// SPDX-License-Identifier: MPL-2.0
//! Pan/zoom image viewer.
//!
//! The viewer renders its image inside a clipped surface at
//! `translate · scale` and reacts to wheel zoom and drag pan. State lives in
//! [`component::State`]; [`surface::Surface`] is the canvas program that
//! draws it and emits gesture messages.

pub mod component;
pub mod surface;

pub use component::{Message, State};

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{canvas, container, Column, Container, Text};
use iced::{alignment, Element, Length};

/// Renders a viewer filling the space it is given.
pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let content: Element<'a, Message> = match state.image() {
        Some(image) => canvas::Canvas::new(surface::Surface {
            image,
            transform: state.transform(),
            is_dragging: state.is_dragging(),
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .into(),
        None => broken_placeholder(i18n),
    };

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .clip(true)
        .style(styles::container::viewer_surface)
        .into()
}

fn broken_placeholder<'a>(i18n: &I18n) -> Element<'a, Message> {
    let glyph = Text::new("⚠").size(typography::TITLE_LG);
    let caption = Text::new(i18n.tr("viewer-broken-image")).size(typography::BODY_SM);

    Container::new(
        Column::new()
            .push(glyph)
            .push(caption)
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .into()
}
