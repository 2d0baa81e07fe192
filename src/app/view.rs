// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::panel;
use iced::widget::Container;
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub panel: &'a panel::State,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    Container::new(panel::view(ctx.panel, ctx.i18n).map(Message::Panel))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
