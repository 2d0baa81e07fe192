// SPDX-License-Identifier: MPL-2.0
//! Panel layout.

use super::component::{ErrorState, Message, Results, Slot, State};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::viewer;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("panel-title")).size(typography::TITLE_MD);

    let mut content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .width(Length::Fill)
        .push(title)
        .push(controls(state, i18n));

    if let Some(error) = state.error() {
        content = content.push(error_view(error, i18n));
    }

    if let Some(results) = state.results() {
        content = content.push(results_view(results, i18n));
    }

    content.into()
}

fn controls<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let browse = button(Text::new(i18n.tr("panel-browse-button")))
        .on_press(Message::BrowsePressed)
        .style(styles::button::secondary);

    let file_label = match state.selected_file() {
        Some(path) => {
            let name = path
                .file_name()
                .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
            Text::new(i18n.tr_with_args("panel-selected-file", &[("name", name.as_str())]))
        }
        None => Text::new(i18n.tr("panel-no-file")),
    }
    .size(typography::BODY);

    let submit_label = if state.is_loading() {
        i18n.tr("panel-submit-button-loading")
    } else {
        i18n.tr("panel-submit-button")
    };
    let submit = button(Text::new(submit_label))
        .on_press_maybe(state.can_submit().then_some(Message::SubmitPressed))
        .style(styles::button::primary);

    let has_anything =
        state.selected_file().is_some() || state.error().is_some() || state.results().is_some();
    let clear = button(Text::new(i18n.tr("panel-clear-button")))
        .on_press_maybe(has_anything.then_some(Message::ClearPressed))
        .style(styles::button::secondary);

    Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(browse)
        .push(file_label)
        .push(submit)
        .push(clear)
        .into()
}

fn error_view<'a>(error: &'a ErrorState, i18n: &'a I18n) -> Element<'a, Message> {
    let toggle_label = if error.show_details {
        i18n.tr("error-details-hide")
    } else {
        i18n.tr("error-details-show")
    };

    let mut column = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(i18n.tr("processing-error")).size(typography::BODY))
        .push(
            button(Text::new(toggle_label).size(typography::CAPTION))
                .on_press(Message::ToggleErrorDetails)
                .style(styles::button::secondary),
        );

    if error.show_details {
        let details = format!("{}\n{}", i18n.tr(error.error.i18n_key()), error.error);
        column = column.push(Text::new(details).size(typography::CAPTION));
    }

    Container::new(column)
        .padding(spacing::SM)
        .width(Length::Fill)
        .style(styles::container::error_box)
        .into()
}

fn results_view<'a>(results: &'a Results, i18n: &'a I18n) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::MD)
        .height(Length::Fill)
        .push(result_column(
            Slot::Enhanced,
            i18n.tr("panel-enhanced-title"),
            &results.enhanced,
            i18n,
        ))
        .push(result_column(
            Slot::Denoised,
            i18n.tr("panel-denoised-title"),
            &results.denoised,
            i18n,
        ))
        .into()
}

fn result_column<'a>(
    slot: Slot,
    title: String,
    state: &'a viewer::State,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let surface = Container::new(
        viewer::view(state, i18n).map(move |message| Message::Viewer(slot, message)),
    )
    .width(Length::Fill)
    .height(Length::Fill);

    Column::new()
        .spacing(spacing::XS)
        .width(Length::FillPortion(1))
        .height(Length::Fill)
        .push(Text::new(title).size(typography::TITLE_SM))
        .push(surface)
        .into()
}
