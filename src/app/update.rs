// SPDX-License-Identifier: MPL-2.0
//! Update logic for the application.
//!
//! Turns panel effects into tasks: the native file dialog and the upload
//! round trip both run off the UI thread and report back as messages.

use super::Message;
use crate::error::UploadError;
use crate::media::{self, ProcessingClient};
use crate::ui::panel::{self, Effect, RequestId};
use iced::Task;
use std::path::PathBuf;

/// Context for update handlers.
pub struct UpdateContext<'a> {
    pub panel: &'a mut panel::State,
    pub processing: &'a Result<ProcessingClient, UploadError>,
    pub dialog_title: String,
}

pub fn handle_panel_message(ctx: &mut UpdateContext<'_>, message: panel::Message) -> Task<Message> {
    let effect = ctx.panel.handle(message);
    handle_panel_effect(ctx, effect)
}

fn handle_panel_effect(ctx: &mut UpdateContext<'_>, effect: Effect) -> Task<Message> {
    match effect {
        Effect::None => Task::none(),
        Effect::OpenFileDialog => open_file_dialog(ctx.dialog_title.clone()),
        Effect::StartUpload { request, path } => start_upload(ctx.processing, request, path),
    }
}

/// Selects `path` when it looks like an image we can upload.
pub fn handle_file_dropped(ctx: &mut UpdateContext<'_>, path: PathBuf) -> Task<Message> {
    if media::is_supported_image(&path) {
        handle_panel_message(ctx, panel::Message::FileSelected(path))
    } else {
        tracing::warn!(path = %path.display(), "ignoring dropped file with unsupported extension");
        Task::none()
    }
}

pub fn handle_dialog_result(ctx: &mut UpdateContext<'_>, path: Option<PathBuf>) -> Task<Message> {
    match path {
        Some(path) => handle_panel_message(ctx, panel::Message::FileSelected(path)),
        None => Task::none(),
    }
}

fn open_file_dialog(title: String) -> Task<Message> {
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .set_title(title)
                .add_filter("Images", media::IMAGE_EXTENSIONS)
                .pick_file()
                .await
                .map(|h| h.path().to_path_buf())
        },
        Message::OpenFileDialogResult,
    )
}

fn start_upload(
    processing: &Result<ProcessingClient, UploadError>,
    request: RequestId,
    path: PathBuf,
) -> Task<Message> {
    let client = match processing {
        Ok(client) => client.clone(),
        Err(err) => {
            return Task::done(upload_completed(request, Err(err.clone())));
        }
    };

    Task::perform(
        async move { client.process_and_resolve(&path).await },
        move |result| upload_completed(request, result),
    )
}

fn upload_completed(
    request: RequestId,
    result: Result<media::ProcessingOutcome, UploadError>,
) -> Message {
    Message::Panel(panel::Message::UploadCompleted { request, result })
}
