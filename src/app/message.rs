// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::panel;
use iced::window;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Panel(panel::Message),
    /// Result from the open file dialog.
    OpenFileDialogResult(Option<PathBuf>),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(window::Id),
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP47 format (e.g. `en-US`, `fr`).
    pub lang: Option<String>,
    /// Processing endpoint overriding the configured one.
    pub endpoint: Option<String>,
    /// Optional config directory override (used by `paths`).
    pub config_dir: Option<String>,
    /// Image to preselect for upload.
    pub file_path: Option<String>,
}
