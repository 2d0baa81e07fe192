// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together localization, configuration and the
//! upload panel, and translates panel effects into side effects like the file
//! dialog or the processing request.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::error::UploadError;
use crate::i18n::fluent::I18n;
use crate::media::ProcessingClient;
use crate::ui::design_tokens::sizing;
use crate::ui::panel;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    panel: panel::State,
    /// Client for the processing service, or the reason it could not be built.
    processing: Result<ProcessingClient, UploadError>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme_mode", &self.theme_mode)
            .field("endpoint", &self.endpoint())
            .field("is_loading", &self.panel.is_loading())
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(sizing::WINDOW_WIDTH, sizing::WINDOW_HEIGHT),
        min_size: Some(iced::Size::new(
            sizing::WINDOW_MIN_WIDTH,
            sizing::WINDOW_MIN_HEIGHT,
        )),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the configuration and builds the initial state.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let app = Self::with_config(flags, &config);

        if let Some(key) = config_warning {
            tracing::warn!("{}", app.i18n.tr(&key));
        }

        (app, Task::none())
    }

    /// Builds the application from an already loaded configuration.
    ///
    /// The CLI endpoint takes precedence over the configured one.
    pub fn with_config(flags: Flags, config: &Config) -> Self {
        let i18n = I18n::new(flags.lang, config);

        let endpoint = flags
            .endpoint
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| config.service.endpoint().to_string());
        let processing = ProcessingClient::new(endpoint, config.service.timeout());
        match &processing {
            Ok(client) => tracing::info!(endpoint = client.endpoint(), "processing service configured"),
            Err(err) => tracing::error!(error = %err, "could not create HTTP client"),
        }

        let mut panel = panel::State::new(config.viewer.zoom_sensitivity());
        if let Some(path) = flags.file_path {
            let _ = panel.handle(panel::Message::FileSelected(PathBuf::from(path)));
        }

        Self {
            i18n,
            theme_mode: config.general.theme_mode,
            panel,
            processing,
        }
    }

    /// Endpoint uploads are sent to, if the client could be built.
    #[must_use]
    pub fn endpoint(&self) -> Option<&str> {
        self.processing.as_ref().ok().map(ProcessingClient::endpoint)
    }

    #[must_use]
    pub fn panel(&self) -> &panel::State {
        &self.panel
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            panel: &mut self.panel,
            processing: &self.processing,
            dialog_title: self.i18n.tr("panel-browse-button"),
        };

        match message {
            Message::Panel(panel_message) => update::handle_panel_message(&mut ctx, panel_message),
            Message::OpenFileDialogResult(path) => update::handle_dialog_result(&mut ctx, path),
            Message::FileDropped(path) => update::handle_file_dropped(&mut ctx, path),
            Message::WindowCloseRequested(id) => {
                if ctx.panel.is_loading() {
                    tracing::info!("closing while an upload is in flight");
                }
                window::close(id)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            panel: &self.panel,
        })
    }
}
