// SPDX-License-Identifier: MPL-2.0
//! Upload/result panel component.
//!
//! The panel owns the selected file, the loading flag, the error state and
//! the two result viewers. It never performs I/O itself: file dialogs and
//! uploads are requested from the application through [`Effect`].

use crate::error::UploadError;
use crate::media::{ProcessingOutcome, ResolvedImage};
use crate::ui::viewer;
use std::path::{Path, PathBuf};

/// Identifies one upload so late completions can be told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(u64);

impl RequestId {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Result slot addressed by viewer messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Enhanced,
    Denoised,
}

/// Failed upload shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorState {
    pub error: UploadError,
    pub show_details: bool,
}

/// The two viewers shown after a successful upload.
#[derive(Debug, Clone)]
pub struct Results {
    pub enhanced: viewer::State,
    pub denoised: viewer::State,
}

impl Results {
    fn slot_mut(&mut self, slot: Slot) -> &mut viewer::State {
        match slot {
            Slot::Enhanced => &mut self.enhanced,
            Slot::Denoised => &mut self.denoised,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    BrowsePressed,
    FileSelected(PathBuf),
    SubmitPressed,
    UploadCompleted {
        request: RequestId,
        result: Result<ProcessingOutcome, UploadError>,
    },
    ClearPressed,
    ToggleErrorDetails,
    Viewer(Slot, viewer::Message),
}

/// Side effects the application should perform after handling a panel message.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    OpenFileDialog,
    StartUpload { request: RequestId, path: PathBuf },
}

#[derive(Debug, Clone)]
pub struct State {
    selected_file: Option<PathBuf>,
    is_loading: bool,
    error: Option<ErrorState>,
    results: Option<Results>,
    pending: Option<RequestId>,
    next_request: u64,
    zoom_sensitivity: f32,
}

impl Default for State {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_ZOOM_SENSITIVITY)
    }
}

impl State {
    #[must_use]
    pub fn new(zoom_sensitivity: f32) -> Self {
        Self {
            selected_file: None,
            is_loading: false,
            error: None,
            results: None,
            pending: None,
            next_request: 0,
            zoom_sensitivity,
        }
    }

    #[must_use]
    pub fn selected_file(&self) -> Option<&Path> {
        self.selected_file.as_deref()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&ErrorState> {
        self.error.as_ref()
    }

    #[must_use]
    pub fn results(&self) -> Option<&Results> {
        self.results.as_ref()
    }

    /// Whether the submit button accepts presses.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.selected_file.is_some() && !self.is_loading
    }

    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::BrowsePressed => Effect::OpenFileDialog,
            Message::FileSelected(path) => {
                tracing::debug!(path = %path.display(), "file selected");
                self.selected_file = Some(path);
                self.error = None;
                Effect::None
            }
            Message::SubmitPressed => self.submit(),
            Message::UploadCompleted { request, result } => {
                self.complete(request, result);
                Effect::None
            }
            Message::ClearPressed => {
                self.selected_file = None;
                self.error = None;
                self.results = None;
                self.pending = None;
                self.is_loading = false;
                Effect::None
            }
            Message::ToggleErrorDetails => {
                if let Some(error) = &mut self.error {
                    error.show_details = !error.show_details;
                }
                Effect::None
            }
            Message::Viewer(slot, message) => {
                if let Some(results) = &mut self.results {
                    results.slot_mut(slot).handle(message);
                }
                Effect::None
            }
        }
    }

    fn submit(&mut self) -> Effect {
        if !self.can_submit() {
            return Effect::None;
        }
        let Some(path) = self.selected_file.clone() else {
            return Effect::None;
        };

        self.next_request += 1;
        let request = RequestId(self.next_request);
        self.pending = Some(request);
        self.is_loading = true;
        self.error = None;

        Effect::StartUpload { request, path }
    }

    fn complete(&mut self, request: RequestId, result: Result<ProcessingOutcome, UploadError>) {
        if self.pending != Some(request) {
            tracing::debug!(request = request.value(), "dropping stale upload result");
            return;
        }
        self.pending = None;
        self.is_loading = false;

        match result {
            Ok(outcome) => {
                self.results = Some(Results {
                    enhanced: self.viewer_for(outcome.enhanced),
                    denoised: self.viewer_for(outcome.denoised),
                });
                self.error = None;
            }
            Err(error) => {
                tracing::warn!(%error, "image processing failed");
                self.error = Some(ErrorState {
                    error,
                    show_details: false,
                });
            }
        }
    }

    fn viewer_for(&self, resolved: ResolvedImage) -> viewer::State {
        viewer::State::new(resolved.reference, resolved.image)
            .with_zoom_sensitivity(self.zoom_sensitivity)
    }
}
