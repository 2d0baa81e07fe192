// SPDX-License-Identifier: MPL-2.0
//! Viewer component encapsulating gesture state and update logic.
//!
//! A viewer owns one image and the transform it is shown through. Its
//! surface widget turns wheel and left-button pointer events into
//! [`Message`]s; [`State::handle`] applies them.

use crate::config::DEFAULT_ZOOM_SENSITIVITY;
use crate::media::{ImageData, ImageReference};
use crate::ui::state::{DragSession, ViewTransform};
use iced::{Point, Vector};

/// Gesture messages emitted by the viewer surface.
///
/// Positions are surface-local (origin at the surface's top-left corner).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// Vertical wheel movement in browser convention (positive scrolls down).
    Wheel { position: Point, delta_y: f32 },
    /// Primary button pressed inside the surface.
    PointerDown(Point),
    /// Pointer moved inside the surface while a drag is active.
    PointerMoved(Point),
    /// Primary button released.
    PointerUp,
    /// Pointer left the surface.
    PointerLeft,
}

/// Viewer state for one image.
#[derive(Debug, Clone)]
pub struct State {
    transform: ViewTransform,
    drag: Option<DragSession>,
    reference: ImageReference,
    image: Option<ImageData>,
    zoom_sensitivity: f32,
}

impl State {
    /// Creates a viewer at the identity transform.
    ///
    /// `image` is `None` when the reference could not be resolved; the
    /// viewer then shows a placeholder.
    #[must_use]
    pub fn new(reference: ImageReference, image: Option<ImageData>) -> Self {
        Self {
            transform: ViewTransform::default(),
            drag: None,
            reference,
            image,
            zoom_sensitivity: DEFAULT_ZOOM_SENSITIVITY,
        }
    }

    #[must_use]
    pub fn with_zoom_sensitivity(mut self, sensitivity: f32) -> Self {
        self.zoom_sensitivity = sensitivity;
        self
    }

    #[must_use]
    pub fn transform(&self) -> ViewTransform {
        self.transform
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    #[must_use]
    pub fn reference(&self) -> &ImageReference {
        &self.reference
    }

    #[must_use]
    pub fn image(&self) -> Option<&ImageData> {
        self.image.as_ref()
    }

    /// Applies a gesture message.
    pub fn handle(&mut self, message: Message) {
        match message {
            Message::Wheel { position, delta_y } => {
                self.transform
                    .zoom_at(position, delta_y, self.zoom_sensitivity);
            }
            Message::PointerDown(position) => {
                self.drag = Some(DragSession::start(position, self.transform.translation()));
            }
            Message::PointerMoved(position) => {
                if let Some(session) = self.drag {
                    self.transform
                        .set_translation(session.translation_at(position));
                }
            }
            Message::PointerUp | Message::PointerLeft => {
                self.drag = None;
            }
        }
    }

    /// Current translation, shortcut for the rendering path.
    #[must_use]
    pub fn translation(&self) -> Vector {
        self.transform.translation()
    }
}
