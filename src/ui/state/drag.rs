// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Handles grab-and-drag interaction state for panning a viewer's image.
//! The session remembers where on the image the pointer grabbed it, so every
//! move places that same point back under the pointer.

use iced::{Point, Vector};

/// An active pan gesture.
///
/// Exists only while the primary button is held after a press on the
/// surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Pointer position minus translation at the moment of the press.
    anchor: Vector,
}

impl DragSession {
    /// Starts a drag at `position` (surface-local) over the given translation.
    #[must_use]
    pub fn start(position: Point, translation: Vector) -> Self {
        Self {
            anchor: Vector::new(position.x - translation.x, position.y - translation.y),
        }
    }

    #[must_use]
    pub fn anchor(&self) -> Vector {
        self.anchor
    }

    /// Translation that keeps the grabbed point under the pointer at `position`.
    #[must_use]
    pub fn translation_at(&self, position: Point) -> Vector {
        Vector::new(position.x - self.anchor.x, position.y - self.anchor.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_records_anchor_relative_to_translation() {
        let session = DragSession::start(Point::new(50.0, 50.0), Vector::new(10.0, 10.0));
        assert_eq!(session.anchor(), Vector::new(40.0, 40.0));
    }

    #[test]
    fn translation_follows_pointer() {
        let session = DragSession::start(Point::new(50.0, 50.0), Vector::new(10.0, 10.0));
        assert_eq!(
            session.translation_at(Point::new(60.0, 70.0)),
            Vector::new(20.0, 30.0)
        );
    }

    #[test]
    fn moving_back_to_press_point_restores_translation() {
        let start = Vector::new(-125.5, 33.0);
        let session = DragSession::start(Point::new(200.0, 150.0), start);

        let _ = session.translation_at(Point::new(10.0, 400.0));
        assert_eq!(session.translation_at(Point::new(200.0, 150.0)), start);
    }

    #[test]
    fn repeated_moves_to_same_position_are_idempotent() {
        let session = DragSession::start(Point::new(5.0, 5.0), Vector::new(0.0, 0.0));
        let first = session.translation_at(Point::new(80.0, 12.0));
        let second = session.translation_at(Point::new(80.0, 12.0));
        assert_eq!(first, second);
    }
}
