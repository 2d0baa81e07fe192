// SPDX-License-Identifier: MPL-2.0
//! View transform state
//!
//! A viewer shows its image through a 2D affine transform made of a uniform
//! scale followed by a translation, both expressed in surface-local pixels
//! with the origin at the surface's top-left corner:
//!
//! ```text
//! screen = translate + image * scale
//! ```
//!
//! Wheel zoom keeps the image point under the cursor fixed on screen.

pub use crate::config::{DEFAULT_SCALE, MAX_SCALE, MIN_SCALE};
use iced::{Point, Vector};

/// View scale, guaranteed to be within the valid range (0.5–20).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Scale(f32);

impl Scale {
    /// Creates a new scale, clamping the value to the valid range.
    /// Non-finite input yields the default scale.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_finite() {
            Self(value.clamp(MIN_SCALE, MAX_SCALE))
        } else {
            Self::default()
        }
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self(DEFAULT_SCALE)
    }
}

/// Scale and translation applied to a viewer's image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    scale: Scale,
    translation: Vector,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            scale: Scale::default(),
            translation: Vector::new(0.0, 0.0),
        }
    }
}

impl ViewTransform {
    #[must_use]
    pub fn new(scale: f32, translation: Vector) -> Self {
        Self {
            scale: Scale::new(scale),
            translation,
        }
    }

    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale.value()
    }

    #[must_use]
    pub fn translation(&self) -> Vector {
        self.translation
    }

    /// Maps an image-space point to surface-local coordinates.
    #[must_use]
    pub fn image_to_screen(&self, point: Point) -> Point {
        let s = self.scale();
        Point::new(
            self.translation.x + point.x * s,
            self.translation.y + point.y * s,
        )
    }

    /// Maps a surface-local point back to image space.
    #[must_use]
    pub fn screen_to_image(&self, point: Point) -> Point {
        let s = self.scale();
        Point::new(
            (point.x - self.translation.x) / s,
            (point.y - self.translation.y) / s,
        )
    }

    /// Applies a wheel tick at `cursor` (surface-local).
    ///
    /// `delta_y` follows the browser convention: negative when the wheel is
    /// rolled away from the user, which zooms in. The resulting scale is
    /// clamped; when clamping leaves the scale unchanged the translation is
    /// left untouched too. Returns whether the transform changed.
    pub fn zoom_at(&mut self, cursor: Point, delta_y: f32, sensitivity: f32) -> bool {
        let delta = -delta_y * sensitivity;
        if !delta.is_finite() || delta == 0.0 {
            return false;
        }

        let scale = self.scale();
        let proposed = Scale::new(scale + delta).value();
        let change = proposed - scale;
        if change == 0.0 {
            return false;
        }

        let anchor_x = (cursor.x - self.translation.x) / scale;
        let anchor_y = (cursor.y - self.translation.y) / scale;

        self.translation = Vector::new(
            self.translation.x - anchor_x * change,
            self.translation.y - anchor_y * change,
        );
        self.scale = Scale::new(proposed);
        true
    }

    /// Replaces the translation, keeping the scale.
    pub fn set_translation(&mut self, translation: Vector) {
        self.translation = translation;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    const K: f32 = crate::config::DEFAULT_ZOOM_SENSITIVITY;

    #[test]
    fn default_transform_is_identity() {
        let t = ViewTransform::default();
        assert_eq!(t.scale(), 1.0);
        assert_eq!(t.translation(), Vector::new(0.0, 0.0));
    }

    #[test]
    fn scale_newtype_clamps() {
        assert_eq!(Scale::new(0.1).value(), MIN_SCALE);
        assert_eq!(Scale::new(100.0).value(), MAX_SCALE);
        assert_eq!(Scale::new(f32::NAN).value(), DEFAULT_SCALE);
        assert_eq!(Scale::new(0.5).value(), MIN_SCALE);
        assert_eq!(Scale::new(20.0).value(), MAX_SCALE);
    }

    #[test]
    fn wheel_up_at_cursor_doubles_scale_and_shifts_translation() {
        let mut t = ViewTransform::default();

        let changed = t.zoom_at(Point::new(100.0, 100.0), -100.0, K);

        assert!(changed);
        assert_abs_diff_eq!(t.scale(), 2.0);
        assert_abs_diff_eq!(t.translation().x, -100.0);
        assert_abs_diff_eq!(t.translation().y, -100.0);
    }

    #[test]
    fn zoom_keeps_point_under_cursor_fixed() {
        let starts = [
            ViewTransform::new(1.0, Vector::new(0.0, 0.0)),
            ViewTransform::new(3.5, Vector::new(-240.0, 75.0)),
            ViewTransform::new(0.75, Vector::new(33.0, -12.5)),
            ViewTransform::new(12.0, Vector::new(-5000.0, -3000.0)),
        ];
        let cursors = [
            Point::new(0.0, 0.0),
            Point::new(100.0, 100.0),
            Point::new(317.0, 42.0),
            Point::new(799.0, 599.0),
        ];
        let deltas = [-300.0, -100.0, -7.0, 3.0, 40.0, 120.0];

        for start in starts {
            for cursor in cursors {
                for delta in deltas {
                    let mut t = start;
                    let image_point = t.screen_to_image(cursor);

                    t.zoom_at(cursor, delta, K);

                    let after = t.image_to_screen(image_point);
                    assert_abs_diff_eq!(after.x, cursor.x, epsilon = 1e-2);
                    assert_abs_diff_eq!(after.y, cursor.y, epsilon = 1e-2);
                }
            }
        }
    }

    #[test]
    fn scale_never_leaves_bounds() {
        let mut t = ViewTransform::default();
        for delta in [-5000.0, -120.0, 9999.0, 1.0, -1.0, 250.0, -1e6, 1e6] {
            t.zoom_at(Point::new(50.0, 60.0), delta, K);
            assert!(t.scale() >= MIN_SCALE);
            assert!(t.scale() <= MAX_SCALE);
        }
    }

    #[test]
    fn saturated_zoom_out_leaves_transform_untouched() {
        let mut t = ViewTransform::new(MIN_SCALE, Vector::new(12.0, -8.0));
        let before = t;

        let changed = t.zoom_at(Point::new(200.0, 150.0), 500.0, K);

        assert!(!changed);
        assert_eq!(t, before);
    }

    #[test]
    fn saturated_zoom_in_leaves_transform_untouched() {
        let mut t = ViewTransform::new(MAX_SCALE, Vector::new(-900.0, -400.0));
        let before = t;

        assert!(!t.zoom_at(Point::new(10.0, 10.0), -100.0, K));
        assert_eq!(t, before);
    }

    #[test]
    fn partial_clamp_still_keeps_cursor_fixed() {
        // 19.5 + 1.0 exceeds the maximum and is clamped to 20.
        let mut t = ViewTransform::new(19.5, Vector::new(-300.0, -200.0));
        let cursor = Point::new(150.0, 90.0);
        let image_point = t.screen_to_image(cursor);

        assert!(t.zoom_at(cursor, -100.0, K));

        assert_eq!(t.scale(), MAX_SCALE);
        let after = t.image_to_screen(image_point);
        assert_abs_diff_eq!(after.x, cursor.x, epsilon = 1e-2);
        assert_abs_diff_eq!(after.y, cursor.y, epsilon = 1e-2);
    }

    #[test]
    fn zero_or_non_finite_delta_is_ignored() {
        let mut t = ViewTransform::new(2.0, Vector::new(5.0, 5.0));
        let before = t;
        assert!(!t.zoom_at(Point::new(1.0, 1.0), 0.0, K));
        assert!(!t.zoom_at(Point::new(1.0, 1.0), f32::NAN, K));
        assert!(!t.zoom_at(Point::new(1.0, 1.0), f32::INFINITY, K));
        assert_eq!(t, before);
    }

    #[test]
    fn set_translation_keeps_scale() {
        let mut t = ViewTransform::new(4.0, Vector::new(0.0, 0.0));
        t.set_translation(Vector::new(-10.0, 20.0));
        assert_eq!(t.scale(), 4.0);
        assert_eq!(t.translation(), Vector::new(-10.0, 20.0));
    }
}
