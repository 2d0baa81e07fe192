// SPDX-License-Identifier: MPL-2.0
//! Canvas surface that draws a viewer's image and reports its gestures.

use crate::config::WHEEL_LINE_PIXELS;
use crate::media::ImageData;
use crate::ui::state::ViewTransform;
use crate::ui::viewer::component::Message;
use iced::mouse::{self, ScrollDelta};
use iced::widget::canvas;
use iced::widget::Action;
use iced::{Rectangle, Renderer, Theme};

/// Canvas program for one viewer.
pub struct Surface<'a> {
    pub image: &'a ImageData,
    pub transform: ViewTransform,
    pub is_dragging: bool,
}

/// Converts an Iced wheel delta into a browser-style vertical delta.
///
/// Iced reports positive `y` when scrolling up; browsers report negative.
#[must_use]
pub fn wheel_delta_y(delta: ScrollDelta) -> f32 {
    match delta {
        ScrollDelta::Lines { y, .. } => -y * WHEEL_LINE_PIXELS,
        ScrollDelta::Pixels { y, .. } => -y,
    }
}

/// Screen rectangle covered by an image of `width`×`height` under `transform`.
#[must_use]
pub fn image_bounds(transform: ViewTransform, width: u32, height: u32) -> Rectangle {
    let origin = transform.image_to_screen(iced::Point::ORIGIN);
    let scale = transform.scale();
    Rectangle {
        x: origin.x,
        y: origin.y,
        width: width as f32 * scale,
        height: height as f32 * scale,
    }
}

impl canvas::Program<Message> for Surface<'_> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        let iced::Event::Mouse(event) = event else {
            return None;
        };

        match event {
            mouse::Event::WheelScrolled { delta } => {
                let position = cursor.position_in(bounds)?;
                Some(
                    Action::publish(Message::Wheel {
                        position,
                        delta_y: wheel_delta_y(*delta),
                    })
                    .and_capture(),
                )
            }
            mouse::Event::ButtonPressed(mouse::Button::Left) => {
                let position = cursor.position_in(bounds)?;
                Some(Action::publish(Message::PointerDown(position)).and_capture())
            }
            mouse::Event::CursorMoved { .. } if self.is_dragging => {
                match cursor.position_in(bounds) {
                    Some(position) => {
                        Some(Action::publish(Message::PointerMoved(position)).and_capture())
                    }
                    None => Some(Action::publish(Message::PointerLeft)),
                }
            }
            mouse::Event::ButtonReleased(mouse::Button::Left) if self.is_dragging => {
                Some(Action::publish(Message::PointerUp))
            }
            mouse::Event::CursorLeft if self.is_dragging => {
                Some(Action::publish(Message::PointerLeft))
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        let target = image_bounds(self.transform, self.image.width, self.image.height);
        if target.intersects(&Rectangle::with_size(bounds.size())) {
            frame.draw_image(target, canvas::Image::new(self.image.handle.clone()));
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.is_dragging {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(bounds) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}
