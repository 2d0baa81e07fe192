// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Only window-level events are routed here. Viewer gestures are delivered by
//! each viewer's own canvas surface.

use super::Message;
use iced::{event, window, Subscription};

/// Listens for file drops and close requests on any window.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| match event {
        event::Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        event::Event::Window(window::Event::FileDropped(path)) => {
            Some(Message::FileDropped(path))
        }
        _ => None,
    })
}
