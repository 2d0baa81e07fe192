// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Gesture state for viewers, kept apart from the widgets that render it.

pub mod drag;
pub mod transform;

pub use drag::DragSession;
pub use transform::{Scale, ViewTransform};
