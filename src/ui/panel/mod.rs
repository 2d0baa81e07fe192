// SPDX-License-Identifier: MPL-2.0
//! Upload/result panel: file selection, submission, error reporting and the
//! two result viewers.

pub mod component;
pub mod view;

pub use component::{Effect, ErrorState, Message, RequestId, Results, Slot, State};
pub use view::view;
