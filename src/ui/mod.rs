// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Components
//!
//! - [`panel`] - File selection, upload and the two result viewers
//! - [`viewer`] - Pan/zoom image viewer with its canvas surface
//!
//! # Shared Infrastructure
//!
//! - [`state`] - View transform and drag session
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod panel;
pub mod state;
pub mod styles;
pub mod theming;
pub mod viewer;
