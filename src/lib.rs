// SPDX-License-Identifier: MPL-2.0
//! `iced_compare` shows the enhanced and denoised variants of an image side by
//! side, each in its own pan/zoom viewer.
//!
//! An image picked by the user is uploaded to a processing service; the two
//! images it returns are decoded and displayed with wheel zoom-to-cursor and
//! drag panning.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
