// SPDX-License-Identifier: MPL-2.0
//! Theme mode selection.

use iced::Theme;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    /// Iced theme matching the effective mode.
    #[must_use]
    pub fn to_iced_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}
