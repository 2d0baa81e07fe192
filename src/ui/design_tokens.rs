// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared visual constants, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_compare::ui::design_tokens::{palette, spacing};

let padding = spacing::MD; // 16px
let accent = palette::PRIMARY_500;
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_800: Color = Color::from_rgb(0.15, 0.15, 0.15);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand colors (blue scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Initial window size.
    pub const WINDOW_WIDTH: f32 = 1200.0;
    pub const WINDOW_HEIGHT: f32 = 800.0;

    /// Smallest window that still fits both viewers.
    pub const WINDOW_MIN_WIDTH: f32 = 640.0;
    pub const WINDOW_MIN_HEIGHT: f32 = 480.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Large title - Main page headings
    pub const TITLE_LG: f32 = 30.0;

    /// Medium title - Panel title
    pub const TITLE_MD: f32 = 20.0;

    /// Small title - Result headers
    pub const TITLE_SM: f32 = 18.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Small body - Hints, secondary labels
    pub const BODY_SM: f32 = 13.0;

    /// Caption - Technical details
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Subtle separators, viewer frames
    pub const WIDTH_SM: f32 = 1.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(sizing::WINDOW_WIDTH >= sizing::WINDOW_MIN_WIDTH);
    assert!(sizing::WINDOW_HEIGHT >= sizing::WINDOW_MIN_HEIGHT);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }
}
