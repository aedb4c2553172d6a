// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens: colors, opacity levels, spacing, sizing, and
//! typography used across the UI. Values mirror the original office theme
//! (alice-blue surfaces, gray controls, dimmed black overlays).

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    /// Alice blue, the screen and title bar surface (`#F0F8FF`).
    pub const ALICE_BLUE: Color = Color::from_rgb(0.941, 0.973, 1.0);

    // Grayscale for controls
    pub const GRAY_400: Color = Color::from_rgb(0.6, 0.6, 0.6);
    /// Topic button surface (`#808080`).
    pub const GRAY_500: Color = Color::from_rgb(0.502, 0.502, 0.502);
    pub const GRAY_600: Color = Color::from_rgb(0.42, 0.42, 0.42);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Caption bar background behind overlay text.
    pub const CAPTION: f32 = 0.6;
    /// Fullscreen backdrop dimming the screen behind an overlay.
    pub const BACKDROP: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_MD: f32 = 24.0;
    /// Icon on a topic button.
    pub const TOPIC_ICON: f32 = 40.0;

    // Interactive elements
    pub const TOPIC_BUTTON_WIDTH: f32 = 200.0;
    pub const TOPIC_BUTTON_HEIGHT: f32 = 100.0;
    /// Square close control in the overlay's top-right corner.
    pub const CLOSE_BUTTON: f32 = 48.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Application title in the top bar.
    pub const TITLE: f32 = 28.0;

    /// Overlay caption text.
    pub const CAPTION_LG: f32 = 24.0;

    /// Topic button label.
    pub const LABEL: f32 = 20.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
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
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::XL > spacing::LG);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::CAPTION < opacity::BACKDROP);

    // Sizing validation
    assert!(sizing::TOPIC_ICON > sizing::ICON_MD);
    assert!(sizing::CLOSE_BUTTON > sizing::TOPIC_ICON);
    assert!(sizing::TOPIC_BUTTON_WIDTH > sizing::TOPIC_BUTTON_HEIGHT);

    // Typography validation
    assert!(typography::TITLE > typography::CAPTION_LG);
    assert!(typography::CAPTION_LG > typography::LABEL);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::XL, spacing::MD * 2.0);
    }

    #[test]
    fn palette_channels_are_normalized() {
        for color in [palette::ALICE_BLUE, palette::GRAY_500] {
            assert!(color.r >= 0.0 && color.r <= 1.0);
            assert!(color.g >= 0.0 && color.g <= 1.0);
            assert!(color.b >= 0.0 && color.b <= 1.0);
        }
    }
}
