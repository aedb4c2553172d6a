// SPDX-License-Identifier: MPL-2.0
//! Overlay styles: backdrop, caption bar, and tinted icons.

use crate::ui::design_tokens::{opacity, palette};
use iced::widget::{container, svg};
use iced::{Background, Color, Theme};

/// Scale a color's alpha by the overlay's current fade opacity.
#[must_use]
pub fn faded(color: Color, fade_opacity: f32) -> Color {
    Color {
        a: color.a * fade_opacity,
        ..color
    }
}

/// Fullscreen dimming surface behind the overlay content.
pub fn backdrop(fade_opacity: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP * fade_opacity,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Semi-transparent bar behind the caption text at the bottom of an overlay.
pub fn caption_bar(fade_opacity: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::CAPTION * fade_opacity,
            ..palette::BLACK
        })),
        text_color: Some(faded(palette::WHITE, fade_opacity)),
        ..Default::default()
    }
}

/// Tint for single-color SVG icons.
pub fn icon(color: Color) -> impl Fn(&Theme, svg::Status) -> svg::Style {
    move |_theme: &Theme, _status: svg::Status| svg::Style { color: Some(color) }
}
