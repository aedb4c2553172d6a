// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Style for the topic buttons: gray surface, white content.
pub fn topic(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::GRAY_400,
        button::Status::Pressed => palette::GRAY_600,
        _ => palette::GRAY_500,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::WHITE,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::SM,
        snap: true,
    }
}

/// Style for the overlay close control, faded along with its overlay.
pub fn close(opacity: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let base = match status {
            button::Status::Hovered => palette::GRAY_400,
            button::Status::Pressed => palette::GRAY_600,
            _ => palette::GRAY_500,
        };

        button::Style {
            background: Some(Background::Color(Color {
                a: opacity,
                ..base
            })),
            text_color: Color {
                a: opacity,
                ..palette::WHITE
            },
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}
