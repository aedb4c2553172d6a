// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::palette;
use iced::widget::container;
use iced::{Background, Theme};

/// Alice-blue surface behind the button list.
pub fn screen(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::ALICE_BLUE)),
        text_color: Some(palette::BLACK),
        ..Default::default()
    }
}

/// Title bar surface. Same color as the screen so the bar reads as part of
/// the scene rather than a separate chrome element.
pub fn top_bar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::ALICE_BLUE)),
        text_color: Some(palette::BLACK),
        ..Default::default()
    }
}
