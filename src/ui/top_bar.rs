// SPDX-License-Identifier: MPL-2.0
//! Application title bar: centered bold title on the screen surface.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::font::Weight;
use iced::widget::{Container, Text};
use iced::{Element, Font, Length};

/// Render the title bar.
pub fn view<'a, Message: 'a>(title: &'a str) -> Element<'a, Message> {
    let bold = Font {
        weight: Weight::Bold,
        ..Font::DEFAULT
    };

    Container::new(Text::new(title).size(typography::TITLE).font(bold))
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .padding(spacing::MD)
        .style(styles::container::top_bar)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_bar_renders() {
        let _element: Element<'_, ()> = view("Another Day at the Office");
    }
}
