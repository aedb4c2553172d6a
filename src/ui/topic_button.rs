// SPDX-License-Identifier: MPL-2.0
//! Fixed-size topic button: icon above label, gray surface.
//!
//! Stateless presentational component. The caller supplies the message to
//! emit on press; the button never owns or mutates visibility state.

use crate::topic::Topic;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::{icons, styles};
use iced::alignment::Horizontal;
use iced::widget::{button, Column, Text};
use iced::{Element, Length};

/// Render a topic button emitting `on_press` once per activation.
pub fn view<'a, Message: Clone + 'a>(topic: &Topic, on_press: Message) -> Element<'a, Message> {
    let icon = icons::sized((topic.icon)(), sizing::TOPIC_ICON)
        .style(styles::overlay::icon(palette::WHITE));

    let content = Column::new()
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .spacing(spacing::XXS)
        .push(icon)
        .push(Text::new(topic.label).size(typography::LABEL));

    button(content)
        .on_press(on_press)
        .width(Length::Fixed(sizing::TOPIC_BUTTON_WIDTH))
        .height(Length::Fixed(sizing::TOPIC_BUTTON_HEIGHT))
        .padding(spacing::XS)
        .style(styles::button::topic)
        .into()
}
