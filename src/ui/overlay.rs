// SPDX-License-Identifier: MPL-2.0
//! Fullscreen overlay popup: dimmed backdrop, centered scene, bottom caption,
//! and a top-right close control.
//!
//! Stateless presentational component. The whole overlay is wrapped in a
//! `mouse_area` so presses anywhere on it are captured and never reach the
//! button list underneath; presses outside the close control map to
//! `on_backdrop`, which the screen container deliberately ignores. Only the
//! close control dismisses.

use crate::topic::Topic;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles::overlay::faded;
use crate::ui::{icons, styles};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::svg::Svg;
use iced::widget::{button, mouse_area, text, Container, Space, Stack, Text};
use iced::{Element, Length, Padding};

/// Render the overlay for `topic` at the given fade opacity.
///
/// `on_close` is emitted by the close control; `on_backdrop` by presses on
/// any other part of the overlay.
pub fn view<'a, Message: Clone + 'a + 'static>(
    topic: &Topic,
    opacity: f32,
    on_close: Message,
    on_backdrop: Message,
) -> Element<'a, Message> {
    let backdrop = Container::new(Space::new().width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::overlay::backdrop(opacity));

    let scene = Container::new(
        Svg::new((topic.scene)())
            .width(Length::Fill)
            .height(Length::Fill)
            .opacity(opacity),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::MD);

    let caption = Container::new(
        Text::new(topic.caption)
            .size(typography::CAPTION_LG)
            .style(move |_theme| text::Style {
                color: Some(faded(palette::WHITE, opacity)),
            }),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Center)
    .padding(spacing::XS)
    .style(styles::overlay::caption_bar(opacity));

    let caption_layer = Container::new(caption)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(Vertical::Bottom)
        .padding(Padding {
            bottom: spacing::XL,
            ..Padding::ZERO
        });

    let close = button(
        icons::sized(icons::cross(), sizing::ICON_MD)
            .style(styles::overlay::icon(faded(palette::WHITE, opacity))),
    )
    .on_press(on_close)
    .width(Length::Fixed(sizing::CLOSE_BUTTON))
    .height(Length::Fixed(sizing::CLOSE_BUTTON))
    .padding(spacing::SM)
    .style(styles::button::close(opacity));

    let close_layer = Container::new(close)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Top)
        .padding(spacing::MD);

    let layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(backdrop)
        .push(scene)
        .push(caption_layer)
        .push(close_layer);

    // The mouse area only fires for presses its children ignored, so the
    // close button keeps priority over the backdrop.
    mouse_area(layers).on_press(on_backdrop).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topic::{self, TopicId};

    #[derive(Debug, Clone)]
    enum Msg {
        Close,
        Backdrop,
    }

    #[test]
    fn renders_for_every_topic() {
        for id in TopicId::ALL {
            let _element: Element<'_, Msg> = view(topic::get(id), 1.0, Msg::Close, Msg::Backdrop);
        }
    }

    #[test]
    fn renders_mid_fade() {
        let _element: Element<'_, Msg> =
            view(topic::get(TopicId::Neighbor), 0.4, Msg::Close, Msg::Backdrop);
    }
}
