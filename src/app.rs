// SPDX-License-Identifier: MPL-2.0
//! Application root state: the screen container owning the three visibility
//! flags.
//!
//! `App` is the sole owner of mutable state. Topic buttons and overlay popups
//! are pure view functions; every flag mutation funnels through
//! [`App::update`], so each flag has exactly one writer.

use crate::topic::{TopicId, TOPICS};
use crate::ui::design_tokens::spacing;
use crate::ui::fade::Fade;
use crate::ui::{overlay, styles, top_bar, topic_button};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{Column, Container, Stack};
use iced::{time, window, Element, Length, Subscription, Task, Theme};
use std::time::{Duration, Instant};

pub const APP_TITLE: &str = "Another Day at the Office";

pub const WINDOW_DEFAULT_WIDTH: u32 = 480;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 360;
pub const MIN_WINDOW_HEIGHT: u32 = 640;

/// Interval between redraw ticks while a fade is in flight.
const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Root application state: one fade cell per topic, nothing else.
#[derive(Debug, Default)]
pub struct App {
    overlays: OverlayFades,
}

/// The three visibility flags, one per topic. Independent by design: no
/// mutual exclusion, several overlays may be visible at once.
#[derive(Debug, Default)]
struct OverlayFades {
    neighbor: Fade,
    breakroom: Fade,
    bathroom: Fade,
}

impl OverlayFades {
    fn get(&self, id: TopicId) -> &Fade {
        match id {
            TopicId::Neighbor => &self.neighbor,
            TopicId::Breakroom => &self.breakroom,
            TopicId::Bathroom => &self.bathroom,
        }
    }

    fn get_mut(&mut self, id: TopicId) -> &mut Fade {
        match id {
            TopicId::Neighbor => &mut self.neighbor,
            TopicId::Breakroom => &mut self.breakroom,
            TopicId::Bathroom => &mut self.bathroom,
        }
    }

    fn any_animating(&self) -> bool {
        TopicId::ALL.iter().any(|&id| self.get(id).is_animating())
    }

    fn settle_all(&mut self, now: Instant) {
        for id in TopicId::ALL {
            self.get_mut(id).settle(now);
        }
    }
}

/// Top-level messages consumed by [`App::update`].
#[derive(Debug, Clone)]
pub enum Message {
    /// A topic button was pressed: toggle that topic's overlay.
    TopicPressed(TopicId),
    /// An overlay's close control was pressed: hide that overlay.
    CloseRequested(TopicId),
    /// The overlay backdrop was pressed. Captured so presses cannot reach
    /// the buttons underneath, and deliberately not a dismissal.
    BackdropPressed(TopicId),
    /// Periodic redraw tick while a fade is in flight.
    Tick(Instant),
}

fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run() -> iced::Result {
    iced::application(|| (App::default(), Task::none()), App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn title(&self) -> String {
        APP_TITLE.to_string()
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TopicPressed(id) => self.overlays.get_mut(id).toggle(Instant::now()),
            Message::CloseRequested(id) => self.overlays.get_mut(id).dismiss(Instant::now()),
            Message::BackdropPressed(_) => {}
            Message::Tick(now) => self.overlays.settle_all(now),
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let now = Instant::now();

        let mut layers = Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(self.screen());

        // Mounted overlays stack above the button list in fixed topic order.
        // An overlay stays mounted through its fade-out.
        for topic in TOPICS.iter() {
            let fade = self.overlays.get(topic.id);
            if fade.is_mounted(now) {
                layers = layers.push(overlay::view(
                    topic,
                    fade.opacity(now),
                    Message::CloseRequested(topic.id),
                    Message::BackdropPressed(topic.id),
                ));
            }
        }

        layers.into()
    }

    /// The base screen: title bar above the centered topic button column.
    fn screen(&self) -> Element<'_, Message> {
        let mut buttons = Column::new()
            .align_x(Horizontal::Center)
            .spacing(spacing::XL);
        for topic in TOPICS.iter() {
            buttons = buttons.push(topic_button::view(topic, Message::TopicPressed(topic.id)));
        }

        let centered = Container::new(buttons)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .padding(spacing::MD);

        let layout = Column::new()
            .push(top_bar::view(APP_TITLE))
            .push(centered);

        Container::new(layout)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::screen)
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        if self.overlays.any_animating() {
            time::every(TICK_INTERVAL).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::fade::FADE_DURATION;

    fn press(app: &mut App, message: Message) {
        let _ = app.update(message);
    }

    fn flags(app: &App) -> [bool; 3] {
        [
            app.overlays.get(TopicId::Neighbor).is_visible(),
            app.overlays.get(TopicId::Breakroom).is_visible(),
            app.overlays.get(TopicId::Bathroom).is_visible(),
        ]
    }

    fn mounted_count(app: &App, now: Instant) -> usize {
        TopicId::ALL
            .iter()
            .filter(|&&id| app.overlays.get(id).is_mounted(now))
            .count()
    }

    #[test]
    fn all_flags_start_hidden() {
        let app = App::default();
        assert_eq!(flags(&app), [false, false, false]);
        assert_eq!(mounted_count(&app, Instant::now()), 0);
    }

    #[test]
    fn button_press_flips_only_its_flag() {
        for (i, id) in TopicId::ALL.into_iter().enumerate() {
            let mut app = App::default();
            press(&mut app, Message::TopicPressed(id));

            let mut expected = [false, false, false];
            expected[i] = true;
            assert_eq!(flags(&app), expected, "pressing {id:?}");
        }
    }

    #[test]
    fn pressing_twice_restores_the_flag() {
        for id in TopicId::ALL {
            let mut app = App::default();
            press(&mut app, Message::TopicPressed(id));
            press(&mut app, Message::TopicPressed(id));
            assert!(!app.overlays.get(id).is_visible());
        }
    }

    #[test]
    fn visible_topic_mounts_exactly_one_overlay() {
        let mut app = App::default();
        press(&mut app, Message::TopicPressed(TopicId::Breakroom));

        let now = Instant::now();
        assert_eq!(mounted_count(&app, now), 1);
        assert!(app.overlays.get(TopicId::Breakroom).is_mounted(now));
    }

    #[test]
    fn close_control_clears_the_flag() {
        let mut app = App::default();
        press(&mut app, Message::TopicPressed(TopicId::Bathroom));
        press(&mut app, Message::CloseRequested(TopicId::Bathroom));
        assert!(!app.overlays.get(TopicId::Bathroom).is_visible());
    }

    #[test]
    fn close_on_hidden_overlay_is_a_noop() {
        let mut app = App::default();
        press(&mut app, Message::CloseRequested(TopicId::Neighbor));

        assert_eq!(flags(&app), [false, false, false]);
        assert!(!app.overlays.get(TopicId::Neighbor).is_animating());
    }

    #[test]
    fn backdrop_press_changes_nothing() {
        let mut app = App::default();
        press(&mut app, Message::TopicPressed(TopicId::Neighbor));

        press(&mut app, Message::BackdropPressed(TopicId::Neighbor));
        assert_eq!(flags(&app), [true, false, false]);
    }

    #[test]
    fn neighbor_open_close_scenario() {
        let mut app = App::default();

        press(&mut app, Message::TopicPressed(TopicId::Neighbor));
        assert_eq!(flags(&app), [true, false, false]);

        press(&mut app, Message::CloseRequested(TopicId::Neighbor));
        assert_eq!(flags(&app), [false, false, false]);
    }

    #[test]
    fn overlays_are_independent() {
        let mut app = App::default();
        press(&mut app, Message::TopicPressed(TopicId::Neighbor));
        press(&mut app, Message::TopicPressed(TopicId::Breakroom));
        press(&mut app, Message::TopicPressed(TopicId::Bathroom));
        assert_eq!(flags(&app), [true, true, true]);

        press(&mut app, Message::CloseRequested(TopicId::Breakroom));
        assert_eq!(flags(&app), [true, false, true]);
    }

    #[test]
    fn tick_settles_finished_fades() {
        let mut app = App::default();
        press(&mut app, Message::TopicPressed(TopicId::Neighbor));
        assert!(app.overlays.any_animating());

        // A tick from after the ramp's end settles it
        press(&mut app, Message::Tick(Instant::now() + FADE_DURATION));
        assert!(!app.overlays.any_animating());
        assert!(app.overlays.get(TopicId::Neighbor).is_visible());
    }

    #[test]
    fn view_renders_with_and_without_overlays() {
        let mut app = App::default();
        let _ = app.view();

        press(&mut app, Message::TopicPressed(TopicId::Neighbor));
        press(&mut app, Message::TopicPressed(TopicId::Bathroom));
        let _ = app.view();
    }
}
