// SPDX-License-Identifier: MPL-2.0
//! The three fixed topics and their static display content.
//!
//! Topics are pure configuration: a label for the button, an icon, a scene
//! image for the overlay, and a caption. Nothing here is ever mutated; the
//! per-topic visibility state lives with the screen container in
//! [`crate::app`].

use crate::ui::{icons, scenes};
use iced::widget::svg::Handle;

/// Identifier for one of the three topics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicId {
    Neighbor,
    Breakroom,
    Bathroom,
}

impl TopicId {
    /// All topics, in the order they appear on screen.
    pub const ALL: [TopicId; 3] = [TopicId::Neighbor, TopicId::Breakroom, TopicId::Bathroom];
}

/// Static display content for one topic.
pub struct Topic {
    pub id: TopicId,
    /// Button label.
    pub label: &'static str,
    /// Button icon (rendered tinted on the button surface).
    pub icon: fn() -> Handle,
    /// Fullscreen scene shown by the overlay.
    pub scene: fn() -> Handle,
    /// Caption anchored to the bottom of the overlay.
    pub caption: &'static str,
}

/// The fixed topic table. One entry per [`TopicId`], in [`TopicId::ALL`] order.
pub static TOPICS: [Topic; 3] = [
    Topic {
        id: TopicId::Neighbor,
        label: "Neighbor",
        icon: icons::peeking,
        scene: scenes::neighbor,
        caption: "Charlie can never mind his own business...",
    },
    Topic {
        id: TopicId::Breakroom,
        label: "Breakroom",
        icon: icons::coffee,
        scene: scenes::breakroom,
        caption: "I should really start going out for lunch.",
    },
    Topic {
        id: TopicId::Bathroom,
        label: "Bathroom",
        icon: icons::toilet,
        scene: scenes::bathroom,
        caption: "I hope Charlie doesn't find me in here.",
    },
];

/// Look up the static content for a topic.
#[must_use]
pub fn get(id: TopicId) -> &'static Topic {
    match id {
        TopicId::Neighbor => &TOPICS[0],
        TopicId::Breakroom => &TOPICS[1],
        TopicId::Bathroom => &TOPICS[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_order_matches_all_order() {
        for (topic, id) in TOPICS.iter().zip(TopicId::ALL) {
            assert_eq!(topic.id, id);
        }
    }

    #[test]
    fn lookup_returns_matching_topic() {
        for id in TopicId::ALL {
            assert_eq!(get(id).id, id);
        }
    }

    #[test]
    fn every_topic_has_display_content() {
        for topic in &TOPICS {
            assert!(!topic.label.is_empty());
            assert!(!topic.caption.is_empty());
            // Asset handles must resolve without panicking
            let _ = (topic.icon)();
            let _ = (topic.scene)();
        }
    }

    #[test]
    fn topic_ids_are_unique() {
        for (i, a) in TopicId::ALL.iter().enumerate() {
            for b in &TopicId::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
