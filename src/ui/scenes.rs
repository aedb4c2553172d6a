// SPDX-License-Identifier: MPL-2.0
//! Embedded scene artwork shown fullscreen by the overlays.
//!
//! One SVG per topic, embedded at compile time and cached like the icons in
//! [`crate::ui::icons`]. Scenes carry their own colors and are never tinted.

use iced::widget::svg::Handle;
use std::sync::OnceLock;

macro_rules! define_scene {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Handle {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!("../../assets/scenes/", $filename));
            HANDLE.get_or_init(|| Handle::from_memory(DATA)).clone()
        }
    };
}

define_scene!(
    neighbor,
    "neighbor.svg",
    "Charlie peering over the cubicle partition."
);
define_scene!(
    breakroom,
    "breakroom.svg",
    "The breakroom: counter, fridge, and a lonely table."
);
define_scene!(
    bathroom,
    "bathroom.svg",
    "The quiet stall at the end of the row."
);
