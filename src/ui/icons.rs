// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for SVG icons.
//!
//! Icons are embedded at compile time via `include_bytes!` and handles are
//! cached using `OnceLock`. They are authored in white and tinted at render
//! time through [`crate::ui::styles::overlay::icon`], so one asset serves
//! any surface.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `cross` not `close_overlay`).

use iced::widget::svg::{Handle, Svg};
use iced::Length;
use std::sync::OnceLock;

/// Defines an icon function with a cached handle. The handle is created once
/// on first access and reused thereafter.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Handle {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!("../../assets/icons/", $filename));
            HANDLE.get_or_init(|| Handle::from_memory(DATA)).clone()
        }
    };
}

define_icon!(cross, "cross.svg", "Cross icon: X mark shape.");
define_icon!(
    peeking,
    "peeking.svg",
    "Peeking icon: head peering over a wall."
);
define_icon!(coffee, "coffee.svg", "Coffee icon: steaming cup.");
define_icon!(toilet, "toilet.svg", "Toilet icon: toilet seen from the side.");

/// Creates an icon widget with specified square dimensions.
pub fn sized(handle: Handle, size: f32) -> Svg<'static> {
    Svg::new(handle)
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
}
