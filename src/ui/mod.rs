// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Components
//!
//! - [`topic_button`] - Fixed-size icon-and-label button, one per topic
//! - [`overlay`] - Fullscreen dimmed popup with scene image, caption, and close control
//! - [`top_bar`] - Centered application title bar
//!
//! # Shared Infrastructure
//!
//! - [`fade`] - Per-overlay visibility state machine with timed opacity ramp
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`icons`] - Embedded SVG icon handles
//! - [`scenes`] - Embedded SVG scene artwork for the overlays

pub mod design_tokens;
pub mod fade;
pub mod icons;
pub mod overlay;
pub mod scenes;
pub mod styles;
pub mod top_bar;
pub mod topic_button;
