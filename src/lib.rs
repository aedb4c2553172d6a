// SPDX-License-Identifier: MPL-2.0
//! `office_day` is a single-screen office scene built with the Iced GUI framework.
//!
//! Three buttons, one per topic (Neighbor, Breakroom, Bathroom), each toggle a
//! fullscreen image overlay with a caption and a close control. The overlays
//! fade in and out and are fully independent of each other.

pub mod app;
pub mod topic;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
