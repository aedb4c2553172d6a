// SPDX-License-Identifier: MPL-2.0
//! Visibility state machine with a timed opacity ramp.
//!
//! Each overlay owns one [`Fade`]: a boolean target (the visibility flag)
//! plus the timestamp of the last flip, from which the current opacity is
//! interpolated. Keeping the interpolation here, instead of delegating to a
//! framework animation primitive, makes the transition behavior explicit and
//! unit-testable.

use std::time::{Duration, Instant};

/// Duration of the opacity ramp, both in and out.
pub const FADE_DURATION: Duration = Duration::from_millis(220);

/// Visibility flag with fade transition state for a single overlay.
///
/// The flag itself is [`Fade::is_visible`]; the rendered opacity trails it by
/// up to [`FADE_DURATION`]. While fading out, the overlay stays mounted until
/// fully transparent.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fade {
    /// Target state. `true` means the overlay should be shown.
    visible: bool,
    /// Opacity at the moment of the last flip, the ramp's starting point.
    base: f32,
    /// When the target last flipped. `None` once the ramp has settled.
    flipped_at: Option<Instant>,
}

impl Fade {
    /// Flip the visibility flag, starting a ramp from the current opacity.
    ///
    /// Capturing the current opacity as the new base means a flip in the
    /// middle of a transition reverses smoothly instead of jumping.
    pub fn toggle(&mut self, now: Instant) {
        self.base = self.opacity(now);
        self.visible = !self.visible;
        self.flipped_at = Some(now);
    }

    /// Force the flag to hidden. No-op when already hidden, so dismissing
    /// never restarts a finished fade-out.
    pub fn dismiss(&mut self, now: Instant) {
        if !self.visible {
            return;
        }
        self.base = self.opacity(now);
        self.visible = false;
        self.flipped_at = Some(now);
    }

    /// The visibility flag: the state the overlay is transitioning towards.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Current opacity, interpolated from the base towards the target over
    /// [`FADE_DURATION`] and clamped at the target.
    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        let target = if self.visible { 1.0 } else { 0.0 };
        match self.flipped_at {
            None => target,
            Some(at) => {
                let elapsed = now.saturating_duration_since(at);
                let progress = (elapsed.as_secs_f32() / FADE_DURATION.as_secs_f32()).min(1.0);
                self.base + (target - self.base) * progress
            }
        }
    }

    /// Whether the overlay should be in the view tree: visible, or still
    /// fading out.
    #[must_use]
    pub fn is_mounted(&self, now: Instant) -> bool {
        self.visible || self.opacity(now) > 0.0
    }

    /// Whether a ramp is in flight (and redraw ticks are needed).
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.flipped_at.is_some()
    }

    /// Finalize a completed ramp so [`Fade::is_animating`] can turn false and
    /// the tick subscription can stop.
    pub fn settle(&mut self, now: Instant) {
        if let Some(at) = self.flipped_at {
            if now.saturating_duration_since(at) >= FADE_DURATION {
                self.base = if self.visible { 1.0 } else { 0.0 };
                self.flipped_at = None;
            }
        }
    }
}
