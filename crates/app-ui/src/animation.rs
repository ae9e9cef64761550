//! Easing curves and the veil opacity ramp
//!
//! The veil is modeled the way a declarative UI animates a property: the
//! model value jumps to its target immediately while the presented value is
//! interpolated over time. [`VeilAnimation`] keeps both so callers can sample
//! the presented opacity at any instant of the Tokio clock.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::Instant;

// =============================================================================
// Easing
// =============================================================================

/// Easing curve applied to a ramp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Easing {
    /// Constant velocity
    Linear,
    /// Quadratic ease-in (slow start)
    EaseIn,
    /// Quadratic ease-out (slow end)
    EaseOut,
    /// Quadratic ease-in-out (slow start and end)
    #[default]
    EaseInOut,
}

impl Easing {
    /// Map progress `t` in [0, 1] to eased progress in [0, 1]
    pub fn apply(self, t: f32) -> f32 {
        let t = if t.is_nan() { 1.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

// =============================================================================
// Veil Animation
// =============================================================================

/// An opacity ramp from one value to another over a fixed duration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VeilAnimation {
    from: f32,
    to: f32,
    started_at: Instant,
    duration: Duration,
    easing: Easing,
}

impl VeilAnimation {
    /// A veil resting at `opacity` with no ramp in flight
    pub fn settled(opacity: f32) -> Self {
        Self {
            from: opacity,
            to: opacity,
            started_at: Instant::now(),
            duration: Duration::ZERO,
            easing: Easing::Linear,
        }
    }

    /// Start a ramp from the currently presented value to `to`
    pub fn retarget(&mut self, to: f32, duration: Duration, easing: Easing) {
        let now = Instant::now();
        self.from = self.value_at(now);
        self.to = to;
        self.started_at = now;
        self.duration = duration;
        self.easing = easing;
    }

    /// Stop the ramp where it currently is
    pub fn freeze(&mut self) {
        *self = Self::settled(self.value());
    }

    /// Model value the ramp is heading towards
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Presented value at `now`
    pub fn value_at(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return self.to;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        let eased = self.easing.apply(t as f32);
        if eased >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * eased
    }

    /// Presented value right now
    pub fn value(&self) -> f32 {
        self.value_at(Instant::now())
    }

    /// Whether the ramp has reached its target at `now`
    pub fn is_settled_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= self.duration
    }
}

impl Default for VeilAnimation {
    fn default() -> Self {
        Self::settled(0.0)
    }
}
