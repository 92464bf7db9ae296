#![forbid(unsafe_code)]

//! Animation primitives: the [`Animation`] trait, easing curves, tweens,
//! and a frame clock.
//!
//! Everything here is driven by explicit `tick(dt)` calls. Nothing reads the
//! wall clock on its own, so tests can step time deterministically and the
//! host decides how frames are scheduled.
//!
//! # Invariants
//!
//! 1. Easing functions map `[0.0, 1.0]` onto `[0.0, 1.0]`, with `f(0) = 0`
//!    and `f(1) = 1`. Inputs outside the unit interval are clamped.
//! 2. `Animation::value()` is always in `[0.0, 1.0]`.
//! 3. `tick()` on a complete animation is a no-op.

use std::time::Duration;

mod clock;
mod tween;

pub use clock::FrameClock;
pub use tween::{PlaybackState, Tween};

/// A time-driven animation.
pub trait Animation {
    /// Advance the animation by `dt`.
    fn tick(&mut self, dt: Duration);

    /// Whether the animation has reached its end.
    fn is_complete(&self) -> bool;

    /// Current normalized value in `[0.0, 1.0]`.
    fn value(&self) -> f32;

    /// Return to the initial state.
    fn reset(&mut self);

    /// Time past the end consumed by the last tick.
    ///
    /// Lets sequenced animations forward leftover time. Zero unless complete.
    fn overshoot(&self) -> Duration {
        Duration::ZERO
    }
}

/// Easing curve: maps linear progress to eased progress.
pub type EasingFn = fn(f32) -> f32;

/// No easing.
#[inline]
#[must_use]
pub fn linear(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}

/// Quadratic ease-in.
#[inline]
#[must_use]
pub fn ease_in(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t
}

/// Quadratic ease-out.
#[inline]
#[must_use]
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Quadratic ease-in-out.
#[inline]
#[must_use]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        let inv = -2.0 * t + 2.0;
        1.0 - inv * inv / 2.0
    }
}

/// Cubic ease-in: slow start, accelerating. Used for exits.
#[inline]
#[must_use]
pub fn ease_in_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * t
}

/// Cubic ease-out: fast start, decelerating. Used for entrances.
#[inline]
#[must_use]
pub fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}
