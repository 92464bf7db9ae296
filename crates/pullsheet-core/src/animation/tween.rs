#![forbid(unsafe_code)]

//! Tween: one value interpolated from a start to a target over a fixed
//! duration, shaped by an easing curve.
//!
//! A [`Tween`] is a single animated channel. It reports its interpolated
//! value through [`position`](Tween::position) and signals completion
//! through [`is_complete`](Animation::is_complete) exactly when the elapsed
//! time reaches the duration.
//!
//! # Usage
//!
//! ```ignore
//! use std::time::Duration;
//! use pullsheet_core::animation::{Animation, Tween, ease_out_cubic};
//!
//! let mut offset = Tween::new(800.0, 200.0, Duration::from_millis(600))
//!     .easing(ease_out_cubic);
//! offset.play();
//! offset.tick(Duration::from_millis(600));
//! assert_eq!(offset.position(), 200.0);
//!
//! // Same channel, second transition.
//! offset.retarget(offset.position(), 800.0, Duration::from_millis(300), ease_in_cubic);
//! ```
//!
//! # Invariants
//!
//! 1. `position()` equals `from` while idle and exactly `to` once finished.
//! 2. `tick()` only advances a tween in `Playing` state.
//! 3. `retarget()` restarts playback from the new start value; the previous
//!    transition is discarded without completing.
//!
//! # Failure Modes
//!
//! - Zero duration: clamped to 1ns, so the tween finishes on the first
//!   non-zero tick.

use std::time::Duration;

use super::{Animation, EasingFn, linear};

/// Playback state of a tween.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// Not yet started.
    Idle,
    /// Actively playing.
    Playing,
    /// Reached the target.
    Finished,
}

/// A single eased value channel.
#[derive(Debug, Clone, Copy)]
pub struct Tween {
    from: f64,
    to: f64,
    duration: Duration,
    easing: EasingFn,
    state: PlaybackState,
    elapsed: Duration,
}

fn clamp_duration(d: Duration) -> Duration {
    if d.is_zero() {
        Duration::from_nanos(1)
    } else {
        d
    }
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

impl Tween {
    /// Create an idle tween from `from` to `to` with linear easing.
    #[must_use]
    pub fn new(from: f64, to: f64, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration: clamp_duration(duration),
            easing: linear,
            state: PlaybackState::Idle,
            elapsed: Duration::ZERO,
        }
    }

    /// A tween that is already finished and sitting at `value`.
    #[must_use]
    pub fn settled(value: f64) -> Self {
        Self {
            state: PlaybackState::Finished,
            ..Self::new(value, value, Duration::ZERO)
        }
    }

    /// Set the easing curve (builder pattern).
    #[must_use]
    pub fn easing(mut self, easing: EasingFn) -> Self {
        self.easing = easing;
        self
    }
}

// ---------------------------------------------------------------------------
// Playback control
// ---------------------------------------------------------------------------

impl Tween {
    /// Start or restart playback from `from`.
    pub fn play(&mut self) {
        self.elapsed = Duration::ZERO;
        self.state = PlaybackState::Playing;
    }

    /// Replace the transition on this channel and start playing it.
    ///
    /// Used to run a second transition on a channel whose first transition
    /// may or may not have finished. Pass the current
    /// [`position`](Self::position) as `from` for a continuous handoff.
    pub fn retarget(&mut self, from: f64, to: f64, duration: Duration, easing: EasingFn) {
        self.from = from;
        self.to = to;
        self.duration = clamp_duration(duration);
        self.easing = easing;
        self.play();
    }

    /// Stop playback and return to the start value.
    pub fn stop(&mut self) {
        self.state = PlaybackState::Idle;
        self.elapsed = Duration::ZERO;
    }

    /// Linear progress in `[0.0, 1.0]`.
    #[inline]
    #[must_use]
    pub fn progress(&self) -> f32 {
        match self.state {
            PlaybackState::Idle => 0.0,
            PlaybackState::Finished => 1.0,
            PlaybackState::Playing => {
                let t = self.elapsed.as_secs_f64() / self.duration.as_secs_f64();
                (t as f32).clamp(0.0, 1.0)
            }
        }
    }

    /// Eased progress in `[0.0, 1.0]` for monotonic curves.
    #[inline]
    #[must_use]
    pub fn eased_progress(&self) -> f32 {
        (self.easing)(self.progress())
    }

    /// Current interpolated value.
    #[must_use]
    pub fn position(&self) -> f64 {
        match self.state {
            PlaybackState::Idle => self.from,
            PlaybackState::Finished => self.to,
            PlaybackState::Playing => {
                let eased = f64::from(self.eased_progress());
                self.from + (self.to - self.from) * eased
            }
        }
    }

    /// Current playback state.
    #[inline]
    #[must_use]
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Start value of the current transition.
    #[inline]
    #[must_use]
    pub fn from(&self) -> f64 {
        self.from
    }

    /// Target value of the current transition.
    #[inline]
    #[must_use]
    pub fn to(&self) -> f64 {
        self.to
    }

    /// Time played so far.
    #[inline]
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Total duration.
    #[inline]
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

// ---------------------------------------------------------------------------
// Animation trait implementation
// ---------------------------------------------------------------------------

impl Animation for Tween {
    fn tick(&mut self, dt: Duration) {
        if self.state != PlaybackState::Playing {
            return;
        }
        self.elapsed = self.elapsed.saturating_add(dt);
        if self.elapsed >= self.duration {
            self.state = PlaybackState::Finished;
        }
    }

    fn is_complete(&self) -> bool {
        self.state == PlaybackState::Finished
    }

    fn value(&self) -> f32 {
        self.eased_progress()
    }

    fn reset(&mut self) {
        self.stop();
    }

    fn overshoot(&self) -> Duration {
        if self.state == PlaybackState::Finished {
            self.elapsed.saturating_sub(self.duration)
        } else {
            Duration::ZERO
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
