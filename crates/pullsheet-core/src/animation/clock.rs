#![forbid(unsafe_code)]

//! Frame clock: converts host timestamps into per-frame deltas.
//!
//! Hosts that only know "now" on each frame feed timestamps here and pass
//! the returned delta to `tick()`. Long stalls (backgrounded app, debugger
//! pause) are capped so a transition never jumps straight to its end because
//! of a single late frame.

use std::time::Duration;

use web_time::Instant;

/// Default cap on a single frame delta.
const DEFAULT_MAX_DELTA: Duration = Duration::from_millis(100);

/// Tracks the previous frame timestamp.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    last: Option<Instant>,
    max_delta: Duration,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// Create a clock with the default 100ms delta cap.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last: None,
            max_delta: DEFAULT_MAX_DELTA,
        }
    }

    /// Set the maximum delta returned by [`advance`](Self::advance).
    #[must_use]
    pub const fn with_max_delta(mut self, max_delta: Duration) -> Self {
        self.max_delta = max_delta;
        self
    }

    /// Record a frame at `now` and return the time since the previous frame.
    ///
    /// The first frame returns `Duration::ZERO`. Timestamps that go
    /// backwards also yield zero.
    pub fn advance(&mut self, now: Instant) -> Duration {
        let dt = match self.last {
            Some(last) => now.saturating_duration_since(last),
            None => Duration::ZERO,
        };
        self.last = Some(now);
        dt.min(self.max_delta)
    }

    /// Forget the previous frame.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
