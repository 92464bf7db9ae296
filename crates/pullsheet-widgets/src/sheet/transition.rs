#![forbid(unsafe_code)]

//! Scripted open and close transitions.
//!
//! The driver animates two channels in parallel, the surface offset and the
//! backdrop dimming, each with its own [`Tween`]:
//!
//! | Transition | Duration | Easing | dim | offset |
//! |------------|----------|--------|-----|--------|
//! | open | 600ms | out-cubic | 0 → 1 | height → rest |
//! | close | 300ms | in-cubic | current → 0 | current → height |
//!
//! # Phases
//!
//! `Mounted → Opening → Open → Closing → Closed`. Closing may also start
//! from `Mounted` or `Opening`; the close transition then departs from
//! whatever values the channels currently hold. There is no way back out of
//! `Closing`.
//!
//! # Invariants
//!
//! - The driver writes the position model only while a transition is in
//!   flight, so it never competes with the gesture interpreter.
//! - Each transition reports its completion event exactly once.
//!
//! # Failure Modes
//!
//! - Zero durations (reduced motion) complete on the next non-zero tick.

use std::time::Duration;

use pullsheet_core::animation::{Animation, EasingFn, Tween, ease_in_cubic, ease_out_cubic};

use super::position::PositionModel;

// ============================================================================
// Phase
// ============================================================================

/// Lifecycle phase of the scripted transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionPhase {
    /// Created but not yet opened; parked below the screen.
    #[default]
    Mounted,
    /// Open transition in flight.
    Opening,
    /// Open transition finished; gestures are in charge.
    Open,
    /// Close transition in flight.
    Closing,
    /// Close transition finished.
    Closed,
}

impl TransitionPhase {
    /// Whether the surface should be rendered.
    #[inline]
    pub fn is_visible(self) -> bool {
        matches!(self, Self::Opening | Self::Open | Self::Closing)
    }

    /// Whether a transition is in progress.
    #[inline]
    pub fn is_animating(self) -> bool {
        matches!(self, Self::Opening | Self::Closing)
    }
}

/// Completion of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionEvent {
    /// Open transition completed.
    Opened,
    /// Close transition completed.
    Closed,
}

// ============================================================================
// Configuration
// ============================================================================

/// Durations and easing curves for both transitions.
#[derive(Debug, Clone, Copy)]
pub struct TransitionSpec {
    pub open_duration: Duration,
    pub close_duration: Duration,
    pub open_easing: EasingFn,
    pub close_easing: EasingFn,
    /// Whether to honour the host's reduced-motion preference.
    pub respect_reduced_motion: bool,
}

impl Default for TransitionSpec {
    fn default() -> Self {
        Self {
            open_duration: Duration::from_millis(600),
            close_duration: Duration::from_millis(300),
            open_easing: ease_out_cubic,
            close_easing: ease_in_cubic,
            respect_reduced_motion: true,
        }
    }
}

impl TransitionSpec {
    /// Create the default spec.
    pub fn new() -> Self {
        Self::default()
    }

    /// Instant transitions.
    pub fn none() -> Self {
        Self {
            open_duration: Duration::ZERO,
            close_duration: Duration::ZERO,
            ..Default::default()
        }
    }

    /// Set open duration.
    pub fn open_duration(mut self, duration: Duration) -> Self {
        self.open_duration = duration;
        self
    }

    /// Set close duration.
    pub fn close_duration(mut self, duration: Duration) -> Self {
        self.close_duration = duration;
        self
    }

    /// Set open easing.
    pub fn open_easing(mut self, easing: EasingFn) -> Self {
        self.open_easing = easing;
        self
    }

    /// Set close easing.
    pub fn close_easing(mut self, easing: EasingFn) -> Self {
        self.close_easing = easing;
        self
    }

    /// Set whether to respect reduced-motion preference.
    pub fn respect_reduced_motion(mut self, respect: bool) -> Self {
        self.respect_reduced_motion = respect;
        self
    }

    /// Get the effective spec, applying reduced motion if needed.
    pub fn effective(&self, reduced_motion: bool) -> Self {
        if reduced_motion && self.respect_reduced_motion {
            Self {
                respect_reduced_motion: self.respect_reduced_motion,
                ..Self::none()
            }
        } else {
            *self
        }
    }
}

// ============================================================================
// Driver
// ============================================================================

/// Runs the open and close transitions against a [`PositionModel`].
#[derive(Debug, Clone)]
pub struct TransitionDriver {
    phase: TransitionPhase,
    spec: TransitionSpec,
    reduced_motion: bool,
    offset: Tween,
    dim: Tween,
}

impl TransitionDriver {
    /// Create a driver parked in `Mounted`.
    pub fn new(spec: TransitionSpec) -> Self {
        Self {
            phase: TransitionPhase::Mounted,
            spec,
            reduced_motion: false,
            offset: Tween::settled(0.0),
            dim: Tween::settled(0.0),
        }
    }

    #[inline]
    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    #[inline]
    pub fn spec(&self) -> &TransitionSpec {
        &self.spec
    }

    /// Set reduced motion preference. Applies to transitions started later.
    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.reduced_motion = enabled;
    }

    /// Start the open transition. Only valid from `Mounted`.
    pub fn start_open(&mut self, model: &mut PositionModel) -> bool {
        if self.phase != TransitionPhase::Mounted {
            return false;
        }
        let spec = self.spec.effective(self.reduced_motion);
        model.set_offset(model.height());
        model.set_dim(0.0);
        self.offset.retarget(
            model.height(),
            model.rest_offset(),
            spec.open_duration,
            spec.open_easing,
        );
        self.dim
            .retarget(0.0, 1.0, spec.open_duration, spec.open_easing);
        self.phase = TransitionPhase::Opening;
        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: pullsheet_core::logging::TARGET_SHEET,
            duration_ms = spec.open_duration.as_millis() as u64,
            "open transition started"
        );
        true
    }

    /// Start the close transition from the model's current values.
    ///
    /// Supersedes an in-flight open transition. Returns `false` when already
    /// closing or closed.
    pub fn start_close(&mut self, model: &PositionModel) -> bool {
        if matches!(
            self.phase,
            TransitionPhase::Closing | TransitionPhase::Closed
        ) {
            return false;
        }
        let spec = self.spec.effective(self.reduced_motion);
        self.offset.retarget(
            model.offset(),
            model.height(),
            spec.close_duration,
            spec.close_easing,
        );
        self.dim
            .retarget(model.dim(), 0.0, spec.close_duration, spec.close_easing);
        self.phase = TransitionPhase::Closing;
        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: pullsheet_core::logging::TARGET_SHEET,
            from_offset = model.offset(),
            duration_ms = spec.close_duration.as_millis() as u64,
            "close transition started"
        );
        true
    }

    /// Advance the in-flight transition by `dt`, writing both channels into
    /// the model.
    ///
    /// Returns the completion event on the tick that finishes a transition.
    pub fn tick(&mut self, dt: Duration, model: &mut PositionModel) -> Option<TransitionEvent> {
        if !self.phase.is_animating() {
            return None;
        }

        self.offset.tick(dt);
        self.dim.tick(dt);
        model.set_offset(self.offset.position());
        model.set_dim(self.dim.position());

        if !(self.offset.is_complete() && self.dim.is_complete()) {
            return None;
        }

        let event = match self.phase {
            TransitionPhase::Opening => {
                self.phase = TransitionPhase::Open;
                TransitionEvent::Opened
            }
            _ => {
                self.phase = TransitionPhase::Closed;
                TransitionEvent::Closed
            }
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: pullsheet_core::logging::TARGET_SHEET,
            ?event,
            "transition finished"
        );
        Some(event)
    }

    /// Eased progress of the in-flight transition, 1.0 when settled.
    pub fn progress(&self) -> f32 {
        match self.phase {
            TransitionPhase::Mounted => 0.0,
            TransitionPhase::Opening | TransitionPhase::Closing => self.offset.value(),
            TransitionPhase::Open | TransitionPhase::Closed => 1.0,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
