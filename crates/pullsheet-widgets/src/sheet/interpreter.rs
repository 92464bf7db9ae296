#![forbid(unsafe_code)]

//! Gesture interpreter: the touch-driven state machine.
//!
//! Consumes [`TouchSample`]s, writes the [`PositionModel`] while armed, and
//! decides on each release whether the sheet closes.
//!
//! # State machine
//!
//! ```text
//!  Idle ──arm()──► Ready ──Begin/Active──► Dragging ──End──► (settle)
//!                    ▲                        │                 │
//!                    └──────Cancelled─────────┘                 │
//!                    └────────────── no close ◄─────────────────┤
//!                                                               ▼
//!  any ──dismiss()────────────────────────────────────────────► Closing
//! ```
//!
//! Settling is the synchronous body of the `End` evaluation: commit the
//! baseline, decide, and either return to `Ready` or enter `Closing`. It is
//! never observable between calls.
//!
//! # Close decision
//!
//! A release closes the sheet when either
//! - the session's net pull (`baseline - previous_baseline`) reached the
//!   close threshold, or
//! - the new baseline is at or below the rest line.
//!
//! Both comparisons are inclusive and tolerate `epsilon` of float error.
//!
//! # Invariants
//!
//! 1. The model is only written while armed.
//! 2. `armed` is cleared in the same call that decides to close, before the
//!    caller can start the close transition.
//! 3. `Closing` is terminal: no sample or dismissal leaves it.
//! 4. A release that does not close leaves the surface where it is; there is
//!    no snap back.
//! 5. A cancelled session neither commits nor decides. The surface returns to
//!    where the session found it, so the next session starts from what is
//!    on screen.

use pullsheet_core::gesture::{TouchPhase, TouchSample};

use super::config::SheetConfig;
use super::position::{PositionModel, Settle};

/// Interpreter state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    /// Not armed yet; the open transition is still running.
    #[default]
    Idle,
    /// Armed and waiting for the next drag session.
    Ready,
    /// A drag session is in progress.
    Dragging,
    /// Dismissal decided; terminal.
    Closing,
}

/// Why the sheet is closing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CloseReason {
    /// One session pulled the sheet down by at least the close threshold.
    PullThreshold,
    /// A release left the sheet at or below its rest line.
    RestLine,
    /// Dismissed without a gesture (backdrop tap or host request).
    Manual,
}

/// `a >= b`, forgiving `epsilon` of float error.
#[inline]
fn at_least(a: f64, b: f64, epsilon: f64) -> bool {
    a >= b - epsilon
}

/// Touch-driven state machine for one sheet.
#[derive(Debug, Clone)]
pub struct GestureInterpreter {
    phase: GesturePhase,
    armed: bool,
    rest_offset: f64,
    close_threshold: f64,
    epsilon: f64,
}

impl GestureInterpreter {
    /// Create a disarmed interpreter.
    pub fn new(rest_offset: f64, close_threshold: f64, epsilon: f64) -> Self {
        Self {
            phase: GesturePhase::Idle,
            armed: false,
            rest_offset,
            close_threshold,
            epsilon,
        }
    }

    /// Create an interpreter from a validated config.
    pub fn from_config(config: &SheetConfig) -> Self {
        Self::new(config.rest_offset(), config.close_threshold, config.epsilon)
    }

    #[inline]
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Whether samples may currently mutate the position model.
    #[inline]
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    #[inline]
    pub fn is_closing(&self) -> bool {
        self.phase == GesturePhase::Closing
    }

    /// Start accepting samples. Only valid from `Idle`; returns whether the
    /// interpreter was armed.
    pub fn arm(&mut self) -> bool {
        if self.phase != GesturePhase::Idle {
            return false;
        }
        self.phase = GesturePhase::Ready;
        self.armed = true;
        true
    }

    /// Evaluate one touch sample.
    ///
    /// Returns the close reason when this sample decided to dismiss. Samples
    /// arriving while disarmed are ignored.
    pub fn evaluate(
        &mut self,
        model: &mut PositionModel,
        sample: TouchSample,
    ) -> Option<CloseReason> {
        if !self.armed {
            #[cfg(feature = "tracing")]
            tracing::trace!(
                target: pullsheet_core::logging::TARGET_SHEET,
                phase = ?sample.phase,
                state = ?self.phase,
                "touch sample ignored while disarmed"
            );
            return None;
        }

        match sample.phase {
            TouchPhase::Begin => {
                self.phase = GesturePhase::Dragging;
                None
            }
            TouchPhase::Active => {
                self.phase = GesturePhase::Dragging;
                model.drag_to(sample.translation_y);
                None
            }
            TouchPhase::End => {
                let settle = model.commit(sample.translation_y);
                let reason = self.decide(&settle);
                if reason.is_some() {
                    self.armed = false;
                    self.phase = GesturePhase::Closing;
                } else {
                    self.phase = GesturePhase::Ready;
                }
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    target: pullsheet_core::logging::TARGET_SHEET,
                    pull = settle.pull(),
                    baseline = settle.baseline,
                    close = ?reason,
                    "drag settled"
                );
                reason
            }
            TouchPhase::Cancelled => {
                model.cancel();
                self.phase = GesturePhase::Ready;
                None
            }
        }
    }

    /// The close decision for a committed session.
    ///
    /// When both criteria hold the pull threshold is reported.
    pub fn decide(&self, settle: &Settle) -> Option<CloseReason> {
        if at_least(settle.pull(), self.close_threshold, self.epsilon) {
            Some(CloseReason::PullThreshold)
        } else if at_least(settle.baseline, self.rest_offset, self.epsilon) {
            Some(CloseReason::RestLine)
        } else {
            None
        }
    }

    /// Manual dismissal. Returns `false` if already closing.
    pub fn dismiss(&mut self) -> bool {
        if self.phase == GesturePhase::Closing {
            return false;
        }
        self.armed = false;
        self.phase = GesturePhase::Closing;
        true
    }
}
