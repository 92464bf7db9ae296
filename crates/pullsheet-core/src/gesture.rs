#![forbid(unsafe_code)]

//! Pan recognition: turns raw pointer events into vertical touch samples.
//!
//! [`PanRecognizer`] tracks one press → move → release interaction and
//! reports it as a stream of [`TouchSample`]s carrying the cumulative
//! vertical translation since the press.
//!
//! # State Machine
//!
//! ```text
//!   Down ──► tracking ──(|dy| ≥ activation)──► active ──Up──► End
//!               │                                 │
//!               └──Up/Cancel──► Cancelled          └──Cancel──► Cancelled
//! ```
//!
//! # Invariants
//!
//! 1. Every session starts with exactly one `Begin` and ends with exactly
//!    one `End` or `Cancelled`.
//! 2. `Active` and `End` samples only occur after the activation distance
//!    was reached; a press that never moves far enough ends `Cancelled`.
//! 3. `translation_y` is cumulative since the press, never a per-event delta.
//! 4. At most one session is tracked; a `Down` while tracking emits the old
//!    session's `Cancelled` before the new `Begin`.
//!
//! # Failure Modes
//!
//! - `Move`/`Up`/`Cancel` without a prior `Down` are ignored.

use crate::event::{PointerEvent, PointerEventKind};

// ---------------------------------------------------------------------------
// Touch stream
// ---------------------------------------------------------------------------

/// Phase of a touch sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    /// Pointer pressed; session opened.
    Begin,
    /// Pan in progress.
    Active,
    /// Pointer released after an active pan.
    End,
    /// Session aborted without completing a pan.
    Cancelled,
}

/// One sample of the vertical touch stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchSample {
    /// Session phase.
    pub phase: TouchPhase,
    /// Cumulative vertical translation since the session began.
    pub translation_y: f64,
}

impl TouchSample {
    /// Create a sample.
    #[must_use]
    pub const fn new(phase: TouchPhase, translation_y: f64) -> Self {
        Self {
            phase,
            translation_y,
        }
    }

    #[must_use]
    pub const fn begin() -> Self {
        Self::new(TouchPhase::Begin, 0.0)
    }

    #[must_use]
    pub const fn active(translation_y: f64) -> Self {
        Self::new(TouchPhase::Active, translation_y)
    }

    #[must_use]
    pub const fn end(translation_y: f64) -> Self {
        Self::new(TouchPhase::End, translation_y)
    }

    #[must_use]
    pub const fn cancelled(translation_y: f64) -> Self {
        Self::new(TouchPhase::Cancelled, translation_y)
    }
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Thresholds for pan recognition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanConfig {
    /// Minimum vertical travel (points) before the pan becomes active
    /// (default: 0, active on the first move).
    pub activation_distance: f64,
}

impl Default for PanConfig {
    fn default() -> Self {
        Self {
            activation_distance: 0.0,
        }
    }
}

impl PanConfig {
    /// Set the activation distance. Negative values are treated as zero.
    #[must_use]
    pub fn activation_distance(mut self, distance: f64) -> Self {
        self.activation_distance = distance.max(0.0);
        self
    }
}

// ---------------------------------------------------------------------------
// PanRecognizer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
struct PanTracker {
    start_y: f64,
    translation_y: f64,
    active: bool,
}

/// Stateful vertical pan recognizer.
///
/// Call [`process`](PanRecognizer::process) for each incoming
/// [`PointerEvent`] and forward the returned [`TouchSample`]s in order.
#[derive(Debug, Clone, Default)]
pub struct PanRecognizer {
    config: PanConfig,
    tracker: Option<PanTracker>,
}

impl PanRecognizer {
    /// Create a recognizer with the given configuration.
    #[must_use]
    pub fn new(config: PanConfig) -> Self {
        Self {
            config,
            tracker: None,
        }
    }

    /// Process a raw pointer event, returning the touch samples it produces.
    ///
    /// Most events yield zero or one sample. A `Down` while a session is
    /// tracked yields two: the old session's `Cancelled`, then `Begin`.
    pub fn process(&mut self, event: &PointerEvent) -> Vec<TouchSample> {
        let mut samples = Vec::new();
        match event.kind {
            PointerEventKind::Down => {
                samples.extend(self.cancel());
                self.tracker = Some(PanTracker {
                    start_y: event.y,
                    translation_y: 0.0,
                    active: false,
                });
                #[cfg(feature = "tracing")]
                crate::trace!(target: crate::logging::TARGET_GESTURE, y = event.y, "pan begin");
                samples.push(TouchSample::begin());
            }
            PointerEventKind::Move => {
                let activation = self.config.activation_distance;
                if let Some(tracker) = self.tracker.as_mut() {
                    tracker.translation_y = event.y - tracker.start_y;
                    if !tracker.active && tracker.translation_y.abs() >= activation {
                        tracker.active = true;
                    }
                    if tracker.active {
                        samples.push(TouchSample::active(tracker.translation_y));
                    }
                }
            }
            PointerEventKind::Up => {
                if let Some(mut tracker) = self.tracker.take() {
                    tracker.translation_y = event.y - tracker.start_y;
                    #[cfg(feature = "tracing")]
                    crate::trace!(
                        target: crate::logging::TARGET_GESTURE,
                        translation_y = tracker.translation_y,
                        active = tracker.active,
                        "pan release"
                    );
                    samples.push(if tracker.active {
                        TouchSample::end(tracker.translation_y)
                    } else {
                        TouchSample::cancelled(tracker.translation_y)
                    });
                }
            }
            PointerEventKind::Cancel => samples.extend(self.cancel()),
        }
        samples
    }

    /// End the tracked session, if any, with a `Cancelled` sample.
    pub fn cancel(&mut self) -> Option<TouchSample> {
        let tracker = self.tracker.take()?;
        #[cfg(feature = "tracing")]
        crate::trace!(
            target: crate::logging::TARGET_GESTURE,
            translation_y = tracker.translation_y,
            "pan cancelled"
        );
        Some(TouchSample::cancelled(tracker.translation_y))
    }

    /// Whether a press is currently being tracked.
    #[inline]
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.tracker.is_some()
    }

    /// Whether the tracked press has become an active pan.
    #[inline]
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.tracker.is_some_and(|t| t.active)
    }

    /// Drop any in-progress session without emitting a sample.
    pub fn reset(&mut self) {
        self.tracker = None;
    }

    /// Get a reference to the current configuration.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &PanConfig {
        &self.config
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn recognizer() -> PanRecognizer {
        PanRecognizer::new(PanConfig::default())
    }

    #[test]
    fn press_emits_begin() {
        let mut pan = recognizer();
        assert_eq!(
            pan.process(&PointerEvent::down(10.0, 300.0)),
            vec![TouchSample::begin()]
        );
        assert!(pan.is_tracking());
        assert!(!pan.is_panning());
    }

    #[test]
    fn moves_report_cumulative_translation() {
        let mut pan = recognizer();
        pan.process(&PointerEvent::down(0.0, 300.0));
        assert_eq!(
            pan.process(&PointerEvent::moved(0.0, 310.0)),
            vec![TouchSample::active(10.0)]
        );
        assert_eq!(
            pan.process(&PointerEvent::moved(0.0, 350.0)),
            vec![TouchSample::active(50.0)]
        );
        assert_eq!(
            pan.process(&PointerEvent::moved(0.0, 270.0)),
            vec![TouchSample::active(-30.0)]
        );
    }

    #[test]
    fn release_after_pan_emits_end() {
        let mut pan = recognizer();
        pan.process(&PointerEvent::down(0.0, 300.0));
        pan.process(&PointerEvent::moved(0.0, 340.0));
        assert_eq!(
            pan.process(&PointerEvent::up(0.0, 350.0)),
            vec![TouchSample::end(50.0)]
        );
        assert!(!pan.is_tracking());
    }

    #[test]
    fn activation_distance_gates_active() {
        let mut pan = PanRecognizer::new(PanConfig::default().activation_distance(8.0));
        pan.process(&PointerEvent::down(0.0, 100.0));
        assert!(pan.process(&PointerEvent::moved(0.0, 105.0)).is_empty());
        assert_eq!(
            pan.process(&PointerEvent::moved(0.0, 108.0)),
            vec![TouchSample::active(8.0)]
        );
        // Once active, small moves still report.
        assert_eq!(
            pan.process(&PointerEvent::moved(0.0, 101.0)),
            vec![TouchSample::active(1.0)]
        );
    }

    #[test]
    fn release_without_activation_is_cancelled() {
        let mut pan = PanRecognizer::new(PanConfig::default().activation_distance(8.0));
        pan.process(&PointerEvent::down(0.0, 100.0));
        pan.process(&PointerEvent::moved(0.0, 103.0));
        assert_eq!(
            pan.process(&PointerEvent::up(0.0, 103.0)),
            vec![TouchSample::cancelled(3.0)]
        );
    }

    #[test]
    fn cancel_ends_session() {
        let mut pan = recognizer();
        pan.process(&PointerEvent::down(0.0, 100.0));
        pan.process(&PointerEvent::moved(0.0, 140.0));
        assert_eq!(
            pan.process(&PointerEvent::cancel(0.0, 140.0)),
            vec![TouchSample::cancelled(40.0)]
        );
        assert!(!pan.is_tracking());
    }

    #[test]
    fn events_without_press_are_ignored() {
        let mut pan = recognizer();
        assert!(pan.process(&PointerEvent::moved(0.0, 10.0)).is_empty());
        assert!(pan.process(&PointerEvent::up(0.0, 10.0)).is_empty());
        assert!(pan.process(&PointerEvent::cancel(0.0, 10.0)).is_empty());
        assert_eq!(pan.cancel(), None);
    }

    #[test]
    fn second_press_cancels_old_session() {
        let mut pan = recognizer();
        pan.process(&PointerEvent::down(0.0, 100.0));
        pan.process(&PointerEvent::moved(0.0, 150.0));
        assert_eq!(
            pan.process(&PointerEvent::down(0.0, 400.0)),
            vec![TouchSample::cancelled(50.0), TouchSample::begin()]
        );
        assert!(!pan.is_panning());
        assert_eq!(
            pan.process(&PointerEvent::moved(0.0, 410.0)),
            vec![TouchSample::active(10.0)]
        );
    }

    #[test]
    fn reset_drops_session_silently() {
        let mut pan = recognizer();
        pan.process(&PointerEvent::down(0.0, 100.0));
        pan.reset();
        assert!(!pan.is_tracking());
        assert!(pan.process(&PointerEvent::up(0.0, 120.0)).is_empty());
    }

    #[test]
    fn cancel_reports_last_translation() {
        let mut pan = recognizer();
        pan.process(&PointerEvent::down(0.0, 100.0));
        pan.process(&PointerEvent::moved(0.0, 70.0));
        assert_eq!(pan.cancel(), Some(TouchSample::cancelled(-30.0)));
        assert!(!pan.is_tracking());
        assert_eq!(pan.cancel(), None);
    }

    #[test]
    fn negative_activation_distance_clamped() {
        let config = PanConfig::default().activation_distance(-4.0);
        assert_eq!(config.activation_distance, 0.0);
    }
}
