#![forbid(unsafe_code)]

//! Surface controller: the sheet widget the host talks to.
//!
//! [`PullSheet`] owns the position model, the gesture interpreter, and the
//! transition driver, and decides which of the latter two is in charge:
//!
//! 1. [`mount`](PullSheet::mount) starts the open transition.
//! 2. When it completes, [`tick`](PullSheet::tick) arms the interpreter.
//! 3. Touch samples move the surface until a release or a backdrop tap
//!    decides to close; the interpreter is disarmed in that same step.
//! 4. The close transition runs; on its completion `on_close` fires once.
//!
//! All dismissal paths (pull threshold, rest line, backdrop tap, explicit
//! [`dismiss`](PullSheet::dismiss)) go through one close routine, which is
//! what makes `on_close` fire at most once.
//!
//! # Hit testing
//!
//! Like the modal container, the caller may pass the hit-test result of the
//! last rendered frame to [`handle_pointer`](PullSheet::handle_pointer).
//! Without one, the controller splits the screen at the surface's top edge:
//! above is backdrop, below is the gesture region.
//!
//! Failure modes:
//! - Events before mount or after close are ignored.
//! - `close_on_backdrop = false` turns backdrop taps into no-ops;
//!   [`dismiss`](PullSheet::dismiss) still works.

use std::time::Duration;

use pullsheet_core::animation::FrameClock;
use pullsheet_core::color::PackedRgba;
use pullsheet_core::event::{PointerEvent, PointerEventKind};
use pullsheet_core::gesture::{PanConfig, PanRecognizer, TouchSample};
use web_time::Instant;

use super::config::SheetConfig;
use super::error::{Result, SheetError};
use super::interpreter::{CloseReason, GestureInterpreter, GesturePhase};
use super::position::PositionModel;
use super::transition::{TransitionDriver, TransitionEvent, TransitionPhase};

/// Where a pointer event landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SheetHit {
    /// The dimmed area above the surface.
    Backdrop,
    /// Surface content outside the gesture region.
    Surface,
    /// Content wrapped by the [`GestureRegion`].
    Gesture,
}

/// Sheet action emitted by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetAction {
    /// Open transition finished; the sheet now follows drags.
    Opened,
    /// Dismissal decided; the close transition started.
    Dismissing(CloseReason),
    /// Close transition finished and `on_close` was invoked.
    Closed,
}

/// Gesture-capture handle passed to the content factory at mount.
///
/// Only the controller can create one. Content wraps whatever part of
/// itself should drag the sheet with [`wrap`](Self::wrap); the host reports
/// presses inside wrapped content as [`SheetHit::Gesture`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureRegion {
    _private: (),
}

impl GestureRegion {
    /// Mark `child` as gesture-capturing content.
    pub fn wrap<T>(self, child: T) -> Captured<T> {
        Captured { inner: child }
    }
}

/// Content wrapped by a [`GestureRegion`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captured<T> {
    inner: T,
}

impl<T> Captured<T> {
    pub fn get(&self) -> &T {
        &self.inner
    }

    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    pub fn into_inner(self) -> T {
        self.inner
    }
}

/// Backdrop to draw under the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackdropLayer {
    pub color: PackedRgba,
    /// Opacity in `[0.0, max_opacity]`.
    pub opacity: f32,
}

impl BackdropLayer {
    /// The backdrop color with the current opacity applied.
    pub fn fill(&self) -> PackedRgba {
        self.color.with_opacity(self.opacity)
    }
}

/// Surface to draw on top of the backdrop.
#[derive(Debug)]
pub struct SurfaceLayer<'a, C> {
    /// Top edge, in points from the top of the screen.
    pub top: f64,
    /// Height between the top edge and the bottom of the sheet area.
    pub visible_height: f64,
    pub content: &'a C,
}

// Only `&C` is copied, so no bound on `C`.
impl<C> Clone for SurfaceLayer<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for SurfaceLayer<'_, C> {}

/// Everything the host needs to render one frame.
#[derive(Debug)]
pub struct SheetLayers<'a, C> {
    pub backdrop: BackdropLayer,
    pub surface: SurfaceLayer<'a, C>,
}

impl<C> Clone for SheetLayers<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for SheetLayers<'_, C> {}

/// Pull-to-dismiss bottom sheet.
///
/// Invariants:
/// - Exactly one of the interpreter (armed) and the driver (animating)
///   writes the position model at a time.
/// - `on_close` is invoked at most once, on the tick that completes the
///   close transition.
/// - Once closed, every mutator is a no-op.
pub struct PullSheet<C> {
    config: SheetConfig,
    model: PositionModel,
    interpreter: GestureInterpreter,
    driver: TransitionDriver,
    recognizer: PanRecognizer,
    clock: FrameClock,
    content: Option<C>,
    on_close: Option<Box<dyn FnOnce()>>,
    backdrop_pressed: bool,
}

impl<C> std::fmt::Debug for PullSheet<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PullSheet")
            .field("model", &self.model)
            .field("gesture", &self.interpreter.phase())
            .field("transition", &self.driver.phase())
            .field("mounted", &self.content.is_some())
            .finish_non_exhaustive()
    }
}

impl<C> PullSheet<C> {
    /// Create an unmounted sheet.
    ///
    /// Fails if `config` does not validate.
    pub fn new(config: SheetConfig, on_close: impl FnOnce() + 'static) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            model: PositionModel::new(config.height, config.rest_offset()),
            interpreter: GestureInterpreter::from_config(&config),
            driver: TransitionDriver::new(config.transitions),
            recognizer: PanRecognizer::default(),
            clock: FrameClock::new(),
            content: None,
            on_close: Some(Box::new(on_close)),
            backdrop_pressed: false,
            config,
        })
    }

    /// Use a custom pan recognizer configuration (builder pattern).
    pub fn pan_config(mut self, pan: PanConfig) -> Self {
        self.recognizer = PanRecognizer::new(pan);
        self
    }

    /// Set reduced motion preference for transitions not yet started.
    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.driver.set_reduced_motion(enabled);
    }

    /// Build the content and start the open transition.
    ///
    /// The factory receives the gesture-capture region and returns the
    /// content to display.
    pub fn mount<F>(&mut self, factory: F) -> Result<()>
    where
        F: FnOnce(GestureRegion) -> C,
    {
        if self.content.is_some() || self.driver.phase() != TransitionPhase::Mounted {
            return Err(SheetError::AlreadyMounted);
        }
        self.content = Some(factory(GestureRegion { _private: () }));
        self.driver.start_open(&mut self.model);
        #[cfg(feature = "tracing")]
        tracing::info!(
            target: pullsheet_core::logging::TARGET_SHEET,
            height = self.config.height,
            rest_offset = self.config.rest_offset(),
            close_threshold = self.config.close_threshold,
            "sheet mounted"
        );
        Ok(())
    }

    /// Feed one touch sample from the gesture region.
    pub fn handle_touch(&mut self, sample: TouchSample) -> Option<SheetAction> {
        let reason = self.interpreter.evaluate(&mut self.model, sample)?;
        self.start_closing(reason)
    }

    /// Route a raw pointer event.
    ///
    /// `hit` is the host's hit-test result for the event, if it has one.
    pub fn handle_pointer(
        &mut self,
        event: &PointerEvent,
        hit: Option<SheetHit>,
    ) -> Option<SheetAction> {
        if !self.driver.phase().is_visible() {
            return None;
        }
        let hit = hit.unwrap_or_else(|| self.hit_test(event.y));

        match event.kind {
            PointerEventKind::Down => {
                self.backdrop_pressed = false;
                match hit {
                    SheetHit::Gesture => self.feed_recognizer(event),
                    SheetHit::Backdrop | SheetHit::Surface => {
                        // A press elsewhere ends any pan still tracked.
                        let action = self
                            .recognizer
                            .cancel()
                            .and_then(|sample| self.handle_touch(sample));
                        self.backdrop_pressed = hit == SheetHit::Backdrop;
                        action
                    }
                }
            }
            PointerEventKind::Move | PointerEventKind::Up | PointerEventKind::Cancel => {
                // A pan keeps the pointer captured wherever it goes.
                if self.recognizer.is_tracking() {
                    return self.feed_recognizer(event);
                }
                if event.kind == PointerEventKind::Move || !self.backdrop_pressed {
                    return None;
                }
                self.backdrop_pressed = false;
                if event.kind == PointerEventKind::Up && hit == SheetHit::Backdrop {
                    self.tap_backdrop()
                } else {
                    None
                }
            }
        }
    }

    fn feed_recognizer(&mut self, event: &PointerEvent) -> Option<SheetAction> {
        let mut action = None;
        for sample in self.recognizer.process(event) {
            action = self.handle_touch(sample).or(action);
        }
        action
    }

    /// Default hit test: split at the surface's current top edge.
    pub fn hit_test(&self, y: f64) -> SheetHit {
        if y < self.model.offset() {
            SheetHit::Backdrop
        } else {
            SheetHit::Gesture
        }
    }

    /// Backdrop tapped. Dismisses unless `close_on_backdrop` is off.
    pub fn tap_backdrop(&mut self) -> Option<SheetAction> {
        if !self.config.close_on_backdrop {
            return None;
        }
        self.dismiss()
    }

    /// Dismiss without a gesture, from any state before closing.
    pub fn dismiss(&mut self) -> Option<SheetAction> {
        if !self.interpreter.dismiss() {
            return None;
        }
        self.start_closing(CloseReason::Manual)
    }

    /// Advance scripted transitions by `dt`.
    pub fn tick(&mut self, dt: Duration) -> Option<SheetAction> {
        match self.driver.tick(dt, &mut self.model)? {
            TransitionEvent::Opened => {
                self.interpreter.arm();
                Some(SheetAction::Opened)
            }
            TransitionEvent::Closed => {
                if let Some(on_close) = self.on_close.take() {
                    #[cfg(feature = "tracing")]
                    tracing::info!(target: pullsheet_core::logging::TARGET_SHEET, "sheet closed");
                    on_close();
                }
                Some(SheetAction::Closed)
            }
        }
    }

    /// Advance scripted transitions to the frame at `now`.
    pub fn tick_at(&mut self, now: Instant) -> Option<SheetAction> {
        let dt = self.clock.advance(now);
        self.tick(dt)
    }

    /// Describe the current frame, if anything is visible.
    pub fn layers(&self) -> Option<SheetLayers<'_, C>> {
        if !self.driver.phase().is_visible() {
            return None;
        }
        let content = self.content.as_ref()?;
        let top = self.model.offset();
        Some(SheetLayers {
            backdrop: BackdropLayer {
                color: self.config.backdrop.color,
                opacity: self.config.backdrop.opacity_for(self.model.dim()),
            },
            surface: SurfaceLayer {
                top,
                visible_height: (self.model.height() - top).max(0.0),
                content,
            },
        })
    }

    fn start_closing(&mut self, reason: CloseReason) -> Option<SheetAction> {
        // The interpreter is already disarmed and would ignore the rest of
        // the session.
        self.recognizer.reset();
        self.backdrop_pressed = false;
        if !self.driver.start_close(&self.model) {
            return None;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: pullsheet_core::logging::TARGET_SHEET,
            ?reason,
            "sheet dismissing"
        );
        Some(SheetAction::Dismissing(reason))
    }

    // --- Accessors ---

    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    pub fn model(&self) -> &PositionModel {
        &self.model
    }

    pub fn offset(&self) -> f64 {
        self.model.offset()
    }

    pub fn dim(&self) -> f64 {
        self.model.dim()
    }

    pub fn transition_phase(&self) -> TransitionPhase {
        self.driver.phase()
    }

    pub fn gesture_phase(&self) -> GesturePhase {
        self.interpreter.phase()
    }

    pub fn is_armed(&self) -> bool {
        self.interpreter.is_armed()
    }

    pub fn is_mounted(&self) -> bool {
        self.content.is_some()
    }

    /// Whether `on_close` has fired.
    pub fn is_closed(&self) -> bool {
        self.driver.phase() == TransitionPhase::Closed
    }

    pub fn content(&self) -> Option<&C> {
        self.content.as_ref()
    }

    pub fn content_mut(&mut self) -> Option<&mut C> {
        self.content.as_mut()
    }
}
