#![forbid(unsafe_code)]

//! Core: touch input, easing curves, and tweened values.
//!
//! # Role in pullsheet
//! `pullsheet-core` is the input and timing layer. It owns the normalized
//! pointer events a host delivers, the pan recognizer that turns them into
//! vertical touch samples, and the tween primitive that scripted
//! transitions are built from.
//!
//! # Primary responsibilities
//! - **PointerEvent**: canonical single-pointer input (down, move, up, cancel).
//! - **PanRecognizer**: vertical pan sessions as `(phase, translation_y)` samples.
//! - **Tween**: value interpolation over a fixed duration with an easing curve.
//! - **FrameClock**: host timestamps to per-frame deltas.
//!
//! # How it fits in the system
//! `pullsheet-widgets` consumes [`gesture::TouchSample`] values and drives
//! the sheet state machine; its transitions are pairs of [`animation::Tween`]
//! channels advanced by the host's frame loop.

pub mod animation;
pub mod color;
pub mod event;
pub mod gesture;
pub mod logging;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
