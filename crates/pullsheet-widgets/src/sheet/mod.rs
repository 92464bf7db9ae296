#![forbid(unsafe_code)]

//! Pull-to-dismiss bottom sheet.
//!
//! A sheet grows in from the bottom of the screen, follows the finger while
//! dragged, and closes when a release either pulled it far enough in one
//! session or left it at or below its resting line.
//!
//! # Components
//!
//! - [`PositionModel`]: offset, dimming, and drag baseline. Pure derivation.
//! - [`GestureInterpreter`]: the touch-driven state machine and the close
//!   decision.
//! - [`TransitionDriver`]: the scripted open and close transitions.
//! - [`PullSheet`]: the controller that wires the three together, routes
//!   pointer input, and fires `on_close`.
//!
//! # Single mutator
//!
//! At any instant exactly one of the interpreter and the driver writes the
//! position model. The interpreter writes only while armed; it is armed only
//! after the open transition completes and disarmed in the same step that
//! decides to close, before the close transition starts. No locks are
//! involved: the `armed` flag alone keeps the two paths apart.
//!
//! # Example
//!
//! ```ignore
//! use std::time::Duration;
//! use pullsheet_core::gesture::TouchSample;
//! use pullsheet_widgets::sheet::{PullSheet, SheetConfig};
//!
//! let config = SheetConfig::new(800.0, 0.25, 100.0);
//! let mut sheet = PullSheet::new(config, || println!("closed"))?;
//! sheet.mount(|region| region.wrap("content"))?;
//!
//! sheet.tick(Duration::from_millis(600)); // open transition done, armed
//! sheet.handle_touch(TouchSample::active(50.0));
//! sheet.handle_touch(TouchSample::end(50.0)); // below rest line: closing
//! sheet.tick(Duration::from_millis(300)); // prints "closed"
//! ```

mod config;
mod controller;
mod error;
mod interpreter;
mod position;
mod transition;

pub use config::{BackdropConfig, DEFAULT_EPSILON, SheetConfig};
pub use controller::{
    BackdropLayer, Captured, GestureRegion, PullSheet, SheetAction, SheetHit, SheetLayers,
    SurfaceLayer,
};
pub use error::SheetError;
pub use interpreter::{CloseReason, GestureInterpreter, GesturePhase};
pub use position::{PositionModel, Settle};
pub use transition::{TransitionDriver, TransitionEvent, TransitionPhase, TransitionSpec};
