#![forbid(unsafe_code)]

//! Structured logging hooks.
//!
//! With the `tracing` feature enabled, this module re-exports the `tracing`
//! macros so downstream crates can log through `pullsheet_core::debug!` and
//! friends without naming `tracing` themselves. Without the feature nothing
//! is exported and every call site is compiled out.
//!
//! Targets used across the workspace:
//!
//! | Target | Emitted by |
//! |--------|------------|
//! | [`TARGET_GESTURE`] | pan recognizer session boundaries |
//! | [`TARGET_SHEET`] | sheet phase changes and close decisions |

/// Log target for pan recognition.
pub const TARGET_GESTURE: &str = "pullsheet::gesture";

/// Log target for sheet lifecycle events.
pub const TARGET_SHEET: &str = "pullsheet::sheet";

#[cfg(feature = "tracing")]
pub use tracing::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
