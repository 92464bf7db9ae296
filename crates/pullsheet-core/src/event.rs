#![forbid(unsafe_code)]

//! Canonical pointer input.
//!
//! The host translates its native touch or mouse stream into
//! [`PointerEvent`] values. Only a single pointer is modelled; hosts with
//! multi-touch input forward the primary pointer and drop the rest.
//!
//! # Design Notes
//!
//! - Coordinates are logical points, origin at the top-left of the screen.
//! - A `Cancel` is delivered when the platform takes the pointer away
//!   (system gesture, focus loss), as opposed to the user lifting it.

/// The type of pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// Pointer pressed.
    Down,
    /// Pointer moved while pressed.
    Move,
    /// Pointer released.
    Up,
    /// Pointer interaction aborted by the platform.
    Cancel,
}

/// A single pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// The type of pointer event.
    pub kind: PointerEventKind,

    /// X coordinate in logical points.
    pub x: f64,

    /// Y coordinate in logical points (grows downward).
    pub y: f64,
}

impl PointerEvent {
    /// Create a new pointer event.
    #[must_use]
    pub const fn new(kind: PointerEventKind, x: f64, y: f64) -> Self {
        Self { kind, x, y }
    }

    /// Pointer pressed at `(x, y)`.
    #[must_use]
    pub const fn down(x: f64, y: f64) -> Self {
        Self::new(PointerEventKind::Down, x, y)
    }

    /// Pointer moved to `(x, y)`.
    #[must_use]
    pub const fn moved(x: f64, y: f64) -> Self {
        Self::new(PointerEventKind::Move, x, y)
    }

    /// Pointer released at `(x, y)`.
    #[must_use]
    pub const fn up(x: f64, y: f64) -> Self {
        Self::new(PointerEventKind::Up, x, y)
    }

    /// Pointer cancelled at `(x, y)`.
    #[must_use]
    pub const fn cancel(x: f64, y: f64) -> Self {
        Self::new(PointerEventKind::Cancel, x, y)
    }

    /// Get the position as a tuple.
    #[must_use]
    pub const fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}
