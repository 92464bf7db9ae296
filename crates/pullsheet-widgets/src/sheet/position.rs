#![forbid(unsafe_code)]

//! Position model: where the surface sits and how dim the backdrop is.
//!
//! # Derivation rules
//!
//! For a drag session with cumulative translation `dy`:
//!
//! - `offset = max(0, baseline + dy)`: the surface never rises above the
//!   top of the screen.
//! - While `offset >= rest_offset`,
//!   `dim = 1 - (offset - rest_offset) / (height - rest_offset)`, clamped to
//!   `[0, 1]`. Above the rest line dimming keeps its last value, so dragging
//!   upward never changes it.
//!
//! On release, [`commit`](PositionModel::commit) moves the baseline so the
//! next session starts exactly where this one left the surface. A session
//! that is cancelled instead puts offset and dim back to what they were
//! before its first sample, see [`cancel`](PositionModel::cancel).
//!
//! # Invariants
//!
//! 1. `offset >= 0` after every drag sample.
//! 2. `dim` is always in `[0, 1]`.
//! 3. After a commit, `baseline == offset` whenever the release translation
//!    matches the last drag translation.
//! 4. After a cancel, offset and dim are exactly their pre-session values.

/// Baselines before and after a committed drag session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settle {
    /// Baseline the session started from.
    pub previous_baseline: f64,
    /// Baseline the next session will start from.
    pub baseline: f64,
}

impl Settle {
    /// Net downward pull of the session.
    #[inline]
    pub fn pull(&self) -> f64 {
        self.baseline - self.previous_baseline
    }
}

/// Offset, dimming, and drag baseline of one sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionModel {
    height: f64,
    rest_offset: f64,
    offset: f64,
    dim: f64,
    baseline: f64,
    previous_baseline: f64,
    /// `(offset, dim)` before the first sample of the open session.
    session_start: Option<(f64, f64)>,
}

impl PositionModel {
    /// A model parked fully below the screen, ready for the open transition.
    pub fn new(height: f64, rest_offset: f64) -> Self {
        Self {
            height,
            rest_offset,
            offset: height,
            dim: 0.0,
            baseline: rest_offset,
            previous_baseline: rest_offset,
            session_start: None,
        }
    }

    /// Current top-edge offset of the surface.
    #[inline]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Current dimming fraction.
    #[inline]
    pub fn dim(&self) -> f64 {
        self.dim
    }

    #[inline]
    pub fn baseline(&self) -> f64 {
        self.baseline
    }

    #[inline]
    pub fn previous_baseline(&self) -> f64 {
        self.previous_baseline
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[inline]
    pub fn rest_offset(&self) -> f64 {
        self.rest_offset
    }

    /// Dimming for a given offset, or `None` above the rest line.
    ///
    /// With a zero-height span (`rest_offset == height`) the backdrop is
    /// fully undimmed at or below the rest line.
    pub fn dim_at(&self, offset: f64) -> Option<f64> {
        if offset < self.rest_offset {
            return None;
        }
        let span = self.height - self.rest_offset;
        if span <= 0.0 {
            return Some(0.0);
        }
        Some((1.0 - (offset - self.rest_offset) / span).clamp(0.0, 1.0))
    }

    /// Apply one drag sample with cumulative translation `translation_y`.
    pub fn drag_to(&mut self, translation_y: f64) {
        self.session_start.get_or_insert((self.offset, self.dim));
        self.offset = (self.baseline + translation_y).max(0.0);
        if let Some(dim) = self.dim_at(self.offset) {
            self.dim = dim;
        }
    }

    /// Close a drag session whose final translation is `translation_y`.
    ///
    /// The offset is not re-derived from the final translation; the baseline
    /// absorbs it, compensating to `-offset` when it would otherwise drift
    /// below zero.
    pub fn commit(&mut self, translation_y: f64) -> Settle {
        self.session_start = None;
        self.previous_baseline = self.baseline;
        let candidate = self.baseline + translation_y;
        self.baseline = if self.offset + candidate >= 0.0 {
            candidate
        } else {
            -self.offset
        };
        Settle {
            previous_baseline: self.previous_baseline,
            baseline: self.baseline,
        }
    }

    /// Abandon the open session without moving the baseline.
    ///
    /// Offset and dim return to their values before the session's first
    /// drag sample, so the surface shows what the baseline describes.
    pub fn cancel(&mut self) {
        if let Some((offset, dim)) = self.session_start.take() {
            self.offset = offset;
            self.dim = dim;
        }
    }

    /// Scripted write from a transition.
    pub(crate) fn set_offset(&mut self, offset: f64) {
        self.offset = offset;
    }

    /// Scripted write from a transition.
    pub(crate) fn set_dim(&mut self, dim: f64) {
        self.dim = dim.clamp(0.0, 1.0);
    }
}
