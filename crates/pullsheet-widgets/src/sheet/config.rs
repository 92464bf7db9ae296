#![forbid(unsafe_code)]

//! Sheet configuration.
//!
//! All values are fixed when the sheet is built; there is no runtime
//! reconfiguration. [`SheetConfig::validate`] rejects values the state
//! machine cannot honour instead of clamping them.

use pullsheet_core::color::PackedRgba;

use super::error::{Result, SheetError};
use super::transition::TransitionSpec;

/// Default tolerance for the close decision's `>=` comparisons.
///
/// Touch translations are continuous values, so a release that lands a
/// hair short of the threshold after float rounding still counts.
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// Backdrop configuration (color + peak opacity).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackdropConfig {
    /// Backdrop color (alpha will be scaled by the current opacity).
    pub color: PackedRgba,
    /// Opacity at full dimming, in `[0.0, 1.0]`.
    pub max_opacity: f32,
}

impl BackdropConfig {
    /// Create a new backdrop config.
    pub fn new(color: PackedRgba, max_opacity: f32) -> Self {
        Self { color, max_opacity }
    }

    /// Set backdrop color.
    pub fn color(mut self, color: PackedRgba) -> Self {
        self.color = color;
        self
    }

    /// Set peak opacity.
    pub fn max_opacity(mut self, opacity: f32) -> Self {
        self.max_opacity = opacity;
        self
    }

    /// Map a dimming fraction in `[0, 1]` onto backdrop opacity.
    pub fn opacity_for(&self, dim: f64) -> f32 {
        let peak = self.max_opacity.clamp(0.0, 1.0);
        ((dim as f32) * peak).clamp(0.0, peak)
    }
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self {
            color: PackedRgba::BLACK,
            max_opacity: 0.8,
        }
    }
}

/// Sheet configuration.
#[derive(Debug, Clone)]
pub struct SheetConfig {
    /// Full height of the sliding surface, in points.
    pub height: f64,
    /// Resting offset as a fraction of `height`.
    pub rest_fraction: f64,
    /// Net pull in one drag session that dismisses the sheet.
    pub close_threshold: f64,
    pub backdrop: BackdropConfig,
    pub transitions: TransitionSpec,
    /// Whether tapping the backdrop dismisses the sheet.
    pub close_on_backdrop: bool,
    /// Tolerance for the close decision.
    pub epsilon: f64,
}

impl SheetConfig {
    /// Create a config with default backdrop and transitions.
    pub fn new(height: f64, rest_fraction: f64, close_threshold: f64) -> Self {
        Self {
            height,
            rest_fraction,
            close_threshold,
            backdrop: BackdropConfig::default(),
            transitions: TransitionSpec::default(),
            close_on_backdrop: true,
            epsilon: DEFAULT_EPSILON,
        }
    }

    pub fn backdrop(mut self, backdrop: BackdropConfig) -> Self {
        self.backdrop = backdrop;
        self
    }

    pub fn backdrop_color(mut self, color: PackedRgba) -> Self {
        self.backdrop.color = color;
        self
    }

    pub fn transitions(mut self, transitions: TransitionSpec) -> Self {
        self.transitions = transitions;
        self
    }

    pub fn close_on_backdrop(mut self, close: bool) -> Self {
        self.close_on_backdrop = close;
        self
    }

    pub fn epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Offset of the surface's top edge when fully open.
    #[inline]
    pub fn rest_offset(&self) -> f64 {
        self.rest_fraction * self.height
    }

    /// Check the config against the state machine's preconditions.
    pub fn validate(&self) -> Result<()> {
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(SheetError::InvalidHeight(self.height));
        }
        if !(0.0..=1.0).contains(&self.rest_fraction) {
            return Err(SheetError::InvalidRestFraction(self.rest_fraction));
        }
        if !self.close_threshold.is_finite() || self.close_threshold < 0.0 {
            return Err(SheetError::InvalidCloseThreshold(self.close_threshold));
        }
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(SheetError::InvalidEpsilon(self.epsilon));
        }
        Ok(())
    }
}
