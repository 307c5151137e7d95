//! Core types for viewer state.

use rayon::prelude::*;

// =============================================================================
// Constants
// =============================================================================

/// Number of steps the contrast control divides the full value range into.
pub const CONTRAST_STEPS: f32 = 1000.0;

/// Slider step used when the data range is zero (constant image). A zero
/// step would freeze the control; the window itself stays degenerate.
pub const FALLBACK_STEP: f32 = 1.0;

// =============================================================================
// Contrast Window
// =============================================================================

/// The [low, high] intensity range mapped to the visible display range.
///
/// Values outside the window are clamped to the nearest bound; values
/// exactly equal to a bound are preserved unchanged.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContrastWindow {
    pub low: f32,
    pub high: f32,
}

impl ContrastWindow {
    /// Window spanning the full data range, the initial state of a view.
    pub fn full(min: f32, max: f32) -> Self {
        Self {
            low: min,
            high: max,
        }
    }

    /// Step size for a contrast control spanning [min, max]: range / 1000,
    /// falling back to [`FALLBACK_STEP`] for a constant image.
    pub fn step_for(min: f32, max: f32) -> f32 {
        let range = max - min;
        if range > 0.0 {
            range / CONTRAST_STEPS
        } else {
            FALLBACK_STEP
        }
    }

    /// Clamp a single value into the window.
    #[inline]
    pub fn clamp_value(&self, value: f32) -> f32 {
        if value > self.high {
            self.high
        } else if value < self.low {
            self.low
        } else {
            value
        }
    }

    /// Elementwise clip of a frame into the window.
    pub fn clip(&self, src: &[f32]) -> Vec<f32> {
        src.par_iter().map(|&v| self.clamp_value(v)).collect()
    }
}

// =============================================================================
// Display Parameters
// =============================================================================

/// Parameters the current texture was generated from. A mismatch against
/// the live state is what triggers the clip-and-redraw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayParams {
    /// Selected frame index.
    pub frame: usize,
    /// Contrast window at generation time.
    pub window: ContrastWindow,
}

// =============================================================================
// Tests
// =============================================================================
