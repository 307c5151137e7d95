//! Image and stack buffers backing the viewer.
//!
//! Input arrays are coerced into row-major `f32` buffers once, up front;
//! the value range is computed at the same time and never again. A stack
//! carries a single global (min, max) across all of its frames, which is
//! what seeds the shared contrast control.

use ndarray::{ArrayViewD, Axis};

// =============================================================================
// Errors
// =============================================================================

/// Coercion failures for array-like inputs.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("expected a 2-dimensional image, got {0} dimension(s)")]
    NotAnImage(usize),

    #[error("expected a 3-dimensional stack, got {0} dimension(s)")]
    NotAStack(usize),

    #[error("input has no pixels")]
    Empty,
}

// =============================================================================
// Image
// =============================================================================

/// An immutable 2D grid of intensity values.
///
/// `min`/`max` are computed once at construction and seed the contrast
/// control's bounds.
#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    width: usize,
    height: usize,
    data: Vec<f32>,
    min: f32,
    max: f32,
}

impl Image {
    /// Coerce a dynamic-dimensional array into an image.
    ///
    /// The first axis is height (rows), the second width, matching the
    /// row-major layout of the source array.
    pub fn from_dyn(array: ArrayViewD<'_, f32>) -> Result<Self, ShapeError> {
        if array.ndim() != 2 {
            return Err(ShapeError::NotAnImage(array.ndim()));
        }
        let height = array.shape()[0];
        let width = array.shape()[1];
        if width == 0 || height == 0 {
            return Err(ShapeError::Empty);
        }
        // Row-major copy regardless of the input's memory layout.
        let data: Vec<f32> = array.iter().copied().collect();
        Ok(Self::from_raw(width, height, data))
    }

    fn from_raw(width: usize, height: usize, data: Vec<f32>) -> Self {
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        for &v in &data {
            min = min.min(v);
            max = max.max(v);
        }
        Self {
            width,
            height,
            data,
            min,
            max,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major pixel data (length == width * height).
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Value at pixel (x, y).
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[y * self.width + x]
    }

    /// (min, max) over all pixels, computed at construction.
    pub fn value_range(&self) -> (f32, f32) {
        (self.min, self.max)
    }
}

// =============================================================================
// ImageStack
// =============================================================================

/// An ordered sequence of equally sized frames.
///
/// Holds one global (min, max) across all frames; the contrast bound is
/// shared between frames, not recomputed per frame.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageStack {
    frames: Vec<Image>,
    min: f32,
    max: f32,
}

impl ImageStack {
    /// Coerce a dynamic-dimensional array into a stack, treating the first
    /// axis as the frame index.
    pub fn from_dyn(array: ArrayViewD<'_, f32>) -> Result<Self, ShapeError> {
        if array.ndim() != 3 {
            return Err(ShapeError::NotAStack(array.ndim()));
        }
        if array.shape()[0] == 0 {
            return Err(ShapeError::Empty);
        }
        let frames = array
            .axis_iter(Axis(0))
            .map(Image::from_dyn)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_frames(frames))
    }

    /// Wrap a single image as a one-frame stack (the single-image view).
    pub fn single(image: Image) -> Self {
        Self::from_frames(vec![image])
    }

    fn from_frames(frames: Vec<Image>) -> Self {
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        for frame in &frames {
            let (lo, hi) = frame.value_range();
            min = min.min(lo);
            max = max.max(hi);
        }
        Self { frames, min, max }
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn frame(&self, index: usize) -> &Image {
        &self.frames[index]
    }

    pub fn width(&self) -> usize {
        self.frames[0].width()
    }

    pub fn height(&self) -> usize {
        self.frames[0].height()
    }

    /// Global (min, max) across every frame combined.
    pub fn value_range(&self) -> (f32, f32) {
        (self.min, self.max)
    }
}

// =============================================================================
// Tests
// =============================================================================
