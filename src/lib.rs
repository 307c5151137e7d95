//! Sliceview - interactive viewer for 2D images and 3D image stacks.
//!
//! Two entry points, each opening a self-contained interactive view:
//! - [`view_image`] renders one 2D image through a 256-level grayscale ramp
//!   with a dual-handle contrast control spanning the image's value range.
//! - [`view_stack`] renders a 3D stack (frames along the first axis) with a
//!   slice selector plus the same contrast control; the contrast bound is
//!   the global min/max across all frames.
//!
//! Moving either control clips the selected frame's values into the chosen
//! window (values outside the window are clamped to the nearest bound) and
//! redraws, with no work done between interactions.
//!
//! Inputs are `ndarray::ArrayD<f32>`; shape dispatch follows the array's
//! dimensionality. A 2D input to [`view_stack`] is forwarded to
//! [`view_image`]; a 3D input to [`view_image`] logs a diagnostic and
//! renders nothing.

pub mod app;
pub mod image;
pub mod ui;
pub mod util;
pub mod viewer;
pub mod viz;

pub use image::{Image, ImageStack, ShapeError};
pub use viewer::{init_logging, view_image, view_stack, ViewerError};
