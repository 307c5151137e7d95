//! Pixel generation for the slice display.

mod generators;

pub use generators::{grayscale_image, grayscale_pixels};
