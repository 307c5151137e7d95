//! Grayscale texture generation for the displayed buffer.
//!
//! The displayed buffer is already clipped into the contrast window, so the
//! window bounds are exactly the buffer's display range: low maps to black,
//! high to white.

use eframe::egui::{Color32, ColorImage};
use rayon::prelude::*;

use crate::app::ContrastWindow;
use crate::util::gray;

/// Map a clipped buffer to grayscale pixels, normalized over the window.
///
/// A degenerate window (low == high, constant image) pins the normalized
/// intensity to 0.5 so the frame renders mid-gray instead of dividing by
/// zero.
pub fn grayscale_pixels(buffer: &[f32], window: ContrastWindow) -> Vec<Color32> {
    let span = window.high - window.low;
    buffer
        .par_iter()
        .map(|&v| {
            let t = if span > 0.0 {
                ((v - window.low) / span).clamp(0.0, 1.0)
            } else {
                0.5
            };
            gray(t)
        })
        .collect()
}

/// Assemble the displayed buffer into a texture-ready image.
pub fn grayscale_image(
    buffer: &[f32],
    width: usize,
    height: usize,
    window: ContrastWindow,
) -> ColorImage {
    ColorImage {
        size: [width, height],
        pixels: grayscale_pixels(buffer, window),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_bounds_map_to_black_and_white() {
        let window = ContrastWindow {
            low: 2.0,
            high: 4.0,
        };
        let pixels = grayscale_pixels(&[2.0, 3.0, 4.0], window);
        assert_eq!(pixels[0], Color32::from_gray(0));
        assert_eq!(pixels[1], Color32::from_gray(128));
        assert_eq!(pixels[2], Color32::from_gray(255));
    }

    #[test]
    fn test_degenerate_window_renders_mid_gray() {
        let window = ContrastWindow {
            low: 5.0,
            high: 5.0,
        };
        let pixels = grayscale_pixels(&[5.0, 5.0], window);
        assert_eq!(pixels, vec![Color32::from_gray(128); 2]);
    }

    #[test]
    fn test_mapping_is_monotonic() {
        let window = ContrastWindow {
            low: 0.0,
            high: 1.0,
        };
        let values: Vec<f32> = (0..=10).map(|v| v as f32 / 10.0).collect();
        let pixels = grayscale_pixels(&values, window);
        for pair in pixels.windows(2) {
            assert!(pair[0].r() <= pair[1].r());
        }
    }

    #[test]
    fn test_image_dimensions() {
        let window = ContrastWindow {
            low: 0.0,
            high: 1.0,
        };
        let image = grayscale_image(&[0.0; 12], 4, 3, window);
        assert_eq!(image.size, [4, 3]);
        assert_eq!(image.pixels.len(), 12);
    }
}
