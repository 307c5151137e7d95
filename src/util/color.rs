//! Grayscale color mapping for the image display.

use eframe::egui::Color32;

/// Number of gray shades in the display ramp.
pub const GRAY_LEVELS: usize = 256;

/// Map a normalized intensity in [0, 1] to one of 256 gray shades.
///
/// Out-of-range inputs are clamped; 0 is black, 1 is white.
#[inline]
pub fn gray(t: f32) -> Color32 {
    let level = (t.clamp(0.0, 1.0) * (GRAY_LEVELS - 1) as f32).round() as u8;
    Color32::from_gray(level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gray_endpoints() {
        assert_eq!(gray(0.0), Color32::from_gray(0));
        assert_eq!(gray(1.0), Color32::from_gray(255));
    }

    #[test]
    fn test_gray_clamps_out_of_range() {
        assert_eq!(gray(-2.0), Color32::from_gray(0));
        assert_eq!(gray(1.5), Color32::from_gray(255));
    }

    #[test]
    fn test_gray_is_achromatic() {
        let c = gray(0.3);
        assert_eq!(c.r(), c.g());
        assert_eq!(c.g(), c.b());
    }
}
