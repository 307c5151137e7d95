//! Per-view application state.

use eframe::egui::TextureHandle;

use super::types::{ContrastWindow, DisplayParams};
use crate::image::{Image, ImageStack};

// =============================================================================
// ViewerApp
// =============================================================================

/// State of one interactive view.
///
/// Both entry points build this: the single-image view is a one-frame stack
/// with the slice control hidden. The contrast window starts at the full
/// value range and frame 0 is displayed; every control interaction
/// recomputes the displayed buffer from the selected frame's original data.
pub struct ViewerApp {
    /// Source frames and their shared global value range.
    pub(crate) stack: ImageStack,
    /// Current contrast window, mutated only by the range control.
    pub(crate) window: ContrastWindow,
    /// Current frame index, mutated only by the slice control.
    pub(crate) frame_index: usize,
    /// Whether the slice control is shown (stacks only).
    pub(crate) show_slice_control: bool,
    /// The displayed buffer: selected frame clipped into the window.
    pub(crate) display_buffer: Vec<f32>,
    /// Cached texture for the displayed buffer.
    pub(crate) texture: Option<TextureHandle>,
    /// Parameters the cached texture was generated from.
    pub(crate) texture_params: Option<DisplayParams>,
}

impl ViewerApp {
    /// View for a single 2D image: contrast control only.
    pub fn single(image: Image) -> Self {
        Self::with_stack(ImageStack::single(image), false)
    }

    /// View for a 3D stack: slice control plus contrast control.
    pub fn stack(stack: ImageStack) -> Self {
        Self::with_stack(stack, true)
    }

    fn with_stack(stack: ImageStack, show_slice_control: bool) -> Self {
        let (min, max) = stack.value_range();
        let window = ContrastWindow::full(min, max);
        let display_buffer = window.clip(stack.frame(0).data());
        Self {
            stack,
            window,
            frame_index: 0,
            show_slice_control,
            display_buffer,
            texture: None,
            texture_params: None,
        }
    }

    /// Current contrast window.
    pub fn contrast(&self) -> ContrastWindow {
        self.window
    }

    /// Current frame index.
    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    /// Recompute the displayed buffer for the current frame and window.
    pub fn displayed(&self) -> Vec<f32> {
        self.window.clip(self.stack.frame(self.frame_index).data())
    }

    /// Parameters describing what should currently be on screen.
    pub(crate) fn params(&self) -> DisplayParams {
        DisplayParams {
            frame: self.frame_index,
            window: self.window,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array2, Array3};

    fn image(values: &[f32], shape: (usize, usize)) -> Image {
        let array = Array2::from_shape_vec(shape, values.to_vec()).unwrap();
        Image::from_dyn(array.view().into_dyn()).unwrap()
    }

    #[test]
    fn test_initial_state_is_full_range_unchanged() {
        let values = [2.0, 8.0, 4.0, 6.0];
        let app = ViewerApp::single(image(&values, (2, 2)));
        assert_eq!(app.contrast(), ContrastWindow::full(2.0, 8.0));
        assert_eq!(app.frame_index(), 0);
        assert_eq!(app.display_buffer, values.to_vec());
        assert!(!app.show_slice_control);
    }

    #[test]
    fn test_narrowed_window_clips_displayed_buffer() {
        let values = [0.0, 10.0, 5.0, 3.0];
        let mut app = ViewerApp::single(image(&values, (2, 2)));
        app.window = ContrastWindow {
            low: 2.0,
            high: 6.0,
        };
        assert_eq!(app.displayed(), vec![2.0, 6.0, 5.0, 3.0]);
    }

    #[test]
    fn test_frame_switch_is_independent_of_history() {
        let array = Array3::from_shape_fn((3, 2, 2), |(z, y, x)| (z * 4 + y * 2 + x) as f32);
        let stack = ImageStack::from_dyn(array.view().into_dyn()).unwrap();
        let mut app = ViewerApp::stack(stack.clone());
        assert!(app.show_slice_control);

        app.window = ContrastWindow {
            low: 1.0,
            high: 9.0,
        };

        // Walk frames in an arbitrary order; each displayed buffer must be
        // the clip of that frame's original data, nothing else.
        for &k in &[2usize, 0, 1, 2] {
            app.frame_index = k;
            let expected = app.window.clip(stack.frame(k).data());
            assert_eq!(app.displayed(), expected);
        }
    }

    #[test]
    fn test_stack_window_seeded_from_global_range() {
        let array = Array3::from_shape_fn((2, 2, 2), |(z, _, _)| if z == 0 { -1.0 } else { 5.0 });
        let stack = ImageStack::from_dyn(array.view().into_dyn()).unwrap();
        let app = ViewerApp::stack(stack);
        assert_eq!(app.contrast(), ContrastWindow::full(-1.0, 5.0));
    }

    #[test]
    fn test_constant_image_view() {
        let app = ViewerApp::single(image(&[3.0, 3.0, 3.0, 3.0], (2, 2)));
        assert_eq!(app.contrast(), ContrastWindow::full(3.0, 3.0));
        assert_eq!(app.displayed(), vec![3.0; 4]);
    }
}
