//! Demo: view a synthetic stack of drifting Gaussian blobs.

use ndarray::Array3;

use sliceview::{init_logging, view_stack, ViewerError};

const FRAMES: usize = 16;
const HEIGHT: usize = 96;
const WIDTH: usize = 128;

fn main() -> Result<(), ViewerError> {
    init_logging();

    let stack = Array3::from_shape_fn((FRAMES, HEIGHT, WIDTH), |(z, y, x)| {
        // Blob center drifts left to right across the stack.
        let cx = WIDTH as f32 * (0.2 + 0.6 * z as f32 / (FRAMES - 1) as f32);
        let cy = HEIGHT as f32 * 0.5;
        let sigma = 12.0;
        let d2 = (x as f32 - cx).powi(2) + (y as f32 - cy).powi(2);
        let blob = 1000.0 * (-d2 / (2.0 * sigma * sigma)).exp();
        // Low-level background gradient so contrast adjustment has
        // something to dig out.
        blob + x as f32 * 0.5
    });

    view_stack(stack.into_dyn())
}
