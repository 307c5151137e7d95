//! Public entry points: `view_image`, `view_stack`, and logger setup.
//!
//! Dimensionality dispatch happens here; everything past it is the shared
//! viewer in [`crate::app`]. A 3D array handed to the single-image path is
//! an unsupported-operation notice, not an error: it logs a diagnostic and
//! returns without rendering. Every other shape problem surfaces as the
//! coercion error it came from.

use ndarray::ArrayD;

use crate::app::ViewerApp;
use crate::image::{Image, ImageStack, ShapeError};

/// Errors surfaced by the viewer entry points.
#[derive(thiserror::Error, Debug)]
pub enum ViewerError {
    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error("display backend error: {0}")]
    Backend(#[from] eframe::Error),
}

/// Initialize logging so viewer diagnostics are visible.
///
/// Call once before using the viewers in a host that has not set up a
/// logger of its own; calling it again is a no-op.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}

/// Interactively view a single 2D image with an adjustable contrast window.
///
/// A 3-dimensional input logs a diagnostic and returns without rendering;
/// use [`view_stack`] for stacks. Any other dimensionality is an error.
/// Blocks until the viewer window is closed.
pub fn view_image(data: ArrayD<f32>) -> Result<(), ViewerError> {
    match image_app(&data)? {
        Some(app) => run_viewer(app),
        None => Ok(()),
    }
}

/// Interactively view a 3D image stack with slice selection and contrast.
///
/// The first axis is the frame index. A 2-dimensional input is forwarded
/// to [`view_image`]. Blocks until the viewer window is closed.
pub fn view_stack(data: ArrayD<f32>) -> Result<(), ViewerError> {
    match stack_app(&data)? {
        Some(app) => run_viewer(app),
        None => Ok(()),
    }
}

/// Build the single-image view, or `None` for the stack-shaped notice.
fn image_app(data: &ArrayD<f32>) -> Result<Option<ViewerApp>, ShapeError> {
    if data.ndim() == 3 {
        log::warn!(
            "input has shape {:?} and looks like a stack; use view_stack",
            data.shape()
        );
        return Ok(None);
    }
    let image = Image::from_dyn(data.view())?;
    Ok(Some(ViewerApp::single(image)))
}

/// Build the stack view, delegating 2D inputs to the single-image path.
fn stack_app(data: &ArrayD<f32>) -> Result<Option<ViewerApp>, ShapeError> {
    if data.ndim() == 2 {
        return image_app(data);
    }
    let stack = ImageStack::from_dyn(data.view())?;
    Ok(Some(ViewerApp::stack(stack)))
}

fn run_viewer(app: ViewerApp) -> Result<(), ViewerError> {
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([520.0, 600.0])
            .with_min_inner_size([320.0, 360.0]),
        ..Default::default()
    };
    eframe::run_native("sliceview", options, Box::new(move |_cc| Ok(Box::new(app))))?;
    Ok(())
}
