//! Viewer application state and UI loop.

mod state;
mod types;
mod ui;

pub use state::ViewerApp;
pub use types::{ContrastWindow, DisplayParams, CONTRAST_STEPS, FALLBACK_STEP};
