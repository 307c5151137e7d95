//! Utility functions shared across the viewer.
//!
//! This module provides common utilities for:
//! - Grayscale color mapping
//! - Value formatting

pub mod color;
pub mod format;

pub use color::gray;
pub use format::format_value;
