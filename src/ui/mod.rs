//! Custom widgets used by the viewer.

mod range_slider;

pub use range_slider::RangeSlider;
