//! Before/after comparison slider.
//!
//! [`geometry`] maps a pointer position over the viewport onto a
//! [`Split`] in `0..=100`. [`engine`] tracks the drag and holds the
//! pointer capture for exactly as long as the drag lasts.

pub mod engine;
pub mod geometry;

pub use engine::{PointerCapture, SliderEngine};
pub use geometry::{Pointer, Split, Viewport, percent_from_pointer};
