mod colors;
pub mod comparison_overlay;

pub use colors::{BRAND_GREEN, DIVIDER, HANDLE_FILL, HANDLE_GLYPH, PLACEHOLDER, with_alpha};
pub use comparison_overlay::{ComparisonOverlay, OverlayState, SliderEvent, divider_x};
