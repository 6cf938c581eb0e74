use cosmic::iced::Color;

/// Good Natured brand green, `#3b6e4f`.
pub const BRAND_GREEN: Color = Color::from_rgb(0.231, 0.431, 0.310);
/// Divider line between the two images.
pub const DIVIDER: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.9);
/// Fill of the round drag handle.
pub const HANDLE_FILL: Color = Color::WHITE;
/// Arrows drawn inside the handle.
pub const HANDLE_GLYPH: Color = BRAND_GREEN;
/// Fill behind an image that has not loaded yet.
pub const PLACEHOLDER: Color = Color::from_rgb(0.93, 0.95, 0.94);

/// Same color with a different alpha (clamped to `0.0..=1.0`).
pub fn with_alpha(color: Color, alpha: f32) -> Color {
    Color {
        a: alpha.clamp(0.0, 1.0),
        ..color
    }
}
