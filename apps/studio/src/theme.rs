//! Brand colors and container style overrides.
//!
//! Palette based on the Good Natured brand:
//! - Main green: `#3b6e4f`
//! - Cream background: `#faf6ef`
//! - Card surface: white
//! - Muted text: `#6b7280`

use cosmic::iced::widget::container as iced_container;
use cosmic::iced::{Background, Border, Color};

use pupstyle_session::ToastKind;
pub use pupstyle_widgets::BRAND_GREEN;

/// Page background, `#faf6ef`.
pub const CREAM_BG: Color = Color::from_rgb(0.980, 0.965, 0.937);

/// Card surface.
pub const SURFACE_BG: Color = Color::WHITE;

/// Muted text, `#6b7280`.
pub const MUTED_TEXT: Color = Color::from_rgb(0.420, 0.447, 0.502);

/// Error toast accent, `#dc2626`.
pub const ERROR_RED: Color = Color::from_rgb(0.863, 0.149, 0.149);

/// Info toast accent, `#2563eb`.
pub const INFO_BLUE: Color = Color::from_rgb(0.145, 0.388, 0.922);

/// Subtle border, `#e5e7eb`.
const BORDER_COLOR: Color = Color::from_rgb(0.898, 0.906, 0.922);

/// Accent color for a toast level.
pub fn toast_accent(kind: ToastKind) -> Color {
    match kind {
        ToastKind::Success => BRAND_GREEN,
        ToastKind::Error => ERROR_RED,
        ToastKind::Info => INFO_BLUE,
    }
}

/// Content area background.
pub fn page_bg(_theme: &cosmic::Theme) -> iced_container::Style {
    iced_container::Style {
        background: Some(Background::Color(CREAM_BG)),
        ..Default::default()
    }
}

/// Card container style used by every view.
pub fn card_bg(_theme: &cosmic::Theme) -> iced_container::Style {
    iced_container::Style {
        background: Some(Background::Color(SURFACE_BG)),
        border: Border {
            color: BORDER_COLOR,
            width: 1.0,
            radius: 16.0.into(),
        },
        ..Default::default()
    }
}

/// Dashed-look drop area for the file picker.
pub fn upload_area_bg(_theme: &cosmic::Theme) -> iced_container::Style {
    iced_container::Style {
        background: Some(Background::Color(CREAM_BG)),
        border: Border {
            color: BRAND_GREEN,
            width: 2.0,
            radius: 12.0.into(),
        },
        ..Default::default()
    }
}

/// Small pill labels ("Before" / "After") over the comparison.
pub fn pill_bg(_theme: &cosmic::Theme) -> iced_container::Style {
    iced_container::Style {
        background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.55))),
        text_color: Some(Color::WHITE),
        border: Border {
            radius: 999.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Toast style with a border in the level's accent color.
pub fn toast_style(kind: ToastKind) -> impl Fn(&cosmic::Theme) -> iced_container::Style {
    move |_theme| iced_container::Style {
        background: Some(Background::Color(SURFACE_BG)),
        border: Border {
            color: toast_accent(kind),
            width: 2.0,
            radius: 10.0.into(),
        },
        ..Default::default()
    }
}
