pub mod loading;
pub mod result;
pub mod toasts;
pub mod upload;

use cosmic::Element;
use cosmic::iced::{Alignment, Length};
use cosmic::widget;

use crate::message::Message;
use crate::theme;

/// Side length of the square image viewports.
pub const VIEWPORT_SIZE: f32 = 480.0;

/// Page title and tagline shown above every view.
pub fn header() -> Element<'static, Message> {
    widget::column()
        .push(widget::text::title1("Good Natured Look Generator").class(theme::BRAND_GREEN))
        .push(
            widget::text(
                "Give your pup a fresh new look with AI-powered styling, inspired by \
                 Good Natured's clean, pet-safe care.",
            )
            .class(theme::MUTED_TEXT),
        )
        .spacing(8)
        .width(Length::Fill)
        .align_x(Alignment::Center)
        .into()
}
