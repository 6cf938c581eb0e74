//! Loading view: the original photo with a rotating status phrase.

use cosmic::Element;
use cosmic::iced::widget::image;
use cosmic::iced::{Alignment, ContentFit, Length};
use cosmic::widget::{self, container};

use crate::message::Message;
use crate::theme;

use super::VIEWPORT_SIZE;

/// Renders the loading page.
pub fn view<'a>(preview: Option<&'a image::Handle>, phrase: &'static str) -> Element<'a, Message> {
    let mut col = widget::column()
        .push(widget::text::title4("Original").class(theme::BRAND_GREEN))
        .spacing(16)
        .align_x(Alignment::Center);

    if let Some(handle) = preview {
        col = col.push(
            widget::image(handle.clone())
                .content_fit(ContentFit::Cover)
                .width(Length::Fixed(VIEWPORT_SIZE))
                .height(Length::Fixed(VIEWPORT_SIZE))
                .opacity(0.6),
        );
    }

    col = col
        .push(widget::text::heading("Styling your pup...").class(theme::BRAND_GREEN))
        .push(widget::text(phrase).class(theme::MUTED_TEXT));

    container(col.padding(24))
        .width(Length::Fill)
        .center_x(Length::Fill)
        .class(cosmic::theme::Container::Custom(Box::new(theme::card_bg)))
        .into()
}
