//! Result view: before/after comparison with download and share actions.

use cosmic::Element;
use cosmic::iced::widget::{canvas, image};
use cosmic::iced::{Alignment, Length};
use cosmic::widget::{self, container};

use pupstyle_comparison::Split;
use pupstyle_share::Platform;
use pupstyle_widgets::ComparisonOverlay;

use crate::message::Message;
use crate::theme;

use super::VIEWPORT_SIZE;

/// Everything the result view reads.
pub struct ResultView<'a> {
    pub before: Option<&'a image::Handle>,
    pub after: Option<&'a image::Handle>,
    pub split: Split,
    pub dragging: bool,
    pub downloading: bool,
}

/// Renders the result page.
pub fn view(v: ResultView<'_>) -> Element<'_, Message> {
    let comparison = canvas::Canvas::new(
        ComparisonOverlay::new(v.split, v.dragging, Message::Slider)
            .before(v.before.cloned())
            .after(v.after.cloned()),
    )
    .width(Length::Fixed(VIEWPORT_SIZE))
    .height(Length::Fixed(VIEWPORT_SIZE));

    let toggles = widget::row()
        .push(toggle("Before", v.split == Split::BEFORE, Message::ShowBefore))
        .push(toggle("After", v.split == Split::AFTER, Message::ShowAfter))
        .spacing(8);

    let mut left = widget::column()
        .push(comparison)
        .push(toggles)
        .spacing(12)
        .align_x(Alignment::Center);
    if v.after.is_none() {
        left = left.push(
            widget::text::caption("Loading your pup's new look…").class(theme::MUTED_TEXT),
        );
    }

    let download_label = if v.downloading { "Downloading…" } else { "Download" };
    let mut actions = widget::column()
        .push(
            widget::text::heading("Your pup is glowing, naturally good, naturally you! 🐾")
                .class(theme::BRAND_GREEN),
        )
        .push(
            widget::text("Download the look or share it with your friends!")
                .class(theme::MUTED_TEXT),
        )
        .push(
            widget::button::suggested(download_label)
                .on_press_maybe((!v.downloading).then_some(Message::Download))
                .width(Length::Fill),
        )
        .push(widget::divider::horizontal::default())
        .push(
            widget::text::caption("Share your pup's new look on social media!")
                .class(theme::MUTED_TEXT),
        )
        .spacing(16)
        .width(Length::Fixed(260.0))
        .align_x(Alignment::Center);

    for platform in Platform::ALL {
        actions = actions.push(
            widget::button::standard(platform.label())
                .on_press(Message::Share(platform))
                .width(Length::Fill),
        );
    }
    actions = actions.push(
        widget::button::text("Style another look").on_press(Message::StartOver),
    );

    container(
        widget::row()
            .push(left)
            .push(actions)
            .spacing(32)
            .padding(24),
    )
    .width(Length::Fill)
    .center_x(Length::Fill)
    .class(cosmic::theme::Container::Custom(Box::new(theme::card_bg)))
    .into()
}

/// Pill-shaped toggle; highlighted when its side is fully shown.
fn toggle(label: &'static str, active: bool, message: Message) -> Element<'static, Message> {
    let text = widget::text::caption(label);
    let pill = if active {
        container(text.class(cosmic::iced::Color::WHITE))
            .padding([4, 12])
            .class(cosmic::theme::Container::Custom(Box::new(theme::pill_bg)))
    } else {
        container(text.class(theme::BRAND_GREEN)).padding([4, 12])
    };
    widget::button::custom(pill).on_press(message).into()
}
