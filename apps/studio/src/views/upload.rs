//! Upload view: photo picker, style choices, example carousel.

use cosmic::Element;
use cosmic::iced::widget::image;
use cosmic::iced::{Alignment, ContentFit, Length};
use cosmic::widget::{self, container};

use pupstyle_generation::{StyleField, StyleOptions};
use pupstyle_session::Rotation;

use crate::message::{Message, style_index};
use crate::theme;

use super::VIEWPORT_SIZE;

const CAROUSEL_SIZE: f32 = 280.0;

/// Everything the upload view reads.
pub struct UploadView<'a> {
    pub file_name: Option<&'a str>,
    pub preview: Option<&'a image::Handle>,
    pub max_upload_mb: u64,
    pub type_names: Vec<String>,
    pub style: &'a StyleOptions,
    pub scenario_labels: &'a [String],
    pub clothing_labels: &'a [String],
    pub examples: &'a [image::Handle],
    pub carousel: Rotation,
}

/// Renders the upload page.
pub fn view(v: UploadView<'_>) -> Element<'_, Message> {
    let intro = widget::column()
        .push(widget::text::title3("Unleash Your Pup's Style!").class(theme::BRAND_GREEN))
        .push(
            widget::text(
                "Upload a photo of your dog and let our AI give them a fabulous \
                 GNB-inspired makeover. See the magic happen in one click!",
            )
            .class(theme::MUTED_TEXT),
        )
        .spacing(8);

    let picker_label = v.file_name.unwrap_or("Click to upload photo");
    let picker = widget::button::custom(
        container(
            widget::column()
                .push(widget::text::heading(picker_label.to_string()).class(theme::BRAND_GREEN))
                .push(
                    widget::text::caption(format!("{} up to {}MB", v.type_names.join(", "), v.max_upload_mb))
                        .class(theme::BRAND_GREEN),
                )
                .spacing(4)
                .align_x(Alignment::Center),
        )
        .width(Length::Fill)
        .height(Length::Fixed(140.0))
        .center_x(Length::Fill)
        .center_y(Length::Fixed(140.0))
        .class(cosmic::theme::Container::Custom(Box::new(theme::upload_area_bg))),
    )
    .on_press(Message::PickFile)
    .width(Length::Fill);

    let mut left = widget::column().push(intro).push(picker).spacing(20);

    if let Some(handle) = v.preview {
        left = left.push(
            container(
                widget::image(handle.clone())
                    .content_fit(ContentFit::Cover)
                    .width(Length::Fixed(VIEWPORT_SIZE / 2.0))
                    .height(Length::Fixed(VIEWPORT_SIZE / 2.0)),
            )
            .center_x(Length::Fill),
        );
    }

    left = left
        .push(style_picker(
            "Scenario",
            StyleField::Scenario,
            v.scenario_labels,
            v.style,
        ))
        .push(style_picker(
            "Clothing",
            StyleField::Clothing,
            v.clothing_labels,
            v.style,
        ))
        .push(
            widget::button::suggested("Generate GNB Look")
                .on_press_maybe(v.file_name.is_some().then_some(Message::Generate))
                .width(Length::Fill),
        );

    let mut row = widget::row()
        .push(left.width(Length::FillPortion(1)))
        .spacing(32);

    if !v.examples.is_empty() {
        row = row.push(carousel(v.examples, v.carousel));
    }

    container(row.padding(24))
        .width(Length::Fill)
        .class(cosmic::theme::Container::Custom(Box::new(theme::card_bg)))
        .into()
}

/// Labeled dropdown for one style field.
fn style_picker<'a>(
    label: &'static str,
    field: StyleField,
    labels: &'a [String],
    style: &StyleOptions,
) -> Element<'a, Message> {
    let selected = style_index(field, style.get(field));
    widget::column()
        .push(widget::text::caption(label).class(theme::MUTED_TEXT))
        .push(
            widget::dropdown(labels, selected, move |i| Message::StyleSelected(field, i))
                .width(Length::Fill),
        )
        .spacing(4)
        .into()
}

/// "See the magic" carousel with arrows and position dots.
fn carousel(examples: &[image::Handle], rotation: Rotation) -> Element<'_, Message> {
    let index = rotation.index().min(examples.len().saturating_sub(1));
    let current = widget::image(examples[index].clone())
        .content_fit(ContentFit::Cover)
        .width(Length::Fixed(CAROUSEL_SIZE))
        .height(Length::Fixed(CAROUSEL_SIZE));

    let nav = widget::row()
        .push(widget::button::text("‹").on_press(Message::CarouselStep(-1)))
        .push(current)
        .push(widget::button::text("›").on_press(Message::CarouselStep(1)))
        .spacing(8)
        .align_y(Alignment::Center);

    let mut dots = widget::row().spacing(6);
    for i in 0..examples.len() {
        let glyph = if i == index { "●" } else { "○" };
        dots = dots.push(
            widget::button::custom(widget::text::caption(glyph).class(theme::BRAND_GREEN))
                .on_press(Message::CarouselSelect(i)),
        );
    }

    widget::column()
        .push(widget::text::caption("See the magic:").class(theme::MUTED_TEXT))
        .push(nav)
        .push(dots)
        .spacing(8)
        .align_x(Alignment::Center)
        .into()
}
