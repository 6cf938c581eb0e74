//! Toast stack rendered below the active view.

use cosmic::Element;
use cosmic::iced::{Alignment, Length};
use cosmic::widget::{self, container};

use pupstyle_session::{Toast, ToastQueue};

use crate::message::Message;
use crate::theme;

/// Renders all visible toasts, oldest first.
pub fn view(toasts: &ToastQueue) -> Element<'_, Message> {
    let mut col = widget::column().spacing(8).width(Length::Fill);
    for toast in toasts.iter() {
        col = col.push(toast_card(toast));
    }
    col.into()
}

fn toast_card(toast: &Toast) -> Element<'_, Message> {
    let mut body = widget::column()
        .push(widget::text::heading(toast.title.as_str()).class(theme::toast_accent(toast.kind)))
        .spacing(2)
        .width(Length::Fill);
    match &toast.message {
        Some(message) if toast.sticky => {
            body = body.push(
                widget::text_input("", message.as_str())
                    .on_input(|_| Message::ToastTextEdited)
                    .width(Length::Fill),
            );
        }
        Some(message) => {
            body = body.push(widget::text::caption(message.as_str()).class(theme::MUTED_TEXT));
        }
        None => {}
    }

    container(
        widget::row()
            .push(body)
            .push(widget::button::text("Close").on_press(Message::CloseToast(toast.id)))
            .spacing(12)
            .align_y(Alignment::Center)
            .padding([8, 12]),
    )
    .width(Length::Fill)
    .class(cosmic::theme::Container::Custom(Box::new(theme::toast_style(
        toast.kind,
    ))))
    .into()
}
