// SPDX-License-Identifier: MPL-2.0
//! Full-screen lightbox overlay.
//!
//! Layered view: a dark backdrop that dismisses on press, the framed
//! photograph with its captions and position counter, and the floating
//! prev/next/close controls. Presses on the content itself are swallowed
//! so only true backdrop presses dismiss the overlay.

use crate::app::Message;
use crate::gallery::GalleryItem;
use crate::media::ImageData;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, image, mouse_area, opaque, Column, Container, Space, Stack, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Load state of the enlarged photograph.
#[derive(Debug, Clone, Default)]
pub enum ImageSlot {
    /// Nothing requested (lightbox closed).
    #[default]
    Idle,
    /// Full-size decode in flight.
    Loading,
    /// Decoded and ready to draw.
    Ready(ImageData),
    /// Decode failed; the message renders in place of the photograph.
    Failed(String),
}

/// Renders the lightbox overlay for the current gallery item.
pub fn view<'a>(
    item: &'a GalleryItem,
    image_slot: &'a ImageSlot,
    counter: String,
) -> Element<'a, Message> {
    // Backdrop layer: presses anywhere outside the content dismiss the
    // overlay.
    let backdrop = mouse_area(
        Container::new(Space::new().width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::scrim),
    )
    .on_press(Message::CloseLightbox);

    let picture: Element<'a, Message> = match image_slot {
        ImageSlot::Ready(data) => image(data.handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        ImageSlot::Failed(message) => centered_note(message.as_str(), palette::ERROR_500),
        ImageSlot::Idle | ImageSlot::Loading => centered_note("Loading…", palette::GRAY_400),
    };

    let captions = Column::new()
        .spacing(spacing::XXS)
        .align_x(alignment::Horizontal::Center)
        .push(
            Text::new(item.title.as_str())
                .size(typography::TITLE_MD)
                .color(palette::WHITE),
        )
        .push(
            Text::new(item.location.as_str())
                .size(typography::BODY)
                .color(palette::GRAY_200),
        )
        .push(
            Text::new(counter)
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .width(Length::Fill)
        .height(Length::Fill)
        .push(picture)
        .push(captions);

    // Presses on the photograph or captions must not dismiss; `opaque`
    // swallows them before they can reach the backdrop. The padding ring
    // around the content stays part of the backdrop.
    let framed = Container::new(opaque(content))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XXL);

    let prev = button(Text::new("‹").size(typography::TITLE_LG))
        .padding([spacing::XXS, spacing::MD])
        .style(styles::button::overlay_control)
        .on_press(Message::ShowPrev);

    let next = button(Text::new("›").size(typography::TITLE_LG))
        .padding([spacing::XXS, spacing::MD])
        .style(styles::button::overlay_control)
        .on_press(Message::ShowNext);

    let close = button(Text::new("✕").size(typography::TITLE_SM))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::overlay_control)
        .on_press(Message::CloseLightbox);

    let left_zone = Container::new(prev)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_y(alignment::Vertical::Center);

    let right_zone = Container::new(next)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Center);

    let close_zone = Container::new(close)
        .width(Length::Fill)
        .padding(spacing::MD)
        .align_x(alignment::Horizontal::Right);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(backdrop)
        .push(framed)
        .push(left_zone)
        .push(right_zone)
        .push(close_zone)
        .into()
}

fn centered_note(label: &str, color: iced::Color) -> Element<'_, Message> {
    Container::new(Text::new(label).size(typography::BODY).color(color))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
