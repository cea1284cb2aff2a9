// SPDX-License-Identifier: MPL-2.0
//! Thumbnail grid for the portfolio.
//!
//! Each photograph renders as a pressable cell with its caption beneath;
//! pressing cell *i* asks the update loop to open the lightbox at index *i*.
//! With no portfolio loaded, an empty state offers the folder picker and
//! advertises drag-and-drop.

use crate::app::Message;
use crate::gallery::{Gallery, GalleryItem};
use crate::media::ImageData;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, image, scrollable, Column, Container, Row, Space, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Number of cells per grid row.
pub const GRID_COLUMNS: usize = 3;

/// Load state of one grid thumbnail.
#[derive(Debug, Clone, Default)]
pub enum ThumbnailSlot {
    /// Decode task still running.
    #[default]
    Loading,
    /// Decoded and ready to draw.
    Ready(ImageData),
    /// Decode failed; the cell shows a placeholder.
    Failed,
}

/// Renders the scrollable thumbnail grid.
pub fn view<'a>(
    gallery: &'a Gallery,
    thumbnails: &'a [ThumbnailSlot],
    thumbnail_height: u32,
) -> Element<'a, Message> {
    let mut grid = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .width(Length::Fill);

    for (row_index, chunk) in gallery.items().chunks(GRID_COLUMNS).enumerate() {
        let mut row = Row::new().spacing(spacing::LG);

        for (offset, item) in chunk.iter().enumerate() {
            let index = row_index * GRID_COLUMNS + offset;
            row = row.push(cell(index, item, thumbnails.get(index), thumbnail_height));
        }

        // Pad the last row so cells keep equal widths
        for _ in chunk.len()..GRID_COLUMNS {
            row = row.push(Space::new().width(Length::FillPortion(1)).height(Length::Shrink));
        }

        grid = grid.push(row);
    }

    scrollable(grid).width(Length::Fill).height(Length::Fill).into()
}

fn cell<'a>(
    index: usize,
    item: &'a GalleryItem,
    slot: Option<&'a ThumbnailSlot>,
    thumbnail_height: u32,
) -> Element<'a, Message> {
    let preview: Element<'a, Message> = match slot {
        Some(ThumbnailSlot::Ready(data)) => image(data.handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(thumbnail_height as f32)
            .into(),
        Some(ThumbnailSlot::Failed) => placeholder("Unavailable", thumbnail_height),
        Some(ThumbnailSlot::Loading) | None => placeholder("Loading…", thumbnail_height),
    };

    let content = Column::new()
        .spacing(spacing::XS)
        .push(
            Container::new(preview)
                .width(Length::Fill)
                .style(styles::container::cell),
        )
        .push(
            Text::new(item.title.as_str())
                .size(typography::BODY)
                .color(palette::WHITE),
        )
        .push(
            Text::new(item.location.as_str())
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );

    button(content)
        .padding(spacing::XS)
        .width(Length::FillPortion(1))
        .style(styles::button::gallery_item)
        .on_press(Message::ItemPressed(index))
        .into()
}

fn placeholder<'a>(label: &'a str, thumbnail_height: u32) -> Element<'a, Message> {
    Container::new(
        Text::new(label)
            .size(typography::CAPTION)
            .color(palette::GRAY_400),
    )
    .width(Length::Fill)
    .height(thumbnail_height as f32)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .into()
}

/// Renders the empty state shown before any portfolio is opened.
pub fn empty_view(warning: Option<&str>) -> Element<'_, Message> {
    let title = Text::new("No portfolio loaded")
        .size(typography::TITLE_SM)
        .color(palette::GRAY_200);

    let subtitle = Text::new("Open a folder of photographs, or drop one onto the window.")
        .size(typography::BODY)
        .color(palette::GRAY_400);

    let open_button = button(Text::new("Open portfolio…"))
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::primary)
        .on_press(Message::OpenFolderDialog);

    let mut content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(subtitle)
        .push(open_button);

    if let Some(warning) = warning {
        content = content.push(
            Text::new(warning)
                .size(typography::CAPTION)
                .color(palette::WARNING_500),
        );
    }

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
