// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the thumbnail grid (or the empty state) and, while the lightbox
//! is open, layers the overlay on top of it.

use super::{App, Message};
use crate::ui;
use iced::widget::{opaque, Stack};
use iced::{Element, Length};

/// Renders the current application view.
pub(super) fn view(app: &App) -> Element<'_, Message> {
    let base: Element<'_, Message> = if app.gallery.is_empty() {
        ui::grid::empty_view(app.startup_warning.as_deref())
    } else {
        ui::grid::view(&app.gallery, &app.thumbnails, app.thumbnail_height)
    };

    let Some(index) = app.lightbox.current_index() else {
        return base;
    };
    let Some(item) = app.gallery.get(index) else {
        // Unreachable: the lightbox index is bounded by the gallery length
        return base;
    };

    let counter = app.lightbox.counter_text().unwrap_or_default();
    let overlay = ui::lightbox::view(item, &app.current_image, counter);

    // The overlay is opaque to events: the grid beneath neither scrolls nor
    // receives presses while the lightbox is open.
    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base)
        .push(opaque(overlay))
        .into()
}
