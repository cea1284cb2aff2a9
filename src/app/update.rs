// SPDX-License-Identifier: MPL-2.0
//! Update loop for the application.
//!
//! All state transitions funnel through [`update`]: the lightbox
//! input-binding table, swipe tracking, and the async decode flows. Results
//! arriving for an item that is no longer current are cached but never
//! rendered, so the presentation always reflects the latest navigation
//! operation.

use super::{App, Message};
use crate::error::Error;
use crate::gallery::{Gallery, Lightbox, SwipeTracker};
use crate::media::{self, prefetch, ImageData};
use crate::ui::grid::ThumbnailSlot;
use crate::ui::lightbox::ImageSlot;
use iced::Task;
use std::path::PathBuf;

pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::ItemPressed(index) => {
            app.lightbox.open(index);
            refresh_lightbox_image(app)
        }
        Message::CloseLightbox => {
            app.lightbox.close();
            app.swipe.cancel();
            app.current_image = ImageSlot::Idle;
            Task::none()
        }
        Message::ShowNext => {
            app.lightbox.show_next();
            refresh_lightbox_image(app)
        }
        Message::ShowPrev => {
            app.lightbox.show_prev();
            refresh_lightbox_image(app)
        }
        Message::SwipeStarted(x) => {
            if app.lightbox.is_open() {
                app.swipe.begin(x);
            }
            Task::none()
        }
        Message::SwipeEnded(end_x) => {
            if let Some((start_x, end_x)) = app.swipe.finish(end_x) {
                let before = app.lightbox.current_index();
                app.lightbox.handle_swipe(start_x, end_x);
                if app.lightbox.current_index() != before {
                    return refresh_lightbox_image(app);
                }
            }
            Task::none()
        }
        Message::SwipeCancelled => {
            app.swipe.cancel();
            Task::none()
        }
        Message::ThumbnailLoaded { index, result } => {
            if let Some(slot) = app.thumbnails.get_mut(index) {
                *slot = match result {
                    Ok(data) => ThumbnailSlot::Ready(data),
                    Err(_) => ThumbnailSlot::Failed,
                };
            }
            Task::none()
        }
        Message::ImageLoaded { path, result } => {
            handle_image_loaded(app, path, result);
            Task::none()
        }
        Message::OpenFolderDialog => {
            Task::perform(open_folder_dialog(), Message::OpenFolderDialogResult)
        }
        Message::OpenFolderDialogResult(Some(path)) => load_portfolio(app, path),
        Message::OpenFolderDialogResult(None) => Task::none(),
        Message::PortfolioDropped(path) => load_portfolio(app, path),
    }
}

/// Replaces the current portfolio with the one at `path` and starts the
/// thumbnail decode tasks.
///
/// The gallery, lightbox, and caches are rebuilt wholesale: the item set is
/// fixed for the lifetime of a portfolio and never re-scanned in place.
pub(super) fn load_portfolio(app: &mut App, path: PathBuf) -> Task<Message> {
    let swipe_threshold = app.lightbox.swipe_threshold();

    match Gallery::load(&path, app.sort_order) {
        Ok(gallery) => {
            app.lightbox = Lightbox::new(gallery.len(), swipe_threshold);
            app.swipe = SwipeTracker::default();
            app.current_image = ImageSlot::Idle;
            app.prefetch.clear();
            app.thumbnails = vec![ThumbnailSlot::Loading; gallery.len()];
            app.startup_warning = None;

            let thumbnail_height = app.thumbnail_height;
            let tasks: Vec<Task<Message>> = gallery
                .items()
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    let source = item.source.clone();
                    Task::perform(
                        media::load_thumbnail_async(source, thumbnail_height),
                        move |result| Message::ThumbnailLoaded { index, result },
                    )
                })
                .collect();

            app.gallery = gallery;
            Task::batch(tasks)
        }
        Err(err) => {
            app.startup_warning = Some(format!("Could not open portfolio: {err}"));
            Task::none()
        }
    }
}

/// Points the lightbox presentation at the current item: serve it from the
/// prefetch cache when possible, otherwise decode it in the background, and
/// prefetch both wraparound neighbors either way.
fn refresh_lightbox_image(app: &mut App) -> Task<Message> {
    let Some(index) = app.lightbox.current_index() else {
        return Task::none();
    };
    let Some(item) = app.gallery.get(index) else {
        return Task::none();
    };

    let mut pending: Vec<PathBuf> = Vec::new();

    if let Some(data) = app.prefetch.get(&item.source) {
        app.current_image = ImageSlot::Ready(data);
    } else {
        app.current_image = ImageSlot::Loading;
        pending.push(item.source.clone());
    }

    for neighbor in [app.lightbox.peek_next(), app.lightbox.peek_prev()]
        .into_iter()
        .flatten()
    {
        if neighbor == index {
            continue;
        }
        if let Some(neighbor_item) = app.gallery.get(neighbor) {
            if !app.prefetch.contains(&neighbor_item.source)
                && !pending.contains(&neighbor_item.source)
            {
                pending.push(neighbor_item.source.clone());
            }
        }
    }

    Task::batch(pending.into_iter().map(|path| {
        Task::perform(prefetch::load_image_for_prefetch(path), |(path, result)| {
            Message::ImageLoaded { path, result }
        })
    }))
}

fn handle_image_loaded(app: &mut App, path: PathBuf, result: Result<ImageData, Error>) {
    let is_current = app
        .lightbox
        .current_index()
        .and_then(|index| app.gallery.get(index))
        .map(|item| item.source == path)
        .unwrap_or(false);

    match result {
        Ok(data) => {
            if is_current {
                app.current_image = ImageSlot::Ready(data.clone());
            }
            app.prefetch.insert(path, data);
        }
        Err(err) => {
            // Stale failures are dropped; only the displayed item may show one
            if is_current {
                app.current_image = ImageSlot::Failed(err.to_string());
            }
        }
    }
}

async fn open_folder_dialog() -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .set_title("Open portfolio")
        .pick_folder()
        .await
        .map(|folder| folder.path().to_path_buf())
}
