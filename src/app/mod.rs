// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the gallery, the lightbox state machine,
//! and the media loading pipeline, and translates messages into side effects
//! like background decoding. Policy decisions (window sizing, config
//! clamping) stay close to the update loop so user-facing behavior is easy
//! to audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, SortOrder};
use crate::gallery::{Gallery, Lightbox, SwipeTracker};
use crate::media::prefetch::PrefetchCache;
use crate::ui::grid::ThumbnailSlot;
use crate::ui::lightbox::ImageSlot;
use iced::{window, Element, Subscription, Task, Theme};
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 750;
pub const MIN_WINDOW_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Root Iced application state.
#[derive(Debug)]
pub struct App {
    /// The fixed, ordered portfolio currently on display.
    gallery: Gallery,
    /// Lightbox state machine fronting the gallery.
    lightbox: Lightbox,
    /// In-flight touch gesture, tracked only while the lightbox is open.
    swipe: SwipeTracker,
    /// One slot per gallery item, filled as thumbnail decodes complete.
    thumbnails: Vec<ThumbnailSlot>,
    /// The enlarged photograph currently shown in the lightbox.
    current_image: ImageSlot,
    /// LRU cache of decoded full-size photographs.
    prefetch: PrefetchCache,
    /// Grid thumbnail height from config, clamped.
    thumbnail_height: u32,
    /// Sort order for manifest-less portfolio scans.
    sort_order: SortOrder,
    /// Warning surfaced on the empty state (config or portfolio problems).
    startup_warning: Option<String>,
}

/// Ensures the configured swipe threshold stays inside the supported range so
/// persisted configs cannot request nonsensical gestures.
fn clamp_swipe_threshold(value: f32) -> f32 {
    value.clamp(
        config::MIN_SWIPE_THRESHOLD_PX,
        config::MAX_SWIPE_THRESHOLD_PX,
    )
}

fn clamp_thumbnail_height(value: u32) -> u32 {
    value.clamp(
        config::MIN_THUMBNAIL_HEIGHT,
        config::MAX_THUMBNAIL_HEIGHT,
    )
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            gallery: Gallery::empty(),
            lightbox: Lightbox::new(0, config::DEFAULT_SWIPE_THRESHOLD_PX),
            swipe: SwipeTracker::default(),
            thumbnails: Vec::new(),
            current_image: ImageSlot::Idle,
            prefetch: PrefetchCache::with_defaults(),
            thumbnail_height: config::DEFAULT_THUMBNAIL_HEIGHT,
            sort_order: SortOrder::default(),
            startup_warning: None,
        }
    }
}

impl App {
    /// Initializes application state and optionally kicks off thumbnail
    /// loading for a portfolio passed on the command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.map(PathBuf::from);
        let (config, config_warning) = config::load_with_override(config_dir);

        let swipe_threshold = clamp_swipe_threshold(
            config
                .input
                .swipe_threshold_px
                .unwrap_or(config::DEFAULT_SWIPE_THRESHOLD_PX),
        );

        let mut app = App {
            lightbox: Lightbox::new(0, swipe_threshold),
            thumbnail_height: clamp_thumbnail_height(
                config
                    .display
                    .thumbnail_height
                    .unwrap_or(config::DEFAULT_THUMBNAIL_HEIGHT),
            ),
            sort_order: config.display.sort_order.unwrap_or_default(),
            startup_warning: config_warning,
            ..Self::default()
        };

        let task = if let Some(path_str) = flags.portfolio_path {
            update::load_portfolio(&mut app, PathBuf::from(path_str))
        } else {
            Task::none()
        };

        (app, task)
    }

    fn title(&self) -> String {
        let current_item = self
            .lightbox
            .current_index()
            .and_then(|index| self.gallery.get(index));

        match current_item {
            Some(item) if !item.title.is_empty() => format!("{} - Iced Folio", item.title),
            Some(item) => {
                let file_name = item
                    .source
                    .file_name()
                    .and_then(|name| name.to_str())
                    .unwrap_or("Unknown");
                format!("{file_name} - Iced Folio")
            }
            None => "Iced Folio".to_string(),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        let drop_sub = subscription::create_drop_subscription();
        let lightbox_sub = subscription::create_event_subscription(self.lightbox.is_open());

        Subscription::batch([drop_sub, lightbox_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_app_has_no_portfolio() {
        let app = App::default();
        assert!(app.gallery.is_empty());
        assert!(!app.lightbox.is_open());
        assert!(app.thumbnails.is_empty());
    }

    #[test]
    fn clamp_swipe_threshold_bounds_extremes() {
        assert_eq!(clamp_swipe_threshold(0.0), config::MIN_SWIPE_THRESHOLD_PX);
        assert_eq!(
            clamp_swipe_threshold(10_000.0),
            config::MAX_SWIPE_THRESHOLD_PX
        );
        assert_eq!(clamp_swipe_threshold(50.0), 50.0);
    }

    #[test]
    fn clamp_thumbnail_height_bounds_extremes() {
        assert_eq!(clamp_thumbnail_height(1), config::MIN_THUMBNAIL_HEIGHT);
        assert_eq!(
            clamp_thumbnail_height(10_000),
            config::MAX_THUMBNAIL_HEIGHT
        );
        assert_eq!(clamp_thumbnail_height(240), 240);
    }

    #[test]
    fn title_without_portfolio_is_the_app_name() {
        let app = App::default();
        assert_eq!(app.title(), "Iced Folio");
    }
}
