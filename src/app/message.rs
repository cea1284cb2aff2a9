// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::media::ImageData;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
///
/// The first group is the lightbox input-binding table (grid presses,
/// controls, keyboard, touch); the rest carry async load results and
/// portfolio-opening flows.
#[derive(Debug, Clone)]
pub enum Message {
    /// Grid item *i* was pressed; opens the lightbox at that index.
    ItemPressed(usize),
    /// Close control, backdrop press, or Escape.
    CloseLightbox,
    /// Next control, ArrowRight, or a leftward swipe.
    ShowNext,
    /// Prev control, ArrowLeft, or a rightward swipe.
    ShowPrev,
    /// A touch gesture started at the given x position.
    SwipeStarted(f32),
    /// A touch gesture ended at the given x position.
    SwipeEnded(f32),
    /// The touch gesture was lost before completing.
    SwipeCancelled,
    /// Result from decoding a grid thumbnail in the background.
    ThumbnailLoaded {
        index: usize,
        result: Result<ImageData, Error>,
    },
    /// Result from decoding a full-size photograph in the background.
    ImageLoaded {
        path: PathBuf,
        result: Result<ImageData, Error>,
    },
    /// Trigger the folder picker from the empty state.
    OpenFolderDialog,
    /// Result from the folder picker.
    OpenFolderDialogResult(Option<PathBuf>),
    /// A file or folder was dropped on the window.
    PortfolioDropped(PathBuf),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional portfolio directory (or an image inside one) to load on
    /// startup.
    pub portfolio_path: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `ICED_FOLIO_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
