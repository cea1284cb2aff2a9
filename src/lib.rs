// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is a photography portfolio viewer built with the Iced GUI framework.
//!
//! It loads a fixed, ordered portfolio of photographs with their caption
//! metadata, presents them in a thumbnail grid, and opens a full-screen
//! lightbox for viewing a single photograph enlarged with wraparound
//! prev/next navigation, keyboard shortcuts, and touch-swipe gestures.

pub mod app;
pub mod config;
pub mod error;
pub mod gallery;
pub mod media;
pub mod ui;
