// SPDX-License-Identifier: MPL-2.0
//! UI components and styling for the portfolio viewer.

pub mod design_tokens;
pub mod grid;
pub mod lightbox;
pub mod styles;
