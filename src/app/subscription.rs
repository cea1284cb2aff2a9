// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard and touch events are only routed while the lightbox is open;
//! the grid needs neither. File drops are accepted in every state so a new
//! portfolio can be opened at any time.

use super::Message;
use iced::{event, keyboard, touch, window, Subscription};

/// Creates the lightbox input subscription.
///
/// While the overlay is open, Escape/ArrowLeft/ArrowRight drive the state
/// machine and touch press/lift pairs feed the swipe tracker. Closed, the
/// subscription is empty — none of the bindings exist without an overlay.
pub fn create_event_subscription(lightbox_open: bool) -> Subscription<Message> {
    if lightbox_open {
        event::listen_with(handle_lightbox_event)
    } else {
        Subscription::none()
    }
}

/// Creates the file-drop subscription, active in every state.
pub fn create_drop_subscription() -> Subscription<Message> {
    event::listen_with(handle_window_event)
}

fn handle_lightbox_event(
    event: event::Event,
    status: event::Status,
    _window: window::Id,
) -> Option<Message> {
    match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(named),
            ..
        }) => match status {
            // Keyboard events already claimed by a widget are left alone
            event::Status::Captured => None,
            event::Status::Ignored => match named {
                keyboard::key::Named::Escape => Some(Message::CloseLightbox),
                keyboard::key::Named::ArrowLeft => Some(Message::ShowPrev),
                keyboard::key::Named::ArrowRight => Some(Message::ShowNext),
                _ => None,
            },
        },
        event::Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            Some(Message::SwipeStarted(position.x))
        }
        event::Event::Touch(touch::Event::FingerLifted { position, .. }) => {
            Some(Message::SwipeEnded(position.x))
        }
        event::Event::Touch(touch::Event::FingerLost { .. }) => Some(Message::SwipeCancelled),
        _ => None,
    }
}

fn handle_window_event(
    event: event::Event,
    _status: event::Status,
    _window: window::Id,
) -> Option<Message> {
    if let event::Event::Window(window::Event::FileDropped(path)) = event {
        Some(Message::PortfolioDropped(path))
    } else {
        None
    }
}
