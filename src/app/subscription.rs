// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard navigation is scoped to the presentation surface: nothing is
//! subscribed while the gallery is showing.

use super::Message;
use crate::slideshow::KeySignal;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, Event, Subscription};

/// Listens for navigation keys while the presentation is open.
pub fn create_keyboard_subscription(presentation_open: bool) -> Subscription<Message> {
    if !presentation_open {
        return Subscription::none();
    }

    event::listen_with(|event, status, _window_id| {
        if status == event::Status::Captured {
            return None;
        }
        match event {
            Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => match key_signal(&key) {
                KeySignal::Other => None,
                signal => Some(Message::Key(signal)),
            },
            _ => None,
        }
    })
}

/// Maps a pressed key to its slideshow meaning.
pub fn key_signal(key: &Key) -> KeySignal {
    match key {
        Key::Named(Named::Escape) => KeySignal::Escape,
        Key::Named(Named::ArrowRight) => KeySignal::Forward,
        Key::Named(Named::ArrowLeft) => KeySignal::Backward,
        _ => KeySignal::Other,
    }
}
