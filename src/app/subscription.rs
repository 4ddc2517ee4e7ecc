// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard events reach the carousel only while it is open, and the frame
//! tick runs only while the motion engine has work.

use super::Message;
use crate::carousel::Key;
use iced::keyboard::{self, key::Named};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Frame interval of the motion engine tick.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Routes window-wide key presses to the carousel.
///
/// Keys already captured by a focused widget (for instance the message
/// input of the quote form) are left alone.
pub fn create_keyboard_subscription(carousel_open: bool) -> Subscription<Message> {
    if !carousel_open {
        return Subscription::none();
    }

    event::listen_with(|event, status, _window_id| {
        if status == event::Status::Captured {
            return None;
        }
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                map_key(&key).map(Message::KeyPressed)
            }
            _ => None,
        }
    })
}

/// Creates the frame tick driving the motion engine.
pub fn create_tick_subscription(engine_idle: bool) -> Subscription<Message> {
    if engine_idle {
        Subscription::none()
    } else {
        time::every(FRAME_INTERVAL).map(Message::Tick)
    }
}

fn map_key(key: &keyboard::Key) -> Option<Key> {
    match key {
        keyboard::Key::Named(Named::Escape) => Some(Key::Escape),
        keyboard::Key::Named(Named::ArrowLeft) => Some(Key::ArrowLeft),
        keyboard::Key::Named(Named::ArrowRight) => Some(Key::ArrowRight),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_carousel_keys() {
        assert_eq!(
            map_key(&keyboard::Key::Named(Named::Escape)),
            Some(Key::Escape)
        );
        assert_eq!(
            map_key(&keyboard::Key::Named(Named::ArrowRight)),
            Some(Key::ArrowRight)
        );
        assert_eq!(map_key(&keyboard::Key::Named(Named::Enter)), None);
        assert_eq!(map_key(&keyboard::Key::Character("a".into())), None);
    }
}
