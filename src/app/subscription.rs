// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes native events (keyboard, window) to messages based on the current
//! screen, and runs a coarse tick while a debounced scroll write is pending.
//!
//! Keyboard paging only applies on the slider; the gallery's scrollable
//! handles its own input. Window close requests are handled on both screens
//! so pending position writes are flushed before exit.

use super::{App, Message, Screen};
use crate::ui::slider;
use iced::{event, keyboard, time, window, Subscription};
use std::time::Duration;

/// Interval at which pending scroll writes are re-examined.
const TICK_INTERVAL_MS: u64 = 100;

impl App {
    /// Builds the subscription set for the current application state.
    pub fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = vec![create_event_subscription(self.screen())];

        if self.has_pending_scroll() {
            subscriptions
                .push(time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick));
        }

        Subscription::batch(subscriptions)
    }
}

/// Creates the event subscription for the given screen.
fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Slider { .. } => event::listen_with(slider_events),
        Screen::Gallery => event::listen_with(gallery_events),
    }
}

fn slider_events(
    event: event::Event,
    _status: event::Status,
    window_id: window::Id,
) -> Option<Message> {
    if let event::Event::Window(window::Event::CloseRequested) = &event {
        return Some(Message::WindowCloseRequested(window_id));
    }

    let event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = event else {
        return None;
    };

    match key {
        keyboard::Key::Named(keyboard::key::Named::ArrowRight) => {
            Some(Message::Slider(slider::Message::NextRequested))
        }
        keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => {
            Some(Message::Slider(slider::Message::PreviousRequested))
        }
        keyboard::Key::Named(keyboard::key::Named::Escape) => {
            Some(Message::Slider(slider::Message::BackRequested))
        }
        _ => None,
    }
}

fn gallery_events(
    event: event::Event,
    _status: event::Status,
    window_id: window::Id,
) -> Option<Message> {
    if let event::Event::Window(window::Event::CloseRequested) = &event {
        return Some(Message::WindowCloseRequested(window_id));
    }

    None
}
