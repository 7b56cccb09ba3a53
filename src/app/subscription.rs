// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Three sources: the live capture stream, window close requests (so the
//! camera can be released first), and a periodic tick that drives toast
//! auto-dismiss only while toasts are showing.

use super::{App, Message};
use crate::scanner::capture;
use iced::{event, time, Subscription};
use std::time::Duration;

pub fn subscription(app: &App) -> Subscription<Message> {
    let mut subscriptions = vec![close_request_subscription()];

    // Once the camera has reported itself unavailable there is nothing to
    // restart; the session continues in upload-only mode.
    if !app.capture.is_unavailable() {
        subscriptions
            .push(capture::subscription(app.camera_index, app.mirror_preview).map(Message::Capture));
    }

    if app.notifications.has_notifications() {
        subscriptions.push(time::every(Duration::from_millis(100)).map(Message::Tick));
    }

    Subscription::batch(subscriptions)
}

fn close_request_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| {
        if let event::Event::Window(iced::window::Event::CloseRequested) = &event {
            Some(Message::WindowCloseRequested(window_id))
        } else {
            None
        }
    })
}
