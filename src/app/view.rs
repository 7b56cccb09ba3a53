// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The window is a stack: the viewfinder fills it, one of the two
//! mutually-exclusive session views floats on top, and toasts render above
//! everything.

use super::{App, Message};
use crate::ui::notifications::Toast;
use crate::ui::{result_card, scan_panel, viewfinder};
use iced::widget::Stack;
use iced::{Element, Length};

pub fn view(app: &App) -> Element<'_, Message> {
    let feed = viewfinder::view(
        app.capture.latest_frame(),
        app.capture.is_unavailable(),
        &app.i18n,
    );

    let session_view: Element<'_, Message> = match app.session.result() {
        Some(result) => result_card::view(&app.i18n, result, app.session.preview()),
        None => scan_panel::view(&app.i18n, app.capture.is_unavailable()),
    };

    let toasts = Toast::view_overlay(&app.notifications, &app.i18n).map(Message::Notification);

    Stack::with_children(vec![feed, session_view, toasts])
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
