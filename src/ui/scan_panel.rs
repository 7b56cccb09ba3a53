// SPDX-License-Identifier: MPL-2.0
//! The scanning overlay: status pill plus the upload control.

use crate::app::Message;
use crate::i18n::fluent::I18n;
use crate::ui::styles::{self, spacing, typography};
use iced::widget::{button, Button, Column, Container, Text};
use iced::{alignment, Element, Length};

/// Floating pill shown while the session is `Scanning`: a status line and
/// the "upload image" alternative input path.
pub fn view<'a>(i18n: &'a I18n, camera_unavailable: bool) -> Element<'a, Message> {
    let status_key = if camera_unavailable {
        "scan-status-camera-unavailable"
    } else {
        "scan-status-scanning"
    };

    let status = Text::new(i18n.tr(status_key)).size(typography::TITLE);

    let upload = Button::new(Text::new(i18n.tr("upload-image")).size(typography::BODY))
        .on_press(Message::UploadImage)
        .style(button::primary);

    let pill = Container::new(
        Column::new()
            .push(status)
            .push(upload)
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center),
    )
    .padding(spacing::MD)
    .style(styles::overlay_pill);

    Container::new(pill)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Left)
        .align_y(alignment::Vertical::Top)
        .padding(spacing::MD)
        .into()
}
