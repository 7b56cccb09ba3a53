// SPDX-License-Identifier: MPL-2.0
//! The resolved view: decoded text, optional upload preview, and the
//! scan-another / copy actions.

use crate::app::Message;
use crate::i18n::fluent::I18n;
use crate::media::ImagePreview;
use crate::ui::styles::{self, sizing, spacing, typography};
use iced::widget::{button, Button, Column, Container, Image, Row, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Floating card shown while the session is `Resolved`.
pub fn view<'a>(
    i18n: &'a I18n,
    result: &'a str,
    preview: Option<&'a ImagePreview>,
) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("result-title")).size(typography::TITLE);

    let payload = Container::new(Text::new(result).size(typography::RESULT))
        .padding(spacing::MD)
        .style(styles::payload_box);

    let mut body = Column::new()
        .push(title)
        .push(payload)
        .spacing(spacing::SM);

    if let Some(preview) = preview {
        body = body.push(
            Image::new(preview.handle.clone())
                .content_fit(ContentFit::Contain)
                .width(Length::Fixed(sizing::PREVIEW_MAX_EDGE))
                .height(Length::Fixed(sizing::PREVIEW_MAX_EDGE)),
        );
    }

    let actions = Row::new()
        .push(
            Button::new(Text::new(i18n.tr("scan-another")).size(typography::BODY))
                .on_press(Message::ScanAnother)
                .style(button::secondary),
        )
        .push(
            Button::new(Text::new(i18n.tr("copy-result")).size(typography::BODY))
                .on_press(Message::CopyResult)
                .style(button::primary),
        )
        .spacing(spacing::SM);

    let card = Container::new(body.push(actions))
        .width(Length::Fixed(sizing::RESULT_CARD_WIDTH))
        .padding(spacing::LG)
        .style(styles::result_card);

    Container::new(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Top)
        .padding(spacing::MD)
        .into()
}
