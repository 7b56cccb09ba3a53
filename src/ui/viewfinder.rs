// SPDX-License-Identifier: MPL-2.0
//! The live camera viewfinder, or a placeholder when no feed is available.

use crate::app::Message;
use crate::i18n::fluent::I18n;
use crate::scanner::VideoFrame;
use crate::ui::styles::typography;
use iced::widget::{Container, Image, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Renders the camera feed filling the window, cropping like the original's
/// cover-fit video element. Before the first frame (or once the camera has
/// reported itself unavailable) a status line takes its place.
pub fn view<'a>(
    frame: Option<&'a VideoFrame>,
    unavailable: bool,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    match frame {
        Some(frame) => Container::new(
            Image::new(frame.handle.clone())
                .content_fit(ContentFit::Cover)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .into(),
        None => {
            let key = if unavailable {
                "viewfinder-unavailable"
            } else {
                "viewfinder-waiting"
            };
            Container::new(Text::new(i18n.tr(key)).size(typography::TITLE))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center)
                .into()
        }
    }
}
