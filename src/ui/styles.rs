// SPDX-License-Identifier: MPL-2.0
//! Shared design tokens and widget styles.
//!
//! A trimmed token set keeps spacing, sizing, and the severity palette in
//! one place so the scanning overlay, result card, and toasts stay visually
//! consistent.

use iced::{Background, Border, Color, Theme};

pub mod palette {
    use iced::Color;

    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
}

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

pub mod sizing {
    pub const TOAST_WIDTH: f32 = 320.0;
    pub const RESULT_CARD_WIDTH: f32 = 420.0;
    pub const PREVIEW_MAX_EDGE: f32 = 100.0;
}

pub mod typography {
    pub const BODY: f32 = 14.0;
    pub const TITLE: f32 = 18.0;
    pub const RESULT: f32 = 16.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const PILL: f32 = 20.0;
}

/// Semi-opaque dark pill floated over the viewfinder, holding the scanning
/// status and the upload control.
pub fn overlay_pill(_theme: &Theme) -> iced::widget::container::Style {
    iced::widget::container::Style {
        background: Some(Background::Color(Color {
            a: 0.5,
            ..Color::BLACK
        })),
        text_color: Some(Color::WHITE),
        border: Border {
            radius: radius::PILL.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

/// Elevated card surface used for the resolved result.
pub fn result_card(theme: &Theme) -> iced::widget::container::Style {
    let palette = theme.extended_palette();
    iced::widget::container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        text_color: Some(palette.background.base.text),
        border: Border {
            radius: radius::MD.into(),
            width: 1.0,
            color: palette.background.strong.color,
        },
        ..Default::default()
    }
}

/// Thin outlined box around the decoded payload text.
pub fn payload_box(theme: &Theme) -> iced::widget::container::Style {
    let palette = theme.extended_palette();
    iced::widget::container::Style {
        border: Border {
            radius: radius::SM.into(),
            width: 1.0,
            color: palette.background.strong.color,
        },
        ..Default::default()
    }
}
