// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// White card used by catalogue entries and FAQ items.
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::WHITE)),
        text_color: Some(palette::TEXT),
        border: Border {
            color: palette::BORDER,
            width: 1.0,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

/// Page background.
pub fn page(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::SURFACE)),
        text_color: Some(palette::TEXT),
        ..Default::default()
    }
}

/// Full-window backdrop behind the modal, faded with the surface.
pub fn backdrop(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP * alpha,
            ..palette::BRAND_DEEP
        })),
        ..Default::default()
    }
}

/// Modal surface. `alpha` follows the entrance/exit transition.
pub fn modal_surface(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::WHITE
        })),
        text_color: Some(Color {
            a: alpha,
            ..palette::TEXT
        }),
        border: Border {
            radius: radius::LARGE.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
