// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius,
};
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

/// Main call to action.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::BRAND_GREEN_2,
        button::Status::Disabled => palette::BORDER,
        button::Status::Active | button::Status::Pressed => palette::BRAND_GREEN,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: background,
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: Shadow::default(),
        snap: true,
    }
}

/// Borderless text button used for summaries and secondary actions.
pub fn ghost(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered => palette::BRAND_GREEN_2,
        button::Status::Disabled => palette::TEXT_MUTED,
        _ => palette::TEXT,
    };
    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: Shadow::default(),
        snap: true,
    }
}

/// Filter chip or selection card, highlighted when `active`.
pub fn chip(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let (background, border_color) = if active {
            (palette::SURFACE_2, palette::BRAND_GREEN_2)
        } else if status == button::Status::Hovered {
            (palette::SURFACE, palette::BRAND_GREEN_2)
        } else {
            (WHITE, palette::BORDER)
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color: palette::TEXT,
            border: Border {
                color: border_color,
                width: if active { 2.0 } else { 1.0 },
                radius: radius::FULL.into(),
            },
            shadow: Shadow::default(),
            snap: true,
        }
    }
}

/// Position indicator of the carousel.
pub fn dot(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let color = if active {
            palette::BRAND_LIME
        } else if status == button::Status::Hovered {
            Color { a: 0.8, ..WHITE }
        } else {
            Color { a: 0.45, ..WHITE }
        };
        button::Style {
            background: Some(Background::Color(color)),
            text_color: color,
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            shadow: Shadow::default(),
            snap: true,
        }
    }
}
