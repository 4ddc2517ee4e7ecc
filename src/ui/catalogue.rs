// SPDX-License-Identifier: MPL-2.0
//! Catalogue section: category chips above a wrapped grid of product cards.

use crate::catalogue::{Catalogue, ALL_CATEGORIES};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    font::Weight,
    widget::{button, column, container, text, Column, Row},
    Element, Font, Length,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    SelectCategory(String),
    /// Open the carousel for the entry at this catalogue index.
    ViewImages(usize),
    RequestSamples(usize),
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub catalogue: &'a Catalogue,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = text(ctx.i18n.tr("catalogue-title"))
        .size(typography::TITLE_LG)
        .font(Font {
            weight: Weight::Bold,
            ..Font::default()
        });

    let chips = ctx.catalogue.filter().chips().map(|(chip, active)| {
        let label = if chip == ALL_CATEGORIES {
            ctx.i18n.tr("catalogue-filter-all")
        } else {
            chip.to_string()
        };
        let chip: Element<'a, Message> = button(text(label).size(typography::CAPTION))
            .on_press(Message::SelectCategory(chip.to_string()))
            .style(styles::button::chip(active))
            .padding([spacing::XXS, spacing::SM])
            .into();
        chip
    });
    let chips = Row::with_children(chips).spacing(spacing::XS).wrap();

    let cards: Vec<Element<'a, Message>> = ctx
        .catalogue
        .visible_entries()
        .map(|(index, entry)| {
            let body = column![
                text(entry.title.as_str())
                    .size(typography::TITLE_MD)
                    .font(Font {
                        weight: Weight::Semibold,
                        ..Font::default()
                    }),
                text(entry.description.as_str())
                    .size(typography::BODY)
                    .color(palette::TEXT_MUTED),
                button(text(ctx.i18n.tr("catalogue-view-images")).size(typography::BODY))
                    .on_press(Message::ViewImages(index))
                    .style(styles::button::primary)
                    .width(Length::Fill),
                button(text(ctx.i18n.tr("catalogue-request-samples")).size(typography::BODY))
                    .on_press(Message::RequestSamples(index))
                    .style(styles::button::ghost)
                    .width(Length::Fill),
            ]
            .spacing(spacing::XS);

            container(body)
                .padding(spacing::MD)
                .width(Length::Fixed(sizing::CARD_WIDTH))
                .style(styles::container::card)
                .into()
        })
        .collect();

    let grid: Element<'a, Message> = if cards.is_empty() {
        text(ctx.i18n.tr("catalogue-empty"))
            .color(palette::TEXT_MUTED)
            .into()
    } else {
        Row::with_children(cards)
            .spacing(spacing::MD)
            .wrap()
            .vertical_spacing(spacing::MD)
            .into()
    };

    Column::new()
        .push(title)
        .push(chips)
        .push(grid)
        .spacing(spacing::MD)
        .width(Length::Fill)
        .into()
}
