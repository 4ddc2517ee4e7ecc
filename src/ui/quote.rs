// SPDX-License-Identifier: MPL-2.0
//! Quote request section.

use crate::i18n::fluent::I18n;
use crate::quote_form::{FieldGroup, Interest, QuoteFormState};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::{
    font::Weight,
    widget::{button, column, container, radio, text, text_input, Column, Id, Row},
    Element, Font, Length,
};

/// Widget id of the message input, target of focus requests.
pub const MESSAGE_INPUT_ID: &str = "quote-message";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Click on one of the product-type cards.
    SelectType(Interest),
    InterestChanged(Interest),
    MessageChanged(String),
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub form: &'a QuoteFormState,
}

fn interest_label(i18n: &I18n, interest: Interest) -> String {
    match interest {
        Interest::Fabric => i18n.tr("quote-interest-fabric"),
        Interest::FinishedProduct => i18n.tr("quote-interest-product"),
        Interest::Samples => i18n.tr("quote-interest-samples"),
        Interest::None => String::new(),
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = text(ctx.i18n.tr("quote-title"))
        .size(typography::TITLE_LG)
        .font(Font {
            weight: Weight::Bold,
            ..Font::default()
        });

    let cards = Interest::ALL.into_iter().map(|interest| {
        let selected = ctx.form.selected_card() == Some(interest);
        let card: Element<'a, Message> = button(
            container(text(interest_label(ctx.i18n, interest)).size(typography::BODY_LG))
                .padding(spacing::MD),
        )
        .on_press(Message::SelectType(interest))
        .style(styles::button::chip(selected))
        .into();
        card
    });
    let cards = Row::with_children(cards).spacing(spacing::SM).wrap();

    let selected_interest = match ctx.form.interest() {
        Interest::None => None,
        interest => Some(interest),
    };
    let radios = Interest::ALL.into_iter().map(|interest| {
        let choice: Element<'a, Message> = radio(
            interest_label(ctx.i18n, interest),
            interest,
            selected_interest,
            Message::InterestChanged,
        )
        .size(typography::BODY)
        .into();
        choice
    });
    let radios = Column::with_children(radios).spacing(spacing::XS);

    let fields: Element<'a, Message> = match ctx.form.visible_fields() {
        Some(FieldGroup::Fabric) => text(ctx.i18n.tr("quote-fabric-fields"))
            .color(palette::TEXT_MUTED)
            .into(),
        Some(FieldGroup::Product) => text(ctx.i18n.tr("quote-product-fields"))
            .color(palette::TEXT_MUTED)
            .into(),
        None => Column::new().into(),
    };

    let placeholder = ctx
        .form
        .placeholder()
        .map(str::to_string)
        .unwrap_or_else(|| ctx.i18n.tr("quote-message-placeholder"));
    let message = column![
        text(ctx.i18n.tr("quote-message-label")).size(typography::CAPTION),
        text_input(&placeholder, ctx.form.message())
            .id(Id::new(MESSAGE_INPUT_ID))
            .on_input(Message::MessageChanged)
            .padding(spacing::SM)
            .width(Length::Fill),
    ]
    .spacing(spacing::XXS);

    let form = column![
        text(ctx.i18n.tr("quote-interest-label")).size(typography::CAPTION),
        radios,
        fields,
        message,
    ]
    .spacing(spacing::MD);

    container(column![title, cards, form].spacing(spacing::LG))
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn every_selectable_interest_has_a_label() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        for interest in Interest::ALL {
            assert!(!interest_label(&i18n, interest).is_empty());
        }
        assert!(interest_label(&i18n, Interest::None).is_empty());
    }
}
