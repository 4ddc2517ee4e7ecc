// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is one scrollable column of sections. While the carousel is on
//! screen it is stacked over the page, and the page scroll is locked for as
//! long as the modal holds the background scroll suspended.

use super::{Completion, Message, PAGE_SCROLL_ID};
use crate::carousel::CarouselModal;
use crate::catalogue::Catalogue;
use crate::content::FaqEntry;
use crate::disclosure::DisclosureGroup;
use crate::i18n::fluent::I18n;
use crate::motion::Engine;
use crate::page::PageState;
use crate::quote_form::QuoteFormState;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::widgets::scroll_lock;
use crate::ui::{carousel, catalogue, faq, quote, styles};
use iced::{
    widget::{container, scrollable, Column, Id, Stack},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub engine: &'a Engine<Completion>,
    pub faq_entries: &'a [FaqEntry],
    pub faq: &'a DisclosureGroup,
    pub catalogue: &'a Catalogue,
    pub carousel: &'a CarouselModal,
    pub page: &'a PageState,
    pub quote_form: &'a QuoteFormState,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let sections = Column::new()
        .push(
            catalogue::view(catalogue::ViewContext {
                i18n: ctx.i18n,
                catalogue: ctx.catalogue,
            })
            .map(Message::Catalogue),
        )
        .push(
            faq::view(faq::ViewContext {
                i18n: ctx.i18n,
                entries: ctx.faq_entries,
                group: ctx.faq,
                engine: ctx.engine,
            })
            .map(Message::Faq),
        )
        .push(
            quote::view(quote::ViewContext {
                i18n: ctx.i18n,
                form: ctx.quote_form,
            })
            .map(Message::Quote),
        )
        .spacing(spacing::XXL)
        .padding(spacing::XL)
        .max_width(sizing::CONTENT_MAX_WIDTH);

    let page = scrollable(container(sections).center_x(Length::Fill))
        .id(Id::new(PAGE_SCROLL_ID))
        .width(Length::Fill)
        .height(Length::Fill);

    let page = container(scroll_lock(page, !ctx.page.background_scroll()))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page);

    if !ctx.carousel.is_visible() {
        return page.into();
    }

    let overlay = carousel::view(carousel::ViewContext {
        i18n: ctx.i18n,
        modal: ctx.carousel,
        engine: ctx.engine,
    })
    .map(Message::Carousel);

    Stack::new()
        .push(page)
        .push(overlay)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
