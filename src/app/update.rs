// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Controllers never touch widgets. They write to the page and quote form
//! ports, and [`drain_effects`] turns whatever those ports recorded into
//! Iced tasks once the message has been handled.

use super::{Completion, Message, PAGE_SCROLL_ID};
use crate::carousel::{CarouselModal, Host};
use crate::catalogue::{self, Catalogue};
use crate::disclosure::DisclosureGroup;
use crate::motion::Engine;
use crate::page::{PageState, ScrollRequest, QUOTE_ANCHOR};
use crate::quote_form::{QuoteForm, QuoteFormState};
use crate::ui::{carousel, catalogue as catalogue_view, faq, quote};
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::Task;
use std::time::Instant;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub engine: &'a mut Engine<Completion>,
    pub faq: &'a mut DisclosureGroup,
    pub catalogue: &'a mut Catalogue,
    pub carousel: &'a mut CarouselModal,
    pub page: &'a mut PageState,
    pub quote_form: &'a mut QuoteFormState,
}

/// How a catalogue entry reaches the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryAction {
    ViewImages,
    RequestSamples,
}

pub fn handle_faq_message(ctx: &mut UpdateContext<'_>, message: faq::Message) {
    match message {
        faq::Message::Toggle(id) => ctx.faq.handle_activate(id, &mut *ctx.engine),
    }
}

pub fn handle_catalogue_message(ctx: &mut UpdateContext<'_>, message: catalogue_view::Message) {
    match message {
        catalogue_view::Message::SelectCategory(chip) => {
            if ctx.catalogue.select_category(&chip) {
                tracing::debug!(chip = %chip, "catalogue filter changed");
            }
        }
        catalogue_view::Message::ViewImages(index) => {
            select_entry(ctx, index, EntryAction::ViewImages);
        }
        catalogue_view::Message::RequestSamples(index) => {
            select_entry(ctx, index, EntryAction::RequestSamples);
        }
    }
}

/// Parses the entry's image list and hands the product to the carousel.
/// Returns false if the entry is unknown or its image list is rejected.
pub fn select_entry(ctx: &mut UpdateContext<'_>, index: usize, action: EntryAction) -> bool {
    let Some(entry) = ctx.catalogue.entry(index) else {
        tracing::debug!(index, "unknown catalogue entry");
        return false;
    };
    let mut host = Host::new(&mut *ctx.engine, &mut *ctx.page, &mut *ctx.quote_form);
    match action {
        EntryAction::ViewImages => catalogue::open_entry(entry, ctx.carousel, &mut host),
        EntryAction::RequestSamples => catalogue::request_samples(entry, ctx.carousel, &mut host),
    }
}

pub fn handle_carousel_message(ctx: &mut UpdateContext<'_>, message: carousel::Message) {
    let mut host = Host::new(&mut *ctx.engine, &mut *ctx.page, &mut *ctx.quote_form);
    match message {
        carousel::Message::Close => ctx.carousel.close(&mut host),
        carousel::Message::Previous => ctx.carousel.previous(&mut host),
        carousel::Message::Next => ctx.carousel.next(&mut host),
        carousel::Message::GoTo(index) => ctx.carousel.go_to(index, &mut host),
        carousel::Message::Swallow => {}
    }
}

pub fn handle_quote_message(ctx: &mut UpdateContext<'_>, message: quote::Message) {
    match message {
        quote::Message::SelectType(interest) => {
            ctx.quote_form.select_type(interest, &mut *ctx.page);
        }
        quote::Message::InterestChanged(interest) => {
            ctx.quote_form.on_interest_changed(interest);
        }
        quote::Message::MessageChanged(text) => ctx.quote_form.set_message(&text),
    }
}

pub fn handle_key(ctx: &mut UpdateContext<'_>, key: crate::carousel::Key) {
    let mut host = Host::new(&mut *ctx.engine, &mut *ctx.page, &mut *ctx.quote_form);
    ctx.carousel.handle_key(key, &mut host);
}

/// Advances the engine and delivers the completions that came due.
pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) {
    for completion in ctx.engine.tick(now) {
        match completion {
            Completion::Disclosure(settled) => ctx.faq.on_settled(settled, &mut *ctx.engine),
            Completion::Carousel(settled) => {
                let mut host = Host::new(&mut *ctx.engine, &mut *ctx.page, &mut *ctx.quote_form);
                ctx.carousel.on_settled(settled, &mut host);
            }
        }
    }
}

/// Converts the requests recorded by the page and quote form into tasks.
pub fn drain_effects(page: &mut PageState, quote_form: &mut QuoteFormState) -> Task<Message> {
    let mut tasks: Vec<Task<Message>> = page
        .take_scroll_requests()
        .iter()
        .map(scroll_to_anchor)
        .collect();

    if quote_form.take_focus_request() {
        tasks.push(operation::focus(Id::new(quote::MESSAGE_INPUT_ID)));
    }

    Task::batch(tasks)
}

fn scroll_to_anchor(request: &ScrollRequest) -> Task<Message> {
    if request.anchor == QUOTE_ANCHOR {
        // The quote form closes the page, so its anchor is the scroll end.
        operation::snap_to(Id::new(PAGE_SCROLL_ID), RelativeOffset { x: 0.0, y: 1.0 })
    } else {
        tracing::debug!(anchor = %request.anchor, "scroll request for unknown anchor");
        Task::none()
    }
}
