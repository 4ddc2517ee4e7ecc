// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the page sections.
//!
//! The `App` struct owns the controllers (FAQ disclosure group, carousel
//! modal, quote form), the catalogue, and the motion engine that animates
//! them. Section messages are routed to the controllers; the engine's
//! completions come back on each frame tick and are dispatched to whichever
//! controller issued them.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use update::EntryAction;

use crate::carousel::{self, CarouselModal, Timing};
use crate::catalogue::Catalogue;
use crate::config;
use crate::content::{FaqEntry, SiteContent};
use crate::disclosure::{self, DisclosureGroup};
use crate::i18n::fluent::I18n;
use crate::motion::Engine;
use crate::page::PageState;
use crate::quote_form::QuoteFormState;
use crate::ui;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::{Path, PathBuf};

/// Widget id of the page scrollable.
pub const PAGE_SCROLL_ID: &str = "page";

pub const WINDOW_DEFAULT_HEIGHT: u32 = 820;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 760;

/// Completion payloads of every controller sharing the motion engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Disclosure(disclosure::Settled),
    Carousel(carousel::Settled),
}

impl From<disclosure::Settled> for Completion {
    fn from(settled: disclosure::Settled) -> Self {
        Completion::Disclosure(settled)
    }
}

impl From<carousel::Settled> for Completion {
    fn from(settled: carousel::Settled) -> Self {
        Completion::Carousel(settled)
    }
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    engine: Engine<Completion>,
    faq_entries: Vec<FaqEntry>,
    faq: DisclosureGroup,
    catalogue: Catalogue,
    carousel: CarouselModal,
    page: PageState,
    quote_form: QuoteFormState,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("faq_items", &self.faq.len())
            .field("catalogue_entries", &self.catalogue.entries().len())
            .field("carousel_phase", &self.carousel.phase())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot function; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Loads the site content, falling back to the embedded copy and then to an
/// empty page so that a bad content file never prevents startup.
fn load_content(path: Option<&Path>) -> SiteContent {
    match SiteContent::load(path) {
        Ok(content) => content,
        Err(err) => {
            tracing::warn!(error = %err, "failed to load site content, using embedded content");
            SiteContent::embedded().unwrap_or_else(|err| {
                tracing::warn!(error = %err, "embedded site content is invalid");
                SiteContent::default()
            })
        }
    }
}

impl App {
    /// Initializes application state from configuration, content and the
    /// launcher's flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) =
            config::load_with_override(flags.config_dir.as_ref().map(PathBuf::from));
        if let Some(warning) = config_warning {
            tracing::warn!("{warning}");
        }

        let i18n = I18n::new(flags.lang.clone(), &config);
        let content = load_content(flags.content_path.as_deref().map(Path::new));
        let app = Self::from_parts(i18n, &config, content);

        tracing::info!(
            locale = %app.i18n.current_locale(),
            faq_items = app.faq.len(),
            catalogue_entries = app.catalogue.entries().len(),
            "vitrina started"
        );
        (app, Task::none())
    }

    fn from_parts(i18n: I18n, config: &config::Config, content: SiteContent) -> Self {
        let mut engine: Engine<Completion> = Engine::new();

        let faq = DisclosureGroup::new(content.faq_items(ui::faq::nodes))
            .with_duration(config.motion.disclosure());
        for (position, entry) in content.faq.iter().enumerate() {
            let (body, _) = ui::faq::nodes(position);
            engine.set_natural_height(body, ui::faq::estimated_body_height(&entry.answer));
        }
        faq.mount(&mut engine);

        let carousel = CarouselModal::new(ui::carousel::NODES)
            .with_timing(Timing::from(&config.motion))
            .with_arrow_right(config.carousel.arrow_right.unwrap_or_default())
            .with_sample_placeholder(i18n.tr("quote-sample-placeholder"));

        Self {
            i18n,
            engine,
            faq_entries: content.faq,
            faq,
            catalogue: Catalogue::new(content.catalogue),
            carousel,
            page: PageState::new(),
            quote_form: QuoteFormState::new(),
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        if self.carousel.is_visible() && !self.carousel.title().is_empty() {
            format!("{} - {app_name}", self.carousel.title())
        } else {
            app_name
        }
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_keyboard_subscription(self.carousel.is_open()),
            subscription::create_tick_subscription(self.engine.is_idle()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            engine: &mut self.engine,
            faq: &mut self.faq,
            catalogue: &mut self.catalogue,
            carousel: &mut self.carousel,
            page: &mut self.page,
            quote_form: &mut self.quote_form,
        };

        match message {
            Message::Faq(message) => update::handle_faq_message(&mut ctx, message),
            Message::Catalogue(message) => update::handle_catalogue_message(&mut ctx, message),
            Message::Carousel(message) => update::handle_carousel_message(&mut ctx, message),
            Message::Quote(message) => update::handle_quote_message(&mut ctx, message),
            Message::KeyPressed(key) => update::handle_key(&mut ctx, key),
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
        }

        update::drain_effects(&mut self.page, &mut self.quote_form)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            engine: &self.engine,
            faq_entries: &self.faq_entries,
            faq: &self.faq,
            catalogue: &self.catalogue,
            carousel: &self.carousel,
            page: &self.page,
            quote_form: &self.quote_form,
        })
    }
}
