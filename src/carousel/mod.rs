// SPDX-License-Identifier: MPL-2.0
//! Modal image carousel.
//!
//! A single modal surface is reused for every product. [`CarouselModal`]
//! tracks where that surface is in its life cycle and which image of the
//! loaded product is current:
//!
//! ```text
//!            open                 Entered
//! Hidden ─────────────▶ Opening ─────────────▶ Visible
//!   ▲                     │  ▲                  │
//!   │ Exited        close │  │ open       close │
//!   │                     ▼  │                  │
//!   └─────────────────── Closing ◀──────────────┘
//! ```
//!
//! Every transition that waits on the animation engine carries a tag in its
//! [`Settled`] payload. A completion whose tag is no longer current is
//! dropped, so reopening during an exit, or navigating again before an image
//! swap lands, never applies an outdated result.

use crate::config::{
    ArrowRightAction, MotionConfig, DEFAULT_IMAGE_FADE_MS, DEFAULT_MODAL_MS,
    DEFAULT_SAMPLE_REQUEST_DELAY_MS, MODAL_HIDDEN_SCALE,
};
use crate::motion::{Animator, Ease, Node, Props, Tween};
use crate::page::{Page, QUOTE_ANCHOR, QUOTE_ANCHOR_OFFSET};
use crate::quote_form::{Interest, QuoteForm};
use std::fmt;
use std::time::Duration;

/// Placeholder written to the quote form message by the sample-request flow
/// when the host does not supply a localized one.
pub const DEFAULT_SAMPLE_PLACEHOLDER: &str =
    "Hola, me interesa solicitar muestras de tela. Necesito que sean...";

// =============================================================================
// Data
// =============================================================================

/// Life-cycle phase of the modal surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Hidden,
    Opening,
    Visible,
    Closing,
}

/// Reference to one product image (path or URL).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRef(String);

impl ImageRef {
    #[must_use]
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ImageRef {
    fn from(reference: &str) -> Self {
        Self::new(reference)
    }
}

/// Product shown by the modal. Title and description are plain text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Product {
    pub title: String,
    pub description: String,
    pub images: Vec<ImageRef>,
}

impl Product {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        images: impl IntoIterator<Item = ImageRef>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            images: images.into_iter().collect(),
        }
    }
}

/// Completion payloads issued by the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settled {
    /// Entrance transition finished.
    Entered { generation: u64 },
    /// Exit transition finished.
    Exited { generation: u64 },
    /// The outgoing image has faded out and the swap may land.
    ImageFadedOut { sequence: u64 },
    /// The sample-request delay elapsed.
    SampleRequest { token: u64 },
}

/// Keys the modal reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    Other,
}

/// One position indicator. The index travels with the dot, so the host binds
/// it straight into its message without any lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dot {
    pub index: usize,
    pub active: bool,
}

/// Host-owned regions the modal animates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nodes {
    pub surface: Node,
    pub image: Node,
}

/// Transition timings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub modal: Duration,
    pub image_fade: Duration,
    pub sample_request_delay: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            modal: Duration::from_millis(DEFAULT_MODAL_MS),
            image_fade: Duration::from_millis(DEFAULT_IMAGE_FADE_MS),
            sample_request_delay: Duration::from_millis(DEFAULT_SAMPLE_REQUEST_DELAY_MS),
        }
    }
}

impl From<&MotionConfig> for Timing {
    fn from(motion: &MotionConfig) -> Self {
        Self {
            modal: motion.modal(),
            image_fade: motion.image_fade(),
            sample_request_delay: motion.sample_request_delay(),
        }
    }
}

/// Collaborators reached during an update.
pub struct Host<'a> {
    pub animator: &'a mut dyn Animator<Settled>,
    pub page: &'a mut dyn Page,
    pub quote_form: &'a mut dyn QuoteForm,
}

impl<'a> Host<'a> {
    pub fn new(
        animator: &'a mut dyn Animator<Settled>,
        page: &'a mut dyn Page,
        quote_form: &'a mut dyn QuoteForm,
    ) -> Self {
        Self {
            animator,
            page,
            quote_form,
        }
    }
}

// =============================================================================
// CarouselModal
// =============================================================================

#[derive(Debug, Clone)]
pub struct CarouselModal {
    nodes: Nodes,
    timing: Timing,
    arrow_right: ArrowRightAction,
    sample_placeholder: String,

    phase: Phase,
    /// Tags the entrance/exit transition in flight.
    generation: u64,
    /// Tags the latest navigation request.
    nav_sequence: u64,
    next_token: u64,
    sample_token: Option<u64>,
    scroll_suspended: bool,

    title: String,
    description: String,
    images: Vec<ImageRef>,
    current_index: usize,
    /// Index of the image actually on screen; trails `current_index` while a
    /// swap is in flight.
    displayed_index: usize,
}

impl CarouselModal {
    #[must_use]
    pub fn new(nodes: Nodes) -> Self {
        Self {
            nodes,
            timing: Timing::default(),
            arrow_right: ArrowRightAction::default(),
            sample_placeholder: DEFAULT_SAMPLE_PLACEHOLDER.to_string(),
            phase: Phase::Hidden,
            generation: 0,
            nav_sequence: 0,
            next_token: 0,
            sample_token: None,
            scroll_suspended: false,
            title: String::new(),
            description: String::new(),
            images: Vec::new(),
            current_index: 0,
            displayed_index: 0,
        }
    }

    #[must_use]
    pub fn with_timing(mut self, timing: Timing) -> Self {
        self.timing = timing;
        self
    }

    #[must_use]
    pub fn with_arrow_right(mut self, action: ArrowRightAction) -> Self {
        self.arrow_right = action;
        self
    }

    #[must_use]
    pub fn with_sample_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.sample_placeholder = placeholder.into();
        self
    }

    // -------------------------------------------------------------------------
    // Opening and closing
    // -------------------------------------------------------------------------

    /// Loads `product` and shows the surface.
    ///
    /// While the surface is already up only the content is replaced. Any
    /// pending sample request is discarded.
    pub fn open(&mut self, product: Product, host: &mut Host<'_>) {
        match self.phase {
            Phase::Hidden | Phase::Closing => self.enter(host),
            Phase::Opening | Phase::Visible => {
                tracing::debug!(title = %product.title, "carousel reloaded while open");
            }
        }

        self.title = product.title;
        self.description = product.description;
        self.images = product.images;
        self.current_index = 0;
        self.displayed_index = 0;
        // Invalidates swaps issued for the previous product.
        self.nav_sequence += 1;
        self.sample_token = None;
        host.animator
            .set_immediate(self.nodes.image, Props::new().opacity(1.0));
    }

    /// Opens `product` and scrolls the page to the quote form, then prefills
    /// the form for a sample request once the configured delay has elapsed.
    pub fn request_samples(&mut self, product: Product, host: &mut Host<'_>) {
        self.open(product, host);
        host.page.scroll_to(QUOTE_ANCHOR, QUOTE_ANCHOR_OFFSET);

        let token = self.next_token;
        self.next_token += 1;
        self.sample_token = Some(token);
        host.animator.delayed_call(
            self.timing.sample_request_delay,
            Settled::SampleRequest { token },
        );
    }

    /// Starts the exit transition. Does nothing unless the surface is up.
    pub fn close(&mut self, host: &mut Host<'_>) {
        if !matches!(self.phase, Phase::Opening | Phase::Visible) {
            tracing::debug!(phase = ?self.phase, "carousel close ignored");
            return;
        }

        self.generation += 1;
        self.phase = Phase::Closing;
        self.sample_token = None;
        tracing::debug!(generation = self.generation, "carousel closing");

        host.animator.animate(
            self.nodes.surface,
            hidden_surface(),
            Tween::new(self.timing.modal)
                .ease(Ease::Power3Out)
                .on_complete(Settled::Exited {
                    generation: self.generation,
                }),
        );
    }

    fn enter(&mut self, host: &mut Host<'_>) {
        let resuming = self.phase == Phase::Closing;
        self.generation += 1;
        self.phase = Phase::Opening;
        tracing::debug!(generation = self.generation, resuming, "carousel opening");

        if !self.scroll_suspended {
            host.page.set_background_scroll(false);
            self.scroll_suspended = true;
        }

        let tween = Tween::new(self.timing.modal)
            .ease(Ease::Power3Out)
            .on_complete(Settled::Entered {
                generation: self.generation,
            });
        if resuming {
            // Continue from wherever the exit left the surface.
            host.animator
                .animate(self.nodes.surface, visible_surface(), tween);
        } else {
            host.animator.animate_from_to(
                self.nodes.surface,
                hidden_surface(),
                visible_surface(),
                tween,
            );
        }
    }

    // -------------------------------------------------------------------------
    // Completions
    // -------------------------------------------------------------------------

    pub fn on_settled(&mut self, settled: Settled, host: &mut Host<'_>) {
        match settled {
            Settled::Entered { generation } => {
                if self.phase == Phase::Opening && generation == self.generation {
                    self.phase = Phase::Visible;
                    tracing::debug!(generation, "carousel visible");
                } else {
                    tracing::debug!(generation, "stale carousel entrance ignored");
                }
            }
            Settled::Exited { generation } => {
                if self.phase == Phase::Closing && generation == self.generation {
                    self.phase = Phase::Hidden;
                    if self.scroll_suspended {
                        host.page.set_background_scroll(true);
                        self.scroll_suspended = false;
                    }
                    tracing::debug!(generation, "carousel hidden");
                } else {
                    tracing::debug!(generation, "stale carousel exit ignored");
                }
            }
            Settled::ImageFadedOut { sequence } => {
                if sequence != self.nav_sequence {
                    tracing::debug!(
                        sequence,
                        latest = self.nav_sequence,
                        "stale image swap ignored"
                    );
                    return;
                }
                self.displayed_index = self.current_index;
                host.animator.animate(
                    self.nodes.image,
                    Props::new().opacity(1.0),
                    Tween::new(self.timing.image_fade),
                );
            }
            Settled::SampleRequest { token } => {
                if self.sample_token != Some(token) || !self.is_open() {
                    tracing::debug!(token, "stale sample request ignored");
                    return;
                }
                self.sample_token = None;
                host.quote_form.set_interest(Interest::Samples);
                host.quote_form.set_message("");
                host.quote_form
                    .set_message_placeholder(&self.sample_placeholder);
                host.quote_form.focus_message();
                tracing::debug!(token, "quote form prefilled for samples");
            }
        }
    }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    pub fn next(&mut self, host: &mut Host<'_>) {
        if !self.can_navigate() || self.images.len() <= 1 {
            return;
        }
        self.current_index = (self.current_index + 1) % self.images.len();
        self.swap_image(host);
    }

    pub fn previous(&mut self, host: &mut Host<'_>) {
        if !self.can_navigate() || self.images.len() <= 1 {
            return;
        }
        let len = self.images.len();
        self.current_index = (self.current_index + len - 1) % len;
        self.swap_image(host);
    }

    /// Jumps to `index`. Out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize, host: &mut Host<'_>) {
        if !self.can_navigate() {
            return;
        }
        if index >= self.images.len() {
            tracing::debug!(index, len = self.images.len(), "carousel index out of range");
            return;
        }
        self.current_index = index;
        self.swap_image(host);
    }

    /// Applies the keyboard contract. Returns true if the key was consumed.
    pub fn handle_key(&mut self, key: Key, host: &mut Host<'_>) -> bool {
        if !self.can_navigate() {
            return false;
        }
        match key {
            Key::Escape => self.close(host),
            Key::ArrowLeft => self.previous(host),
            Key::ArrowRight => match self.arrow_right {
                ArrowRightAction::Previous => self.previous(host),
                ArrowRightAction::Next => self.next(host),
            },
            Key::Other => return false,
        }
        true
    }

    fn swap_image(&mut self, host: &mut Host<'_>) {
        self.nav_sequence += 1;
        host.animator.animate(
            self.nodes.image,
            Props::new().opacity(0.0),
            Tween::new(self.timing.image_fade),
        );
        host.animator.delayed_call(
            self.timing.image_fade,
            Settled::ImageFadedOut {
                sequence: self.nav_sequence,
            },
        );
    }

    fn can_navigate(&self) -> bool {
        matches!(self.phase, Phase::Opening | Phase::Visible)
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns true while any part of the surface is on screen.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.phase != Phase::Hidden
    }

    /// Returns true in `Opening` or `Visible`.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.can_navigate()
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn images(&self) -> &[ImageRef] {
        &self.images
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Image currently on screen.
    #[must_use]
    pub fn displayed_image(&self) -> Option<&ImageRef> {
        self.images.get(self.displayed_index)
    }

    /// Navigation buttons are disabled when there is nothing to cycle through.
    #[must_use]
    pub fn nav_disabled(&self) -> bool {
        self.images.len() <= 1
    }

    #[must_use]
    pub fn dots(&self) -> Vec<Dot> {
        (0..self.images.len())
            .map(|index| Dot {
                index,
                active: index == self.current_index,
            })
            .collect()
    }

    #[must_use]
    pub fn has_pending_sample_request(&self) -> bool {
        self.sample_token.is_some()
    }

    #[must_use]
    pub fn nodes(&self) -> Nodes {
        self.nodes
    }
}

fn hidden_surface() -> Props {
    Props::new().opacity(0.0).scale(MODAL_HIDDEN_SCALE)
}

fn visible_surface() -> Props {
    Props::new().opacity(1.0).scale(1.0)
}
