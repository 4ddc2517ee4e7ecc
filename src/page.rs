// SPDX-License-Identifier: MPL-2.0
//! Host document port.
//!
//! Controllers reach the page through the [`Page`] trait: suspending the
//! background scroll while the modal is up, and scrolling to an anchor.
//! [`PageState`] is the in-process implementation; hosts drain its scroll
//! requests and turn them into real scroll operations.

/// Anchor id of the quote form section.
pub const QUOTE_ANCHOR: &str = "cotizar";

/// Offset applied when scrolling to [`QUOTE_ANCHOR`], leaving room for the
/// sticky header (logical pixels).
pub const QUOTE_ANCHOR_OFFSET: f32 = -100.0;

/// Capabilities of the host document.
pub trait Page {
    /// Enables or suspends scrolling of the content behind overlays.
    fn set_background_scroll(&mut self, enabled: bool);

    /// Scrolls so that `anchor` sits `offset` pixels from the top.
    fn scroll_to(&mut self, anchor: &str, offset: f32);
}

/// A pending scroll operation.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollRequest {
    pub anchor: String,
    pub offset: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    background_scroll: bool,
    scroll_toggles: usize,
    scroll_requests: Vec<ScrollRequest>,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new()
    }
}

impl PageState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            background_scroll: true,
            scroll_toggles: 0,
            scroll_requests: Vec::new(),
        }
    }

    #[must_use]
    pub fn background_scroll(&self) -> bool {
        self.background_scroll
    }

    /// How many times the background scroll flag actually changed.
    #[must_use]
    pub fn scroll_toggles(&self) -> usize {
        self.scroll_toggles
    }

    #[must_use]
    pub fn scroll_requests(&self) -> &[ScrollRequest] {
        &self.scroll_requests
    }

    pub fn take_scroll_requests(&mut self) -> Vec<ScrollRequest> {
        std::mem::take(&mut self.scroll_requests)
    }
}

impl Page for PageState {
    fn set_background_scroll(&mut self, enabled: bool) {
        if self.background_scroll != enabled {
            self.background_scroll = enabled;
            self.scroll_toggles += 1;
            tracing::debug!(enabled, "background scroll changed");
        }
    }

    fn scroll_to(&mut self, anchor: &str, offset: f32) {
        self.scroll_requests.push(ScrollRequest {
            anchor: anchor.to_string(),
            offset,
        });
    }
}
