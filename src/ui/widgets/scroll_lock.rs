// SPDX-License-Identifier: MPL-2.0
//! A wrapper widget that can suspend scrolling of the content it wraps.
//!
//! While locked, wheel and scroll-key events never reach the content, so a
//! page behind a modal keeps its position. Every other event passes through.

use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::keyboard::{self, key::Named};
use iced::{Element, Event, Length, Rectangle, Size};

/// Page wrapper that drops scroll input while `locked` is set.
pub struct ScrollLock<'a, Message, Theme, Renderer> {
    page: Element<'a, Message, Theme, Renderer>,
    locked: bool,
}

impl<'a, Message, Theme, Renderer> ScrollLock<'a, Message, Theme, Renderer> {
    pub fn new(page: impl Into<Element<'a, Message, Theme, Renderer>>, locked: bool) -> Self {
        Self {
            page: page.into(),
            locked,
        }
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for ScrollLock<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn size(&self) -> Size<Length> {
        self.page.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let page_tree = &mut tree.children[0];
        self.page.as_widget_mut().layout(page_tree, renderer, limits)
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.page)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.page]);
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        let page_tree = &tree.children[0];
        self.page
            .as_widget()
            .draw(page_tree, renderer, theme, style, layout, cursor, viewport);
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        if blocks(self.locked, event) {
            return;
        }

        let page_tree = &mut tree.children[0];
        self.page.as_widget_mut().update(
            page_tree, event, layout, cursor, renderer, clipboard, shell, viewport,
        );
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        let page_tree = &tree.children[0];
        self.page
            .as_widget()
            .mouse_interaction(page_tree, layout, cursor, viewport, renderer)
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        // Programmatic scrolling (snap_to) still reaches the page.
        let page_tree = &mut tree.children[0];
        self.page
            .as_widget_mut()
            .operate(page_tree, layout, renderer, operation);
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: iced::Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        let page_tree = &mut tree.children[0];
        self.page
            .as_widget_mut()
            .overlay(page_tree, layout, renderer, viewport, translation)
    }
}

impl<'a, Message, Theme, Renderer> From<ScrollLock<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(lock: ScrollLock<'a, Message, Theme, Renderer>) -> Self {
        Self::new(lock)
    }
}

/// Wraps `page`, suspending its scrolling while `locked` is true.
pub fn scroll_lock<'a, Message, Theme, Renderer>(
    page: impl Into<Element<'a, Message, Theme, Renderer>>,
    locked: bool,
) -> ScrollLock<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    ScrollLock::new(page, locked)
}

fn blocks(locked: bool, event: &Event) -> bool {
    locked && is_scroll_event(event)
}

fn is_scroll_event(event: &Event) -> bool {
    match event {
        Event::Mouse(mouse::Event::WheelScrolled { .. }) => true,
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => is_scroll_key(key),
        _ => false,
    }
}

fn is_scroll_key(key: &keyboard::Key) -> bool {
    matches!(
        key,
        keyboard::Key::Named(
            Named::PageUp
                | Named::PageDown
                | Named::Home
                | Named::End
                | Named::ArrowUp
                | Named::ArrowDown
                | Named::Space
        )
    )
}
