// SPDX-License-Identifier: MPL-2.0
//! FAQ section: the disclosure group rendered as collapsible cards.
//!
//! Body height and opacity come from the motion engine, so the open and
//! close transitions run frame by frame while the group only tracks
//! committed state.

use crate::content::{faq_item_id, FaqEntry};
use crate::disclosure::{DisclosureGroup, ItemId};
use crate::i18n::fluent::I18n;
use crate::motion::{Engine, Height, Node};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    font::Weight,
    widget::{button, container, text, Column, Row},
    Color, Element, Font, Length,
};

/// First node id handed to FAQ items; each item takes two.
const FIRST_NODE: u32 = 100;

/// Average glyph width as a fraction of the font size.
const GLYPH_WIDTH_RATIO: f32 = 0.55;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Toggle(ItemId),
}

/// Body and indicator nodes of the FAQ entry at `position`.
#[must_use]
pub fn nodes(position: usize) -> (Node, Node) {
    let base = FIRST_NODE + 2 * u32::try_from(position).unwrap_or(u32::MAX / 4);
    (Node::new(base), Node::new(base + 1))
}

/// Natural height of an answer body, measured from its wrapped line count.
#[must_use]
pub fn estimated_body_height(answer: &str) -> f32 {
    let text_width = sizing::CONTENT_MAX_WIDTH - 2.0 * spacing::LG;
    let chars_per_line = (text_width / (typography::BODY * GLYPH_WIDTH_RATIO)).floor().max(1.0);
    let lines: f32 = answer
        .lines()
        .map(|line| (line.chars().count() as f32 / chars_per_line).ceil().max(1.0))
        .sum();
    lines.max(1.0) * typography::BODY_LINE_HEIGHT + 2.0 * spacing::SM
}

pub struct ViewContext<'a, C> {
    pub i18n: &'a I18n,
    pub entries: &'a [FaqEntry],
    pub group: &'a DisclosureGroup,
    pub engine: &'a Engine<C>,
}

pub fn view<'a, C>(ctx: ViewContext<'a, C>) -> Element<'a, Message> {
    let title = text(ctx.i18n.tr("faq-title"))
        .size(typography::TITLE_LG)
        .font(Font {
            weight: Weight::Bold,
            ..Font::default()
        });

    let items = ctx
        .entries
        .iter()
        .enumerate()
        .map(|(position, entry)| view_item(&ctx, position, entry));

    Column::new()
        .push(title)
        .extend(items)
        .spacing(spacing::SM)
        .width(Length::Fill)
        .into()
}

fn view_item<'a, C>(
    ctx: &ViewContext<'a, C>,
    position: usize,
    entry: &'a FaqEntry,
) -> Element<'a, Message> {
    let id = faq_item_id(position);
    let (body_node, indicator_node) = nodes(position);

    let rotation = ctx.engine.values(indicator_node).rotation;
    let indicator = if rotation < 90.0 { "▼" } else { "▲" };

    let summary = button(
        Row::new()
            .push(
                text(entry.question.as_str())
                    .size(typography::BODY_LG)
                    .width(Length::Fill),
            )
            .push(text(indicator).size(typography::CAPTION).color(palette::BRAND_GREEN)),
    )
    .on_press(Message::Toggle(id))
    .style(styles::button::ghost)
    .width(Length::Fill)
    .padding(spacing::MD);

    let mut card = Column::new().push(summary);

    if ctx.group.is_open(id) {
        let values = ctx.engine.values(body_node);
        let height = match values.height {
            Height::Auto => Length::Shrink,
            Height::Px(px) => Length::Fixed(px.max(0.0)),
        };
        let body = container(
            text(entry.answer.as_str())
                .size(typography::BODY)
                .color(Color {
                    a: values.opacity,
                    ..palette::TEXT_MUTED
                }),
        )
        .padding([spacing::SM, spacing::LG])
        .width(Length::Fill)
        .height(height)
        .clip(true);
        card = card.push(body);
    }

    container(card).style(styles::container::card).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nodes_do_not_overlap() {
        let (body_0, indicator_0) = nodes(0);
        let (body_1, _) = nodes(1);
        assert_ne!(body_0, indicator_0);
        assert_ne!(indicator_0, body_1);
        assert_eq!(body_1.raw(), FIRST_NODE + 2);
    }

    #[test]
    fn longer_answers_are_taller() {
        let short = estimated_body_height("Sí.");
        let long = estimated_body_height(&"palabra ".repeat(200));
        assert!(long > short);
        assert!(short >= typography::BODY_LINE_HEIGHT);
    }

    #[test]
    fn explicit_lines_count_separately() {
        let one = estimated_body_height("a");
        let three = estimated_body_height("a\nb\nc");
        assert!((three - one - 2.0 * typography::BODY_LINE_HEIGHT).abs() < 0.01);
    }
}
