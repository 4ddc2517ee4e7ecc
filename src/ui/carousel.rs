// SPDX-License-Identifier: MPL-2.0
//! Carousel overlay.
//!
//! The surface is drawn from the motion engine's values for [`NODES`]:
//! opacity fades the backdrop and the card together, and scale narrows the
//! card. Clicking the backdrop closes the modal; clicks on the card itself
//! are swallowed so they never reach the backdrop.

use crate::carousel::{CarouselModal, Nodes};
use crate::i18n::fluent::I18n;
use crate::motion::{Engine, Node};
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use fluent_bundle::FluentValue;
use iced::{
    alignment::Horizontal,
    font::Weight,
    widget::{button, column, container, image, mouse_area, row, text, Column, Row},
    Color, ContentFit, Element, Font, Length,
};

/// Engine nodes of the modal surface and its image.
pub const NODES: Nodes = Nodes {
    surface: Node::new(1),
    image: Node::new(2),
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Close,
    Previous,
    Next,
    GoTo(usize),
    /// Click inside the card; consumed so the backdrop does not close.
    Swallow,
}

pub struct ViewContext<'a, C> {
    pub i18n: &'a I18n,
    pub modal: &'a CarouselModal,
    pub engine: &'a Engine<C>,
}

pub fn view<'a, C>(ctx: ViewContext<'a, C>) -> Element<'a, Message> {
    let nodes = ctx.modal.nodes();
    let surface = ctx.engine.values(nodes.surface);
    let alpha = surface.opacity.clamp(0.0, 1.0);
    let image_alpha = ctx.engine.values(nodes.image).opacity.clamp(0.0, 1.0);

    let header = row![
        text(ctx.modal.title())
            .size(typography::TITLE_MD)
            .font(Font {
                weight: Weight::Bold,
                ..Font::default()
            })
            .color(faded(palette::TEXT, alpha))
            .width(Length::Fill),
        button(text(ctx.i18n.tr("modal-close")).size(typography::CAPTION))
            .on_press(Message::Close)
            .style(styles::button::ghost),
    ]
    .spacing(spacing::SM);

    let picture: Element<'a, Message> = match ctx.modal.displayed_image() {
        Some(reference) => image(image::Handle::from_path(reference.as_str()))
            .content_fit(ContentFit::Contain)
            .opacity(image_alpha * alpha)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::MODAL_IMAGE_HEIGHT))
            .into(),
        None => container(
            text(ctx.i18n.tr("modal-no-images")).color(faded(palette::TEXT_MUTED, alpha)),
        )
        .center_x(Length::Fill)
        .center_y(Length::Fixed(sizing::MODAL_IMAGE_HEIGHT))
        .into(),
    };

    let nav_enabled = !ctx.modal.nav_disabled();
    let controls = row![
        button(text(ctx.i18n.tr("modal-previous")).size(typography::BODY))
            .on_press_maybe(nav_enabled.then_some(Message::Previous))
            .style(styles::button::ghost),
        dots(ctx.modal),
        button(text(ctx.i18n.tr("modal-next")).size(typography::BODY))
            .on_press_maybe(nav_enabled.then_some(Message::Next))
            .style(styles::button::ghost),
    ]
    .spacing(spacing::MD)
    .align_y(iced::Alignment::Center);

    let total = ctx.modal.images().len();
    let position: Element<'a, Message> = if total > 0 {
        text(ctx.i18n.tr_with_args(
            "modal-position",
            &[
                ("current", FluentValue::from(ctx.modal.current_index() + 1)),
                ("total", FluentValue::from(total)),
            ],
        ))
        .size(typography::CAPTION)
        .color(faded(palette::TEXT_MUTED, alpha))
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .into()
    } else {
        Column::new().into()
    };

    let description = text(ctx.modal.description())
        .size(typography::BODY)
        .color(faded(palette::TEXT_MUTED, alpha));

    let card = container(
        column![header, picture, controls, position, description].spacing(spacing::MD),
    )
    .padding(spacing::LG)
    .width(Length::Fixed(sizing::MODAL_WIDTH * surface.scale.max(0.0)))
    .style(styles::container::modal_surface(alpha));

    let backdrop = container(mouse_area(card).on_press(Message::Swallow))
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(styles::container::backdrop(opacity::BACKDROP * alpha));

    mouse_area(backdrop).on_press(Message::Close).into()
}

fn dots<'a>(modal: &CarouselModal) -> Element<'a, Message> {
    Row::with_children(modal.dots().into_iter().map(|dot| -> Element<'a, Message> {
        button(text(""))
            .width(Length::Fixed(sizing::DOT))
            .height(Length::Fixed(sizing::DOT))
            .on_press(Message::GoTo(dot.index))
            .style(styles::button::dot(dot.active))
            .into()
    }))
    .spacing(spacing::XS)
    .align_y(iced::Alignment::Center)
    .into()
}

fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}
