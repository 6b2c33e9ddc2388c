// SPDX-License-Identifier: MPL-2.0
//! Fullscreen presentation of one slide.
//!
//! Layout, top to bottom: position counter and close button, the slide with
//! previous/next buttons at its sides, then a usage hint. Previous and next
//! are only shown when the move is possible. Clicking the slide itself
//! advances.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::slide_image::SlideImage;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, container, image, mouse_area, Column, Container, Row, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Messages emitted by the presentation surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Close,
    Previous,
    Next,
    /// The slide itself was clicked.
    SlideClicked,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: ColorScheme,
    /// One-based position and total.
    pub position: (usize, usize),
    pub slide: Option<&'a SlideImage>,
    pub can_go_previous: bool,
    pub can_go_next: bool,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;
    let text_color = ctx.colors.backdrop_text;
    let (current, total) = ctx.position;

    let counter = Text::new(i18n.tr_with_args(
        "presentation-counter",
        &[("current", current.into()), ("total", total.into())],
    ))
    .size(typography::TITLE_MD)
    .color(text_color);

    let header = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(Container::new(counter).width(Length::Fill))
        .push(
            button(Text::new(i18n.tr("presentation-close")))
                .style(button::secondary)
                .on_press(Message::Close),
        );

    let slide: Element<'_, Message> = match ctx.slide.and_then(SlideImage::handle) {
        Some(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Contain)
            .into(),
        None => Container::new(
            Text::new(i18n.tr("gallery-slide-loading")).color(text_color),
        )
        .center(Length::Fill)
        .into(),
    };

    let mut stage = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .height(Length::Fill);
    if ctx.can_go_previous {
        stage = stage.push(
            button(Text::new(i18n.tr("presentation-previous")))
                .style(button::secondary)
                .on_press(Message::Previous),
        );
    }
    stage = stage.push(
        mouse_area(Container::new(slide).width(Length::Fill).height(Length::Fill))
            .on_press(Message::SlideClicked),
    );
    if ctx.can_go_next {
        stage = stage.push(
            button(Text::new(i18n.tr("presentation-next")))
                .style(button::secondary)
                .on_press(Message::Next),
        );
    }

    let hint = Text::new(i18n.tr("presentation-hint"))
        .size(typography::CAPTION)
        .color(text_color);

    let content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .push(header)
        .push(stage)
        .push(Container::new(hint).center_x(Length::Fill));

    let backdrop = ctx.colors.backdrop;
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_theme| container::Style {
            background: Some(backdrop.into()),
            text_color: Some(text_color),
            ..container::Style::default()
        })
        .into()
}
