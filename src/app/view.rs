// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The presentation replaces the gallery while a slide is open.

use super::{App, Message};
use crate::ui::design_tokens::spacing;
use crate::ui::{gallery, notice, presentation};
use iced::widget::{Column, Container};
use iced::{Element, Length};

/// Renders the current application view.
pub(super) fn view(app: &App) -> Element<'_, Message> {
    let len = app.discovery.slide_count();
    let colors = app.theme_mode.colors();

    if let (Some(index), Some(position)) = (
        app.slideshow.current_index(),
        app.slideshow.position(len),
    ) {
        return presentation::view(presentation::ViewContext {
            i18n: &app.i18n,
            colors,
            position,
            slide: app.images.get(&index),
            can_go_previous: app.slideshow.can_go_previous(),
            can_go_next: app.slideshow.can_go_next(len),
        })
        .map(Message::Presentation);
    }

    let gallery = gallery::view(gallery::ViewContext {
        i18n: &app.i18n,
        colors,
        discovery: &app.discovery,
        images: &app.images,
        condition: &app.config.deck.condition,
        upcoming: &app.config.deck.upcoming,
        companion_available: app.source.is_some()
            && app.config.companion.document_location().is_some(),
        timed_out: app.report.map_or(0, |report| report.timed_out),
        disclaimer: app.config.deck.disclaimer.as_deref(),
    })
    .map(Message::Gallery);

    let mut column = Column::new().push(
        Container::new(gallery)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    if let Some(current) = &app.notice {
        let line = notice::view(current, &app.i18n, &colors, Message::DismissNotice);
        column = column.push(Container::new(line).padding(spacing::XS));
    }

    Container::new(column.width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
