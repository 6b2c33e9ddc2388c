// SPDX-License-Identifier: MPL-2.0
//! Gallery screen: a grid of discovered slides.
//!
//! The gallery is read-only over the discovery result. Selecting a card asks
//! the app to open the presentation at that index.

use crate::domain::slides::DiscoveryState;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::slide_image::SlideImage;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, container, image, scrollable, Column, Container, Row, Text};
use iced::{alignment, Border, Color, ContentFit, Element, Length};
use std::collections::HashMap;

/// Messages emitted by the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The card at this index was clicked.
    SlideSelected(usize),
    /// The companion document button was clicked.
    DownloadCompanion,
}

/// Everything the gallery needs to render.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: ColorScheme,
    pub discovery: &'a DiscoveryState,
    pub images: &'a HashMap<usize, SlideImage>,
    /// Condition name shown in the title.
    pub condition: &'a str,
    /// Conditions rendered as disabled "coming soon" buttons.
    pub upcoming: &'a [String],
    /// Whether a companion document is configured.
    pub companion_available: bool,
    /// Probes abandoned after the timeout during discovery.
    pub timed_out: usize,
    /// Configured footer disclaimer, see [`disclaimer_text`].
    pub disclaimer: Option<&'a str>,
}

/// Renders the gallery.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;
    let colors = ctx.colors;

    let title = Text::new(
        i18n.tr_with_args("gallery-title", &[("condition", ctx.condition.into())]),
    )
    .size(typography::TITLE_LG);

    let mut content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::XL)
        .width(Length::Fill)
        .push(title);

    if !ctx.upcoming.is_empty() {
        content = content.push(upcoming_section(i18n, ctx.upcoming));
    }

    content = match ctx.discovery {
        DiscoveryState::Discovering => {
            content.push(status_line(i18n.tr("gallery-discovering"), &colors))
        }
        DiscoveryState::Empty => content.push(status_line(i18n.tr("gallery-empty"), &colors)),
        DiscoveryState::Ready(sequence) => content
            .push(
                Text::new(i18n.tr("gallery-subtitle"))
                    .size(typography::BODY)
                    .color(colors.text_secondary),
            )
            .push(
                Text::new(
                    i18n.tr_with_args("gallery-summary", &[("count", sequence.len().into())]),
                )
                .size(typography::CAPTION),
            )
            .push(grid(i18n, &colors, sequence.len(), ctx.images))
            .push(
                Text::new(i18n.tr("gallery-hint-keys"))
                    .size(typography::CAPTION)
                    .color(colors.text_secondary),
            ),
    };

    if ctx.timed_out > 0 {
        content = content.push(
            Text::new(i18n.tr_with_args("gallery-timed-out", &[("count", ctx.timed_out.into())]))
                .size(typography::CAPTION)
                .color(colors.error),
        );
    }

    if ctx.companion_available {
        content = content.push(
            button(Text::new(i18n.tr("companion-download")))
                .padding([spacing::SM, spacing::LG])
                .style(button::primary)
                .on_press(Message::DownloadCompanion),
        );
    }

    if let Some(disclaimer) = disclaimer_text(i18n, ctx.disclaimer) {
        content = content.push(
            Text::new(disclaimer)
                .size(typography::CAPTION)
                .color(colors.text_secondary),
        );
    }

    scrollable(content).height(Length::Fill).into()
}

/// Resolves the footer disclaimer.
///
/// Without a configured text the localized default is used; a blank one hides
/// the footer.
#[must_use]
pub fn disclaimer_text(i18n: &I18n, configured: Option<&str>) -> Option<String> {
    let body = match configured.map(str::trim) {
        None => i18n.tr("gallery-disclaimer"),
        Some("") => return None,
        Some(text) => text.to_string(),
    };
    Some(format!("{} {body}", i18n.tr("gallery-disclaimer-label")))
}

fn status_line<'a>(label: String, colors: &ColorScheme) -> Element<'a, Message> {
    Container::new(
        Text::new(label)
            .size(typography::TITLE_MD)
            .color(colors.text_secondary),
    )
    .width(Length::Fill)
    .padding(spacing::XL)
    .align_x(alignment::Horizontal::Center)
    .into()
}

fn upcoming_section<'a>(i18n: &I18n, upcoming: &'a [String]) -> Element<'a, Message> {
    let mut rows = Column::new().spacing(spacing::XS).push(
        Text::new(i18n.tr("gallery-upcoming-title")).size(typography::BODY),
    );

    for chunk in upcoming.chunks(4) {
        let mut line = Row::new().spacing(spacing::XS);
        for condition in chunk {
            let label =
                i18n.tr_with_args("gallery-upcoming-soon", &[("condition", condition.as_str().into())]);
            // No on_press: rendered disabled.
            line = line.push(
                button(Text::new(label).size(typography::CAPTION)).style(button::secondary),
            );
        }
        rows = rows.push(line);
    }

    rows.into()
}

fn grid<'a>(
    i18n: &I18n,
    colors: &ColorScheme,
    len: usize,
    images: &'a HashMap<usize, SlideImage>,
) -> Element<'a, Message> {
    let indices: Vec<usize> = (0..len).collect();
    let mut rows = Column::new().spacing(spacing::MD);

    for chunk in indices.chunks(sizing::GALLERY_COLUMNS) {
        let mut line = Row::new().spacing(spacing::MD);
        for &index in chunk {
            line = line.push(card(i18n, colors, index, images.get(&index)));
        }
        rows = rows.push(line);
    }

    rows.into()
}

fn card<'a>(
    i18n: &I18n,
    colors: &ColorScheme,
    index: usize,
    slide: Option<&'a SlideImage>,
) -> Element<'a, Message> {
    let thumbnail: Element<'a, Message> = match slide {
        Some(SlideImage::Ready(handle)) => image(handle.clone())
            .width(Length::Fixed(sizing::THUMBNAIL_WIDTH))
            .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
            .content_fit(ContentFit::Contain)
            .into(),
        Some(SlideImage::Unavailable) => {
            placeholder(i18n.tr("gallery-slide-unavailable"), colors.border)
        }
        Some(SlideImage::Loading) | None => {
            placeholder(i18n.tr("gallery-slide-loading"), colors.border)
        }
    };

    let label = Text::new(i18n.tr_with_args(
        "gallery-slide-label",
        &[("number", (index + 1).into())],
    ))
    .size(typography::BODY);

    let body = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(thumbnail)
        .push(label);

    button(body)
        .padding(spacing::XS)
        .style(button::text)
        .on_press(Message::SlideSelected(index))
        .into()
}

fn placeholder<'a>(label: String, border: Color) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::CAPTION))
        .center_x(Length::Fixed(sizing::THUMBNAIL_WIDTH))
        .center_y(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
        .style(move |_theme| container::Style {
            border: Border {
                color: border,
                width: 1.0,
                radius: radius::MD.into(),
            },
            ..container::Style::default()
        })
        .into()
}
