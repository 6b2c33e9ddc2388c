// SPDX-License-Identifier: MPL-2.0
//! Single-line status notices shown under the gallery.
//!
//! A notice stores an i18n key and its arguments; the text is resolved at
//! render time so a locale switch re-translates it.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, spacing, typography};
use crate::ui::theming::ColorScheme;
use fluent_bundle::FluentValue;
use iced::widget::{button, container, row, text, Container};
use iced::{Border, Color, Element, Length};

/// Severity level determines visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Error,
}

impl Severity {
    #[must_use]
    pub fn color(self, colors: &ColorScheme) -> Color {
        match self {
            Severity::Success => colors.success,
            Severity::Warning => colors.warning,
            Severity::Error => colors.error,
        }
    }
}

/// A notice to be displayed to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    severity: Severity,
    message_key: String,
    message_args: Vec<(String, String)>,
}

impl Notice {
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            severity,
            message_key: message_key.into(),
            message_args: Vec::new(),
        }
    }

    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    /// Adds an argument for message interpolation.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    /// Resolves the message through `i18n`.
    #[must_use]
    pub fn text(&self, i18n: &I18n) -> String {
        if self.message_args.is_empty() {
            return i18n.tr(&self.message_key);
        }
        let args: Vec<(&str, FluentValue<'_>)> = self
            .message_args
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str().into()))
            .collect();
        i18n.tr_with_args(&self.message_key, &args)
    }
}

/// Renders `notice` with a dismiss button emitting `on_dismiss`.
pub fn view<'a, Message: Clone + 'a>(
    notice: &Notice,
    i18n: &I18n,
    colors: &ColorScheme,
    on_dismiss: Message,
) -> Element<'a, Message> {
    let accent = notice.severity().color(colors);
    let content = row![
        text(notice.text(i18n)).size(typography::BODY).width(Length::Fill),
        button(text("×").size(typography::BODY))
            .on_press(on_dismiss)
            .style(button::text),
    ]
    .spacing(spacing::SM)
    .align_y(iced::Alignment::Center);

    Container::new(content)
        .padding(spacing::XS)
        .width(Length::Fill)
        .style(move |_theme| container::Style {
            border: Border {
                color: accent,
                width: 1.0,
                radius: radius::SM.into(),
            },
            ..container::Style::default()
        })
        .into()
}
