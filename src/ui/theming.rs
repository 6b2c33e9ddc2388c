// SPDX-License-Identifier: MPL-2.0
//! Theme selection.

use crate::ui::design_tokens::{opacity, palette};
use iced::Color;
use serde::{Deserialize, Serialize};

/// Colors the custom widget styles draw from.
#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    /// Subtitles, hints and status lines.
    pub text_secondary: Color,
    /// Outline of slide placeholders.
    pub border: Color,

    pub error: Color,
    pub warning: Color,
    pub success: Color,

    /// Fullscreen presentation backdrop.
    pub backdrop: Color,
    pub backdrop_text: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            text_secondary: palette::GRAY_700,
            border: palette::GRAY_200,
            error: palette::ERROR_500,
            warning: palette::PRIMARY_500,
            success: palette::SUCCESS_500,
            backdrop: Color {
                a: opacity::BACKDROP,
                ..palette::BLACK
            },
            backdrop_text: palette::WHITE,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            text_secondary: palette::GRAY_200,
            border: palette::GRAY_700,
            error: palette::ERROR_500,
            warning: palette::PRIMARY_400,
            success: palette::SUCCESS_500,
            backdrop: Color {
                a: opacity::BACKDROP,
                ..palette::BLACK
            },
            backdrop_text: palette::WHITE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    /// Resolves the mode to a concrete iced theme.
    #[must_use]
    pub fn to_iced(self) -> iced::Theme {
        if self.is_dark() {
            iced::Theme::Dark
        } else {
            iced::Theme::Light
        }
    }

    #[must_use]
    pub fn colors(self) -> ColorScheme {
        if self.is_dark() {
            ColorScheme::dark()
        } else {
            ColorScheme::light()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secondary_text_contrasts_with_theme() {
        assert!(ColorScheme::light().text_secondary.r < 0.5); // Dark on light
        assert!(ColorScheme::dark().text_secondary.r > 0.5); // Light on dark
    }

    #[test]
    fn status_colors_are_distinct() {
        for scheme in [ColorScheme::light(), ColorScheme::dark()] {
            assert_ne!(scheme.error, scheme.success);
            assert_ne!(scheme.error, scheme.warning);
        }
    }

    #[test]
    fn backdrop_is_dark_in_both_schemes() {
        for scheme in [ColorScheme::light(), ColorScheme::dark()] {
            assert!(scheme.backdrop.r < 0.1);
            assert!(scheme.backdrop.a > 0.9);
        }
    }

    #[test]
    fn theme_mode_is_dark_returns_correct_values() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        assert_eq!(ThemeMode::Light.to_iced(), iced::Theme::Light);
        assert_eq!(ThemeMode::Dark.to_iced(), iced::Theme::Dark);
        // System mode depends on actual system theme, so we just verify it doesn't panic
        let _ = ThemeMode::System.is_dark();
    }

    #[test]
    fn theme_mode_serializes_lowercase() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            mode: ThemeMode,
        }
        let text = toml::to_string(&Wrapper {
            mode: ThemeMode::Dark,
        })
        .expect("serialize");
        assert!(text.contains("\"dark\""));
        let parsed: Wrapper = toml::from_str("mode = \"light\"").expect("deserialize");
        assert_eq!(parsed.mode, ThemeMode::Light);
    }
}
