// SPDX-License-Identifier: MPL-2.0
//! Naming templates that map a slide number to an asset location.

use super::newtypes::SlideNumber;
use std::fmt;
use std::str::FromStr;

/// Placeholder replaced with the zero-padded slide number.
pub const PLACEHOLDER: &str = "{NN}";

/// Errors produced when parsing a naming template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// The template is empty or whitespace only.
    Empty,
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::Empty => write!(f, "naming template is empty"),
        }
    }
}

impl std::error::Error for TemplateError {}

/// A parameterized asset location such as `/slides/deck-{NN}.png`.
///
/// A template without [`PLACEHOLDER`] names a single fixed location; it still
/// expands once per slide number and the duplicates collapse during discovery.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamingTemplate(String);

impl NamingTemplate {
    /// Parses a template, trimming surrounding whitespace.
    pub fn parse(raw: &str) -> Result<Self, TemplateError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TemplateError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the template text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true when the template contains the slide placeholder.
    #[must_use]
    pub fn is_parameterized(&self) -> bool {
        self.0.contains(PLACEHOLDER)
    }

    /// Substitutes `number` into every placeholder occurrence.
    #[must_use]
    pub fn expand(&self, number: SlideNumber) -> String {
        self.0.replace(PLACEHOLDER, &number.padded())
    }
}

impl FromStr for NamingTemplate {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for NamingTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slide(n: u32) -> SlideNumber {
        SlideNumber::new(n).expect("non-zero slide number")
    }

    #[test]
    fn parse_rejects_blank_templates() {
        assert_eq!(NamingTemplate::parse(""), Err(TemplateError::Empty));
        assert_eq!(NamingTemplate::parse("   "), Err(TemplateError::Empty));
    }

    #[test]
    fn expand_pads_slide_number() {
        let template: NamingTemplate = "/education-assets/adhd/ADHD{NN}.png"
            .parse()
            .expect("valid template");
        assert_eq!(template.expand(slide(4)), "/education-assets/adhd/ADHD04.png");
        assert_eq!(template.expand(slide(12)), "/education-assets/adhd/ADHD12.png");
    }

    #[test]
    fn expand_replaces_every_placeholder() {
        let template = NamingTemplate::parse("deck-{NN}/slide-{NN}.png").expect("valid template");
        assert_eq!(template.expand(slide(3)), "deck-03/slide-03.png");
    }

    #[test]
    fn fixed_template_expands_to_itself() {
        let template = NamingTemplate::parse("/cover.png").expect("valid template");
        assert!(!template.is_parameterized());
        assert_eq!(template.expand(slide(1)), "/cover.png");
        assert_eq!(template.expand(slide(2)), "/cover.png");
    }
}
