// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! screen takes a `ViewContext` and emits its own `Message` type, which the
//! app maps into its top-level message.
//!
//! # Screens
//!
//! - [`gallery`] - Grid of discovered slides
//! - [`presentation`] - Fullscreen slide with navigation controls
//!
//! # Shared Infrastructure
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`notice`] - Status line for user feedback
//! - [`slide_image`] - Per-slide image load state

pub mod design_tokens;
pub mod gallery;
pub mod notice;
pub mod presentation;
pub mod slide_image;
pub mod theming;
